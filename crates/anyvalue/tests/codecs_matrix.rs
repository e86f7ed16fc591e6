//! Decoding and encoding through every supported document format.

#![cfg(all(feature = "yaml", feature = "msgpack"))]

use std::io::Cursor;

use anyvalue::msgpack::MsgPackError;
use anyvalue::{CodecError, Error, Format, GenericValue, Value};

const CONFIG_JSON: &[u8] = br#"{"name":"svc","port":8080,"ratio":0.5,"debug":false,"tags":["a","b"],"db":{"hosts":["h1","h2"],"timeout":null}}"#;

const CONFIG_YAML: &[u8] = b"name: svc
port: 8080
ratio: 0.5
debug: false
tags:
  - a
  - b
db:
  hosts: [h1, h2]
  timeout: ~
";

fn assert_config(v: &GenericValue) {
    assert_eq!(v.child("name").as_string(None), "svc");
    assert_eq!(v.child("port").as_int(None), 8080);
    assert_eq!(v.child("ratio").as_float64(None), 0.5);
    assert!(v.child("debug").is_bool());
    assert!(!v.child("debug").as_bool(true));
    assert_eq!(v.child("tags").as_string_sequence(None), vec!["a", "b"]);
    assert_eq!(v.path("db.hosts").as_string_sequence(None), vec!["h1", "h2"]);
    assert!(v.path("db.timeout").is_null());
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[test]
fn json_decode_and_reencode_is_byte_stable() {
    let v = GenericValue::from_json(CONFIG_JSON).unwrap();
    assert_config(&v);
    assert_eq!(v.to_json().unwrap(), CONFIG_JSON.to_vec());
}

#[test]
fn json_keeps_numbers_as_text() {
    let v = GenericValue::from_json(br#"{"big":18446744073709551615,"f":1.10}"#).unwrap();
    assert_eq!(v.child("big").raw(), &Value::Number("18446744073709551615".into()));
    assert_eq!(v.child("big").try_uint64().unwrap(), u64::MAX);
    assert_eq!(v.child("f").raw(), &Value::Number("1.10".into()));
    assert_eq!(
        v.to_json().unwrap(),
        br#"{"big":18446744073709551615,"f":1.10}"#.to_vec()
    );
}

#[test]
fn json_reader_constructor() {
    let v = GenericValue::from_json_reader(Cursor::new(CONFIG_JSON)).unwrap();
    assert_config(&v);
}

#[test]
fn json_pretty() {
    let v = GenericValue::from_json(br#"{"a":{"b":true}}"#).unwrap();
    let pretty = String::from_utf8(v.to_json_pretty().unwrap()).unwrap();
    assert_eq!(pretty, "{\n  \"a\": {\n    \"b\": true\n  }\n}");
}

#[test]
fn json_scalar_roots() {
    assert!(GenericValue::from_json(b"null").unwrap().is_null());
    assert_eq!(GenericValue::from_json(b"\"s\"").unwrap().as_string(None), "s");
    assert_eq!(GenericValue::from_json(b"[1,2]").unwrap().index(1).as_int(None), 2);
}

#[test]
fn json_decode_errors() {
    let inputs: [&[u8]; 4] = [b"{", b"", b"{\"a\":}", b"[1] [2]"];
    for input in inputs {
        let err = GenericValue::from_json(input).unwrap_err();
        assert!(
            matches!(err, Error::Decode(CodecError::Json(_))),
            "input {:?}: {err}",
            String::from_utf8_lossy(input)
        );
        assert!(!err.is_type_mismatch());
    }
}

#[test]
fn json_rejects_non_finite_floats() {
    let mut v = GenericValue::new();
    v.set("ratio", f64::NAN);
    let err = v.to_json().unwrap_err();
    assert!(
        matches!(err, Error::Encode(CodecError::NonFiniteFloat(_))),
        "{err}"
    );
    assert!(GenericValue::from_raw(f64::NEG_INFINITY).to_json_pretty().is_err());
}

#[test]
fn absent_root_encodes_as_null() {
    assert_eq!(GenericValue::absent().to_json().unwrap(), b"null".to_vec());
}

// ---------------------------------------------------------------------------
// YAML
// ---------------------------------------------------------------------------

#[test]
fn yaml_decode() {
    let v = GenericValue::from_yaml(CONFIG_YAML).unwrap();
    assert_config(&v);
    assert_eq!(v.child("port").raw(), &Value::Int(8080));
}

#[test]
fn yaml_reader_constructor() {
    let v = GenericValue::from_yaml_reader(Cursor::new(CONFIG_YAML)).unwrap();
    assert_config(&v);
}

#[test]
fn yaml_roundtrip_is_structural() {
    let v = GenericValue::from_yaml(CONFIG_YAML).unwrap();
    let again = GenericValue::from_yaml(&v.to_yaml().unwrap()).unwrap();
    assert_eq!(again, v);
}

#[test]
fn json_to_yaml_keeps_native_numbers() {
    let v = GenericValue::from_json(CONFIG_JSON).unwrap();
    let yaml = GenericValue::from_yaml(&v.to_yaml().unwrap()).unwrap();
    assert_config(&yaml);
    assert_eq!(yaml.child("port").raw(), &Value::Int(8080));
    assert_eq!(yaml.child("ratio").raw(), &Value::Float(0.5));
}

#[test]
fn yaml_merge_keys_with_override() {
    let v = GenericValue::from_yaml(
        b"base: &b\n  host: db\n  port: 5432\nprod:\n  <<: *b\n  port: 6432\n",
    )
    .unwrap();
    assert_eq!(v.path("prod.host").as_string(None), "db");
    assert_eq!(v.path("prod.port").as_int(None), 6432);
    assert_eq!(v.path("base.port").as_int(None), 5432);
    assert!(!v.child("prod").as_map(None).contains_key("<<"));
}

#[test]
fn yaml_merge_keys_from_reader() {
    let text = b"defaults: &d\n  retries: 3\njobs:\n  - <<: *d\n    name: sync\n";
    let v = GenericValue::from_yaml_reader(Cursor::new(&text[..])).unwrap();
    let job = v.child("jobs").index(0);
    assert_eq!(job.child("retries").as_int(None), 3);
    assert_eq!(job.child("name").as_string(None), "sync");
}

#[test]
fn yaml_without_a_document_is_an_error() {
    let inputs: [&[u8]; 3] = [b"", b"\n   \n", b"# nothing here\n"];
    for input in inputs {
        let err = GenericValue::from_yaml(input).unwrap_err();
        assert!(matches!(err, Error::Decode(CodecError::EmptyDocument)), "{err}");
        assert!(GenericValue::from_yaml_reader(Cursor::new(input)).is_err());
    }
    assert!(GenericValue::from_yaml(b"null").unwrap().is_null());
}

#[test]
fn yaml_decode_errors() {
    let err = GenericValue::from_yaml(b"a: [1, 2").unwrap_err();
    assert!(matches!(err, Error::Decode(CodecError::Yaml(_))), "{err}");
}

// ---------------------------------------------------------------------------
// MessagePack
// ---------------------------------------------------------------------------

#[test]
fn msgpack_roundtrip_from_json() {
    let v = GenericValue::from_json(CONFIG_JSON).unwrap();
    let packed = v.to_msgpack().unwrap();
    let unpacked = GenericValue::from_msgpack(&packed).unwrap();
    assert_config(&unpacked);
    assert_eq!(unpacked.to_json().unwrap(), CONFIG_JSON.to_vec());
}

#[test]
fn msgpack_reader_constructor() {
    let packed = GenericValue::from_json(CONFIG_JSON).unwrap().to_msgpack().unwrap();
    let v = GenericValue::from_msgpack_reader(Cursor::new(packed)).unwrap();
    assert_config(&v);
}

#[test]
fn msgpack_binary_survives() {
    let mut v = GenericValue::new();
    v.set("blob", vec![0u8, 1, 254, 255]);
    let back = GenericValue::from_msgpack(&v.to_msgpack().unwrap()).unwrap();
    assert_eq!(back.child("blob").try_bytes().unwrap(), vec![0, 1, 254, 255]);
    assert_eq!(back.to_json().unwrap(), br#"{"blob":[0,1,254,255]}"#.to_vec());
}

#[test]
fn msgpack_non_string_keys_are_stringified() {
    // {1: "one", nil: "dropped"}
    let bytes = [0x82, 0x01, 0xa3, b'o', b'n', b'e', 0xc0, 0xa1, b'x'];
    let v = GenericValue::from_msgpack(&bytes).unwrap();
    assert_eq!(v.as_map(None).keys(), vec!["1"]);
    assert_eq!(v.child("1").as_string(None), "one");
}

#[test]
fn msgpack_decode_errors() {
    let cases: [(&[u8], MsgPackError); 4] = [
        (&[0xc1], MsgPackError::InvalidByte(0)),
        (&[0xc0, 0xc0], MsgPackError::TrailingBytes(1)),
        (&[0xd4, 0x01, 0x00], MsgPackError::UnsupportedExtension(1)),
        (&[0xa2, b'a'], MsgPackError::UnexpectedEof(1)),
    ];
    for (input, expected) in cases {
        match GenericValue::from_msgpack(input) {
            Err(Error::Decode(CodecError::MsgPack(err))) => assert_eq!(err, expected),
            other => panic!("input {input:?}: unexpected {other:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Format dispatch
// ---------------------------------------------------------------------------

#[test]
fn format_dispatch_matches_named_constructors() {
    for format in [Format::Json, Format::Yaml, Format::MsgPack] {
        let v = GenericValue::from_json(CONFIG_JSON).unwrap();
        let bytes = v.encode(format).unwrap();
        let back = GenericValue::decode(format, &bytes).unwrap();
        assert_config(&back);
    }
    assert_eq!(Format::Json.id(), "json");
    assert_eq!(Format::Yaml.id(), "yaml");
    assert_eq!(Format::MsgPack.id(), "msgpack");
}
