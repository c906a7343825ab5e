use pretty_assertions::assert_eq;
use profile_codec::{AttrValue, CodecError, Envelope, ValueKind, decode, decode_map, encode, encode_map};
use std::collections::BTreeMap;

// ── Scalar round-trips ────────────────────────────────────────────

#[test]
fn string_roundtrip() {
    let v = AttrValue::Str("héllo wörld".to_string());
    assert_eq!(decode(&encode(&v)).unwrap(), v);
}

#[test]
fn empty_string_roundtrip() {
    let v = AttrValue::Str(String::new());
    assert_eq!(decode(&encode(&v)).unwrap(), v);
}

#[test]
fn bool_roundtrip() {
    for b in [true, false] {
        let v = AttrValue::Bool(b);
        assert_eq!(decode(&encode(&v)).unwrap(), v);
    }
}

#[test]
fn i32_roundtrip_extremes() {
    for n in [0, 1, -1, i32::MIN, i32::MAX] {
        let v = AttrValue::I32(n);
        assert_eq!(decode(&encode(&v)).unwrap(), v);
    }
}

#[test]
fn i64_roundtrip_extremes() {
    for n in [0, -1, i64::MIN, i64::MAX, 1_700_000_000_000] {
        let v = AttrValue::I64(n);
        assert_eq!(decode(&encode(&v)).unwrap(), v);
    }
}

#[test]
fn f32_roundtrip_is_bit_exact() {
    for n in [0.0f32, -0.0, 1.5, f32::MIN_POSITIVE, f32::INFINITY, f32::NEG_INFINITY] {
        let v = AttrValue::F32(n);
        assert!(decode(&encode(&v)).unwrap().bit_eq(&v));
    }
}

#[test]
fn f64_roundtrip_is_bit_exact() {
    for n in [0.0f64, -0.0, 2.5e300, f64::EPSILON, f64::INFINITY] {
        let v = AttrValue::F64(n);
        assert!(decode(&encode(&v)).unwrap().bit_eq(&v));
    }
}

#[test]
fn nan_payload_survives_roundtrip() {
    // A non-canonical NaN bit pattern must come back unchanged.
    let weird_nan = f64::from_bits(0x7ff8_dead_beef_0001);
    let v = AttrValue::F64(weird_nan);
    let back = decode(&encode(&v)).unwrap();
    assert!(back.bit_eq(&v));
    match back {
        AttrValue::F64(f) => assert_eq!(f.to_bits(), 0x7ff8_dead_beef_0001),
        other => panic!("wrong kind: {other:?}"),
    }
}

#[test]
fn f32_is_not_widened_to_f64() {
    let v = AttrValue::F32(0.1);
    let env = encode(&v);
    assert_eq!(env.kind, ValueKind::F32);
    assert_eq!(env.payload.len(), 4);
    assert_eq!(decode(&env).unwrap().kind(), ValueKind::F32);
}

// ── Wire shape ────────────────────────────────────────────────────

#[test]
fn payload_widths_are_natural() {
    assert_eq!(encode(&AttrValue::Bool(true)).payload, vec![1]);
    assert_eq!(encode(&AttrValue::I32(1)).payload.len(), 4);
    assert_eq!(encode(&AttrValue::I64(1)).payload.len(), 8);
    assert_eq!(encode(&AttrValue::F32(1.0)).payload.len(), 4);
    assert_eq!(encode(&AttrValue::F64(1.0)).payload.len(), 8);
}

#[test]
fn integers_encode_big_endian() {
    assert_eq!(encode(&AttrValue::I32(1)).payload, vec![0, 0, 0, 1]);
}

#[test]
fn string_payload_is_utf8_bytes() {
    let env = encode(&AttrValue::Str("ab".to_string()));
    assert_eq!(env.kind, ValueKind::Str);
    assert_eq!(env.payload, b"ab".to_vec());
}

#[test]
fn envelope_serde_uses_wire_tags() {
    let env = encode(&AttrValue::I32(7));
    let json = serde_json::to_string(&env).unwrap();
    assert_eq!(json, r#"{"kind":"int32","payload":[0,0,0,7]}"#);
    let back: Envelope = serde_json::from_str(&json).unwrap();
    assert_eq!(back, env);
}

#[test]
fn envelope_serde_tags_cover_all_kinds() {
    let tags = [
        (AttrValue::Str(String::new()), "string"),
        (AttrValue::Bool(false), "bool"),
        (AttrValue::I32(0), "int32"),
        (AttrValue::I64(0), "int64"),
        (AttrValue::F32(0.0), "float32"),
        (AttrValue::F64(0.0), "float64"),
    ];
    for (value, tag) in tags {
        let json = serde_json::to_value(encode(&value)).unwrap();
        assert_eq!(json["kind"], tag);
    }
}

// ── Corrupt envelopes ─────────────────────────────────────────────

#[test]
fn truncated_i64_payload_is_rejected() {
    let env = Envelope {
        kind: ValueKind::I64,
        payload: vec![0, 0, 0],
    };
    assert!(matches!(
        decode(&env),
        Err(CodecError::PayloadLength { expected: 8, len: 3, .. })
    ));
}

#[test]
fn oversized_f32_payload_is_rejected() {
    let env = Envelope {
        kind: ValueKind::F32,
        payload: vec![0; 8],
    };
    assert!(matches!(decode(&env), Err(CodecError::PayloadLength { .. })));
}

#[test]
fn invalid_utf8_string_is_rejected() {
    let env = Envelope {
        kind: ValueKind::Str,
        payload: vec![0xff, 0xfe],
    };
    assert!(matches!(decode(&env), Err(CodecError::InvalidUtf8(_))));
}

#[test]
fn bool_byte_out_of_range_is_rejected() {
    let env = Envelope {
        kind: ValueKind::Bool,
        payload: vec![2],
    };
    assert!(matches!(decode(&env), Err(CodecError::InvalidBool(2))));
}

#[test]
fn empty_bool_payload_is_rejected() {
    let env = Envelope {
        kind: ValueKind::Bool,
        payload: vec![],
    };
    assert!(matches!(decode(&env), Err(CodecError::PayloadLength { .. })));
}

// ── Maps ──────────────────────────────────────────────────────────

#[test]
fn empty_map_encodes_to_empty_map() {
    let out = encode_map(&BTreeMap::new());
    assert!(out.is_empty());
}

#[test]
fn empty_map_decodes_to_empty_map() {
    let out = decode_map(&BTreeMap::new()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn mixed_kind_map_roundtrip() {
    let mut bag = BTreeMap::new();
    bag.insert("nickname".to_string(), AttrValue::from("momo"));
    bag.insert("notify".to_string(), AttrValue::from(true));
    bag.insert("score".to_string(), AttrValue::from(98i32));
    bag.insert("visits".to_string(), AttrValue::from(1_234_567_890_123i64));
    bag.insert("ratio32".to_string(), AttrValue::from(0.25f32));
    bag.insert("ratio64".to_string(), AttrValue::from(0.125f64));

    let stored = encode_map(&bag);
    assert_eq!(stored.len(), bag.len());
    let back = decode_map(&stored).unwrap();
    assert_eq!(back, bag);
}

#[test]
fn decode_map_is_fail_fast() {
    let mut stored = encode_map(&BTreeMap::from([
        ("good".to_string(), AttrValue::from(1i32)),
    ]));
    stored.insert(
        "bad".to_string(),
        Envelope {
            kind: ValueKind::I32,
            payload: vec![1],
        },
    );
    // One corrupt entry rejects the whole map; nothing is silently dropped.
    assert!(decode_map(&stored).is_err());
}
