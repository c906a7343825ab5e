use profile_codec::{AttrValue, Envelope, ValueKind};
use profile_model::User;
use profile_types::CodeType;
use std::collections::BTreeMap;

fn make_user() -> User {
    User::new(CodeType::Phone, "13800000000", "hash", "Zhang San")
}

#[test]
fn empty_bag_decodes_to_empty_map() {
    let user = make_user();
    assert!(user.decode_options().unwrap().is_empty());
}

#[test]
fn set_and_decode_roundtrip() {
    let mut bag = BTreeMap::new();
    bag.insert("nickname".to_string(), AttrValue::from("momo"));
    bag.insert("counsel_sessions".to_string(), AttrValue::from(4i32));
    bag.insert("consented".to_string(), AttrValue::from(true));
    bag.insert("risk_score".to_string(), AttrValue::from(0.82f64));

    let mut user = make_user();
    user.set_options(&bag);
    assert_eq!(user.decode_options().unwrap(), bag);
}

#[test]
fn set_options_replaces_previous_bag() {
    let mut user = make_user();
    user.set_options(&BTreeMap::from([("a".to_string(), AttrValue::from(1i32))]));
    user.set_options(&BTreeMap::from([("b".to_string(), AttrValue::from(2i64))]));

    let bag = user.decode_options().unwrap();
    assert_eq!(bag.len(), 1);
    assert_eq!(bag.get("b"), Some(&AttrValue::I64(2)));
}

#[test]
fn options_survive_document_serde() {
    let mut user = make_user();
    user.set_options(&BTreeMap::from([
        ("tag".to_string(), AttrValue::from("x")),
        ("weight".to_string(), AttrValue::from(1.5f32)),
    ]));

    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back.decode_options().unwrap(), user.decode_options().unwrap());
}

#[test]
fn stored_bag_uses_envelope_shape() {
    let mut user = make_user();
    user.set_options(&BTreeMap::from([("n".to_string(), AttrValue::from(7i32))]));

    let doc = serde_json::to_value(&user).unwrap();
    assert_eq!(doc["option"]["n"]["kind"], "int32");
    assert_eq!(doc["option"]["n"]["payload"], serde_json::json!([0, 0, 0, 7]));
}

#[test]
fn corrupt_envelope_rejects_whole_bag() {
    let mut user = make_user();
    user.options.insert(
        "good".to_string(),
        profile_codec::encode(&AttrValue::from(true)),
    );
    user.options.insert(
        "bad".to_string(),
        Envelope {
            kind: ValueKind::I64,
            payload: vec![0, 1],
        },
    );
    assert!(user.decode_options().is_err());
}
