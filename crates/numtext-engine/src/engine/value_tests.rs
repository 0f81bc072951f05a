use serde_json::json;

use numtext_core::SectionField;

use super::Value;

fn record() -> Value {
    Value::Object(vec![
        ("head".into(), Value::Null),
        ("body".into(), Value::Array(vec![Value::from("1.5")])),
        ("tail".into(), Value::Null),
    ])
}

#[test]
fn serializes_in_field_order() {
    let text = serde_json::to_string(&record()).unwrap();
    assert_eq!(text, r#"{"head":null,"body":["1.5"],"tail":null}"#);
}

#[test]
fn null_string_and_array() {
    assert_eq!(serde_json::to_value(Value::Null).unwrap(), json!(null));
    assert_eq!(serde_json::to_value(Value::from("-0.0")).unwrap(), json!("-0.0"));
    assert_eq!(
        serde_json::to_value(Value::from(vec![Value::Null, "x".into()])).unwrap(),
        json!([null, "x"])
    );
}

#[test]
fn accessors() {
    let value = record();
    assert!(value.get("head").unwrap().is_null());
    assert!(value.get("missing").is_none());
    assert_eq!(
        value.section(SectionField::Body).and_then(Value::as_array).map(<[Value]>::len),
        Some(1)
    );
    assert_eq!(Value::from("7").as_str(), Some("7"));
    assert_eq!(Value::Null.as_str(), None);
    assert!(Value::from("7").get("head").is_none());
    assert!(Value::default().is_null());
}
