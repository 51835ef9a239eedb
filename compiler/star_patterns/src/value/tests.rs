use super::*;
use pretty_assertions::assert_eq;

#[test]
fn strict_equality_on_primitives() {
    assert!(Value::Number(1.0).strict_equals(&Value::Number(1.0)));
    assert!(Value::Number(0.0).strict_equals(&Value::Number(-0.0)));
    assert!(!Value::Number(f64::NAN).strict_equals(&Value::Number(f64::NAN)));
    assert!(Value::string("a").strict_equals(&Value::string("a")));
    assert!(!Value::string("1").strict_equals(&Value::Number(1.0)));
    assert!(Value::Undefined.strict_equals(&Value::Undefined));
    assert!(!Value::Undefined.strict_equals(&Value::Null));
}

#[test]
fn strict_equality_on_heap_values_is_identity() {
    let a = Value::array(vec![Value::Number(1.0)]);
    let b = Value::array(vec![Value::Number(1.0)]);
    assert!(a.strict_equals(&a.clone()));
    assert!(!a.strict_equals(&b));
    // Structural equality still holds.
    assert_eq!(a, b);
}

#[test]
fn loose_equality() {
    assert!(Value::Null.loose_equals(&Value::Undefined));
    assert!(Value::string("1").loose_equals(&Value::Number(1.0)));
    assert!(Value::Bool(true).loose_equals(&Value::Number(1.0)));
    assert!(!Value::Null.loose_equals(&Value::Number(0.0)));
}

#[test]
fn truthiness() {
    assert!(!Value::Undefined.is_truthy());
    assert!(!Value::Number(0.0).is_truthy());
    assert!(!Value::Number(f64::NAN).is_truthy());
    assert!(!Value::string("").is_truthy());
    assert!(Value::string("0").is_truthy());
    assert!(Value::array(Vec::new()).is_truthy());
}

#[test]
fn array_properties() {
    let v = Value::array(vec![Value::string("a"), Value::string("b")]);
    assert_eq!(v.property("length"), Some(Value::Number(2.0)));
    assert_eq!(v.property("1"), Some(Value::string("b")));
    assert_eq!(v.property("01"), None);
    assert_eq!(v.property("2"), None);
}

#[test]
fn string_properties_and_iteration() {
    let v = Value::string("hé");
    assert_eq!(v.property("length"), Some(Value::Number(2.0)));
    assert_eq!(v.property("1"), Some(Value::string("é")));
    assert_eq!(
        v.iter_elements(),
        Some(vec![Value::string("h"), Value::string("é")])
    );
    assert_eq!(Value::Number(3.0).iter_elements(), None);
}

#[test]
fn object_insert_keeps_first_position() {
    let mut obj = ObjectValue::new();
    obj.insert("a", Value::Number(1.0));
    obj.insert("b", Value::Number(2.0));
    obj.insert("a", Value::Number(3.0));
    let keys: Vec<&str> = obj.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(obj.get("a"), Some(&Value::Number(3.0)));
}

#[test]
fn display_forms() {
    let obj = Value::object_from([
        ("foo", Value::Number(1.0)),
        ("bar", Value::array(vec![Value::string("c"), Value::Null])),
    ]);
    assert_eq!(obj.to_string(), r#"{ foo: 1, bar: ["c", null] }"#);
    assert_eq!(Value::string("plain").to_string(), "plain");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::object(ObjectValue::new()).to_string(), "{}");

    let tagged = Value::object(ObjectValue::new().with_tag("Duck"));
    assert_eq!(tagged.to_string(), "Duck {}");
    assert_eq!(tagged.tag(), Some("Duck"));
}

#[test]
fn type_names() {
    assert_eq!(Value::Null.type_of(), "object");
    assert_eq!(Value::Null.type_name(), "null");
    let f = Value::native("id", |args| Ok(args.first().cloned().unwrap_or(Value::Undefined)));
    assert_eq!(f.type_of(), "function");
    assert_eq!(f.to_string(), "[Function: id]");
}

#[test]
fn own_entries_of_array() {
    let v = Value::array(vec![Value::Bool(true)]);
    assert_eq!(v.own_entries(), vec![("0".to_owned(), Value::Bool(true))]);
}
