//! Conversions between template values and attribute values.
//!
//! Template values are dynamically typed; this is where their kind decides
//! which [`AttributeValue`] variant or [`ClassSet`] constructor applies.

use crate::object::{AttributesObject, ClassSetObject};
use attrset::{AttributeValue, ClassSet};
use minijinja::value::{Value, ValueKind};
use minijinja::{Error, ErrorKind};

/// Converts a template value into an attribute value.
///
/// - undefined and none remove the attribute, as `false` does
/// - integers stay integers, other numbers become floats
/// - sequences become lists; falsy items (none, undefined, `false`, `0`,
///   `NaN` and `''`) are skipped
/// - class set objects are kept as class sets
/// - anything else is stored as its string form
pub fn to_attribute_value(value: &Value) -> AttributeValue {
    if let Some(classes) = value.downcast_object_ref::<ClassSetObject>() {
        return AttributeValue::Class(classes.classes().clone());
    }

    match value.kind() {
        ValueKind::Undefined | ValueKind::None => AttributeValue::Bool(false),
        ValueKind::Bool => AttributeValue::Bool(value.is_true()),
        ValueKind::Number => number(value),
        ValueKind::String => AttributeValue::String(value.to_string()),
        ValueKind::Seq | ValueKind::Iterable => match value.try_iter() {
            Ok(items) => AttributeValue::List(items.filter_map(|item| list_item(&item)).collect()),
            Err(_) => AttributeValue::String(value.to_string()),
        },
        _ => AttributeValue::String(value.to_string()),
    }
}

fn number(value: &Value) -> AttributeValue {
    if let Ok(n) = i64::try_from(value.clone()) {
        return AttributeValue::Int(n);
    }
    match f64::try_from(value.clone()) {
        Ok(n) => AttributeValue::Float(n),
        Err(_) => AttributeValue::String(value.to_string()),
    }
}

/// The text of a list item, or `None` for items a list drops.
fn list_item(item: &Value) -> Option<String> {
    match item.kind() {
        ValueKind::Undefined | ValueKind::None => None,
        ValueKind::Bool => item.is_true().then(|| "true".to_string()),
        ValueKind::Number => match number(item) {
            AttributeValue::Int(0) => None,
            AttributeValue::Float(n) if n == 0.0 || n.is_nan() => None,
            n => Some(n.to_string()),
        },
        ValueKind::String => item.as_str().filter(|s| !s.is_empty()).map(str::to_string),
        _ => Some(item.to_string()),
    }
}

/// The text of a class token taken from a sequence.
fn token_text(item: &Value) -> Option<String> {
    match item.kind() {
        ValueKind::Undefined | ValueKind::None => None,
        ValueKind::Bool if !item.is_true() => None,
        _ => Some(scalar_text(item)),
    }
}

/// Booleans and numbers print the way attribute values do (`true`, `5`),
/// not in the template engine's own form.
fn scalar_text(value: &Value) -> String {
    match value.kind() {
        ValueKind::Bool => value.is_true().to_string(),
        ValueKind::Number => number(value).to_string(),
        _ => value.to_string(),
    }
}

/// Converts a template value into a class set, the way `addClass` and
/// `removeClass` read their arguments.
pub fn to_class_set(value: &Value) -> ClassSet {
    if let Some(classes) = value.downcast_object_ref::<ClassSetObject>() {
        return classes.classes().clone();
    }

    match value.kind() {
        ValueKind::Undefined | ValueKind::None => ClassSet::new(),
        ValueKind::String => ClassSet::parse(value.as_str().unwrap_or_default()),
        ValueKind::Seq | ValueKind::Iterable => match value.try_iter() {
            Ok(items) => ClassSet::from_tokens(items.filter_map(|item| token_text(&item))),
            Err(_) => ClassSet::from_scalar(scalar_text(value)),
        },
        _ => ClassSet::from_scalar(scalar_text(value)),
    }
}

/// Reads the entries of a mapping argument, in the mapping's order.
///
/// Accepts maps, other attribute objects, and none/undefined (no entries).
pub fn mapping_entries(mapping: &Value) -> Result<Vec<(String, AttributeValue)>, Error> {
    if let Some(other) = mapping.downcast_object_ref::<AttributesObject>() {
        return Ok(other
            .snapshot()
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect());
    }

    match mapping.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(Vec::new()),
        ValueKind::Map => {
            let mut entries = Vec::new();
            for key in mapping.try_iter()? {
                let value = mapping.get_item(&key)?;
                entries.push((key.to_string(), to_attribute_value(&value)));
            }
            Ok(entries)
        }
        kind => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("expected a map of attributes, got {}", kind),
        )),
    }
}

/// Converts an attribute value back into a template value.
pub fn to_value(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::String(s) => Value::from(s.as_str()),
        AttributeValue::Bool(b) => Value::from(*b),
        AttributeValue::Int(n) => Value::from(*n),
        AttributeValue::Float(n) => Value::from(*n),
        AttributeValue::List(items) => Value::from(items.clone()),
        AttributeValue::Class(classes) => Value::from_object(ClassSetObject::new(classes.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrset::AttributeSet;

    #[test]
    fn scalars() {
        assert_eq!(to_attribute_value(&Value::from("#")), AttributeValue::from("#"));
        assert_eq!(to_attribute_value(&Value::from(true)), AttributeValue::Bool(true));
        assert_eq!(to_attribute_value(&Value::from(false)), AttributeValue::Bool(false));
        assert_eq!(to_attribute_value(&Value::from(3)), AttributeValue::Int(3));
        assert_eq!(to_attribute_value(&Value::from(0.5)), AttributeValue::Float(0.5));
    }

    #[test]
    fn missing_values_remove() {
        assert!(to_attribute_value(&Value::UNDEFINED).is_removal());
        assert!(to_attribute_value(&Value::from(None::<bool>)).is_removal());
    }

    #[test]
    fn sequences_become_lists() {
        let value = Value::from(vec![
            Value::from("noopener"),
            Value::from(None::<bool>),
            Value::from(false),
            Value::from(2),
        ]);
        assert_eq!(
            to_attribute_value(&value),
            AttributeValue::List(vec!["noopener".to_string(), "2".to_string()])
        );
    }

    #[test]
    fn sequences_drop_falsy_items() {
        let value = Value::from(vec![
            Value::from("noopener"),
            Value::from(0),
            Value::from(""),
            Value::from(0.0),
            Value::from(f64::NAN),
            Value::from("noreferrer"),
        ]);
        assert_eq!(
            to_attribute_value(&value),
            AttributeValue::List(vec!["noopener".to_string(), "noreferrer".to_string()])
        );
    }

    #[test]
    fn sequence_scalars_use_attribute_text() {
        let value = Value::from(vec![Value::from(true), Value::from(1.0), Value::from(2.5)]);
        assert_eq!(
            to_attribute_value(&value),
            AttributeValue::List(vec!["true".to_string(), "1".to_string(), "2.5".to_string()])
        );
    }

    #[test]
    fn class_set_objects_round_trip() {
        let classes = ClassSet::parse("a b");
        let value = to_value(&AttributeValue::Class(classes.clone()));
        assert_eq!(to_attribute_value(&value), AttributeValue::Class(classes.clone()));
        assert_eq!(to_class_set(&value), classes);
    }

    #[test]
    fn class_sources() {
        assert_eq!(to_class_set(&Value::from("a  b")), ClassSet::parse("a b"));
        assert_eq!(
            to_class_set(&Value::from(vec!["a b", "c"])),
            ClassSet::from_tokens(["a b", "c"])
        );
        assert!(to_class_set(&Value::UNDEFINED).is_empty());
        assert_eq!(to_class_set(&Value::from(5)).to_string(), "5");
        assert_eq!(to_class_set(&Value::from(true)).to_string(), "true");
        assert_eq!(
            to_class_set(&Value::from(vec![Value::from("a"), Value::from(0)])).to_string(),
            "a 0"
        );
    }

    #[test]
    fn mapping_entries_keep_order() {
        let mapping = Value::from_iter([("target", Value::from("_blank")), ("href", Value::from("#"))]);
        let entries = mapping_entries(&mapping).unwrap();
        let names: Vec<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["target", "href"]);
    }

    #[test]
    fn mapping_entries_from_attribute_object() {
        let attrs = AttributeSet::from_entries([("id", "x"), ("class", "a")], false);
        let value = Value::from_object(AttributesObject::new(attrs));
        let entries = mapping_entries(&value).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].1, AttributeValue::Class(ClassSet::parse("a")));
    }

    #[test]
    fn mapping_entries_rejects_scalars() {
        assert!(mapping_entries(&Value::UNDEFINED).unwrap().is_empty());
        let err = mapping_entries(&Value::from("href")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
    }
}
