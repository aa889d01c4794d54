use serde_json::Value;

/// Walk nested objects along `path`, returning `None` as soon as a key is
/// missing or an intermediate value is not an object.
pub(crate) fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Scalar at `path` rendered as a string. Numbers and booleans are accepted
/// because some resources send identifiers as integers.
pub(crate) fn lookup_string(value: &Value, path: &[&str]) -> Option<String> {
    match lookup(value, path)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
