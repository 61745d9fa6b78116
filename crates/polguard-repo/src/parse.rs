use polguard_domain::model::{
    ConditionPresence, Effect, PolicyDocument, PolicyValue, Statement, StatementEntry,
};
use polguard_domain::source::ParseError;
use serde_json::{Map, Value};

/// Parse a JSON policy document.
///
/// - A missing `Statement` key yields an empty document.
/// - A `Statement` that is not an array is wrapped into a one-element list.
/// - Statement elements that are not objects are kept as `Malformed` for the engine to reject.
pub fn parse_policy(bytes: &[u8]) -> Result<PolicyDocument, ParseError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ParseError::Syntax(e.to_string()))?;

    let root = match value {
        Value::Object(root) => root,
        other => {
            return Err(ParseError::NotAnObject {
                found: json_type(&other),
            });
        }
    };

    let statements = match root.get("Statement") {
        None => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(parse_entry).collect(),
        Some(single) => vec![parse_entry(single)],
    };

    Ok(PolicyDocument { statements })
}

fn parse_entry(value: &Value) -> StatementEntry {
    match value {
        Value::Object(map) => StatementEntry::Mapping(parse_statement(map)),
        other => StatementEntry::Malformed {
            found: json_type(other),
        },
    }
}

fn parse_statement(map: &Map<String, Value>) -> Statement {
    Statement {
        effect: map.get("Effect").and_then(parse_effect),
        action: map.get("Action").and_then(parse_value),
        resource: map.get("Resource").and_then(parse_value),
        condition: match map.get("Condition") {
            None => ConditionPresence::Absent,
            Some(v) if is_empty_value(v) => ConditionPresence::Empty,
            Some(_) => ConditionPresence::Present,
        },
    }
}

fn parse_effect(value: &Value) -> Option<Effect> {
    match value {
        Value::Null => None,
        Value::String(s) if s == "Allow" => Some(Effect::Allow),
        Value::String(s) if s == "Deny" => Some(Effect::Deny),
        Value::String(s) => Some(Effect::Unrecognized(s.clone())),
        other => Some(Effect::Unrecognized(other.to_string())),
    }
}

fn parse_value(value: &Value) -> Option<PolicyValue> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(PolicyValue::Single(s.clone())),
        Value::Array(items) => Some(PolicyValue::List(
            items
                .iter()
                .filter_map(|i| i.as_str().map(|s| s.to_string()))
                .collect(),
        )),
        _ => Some(PolicyValue::Other),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
