//! Coercion of raw id strings into typed JSON values and back.

use japi_domain::resource::IdKind;
use serde_json::Value;
use std::borrow::Cow;

#[japi_derive::japi_error]
pub enum ParserError {
    #[error("Invalid value{}: {message}", format_context(.context))]
    InvalidValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Parses path ids according to the resource's [`IdKind`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeParser;

impl TypeParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    pub fn parse(&self, raw: &str, kind: IdKind) -> Result<Value, ParserError> {
        let invalid = || ParserError::InvalidValue {
            message: format!("'{raw}' is not a valid {kind} id").into(),
            context: None,
        };

        match kind {
            IdKind::Integer => raw.trim().parse::<i64>().map(Value::from).map_err(|_| invalid()),
            IdKind::Unsigned => raw.trim().parse::<u64>().map(Value::from).map_err(|_| invalid()),
            IdKind::Text if raw.is_empty() => Err(invalid()),
            IdKind::Text => Ok(Value::String(raw.to_owned())),
        }
    }

    pub fn parse_all<'a, I>(&self, raws: I, kind: IdKind) -> Result<Vec<Value>, ParserError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        raws.into_iter().map(|raw| self.parse(raw, kind)).collect()
    }

    /// Renders an id value the way it travels on the wire. Only strings and
    /// numbers are valid ids.
    #[must_use]
    pub fn render(&self, id: &Value) -> Option<String> {
        match id {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_each_kind() {
        let parser = TypeParser::new();
        assert_eq!(parser.parse("-3", IdKind::Integer).unwrap(), json!(-3));
        let max = parser.parse("18446744073709551615", IdKind::Unsigned).unwrap();
        assert_eq!(max, json!(u64::MAX));
        assert_eq!(parser.parse("abc", IdKind::Text).unwrap(), json!("abc"));
    }

    #[test]
    fn rejects_mismatched_input() {
        let parser = TypeParser::new();
        let err = parser.parse("abc", IdKind::Integer).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value: 'abc' is not a valid integer id");
        assert!(parser.parse("-1", IdKind::Unsigned).is_err());
        assert!(parser.parse("", IdKind::Text).is_err());
    }

    #[test]
    fn parse_all_stops_at_first_failure() {
        let parser = TypeParser::new();
        let ids = parser.parse_all(["1", "2"], IdKind::Integer).unwrap();
        assert_eq!(ids, vec![json!(1), json!(2)]);
        assert!(parser.parse_all(["1", "x", "3"], IdKind::Integer).is_err());
    }

    #[test]
    fn renders_ids_for_the_wire() {
        let parser = TypeParser::new();
        assert_eq!(parser.render(&json!(12)).as_deref(), Some("12"));
        assert_eq!(parser.render(&json!("a-1")).as_deref(), Some("a-1"));
        assert_eq!(parser.render(&json!(null)), None);
    }
}
