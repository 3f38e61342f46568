//! FILENAME: core/filler/src/source.rs
//! PURPOSE: Where values for detected labels come from.
//! CONTEXT: The source is a black box: labels in, label-to-value mapping
//! out. Generators that answer with raw JSON text tend to wrap it in code
//! fences or cut it short, so their text goes through `clean_json_response`
//! before parsing. Retrying a failed source is the source's own business.

use serde_json::Value;

use crate::error::ValueSourceError;
use crate::value::{FieldValue, FieldValues};

/// Produces values for a list of labels.
pub trait ValueSource {
    fn values(&self, labels: &[String]) -> Result<FieldValues, ValueSourceError>;
}

impl<F> ValueSource for F
where
    F: Fn(&[String]) -> Result<FieldValues, ValueSourceError>,
{
    fn values(&self, labels: &[String]) -> Result<FieldValues, ValueSourceError> {
        self(labels)
    }
}

/// Asks the source for values; an empty label list never reaches it.
pub fn request_values<S: ValueSource + ?Sized>(
    source: &S,
    labels: &[String],
) -> Result<FieldValues, ValueSourceError> {
    if labels.is_empty() {
        return Ok(FieldValues::new());
    }
    source.values(labels)
}

/// A fixed mapping, e.g. loaded from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct StaticValueSource {
    values: FieldValues,
}

impl StaticValueSource {
    pub fn new(values: FieldValues) -> Self {
        StaticValueSource { values }
    }

    /// Parses generator-style JSON text (see [`clean_json_response`]).
    pub fn from_json_str(text: &str) -> Result<Self, ValueSourceError> {
        Ok(Self::new(FieldValues::from_json_str(text)?))
    }
}

impl ValueSource for StaticValueSource {
    /// Labels missing from the mapping are simply absent from the answer.
    fn values(&self, _labels: &[String]) -> Result<FieldValues, ValueSourceError> {
        Ok(self.values.clone())
    }
}

impl FieldValues {
    /// Builds the mapping from a JSON object of any value shapes.
    pub fn from_json_value(value: Value) -> Result<Self, ValueSourceError> {
        match value {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (k, FieldValue::from(v)))
                .collect()),
            Value::Array(_) => Err(ValueSourceError::NotAnObject("an array")),
            Value::String(_) => Err(ValueSourceError::NotAnObject("a string")),
            Value::Number(_) => Err(ValueSourceError::NotAnObject("a number")),
            Value::Bool(_) => Err(ValueSourceError::NotAnObject("a boolean")),
            Value::Null => Err(ValueSourceError::NotAnObject("null")),
        }
    }

    /// Cleans and parses JSON text into a mapping.
    pub fn from_json_str(text: &str) -> Result<Self, ValueSourceError> {
        let cleaned = clean_json_response(text);
        let value: Value = serde_json::from_str(&cleaned)?;
        Self::from_json_value(value)
    }
}

/// Extracts the JSON payload from generator output.
///
/// Strips ``` fences (and a `json` language tag) and appends closing
/// braces/brackets when the text was truncated mid-object.
pub fn clean_json_response(response: &str) -> String {
    let mut text = response.trim().to_string();

    if text.starts_with("```") {
        let parts: Vec<&str> = text.split("```").collect();
        let fenced = parts.iter().find_map(|part| {
            let part = part.trim();
            let part = part.strip_prefix("json").map(str::trim).unwrap_or(part);
            (part.starts_with('{') || part.starts_with('[')).then(|| part.to_string())
        });
        text = match fenced {
            Some(payload) => payload,
            None => parts
                .iter()
                .map(|p| p.trim())
                .find(|p| !p.is_empty() && !p.starts_with("json"))
                .map(str::to_string)
                .unwrap_or_else(|| text.clone()),
        };
    }

    let mut text = text.trim().to_string();
    if !text.ends_with('}') && !text.ends_with(']') {
        let open_braces = text.matches('{').count().saturating_sub(text.matches('}').count());
        let open_brackets = text.matches('[').count().saturating_sub(text.matches(']').count());
        text.push_str(&"}".repeat(open_braces));
        text.push_str(&"]".repeat(open_brackets));
    }
    text
}
