//! Store record format and the serde-based codec between records and entities.
//!
//! A record is a flat map of attribute name to typed attribute value, the way
//! document stores such as DynamoDB represent items. Entities are marshalled by
//! serializing them to a JSON object and converting each field; unmarshalling
//! goes the other way and lets serde enforce the entity shape.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Store-side representation of an entity.
pub type Record = HashMap<String, AttributeValue>;

/// Typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// String
    S(String),
    /// Number, kept in its decimal string form
    N(String),
    Bool(bool),
    Null,
    /// List
    L(Vec<AttributeValue>),
    /// Nested map
    M(HashMap<String, AttributeValue>),
}

/// Errors converting between records and entities.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("entity did not serialize to an object")]
    NotAnObject,

    #[error("invalid number attribute: {0}")]
    InvalidNumber(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Convert an entity into a store record.
pub fn to_record<T: Serialize>(value: &T) -> Result<Record, CodecError> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields
            .into_iter()
            .map(|(name, value)| (name, attribute_from_json(value)))
            .collect()),
        _ => Err(CodecError::NotAnObject),
    }
}

/// Convert a store record back into an entity.
///
/// An empty record decodes as an empty JSON object, so entities with serde
/// defaults come back zero-valued.
pub fn from_record<T: DeserializeOwned>(record: &Record) -> Result<T, CodecError> {
    let object = record_to_json(record)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Convert every record of a scan, failing on the first undecodable one.
pub fn from_records<T: DeserializeOwned>(records: &[Record]) -> Result<Vec<T>, CodecError> {
    records.iter().map(from_record).collect()
}

fn attribute_from_json(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null,
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(items) => {
            AttributeValue::L(items.into_iter().map(attribute_from_json).collect())
        }
        Value::Object(fields) => AttributeValue::M(
            fields
                .into_iter()
                .map(|(name, value)| (name, attribute_from_json(value)))
                .collect(),
        ),
    }
}

fn attribute_to_json(attribute: &AttributeValue) -> Result<Value, CodecError> {
    Ok(match attribute {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => {
            let number: Number = n
                .parse()
                .map_err(|_| CodecError::InvalidNumber(n.clone()))?;
            Value::Number(number)
        }
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null => Value::Null,
        AttributeValue::L(items) => Value::Array(
            items
                .iter()
                .map(attribute_to_json)
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(fields) => Value::Object(record_to_json(fields)?),
    })
}

fn record_to_json(record: &Record) -> Result<Map<String, Value>, CodecError> {
    record
        .iter()
        .map(|(name, attribute)| attribute_to_json(attribute).map(|value| (name.clone(), value)))
        .collect()
}
