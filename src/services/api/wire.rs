//! JSON shapes exchanged with the events API and their normalization.
//!
//! Deployments disagree on key names (`event_id`/`id`, `date`/`event_date`)
//! and on whether the list comes bare or wrapped in a `{"body": "..."}`
//! envelope. Everything is folded into [`Event`] here so the rest of the
//! crate sees a single shape.

use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use crate::models::event::Event;

/// Identifier as sent by the API; some tables use numeric keys
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(i64),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Text(text) => text,
            WireId::Number(number) => number.to_string(),
        }
    }
}

/// Event record exactly as the API returns it.
///
/// Fields are kept as raw JSON so one record with an unexpected type (a
/// numeric date, a boolean title) cannot fail the whole list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub event_id: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub event_date: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default)]
    pub created_by_name: Option<Value>,
}

impl RawEvent {
    /// Convert to the canonical shape. Returns `None` when the record has no id.
    ///
    /// Blank values fall through to the alternate key, so `{"event_id": "",
    /// "id": "x1"}` resolves to `x1`.
    pub fn into_event(self) -> Option<Event> {
        let title = text_field(self.title).unwrap_or_default();

        let Some(id) = text_field(self.event_id).or_else(|| text_field(self.id)) else {
            log::warn!("Skipping event '{}' without an id", title);
            return None;
        };

        let raw_date = date_field(self.date)
            .or_else(|| date_field(self.event_date))
            .unwrap_or_default();

        let mut builder = Event::builder()
            .id(id)
            .title(title)
            .description(text_field(self.description).unwrap_or_default())
            .raw_date(raw_date);
        if let Some(address) = text_field(self.address) {
            builder = builder.address(address);
        }
        if let Some(name) = text_field(self.created_by_name) {
            builder = builder.created_by_name(name);
        }

        let event = builder.build().ok()?;
        if event.occurs_at.is_none() {
            log::warn!(
                "Event {} ('{}') has an unparseable date '{}'",
                event.id,
                event.title,
                event.raw_date
            );
        }
        Some(event)
    }
}

/// Text of a scalar field. `null`, blank strings and nested values count as absent.
fn text_field(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Date text of a field. Numbers are epoch milliseconds; out-of-range
/// numbers are kept verbatim and later shown as an invalid date.
fn date_field(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Number(number) => {
            let millis = number
                .as_i64()
                .or_else(|| number.as_f64().map(|millis| millis.trunc() as i64));
            Some(
                millis
                    .and_then(DateTime::from_timestamp_millis)
                    .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true))
                    .unwrap_or_else(|| number.to_string()),
            )
        }
        other => text_field(Some(other)),
    }
}

/// Decode a list response body: a bare array, or an envelope whose `body`
/// holds the array either inline or as a JSON-encoded string.
pub fn parse_event_list(body: &str) -> Result<Vec<RawEvent>, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    unwrap_list(value)
}

fn unwrap_list(value: Value) -> Result<Vec<RawEvent>, ApiError> {
    match value {
        Value::Array(items) => Ok(records(items)),
        Value::Object(mut envelope) => match envelope.remove("body") {
            Some(Value::String(inner)) => match serde_json::from_str(&inner)? {
                Value::Array(items) => Ok(records(items)),
                _ => Err(ApiError::Decode(
                    "envelope body does not contain an event array".to_string(),
                )),
            },
            Some(Value::Array(items)) => Ok(records(items)),
            _ => Err(ApiError::Decode(
                "expected an event array or an object with a 'body' field".to_string(),
            )),
        },
        _ => Err(ApiError::Decode(
            "expected an event array or an object with a 'body' field".to_string(),
        )),
    }
}

/// Decode each array entry on its own; entries that are not objects are skipped.
fn records(items: Vec<Value>) -> Vec<RawEvent> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(raw) => Some(raw),
            Err(err) => {
                log::warn!("Skipping event record {}: {}", index, err);
                None
            }
        })
        .collect()
}

/// Normalize raw records, dropping those without an id
pub fn normalize_events(raw: Vec<RawEvent>) -> Vec<Event> {
    raw.into_iter().filter_map(RawEvent::into_event).collect()
}

/// Payload for creating an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl NewEvent {
    /// The API rejects events missing a title, date or description
    pub fn validate(&self) -> Result<(), ApiError> {
        let missing: Vec<&str> = [
            ("title", &self.title),
            ("date", &self.date),
            ("description", &self.description),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(ApiError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        if crate::utils::date::parse_timestamp(&self.date).is_none() {
            return Err(ApiError::Validation(format!(
                "'{}' is not a recognizable date",
                self.date
            )));
        }

        Ok(())
    }
}

/// Body of a successful create response
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedEvent {
    #[serde(default)]
    pub message: Option<String>,
    pub event_id: WireId,
}

impl CreatedEvent {
    pub fn id(self) -> String {
        self.event_id.into_string()
    }
}

/// Decode a create response, which may also arrive wrapped in an envelope
pub fn parse_created(body: &str) -> Result<CreatedEvent, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    let value = match value {
        Value::Object(mut envelope) if !envelope.contains_key("event_id") => {
            match envelope.remove("body") {
                Some(Value::String(inner)) => serde_json::from_str(&inner)?,
                Some(inner) => inner,
                None => Value::Object(envelope),
            }
        }
        other => other,
    };
    Ok(serde_json::from_value(value)?)
}
