//! Span exporter writing one JSON object per finished span into a [`Journal`].
//!
//! Each line looks like:
//!
//! ```json
//! {"service":"Bookshelf","trace":"4bf9…","span":"00f0…","parent":null,
//!  "name":"submit_search","start_unix_ns":1700000000000000000,"duration_us":412,
//!  "attributes":{"title":"war"},"events":[{"name":"search submitted","offset_us":398,
//!  "attributes":{"matches":3}}],"status":"unset"}
//! ```

use super::journal::Journal;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{Key, KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Map, Value as JsonValue};
use std::time::{Duration, SystemTime};

pub struct JournalExporter {
    journal: Journal,
    service: String,
    is_shutdown: bool,
}

impl JournalExporter {
    #[must_use]
    pub fn new(journal: Journal, resource: &Resource) -> Self {
        Self {
            journal,
            service: service_name(resource),
            is_shutdown: false,
        }
    }
}

fn service_name(resource: &Resource) -> String {
    resource
        .get(Key::from_static_str("service.name"))
        .map_or_else(String::new, |v| v.as_str().into_owned())
}

fn unix_nanos(time: SystemTime) -> u64 {
    let nanos = time.duration_since(SystemTime::UNIX_EPOCH).unwrap_or(Duration::ZERO).as_nanos();
    u64::try_from(nanos).unwrap_or(u64::MAX)
}

fn micros_between(start: SystemTime, end: SystemTime) -> u64 {
    let micros = end.duration_since(start).unwrap_or(Duration::ZERO).as_micros();
    u64::try_from(micros).unwrap_or(u64::MAX)
}

fn value_json(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        other => JsonValue::String(other.as_str().into_owned()),
    }
}

fn attributes_json(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.as_str().to_string(), value_json(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn status_text(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}

/// One journal record for a finished span.
fn span_record(service: &str, span: &SpanData) -> JsonValue {
    let parent = (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));
    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "name": event.name,
                "offset_us": micros_between(span.start_time, event.timestamp),
                "attributes": attributes_json(&event.attributes),
            })
        })
        .collect();

    json!({
        "service": service,
        "trace": format!("{:032x}", span.span_context.trace_id()),
        "span": format!("{:016x}", span.span_context.span_id()),
        "parent": parent,
        "name": span.name,
        "start_unix_ns": unix_nanos(span.start_time),
        "duration_us": micros_between(span.start_time, span.end_time),
        "attributes": attributes_json(&span.attributes),
        "events": events,
        "status": status_text(&span.status),
    })
}

impl SpanExporter for JournalExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown {
            return Box::pin(std::future::ready(Err(TraceError::from("journal exporter is shut down"))));
        }

        let result = batch
            .iter()
            .try_for_each(|span| self.journal.append(&span_record(&self.service, span).to_string()))
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.service = service_name(resource);
    }
}

impl std::fmt::Debug for JournalExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalExporter")
            .field("journal", &self.journal)
            .field("service", &self.service)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_values_keep_their_json_types() {
        let attrs = [
            KeyValue::new("matches", 3_i64),
            KeyValue::new("has_more", true),
            KeyValue::new("title", "war"),
        ];
        assert_eq!(
            attributes_json(&attrs),
            json!({"matches": 3, "has_more": true, "title": "war"})
        );
    }

    #[test]
    fn status_is_readable() {
        assert_eq!(status_text(&Status::Unset), "unset");
        assert_eq!(status_text(&Status::error("boom")), "error: boom");
    }

    #[test]
    fn durations_never_go_negative() {
        let start = SystemTime::UNIX_EPOCH + Duration::from_secs(10);
        let end = start + Duration::from_micros(250);
        assert_eq!(micros_between(start, end), 250);
        assert_eq!(micros_between(end, start), 0);
        assert_eq!(unix_nanos(start), 10_000_000_000);
    }

    #[test]
    fn service_name_comes_from_resource() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "Bookshelf")]);
        assert_eq!(service_name(&resource), "Bookshelf");
    }
}
