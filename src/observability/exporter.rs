//! JSON-lines span exporter.
//!
//! Every finished span becomes one line:
//!
//! ```json
//! {"ts":"2024-05-01T12:00:00.000123Z","name":"handle_event","trace_id":"…",
//!  "span_id":"…","parent_span_id":"…","duration_us":42,
//!  "attributes":{"event_type":"ToggleDropdown"},"events":[],"status":"unset"}
//! ```

use super::file_writer::FileWriter;
use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Map, Value as JsonValue};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

/// Writes finished spans to a [`FileWriter`], one JSON object per line.
pub struct JsonLinesExporter {
    writer: FileWriter,
    service: Option<String>,
    is_shutdown: AtomicBool,
}

impl JsonLinesExporter {
    #[must_use]
    pub const fn new(writer: FileWriter) -> Self {
        Self {
            writer,
            service: None,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn format_span(&self, span: &SpanData) -> JsonValue {
        let duration_us = span
            .end_time
            .duration_since(span.start_time)
            .map(|d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
            .unwrap_or(0);

        let parent_span_id = if span.parent_span_id == SpanId::INVALID {
            JsonValue::Null
        } else {
            JsonValue::String(format!("{:016x}", span.parent_span_id))
        };

        let events: Vec<JsonValue> = span
            .events
            .iter()
            .map(|event| {
                json!({
                    "ts": timestamp(event.timestamp),
                    "name": event.name,
                    "attributes": attributes(&event.attributes),
                })
            })
            .collect();

        let mut line = json!({
            "ts": timestamp(span.start_time),
            "name": span.name,
            "trace_id": format!("{:032x}", span.span_context.trace_id()),
            "span_id": format!("{:016x}", span.span_context.span_id()),
            "parent_span_id": parent_span_id,
            "duration_us": duration_us,
            "attributes": attributes(&span.attributes),
            "events": events,
            "status": status(&span.status),
        });

        if let (Some(service), Some(obj)) = (&self.service, line.as_object_mut()) {
            obj.insert("service".to_string(), JsonValue::String(service.clone()));
        }

        line
    }
}

fn timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn attributes(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

/// Converts an attribute to its natural JSON type. Arrays are kept as their
/// debug rendering.
fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.to_string()),
        Value::Array(_) => json!(format!("{value:?}")),
    }
}

fn status(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        for span in &batch {
            let line = self.format_span(span).to_string();
            if let Err(e) = self.writer.write_line(&line) {
                return Box::pin(std::future::ready(Err(TraceError::from(e.to_string()))));
            }
        }

        Box::pin(std::future::ready(Ok(())))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, res: &Resource) {
        self.service = res
            .get(opentelemetry::Key::from_static_str("service.name"))
            .map(|v| v.to_string());
    }
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("writer", &self.writer)
            .field("service", &self.service)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry_sdk::trace::TracerProvider;

    #[test]
    fn attribute_values_keep_json_types() {
        assert_eq!(attribute_value(&Value::Bool(true)), json!(true));
        assert_eq!(attribute_value(&Value::I64(3)), json!(3));
        assert_eq!(attribute_value(&Value::from("figma")), json!("figma"));
    }

    #[test]
    fn status_is_readable() {
        assert_eq!(status(&Status::Unset), "unset");
        assert_eq!(status(&Status::error("boom")), "error: boom");
    }

    #[test]
    fn exports_finished_spans_as_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.jsonl");

        let provider = TracerProvider::builder()
            .with_simple_exporter(JsonLinesExporter::new(FileWriter::new(path.clone())))
            .build();
        let tracer = provider.tracer("test");
        tracer.in_span("select_choice", |_cx| {});
        tracer.in_span("remove_choice", |_cx| {});
        drop(provider);

        let contents = std::fs::read_to_string(&path).unwrap();
        let names: Vec<String> = contents
            .lines()
            .map(|line| {
                let value: JsonValue = serde_json::from_str(line).unwrap();
                assert!(value["ts"].as_str().unwrap().ends_with('Z'));
                assert!(value["duration_us"].is_u64());
                value["name"].as_str().unwrap().to_string()
            })
            .collect();

        assert_eq!(names, vec!["select_choice", "remove_choice"]);
    }
}
