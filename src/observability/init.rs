//! Tracing subscriber initialization.

use super::exporter::JsonLinesExporter;
use super::file_writer::FileWriter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Span export file inside the data directory.
pub const SPAN_FILE_NAME: &str = "zelect-spans.jsonl";

const SERVICE_NAME: &str = "zelect";

/// Installs the global tracing subscriber.
///
/// The level comes from `trace_level` and defaults to `info`. If the data
/// directory cannot be created, tracing stays disabled. Calling this twice
/// keeps the first subscriber.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let writer = FileWriter::new(data_dir.join(SPAN_FILE_NAME));
    let provider = TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(JsonLinesExporter::new(writer))
        .build();

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
