//! Tracing setup and span export.
//!
//! Spans recorded with `tracing` are bridged into OpenTelemetry and written
//! one JSON object per line to a size-rotated file in the plugin data
//! directory. The plugin has no terminal to log to, so this file is where
//! debugging output ends up.
//!
//! # Modules
//!
//! - `init`: subscriber and tracer provider setup
//! - `exporter`: `SpanExporter` turning span data into JSON lines
//! - `file_writer`: append-only writer with numbered backups

mod exporter;
mod file_writer;
mod init;

pub use exporter::JsonLinesExporter;
pub use file_writer::FileWriter;
pub use init::{init_tracing, SPAN_FILE_NAME};
