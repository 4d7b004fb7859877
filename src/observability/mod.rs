//! Tracing pipeline with a file-backed span journal.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK tracer provider → JournalExporter → Journal
//! ```
//!
//! Finished spans are written as JSON lines to
//! `~/.local/share/zellij/bookshelf/bookshelf-spans.json`, rotating at 10 MB
//! with three numbered backups. The level comes from the `trace_level` plugin
//! option (`info` by default) using `EnvFilter` syntax, so
//! `bookshelf::catalog=debug` works too.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span to JSON conversion
//! - [`journal`]: Size-rotated line file

pub mod exporter;
pub mod init;
pub mod journal;

pub use init::init_tracing;
