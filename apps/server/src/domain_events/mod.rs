//! Domain events runtime bridge for the web server.
//!
//! Receives domain events via `DomainEventSink` and records them as
//! structured tracing events.

mod sink;

pub use sink::WebDomainEventSink;
