//! Structured log events emitted by the loop.

use core_state::EditorConfig;
use core_terminal::{FakeTerminal, WindowSize};
use std::fmt;
use std::io::{self, Read};
use std::sync::{Arc, Mutex};
use tilde::EditorRuntime;
use tracing::Subscriber;
use tracing::dispatcher::Dispatch;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

#[derive(Clone, Default)]
struct Capture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

#[derive(Clone, Debug)]
struct CapturedEvent {
    target: String,
    fields: Vec<(String, String)>,
}

#[derive(Default)]
struct FieldCollector {
    fields: Vec<(String, String)>,
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .push((field.name().to_string(), format!("{:?}", value)));
    }
}

impl<S> Layer<S> for Capture
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut collector = FieldCollector::default();
        event.record(&mut collector);
        self.events.lock().unwrap().push(CapturedEvent {
            target: event.metadata().target().to_string(),
            fields: collector.fields,
        });
    }
}

struct FailOnce {
    failed: bool,
}

impl Read for FailOnce {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.failed {
            self.failed = true;
            return Err(io::Error::other("transient"));
        }
        buf[0] = 0x11;
        Ok(1)
    }
}

fn has_field(event: &CapturedEvent, name: &str, value: &str) -> bool {
    event.fields.iter().any(|(n, v)| n == name && v == value)
}

#[test]
fn read_error_and_shutdown_are_logged() {
    let capture = Capture::default();
    let events = capture.events.clone();
    let dispatch = Dispatch::new(Registry::default().with(capture));

    tracing::dispatcher::with_default(&dispatch, || {
        let fake = FakeTerminal::new(WindowSize::new(20, 5));
        let mut runtime =
            EditorRuntime::start(fake, FailOnce { failed: false }, Vec::new(), EditorConfig::default())
                .unwrap();
        runtime.run().unwrap();
    });

    let events = events.lock().unwrap();
    let read_error = events
        .iter()
        .find(|e| e.target == "input" && has_field(e, "message", "input_read_error"))
        .expect("missing input_read_error event");
    assert!(has_field(read_error, "consecutive", "1"));

    let stages: Vec<_> = events
        .iter()
        .filter(|e| e.target == "runtime.shutdown")
        .filter_map(|e| e.fields.iter().find(|(n, _)| n == "stage").map(|(_, v)| v.clone()))
        .collect();
    assert_eq!(stages, vec!["\"begin\"", "\"complete\""]);
}
