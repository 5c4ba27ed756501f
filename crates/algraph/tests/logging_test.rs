use algraph::{Error, Graph};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

#[derive(Clone, Default)]
struct Messages(Arc<Mutex<Vec<String>>>);

impl Messages {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

struct MessageVisitor<'a>(&'a mut Option<String>);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            *self.0 = Some(format!("{value:?}"));
        }
    }
}

impl Subscriber for Messages {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut message = None;
        event.record(&mut MessageVisitor(&mut message));
        if let Some(message) = message {
            self.0.lock().unwrap().push(message);
        }
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

#[test]
fn add_edge_only_traces_accepted_edges() {
    let messages = Messages::default();
    tracing::subscriber::with_default(messages.clone(), || {
        let mut g = Graph::new();
        g.add_vertex("b");
        messages.take();

        assert!(matches!(
            g.add_edge("a", "b", 1.0),
            Err(Error::UnknownVertex { vertex }) if vertex == "a"
        ));
        assert_eq!(messages.take(), vec!["unknown vertex".to_string()]);

        g.add_vertex("a");
        messages.take();
        g.add_edge("a", "b", 1.0).unwrap();
        assert_eq!(messages.take(), vec!["add edge".to_string()]);
    });
}
