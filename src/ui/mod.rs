//! Console output

mod progress;

pub use progress::{
    format_copied, format_summary, CollectCallback, CollectEvent, ConsoleReporter, EventLog,
    RecordedEvent,
};
