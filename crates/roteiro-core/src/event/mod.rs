//! Event start-time classification ("Agora", "Hoje", "Amanhã", dated).

mod classifier;
mod timing;

pub use classifier::{classify_record, EventTimeClassifier, EventTimeKind, EventTimeLabel};
pub use timing::EventTiming;
