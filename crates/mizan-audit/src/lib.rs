//! mizan-audit
//!
//! Safety event logging. Events record that a crisis interrupt happened,
//! never what the user answered.

pub mod events;

pub use events::{MemorySink, SafetyAction, SafetyEvent, SafetySink, TracingSink};
