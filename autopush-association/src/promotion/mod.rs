//! Promotion engine: turns counters into push decisions.
//!
//! - `thresholds`: validated decision thresholds
//! - `transition`: the pure state machine
//! - `engine`: applies transitions to live entries
//! - `ranking`: orders promoted children for pushing

pub mod engine;
pub mod ranking;
pub mod thresholds;
pub mod transition;

pub use engine::{Evaluation, PromotionEngine};
pub use ranking::{rank, PushCandidate};
pub use thresholds::Thresholds;
pub use transition::{next_state, Counters};
