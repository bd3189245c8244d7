//! # autopush-association
//!
//! Learned (root path → asset path) associations and the decision logic that
//! turns them into push candidates.
//!
//! ## Lifecycle
//!
//! | From | To | When |
//! |------|----|------|
//! | Tracking | Promoted | ratio ≥ promotion, root seen ≥ minimum times, warmup elapsed |
//! | Promoted | Demoted | ratio ≤ demotion |
//! | Demoted | Promoted | ratio ≥ promotion again |
//!
//! Ratios strictly between the two thresholds never cause a transition.

pub mod entry;
pub mod promotion;
pub mod ratio;
pub mod store;

pub use entry::{ChildEntry, RootEntry};
pub use promotion::{
    next_state, rank, Counters, Evaluation, PromotionEngine, PushCandidate, Thresholds,
};
pub use store::AssociationStore;
