mod attribution;
mod child_state;
mod observation;
mod snapshot;

pub use attribution::RootAttribution;
pub use child_state::ChildState;
pub use observation::RequestObservation;
pub use snapshot::{ChildSnapshot, RootSnapshot};
