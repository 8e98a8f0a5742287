pub mod merge;
pub mod sync;

pub use sync::{SyncLogic, SyncOutcome};
