// Service exports
pub mod snapshot;

pub use snapshot::{SnapshotError, SnapshotStore};
