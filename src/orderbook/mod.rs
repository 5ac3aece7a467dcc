pub mod types;
pub mod display_formatter;

pub use types::{DepthRow, Snapshot, SnapshotParseError};
