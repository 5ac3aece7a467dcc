pub mod types;
pub mod direction_tracker;
pub mod quantity_normalizer;
pub mod renderer;

pub use types::{Direction, Side, DepthDisplayRow};
pub use direction_tracker::DirectionTracker;
pub use quantity_normalizer::{width_fraction, width_percent, bar_length, NormalizationContext};
pub use renderer::{DepthTableRenderer, RenderStats};
