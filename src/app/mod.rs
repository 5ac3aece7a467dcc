pub mod depth_app;

pub use depth_app::{AppError, DepthApp};
