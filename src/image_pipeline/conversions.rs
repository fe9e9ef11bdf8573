//! Pipeline conversions module
//!
//! This module contains the orchestration that turns a configuration into a
//! sequence of rotated frames on disk.

mod rotation_sequence;
pub mod types;

#[cfg(test)]
mod tests;

pub use rotation_sequence::{
    CylinderRotationPipeline, RunSummary, INITIAL_FRAME_NAME, rotated_frame_name,
};
pub use types::{RotationConfig, RotationConfigBuilder};
