//! Services Layer
//!
//! This module contains the public classification entry points.
//! Services can be called directly or from the demo driver.

pub mod clc_service;

// Re-export for convenience
pub use clc_service::{ClcParser, SegmentPaths};
