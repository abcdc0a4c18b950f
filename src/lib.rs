//! Camera calibration panel for the robot vision tool.
//!
//! A small developer aid for inspecting and tweaking the nine camera/head
//! calibration parameters the vision pipeline runs with. The crate is split
//! the same way the host tool thinks about it:
//!
//! - [`calibration`]: the nine-value calibration vector and the fixed
//!   field table that binds each form field to a vector index.
//! - [`link`]: the [`link::VisionLink`] trait the panel talks to. The
//!   authoritative vector lives on the other side of this seam; the panel
//!   only ever holds a transient copy.
//! - [`panels`]: the calibration form itself ("get" pulls the vector from
//!   the link, "set" pushes it back verbatim).
//! - [`module`]: the wrapper that plugs the panel into the host tool as a
//!   named module and registers its state object on the data feed.
//! - [`feed`]: the host's frame-change notification feed.
//! - [`app`] / [`config`]: a minimal eframe shell and its TOML settings,
//!   for running the panel standalone against a mock link.
//!
//! Everything runs on the UI event loop; link callouts are synchronous and
//! complete or fail within the same event.

pub mod app;
pub mod calibration;
pub mod config;
pub mod feed;
pub mod link;
pub mod module;
pub mod panels;

pub use calibration::{CalibrationVector, CALIBRATION_FIELDS, CALIBRATION_LEN};
pub use link::{LinkError, MockVisionLink, VisionLink};
pub use module::{CalibrateModule, ToolModule};
pub use panels::CalibratePanel;
