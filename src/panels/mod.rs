//! UI panels for the calibration tool.

mod calibrate;

pub use calibrate::CalibratePanel;
