//! Calibration panel - egui desktop application
//!
//! A lightweight GUI for inspecting and tweaking the camera calibration
//! vector of the robot vision pipeline.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use tool_calibrate::app::ToolApp;
use tool_calibrate::config::ToolConfig;

#[derive(Parser)]
#[command(name = "tool-calibrate-gui", about = "Camera calibration panel")]
struct Args {
    /// Settings file (TOML) with the initial calibration vector
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ToolConfig::load(path)?,
        None => ToolConfig::default(),
    };

    tracing::info!("Starting calibration panel");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 420.0])
            .with_title("Camera Calibrate"),
        ..Default::default()
    };

    eframe::run_native(
        "Camera Calibrate",
        options,
        Box::new(move |cc| Ok(Box::new(ToolApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("failed to run the calibration panel")
}
