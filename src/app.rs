//! Minimal host shell embedding tool modules.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;

use crate::config::ToolConfig;
use crate::feed::DataFeed;
use crate::link::{MockVisionLink, VisionLink};
use crate::module::{CalibrateModule, ToolModule};

/// The host application: owns the data feed and the vision link, and renders
/// whichever registered module is selected.
pub struct ToolApp {
    feed: DataFeed,
    modules: Vec<Box<dyn ToolModule>>,
    selected: usize,
}

impl ToolApp {
    /// Builds the app with a mock vision link seeded from `config`.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &ToolConfig) -> Self {
        let mut feed = DataFeed::new();
        let link: Rc<RefCell<dyn VisionLink>> =
            Rc::new(RefCell::new(MockVisionLink::new(config.calibrate.initial)));

        let calibrate = CalibrateModule::new(&mut feed, Some(link));
        let modules: Vec<Box<dyn ToolModule>> = vec![Box::new(calibrate)];

        Self {
            feed,
            modules,
            selected: 0,
        }
    }

    /// The shared data feed, for the frame source to dispatch into.
    pub fn feed(&self) -> &DataFeed {
        &self.feed
    }
}

impl eframe::App for ToolApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Vision Tool");
                ui.separator();
                for (index, module) in self.modules.iter().enumerate() {
                    ui.selectable_value(&mut self.selected, index, module.display_name());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(module) = self.modules.get_mut(self.selected) {
                module.show(ui);
            }
        });
    }
}
