//! Module wrapper plugging the calibration panel into the host tool.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;

use crate::feed::{DataEvent, DataFeed, DataListener};
use crate::link::VisionLink;
use crate::panels::CalibratePanel;

/// A tool module the host application can embed: a display name for its
/// selector, and a render entry point for its display area.
pub trait ToolModule {
    fn display_name(&self) -> &str;
    fn show(&mut self, ui: &mut egui::Ui);
}

/// Calibration-side state registered on the host's data feed.
///
/// The panel itself is frame-agnostic; this object just keeps track of which
/// logged frame the rest of the tool is looking at.
#[derive(Debug, Default)]
pub struct CalibrationState {
    current_frame: Option<usize>,
}

impl CalibrationState {
    /// Frame index of the most recent notification, if any arrived yet.
    pub fn current_frame(&self) -> Option<usize> {
        self.current_frame
    }
}

impl DataListener for CalibrationState {
    fn frame_changed(&mut self, event: &DataEvent) {
        self.current_frame = Some(event.frame_index);
    }
}

/// The calibrate module: owns the panel and the vision-link handle, and
/// registers its state object on the data feed at construction.
pub struct CalibrateModule {
    panel: CalibratePanel,
    state: Rc<RefCell<CalibrationState>>,
    link: Option<Rc<RefCell<dyn VisionLink>>>,
}

impl CalibrateModule {
    pub fn new(feed: &mut DataFeed, link: Option<Rc<RefCell<dyn VisionLink>>>) -> Self {
        let state: Rc<RefCell<CalibrationState>> = Rc::default();
        feed.add_listener(state.clone());
        Self {
            panel: CalibratePanel::new(),
            state,
            link,
        }
    }

    /// The state object registered on the data feed.
    pub fn state(&self) -> Rc<RefCell<CalibrationState>> {
        self.state.clone()
    }

    pub fn panel(&self) -> &CalibratePanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut CalibratePanel {
        &mut self.panel
    }
}

impl ToolModule for CalibrateModule {
    fn display_name(&self) -> &str {
        "Calibrate"
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        match &self.link {
            Some(link) => {
                let mut link = link.borrow_mut();
                self.panel.ui(ui, Some(&mut *link));
            }
            None => self.panel.ui(ui, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::DataEvent;

    #[test]
    fn construction_registers_the_state_on_the_feed() {
        let mut feed = DataFeed::new();
        let module = CalibrateModule::new(&mut feed, None);
        assert_eq!(feed.listener_count(), 1);

        feed.dispatch(DataEvent { frame_index: 3 });
        assert_eq!(module.state().borrow().current_frame(), Some(3));
    }

    #[test]
    fn display_name_is_constant() {
        let mut feed = DataFeed::new();
        let module = CalibrateModule::new(&mut feed, None);
        assert_eq!(module.display_name(), "Calibrate");
    }
}
