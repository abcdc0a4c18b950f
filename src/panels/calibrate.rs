//! Calibration form panel - view and edit the camera calibration vector.

use eframe::egui;
use tracing::info;

use crate::calibration::{CalibrationVector, CALIBRATION_FIELDS};
use crate::link::{LinkError, VisionLink};

/// Pending action to execute after UI rendering
enum PendingAction {
    Get,
    Set,
}

/// Calibration panel state.
///
/// Holds a transient, unsynchronized copy of the calibration vector. The
/// field widgets edit this copy in place; "get" replaces it from the vision
/// link and "set" pushes it back, all nine values, no diffing.
#[derive(Default)]
pub struct CalibratePanel {
    /// In-memory working copy of the calibration vector
    vector: CalibrationVector,
    /// Error message
    error: Option<String>,
    /// Status message
    status: Option<String>,
    /// Pending action to execute
    pending_action: Option<PendingAction>,
}

impl CalibratePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The panel's working copy of the vector.
    pub fn vector(&self) -> &CalibrationVector {
        &self.vector
    }

    /// Commits an edited value into the working copy at `index`.
    ///
    /// This is what a field widget does when its value changes; it never
    /// touches the vision link.
    pub fn edit(&mut self, index: usize, value: f32) {
        self.vector.set(index, value);
    }

    /// Replaces the working copy with the link's current vector.
    ///
    /// Overwrites any unsaved in-progress edits.
    pub fn fetch(&mut self, link: &mut dyn VisionLink) -> Result<(), LinkError> {
        self.vector = link.get_camera_calibrate()?;
        info!(vector = ?self.vector, "fetched camera calibration");
        Ok(())
    }

    /// Sends the working copy, as-is, to the link.
    pub fn store(&mut self, link: &mut dyn VisionLink) -> Result<(), LinkError> {
        link.set_camera_calibrate(self.vector)?;
        info!(vector = ?self.vector, "stored camera calibration");
        Ok(())
    }

    /// Render the calibration panel
    pub fn ui(&mut self, ui: &mut egui::Ui, link: Option<&mut dyn VisionLink>) {
        self.pending_action = None;

        ui.heading("Camera Calibrate");
        ui.separator();

        // Show error/status messages
        if let Some(err) = &self.error {
            ui.colored_label(egui::Color32::RED, format!("Error: {}", err));
        }
        if let Some(status) = &self.status {
            ui.colored_label(egui::Color32::GREEN, status);
        }

        egui::Grid::new("calibrate_fields")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for field in CALIBRATION_FIELDS {
                    ui.label(field.label);
                    ui.add(
                        egui::DragValue::new(self.vector.entry_mut(field.index))
                            .speed(0.1),
                    );
                    ui.end_row();
                }
            });

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Get").clicked() {
                self.pending_action = Some(PendingAction::Get);
            }
            if ui.button("Set").clicked() {
                self.pending_action = Some(PendingAction::Set);
            }
        });

        // Execute pending action after UI is done borrowing self
        if let Some(action) = self.pending_action.take() {
            self.execute_action(action, link);
        }
    }

    /// Execute a pending action
    fn execute_action(&mut self, action: PendingAction, link: Option<&mut dyn VisionLink>) {
        self.error = None;
        self.status = None;

        let Some(link) = link else {
            self.error = Some("Not connected to vision subsystem".to_string());
            return;
        };

        let result = match action {
            PendingAction::Get => self
                .fetch(link)
                .map(|()| "Loaded calibration from vision".to_string()),
            PendingAction::Set => self
                .store(link)
                .map(|()| "Sent calibration to vision".to_string()),
        };

        match result {
            Ok(status) => self.status = Some(status),
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::{CALIBRATION_FIELDS, CALIBRATION_LEN};
    use crate::link::MockVisionLink;

    fn ascending() -> CalibrationVector {
        CalibrationVector::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
    }

    #[test]
    fn editing_one_field_leaves_the_others_unchanged() {
        for field in CALIBRATION_FIELDS {
            let mut panel = CalibratePanel::new();
            panel.edit(field.index, 1.25);
            for other in CALIBRATION_FIELDS {
                let expected = if other.index == field.index { 1.25 } else { 0.0 };
                assert_eq!(panel.vector().get(other.index), expected, "{}", other.label);
            }
        }
    }

    #[test]
    fn fetch_reproduces_the_link_vector_in_index_order() {
        let mut link = MockVisionLink::new(ascending());
        let mut panel = CalibratePanel::new();
        panel.fetch(&mut link).unwrap();

        assert_eq!(panel.vector().get(0), 1.0, "Camera Roll");
        assert_eq!(panel.vector().get(8), 9.0, "Neck Off X");
        assert_eq!(panel.vector(), &ascending());
    }

    #[test]
    fn fetch_overwrites_unsaved_edits() {
        let mut link = MockVisionLink::new(ascending());
        let mut panel = CalibratePanel::new();
        panel.edit(2, 100.0);
        panel.fetch(&mut link).unwrap();
        assert_eq!(panel.vector().get(2), 3.0);
    }

    #[test]
    fn fetch_is_idempotent_while_the_link_is_unchanged() {
        let mut link = MockVisionLink::new(ascending());
        let mut panel = CalibratePanel::new();

        panel.fetch(&mut link).unwrap();
        let first = *panel.vector();
        panel.fetch(&mut link).unwrap();
        assert_eq!(panel.vector(), &first);
    }

    #[test]
    fn store_sends_all_nine_values_unmodified() {
        let mut link = MockVisionLink::default();
        let mut panel = CalibratePanel::new();
        for field in CALIBRATION_FIELDS {
            panel.edit(field.index, (field.index + 1) as f32 * 0.5);
        }

        panel.store(&mut link).unwrap();

        let stored = link.get_camera_calibrate().unwrap();
        for i in 0..CALIBRATION_LEN {
            assert_eq!(stored.get(i), (i + 1) as f32 * 0.5);
        }
    }

    #[test]
    fn edit_then_store_matches_the_worked_example() {
        // Link starts at [1..9]; editing "Camera Pan" to 3.5 and storing
        // must send [1, 2, 3.5, 4, 5, 6, 7, 8, 9].
        let mut link = MockVisionLink::new(ascending());
        let mut panel = CalibratePanel::new();
        panel.fetch(&mut link).unwrap();
        panel.edit(2, 3.5);
        panel.store(&mut link).unwrap();

        let stored = link.get_camera_calibrate().unwrap();
        assert_eq!(
            stored.as_array(),
            &[1.0, 2.0, 3.5, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
    }

    struct DeadLink;

    impl VisionLink for DeadLink {
        fn get_camera_calibrate(&mut self) -> Result<CalibrationVector, LinkError> {
            Err(LinkError::Disconnected)
        }
        fn set_camera_calibrate(&mut self, _vector: CalibrationVector) -> Result<(), LinkError> {
            Err(LinkError::Disconnected)
        }
    }

    #[test]
    fn failed_fetch_leaves_the_working_copy_untouched() {
        let mut panel = CalibratePanel::new();
        panel.edit(0, 4.5);
        assert!(panel.fetch(&mut DeadLink).is_err());
        assert_eq!(panel.vector().get(0), 4.5);
    }
}
