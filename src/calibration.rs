//! The calibration vector and its fixed field table.
//!
//! The vision pipeline is parameterized by nine floats: camera mounting
//! angles, camera offsets, head joint corrections, and a neck offset. The
//! panel binds one numeric field to each index; the binding is defined once
//! in [`CALIBRATION_FIELDS`] so the layout, the edit handlers, and the tests
//! all agree on the same ordering.

use serde::{Deserialize, Serialize};

/// Number of calibration parameters the vision link traffics in.
pub const CALIBRATION_LEN: usize = 9;

/// One row of the field table: a vector index and the label shown next to
/// the field bound to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationField {
    pub index: usize,
    pub label: &'static str,
}

/// Fixed index-to-label table, in form layout order.
///
/// Index 8 is semantically the neck Z offset but has always been labeled
/// "Neck Off X" in the tool; the label is kept so saved screenshots and
/// calibration notes keep matching what operators see.
pub const CALIBRATION_FIELDS: [CalibrationField; CALIBRATION_LEN] = [
    CalibrationField { index: 0, label: "Camera Roll" },
    CalibrationField { index: 1, label: "Camera Pitch" },
    CalibrationField { index: 2, label: "Camera Pan" },
    CalibrationField { index: 3, label: "Camera Off X" },
    CalibrationField { index: 4, label: "Camera Off Y" },
    CalibrationField { index: 5, label: "Camera Off Z" },
    CalibrationField { index: 6, label: "Head Pan" },
    CalibrationField { index: 7, label: "Head Pitch" },
    CalibrationField { index: 8, label: "Neck Off X" },
];

/// The nine camera/head calibration parameters, in field-table order.
///
/// The authoritative copy is owned by the vision link; values of this type
/// are transient working copies. Length is fixed by the type, so a link can
/// never hand the panel a short vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalibrationVector([f32; CALIBRATION_LEN]);

impl CalibrationVector {
    pub fn new(values: [f32; CALIBRATION_LEN]) -> Self {
        Self(values)
    }

    /// Value at a field-table index.
    pub fn get(&self, index: usize) -> f32 {
        self.0[index]
    }

    /// Overwrites the value at a field-table index, leaving the rest alone.
    pub fn set(&mut self, index: usize, value: f32) {
        self.0[index] = value;
    }

    /// Mutable handle to one entry, for binding a widget directly to it.
    pub fn entry_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.0[index]
    }

    pub fn as_array(&self) -> &[f32; CALIBRATION_LEN] {
        &self.0
    }
}

impl From<[f32; CALIBRATION_LEN]> for CalibrationVector {
    fn from(values: [f32; CALIBRATION_LEN]) -> Self {
        Self(values)
    }
}

impl From<CalibrationVector> for [f32; CALIBRATION_LEN] {
    fn from(vector: CalibrationVector) -> Self {
        vector.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_table_covers_every_index_exactly_once() {
        let mut seen = [false; CALIBRATION_LEN];
        for field in CALIBRATION_FIELDS {
            assert!(field.index < CALIBRATION_LEN);
            assert!(!seen[field.index], "index {} bound twice", field.index);
            seen[field.index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn field_labels_are_unique() {
        for (i, a) in CALIBRATION_FIELDS.iter().enumerate() {
            for b in &CALIBRATION_FIELDS[i + 1..] {
                assert_ne!(a.label, b.label);
            }
        }
    }

    #[test]
    fn set_touches_only_the_given_index() {
        for field in CALIBRATION_FIELDS {
            let mut vector = CalibrationVector::new([0.5; CALIBRATION_LEN]);
            vector.set(field.index, 42.0);
            for other in CALIBRATION_FIELDS {
                let expected = if other.index == field.index { 42.0 } else { 0.5 };
                assert_eq!(vector.get(other.index), expected);
            }
        }
    }

    #[test]
    fn round_trips_through_array() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let vector = CalibrationVector::from(values);
        assert_eq!(<[f32; CALIBRATION_LEN]>::from(vector), values);
    }

    #[test]
    fn serializes_as_a_plain_array() {
        let vector = CalibrationVector::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let value = toml::Value::try_from(vector).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), CALIBRATION_LEN);
        assert_eq!(array[0].as_float(), Some(1.0));
        assert_eq!(array[8].as_float(), Some(9.0));
    }
}
