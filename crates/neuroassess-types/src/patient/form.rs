//! Collecting a [`PatientRecord`] from user input.
//!
//! The form's controls constrain what can be entered: numbers have a min and
//! a max, selects only accept their listed labels. Nothing here judges
//! whether the values are clinically plausible.
use std::fmt::Display;

use thiserror::Error;

use super::record::PatientRecord;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("patient record could not be read: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },
}

impl PatientRecord {
    /// Parse a JSON form submission and enforce the control limits.
    ///
    /// Fields left out of `input` keep their pre-filled defaults, so `{}` is
    /// a valid submission.
    pub fn from_json(input: &str) -> Result<Self, FormError> {
        let record: PatientRecord = serde_json::from_str(input)?;
        record.validate()?;
        Ok(record)
    }

    /// Pretty JSON form of the record, suitable as a fill-in template.
    pub fn to_json_pretty(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every numeric field against the limits of its input control.
    pub fn validate(&self) -> Result<(), FormError> {
        within("age", self.age, 0, 120)?;
        within("disease_duration", self.disease_duration, 0, 30)?;
        within("age_of_onset", self.age_of_onset, 0, 120)?;

        within("mmse_score", self.mmse_score, 0, 30)?;
        within("moca_score", self.moca_score, 0, 30)?;
        within("faq_score", self.faq_score, 0, 30)?;
        within("gds_score", self.gds_score, 0, 15)?;
        within("npi_score", self.npi_score, 0, 144)?;

        within("gait_speed", self.gait_speed, 0.0, 2.0)?;
        within("falls_6months", self.falls_6months, 0, 50)?;

        within("csf_abeta", self.csf_abeta, 0, 2000)?;
        within("csf_tau", self.csf_tau, 0, 2000)?;
        within("csf_ptau", self.csf_ptau, 0, 200)?;
        within("nfl_level", self.nfl_level, 0, 200)?;

        within("hippocampal_volume", self.hippocampal_volume, 1000, 5000)?;
        within("ventricle_volume", self.ventricle_volume, 10_000, 100_000)?;
        within("cortical_thickness", self.cortical_thickness, 1.0, 5.0)?;

        Ok(())
    }
}

fn within<T>(field: &'static str, value: T, min: T, max: T) -> Result<(), FormError>
where
    T: PartialOrd + Display,
{
    // NaN fails both comparisons and is rejected as well.
    if value >= min && value <= max {
        return Ok(());
    }

    Err(FormError::OutOfRange {
        field,
        value: value.to_string(),
        min: min.to_string(),
        max: max.to_string(),
    })
}
