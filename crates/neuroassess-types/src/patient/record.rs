use std::collections::BTreeSet;

use neuroassess_prompt::builder::{PromptBuilder, join_list};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::options::*;

/// One submission of the assessment form.
///
/// Missing fields take the values the form is pre-filled with (see
/// [`Default`]), unknown fields are rejected. Multi-select answers are sets:
/// the order they were picked in does not matter and they always render in
/// form order, which keeps prompts reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct PatientRecord {
    // Basic information
    #[schemars(range(min = 0, max = 120))]
    pub age: u8,
    pub gender: Gender,
    pub education: Education,
    /// Current or former occupation.
    pub occupation: String,
    /// Years since diagnosis.
    #[schemars(range(min = 0, max = 30))]
    pub disease_duration: u8,
    /// Age at which the first symptoms appeared.
    #[schemars(range(min = 0, max = 120))]
    pub age_of_onset: u8,
    pub handedness: Handedness,

    // Cognitive and behavioral assessment
    #[schemars(range(min = 0, max = 30))]
    pub mmse_score: u8,
    #[schemars(range(min = 0, max = 30))]
    pub moca_score: u8,
    pub cdr_score: Cdr,
    /// Functional Activities Questionnaire.
    #[schemars(range(min = 0, max = 30))]
    pub faq_score: u8,
    /// Geriatric Depression Scale.
    #[schemars(range(min = 0, max = 15))]
    pub gds_score: u8,
    /// Neuropsychiatric Inventory.
    #[schemars(range(min = 0, max = 144))]
    pub npi_score: u8,

    // Motor symptoms
    /// Meters per second.
    #[schemars(range(min = 0.0, max = 2.0))]
    pub gait_speed: f64,
    pub balance_score: Balance,
    /// Number of falls in the past six months.
    #[schemars(range(min = 0, max = 50))]
    pub falls_6months: u8,
    pub tremor: Severity,
    pub rigidity: Severity,
    pub bradykinesia: Severity,

    // Biomarkers, pg/mL
    #[schemars(range(min = 0, max = 2000))]
    pub csf_abeta: u16,
    #[schemars(range(min = 0, max = 2000))]
    pub csf_tau: u16,
    #[schemars(range(min = 0, max = 200))]
    pub csf_ptau: u16,
    /// Serum neurofilament light chain.
    #[schemars(range(min = 0, max = 200))]
    pub nfl_level: u16,

    // Imaging
    /// mm³
    #[schemars(range(min = 1000, max = 5000))]
    pub hippocampal_volume: u32,
    /// mm³
    #[schemars(range(min = 10000, max = 100000))]
    pub ventricle_volume: u32,
    /// Mean cortical thickness in mm.
    #[schemars(range(min = 1.0, max = 5.0))]
    pub cortical_thickness: f64,

    // Genetic and risk factors
    pub apoe_status: ApoeGenotype,
    pub family_history: BTreeSet<FamilyHistory>,
    pub cardiovascular_risk: BTreeSet<CardiovascularRisk>,
    pub sleep_disorders: BTreeSet<SleepDisorder>,
    pub traumatic_brain_injury: Severity,
    pub psychiatric_history: BTreeSet<PsychiatricHistory>,

    // Lifestyle and environment
    pub physical_activity: WeeklyHours,
    pub cognitive_engagement: WeeklyHours,
    pub social_engagement: WeeklyHours,
    pub diet_pattern: BTreeSet<DietPattern>,
    pub sleep_quality: SleepQuality,
    pub stress_level: StressLevel,
}

impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            age: 65,
            gender: Gender::Male,
            education: Education::TwelveToSixteenYears,
            occupation: "Retired Teacher".into(),
            disease_duration: 2,
            age_of_onset: 63,
            handedness: Handedness::Right,

            mmse_score: 26,
            moca_score: 24,
            cdr_score: Cdr::VeryMild,
            faq_score: 5,
            gds_score: 3,
            npi_score: 10,

            gait_speed: 1.0,
            balance_score: Balance::MildImpairment,
            falls_6months: 1,
            tremor: Severity::Absent,
            rigidity: Severity::Absent,
            bradykinesia: Severity::Mild,

            csf_abeta: 500,
            csf_tau: 350,
            csf_ptau: 60,
            nfl_level: 22,

            hippocampal_volume: 3500,
            ventricle_volume: 35000,
            cortical_thickness: 2.5,

            apoe_status: ApoeGenotype::E3E4,
            family_history: BTreeSet::from([FamilyHistory::Alzheimers]),
            cardiovascular_risk: BTreeSet::from([CardiovascularRisk::Hypertension]),
            sleep_disorders: BTreeSet::from([SleepDisorder::NoneReported]),
            traumatic_brain_injury: Severity::Absent,
            psychiatric_history: BTreeSet::from([PsychiatricHistory::NoneReported]),

            physical_activity: WeeklyHours::Hours(3),
            cognitive_engagement: WeeklyHours::Hours(4),
            social_engagement: WeeklyHours::Hours(3),
            diet_pattern: BTreeSet::from([DietPattern::Mediterranean]),
            sleep_quality: SleepQuality::Good,
            stress_level: StressLevel::Moderate,
        }
    }
}

impl PatientRecord {
    /// Serialize the record into the labeled text block sent as patient data.
    ///
    /// Sections and fields always appear in the same order; decimals keep at
    /// least one fractional digit (`1.0`, `2.5`).
    pub fn to_prompt_block(&self) -> String {
        let block = PromptBuilder::new()
            .add_section("BASIC INFORMATION")
            .add_row([
                ("Age", self.age.to_string()),
                ("Gender", self.gender.to_string()),
                ("Education", self.education.to_string()),
            ])
            .add_row([
                ("Disease Duration", format!("{} years", self.disease_duration)),
                ("Age of Onset", self.age_of_onset.to_string()),
            ])
            .add_row([
                ("Occupation", single_line(&self.occupation)),
                ("Handedness", self.handedness.to_string()),
            ])
            .add_blank_line()
            .add_section("COGNITIVE AND BEHAVIORAL SCORES")
            .add_row([
                ("MMSE", format!("{}/30", self.mmse_score)),
                ("MoCA", format!("{}/30", self.moca_score)),
                ("CDR", self.cdr_score.to_string()),
            ])
            .add_row([
                ("FAQ", format!("{}/30", self.faq_score)),
                ("GDS", format!("{}/15", self.gds_score)),
                ("NPI", format!("{}/144", self.npi_score)),
            ])
            .add_blank_line()
            .add_section("MOTOR SYMPTOMS")
            .add_row([
                ("Gait Speed", format!("{} m/s", decimal(self.gait_speed))),
                ("Balance", self.balance_score.to_string()),
            ])
            .add_key_value("Falls (6 months)", self.falls_6months)
            .add_row([
                ("Tremor", self.tremor),
                ("Rigidity", self.rigidity),
                ("Bradykinesia", self.bradykinesia),
            ])
            .add_blank_line()
            .add_section("BIOMARKERS")
            .add_row([
                ("CSF Aβ42", format!("{} pg/mL", self.csf_abeta)),
                ("Total Tau", format!("{} pg/mL", self.csf_tau)),
            ])
            .add_row([
                ("Phosphorylated Tau", format!("{} pg/mL", self.csf_ptau)),
                ("NFL", format!("{} pg/mL", self.nfl_level)),
            ])
            .add_blank_line()
            .add_section("IMAGING MARKERS")
            .add_key_value("Hippocampal Volume", format!("{} mm³", self.hippocampal_volume))
            .add_key_value("Ventricular Volume", format!("{} mm³", self.ventricle_volume))
            .add_key_value(
                "Cortical Thickness",
                format!("{} mm", decimal(self.cortical_thickness)),
            )
            .add_blank_line()
            .add_section("GENETIC AND RISK FACTORS")
            .add_key_value("APOE", self.apoe_status)
            .add_key_value("Family History", join_list(&self.family_history))
            .add_key_value("Cardiovascular Risks", join_list(&self.cardiovascular_risk))
            .add_key_value("Sleep Disorders", join_list(&self.sleep_disorders))
            .add_key_value("TBI History", self.traumatic_brain_injury)
            .add_key_value("Psychiatric History", join_list(&self.psychiatric_history))
            .add_blank_line()
            .add_section("LIFESTYLE FACTORS")
            .add_key_value(
                "Physical Activity",
                format!("{} hrs/week", self.physical_activity),
            )
            .add_key_value(
                "Cognitive Engagement",
                format!("{} hrs/week", self.cognitive_engagement),
            )
            .add_key_value(
                "Social Engagement",
                format!("{} hrs/week", self.social_engagement),
            )
            .add_key_value("Diet", join_list(&self.diet_pattern))
            .add_key_value("Sleep Quality", self.sleep_quality)
            .add_key_value("Stress Level", self.stress_level)
            .finalize();

        block.trim_end().to_owned()
    }
}

/// `{:?}` on `f64` always keeps a fractional digit, unlike `{}`.
/// Plain positional notation with at least one fractional digit.
fn decimal(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') { text } else { format!("{text}.0") }
}

/// Collapse free text onto one line so it cannot break the block layout.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_keep_a_fractional_digit() {
        assert_eq!(decimal(1.0), "1.0");
        assert_eq!(decimal(2.5), "2.5");
        assert_eq!(decimal(0.0), "0.0");
        assert_eq!(decimal(0.00001), "0.00001");
        assert_eq!(decimal(1.25), "1.25");
    }

    #[test]
    fn free_text_is_collapsed_to_one_line() {
        assert_eq!(single_line("  Retired\n  Teacher "), "Retired Teacher");
        assert_eq!(single_line(""), "");
    }
}
