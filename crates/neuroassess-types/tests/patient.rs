use std::collections::BTreeSet;

use neuroassess_types::patient::{
    ApoeGenotype, CardiovascularRisk, FamilyHistory, FormError, PatientRecord, WeeklyHours,
};

#[test]
fn block_contains_headline_values() {
    let record = PatientRecord {
        age: 65,
        mmse_score: 26,
        apoe_status: ApoeGenotype::E3E4,
        ..PatientRecord::default()
    };

    let block = record.to_prompt_block();
    assert!(block.contains("Age: 65"));
    assert!(block.contains("MMSE: 26/30"));
    assert!(block.contains("APOE: ε3/ε4"));
}

#[test]
fn default_block_matches_form_layout() {
    let expected = "\
BASIC INFORMATION:
Age: 65 | Gender: Male | Education: 12-16 years
Disease Duration: 2 years | Age of Onset: 63
Occupation: Retired Teacher | Handedness: Right

COGNITIVE AND BEHAVIORAL SCORES:
MMSE: 26/30 | MoCA: 24/30 | CDR: 0.5 (Very Mild)
FAQ: 5/30 | GDS: 3/15 | NPI: 10/144

MOTOR SYMPTOMS:
Gait Speed: 1.0 m/s | Balance: Mild Impairment
Falls (6 months): 1
Tremor: None | Rigidity: None | Bradykinesia: Mild

BIOMARKERS:
CSF Aβ42: 500 pg/mL | Total Tau: 350 pg/mL
Phosphorylated Tau: 60 pg/mL | NFL: 22 pg/mL

IMAGING MARKERS:
Hippocampal Volume: 3500 mm³
Ventricular Volume: 35000 mm³
Cortical Thickness: 2.5 mm

GENETIC AND RISK FACTORS:
APOE: ε3/ε4
Family History: Alzheimer's
Cardiovascular Risks: Hypertension
Sleep Disorders: None
TBI History: None
Psychiatric History: None

LIFESTYLE FACTORS:
Physical Activity: 3 hrs/week
Cognitive Engagement: 4 hrs/week
Social Engagement: 3 hrs/week
Diet: Mediterranean
Sleep Quality: Good
Stress Level: Moderate";

    assert_eq!(PatientRecord::default().to_prompt_block(), expected);
}

#[test]
fn multi_select_order_does_not_depend_on_input_order() {
    let a = PatientRecord::from_json(
        r#"{"cardiovascular_risk": ["Smoking", "Diabetes", "Hypertension"]}"#,
    )
    .unwrap();
    let b = PatientRecord::from_json(
        r#"{"cardiovascular_risk": ["Hypertension", "Smoking", "Diabetes"]}"#,
    )
    .unwrap();

    assert_eq!(a.to_prompt_block(), b.to_prompt_block());
    assert!(
        a.to_prompt_block()
            .contains("Cardiovascular Risks: Hypertension, Diabetes, Smoking")
    );
}

#[test]
fn empty_multi_select_renders_as_empty_value() {
    let record = PatientRecord {
        family_history: BTreeSet::new(),
        ..PatientRecord::default()
    };

    let block = record.to_prompt_block();
    assert!(block.contains("Family History: \n"));
}

#[test]
fn empty_json_yields_form_defaults() {
    let record = PatientRecord::from_json("{}").unwrap();
    assert_eq!(record, PatientRecord::default());
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let record = PatientRecord::from_json(
        r#"{
            "age": 72,
            "apoe_status": "ε4/ε4",
            "family_history": ["Alzheimer's", "FTD"],
            "physical_activity": "7+",
            "gait_speed": 0.8
        }"#,
    )
    .unwrap();

    assert_eq!(record.age, 72);
    assert_eq!(record.apoe_status, ApoeGenotype::E4E4);
    assert_eq!(
        record.family_history,
        BTreeSet::from([FamilyHistory::Alzheimers, FamilyHistory::Ftd])
    );
    assert_eq!(record.physical_activity, WeeklyHours::MoreThanSeven);
    assert_eq!(record.mmse_score, 26);
    assert_eq!(
        record.cardiovascular_risk,
        BTreeSet::from([CardiovascularRisk::Hypertension])
    );

    let block = record.to_prompt_block();
    assert!(block.contains("Gait Speed: 0.8 m/s"));
    assert!(block.contains("Physical Activity: 7+ hrs/week"));
    assert!(block.contains("Family History: Alzheimer's, FTD"));
}

#[test]
fn out_of_range_values_are_rejected() {
    let err = PatientRecord::from_json(r#"{"mmse_score": 31}"#).unwrap_err();
    match err {
        FormError::OutOfRange {
            field,
            value,
            min,
            max,
        } => {
            assert_eq!(field, "mmse_score");
            assert_eq!(value, "31");
            assert_eq!(min, "0");
            assert_eq!(max, "30");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(PatientRecord::from_json(r#"{"hippocampal_volume": 900}"#).is_err());
    assert!(PatientRecord::from_json(r#"{"cortical_thickness": 5.5}"#).is_err());
}

#[test]
fn unknown_fields_and_labels_are_rejected() {
    assert!(matches!(
        PatientRecord::from_json(r#"{"mmse": 20}"#),
        Err(FormError::Parse(_))
    ));
    assert!(matches!(
        PatientRecord::from_json(r#"{"apoe_status": "e3/e4"}"#),
        Err(FormError::Parse(_))
    ));
}

#[test]
fn pretty_json_round_trips_through_the_form() {
    let json = PatientRecord::default().to_json_pretty().unwrap();
    assert!(json.contains("\"apoe_status\": \"ε3/ε4\""));
    assert_eq!(
        PatientRecord::from_json(&json).unwrap(),
        PatientRecord::default()
    );
}

#[test]
fn small_decimals_render_without_exponent() {
    let record = PatientRecord::from_json(r#"{"gait_speed": 0.00001, "cortical_thickness": 3.0}"#)
        .unwrap();

    let block = record.to_prompt_block();
    assert!(block.contains("Gait Speed: 0.00001 m/s"), "{block}");
    assert!(block.contains("3.0 mm"), "{block}");
}
