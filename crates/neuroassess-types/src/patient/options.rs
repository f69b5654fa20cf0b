//! Enumerated answers for the select, multi-select and slider controls.
//!
//! Each option serializes as the exact label shown on the form (`"ε3/ε4"`,
//! `"0.5 (Very Mild)"`, …) and renders the same label inside prompts. The
//! declaration order is the order options are listed in, which is also the
//! order multi-select values are rendered in.
use std::fmt;

use schemars::{JsonSchema, r#gen::SchemaGenerator, schema::Schema};
use serde::{Deserialize, Serialize};

macro_rules! form_options {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
        )]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in form order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Label shown on the form and used inside prompts.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

form_options!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

form_options!(Education {
    UnderTwelveYears => "< 12 years",
    TwelveToSixteenYears => "12-16 years",
    OverSixteenYears => "> 16 years",
});

form_options!(Handedness {
    Right => "Right",
    Left => "Left",
    Ambidextrous => "Ambidextrous",
});

form_options!(
    /// Clinical Dementia Rating.
    Cdr {
        Normal => "0 (Normal)",
        VeryMild => "0.5 (Very Mild)",
        Mild => "1 (Mild)",
        Moderate => "2 (Moderate)",
        Severe => "3 (Severe)",
    }
);

form_options!(Balance {
    Normal => "Normal",
    MildImpairment => "Mild Impairment",
    ModerateImpairment => "Moderate Impairment",
    SevereImpairment => "Severe Impairment",
});

form_options!(
    /// Shared scale for tremor, rigidity, bradykinesia and brain injury history.
    Severity {
        Absent => "None",
        Mild => "Mild",
        Moderate => "Moderate",
        Severe => "Severe",
    }
);

form_options!(ApoeGenotype {
    E3E3 => "ε3/ε3",
    E3E4 => "ε3/ε4",
    E4E4 => "ε4/ε4",
    E2E3 => "ε2/ε3",
    E2E4 => "ε2/ε4",
    Unknown => "Unknown",
});

form_options!(FamilyHistory {
    Alzheimers => "Alzheimer's",
    Parkinsons => "Parkinson's",
    Ftd => "FTD",
    Als => "ALS",
    OtherNeurological => "Other Neurological",
});

form_options!(CardiovascularRisk {
    Hypertension => "Hypertension",
    Diabetes => "Diabetes",
    Hyperlipidemia => "Hyperlipidemia",
    Smoking => "Smoking",
    Obesity => "Obesity",
});

form_options!(SleepDisorder {
    NoneReported => "None",
    SleepApnea => "Sleep Apnea",
    RemBehaviorDisorder => "REM Behavior Disorder",
    Insomnia => "Insomnia",
});

form_options!(PsychiatricHistory {
    NoneReported => "None",
    Depression => "Depression",
    Anxiety => "Anxiety",
    Bipolar => "Bipolar",
    Schizophrenia => "Schizophrenia",
});

form_options!(DietPattern {
    Mediterranean => "Mediterranean",
    Mind => "MIND Diet",
    Western => "Western",
    Vegetarian => "Vegetarian",
    Other => "Other",
});

form_options!(SleepQuality {
    Poor => "Poor",
    Fair => "Fair",
    Good => "Good",
    Excellent => "Excellent",
});

form_options!(StressLevel {
    Low => "Low",
    Moderate => "Moderate",
    High => "High",
    Severe => "Severe",
});

/// Slider value for weekly activity hours: `0` through `7`, or `"7+"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HoursInput", into = "HoursInput")]
pub enum WeeklyHours {
    Hours(u8),
    MoreThanSeven,
}

impl WeeklyHours {
    pub const MAX_HOURS: u8 = 7;
    pub const MORE_THAN_SEVEN: &'static str = "7+";
}

impl fmt::Display for WeeklyHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeeklyHours::Hours(hours) => write!(f, "{hours}"),
            WeeklyHours::MoreThanSeven => f.write_str(Self::MORE_THAN_SEVEN),
        }
    }
}

/// Wire form of [`WeeklyHours`]: a number of hours or the `"7+"` label.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum HoursInput {
    Hours(u8),
    Label(String),
}

impl TryFrom<HoursInput> for WeeklyHours {
    type Error = String;

    fn try_from(value: HoursInput) -> Result<Self, Self::Error> {
        match value {
            HoursInput::Hours(hours) if hours <= WeeklyHours::MAX_HOURS => {
                Ok(WeeklyHours::Hours(hours))
            }
            HoursInput::Label(label) if label == WeeklyHours::MORE_THAN_SEVEN => {
                Ok(WeeklyHours::MoreThanSeven)
            }
            HoursInput::Hours(hours) => Err(format!(
                "{hours} hours/week is not a slider option; use 0-{} or \"{}\"",
                WeeklyHours::MAX_HOURS,
                WeeklyHours::MORE_THAN_SEVEN
            )),
            HoursInput::Label(label) => Err(format!(
                "`{label}` is not a slider option; use 0-{} or \"{}\"",
                WeeklyHours::MAX_HOURS,
                WeeklyHours::MORE_THAN_SEVEN
            )),
        }
    }
}

impl From<WeeklyHours> for HoursInput {
    fn from(value: WeeklyHours) -> Self {
        match value {
            WeeklyHours::Hours(hours) => HoursInput::Hours(hours),
            WeeklyHours::MoreThanSeven => HoursInput::Label(WeeklyHours::MORE_THAN_SEVEN.into()),
        }
    }
}

impl JsonSchema for WeeklyHours {
    fn schema_name() -> String {
        "WeeklyHours".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        HoursInput::json_schema(generator)
    }
}
