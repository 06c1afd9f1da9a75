use strum::Display;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Classification {
    #[default]
    Unknown,
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Body mass index rounded to one decimal place. `classification` is
/// `Unknown` exactly when `value` is `None`.
#[cfg_attr(feature = "serde", serde_with::skip_serializing_none)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmiResult {
    pub value: Option<f64>,
    pub classification: Classification,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Recommendation {
    pub greeting: String,
    pub bmi_summary: String,
    pub diet_items: Vec<String>,
    pub habit_items: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub bmi: BmiResult,
    pub recommendation: Recommendation,
}
