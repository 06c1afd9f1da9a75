use bodycheck_model::assessment::{BmiResult, Classification};

const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_BELOW: f64 = 25.0;
const OVERWEIGHT_BELOW: f64 = 30.0;

/// Compute body mass index from weight in kilograms and height in
/// centimeters, rounded to one decimal place (half away from zero).
///
/// Returns `None` if either measurement is missing, zero or NaN, or if
/// the result is not finite. Negative measurements are not rejected and
/// yield a signed result.
pub fn compute_bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let weight_kg = weight_kg.filter(|w| is_usable(*w))?;
    let height_cm = height_cm.filter(|h| is_usable(*h))?;

    let height_m = height_cm / 100.0;
    Some(round_to_tenth(weight_kg / (height_m * height_m))).filter(|bmi| bmi.is_finite())
}

pub fn classify_bmi(value: Option<f64>) -> Classification {
    match value {
        None => Classification::Unknown,
        Some(bmi) if bmi < UNDERWEIGHT_BELOW => Classification::Underweight,
        Some(bmi) if bmi < NORMAL_BELOW => Classification::Normal,
        Some(bmi) if bmi < OVERWEIGHT_BELOW => Classification::Overweight,
        Some(_) => Classification::Obese,
    }
}

pub fn from_value(value: Option<f64>) -> BmiResult {
    BmiResult {
        value,
        classification: classify_bmi(value),
    }
}

pub fn evaluate(weight_kg: Option<f64>, height_cm: Option<f64>) -> BmiResult {
    from_value(compute_bmi(weight_kg, height_cm))
}

fn is_usable(measurement: f64) -> bool {
    measurement != 0.0 && !measurement.is_nan()
}

/// Ties are decided on the scaled binary value, so a stored 24.95
/// (really 24.9499...) becomes 25.0. Negative zero is normalized.
fn round_to_tenth(x: f64) -> f64 {
    let rounded = (x * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
