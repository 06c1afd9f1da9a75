pub mod bmi;
pub mod recommendation;

use bodycheck_model::{assessment::Report, profile::Profile};
use log::debug;

/// Runs the whole pipeline for one submitted profile.
pub fn assess(profile: &Profile) -> Report {
    let bmi = bmi::evaluate(profile.weight_kg, profile.height_cm);
    debug!("Computed {:?} for goal={}", bmi, profile.goal);

    let recommendation = recommendation::select_recommendation(profile, &bmi);
    debug!(
        "Selected {} diet and {} habit items",
        recommendation.diet_items.len(),
        recommendation.habit_items.len()
    );

    Report {
        bmi,
        recommendation,
    }
}
