//! Rule tables mapping a profile and its BMI band to canned advice.
//!
//! Every branch appends to the output lists; nothing returns early. The
//! order of the produced items is part of the contract: diet items are
//! goal-based then BMI-based, habit items are BMI-based, then
//! activity-based, then the universal tips.

use bodycheck_model::{
    assessment::{BmiResult, Classification, Recommendation},
    profile::{Activity, DietPref, Goal, Profile},
};

pub const LOSE_PLANT_BASED: &str =
    "Lean on legumes, tofu/tempeh, whole grains, and ample vegetables.";
pub const LOSE_LOW_CARB: &str =
    "Prioritise proteins, non-starchy vegetables, and healthy fats; track portions.";
pub const LOSE_DEFAULT: &str = "Lean proteins (chicken, fish), whole grains, and lots of vegetables.";
pub const GAIN: &str =
    "Increase calorie intake with nutrient-dense meals; add protein-rich snacks.";
pub const MAINTAIN: &str =
    "Balance meals: vegetables, a protein source, whole grains, and healthy fats.";
pub const GOAL_DEFAULT: &str =
    "Focus on small sustainable shifts: more veg, less processed food, consistent meals.";
pub const UNDERWEIGHT_SNACKS: &str =
    "Include calorie-dense healthy snacks: nut butter, full-fat yogurt, smoothies with oats.";

pub const UNDERWEIGHT_CLINICIAN: &str = "Discuss with a clinician if weight is unintended.";
pub const NORMAL_PRAISE: &str = "Maintain balanced meals and varied activity. Good job!";
pub const GRADUAL_LOSS: &str =
    "Aim for gradual weight loss (0.25–0.5 kg/week) with small sustainable changes.";
pub const LIMIT_PROCESSED: &str = "Limit sugar-sweetened beverages and highly processed snacks.";

pub const SEDENTARY: &str =
    "Increase daily movement: short walks, standing breaks, and 2–3 light workouts weekly.";
pub const LIGHT: &str =
    "Build to consistent moderate activity — target 150 min/week of moderate exercise.";
pub const ACTIVITY_DEFAULT: &str =
    "Keep varying your routine; include strength work and recovery days.";

pub const UNIVERSAL_HABITS: [&str; 3] = [
    "Stay hydrated across the day.",
    "Prioritise 7–9 hours of sleep and short stress breaks.",
    "Schedule regular checkups and consult a registered dietitian or doctor for personalised needs.",
];

pub const INCOMPLETE_SUMMARY: &str = "BMI data incomplete.";

pub fn select_recommendation(profile: &Profile, bmi: &BmiResult) -> Recommendation {
    let mut diet_items = vec![goal_diet_item(profile.goal, profile.diet_pref)];
    diet_items.extend(bmi_diet_item(bmi.classification));

    let mut habit_items = bmi_habit_items(bmi.classification).to_vec();
    habit_items.push(activity_habit_item(profile.activity));
    habit_items.extend(UNIVERSAL_HABITS);

    Recommendation {
        greeting: greeting(profile.name.as_deref()),
        bmi_summary: bmi_summary(bmi),
        diet_items: diet_items.into_iter().map(str::to_owned).collect(),
        habit_items: habit_items.into_iter().map(str::to_owned).collect(),
    }
}

fn greeting(name: Option<&str>) -> String {
    match name.filter(|n| !n.is_empty()) {
        Some(name) => format!("Hi {}!", name),
        None => "Hello!".to_owned(),
    }
}

fn bmi_summary(bmi: &BmiResult) -> String {
    match bmi.value {
        Some(value) => format!("Your BMI is {} ({}).", value, bmi.classification),
        None => INCOMPLETE_SUMMARY.to_owned(),
    }
}

fn goal_diet_item(goal: Goal, diet_pref: DietPref) -> &'static str {
    match (goal, diet_pref) {
        (Goal::Lose, DietPref::Vegetarian | DietPref::Vegan) => LOSE_PLANT_BASED,
        (Goal::Lose, DietPref::Lowcarb | DietPref::Keto) => LOSE_LOW_CARB,
        (Goal::Lose, DietPref::Other) => LOSE_DEFAULT,
        (Goal::Gain, _) => GAIN,
        (Goal::Maintain, _) => MAINTAIN,
        (Goal::Other, _) => GOAL_DEFAULT,
    }
}

fn bmi_diet_item(classification: Classification) -> Option<&'static str> {
    match classification {
        Classification::Underweight => Some(UNDERWEIGHT_SNACKS),
        _ => None,
    }
}

fn bmi_habit_items(classification: Classification) -> &'static [&'static str] {
    match classification {
        Classification::Underweight => &[UNDERWEIGHT_CLINICIAN],
        Classification::Normal => &[NORMAL_PRAISE],
        Classification::Overweight | Classification::Obese => &[GRADUAL_LOSS, LIMIT_PROCESSED],
        Classification::Unknown => &[],
    }
}

fn activity_habit_item(activity: Activity) -> &'static str {
    match activity {
        Activity::Sedentary => SEDENTARY,
        Activity::Light => LIGHT,
        Activity::Other => ACTIVITY_DEFAULT,
    }
}
