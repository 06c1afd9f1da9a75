use strum::{Display, EnumIter, IntoEnumIterator};

/// Generates the total conversions from a form tag. Unrecognized text
/// falls back to the enum's default variant instead of failing.
macro_rules! tag_conversions {
    ($($tag:ty),+) => {
        $(
            impl From<&str> for $tag {
                fn from(tag: &str) -> Self {
                    let tag = tag.trim();
                    Self::iter()
                        .find(|known| known.to_string().eq_ignore_ascii_case(tag))
                        .unwrap_or_default()
                }
            }

            impl From<String> for $tag {
                fn from(tag: String) -> Self {
                    Self::from(tag.as_str())
                }
            }

            impl From<$tag> for String {
                fn from(tag: $tag) -> Self {
                    tag.to_string()
                }
            }
        )+
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Activity {
    Sedentary,
    Light,
    #[default]
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum DietPref {
    Vegetarian,
    Vegan,
    Lowcarb,
    Keto,
    #[default]
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Goal {
    Lose,
    Gain,
    Maintain,
    #[default]
    Other,
}

tag_conversions!(Gender, Activity, DietPref, Goal);

/// Data submitted by a single user. Built per request and dropped once
/// the recommendation has been rendered.
#[cfg_attr(feature = "serde", serde_with::skip_serializing_none)]
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Profile {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity: Activity,
    pub diet_pref: DietPref,
    pub goal: Goal,
}

impl Profile {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    pub fn with_measurements(mut self, weight_kg: f64, height_cm: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self.height_cm = Some(height_cm);
        self
    }

    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activity = activity;
        self
    }

    pub fn with_diet_pref(mut self, diet_pref: DietPref) -> Self {
        self.diet_pref = diet_pref;
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags() {
        let test_data = [
            ("sedentary", Activity::Sedentary),
            ("light", Activity::Light),
            ("other", Activity::Other),
            (" Light ", Activity::Light),
            ("SEDENTARY", Activity::Sedentary),
        ];

        for (i, (tag, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(Activity::from(tag), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn unrecognized_tags_fall_back_to_other() {
        for tag in ["", "   ", "moderate", "paleo", "bulk"] {
            assert_eq!(Activity::from(tag), Activity::Other, "tag {:?}", tag);
            assert_eq!(DietPref::from(tag), DietPref::Other, "tag {:?}", tag);
            assert_eq!(Goal::from(tag), Goal::Other, "tag {:?}", tag);
            assert_eq!(Gender::from(tag), Gender::Other, "tag {:?}", tag);
        }
    }

    #[test]
    fn display_matches_parsed_tag() {
        for diet_pref in DietPref::iter() {
            assert_eq!(DietPref::from(diet_pref.to_string()), diet_pref);
        }
        for goal in Goal::iter() {
            assert_eq!(Goal::from(String::from(goal)), goal);
        }
        assert_eq!(DietPref::Lowcarb.to_string(), "lowcarb");
    }

    #[test]
    fn profile_builder_sets_fields() {
        let profile = Profile::default()
            .with_name("Ada")
            .with_measurements(70.0, 175.0)
            .with_goal(Goal::Lose);

        assert_eq!(profile.name.as_deref(), Some("Ada"));
        assert_eq!(profile.weight_kg, Some(70.0));
        assert_eq!(profile.height_cm, Some(175.0));
        assert_eq!(profile.goal, Goal::Lose);
        assert_eq!(profile.activity, Activity::Other);
        assert_eq!(profile.diet_pref, DietPref::Other);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn profile_deserializes_with_unknown_tags() {
        let profile: Profile = serde_json::from_str(
            r#"{"name":"Ada","weightKg":70,"heightCm":175,"dietPref":"paleo","goal":"lose"}"#,
        )
        .unwrap();

        assert_eq!(profile.name.as_deref(), Some("Ada"));
        assert_eq!(profile.age, None);
        assert_eq!(profile.weight_kg, Some(70.0));
        assert_eq!(profile.diet_pref, DietPref::Other);
        assert_eq!(profile.goal, Goal::Lose);
        assert_eq!(profile.activity, Activity::Other);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn profile_serialization_skips_absent_fields() {
        let json = serde_json::to_value(Profile::default().with_goal(Goal::Gain)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "activity": "other",
                "dietPref": "other",
                "goal": "gain",
            })
        );
    }
}
