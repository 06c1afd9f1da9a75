use std::str::FromStr;

use bodycheck_model::profile::{Activity, DietPref, Gender, Goal, Profile};
use serde::Deserialize;

/// Raw text of the submitted form controls. Every field is optional on
/// the wire and defaults to an empty string.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormFields {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub weight: String,
    pub height: String,
    pub activity: String,
    pub diet_pref: String,
    pub goal: String,
}

impl FormFields {
    pub fn into_profile(self) -> Profile {
        let name = self.name.trim();
        let gender = self.gender.trim();

        Profile {
            name: (!name.is_empty()).then(|| name.to_owned()),
            age: parse_leading::<u32>(&self.age, false).filter(|age| *age != 0),
            gender: (!gender.is_empty()).then(|| Gender::from(gender)),
            weight_kg: parse_measurement(&self.weight),
            height_cm: parse_measurement(&self.height),
            activity: Activity::from(self.activity.as_str()),
            diet_pref: DietPref::from(self.diet_pref.as_str()),
            goal: Goal::from(self.goal.as_str()),
        }
    }
}

fn parse_measurement(text: &str) -> Option<f64> {
    parse_leading::<f64>(text, true).filter(|x| x.is_finite() && *x != 0.0)
}

/// Parses the numeric prefix of `text` (after leading whitespace), so
/// "70kg" yields 70.
fn parse_leading<T: FromStr>(text: &str, fractional: bool) -> Option<T> {
    numeric_prefix(text.trim_start(), fractional).parse().ok()
}

/// Longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`, with
/// the fraction and exponent only when `fractional` is set. Empty when
/// the mantissa has no digits.
fn numeric_prefix(text: &str, fractional: bool) -> &str {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;
    let mut mantissa_digits = integer_digits;

    if fractional {
        if bytes.get(end) == Some(&b'.') {
            let fraction_digits = count_digits(&bytes[end + 1..]);
            end += 1 + fraction_digits;
            mantissa_digits += fraction_digits;
        }

        if mantissa_digits > 0 && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exponent_end = end + 1;
            if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
                exponent_end += 1;
            }
            let exponent_digits = count_digits(&bytes[exponent_end..]);
            if exponent_digits > 0 {
                end = exponent_end + exponent_digits;
            }
        }
    }

    if mantissa_digits == 0 {
        ""
    } else {
        &text[..end]
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(weight: &str, height: &str) -> FormFields {
        FormFields {
            weight: weight.to_owned(),
            height: height.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn parse_measurement_reads_leading_number() {
        let test_data = [
            ("70", Some(70.0)),
            ("  70.5", Some(70.5)),
            ("70kg", Some(70.0)),
            ("1.75e2 cm", Some(175.0)),
            ("-70", Some(-70.0)),
            ("", None),
            ("abc", None),
            ("0", None),
            ("0.0kg", None),
            ("inf", None),
            ("NaN", None),
            (".5", Some(0.5)),
            ("70.", Some(70.0)),
            ("7e", Some(7.0)),
            ("7e+", Some(7.0)),
            ("+", None),
            ("-.", None),
        ];

        for (i, (text, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(parse_measurement(text), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn numeric_prefix_stops_at_first_non_numeric_character() {
        let test_data = [
            ("70kg", true, "70"),
            ("-1.5e3x", true, "-1.5e3"),
            ("1.75e2 cm", true, "1.75e2"),
            ("1.75E-2", true, "1.75E-2"),
            ("4.5", false, "4"),
            ("+42 years", false, "+42"),
            ("e5", true, ""),
            (".e5", true, ""),
            ("ab12", true, ""),
            ("", true, ""),
        ];

        for (i, (text, fractional, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(
                numeric_prefix(text, fractional),
                expected_output,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn long_fields_are_parsed_from_their_prefix() {
        let weight = format!("72{}", "x".repeat(16 * 1024));
        let height = "1".repeat(16 * 1024);

        assert_eq!(parse_measurement(&weight), Some(72.0));
        assert_eq!(parse_measurement(&height), None);
    }

    #[test]
    fn age_reads_leading_integer() {
        let test_data = [
            ("42", Some(42)),
            ("42 years", Some(42)),
            ("4.5", Some(4)),
            ("0", None),
            ("-3", None),
            ("", None),
        ];

        for (i, (text, expected_output)) in test_data.into_iter().enumerate() {
            let profile = FormFields {
                age: text.to_owned(),
                ..Default::default()
            }
            .into_profile();
            assert_eq!(profile.age, expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn into_profile_trims_and_parses_tags() {
        let profile = FormFields {
            name: "  Ada  ".to_owned(),
            gender: "female".to_owned(),
            activity: "light".to_owned(),
            diet_pref: "vegan".to_owned(),
            goal: "lose".to_owned(),
            ..fields("70kg", "175")
        }
        .into_profile();

        assert_eq!(
            profile,
            Profile {
                name: Some("Ada".to_owned()),
                age: None,
                gender: Some(Gender::Female),
                weight_kg: Some(70.0),
                height_cm: Some(175.0),
                activity: Activity::Light,
                diet_pref: DietPref::Vegan,
                goal: Goal::Lose,
            }
        );
    }

    #[test]
    fn empty_form_gives_empty_profile() {
        let profile = FormFields::default().into_profile();

        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn form_measurements_feed_the_engine() {
        let profile = fields("70kg", "175").into_profile();
        let bmi = bodycheck_engine::bmi::evaluate(profile.weight_kg, profile.height_cm);

        assert_eq!(bmi.value, Some(22.9));
    }
}
