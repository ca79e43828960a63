use serde::Serialize;
use strum::Display;

const EXPLANATION: &str = "El IMC es una medida que relaciona peso y estatura. \
En niños y adolescentes se interpreta considerando la edad y el crecimiento. \
Ayuda a detectar si el estudiante está en un rango saludable.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Display)]
pub enum BmiCategory {
    #[serde(rename = "Bajo peso")]
    #[strum(serialize = "Bajo peso")]
    Underweight,
    #[serde(rename = "Normal")]
    #[strum(serialize = "Normal")]
    Normal,
    #[serde(rename = "Sobrepeso")]
    #[strum(serialize = "Sobrepeso")]
    Overweight,
    #[serde(rename = "Obesidad")]
    #[strum(serialize = "Obesidad")]
    Obese,
}

impl BmiCategory {
    /// Bands are half-open, `[lower, upper)`. Anything that is not below a
    /// band's upper bound falls through to the next one, so every `f64`
    /// (NaN included) lands in exactly one category.
    pub fn from_value(value: f64) -> Self {
        if value < 14.0 {
            BmiCategory::Underweight
        } else if value < 19.0 {
            BmiCategory::Normal
        } else if value < 23.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "categoria")]
    pub category: BmiCategory,
    #[serde(rename = "explicacion")]
    pub explanation: &'static str,
}

impl BmiResult {
    /// Returns `None` unless both inputs are finite and positive.
    pub fn calculate(weight_kg: f64, height_cm: f64) -> Option<Self> {
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return None;
        }
        if !(height_cm.is_finite() && height_cm > 0.0) {
            return None;
        }

        let height_m = height_cm / 100.0;
        let value = round_to_hundredths(weight_kg / (height_m * height_m));

        Some(Self {
            value,
            category: BmiCategory::from_value(value),
            explanation: EXPLANATION,
        })
    }
}

fn round_to_hundredths(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_rounds_to_two_decimals() {
        let test_data = [
            ((30.0, 130.0), 17.75),
            ((45.5, 150.0), 20.22),
            ((25.0, 120.0), 17.36),
            ((60.0, 140.0), 30.61),
            ((20.0, 140.0), 10.2),
            ((100.0, 100.0), 100.0),
        ];

        for (i, ((weight, height), expected)) in test_data.into_iter().enumerate() {
            let result = BmiResult::calculate(weight, height).unwrap();
            assert_eq!(result.value, expected, "Test case #{}", i);
        }
    }

    #[test]
    fn calculate_assigns_category_from_rounded_value() {
        let test_data = [
            ((20.0, 140.0), BmiCategory::Underweight),
            ((30.0, 130.0), BmiCategory::Normal),
            ((45.5, 150.0), BmiCategory::Overweight),
            ((60.0, 160.0), BmiCategory::Obese),
        ];

        for (i, ((weight, height), expected)) in test_data.into_iter().enumerate() {
            let result = BmiResult::calculate(weight, height).unwrap();
            assert_eq!(result.category, expected, "Test case #{}", i);
            assert!(!result.explanation.is_empty());
        }
    }

    #[test]
    fn calculate_rejects_non_positive_inputs() {
        let test_data = [
            (0.0, 150.0),
            (-5.0, 150.0),
            (40.0, 0.0),
            (40.0, -150.0),
            (f64::NAN, 150.0),
            (40.0, f64::INFINITY),
        ];

        for (i, (weight, height)) in test_data.into_iter().enumerate() {
            assert_eq!(
                BmiResult::calculate(weight, height),
                None,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn category_band_edges() {
        let test_data = [
            (f64::NEG_INFINITY, BmiCategory::Underweight),
            (-1.0, BmiCategory::Underweight),
            (13.99, BmiCategory::Underweight),
            (14.0, BmiCategory::Normal),
            (18.99, BmiCategory::Normal),
            (19.0, BmiCategory::Overweight),
            (22.99, BmiCategory::Overweight),
            (23.0, BmiCategory::Obese),
            (f64::INFINITY, BmiCategory::Obese),
        ];

        for (i, (value, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(BmiCategory::from_value(value), expected, "Test case #{}", i);
        }
    }

    #[test]
    fn category_is_monotonic_in_value() {
        let mut previous = BmiCategory::from_value(-10.0);
        for step in -1000..5000 {
            let current = BmiCategory::from_value(step as f64 / 100.0);
            assert!(current >= previous, "Category decreased at {}", step);
            previous = current;
        }
    }

    #[test]
    fn serializes_with_spanish_keys() {
        let result = BmiResult::calculate(30.0, 130.0).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["valor"], 17.75);
        assert_eq!(json["categoria"], "Normal");
        assert_eq!(json["explicacion"], EXPLANATION);
    }

    #[test]
    fn category_display_matches_wire_label() {
        assert_eq!(BmiCategory::Underweight.to_string(), "Bajo peso");
        assert_eq!(BmiCategory::Obese.to_string(), "Obesidad");
    }
}
