use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[serde(alias = "masculino", alias = "m")]
    #[strum(serialize = "masculino")]
    Male,
    #[serde(alias = "femenino", alias = "f")]
    #[strum(serialize = "femenino")]
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    #[serde(alias = "perú")]
    #[strum(serialize = "Perú")]
    Peru,
    #[strum(serialize = "Chile")]
    Chile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    /// Kilograms.
    pub weight: f64,
    /// Centimetres.
    pub height: f64,
    #[serde(alias = "activity_level")]
    pub activity: String,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub grade: Option<String>,
}

impl StudentInput {
    /// Allergies with surrounding whitespace removed, `None` if blank.
    pub fn allergies(&self) -> Option<&str> {
        self.allergies
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_form_payload() {
        let student: StudentInput = serde_json::from_str(
            r#"{
                "name": "Lucía",
                "age": 9,
                "grade": "4to",
                "sex": "femenino",
                "weight": 30.5,
                "height": 132,
                "activity": "moderada",
                "allergies": "",
                "country": "peru"
            }"#,
        )
        .unwrap();

        assert_eq!(student.name, "Lucía");
        assert_eq!(student.age, 9);
        assert_eq!(student.sex, Sex::Female);
        assert_eq!(student.weight, 30.5);
        assert_eq!(student.height, 132.0);
        assert_eq!(student.country, Some(Country::Peru));
        assert_eq!(student.grade.as_deref(), Some("4to"));
        assert_eq!(student.allergies(), None);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let student: StudentInput = serde_json::from_str(
            r#"{"name": "Tomás", "age": 11, "sex": "male", "weight": 40, "height": 145, "activity": "alta"}"#,
        )
        .unwrap();

        assert_eq!(student.sex, Sex::Male);
        assert_eq!(student.country, None);
        assert_eq!(student.allergies, None);
        assert_eq!(student.grade, None);
    }

    #[test]
    fn rejects_unknown_country() {
        let result = serde_json::from_str::<Country>(r#""narnia""#);
        assert!(result.is_err());
    }

    #[test]
    fn allergies_are_trimmed() {
        let test_data = [
            (None, None),
            (Some("   "), None),
            (Some(" maní "), Some("maní")),
            (Some("lactosa"), Some("lactosa")),
        ];

        for (i, (raw, expected)) in test_data.into_iter().enumerate() {
            let student = StudentInput {
                name: "Ana".to_owned(),
                age: 8,
                sex: Sex::Female,
                weight: 25.0,
                height: 125.0,
                activity: "baja".to_owned(),
                allergies: raw.map(str::to_owned),
                country: None,
                grade: None,
            };
            assert_eq!(student.allergies(), expected, "Test case #{}", i);
        }
    }

    #[test]
    fn display_names_are_spanish() {
        assert_eq!(Country::Peru.to_string(), "Perú");
        assert_eq!(Country::Chile.to_string(), "Chile");
        assert_eq!(Sex::Male.to_string(), "masculino");
    }
}
