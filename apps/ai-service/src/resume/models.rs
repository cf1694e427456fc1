use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Structured candidate record extracted from a resume.
///
/// Every field is optional: extraction quality is not guaranteed, and an absent
/// field is an expected state, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    /// Years of experience as free text ("5", "5+", "entry level").
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<WorkExperienceEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<LanguageSkill>>,
    #[serde(
        default,
        deserialize_with = "blank_as_unset",
        skip_serializing_if = "Option::is_none"
    )]
    pub german_level: Option<GermanLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSkill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<String>,
}

/// CEFR level of German, plus `None` (no German) and `Native`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GermanLevel {
    None,
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    Native,
}

impl GermanLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            GermanLevel::None => "None",
            GermanLevel::A1 => "A1",
            GermanLevel::A2 => "A2",
            GermanLevel::B1 => "B1",
            GermanLevel::B2 => "B2",
            GermanLevel::C1 => "C1",
            GermanLevel::C2 => "C2",
            GermanLevel::Native => "Native",
        }
    }
}

impl FromStr for GermanLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(GermanLevel::None),
            "A1" => Ok(GermanLevel::A1),
            "A2" => Ok(GermanLevel::A2),
            "B1" => Ok(GermanLevel::B1),
            "B2" => Ok(GermanLevel::B2),
            "C1" => Ok(GermanLevel::C1),
            "C2" => Ok(GermanLevel::C2),
            "NATIVE" => Ok(GermanLevel::Native),
            _ => Err(format!("unknown German level '{s}'")),
        }
    }
}

impl fmt::Display for GermanLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GermanLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GermanLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// An empty or whitespace-only string is treated like null.
fn blank_as_unset<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<GermanLevel>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.parse().map(Some).map_err(serde::de::Error::custom)
        }
        _ => Ok(None),
    }
}

/// Accepts a string, a number or null; numbers are kept as their textual form.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|v| match v {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Int(n) => n.to_string(),
            TextOrNumber::Float(n) => n.to_string(),
        }),
    )
}

/// Additional skills suggested for a candidate, index-aligned with confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSuggestion {
    pub skills: Vec<String>,
    pub confidence: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_fully_unset_profile() {
        let profile: StructuredProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, StructuredProfile::default());
    }

    #[test]
    fn test_numeric_experience_becomes_text() {
        let profile: StructuredProfile =
            serde_json::from_str(r#"{"experience": 5, "phone": 4915112345678}"#).unwrap();
        assert_eq!(profile.experience.as_deref(), Some("5"));
        assert_eq!(profile.phone.as_deref(), Some("4915112345678"));

        let profile: StructuredProfile =
            serde_json::from_str(r#"{"experience": 2.5}"#).unwrap();
        assert_eq!(profile.experience.as_deref(), Some("2.5"));
    }

    #[test]
    fn test_free_form_experience_preserved() {
        let profile: StructuredProfile =
            serde_json::from_str(r#"{"experience": "5+"}"#).unwrap();
        assert_eq!(profile.experience.as_deref(), Some("5+"));
    }

    #[test]
    fn test_null_fields_are_unset() {
        let profile: StructuredProfile =
            serde_json::from_str(r#"{"fullName": null, "experience": null, "skills": null}"#)
                .unwrap();
        assert!(profile.full_name.is_none());
        assert!(profile.experience.is_none());
        assert!(profile.skills.is_none());
    }

    #[test]
    fn test_german_level_parsing() {
        assert_eq!("b2".parse::<GermanLevel>().unwrap(), GermanLevel::B2);
        assert_eq!("Native".parse::<GermanLevel>().unwrap(), GermanLevel::Native);
        assert_eq!("None".parse::<GermanLevel>().unwrap(), GermanLevel::None);
        assert!("fluent".parse::<GermanLevel>().is_err());
    }

    #[test]
    fn test_unset_fields_omitted_when_serialized() {
        let profile = StructuredProfile {
            full_name: Some("Jane Doe".to_string()),
            german_level: Some(GermanLevel::C1),
            ..Default::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"fullName": "Jane Doe", "germanLevel": "C1"})
        );
    }

    #[test]
    fn test_blank_german_level_is_unset() {
        let profile: StructuredProfile =
            serde_json::from_str(r#"{"germanLevel": "", "city": "Berlin"}"#).unwrap();
        assert!(profile.german_level.is_none());
        assert_eq!(profile.city.as_deref(), Some("Berlin"));

        let profile: StructuredProfile = serde_json::from_str(r#"{"germanLevel": "  "}"#).unwrap();
        assert!(profile.german_level.is_none());
        assert!(serde_json::from_str::<StructuredProfile>(r#"{"germanLevel": "fluent"}"#).is_err());
    }

    #[test]
    fn test_language_entry_without_language_is_kept() {
        let entry: LanguageSkill = serde_json::from_str(r#"{"proficiency": "B2"}"#).unwrap();
        assert!(entry.language.is_none());
        assert_eq!(entry.proficiency.as_deref(), Some("B2"));
    }

    #[test]
    fn test_education_year_accepts_number() {
        let entry: EducationEntry =
            serde_json::from_str(r#"{"degree": "BSc", "institution": "TU Berlin", "year": 2018}"#)
                .unwrap();
        assert_eq!(entry.year.as_deref(), Some("2018"));
    }
}
