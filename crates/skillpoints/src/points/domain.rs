use std::fmt;

use serde::{Deserialize, Serialize};

/// Age bracket at the time of invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum AgeCategory {
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-32")]
    From25To32,
    #[serde(rename = "33-39")]
    From33To39,
    #[serde(rename = "40-44")]
    From40To44,
    #[serde(rename = "45-49")]
    From45To49,
    #[default]
    #[serde(rename = "none")]
    None,
}

impl AgeCategory {
    pub const ALL: [AgeCategory; 6] = [
        AgeCategory::From18To24,
        AgeCategory::From25To32,
        AgeCategory::From33To39,
        AgeCategory::From40To44,
        AgeCategory::From45To49,
        AgeCategory::None,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AgeCategory::From18To24 => "18-24",
            AgeCategory::From25To32 => "25-32",
            AgeCategory::From33To39 => "33-39",
            AgeCategory::From40To44 => "40-44",
            AgeCategory::From45To49 => "45-49",
            AgeCategory::None => "none",
        }
    }

    /// Unknown labels resolve to [`AgeCategory::None`].
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "18-24" => AgeCategory::From18To24,
            "25-32" => AgeCategory::From25To32,
            "33-39" => AgeCategory::From33To39,
            "40-44" => AgeCategory::From40To44,
            "45-49" => AgeCategory::From45To49,
            _ => AgeCategory::None,
        }
    }

    /// Lower bound of the bracket, as handed to the suggestion service.
    pub const fn representative_years(self) -> u8 {
        match self {
            AgeCategory::From18To24 => 18,
            AgeCategory::From25To32 => 25,
            AgeCategory::From33To39 => 33,
            AgeCategory::From40To44 => 40,
            AgeCategory::From45To49 => 45,
            AgeCategory::None => 0,
        }
    }
}

/// English language test band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", rename_all = "snake_case")]
pub enum EnglishProficiencyCategory {
    Superior,
    Proficient,
    Competent,
    LessThanCompetent,
    #[default]
    None,
}

impl EnglishProficiencyCategory {
    pub const ALL: [EnglishProficiencyCategory; 5] = [
        EnglishProficiencyCategory::Superior,
        EnglishProficiencyCategory::Proficient,
        EnglishProficiencyCategory::Competent,
        EnglishProficiencyCategory::LessThanCompetent,
        EnglishProficiencyCategory::None,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EnglishProficiencyCategory::Superior => "superior",
            EnglishProficiencyCategory::Proficient => "proficient",
            EnglishProficiencyCategory::Competent => "competent",
            EnglishProficiencyCategory::LessThanCompetent => "less_than_competent",
            EnglishProficiencyCategory::None => "none",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "superior" => EnglishProficiencyCategory::Superior,
            "proficient" => EnglishProficiencyCategory::Proficient,
            "competent" => EnglishProficiencyCategory::Competent,
            "less_than_competent" => EnglishProficiencyCategory::LessThanCompetent,
            _ => EnglishProficiencyCategory::None,
        }
    }
}

/// Highest recognised qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", rename_all = "snake_case")]
pub enum EducationCategory {
    Phd,
    BachelorMasters,
    DiplomaTrade,
    RecognisedQualification,
    #[default]
    None,
}

impl EducationCategory {
    pub const ALL: [EducationCategory; 5] = [
        EducationCategory::Phd,
        EducationCategory::BachelorMasters,
        EducationCategory::DiplomaTrade,
        EducationCategory::RecognisedQualification,
        EducationCategory::None,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            EducationCategory::Phd => "phd",
            EducationCategory::BachelorMasters => "bachelor_masters",
            EducationCategory::DiplomaTrade => "diploma_trade",
            EducationCategory::RecognisedQualification => "recognised_qualification",
            EducationCategory::None => "none",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "phd" => EducationCategory::Phd,
            "bachelor_masters" => EducationCategory::BachelorMasters,
            "diploma_trade" => EducationCategory::DiplomaTrade,
            "recognised_qualification" => EducationCategory::RecognisedQualification,
            _ => EducationCategory::None,
        }
    }
}

/// Shared vocabulary for skilled employment duration.
///
/// Each experience relationship only accepts a subset of these buckets; see
/// [`OverseasExperience`] and [`AustralianExperience`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum WorkExperienceCategory {
    #[serde(rename = "gte_8")]
    AtLeast8,
    #[serde(rename = "5_to_7")]
    From5To7,
    #[serde(rename = "3_to_4")]
    From3To4,
    #[serde(rename = "1_to_2")]
    From1To2,
    #[serde(rename = "lt_3")]
    LessThan3,
    #[serde(rename = "lt_1")]
    LessThan1,
    #[default]
    #[serde(rename = "none")]
    None,
}

impl WorkExperienceCategory {
    pub const ALL: [WorkExperienceCategory; 7] = [
        WorkExperienceCategory::AtLeast8,
        WorkExperienceCategory::From5To7,
        WorkExperienceCategory::From3To4,
        WorkExperienceCategory::From1To2,
        WorkExperienceCategory::LessThan3,
        WorkExperienceCategory::LessThan1,
        WorkExperienceCategory::None,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            WorkExperienceCategory::AtLeast8 => "gte_8",
            WorkExperienceCategory::From5To7 => "5_to_7",
            WorkExperienceCategory::From3To4 => "3_to_4",
            WorkExperienceCategory::From1To2 => "1_to_2",
            WorkExperienceCategory::LessThan3 => "lt_3",
            WorkExperienceCategory::LessThan1 => "lt_1",
            WorkExperienceCategory::None => "none",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "gte_8" => WorkExperienceCategory::AtLeast8,
            "5_to_7" => WorkExperienceCategory::From5To7,
            "3_to_4" => WorkExperienceCategory::From3To4,
            "1_to_2" => WorkExperienceCategory::From1To2,
            "lt_3" => WorkExperienceCategory::LessThan3,
            "lt_1" => WorkExperienceCategory::LessThan1,
            _ => WorkExperienceCategory::None,
        }
    }

    /// Minimum whole years implied by the bucket.
    pub const fn representative_years(self) -> u8 {
        match self {
            WorkExperienceCategory::AtLeast8 => 8,
            WorkExperienceCategory::From5To7 => 5,
            WorkExperienceCategory::From3To4 => 3,
            WorkExperienceCategory::From1To2 => 1,
            WorkExperienceCategory::LessThan3
            | WorkExperienceCategory::LessThan1
            | WorkExperienceCategory::None => 0,
        }
    }
}

/// Skilled employment outside Australia in the last ten years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum OverseasExperience {
    #[serde(rename = "gte_8")]
    AtLeast8,
    #[serde(rename = "5_to_7")]
    From5To7,
    #[serde(rename = "3_to_4")]
    From3To4,
    #[serde(rename = "lt_3")]
    LessThan3,
    #[default]
    #[serde(rename = "none")]
    None,
}

impl OverseasExperience {
    pub const ALL: [OverseasExperience; 5] = [
        OverseasExperience::AtLeast8,
        OverseasExperience::From5To7,
        OverseasExperience::From3To4,
        OverseasExperience::LessThan3,
        OverseasExperience::None,
    ];

    pub fn label(self) -> &'static str {
        WorkExperienceCategory::from(self).label()
    }

    pub fn from_label(label: &str) -> Self {
        WorkExperienceCategory::from_label(label).into()
    }

    pub fn representative_years(self) -> u8 {
        WorkExperienceCategory::from(self).representative_years()
    }
}

/// Skilled employment in Australia in the last ten years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum AustralianExperience {
    #[serde(rename = "gte_8")]
    AtLeast8,
    #[serde(rename = "5_to_7")]
    From5To7,
    #[serde(rename = "3_to_4")]
    From3To4,
    #[serde(rename = "1_to_2")]
    From1To2,
    #[serde(rename = "lt_1")]
    LessThan1,
    #[default]
    #[serde(rename = "none")]
    None,
}

impl AustralianExperience {
    pub const ALL: [AustralianExperience; 6] = [
        AustralianExperience::AtLeast8,
        AustralianExperience::From5To7,
        AustralianExperience::From3To4,
        AustralianExperience::From1To2,
        AustralianExperience::LessThan1,
        AustralianExperience::None,
    ];

    pub fn label(self) -> &'static str {
        WorkExperienceCategory::from(self).label()
    }

    pub fn from_label(label: &str) -> Self {
        WorkExperienceCategory::from_label(label).into()
    }

    pub fn representative_years(self) -> u8 {
        WorkExperienceCategory::from(self).representative_years()
    }
}

// `1_to_2` and `lt_1` have no overseas bucket.
impl From<WorkExperienceCategory> for OverseasExperience {
    fn from(value: WorkExperienceCategory) -> Self {
        match value {
            WorkExperienceCategory::AtLeast8 => OverseasExperience::AtLeast8,
            WorkExperienceCategory::From5To7 => OverseasExperience::From5To7,
            WorkExperienceCategory::From3To4 => OverseasExperience::From3To4,
            WorkExperienceCategory::LessThan3 => OverseasExperience::LessThan3,
            WorkExperienceCategory::From1To2
            | WorkExperienceCategory::LessThan1
            | WorkExperienceCategory::None => OverseasExperience::None,
        }
    }
}

// `lt_3` has no Australian bucket.
impl From<WorkExperienceCategory> for AustralianExperience {
    fn from(value: WorkExperienceCategory) -> Self {
        match value {
            WorkExperienceCategory::AtLeast8 => AustralianExperience::AtLeast8,
            WorkExperienceCategory::From5To7 => AustralianExperience::From5To7,
            WorkExperienceCategory::From3To4 => AustralianExperience::From3To4,
            WorkExperienceCategory::From1To2 => AustralianExperience::From1To2,
            WorkExperienceCategory::LessThan1 => AustralianExperience::LessThan1,
            WorkExperienceCategory::LessThan3 | WorkExperienceCategory::None => {
                AustralianExperience::None
            }
        }
    }
}

impl From<OverseasExperience> for WorkExperienceCategory {
    fn from(value: OverseasExperience) -> Self {
        match value {
            OverseasExperience::AtLeast8 => WorkExperienceCategory::AtLeast8,
            OverseasExperience::From5To7 => WorkExperienceCategory::From5To7,
            OverseasExperience::From3To4 => WorkExperienceCategory::From3To4,
            OverseasExperience::LessThan3 => WorkExperienceCategory::LessThan3,
            OverseasExperience::None => WorkExperienceCategory::None,
        }
    }
}

impl From<AustralianExperience> for WorkExperienceCategory {
    fn from(value: AustralianExperience) -> Self {
        match value {
            AustralianExperience::AtLeast8 => WorkExperienceCategory::AtLeast8,
            AustralianExperience::From5To7 => WorkExperienceCategory::From5To7,
            AustralianExperience::From3To4 => WorkExperienceCategory::From3To4,
            AustralianExperience::From1To2 => WorkExperienceCategory::From1To2,
            AustralianExperience::LessThan1 => WorkExperienceCategory::LessThan1,
            AustralianExperience::None => WorkExperienceCategory::None,
        }
    }
}

macro_rules! label_conversions {
    ($($category:ty),+ $(,)?) => {
        $(
            // Anything other than a known label string, `null` included,
            // resolves to the `none` bucket.
            impl From<serde_json::Value> for $category {
                fn from(value: serde_json::Value) -> Self {
                    value.as_str().map(Self::from_label).unwrap_or_default()
                }
            }

            impl fmt::Display for $category {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

label_conversions!(
    AgeCategory,
    EnglishProficiencyCategory,
    EducationCategory,
    WorkExperienceCategory,
    OverseasExperience,
    AustralianExperience,
);

/// Applicant attributes captured by the points form.
///
/// Every field is optional on the wire; missing or unrecognised values fall
/// back to `none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicantProfile {
    pub age: AgeCategory,
    pub english_proficiency: EnglishProficiencyCategory,
    pub education: EducationCategory,
    pub overseas_work_experience: OverseasExperience,
    pub australian_work_experience: AustralianExperience,
}

impl ApplicantProfile {
    pub fn new(
        age: AgeCategory,
        english_proficiency: EnglishProficiencyCategory,
        education: EducationCategory,
        overseas_work_experience: OverseasExperience,
        australian_work_experience: AustralianExperience,
    ) -> Self {
        Self {
            age,
            english_proficiency,
            education,
            overseas_work_experience,
            australian_work_experience,
        }
    }

    /// Builds a profile from raw form labels, mapping the shared work
    /// experience vocabulary onto each relationship.
    pub fn from_labels(
        age: &str,
        english_proficiency: &str,
        education: &str,
        overseas_work_experience: &str,
        australian_work_experience: &str,
    ) -> Self {
        Self {
            age: AgeCategory::from_label(age),
            english_proficiency: EnglishProficiencyCategory::from_label(english_proficiency),
            education: EducationCategory::from_label(education),
            overseas_work_experience: OverseasExperience::from_label(overseas_work_experience),
            australian_work_experience: AustralianExperience::from_label(
                australian_work_experience,
            ),
        }
    }
}
