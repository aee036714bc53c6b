use serde::{Deserialize, Serialize};

use super::domain::{
    AgeCategory, ApplicantProfile, AustralianExperience, EducationCategory,
    EnglishProficiencyCategory, OverseasExperience,
};

/// Highest total the lookup tables can produce.
pub const MAX_ATTAINABLE_POINTS: u16 = ScoringDimension::Age.max_points() as u16
    + ScoringDimension::EnglishProficiency.max_points() as u16
    + ScoringDimension::Education.max_points() as u16
    + ScoringDimension::OverseasWorkExperience.max_points() as u16
    + ScoringDimension::AustralianWorkExperience.max_points() as u16;

impl AgeCategory {
    pub const fn points(self) -> u8 {
        match self {
            AgeCategory::From18To24 => 25,
            AgeCategory::From25To32 => 30,
            AgeCategory::From33To39 => 25,
            AgeCategory::From40To44 => 15,
            AgeCategory::From45To49 | AgeCategory::None => 0,
        }
    }
}

impl EnglishProficiencyCategory {
    pub const fn points(self) -> u8 {
        match self {
            EnglishProficiencyCategory::Superior => 20,
            EnglishProficiencyCategory::Proficient => 10,
            EnglishProficiencyCategory::Competent
            | EnglishProficiencyCategory::LessThanCompetent
            | EnglishProficiencyCategory::None => 0,
        }
    }
}

impl EducationCategory {
    pub const fn points(self) -> u8 {
        match self {
            EducationCategory::Phd => 20,
            EducationCategory::BachelorMasters => 15,
            EducationCategory::DiplomaTrade | EducationCategory::RecognisedQualification => 10,
            EducationCategory::None => 0,
        }
    }
}

impl OverseasExperience {
    pub const fn points(self) -> u8 {
        match self {
            OverseasExperience::AtLeast8 => 15,
            OverseasExperience::From5To7 => 10,
            OverseasExperience::From3To4 => 5,
            OverseasExperience::LessThan3 | OverseasExperience::None => 0,
        }
    }
}

impl AustralianExperience {
    pub const fn points(self) -> u8 {
        match self {
            AustralianExperience::AtLeast8 => 20,
            AustralianExperience::From5To7 => 15,
            AustralianExperience::From3To4 => 10,
            AustralianExperience::From1To2 => 5,
            AustralianExperience::LessThan1 | AustralianExperience::None => 0,
        }
    }
}

/// Scored attribute of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringDimension {
    Age,
    EnglishProficiency,
    Education,
    OverseasWorkExperience,
    AustralianWorkExperience,
}

impl ScoringDimension {
    pub const ALL: [ScoringDimension; 5] = [
        ScoringDimension::Age,
        ScoringDimension::EnglishProficiency,
        ScoringDimension::Education,
        ScoringDimension::OverseasWorkExperience,
        ScoringDimension::AustralianWorkExperience,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ScoringDimension::Age => "Age",
            ScoringDimension::EnglishProficiency => "English Proficiency",
            ScoringDimension::Education => "Education",
            ScoringDimension::OverseasWorkExperience => "Overseas Work Experience",
            ScoringDimension::AustralianWorkExperience => "Australian Work Experience",
        }
    }

    /// Largest value in the dimension's lookup table.
    pub const fn max_points(self) -> u8 {
        match self {
            ScoringDimension::Age => 30,
            ScoringDimension::EnglishProficiency => 20,
            ScoringDimension::Education => 20,
            ScoringDimension::OverseasWorkExperience => 15,
            ScoringDimension::AustralianWorkExperience => 20,
        }
    }
}

/// Per-dimension points for a profile.
///
/// Only produced by [`compute_breakdown`], so `total` always equals the sum of
/// the five dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    age: u8,
    english_proficiency: u8,
    education: u8,
    overseas_work_experience: u8,
    australian_work_experience: u8,
    total: u16,
}

impl PointsBreakdown {
    pub const fn age(&self) -> u8 {
        self.age
    }

    pub const fn english_proficiency(&self) -> u8 {
        self.english_proficiency
    }

    pub const fn education(&self) -> u8 {
        self.education
    }

    pub const fn overseas_work_experience(&self) -> u8 {
        self.overseas_work_experience
    }

    pub const fn australian_work_experience(&self) -> u8 {
        self.australian_work_experience
    }

    pub const fn total(&self) -> u16 {
        self.total
    }

    pub const fn points_for(&self, dimension: ScoringDimension) -> u8 {
        match dimension {
            ScoringDimension::Age => self.age,
            ScoringDimension::EnglishProficiency => self.english_proficiency,
            ScoringDimension::Education => self.education,
            ScoringDimension::OverseasWorkExperience => self.overseas_work_experience,
            ScoringDimension::AustralianWorkExperience => self.australian_work_experience,
        }
    }

    pub fn entries(&self) -> Vec<BreakdownEntry> {
        ScoringDimension::ALL
            .iter()
            .map(|&dimension| BreakdownEntry {
                dimension,
                label: dimension.label(),
                points: self.points_for(dimension),
                max_points: dimension.max_points(),
            })
            .collect()
    }

    /// Total as a share of [`MAX_ATTAINABLE_POINTS`], in percent.
    pub fn progress_pct(&self) -> f32 {
        f32::from(self.total) / f32::from(MAX_ATTAINABLE_POINTS) * 100.0
    }
}

/// Single dimension of a breakdown, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub dimension: ScoringDimension,
    pub label: &'static str,
    pub points: u8,
    pub max_points: u8,
}

/// Scores a profile against the fixed lookup tables.
pub fn compute_breakdown(profile: &ApplicantProfile) -> PointsBreakdown {
    let age = profile.age.points();
    let english_proficiency = profile.english_proficiency.points();
    let education = profile.education.points();
    let overseas_work_experience = profile.overseas_work_experience.points();
    let australian_work_experience = profile.australian_work_experience.points();

    let total = [
        age,
        english_proficiency,
        education,
        overseas_work_experience,
        australian_work_experience,
    ]
    .iter()
    .map(|&points| u16::from(points))
    .sum();

    PointsBreakdown {
        age,
        english_proficiency,
        education,
        overseas_work_experience,
        australian_work_experience,
        total,
    }
}
