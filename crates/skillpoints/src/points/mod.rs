//! Skilled migration points scoring.
//!
//! A profile is scored with five fixed lookup tables, then the total is compared
//! against the 65 point threshold for each points-tested subclass. Scoring and
//! eligibility are pure; the only I/O is the optional suggestion lookup.

pub mod domain;
pub mod eligibility;
pub mod router;
pub mod scoring;
pub mod service;
pub mod suggestions;

#[cfg(test)]
mod tests;

pub use domain::{
    AgeCategory, ApplicantProfile, AustralianExperience, EducationCategory,
    EnglishProficiencyCategory, OverseasExperience, WorkExperienceCategory,
};
pub use eligibility::{
    evaluate, evaluate_all, EligibilityOutcome, EligibilityStatus, VisaSubclass,
    VisaSubclassView, REQUIRED_POINTS,
};
pub use router::{points_router, EligibilityRequest};
pub use scoring::{
    compute_breakdown, BreakdownEntry, PointsBreakdown, ScoringDimension, MAX_ATTAINABLE_POINTS,
};
pub use service::{PointsAssessment, PointsService, PointsServiceError};
pub use suggestions::{
    provider_from_config, Completion, DisabledSuggestionProvider, HttpSuggestionProvider,
    SuggestionError, SuggestionProvider, SuggestionRequest, SuggestionResponse, SuggestionState,
    SuggestionTicket, SuggestionTracker,
};
