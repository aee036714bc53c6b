use metrics_exporter_prometheus::PrometheusHandle;
use skillpoints::points::{
    AgeCategory, ApplicantProfile, AustralianExperience, EducationCategory,
    EnglishProficiencyCategory, OverseasExperience,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Named profile used by the demo walkthrough.
pub(crate) struct SampleProfile {
    pub(crate) name: &'static str,
    pub(crate) profile: ApplicantProfile,
}

pub(crate) fn sample_profiles() -> Vec<SampleProfile> {
    vec![
        SampleProfile {
            name: "Early career doctorate",
            profile: ApplicantProfile::new(
                AgeCategory::From25To32,
                EnglishProficiencyCategory::Superior,
                EducationCategory::Phd,
                OverseasExperience::From3To4,
                AustralianExperience::None,
            ),
        },
        SampleProfile {
            name: "Late career tradesperson",
            profile: ApplicantProfile::new(
                AgeCategory::From40To44,
                EnglishProficiencyCategory::Competent,
                EducationCategory::DiplomaTrade,
                OverseasExperience::None,
                AustralianExperience::LessThan1,
            ),
        },
        SampleProfile {
            name: "Recent graduate working onshore",
            profile: ApplicantProfile::new(
                AgeCategory::From18To24,
                EnglishProficiencyCategory::Proficient,
                EducationCategory::BachelorMasters,
                OverseasExperience::None,
                AustralianExperience::From3To4,
            ),
        },
        SampleProfile {
            name: "Blank form",
            profile: ApplicantProfile::default(),
        },
    ]
}

/// Returns the raw label when it did not resolve to a known category.
pub(crate) fn unrecognised<'a>(raw: &'a str, resolved: &str) -> Option<&'a str> {
    (raw.trim() != resolved).then_some(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillpoints::points::compute_breakdown;

    #[test]
    fn sample_profiles_cover_each_outcome_band() {
        let totals: Vec<u16> = sample_profiles()
            .iter()
            .map(|sample| compute_breakdown(&sample.profile).total())
            .collect();
        assert_eq!(totals, vec![75, 25, 60, 0]);
    }

    #[test]
    fn unrecognised_flags_only_unknown_labels() {
        assert_eq!(unrecognised("25-32", AgeCategory::From25To32.label()), None);
        assert_eq!(unrecognised(" none ", AgeCategory::None.label()), None);
        assert_eq!(unrecognised("50-54", AgeCategory::None.label()), Some("50-54"));
    }
}
