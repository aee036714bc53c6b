use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::points::domain::{
    AgeCategory, ApplicantProfile, AustralianExperience, EducationCategory,
    EnglishProficiencyCategory, OverseasExperience,
};
use crate::points::suggestions::{
    SuggestionError, SuggestionProvider, SuggestionRequest, SuggestionResponse,
};
use crate::points::{points_router, PointsService};

pub(super) fn strong_profile() -> ApplicantProfile {
    ApplicantProfile::new(
        AgeCategory::From25To32,
        EnglishProficiencyCategory::Superior,
        EducationCategory::Phd,
        OverseasExperience::From3To4,
        AustralianExperience::None,
    )
}

pub(super) fn mid_career_profile() -> ApplicantProfile {
    ApplicantProfile::new(
        AgeCategory::From40To44,
        EnglishProficiencyCategory::Competent,
        EducationCategory::DiplomaTrade,
        OverseasExperience::None,
        AustralianExperience::LessThan1,
    )
}

pub(super) fn graduate_profile() -> ApplicantProfile {
    ApplicantProfile::new(
        AgeCategory::From18To24,
        EnglishProficiencyCategory::Proficient,
        EducationCategory::BachelorMasters,
        OverseasExperience::None,
        AustralianExperience::From3To4,
    )
}

pub(super) fn all_profiles() -> Vec<ApplicantProfile> {
    let mut profiles = Vec::new();
    for age in AgeCategory::ALL {
        for english in EnglishProficiencyCategory::ALL {
            for education in EducationCategory::ALL {
                for overseas in OverseasExperience::ALL {
                    for australian in AustralianExperience::ALL {
                        profiles.push(ApplicantProfile::new(
                            age, english, education, overseas, australian,
                        ));
                    }
                }
            }
        }
    }
    profiles
}

/// Provider returning a canned result and recording every request.
pub(super) struct StubProvider {
    result: Result<SuggestionResponse, SuggestionError>,
    requests: Mutex<Vec<SuggestionRequest>>,
}

impl StubProvider {
    pub(super) fn answering(text: &str) -> Self {
        Self {
            result: Ok(SuggestionResponse {
                suggestions: text.to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn failing(error: SuggestionError) -> Self {
        Self {
            result: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn requests(&self) -> Vec<SuggestionRequest> {
        self.requests.lock().expect("request mutex poisoned").clone()
    }
}

#[async_trait]
impl SuggestionProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn suggest(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResponse, SuggestionError> {
        self.requests
            .lock()
            .expect("request mutex poisoned")
            .push(request.clone());
        self.result.clone()
    }
}

pub(super) fn build_service(provider: StubProvider) -> (Arc<PointsService>, Arc<StubProvider>) {
    let provider = Arc::new(provider);
    let service = Arc::new(PointsService::new(provider.clone()));
    (service, provider)
}

pub(super) fn router_with_provider(provider: StubProvider) -> axum::Router {
    let (service, _) = build_service(provider);
    points_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
