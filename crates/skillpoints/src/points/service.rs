use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::domain::ApplicantProfile;
use super::eligibility::{
    evaluate, evaluate_all, EligibilityOutcome, EligibilityStatus, VisaSubclass, VisaSubclassView,
    REQUIRED_POINTS,
};
use super::scoring::{compute_breakdown, BreakdownEntry, PointsBreakdown, MAX_ATTAINABLE_POINTS};
use super::suggestions::{
    SuggestionError, SuggestionProvider, SuggestionRequest, SuggestionResponse, SuggestionTicket,
};

/// Service composing scoring, eligibility, and the suggestion collaborator.
pub struct PointsService {
    suggestions: Arc<dyn SuggestionProvider>,
}

impl PointsService {
    pub fn new(suggestions: Arc<dyn SuggestionProvider>) -> Self {
        Self { suggestions }
    }

    /// Score a profile and classify it against every subclass.
    pub fn assess(&self, profile: ApplicantProfile) -> PointsAssessment {
        let breakdown = compute_breakdown(&profile);
        let eligibility = evaluate_all(breakdown.total());

        info!(
            total = breakdown.total(),
            eligible = eligibility
                .iter()
                .filter(|outcome| outcome.status == EligibilityStatus::Eligible)
                .count(),
            "assessed applicant profile"
        );

        PointsAssessment {
            profile,
            entries: breakdown.entries(),
            progress_pct: breakdown.progress_pct(),
            breakdown,
            eligibility,
            threshold: REQUIRED_POINTS,
            max_points: MAX_ATTAINABLE_POINTS,
        }
    }

    /// Evaluate a single subclass for an already known base score.
    pub fn eligibility(
        &self,
        subclass: VisaSubclass,
        base_points: u16,
        nomination_bonus: u8,
    ) -> EligibilityOutcome {
        evaluate(subclass, base_points, nomination_bonus)
    }

    pub fn subclasses(&self) -> Vec<VisaSubclassView> {
        VisaSubclass::ALL
            .into_iter()
            .map(VisaSubclass::view)
            .collect()
    }

    /// Ask the collaborator for improvement ideas.
    ///
    /// Returns `Ok(None)` for a profile that scores nothing yet.
    pub async fn suggest(
        &self,
        profile: &ApplicantProfile,
    ) -> Result<Option<SuggestionResponse>, PointsServiceError> {
        let breakdown = compute_breakdown(profile);
        if breakdown.total() == 0 {
            return Ok(None);
        }

        let request = SuggestionRequest::new(profile, &breakdown);
        Ok(Some(self.request_suggestions(&request).await?))
    }

    /// Fetch suggestions for a ticket issued by a
    /// [`SuggestionTracker`](super::suggestions::SuggestionTracker).
    pub async fn suggest_for(
        &self,
        ticket: &SuggestionTicket,
    ) -> Result<SuggestionResponse, SuggestionError> {
        self.request_suggestions(ticket.request()).await
    }

    async fn request_suggestions(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResponse, SuggestionError> {
        self.suggestions.suggest(request).await.map_err(|err| {
            warn!(
                provider = self.suggestions.name(),
                error = %err,
                "suggestions unavailable"
            );
            err
        })
    }
}

/// Full scoring result for a profile.
#[derive(Debug, Clone, Serialize)]
pub struct PointsAssessment {
    pub profile: ApplicantProfile,
    pub breakdown: PointsBreakdown,
    pub entries: Vec<BreakdownEntry>,
    pub eligibility: Vec<EligibilityOutcome>,
    pub threshold: u16,
    pub max_points: u16,
    pub progress_pct: f32,
}

/// Error raised by the points service.
#[derive(Debug, thiserror::Error)]
pub enum PointsServiceError {
    #[error(transparent)]
    Suggestion(#[from] SuggestionError),
}
