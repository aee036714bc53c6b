//! Contract and client for the external improvement-suggestion service.
//!
//! Suggestions are advisory. Every failure here is recoverable and never
//! touches the computed breakdown.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::ApplicantProfile;
use super::scoring::{compute_breakdown, PointsBreakdown};
use crate::config::SuggestionsConfig;

/// Payload sent to the suggestion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub age: u8,
    pub english_proficiency: String,
    pub education: String,
    pub work_experience: u8,
    pub current_points: u16,
}

impl SuggestionRequest {
    pub fn new(profile: &ApplicantProfile, breakdown: &PointsBreakdown) -> Self {
        Self {
            age: profile.age.representative_years(),
            english_proficiency: profile.english_proficiency.label().to_string(),
            education: profile.education.label().to_string(),
            work_experience: profile.overseas_work_experience.representative_years()
                + profile.australian_work_experience.representative_years(),
            current_points: breakdown.total(),
        }
    }
}

/// Suggestion text returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion service is not configured")]
    Disabled,
    #[error("suggestion service unreachable: {0}")]
    Network(String),
    #[error("suggestion service returned HTTP {status}: {message}")]
    Api { status: u16, message: String },
    #[error("suggestion response could not be parsed: {0}")]
    Parse(String),
}

/// Source of improvement suggestions.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn suggest(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResponse, SuggestionError>;
}

/// Provider used when no endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSuggestionProvider;

#[async_trait]
impl SuggestionProvider for DisabledSuggestionProvider {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn suggest(
        &self,
        _request: &SuggestionRequest,
    ) -> Result<SuggestionResponse, SuggestionError> {
        Err(SuggestionError::Disabled)
    }
}

/// Posts the request JSON to a configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpSuggestionProvider {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpSuggestionProvider {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SuggestionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| SuggestionError::Network(err.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key,
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SuggestionProvider for HttpSuggestionProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn suggest(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResponse, SuggestionError> {
        debug!(
            endpoint = %self.endpoint,
            current_points = request.current_points,
            "requesting suggestions"
        );

        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| SuggestionError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "suggestion service rejected request");
            return Err(SuggestionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<SuggestionResponse>()
            .await
            .map_err(|err| SuggestionError::Parse(err.to_string()))
    }
}

/// Picks the HTTP provider when an endpoint is configured.
pub fn provider_from_config(
    config: &SuggestionsConfig,
) -> Result<Arc<dyn SuggestionProvider>, SuggestionError> {
    match &config.endpoint {
        Some(endpoint) => Ok(Arc::new(HttpSuggestionProvider::new(
            endpoint.clone(),
            config.api_key.clone(),
            config.timeout,
        )?)),
        None => Ok(Arc::new(DisabledSuggestionProvider)),
    }
}

/// Latest known suggestion state for a profile being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SuggestionState {
    #[default]
    Idle,
    Loading,
    Ready { suggestions: String },
    Failed { message: String },
}

/// Handle for one in-flight suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionTicket {
    generation: u64,
    request: SuggestionRequest,
}

impl SuggestionTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &SuggestionRequest {
        &self.request
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// Last-write-wins bookkeeping for suggestion requests.
///
/// Each profile change bumps the generation; a response is applied only when
/// its ticket still carries the current generation.
#[derive(Debug, Default)]
pub struct SuggestionTracker {
    generation: u64,
    state: SuggestionState,
}

impl SuggestionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SuggestionState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a request for `profile`, superseding anything in flight.
    ///
    /// A profile scoring zero has nothing to improve on yet: no ticket is
    /// issued and the state returns to idle.
    pub fn begin(&mut self, profile: &ApplicantProfile) -> Option<SuggestionTicket> {
        self.generation += 1;
        let breakdown = compute_breakdown(profile);
        if breakdown.total() == 0 {
            self.state = SuggestionState::Idle;
            return None;
        }

        self.state = SuggestionState::Loading;
        Some(SuggestionTicket {
            generation: self.generation,
            request: SuggestionRequest::new(profile, &breakdown),
        })
    }

    pub fn complete(
        &mut self,
        ticket: &SuggestionTicket,
        result: Result<SuggestionResponse, SuggestionError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale suggestion response"
            );
            return Completion::Stale;
        }

        self.state = match result {
            Ok(response) => SuggestionState::Ready {
                suggestions: response.suggestions,
            },
            Err(err) => {
                warn!(error = %err, "suggestion request failed");
                SuggestionState::Failed {
                    message: err.to_string(),
                }
            }
        };
        Completion::Applied
    }
}
