use crate::infra::{sample_profiles, unrecognised};
use clap::Args;
use serde::Serialize;
use skillpoints::config::AppConfig;
use skillpoints::error::AppError;
use skillpoints::points::{
    provider_from_config, ApplicantProfile, DisabledSuggestionProvider, PointsAssessment,
    PointsService, SuggestionState, SuggestionTracker, WorkExperienceCategory,
};
use skillpoints::telemetry;
use std::sync::Arc;
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Age bracket (18-24, 25-32, 33-39, 40-44, 45-49, none)
    #[arg(long, default_value = "none")]
    pub(crate) age: String,
    /// English test band (superior, proficient, competent, less_than_competent, none)
    #[arg(long, default_value = "none")]
    pub(crate) english: String,
    /// Highest qualification (phd, bachelor_masters, diploma_trade, recognised_qualification, none)
    #[arg(long, default_value = "none")]
    pub(crate) education: String,
    /// Skilled employment outside Australia (gte_8, 5_to_7, 3_to_4, lt_3, none)
    #[arg(long, default_value = "none")]
    pub(crate) overseas: String,
    /// Skilled employment in Australia (gte_8, 5_to_7, 3_to_4, 1_to_2, lt_1, none)
    #[arg(long, default_value = "none")]
    pub(crate) australian: String,
    /// Ask the configured suggestion service for improvement ideas
    #[arg(long)]
    pub(crate) suggest: bool,
    /// Print the assessment as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct AssessReport {
    #[serde(flatten)]
    assessment: PointsAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestions: Option<SuggestionState>,
}

pub(crate) async fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let profile = profile_from_args(&args);
    let service = PointsService::new(provider_from_config(&config.suggestions)?);

    let suggestions = if args.suggest {
        let mut tracker = SuggestionTracker::new();
        if let Some(ticket) = tracker.begin(&profile) {
            let result = service.suggest_for(&ticket).await;
            tracker.complete(&ticket, result);
        }
        Some(tracker.state().clone())
    } else {
        None
    };

    let assessment = service.assess(profile);

    if args.json {
        let report = AssessReport {
            assessment,
            suggestions,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Assessment payload unavailable: {}", err),
        }
        return Ok(());
    }

    render_assessment("Applicant profile", &assessment);
    if let Some(state) = suggestions {
        render_suggestions(&state);
    }
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = PointsService::new(Arc::new(DisabledSuggestionProvider));

    println!("Skilled migration points demo");
    for sample in sample_profiles() {
        let assessment = service.assess(sample.profile);
        render_assessment(sample.name, &assessment);
    }

    println!("\nPoints-tested subclasses");
    for subclass in service.subclasses() {
        println!(
            "- {} {} | threshold {} | nomination bonus {}",
            subclass.code, subclass.name, subclass.required_points, subclass.nomination_bonus
        );
    }

    Ok(())
}

fn profile_from_args(args: &AssessArgs) -> ApplicantProfile {
    for (field, label) in unrecognised_labels(args) {
        warn!(field, label, "unrecognised label scored as none");
    }

    ApplicantProfile::from_labels(
        &args.age,
        &args.english,
        &args.education,
        &args.overseas,
        &args.australian,
    )
}

/// Flags labels outside the form vocabulary. Experience labels are checked
/// against the shared vocabulary, so `lt_3` for Australian work is accepted
/// even though it scores nothing there.
fn unrecognised_labels(args: &AssessArgs) -> Vec<(&'static str, &str)> {
    let profile =
        ApplicantProfile::from_labels(&args.age, &args.english, &args.education, "none", "none");
    let checks = [
        ("age", args.age.as_str(), profile.age.label()),
        ("english", args.english.as_str(), profile.english_proficiency.label()),
        ("education", args.education.as_str(), profile.education.label()),
        (
            "overseas",
            args.overseas.as_str(),
            WorkExperienceCategory::from_label(&args.overseas).label(),
        ),
        (
            "australian",
            args.australian.as_str(),
            WorkExperienceCategory::from_label(&args.australian).label(),
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(field, raw, resolved)| {
            unrecognised(raw, resolved).map(|label| (field, label))
        })
        .collect()
}

fn render_assessment(title: &str, assessment: &PointsAssessment) {
    println!(
        "\n{}: {} / {} points ({:.0}% of maximum)",
        title,
        assessment.breakdown.total(),
        assessment.max_points,
        assessment.progress_pct
    );
    for entry in &assessment.entries {
        println!("  - {}: {} / {}", entry.label, entry.points, entry.max_points);
    }
    println!("  Eligibility (threshold {}):", assessment.threshold);
    for outcome in &assessment.eligibility {
        println!(
            "    - {} [{}] {}",
            outcome.subclass.code(),
            outcome.status.label(),
            outcome.message
        );
    }
}

fn render_suggestions(state: &SuggestionState) {
    match state {
        SuggestionState::Ready { suggestions } => {
            println!("  Suggestions:\n{}", suggestions);
        }
        SuggestionState::Failed { message } => {
            println!("  Suggestions unavailable: {}", message);
        }
        SuggestionState::Idle => {
            println!("  Suggestions: none until the profile scores points");
        }
        SuggestionState::Loading => {
            println!("  Suggestions: still loading");
        }
    }
}
