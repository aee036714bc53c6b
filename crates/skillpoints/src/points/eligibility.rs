use serde::{Deserialize, Serialize};

/// Base points every skilled subclass requires.
pub const REQUIRED_POINTS: u16 = 65;

/// Points-tested skilled visa subclasses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisaSubclass {
    #[serde(rename = "189")]
    SkilledIndependent,
    #[serde(rename = "190")]
    SkilledNominated,
    #[serde(rename = "491")]
    SkilledWorkRegional,
}

impl VisaSubclass {
    pub const ALL: [VisaSubclass; 3] = [
        VisaSubclass::SkilledIndependent,
        VisaSubclass::SkilledNominated,
        VisaSubclass::SkilledWorkRegional,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            VisaSubclass::SkilledIndependent => "189",
            VisaSubclass::SkilledNominated => "190",
            VisaSubclass::SkilledWorkRegional => "491",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            VisaSubclass::SkilledIndependent => "Skilled Independent",
            VisaSubclass::SkilledNominated => "Skilled Nominated",
            VisaSubclass::SkilledWorkRegional => "Skilled Work Regional",
        }
    }

    /// Points granted by state nomination or regional sponsorship.
    pub const fn nomination_bonus(self) -> u8 {
        match self {
            VisaSubclass::SkilledIndependent => 0,
            VisaSubclass::SkilledNominated => 5,
            VisaSubclass::SkilledWorkRegional => 15,
        }
    }

    pub const fn supports_nomination(self) -> bool {
        self.nomination_bonus() > 0
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|subclass| subclass.code() == code.trim())
    }

    pub fn view(self) -> VisaSubclassView {
        VisaSubclassView {
            code: self.code(),
            name: self.name(),
            required_points: REQUIRED_POINTS,
            nomination_bonus: self.nomination_bonus(),
            supports_nomination: self.supports_nomination(),
        }
    }
}

/// Serializable description of a subclass for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisaSubclassView {
    pub code: &'static str,
    pub name: &'static str,
    pub required_points: u16,
    pub nomination_bonus: u8,
    pub supports_nomination: bool,
}

/// Eligibility ranked from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    NotEligible,
    PendingNomination,
    Eligible,
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EligibilityStatus::NotEligible => "not eligible",
            EligibilityStatus::PendingNomination => "pending nomination",
            EligibilityStatus::Eligible => "eligible",
        }
    }
}

/// Result of comparing base points with a subclass threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityOutcome {
    pub subclass: VisaSubclass,
    pub status: EligibilityStatus,
    pub message: String,
    pub base_points: u16,
    pub nomination_bonus: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deficit: Option<u16>,
}

/// Classifies `base_points` for a subclass. The first matching rule wins.
///
/// A bonus supplied for a subclass without a nomination pathway is ignored.
pub fn evaluate(
    subclass: VisaSubclass,
    base_points: u16,
    nomination_bonus: u8,
) -> EligibilityOutcome {
    let nominated = subclass.supports_nomination();
    let bonus = if nominated { nomination_bonus } else { 0 };
    let meets_base = base_points >= REQUIRED_POINTS;
    let with_bonus = base_points.saturating_add(u16::from(bonus));

    let (status, message, deficit) = if !nominated && meets_base {
        (EligibilityStatus::Eligible, "Eligible.".to_string(), None)
    } else if nominated && bonus > 0 && meets_base {
        (
            EligibilityStatus::Eligible,
            "Eligible with nomination.".to_string(),
            None,
        )
    } else if nominated && bonus > 0 && with_bonus >= REQUIRED_POINTS {
        (
            EligibilityStatus::PendingNomination,
            format!("Eligible with nomination ({bonus} pts). Current base: {base_points} pts."),
            None,
        )
    } else if nominated && meets_base {
        // Reachable only when a nominated subclass is evaluated without its bonus.
        (
            EligibilityStatus::PendingNomination,
            "Potentially eligible. Requires nomination.".to_string(),
            None,
        )
    } else {
        let deficit = REQUIRED_POINTS - base_points;
        let message = if nominated && bonus == 0 {
            format!(
                "Not eligible. Needs {deficit} more points for base eligibility. \
                 Nomination adds points."
            )
        } else {
            format!("Not eligible. Needs {deficit} more points.")
        };
        (EligibilityStatus::NotEligible, message, Some(deficit))
    };

    EligibilityOutcome {
        subclass,
        status,
        message,
        base_points,
        nomination_bonus: bonus,
        deficit,
    }
}

/// Evaluates every subclass with its standard nomination bonus.
pub fn evaluate_all(base_points: u16) -> Vec<EligibilityOutcome> {
    VisaSubclass::ALL
        .into_iter()
        .map(|subclass| evaluate(subclass, base_points, subclass.nomination_bonus()))
        .collect()
}
