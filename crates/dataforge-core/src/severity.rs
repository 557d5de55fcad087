//! # Severity, Priority, and Risk Taxonomies
//!
//! Three small closed enums that the whole engine agrees on:
//!
//! - [`Severity`] — how serious a rule violation is. Drives the conformity
//!   score penalty and the action-plan bucket.
//! - [`Priority`] — the urgency label attached to generated scenarios and
//!   action items. Derived from severity through a fixed mapping.
//! - [`RiskLevel`] — the extracted risk level of an organization. Ordered so
//!   conditions can express "at least medium".
//!
//! The severity→priority mapping is total: every severity maps to exactly
//! one priority, so a generated scenario can never lack an urgency label.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Severity of a compliance rule or derived obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Minor gap, low regulatory exposure.
    Low,
    /// Gap that should be scheduled for correction.
    Medium,
    /// Serious gap with direct legal exposure.
    High,
    /// Gap that blocks lawful operation until corrected.
    Critical,
}

/// Total number of severities. Used for coverage assertions.
pub const SEVERITY_COUNT: usize = 4;

impl Severity {
    /// Returns all severities in ascending order.
    pub fn all() -> &'static [Severity] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }

    /// Returns the snake_case string identifier for this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// The urgency label for scenarios generated from this severity.
    ///
    /// The mapping is fixed: Critical→Urgent, High→High, Medium→Medium,
    /// Low→Low.
    pub fn priority(&self) -> Priority {
        match self {
            Self::Critical => Priority::Urgent,
            Self::High => Priority::High,
            Self::Medium => Priority::Medium,
            Self::Low => Priority::Low,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        };
        f.write_str(s)
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(format!("unknown severity: {other:?}")),
        }
    }
}

/// Urgency of a generated scenario or action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can be planned in the long term.
    Low,
    /// Should be planned in the coming months.
    Medium,
    /// Should be started in the coming weeks.
    High,
    /// Must be started immediately.
    Urgent,
}

impl Priority {
    /// Returns the snake_case string identifier for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracted risk level of an organization or work site.
///
/// Ordered: `Low < Medium < High`, so rule conditions can require a
/// minimum level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Routine office or service work.
    Low,
    /// Work with identified but controlled hazards.
    Medium,
    /// Work with serious hazards (confined spaces, hazardous substances).
    High,
}

impl RiskLevel {
    /// Returns the snake_case string identifier for this risk level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown risk level: {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_severities_count() {
        assert_eq!(Severity::all().len(), SEVERITY_COUNT);
    }

    #[test]
    fn severity_as_str_roundtrip() {
        for severity in Severity::all() {
            let parsed: Severity = severity.as_str().parse().unwrap();
            assert_eq!(*severity, parsed);
        }
    }

    #[test]
    fn severity_from_str_invalid() {
        assert!("extreme".parse::<Severity>().is_err());
        assert!("HIGH".parse::<Severity>().is_err()); // case-sensitive
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn severity_priority_mapping_is_total() {
        assert_eq!(Severity::Critical.priority(), Priority::Urgent);
        assert_eq!(Severity::High.priority(), Priority::High);
        assert_eq!(Severity::Medium.priority(), Priority::Medium);
        assert_eq!(Severity::Low.priority(), Priority::Low);
    }

    #[test]
    fn severity_serde_format_matches_as_str() {
        for severity in Severity::all() {
            let json = serde_json::to_string(severity).unwrap();
            assert_eq!(json, format!("\"{}\"", severity.as_str()));
        }
    }

    #[test]
    fn severity_display_is_screaming() {
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
        assert_eq!(Severity::Low.to_string(), "LOW");
    }

    #[test]
    fn risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn risk_level_roundtrip() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            let parsed: RiskLevel = level.as_str().parse().unwrap();
            assert_eq!(level, parsed);
        }
        assert!("extreme".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn priority_serde_roundtrip() {
        for priority in [
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Urgent,
        ] {
            let json = serde_json::to_string(&priority).unwrap();
            let parsed: Priority = serde_json::from_str(&json).unwrap();
            assert_eq!(priority, parsed);
        }
    }
}
