//! Input validation for schedule requests.
//!
//! The scheduler accepts any input and degrades gracefully (empty names
//! dropped, duplicates collapsed, bad special pairs ignored). This module
//! is the stricter gate for input layers that want to reject such input
//! before scheduling. Detects:
//! - Field count below one
//! - Non-positive match duration
//! - Duplicate team names (after trimming)
//! - Special pair naming an unknown, duplicated, or identical team

use crate::models::Team;
use crate::scheduler::ScheduleRequest;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than one field.
    InvalidFieldCount,
    /// Match duration is zero.
    InvalidDuration,
    /// Two teams share the same name.
    DuplicateTeamName,
    /// Special pair names a team not in the roster.
    UnknownSpecialTeam,
    /// Special pair names a team that appears more than once.
    AmbiguousSpecialTeam,
    /// Special pair names the same team twice.
    SelfPairing,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &ScheduleRequest) -> ValidationResult {
    let mut errors = Vec::new();
    let config = &request.config;

    if config.fields < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidFieldCount,
            format!("Field count must be at least 1, got {}", config.fields),
        ));
    }
    if config.match_duration == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            "Match duration must be positive",
        ));
    }

    let duplicates = duplicate_names(&request.teams);
    for name in &duplicates {
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicateTeamName,
            format!("Duplicate team name: {name}"),
        ));
    }

    if let Some(special) = &config.special_pair {
        let known: HashSet<&str> = request
            .teams
            .iter()
            .map(|t| t.name.trim())
            .filter(|n| !n.is_empty())
            .collect();
        let a = special.team_a.trim();
        let b = special.team_b.trim();

        for name in [a, b] {
            if !known.contains(name) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSpecialTeam,
                    format!("Special pair references unknown team '{name}'"),
                ));
            } else if duplicates.iter().any(|d| d == name) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AmbiguousSpecialTeam,
                    format!("Special pair references duplicated team '{name}'"),
                ));
            }
        }
        if !a.is_empty() && a == b {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfPairing,
                format!("Special pair pairs '{a}' with itself"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Trimmed names occurring more than once, in first-repeat order.
fn duplicate_names(teams: &[Team]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for name in teams.iter().map(|t| t.name.trim()).filter(|n| !n.is_empty()) {
        if !seen.insert(name) && !duplicates.iter().any(|d| d == name) {
            duplicates.push(name.to_string());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TournamentConfig;

    fn request(names: &[&str], config: TournamentConfig) -> ScheduleRequest {
        ScheduleRequest::new(names.iter().map(|n| Team::new(*n)).collect()).with_config(config)
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input() {
        let config = TournamentConfig::new().with_special_pair("A", "C");
        assert!(validate_request(&request(&["A", "B", "C", ""], config)).is_ok());
    }

    #[test]
    fn test_invalid_fields_and_duration() {
        let config = TournamentConfig::new().with_fields(0).with_match_duration(0);
        assert_eq!(
            kinds(validate_request(&request(&["A", "B"], config))),
            vec![
                ValidationErrorKind::InvalidFieldCount,
                ValidationErrorKind::InvalidDuration
            ]
        );
    }

    #[test]
    fn test_zero_break_is_valid() {
        let config = TournamentConfig::new().with_break_duration(0);
        assert!(validate_request(&request(&["A", "B"], config)).is_ok());
    }

    #[test]
    fn test_duplicate_team_name() {
        let errors = validate_request(&request(&["A", "B", " A", "A"], TournamentConfig::new()))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateTeamName);
        assert!(errors[0].message.contains('A'));
    }

    #[test]
    fn test_unknown_special_team() {
        let config = TournamentConfig::new().with_special_pair("A", "Z");
        assert_eq!(
            kinds(validate_request(&request(&["A", "B"], config))),
            vec![ValidationErrorKind::UnknownSpecialTeam]
        );
    }

    #[test]
    fn test_self_pairing() {
        let config = TournamentConfig::new().with_special_pair("A", " A ");
        assert_eq!(
            kinds(validate_request(&request(&["A", "B"], config))),
            vec![ValidationErrorKind::SelfPairing]
        );
    }

    #[test]
    fn test_ambiguous_special_team() {
        let config = TournamentConfig::new().with_special_pair("A", "B");
        let result = validate_request(&request(&["A", "B", "B"], config));
        assert_eq!(
            kinds(result),
            vec![
                ValidationErrorKind::DuplicateTeamName,
                ValidationErrorKind::AmbiguousSpecialTeam
            ]
        );
    }

    #[test]
    fn test_multiple_errors() {
        let config = TournamentConfig::new()
            .with_fields(0)
            .with_special_pair("X", "Y");
        let errors = validate_request(&request(&["A", "A"], config)).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
