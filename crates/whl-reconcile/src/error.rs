use std::fmt;

use thiserror::Error;
use whl_model::VisitKind;

/// One category of referential-integrity failure, carrying every offending
/// ID of that category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// Visits referencing IDs absent from the corresponding target set.
    UnknownTargets { kind: VisitKind, ids: Vec<u32> },
    /// More than one visit for the same target ID.
    DuplicateTargets { kind: VisitKind, ids: Vec<u32> },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::UnknownTargets { kind, ids } => {
                write!(f, "visits reference unknown {kind} ids {ids:?}")
            }
            IntegrityIssue::DuplicateTargets { kind, ids } => {
                write!(f, "duplicate {kind} visits {ids:?}")
            }
        }
    }
}

/// Visit validation failed. Fatal: the report must not be built over visits
/// that point nowhere or count twice. Every issue is collected before
/// failing so one run surfaces the complete list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("visit validation failed: {}", format_issues(.issues))]
pub struct IntegrityError {
    pub issues: Vec<IntegrityIssue>,
}

fn format_issues(issues: &[IntegrityIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
