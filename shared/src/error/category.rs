//! Error category classification

use super::codes::ErrorCode;

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 6xxx: Guest errors
/// - 7xxx: Table errors
/// - anything else: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Guest errors (6xxx)
    Guest,
    /// Table errors (7xxx)
    Table,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            6000..7000 => Self::Guest,
            7000..8000 => Self::Table,
            _ => Self::System,
        }
    }

    /// Get the string name for this category, used as a log field
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Guest => "guest",
            Self::Table => "table",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
