use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("Error reading line.")]
    MalformedLine,

    #[error("Invalid operator {0}.")]
    InvalidOperator(char),

    #[error("Attempted to divide by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow: {lhs} {operator} {rhs}")]
    ArithmeticOverflow { operator: char, lhs: i32, rhs: i32 },

    #[error("Operand out of range: {value}")]
    OperandOutOfRange { value: String },

    #[error("Invalid Roman numeral {numeral:?}: {reason}")]
    InvalidNumeral { numeral: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Reported to the user as regular output.
    Low,
    /// Bad input or a faulting evaluation.
    Medium,
    /// Unusable configuration.
    High,
    /// The process could not talk to its environment.
    Critical,
}

impl KataError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KataError::MalformedLine | KataError::InvalidOperator(_) => ErrorSeverity::Low,
            KataError::DivisionByZero
            | KataError::ArithmeticOverflow { .. }
            | KataError::OperandOutOfRange { .. }
            | KataError::InvalidNumeral { .. } => ErrorSeverity::Medium,
            KataError::ConfigValidationError { .. }
            | KataError::InvalidConfigValueError { .. }
            | KataError::MissingConfigError { .. } => ErrorSeverity::High,
            KataError::IoError(_) | KataError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error when it ends a CLI run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 1,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KataError::MalformedLine => "Enter a line like `+ 3 4`: operator, then two integers",
            KataError::InvalidOperator(_) => "Use one of the operators + - * / %",
            KataError::DivisionByZero => "Use a non-zero second operand for / and %",
            KataError::ArithmeticOverflow { .. } | KataError::OperandOutOfRange { .. } => {
                "Keep operands and results within the 32-bit signed integer range"
            }
            KataError::InvalidNumeral { .. } => "Use only the symbols I, V, X, L, C, D and M",
            KataError::ConfigValidationError { .. }
            | KataError::InvalidConfigValueError { .. }
            | KataError::MissingConfigError { .. } => "Check the batch file against the documented case kinds",
            KataError::IoError(_) => "Check that stdin/stdout and the given file paths are accessible",
            KataError::SerializationError(_) => "Retry without --json",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::IoError(e) => format!("Could not read or write data: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_messages() {
        assert_eq!(KataError::MalformedLine.to_string(), "Error reading line.");
        assert_eq!(KataError::InvalidOperator('x').to_string(), "Invalid operator x.");
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(KataError::InvalidOperator('?').exit_code(), 0);
        assert_eq!(KataError::DivisionByZero.exit_code(), 1);
        assert_eq!(
            KataError::MissingConfigError {
                field: "cases".to_string()
            }
            .exit_code(),
            2
        );
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(KataError::from(io).exit_code(), 3);
    }
}
