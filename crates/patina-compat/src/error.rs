//! Facade error types.

use patina_engine::EngineCode;

use crate::dispatch::Driver;
use crate::params::{ParamId, ParamKind};

/// Errors surfaced by the compatibility facade.
///
/// Apart from [`CompatError::UnsupportedOperation`], every variant is an
/// invariant violation: it means the caller passed configuration outside the
/// documented vocabulary, or this layer is out of sync with the engine.
/// Callers are not expected to recover from these; ordinary solve outcomes
/// are returned as [`SolveOutcome`](crate::SolveOutcome) values instead.
#[derive(Debug, Clone, PartialEq)]
pub enum CompatError {
    /// Raw parameter id outside the documented enumeration.
    UnknownParameter(i32),
    /// A value of the wrong kind was written to a parameter.
    KindMismatch {
        /// Parameter that was written.
        id: ParamId,
        /// Kind the parameter stores.
        expected: ParamKind,
    },
    /// Attempt to write a read-only parameter.
    ReadOnlyParameter(ParamId),
    /// A stored parameter value is outside its documented enumeration.
    ValueOutOfRange {
        /// Parameter holding the value.
        id: ParamId,
        /// The offending stored value.
        value: i32,
    },
    /// The engine returned a code the driver's translation table does not
    /// cover.
    UnmappedEngineCode {
        /// Driver that produced the code.
        driver: Driver,
        /// The untranslatable code.
        code: EngineCode,
    },
    /// Permanently disabled legacy operation.
    UnsupportedOperation(&'static str),
}

impl CompatError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            CompatError::UnknownParameter(_) => "PARAM_UNKNOWN",
            CompatError::KindMismatch { .. } => "PARAM_KIND_MISMATCH",
            CompatError::ReadOnlyParameter(_) => "PARAM_READ_ONLY",
            CompatError::ValueOutOfRange { .. } => "PARAM_VALUE_INVALID",
            CompatError::UnmappedEngineCode { .. } => "ENGINE_CODE_UNMAPPED",
            CompatError::UnsupportedOperation(_) => "OP_UNSUPPORTED",
        }
    }
}

impl std::fmt::Display for CompatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompatError::UnknownParameter(raw) => {
                write!(f, "[{}] Parameter id {} is not documented", self.code(), raw)
            }
            CompatError::KindMismatch { id, expected } => write!(
                f,
                "[{}] Parameter {} stores {} values",
                self.code(),
                id.name(),
                expected.as_str()
            ),
            CompatError::ReadOnlyParameter(id) => {
                write!(f, "[{}] Parameter {} is read-only", self.code(), id.name())
            }
            CompatError::ValueOutOfRange { id, value } => write!(
                f,
                "[{}] Parameter {} holds {} which is outside its enumeration",
                self.code(),
                id.name(),
                value
            ),
            CompatError::UnmappedEngineCode { driver, code } => write!(
                f,
                "[{}] Engine code {} has no mapping for the {} driver",
                self.code(),
                code,
                driver.as_str()
            ),
            CompatError::UnsupportedOperation(op) => {
                write!(f, "[{}] {}: operation not supported", self.code(), op)
            }
        }
    }
}

impl std::error::Error for CompatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_parameter() {
        let err = CompatError::UnknownParameter(999);
        let msg = format!("{}", err);
        assert!(msg.contains("PARAM_UNKNOWN"));
        assert!(msg.contains("999"));
    }

    #[test]
    fn test_error_display_kind_mismatch() {
        let err = CompatError::KindMismatch {
            id: ParamId::MessageLevel,
            expected: ParamKind::Integer,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("PARAM_KIND_MISMATCH"));
        assert!(msg.contains("message_level"));
        assert!(msg.contains("integer"));
    }

    #[test]
    fn test_error_display_value_out_of_range() {
        let err = CompatError::ValueOutOfRange {
            id: ParamId::BranchRule,
            value: 4,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("PARAM_VALUE_INVALID"));
        assert!(msg.contains("branch_rule"));
        assert!(msg.contains("4"));
    }

    #[test]
    fn test_error_display_unmapped_engine_code() {
        let err = CompatError::UnmappedEngineCode {
            driver: Driver::InteriorPoint,
            code: EngineCode::Stopped,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("ENGINE_CODE_UNMAPPED"));
        assert!(msg.contains("stopped"));
        assert!(msg.contains("interior_point"));
    }

    #[test]
    fn test_error_display_unsupported_operation() {
        let err = CompatError::UnsupportedOperation("read_basis_file");
        let msg = format!("{}", err);
        assert!(msg.contains("OP_UNSUPPORTED"));
        assert!(msg.contains("read_basis_file"));
    }

    #[test]
    fn test_error_code() {
        assert_eq!(CompatError::UnknownParameter(0).code(), "PARAM_UNKNOWN");
        assert_eq!(
            CompatError::ReadOnlyParameter(ParamId::IterationCount).code(),
            "PARAM_READ_ONLY"
        );
        assert_eq!(
            CompatError::UnsupportedOperation("x").code(),
            "OP_UNSUPPORTED"
        );
    }
}
