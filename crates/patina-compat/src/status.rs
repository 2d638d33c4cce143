//! Basis status translation between the legacy and engine vocabularies.

use patina_engine::VarStatus;

/// Basis status of a row or column, legacy vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisStatus {
    /// Basic variable.
    Basic,
    /// Non-basic variable at its lower bound.
    LowerBound,
    /// Non-basic variable at its upper bound.
    UpperBound,
    /// Non-basic free variable.
    Free,
    /// Non-basic fixed variable.
    Fixed,
}

impl BasisStatus {
    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            BasisStatus::Basic => "basic",
            BasisStatus::LowerBound => "lower_bound",
            BasisStatus::UpperBound => "upper_bound",
            BasisStatus::Free => "free",
            BasisStatus::Fixed => "fixed",
        }
    }
}

/// Translate a legacy basis status into the engine's.
///
/// The two enumerations happen to run parallel today, but the mapping is a
/// table rather than an offset so an engine-side renumbering cannot silently
/// corrupt statuses.
pub fn engine_status(status: BasisStatus) -> VarStatus {
    match status {
        BasisStatus::Basic => VarStatus::Basic,
        BasisStatus::LowerBound => VarStatus::LowerBound,
        BasisStatus::UpperBound => VarStatus::UpperBound,
        BasisStatus::Free => VarStatus::Free,
        BasisStatus::Fixed => VarStatus::Fixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table_is_bijective() {
        let pairs = [
            (BasisStatus::Basic, VarStatus::Basic),
            (BasisStatus::LowerBound, VarStatus::LowerBound),
            (BasisStatus::UpperBound, VarStatus::UpperBound),
            (BasisStatus::Free, VarStatus::Free),
            (BasisStatus::Fixed, VarStatus::Fixed),
        ];
        for (legacy, engine) in pairs {
            assert_eq!(engine_status(legacy), engine);
        }
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(BasisStatus::Basic.as_str(), "basic");
        assert_eq!(BasisStatus::Fixed.as_str(), "fixed");
    }
}
