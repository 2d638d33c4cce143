//! Solution-condition queries.
//!
//! The engine can measure how well a stored solution satisfies each group of
//! the optimality (Karush-Kuhn-Tucker) conditions. A query names the solution
//! to check and the condition group; the engine reports the worst absolute
//! and relative violations together with where they occur.

/// Which stored solution a condition query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionKind {
    /// The basic (simplex) solution.
    Basic,
    /// The interior-point solution.
    Interior,
    /// The integer (branch-and-bound) solution.
    Integer,
}

/// Condition group to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    /// Primal equality constraints (row residuals).
    PrimalEquality,
    /// Primal bound constraints.
    PrimalBound,
    /// Dual equality constraints (reduced cost residuals).
    DualEquality,
    /// Dual bound constraints.
    DualBound,
}

/// Worst violations found by a condition query.
///
/// Indices are 1-based over the combined row+column space (rows first);
/// index 0 means no violation was located.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConditionReport {
    /// Largest absolute error.
    pub max_abs_error: f64,
    /// Combined index where the largest absolute error occurs.
    pub abs_error_index: usize,
    /// Largest relative error.
    pub max_rel_error: f64,
    /// Combined index where the largest relative error occurs.
    pub rel_error_index: usize,
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_report_default_is_clean() {
        let report = ConditionReport::default();
        assert_eq!(report.max_abs_error, 0.0);
        assert_eq!(report.abs_error_index, 0);
        assert_eq!(report.max_rel_error, 0.0);
        assert_eq!(report.rel_error_index, 0);
    }
}
