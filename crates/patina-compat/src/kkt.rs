//! Post-solve diagnostic assessment of optimality and feasibility
//! conditions.
//!
//! The engine measures the worst violation per condition group; this module
//! packages those measurements with a quality grade and normalizes the
//! column-indexed groups from the engine's combined row+column index space.

use patina_engine::{ConditionKind, ConditionReport, EngineProblem, SolutionKind};
use tracing::debug;

/// Qualitative grade of a condition group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityGrade {
    /// The solution satisfies the conditions to high accuracy.
    High,
    /// The solution satisfies the conditions to medium accuracy.
    Medium,
    /// The solution satisfies the conditions to low accuracy.
    Low,
    /// The solution violates the conditions.
    Unknown,
}

impl QualityGrade {
    /// Grade a maximum relative error against the fixed breakpoints.
    pub fn from_relative_error(max_rel_error: f64) -> Self {
        if max_rel_error <= 1e-9 {
            QualityGrade::High
        } else if max_rel_error <= 1e-6 {
            QualityGrade::Medium
        } else if max_rel_error <= 1e-3 {
            QualityGrade::Low
        } else {
            QualityGrade::Unknown
        }
    }

    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            QualityGrade::High => "high",
            QualityGrade::Medium => "medium",
            QualityGrade::Low => "low",
            QualityGrade::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Worst violations of one condition group, graded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionGroup {
    /// Largest absolute error.
    pub max_abs_error: f64,
    /// Index where the largest absolute error occurs; 0 means none.
    pub abs_error_index: usize,
    /// Largest relative error.
    pub max_rel_error: f64,
    /// Index where the largest relative error occurs; 0 means none.
    pub rel_error_index: usize,
    /// Quality grade derived from the largest relative error.
    pub quality: QualityGrade,
}

impl Default for ConditionGroup {
    fn default() -> Self {
        ConditionGroup {
            max_abs_error: 0.0,
            abs_error_index: 0,
            max_rel_error: 0.0,
            rel_error_index: 0,
            quality: QualityGrade::High,
        }
    }
}

/// Diagnostic report over the optimality condition groups.
///
/// Row-indexed groups carry row numbers; column-indexed groups carry column
/// numbers. The complementary-slackness group exists for structural symmetry
/// and always reports zero error at High quality.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiagnosticReport {
    /// Primal equality constraints (row residuals).
    pub primal_equality: ConditionGroup,
    /// Primal bound constraints.
    pub primal_bound: ConditionGroup,
    /// Dual equality constraints (reduced cost residuals), column-indexed.
    pub dual_equality: ConditionGroup,
    /// Dual bound constraints, column-indexed.
    pub dual_bound: ConditionGroup,
    /// Complementary slackness; never computed.
    pub complementary_slackness: ConditionGroup,
}

/// Assess the optimality conditions of the current basic solution.
pub fn check_optimality_conditions<E: EngineProblem>(engine: &E) -> DiagnosticReport {
    let num_rows = engine.num_rows();
    let report = DiagnosticReport {
        primal_equality: row_group(
            engine.check_conditions(SolutionKind::Basic, ConditionKind::PrimalEquality),
        ),
        primal_bound: row_group(
            engine.check_conditions(SolutionKind::Basic, ConditionKind::PrimalBound),
        ),
        dual_equality: column_group(
            engine.check_conditions(SolutionKind::Basic, ConditionKind::DualEquality),
            num_rows,
        ),
        dual_bound: column_group(
            engine.check_conditions(SolutionKind::Basic, ConditionKind::DualBound),
            num_rows,
        ),
        complementary_slackness: ConditionGroup::default(),
    };
    debug!(
        component = "diagnostics",
        operation = "check_optimality",
        status = "success",
        primal_equality = report.primal_equality.quality.as_str(),
        primal_bound = report.primal_bound.quality.as_str(),
        dual_equality = report.dual_equality.quality.as_str(),
        dual_bound = report.dual_bound.quality.as_str(),
        "Assessed optimality conditions"
    );
    report
}

/// Assess the feasibility conditions of the current integer solution.
///
/// Dual conditions are not meaningful for integer solutions; the dual and
/// complementary-slackness groups stay at their zero/High default.
pub fn check_integer_feasibility<E: EngineProblem>(engine: &E) -> DiagnosticReport {
    let report = DiagnosticReport {
        primal_equality: row_group(
            engine.check_conditions(SolutionKind::Integer, ConditionKind::PrimalEquality),
        ),
        primal_bound: row_group(
            engine.check_conditions(SolutionKind::Integer, ConditionKind::PrimalBound),
        ),
        ..DiagnosticReport::default()
    };
    debug!(
        component = "diagnostics",
        operation = "check_integer_feasibility",
        status = "success",
        primal_equality = report.primal_equality.quality.as_str(),
        primal_bound = report.primal_bound.quality.as_str(),
        "Assessed integer feasibility conditions"
    );
    report
}

fn row_group(report: ConditionReport) -> ConditionGroup {
    ConditionGroup {
        max_abs_error: report.max_abs_error,
        abs_error_index: report.abs_error_index,
        max_rel_error: report.max_rel_error,
        rel_error_index: report.rel_error_index,
        quality: QualityGrade::from_relative_error(report.max_rel_error),
    }
}

fn column_group(report: ConditionReport, num_rows: usize) -> ConditionGroup {
    ConditionGroup {
        max_abs_error: report.max_abs_error,
        abs_error_index: column_index(report.abs_error_index, num_rows),
        max_rel_error: report.max_rel_error,
        rel_error_index: column_index(report.rel_error_index, num_rows),
        quality: QualityGrade::from_relative_error(report.max_rel_error),
    }
}

/// Recover a column index from the engine's combined row+column index.
///
/// Index 0 means "no violation located" and must survive untouched.
pub(crate) fn column_index(combined: usize, num_rows: usize) -> usize {
    if combined == 0 {
        0
    } else {
        combined - num_rows
    }
}
