//! The per-problem driver interface implemented by engine backends.

use std::io;
use std::path::Path;

use crate::basis::{FactorizationKind, VarStatus};
use crate::codes::EngineCode;
use crate::conditions::{ConditionKind, ConditionReport, SolutionKind};
use crate::options::{BranchBoundOptions, SimplexOptions};

/// One optimization problem held by the engine.
///
/// Rows and columns are numbered from 1, the engine's native convention.
/// Every solving call blocks until the driver returns; the only
/// early-termination mechanism is the limits carried in the option block.
pub trait EngineProblem {
    /// Run the primal/dual simplex driver.
    fn run_simplex(&mut self, options: &SimplexOptions) -> EngineCode;

    /// Run the simplex driver in exact rational arithmetic.
    fn run_exact_simplex(&mut self, options: &SimplexOptions) -> EngineCode;

    /// Run the interior-point driver with the engine's own defaults.
    fn run_interior_point(&mut self) -> EngineCode;

    /// Run the branch-and-bound driver.
    fn run_branch_and_bound(&mut self, options: &BranchBoundOptions) -> EngineCode;

    /// Measure how well the given stored solution satisfies one condition
    /// group.
    fn check_conditions(&self, solution: SolutionKind, condition: ConditionKind)
        -> ConditionReport;

    /// Combined index of the variable that causes primal unboundedness,
    /// or 0 if none has been recorded.
    fn unbounded_ray_index(&self) -> usize;

    /// Number of rows (constraints).
    fn num_rows(&self) -> usize;

    /// Number of columns (structural variables).
    fn num_cols(&self) -> usize;

    /// Number of columns restricted to integer values.
    fn num_integer_cols(&self) -> usize;

    /// Name of the given row, if one is assigned.
    fn row_name(&self, row: usize) -> Option<&str>;

    /// Name of the given column, if one is assigned.
    fn col_name(&self, col: usize) -> Option<&str>;

    /// Assign (or change) the name of the given row.
    fn set_row_name(&mut self, row: usize, name: &str);

    /// Assign (or change) the name of the given column.
    fn set_col_name(&mut self, col: usize, name: &str);

    /// Set the basis status of the given row.
    fn set_row_status(&mut self, row: usize, status: VarStatus);

    /// Set the basis status of the given column.
    fn set_col_status(&mut self, col: usize, status: VarStatus);

    /// Cumulative simplex iteration count for this problem.
    fn iteration_count(&self) -> i32;

    /// Basis factorization technique currently selected.
    fn factorization_kind(&self) -> FactorizationKind;

    /// Whether a factorization of the current basis exists.
    fn basis_factorization_exists(&self) -> bool;

    /// (Re)compute the factorization of the current basis.
    fn factorize_basis(&mut self);

    /// Whether the current basic solution is optimal.
    fn has_optimal_basis(&self) -> bool;

    /// Write the problem in fixed MPS format.
    fn write_fixed_mps(&self, path: &Path) -> io::Result<()>;

    /// Write the problem in free MPS format.
    fn write_free_mps(&self, path: &Path) -> io::Result<()>;

    /// Write the problem in CPLEX LP format.
    fn write_cplex_lp(&self, path: &Path) -> io::Result<()>;

    /// Write the problem in plain text format.
    fn write_plain_text(&self, path: &Path) -> io::Result<()>;

    /// Write the basic solution in printable format.
    fn write_solution_report(&self, path: &Path) -> io::Result<()>;

    /// Write the interior-point solution in printable format.
    fn write_interior_report(&self, path: &Path) -> io::Result<()>;

    /// Write the integer solution in printable format.
    fn write_mip_report(&self, path: &Path) -> io::Result<()>;

    /// Write the sensitivity-range report for the current basis.
    fn write_ranges_report(&self, path: &Path) -> io::Result<()>;
}
