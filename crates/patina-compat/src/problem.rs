//! The per-problem facade over the engine.
//!
//! [`Problem`] pairs one engine problem with its legacy parameter record and
//! exposes the flat legacy surface: id-based parameter access, the solving
//! drivers, post-solve diagnostics, basis and name pass-throughs, and the
//! report writers.
//!
//! The facade is not thread-safe; callers serialize access per instance.
//! The parameter record lives and dies with the facade and is never shared
//! between instances.

use std::io;
use std::path::Path;

use patina_engine::{EngineProblem, FactorizationKind};
use tracing::{debug, error};

use crate::dispatch;
use crate::error::CompatError;
use crate::kkt::{self, DiagnosticReport};
use crate::outcome::SolveOutcome;
use crate::params::{ControlParams, ParamId, ParamValue};
use crate::status::{engine_status, BasisStatus};

/// Class of a problem, derived from its integer-column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemClass {
    /// Pure linear program.
    Lp,
    /// Mixed-integer program.
    Mip,
}

impl ProblemClass {
    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ProblemClass::Lp => "lp",
            ProblemClass::Mip => "mip",
        }
    }
}

/// One optimization problem together with its legacy parameter record.
pub struct Problem<E> {
    engine: E,
    params: Option<ControlParams>,
}

impl<E: EngineProblem> Problem<E> {
    /// Wrap an engine problem. The parameter record is allocated lazily on
    /// first access.
    pub fn new(engine: E) -> Self {
        Problem {
            engine,
            params: None,
        }
    }

    /// Borrow the underlying engine problem.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutably borrow the underlying engine problem.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Unwrap back into the engine problem, dropping the parameter record.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// The parameter record, allocating and defaulting it on first use.
    fn access_params(&mut self) -> &mut ControlParams {
        self.params.get_or_insert_with(|| {
            debug!(
                component = "facade",
                operation = "init_params",
                status = "success",
                "Allocated control parameter record with defaults"
            );
            ControlParams::new()
        })
    }

    /// Borrow the full parameter record.
    pub fn params(&mut self) -> &ControlParams {
        self.access_params()
    }

    /// Restore every parameter to its documented default.
    pub fn reset_params(&mut self) {
        self.access_params().reset();
    }

    /// Read a control parameter.
    ///
    /// The iteration counter and the factorization kind are engine-backed;
    /// everything else reads the stored record (allocating it if needed, so
    /// defaults are observable before any write).
    pub fn param(&mut self, id: ParamId) -> ParamValue {
        use ParamValue::{Int, Real};
        // Any access allocates the record, engine-backed ids included, so
        // defaults become observable at the first touch of the surface.
        self.access_params();
        match id {
            ParamId::IterationCount => Int(self.engine.iteration_count()),
            ParamId::FactorizationKind => {
                Int(factorization_code(self.engine.factorization_kind()))
            }
            ParamId::MessageLevel => Int(self.access_params().message_level),
            ParamId::Scaling => Int(self.access_params().scaling),
            ParamId::Method => Int(self.access_params().method),
            ParamId::Pricing => Int(self.access_params().pricing),
            ParamId::RelaxFactor => Real(self.access_params().relax_factor),
            ParamId::BoundTolerance => Real(self.access_params().bound_tolerance),
            ParamId::ReducedCostTolerance => Real(self.access_params().reduced_cost_tolerance),
            ParamId::PivotTolerance => Real(self.access_params().pivot_tolerance),
            ParamId::Rounding => Int(self.access_params().rounding),
            ParamId::ObjectiveLowerLimit => Real(self.access_params().objective_lower_limit),
            ParamId::ObjectiveUpperLimit => Real(self.access_params().objective_upper_limit),
            ParamId::IterationLimit => Int(self.access_params().iteration_limit),
            ParamId::TimeLimit => Real(self.access_params().time_limit),
            ParamId::OutputFrequency => Int(self.access_params().output_frequency),
            ParamId::OutputDelay => Real(self.access_params().output_delay),
            ParamId::BranchRule => Int(self.access_params().branch_rule),
            ParamId::BacktrackRule => Int(self.access_params().backtrack_rule),
            ParamId::IntegerTolerance => Real(self.access_params().integer_tolerance),
            ParamId::ObjectiveTolerance => Real(self.access_params().objective_tolerance),
            ParamId::MpsInfo => Int(self.access_params().mps_info),
            ParamId::MpsObjective => Int(self.access_params().mps_objective),
            ParamId::MpsOriginalNames => Int(self.access_params().mps_original_names),
            ParamId::MpsWide => Int(self.access_params().mps_wide),
            ParamId::MpsFree => Int(self.access_params().mps_free),
            ParamId::MpsSkip => Int(self.access_params().mps_skip),
            ParamId::LpOriginalNames => Int(self.access_params().lp_original_names),
            ParamId::Presolve => Int(self.access_params().presolve),
            ParamId::Binarize => Int(self.access_params().binarize),
            ParamId::CutMask => Int(self.access_params().cut_mask),
            ParamId::MipGap => Real(self.access_params().mip_gap),
        }
    }

    /// Write a control parameter.
    ///
    /// # Errors
    ///
    /// Writing a read-only parameter or a value of the wrong kind is a
    /// caller programming error and yields the corresponding fault.
    pub fn set_param(&mut self, id: ParamId, value: ParamValue) -> Result<(), CompatError> {
        use ParamValue::{Int, Real};
        match (id, value) {
            (ParamId::IterationCount, _) | (ParamId::FactorizationKind, _) => {
                return Err(CompatError::ReadOnlyParameter(id))
            }
            (ParamId::MessageLevel, Int(v)) => self.access_params().message_level = v,
            (ParamId::Scaling, Int(v)) => self.access_params().scaling = v,
            (ParamId::Method, Int(v)) => self.access_params().method = v,
            (ParamId::Pricing, Int(v)) => self.access_params().pricing = v,
            (ParamId::RelaxFactor, Real(v)) => self.access_params().relax_factor = v,
            (ParamId::BoundTolerance, Real(v)) => self.access_params().bound_tolerance = v,
            (ParamId::ReducedCostTolerance, Real(v)) => {
                self.access_params().reduced_cost_tolerance = v
            }
            (ParamId::PivotTolerance, Real(v)) => self.access_params().pivot_tolerance = v,
            (ParamId::Rounding, Int(v)) => self.access_params().rounding = v,
            (ParamId::ObjectiveLowerLimit, Real(v)) => {
                self.access_params().objective_lower_limit = v
            }
            (ParamId::ObjectiveUpperLimit, Real(v)) => {
                self.access_params().objective_upper_limit = v
            }
            (ParamId::IterationLimit, Int(v)) => self.access_params().iteration_limit = v,
            (ParamId::TimeLimit, Real(v)) => self.access_params().time_limit = v,
            (ParamId::OutputFrequency, Int(v)) => self.access_params().output_frequency = v,
            (ParamId::OutputDelay, Real(v)) => self.access_params().output_delay = v,
            (ParamId::BranchRule, Int(v)) => self.access_params().branch_rule = v,
            (ParamId::BacktrackRule, Int(v)) => self.access_params().backtrack_rule = v,
            (ParamId::IntegerTolerance, Real(v)) => self.access_params().integer_tolerance = v,
            (ParamId::ObjectiveTolerance, Real(v)) => {
                self.access_params().objective_tolerance = v
            }
            (ParamId::MpsInfo, Int(v)) => self.access_params().mps_info = v,
            (ParamId::MpsObjective, Int(v)) => self.access_params().mps_objective = v,
            (ParamId::MpsOriginalNames, Int(v)) => {
                self.access_params().mps_original_names = v
            }
            (ParamId::MpsWide, Int(v)) => self.access_params().mps_wide = v,
            (ParamId::MpsFree, Int(v)) => self.access_params().mps_free = v,
            (ParamId::MpsSkip, Int(v)) => self.access_params().mps_skip = v,
            (ParamId::LpOriginalNames, Int(v)) => self.access_params().lp_original_names = v,
            (ParamId::Presolve, Int(v)) => self.access_params().presolve = v,
            (ParamId::Binarize, Int(v)) => self.access_params().binarize = v,
            (ParamId::CutMask, Int(v)) => self.access_params().cut_mask = v,
            (ParamId::MipGap, Real(v)) => self.access_params().mip_gap = v,
            (id, _) => {
                return Err(CompatError::KindMismatch {
                    id,
                    expected: id.kind(),
                })
            }
        }
        Ok(())
    }

    /// Solve with the exact-simplex driver.
    ///
    /// # Errors
    ///
    /// Translation and unmapped-code faults; ordinary solve results come
    /// back as [`SolveOutcome`] values.
    pub fn solve_exact(&mut self) -> Result<SolveOutcome, CompatError> {
        let params = *self.access_params();
        dispatch::exact_simplex(&mut self.engine, &params)
    }

    /// Solve with the interior-point driver.
    ///
    /// # Errors
    ///
    /// Unmapped-code faults; ordinary solve results come back as
    /// [`SolveOutcome`] values.
    pub fn solve_interior(&mut self) -> Result<SolveOutcome, CompatError> {
        dispatch::interior_point(&mut self.engine)
    }

    /// Solve with branch-and-bound, reusing the current basis (no
    /// presolve).
    ///
    /// # Errors
    ///
    /// Translation and unmapped-code faults; ordinary solve results come
    /// back as [`SolveOutcome`] values.
    pub fn solve_integer(&mut self) -> Result<SolveOutcome, CompatError> {
        let params = *self.access_params();
        dispatch::branch_and_bound(&mut self.engine, &params, false)
    }

    /// Solve with branch-and-bound from scratch, forcing presolve on.
    ///
    /// # Errors
    ///
    /// Translation and unmapped-code faults; ordinary solve results come
    /// back as [`SolveOutcome`] values.
    pub fn solve_integer_with_presolve(&mut self) -> Result<SolveOutcome, CompatError> {
        let params = *self.access_params();
        dispatch::branch_and_bound(&mut self.engine, &params, true)
    }

    /// Assess the optimality conditions of the current basic solution.
    pub fn check_optimality_conditions(&self) -> DiagnosticReport {
        kkt::check_optimality_conditions(&self.engine)
    }

    /// Assess the feasibility conditions of the current integer solution.
    pub fn check_integer_feasibility(&self) -> DiagnosticReport {
        kkt::check_integer_feasibility(&self.engine)
    }

    /// Combined index of the variable causing primal unboundedness, 0 if
    /// none.
    pub fn unbounded_ray_index(&self) -> usize {
        self.engine.unbounded_ray_index()
    }

    /// Whether this is a pure LP or a mixed-integer problem.
    pub fn classification(&self) -> ProblemClass {
        if self.engine.num_integer_cols() == 0 {
            ProblemClass::Lp
        } else {
            ProblemClass::Mip
        }
    }

    /// Number of rows (constraints).
    pub fn num_rows(&self) -> usize {
        self.engine.num_rows()
    }

    /// Number of columns (structural variables).
    pub fn num_cols(&self) -> usize {
        self.engine.num_cols()
    }

    /// Name of the given row (1-based), if one is assigned.
    pub fn row_name(&self, row: usize) -> Option<&str> {
        self.engine.row_name(row)
    }

    /// Name of the given column (1-based), if one is assigned.
    pub fn col_name(&self, col: usize) -> Option<&str> {
        self.engine.col_name(col)
    }

    /// Assign (or change) the name of the given row (1-based).
    pub fn set_row_name(&mut self, row: usize, name: &str) {
        self.engine.set_row_name(row, name);
    }

    /// Assign (or change) the name of the given column (1-based).
    pub fn set_col_name(&mut self, col: usize, name: &str) {
        self.engine.set_col_name(col, name);
    }

    /// Set the basis status of the given row (1-based).
    pub fn set_row_status(&mut self, row: usize, status: BasisStatus) {
        self.engine.set_row_status(row, engine_status(status));
    }

    /// Set the basis status of the given column (1-based).
    pub fn set_col_status(&mut self, col: usize, status: BasisStatus) {
        self.engine.set_col_status(col, engine_status(status));
    }

    /// Legacy basis file input. Permanently disabled.
    ///
    /// # Errors
    ///
    /// Always fails with [`CompatError::UnsupportedOperation`], for any
    /// path.
    pub fn read_basis_file(&mut self, _path: &Path) -> Result<(), CompatError> {
        error!(
            component = "facade",
            operation = "read_basis_file",
            status = "error",
            "Legacy basis input is permanently disabled"
        );
        Err(CompatError::UnsupportedOperation("read_basis_file"))
    }

    /// Legacy basis file output. Permanently disabled.
    ///
    /// # Errors
    ///
    /// Always fails with [`CompatError::UnsupportedOperation`], for any
    /// path.
    pub fn write_basis_file(&mut self, _path: &Path) -> Result<(), CompatError> {
        error!(
            component = "facade",
            operation = "write_basis_file",
            status = "error",
            "Legacy basis output is permanently disabled"
        );
        Err(CompatError::UnsupportedOperation("write_basis_file"))
    }

    /// Write the problem in fixed MPS format.
    pub fn write_fixed_mps(&self, path: &Path) -> io::Result<()> {
        self.engine.write_fixed_mps(path)
    }

    /// Write the problem in free MPS format.
    pub fn write_free_mps(&self, path: &Path) -> io::Result<()> {
        self.engine.write_free_mps(path)
    }

    /// Write the problem in CPLEX LP format.
    pub fn write_cplex_lp(&self, path: &Path) -> io::Result<()> {
        self.engine.write_cplex_lp(path)
    }

    /// Write the problem in plain text format.
    pub fn write_plain_text(&self, path: &Path) -> io::Result<()> {
        self.engine.write_plain_text(path)
    }

    /// Write the basic solution in printable format.
    pub fn write_solution_report(&self, path: &Path) -> io::Result<()> {
        self.engine.write_solution_report(path)
    }

    /// Write the interior-point solution in printable format.
    pub fn write_interior_report(&self, path: &Path) -> io::Result<()> {
        self.engine.write_interior_report(path)
    }

    /// Write the integer solution in printable format.
    pub fn write_mip_report(&self, path: &Path) -> io::Result<()> {
        self.engine.write_mip_report(path)
    }

    /// Write the sensitivity-range report.
    ///
    /// If the basic solution is optimal but no factorization of the current
    /// basis exists, one is computed first.
    pub fn write_sensitivity_ranges(&mut self, path: &Path) -> io::Result<()> {
        if self.engine.has_optimal_basis() && !self.engine.basis_factorization_exists() {
            self.engine.factorize_basis();
        }
        self.engine.write_ranges_report(path)
    }
}

fn factorization_code(kind: FactorizationKind) -> i32 {
    match kind {
        FactorizationKind::ForrestTomlin => 1,
        FactorizationKind::SchurBartelsGolub => 2,
        FactorizationKind::SchurGivens => 3,
    }
}
