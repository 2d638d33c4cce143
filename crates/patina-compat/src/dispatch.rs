//! Driver dispatch and outcome-code translation.
//!
//! One entry point per engine driver. Each builds its option block from the
//! stored record, invokes the engine, and translates the engine code through
//! a fixed per-driver table. The tables are deliberately independent: the
//! same engine code can mean different things depending on which driver
//! produced it.

use std::time::Instant;

use patina_engine::{EngineCode, EngineProblem};
use patina_tools::RssSample;
use tracing::{debug, warn};

use crate::error::CompatError;
use crate::outcome::SolveOutcome;
use crate::params::ControlParams;
use crate::translate::{branch_bound_options, simplex_options};

/// Engine driver that produced an outcome, used for logging and error
/// context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Driver {
    /// Simplex in exact rational arithmetic.
    ExactSimplex,
    /// Interior-point method.
    InteriorPoint,
    /// Branch-and-bound search.
    BranchAndBound,
}

impl Driver {
    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Driver::ExactSimplex => "exact_simplex",
            Driver::InteriorPoint => "interior_point",
            Driver::BranchAndBound => "branch_and_bound",
        }
    }
}

/// Run the exact-simplex driver.
///
/// # Errors
///
/// Returns a translation fault for stored values outside their enumeration,
/// or an unmapped-code fault if the engine answers outside the driver's
/// table.
pub fn exact_simplex<E: EngineProblem>(
    engine: &mut E,
    params: &ControlParams,
) -> Result<SolveOutcome, CompatError> {
    let options = simplex_options(params)?;
    let rss_before = capture_rss();
    let started = Instant::now();
    debug!(
        component = "dispatch",
        operation = "exact_simplex",
        status = "success",
        iteration_limit = options.iteration_limit,
        time_limit_ms = options.time_limit_ms,
        "Dispatching exact simplex driver"
    );
    let code = engine.run_exact_simplex(&options);
    let outcome = exact_outcome(code)?;
    log_completion(Driver::ExactSimplex, code, outcome, started, rss_before);
    Ok(outcome)
}

/// Run the interior-point driver with the engine's own option defaults.
///
/// # Errors
///
/// Returns an unmapped-code fault if the engine answers outside the
/// driver's table.
pub fn interior_point<E: EngineProblem>(engine: &mut E) -> Result<SolveOutcome, CompatError> {
    let rss_before = capture_rss();
    let started = Instant::now();
    debug!(
        component = "dispatch",
        operation = "interior_point",
        status = "success",
        "Dispatching interior-point driver"
    );
    let code = engine.run_interior_point();
    let outcome = interior_outcome(code)?;
    log_completion(Driver::InteriorPoint, code, outcome, started, rss_before);
    Ok(outcome)
}

/// Run the branch-and-bound driver.
///
/// `presolve` is the caller's choice, not the stored record's: the
/// easy-to-use driver forces it on, while basis-reusing callers leave it
/// off.
///
/// # Errors
///
/// Returns a translation fault for stored values outside their enumeration,
/// or an unmapped-code fault if the engine answers outside the driver's
/// table.
pub fn branch_and_bound<E: EngineProblem>(
    engine: &mut E,
    params: &ControlParams,
    presolve: bool,
) -> Result<SolveOutcome, CompatError> {
    let options = branch_bound_options(params, presolve)?;
    let rss_before = capture_rss();
    let started = Instant::now();
    debug!(
        component = "dispatch",
        operation = "branch_and_bound",
        status = "success",
        time_limit_ms = options.time_limit_ms,
        presolve,
        "Dispatching branch-and-bound driver"
    );
    let code = engine.run_branch_and_bound(&options);
    let outcome = branch_bound_outcome(code)?;
    log_completion(Driver::BranchAndBound, code, outcome, started, rss_before);
    Ok(outcome)
}

fn exact_outcome(code: EngineCode) -> Result<SolveOutcome, CompatError> {
    match code {
        EngineCode::Success => Ok(SolveOutcome::Ok),
        EngineCode::InvalidBasis
        | EngineCode::SingularMatrix
        | EngineCode::InvalidBounds
        | EngineCode::Failure => Ok(SolveOutcome::Fault),
        EngineCode::IterationLimit => Ok(SolveOutcome::IterationLimit),
        EngineCode::TimeLimit => Ok(SolveOutcome::TimeLimit),
        code => Err(CompatError::UnmappedEngineCode {
            driver: Driver::ExactSimplex,
            code,
        }),
    }
}

fn interior_outcome(code: EngineCode) -> Result<SolveOutcome, CompatError> {
    match code {
        EngineCode::Success => Ok(SolveOutcome::Ok),
        EngineCode::Failure => Ok(SolveOutcome::Fault),
        EngineCode::NoFeasible => Ok(SolveOutcome::NoFeasible),
        EngineCode::NoConvergence => Ok(SolveOutcome::NoConvergence),
        EngineCode::IterationLimit => Ok(SolveOutcome::IterationLimit),
        EngineCode::NumericalInstability => Ok(SolveOutcome::NumericalInstability),
        code => Err(CompatError::UnmappedEngineCode {
            driver: Driver::InteriorPoint,
            code,
        }),
    }
}

fn branch_bound_outcome(code: EngineCode) -> Result<SolveOutcome, CompatError> {
    match code {
        EngineCode::Success => Ok(SolveOutcome::Ok),
        EngineCode::NoPrimalFeasible => Ok(SolveOutcome::NoPrimalFeasible),
        EngineCode::NoDualFeasible => Ok(SolveOutcome::NoDualFeasible),
        EngineCode::InvalidBounds | EngineCode::RootLpMissing => Ok(SolveOutcome::Fault),
        // A generic engine failure during the search means the basis went
        // singular, which is how the legacy vocabulary reports it.
        EngineCode::Failure => Ok(SolveOutcome::SingularBasis),
        EngineCode::MipGapReached => Ok(SolveOutcome::MipGapReached),
        EngineCode::TimeLimit => Ok(SolveOutcome::TimeLimit),
        code => Err(CompatError::UnmappedEngineCode {
            driver: Driver::BranchAndBound,
            code,
        }),
    }
}

fn log_completion(
    driver: Driver,
    code: EngineCode,
    outcome: SolveOutcome,
    started: Instant,
    rss_before: Option<u64>,
) {
    let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
    let rss_after = capture_rss();
    let rss_delta = match (rss_before, rss_after) {
        (Some(before), Some(after)) => Some(after as i64 - before as i64),
        _ => None,
    };
    debug!(
        component = "dispatch",
        operation = driver.as_str(),
        status = "success",
        engine_code = code.as_str(),
        outcome = outcome.as_str(),
        duration_ms,
        rss_bytes = ?rss_after,
        rss_delta_bytes = ?rss_delta,
        "Engine driver returned"
    );
    if !outcome.is_ok() {
        warn!(
            component = "dispatch",
            operation = driver.as_str(),
            status = "warn",
            outcome = outcome.as_str(),
            "Driver finished without a completed solve"
        );
    }
}

fn capture_rss() -> Option<u64> {
    RssSample::capture().ok().map(|sample| sample.bytes)
}
