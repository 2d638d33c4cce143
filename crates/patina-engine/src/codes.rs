//! Outcome codes returned by the engine's solving drivers.

/// Outcome code of a driver invocation.
///
/// The vocabulary is closed and versioned together with the engine. Which
/// subset a given driver may return, and what each member means to a caller,
/// is the translating layer's concern; the engine only guarantees that no
/// code outside this enumeration is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineCode {
    /// The driver completed its work.
    Success,
    /// The current basis is invalid.
    InvalidBasis,
    /// The basis matrix is singular within the working precision.
    SingularMatrix,
    /// The basis matrix is ill-conditioned.
    IllConditioned,
    /// Some variable has incorrect bounds.
    InvalidBounds,
    /// The driver failed for an unspecific reason.
    Failure,
    /// The objective reached its lower limit.
    ObjectiveLowerReached,
    /// The objective reached its upper limit.
    ObjectiveUpperReached,
    /// The iteration limit was exhausted.
    IterationLimit,
    /// The time limit was exhausted.
    TimeLimit,
    /// The LP relaxation has no primal feasible solution.
    NoPrimalFeasible,
    /// The LP relaxation has no dual feasible solution.
    NoDualFeasible,
    /// No optimal basis of the root relaxation is available.
    RootLpMissing,
    /// The search was stopped by the application callback.
    Stopped,
    /// The relative gap tolerance was reached.
    MipGapReached,
    /// The problem has no feasible (primal or dual) solution.
    NoFeasible,
    /// The iteration sequence failed to converge.
    NoConvergence,
    /// Numerical instability on solving the search direction system.
    NumericalInstability,
}

impl EngineCode {
    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            EngineCode::Success => "success",
            EngineCode::InvalidBasis => "invalid_basis",
            EngineCode::SingularMatrix => "singular_matrix",
            EngineCode::IllConditioned => "ill_conditioned",
            EngineCode::InvalidBounds => "invalid_bounds",
            EngineCode::Failure => "failure",
            EngineCode::ObjectiveLowerReached => "objective_lower_reached",
            EngineCode::ObjectiveUpperReached => "objective_upper_reached",
            EngineCode::IterationLimit => "iteration_limit",
            EngineCode::TimeLimit => "time_limit",
            EngineCode::NoPrimalFeasible => "no_primal_feasible",
            EngineCode::NoDualFeasible => "no_dual_feasible",
            EngineCode::RootLpMissing => "root_lp_missing",
            EngineCode::Stopped => "stopped",
            EngineCode::MipGapReached => "mip_gap_reached",
            EngineCode::NoFeasible => "no_feasible",
            EngineCode::NoConvergence => "no_convergence",
            EngineCode::NumericalInstability => "numerical_instability",
        }
    }
}

impl std::fmt::Display for EngineCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_as_str() {
        assert_eq!(EngineCode::Success.as_str(), "success");
        assert_eq!(EngineCode::Failure.as_str(), "failure");
        assert_eq!(EngineCode::TimeLimit.as_str(), "time_limit");
        assert_eq!(EngineCode::NoPrimalFeasible.as_str(), "no_primal_feasible");
    }

    #[test]
    fn test_code_display() {
        assert_eq!(format!("{}", EngineCode::SingularMatrix), "singular_matrix");
        assert_eq!(format!("{}", EngineCode::MipGapReached), "mip_gap_reached");
    }
}
