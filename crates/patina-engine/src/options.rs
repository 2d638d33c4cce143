//! Structured option blocks for the engine's solving drivers.

/// Terminal output level of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageLevel {
    /// No output.
    Off,
    /// Error and warning messages only.
    ErrorsOnly,
    /// Normal output.
    Normal,
    /// Full output, including per-iteration information.
    All,
}

impl MessageLevel {
    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageLevel::Off => "off",
            MessageLevel::ErrorsOnly => "errors_only",
            MessageLevel::Normal => "normal",
            MessageLevel::All => "all",
        }
    }
}

/// Simplex variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimplexMethod {
    /// Primal simplex.
    Primal,
    /// Dual simplex.
    Dual,
}

/// Pricing rule used to select the entering variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingRule {
    /// Textbook (Dantzig) pricing.
    Standard,
    /// Projected steepest-edge pricing.
    SteepestEdge,
}

/// Ratio test used to select the leaving variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioTest {
    /// Textbook ratio test.
    Standard,
    /// Harris two-pass ratio test with bound relaxation.
    Harris,
}

/// Branching variable selection technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchTechnique {
    /// First fractional variable.
    FirstFractional,
    /// Last fractional variable.
    LastFractional,
    /// Driebeck--Tomlin penalty heuristic.
    DriebeckTomlin,
    /// Most fractional variable.
    MostFractional,
}

/// Backtracking (node selection) technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BacktrackTechnique {
    /// Depth-first search.
    DepthFirst,
    /// Breadth-first search.
    BreadthFirst,
    /// Best-projection heuristic.
    BestProjection,
    /// Best local bound.
    BestLocalBound,
}

/// Options for the simplex-family drivers (primal/dual and exact).
#[derive(Debug, Clone, PartialEq)]
pub struct SimplexOptions {
    /// Terminal output level.
    pub message_level: MessageLevel,
    /// Simplex variant.
    pub method: SimplexMethod,
    /// Pricing rule.
    pub pricing: PricingRule,
    /// Ratio test.
    pub ratio_test: RatioTest,
    /// Primal feasibility tolerance.
    pub bound_tolerance: f64,
    /// Dual feasibility (reduced cost) tolerance.
    pub reduced_cost_tolerance: f64,
    /// Pivot element tolerance.
    pub pivot_tolerance: f64,
    /// Lower limit of the objective; the dual simplex stops on crossing it.
    pub objective_lower_limit: f64,
    /// Upper limit of the objective; the dual simplex stops on crossing it.
    pub objective_upper_limit: f64,
    /// Iteration limit. The engine has no unbounded sentinel; `i32::MAX`
    /// is the effective "no limit".
    pub iteration_limit: i32,
    /// Time limit in milliseconds; `i32::MAX` is the effective "no limit".
    pub time_limit_ms: i32,
    /// Output frequency, in iterations.
    pub output_frequency: i32,
    /// Delay before the first output line, in milliseconds.
    pub output_delay_ms: i32,
    /// Enable the LP presolver.
    pub presolve: bool,
}

impl Default for SimplexOptions {
    fn default() -> Self {
        SimplexOptions {
            message_level: MessageLevel::All,
            method: SimplexMethod::Primal,
            pricing: PricingRule::SteepestEdge,
            ratio_test: RatioTest::Harris,
            bound_tolerance: 1e-7,
            reduced_cost_tolerance: 1e-7,
            pivot_tolerance: 1e-9,
            objective_lower_limit: f64::MIN,
            objective_upper_limit: f64::MAX,
            iteration_limit: i32::MAX,
            time_limit_ms: i32::MAX,
            output_frequency: 200,
            output_delay_ms: 0,
            presolve: false,
        }
    }
}

/// Options for the branch-and-bound driver.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchBoundOptions {
    /// Terminal output level.
    pub message_level: MessageLevel,
    /// Branching variable selection.
    pub branching: BranchTechnique,
    /// Node selection.
    pub backtracking: BacktrackTechnique,
    /// Integer feasibility tolerance.
    pub integer_tolerance: f64,
    /// Objective comparison tolerance used to reject inferior nodes.
    pub objective_tolerance: f64,
    /// Time limit in milliseconds; `i32::MAX` is the effective "no limit".
    pub time_limit_ms: i32,
    /// Relative MIP gap tolerance; 0.0 searches to proven optimality.
    pub mip_gap: f64,
    /// Enable Gomory mixed-integer cuts.
    pub gomory_cuts: bool,
    /// Enable mixed-integer rounding cuts.
    pub mir_cuts: bool,
    /// Enable cover cuts.
    pub cover_cuts: bool,
    /// Enable clique cuts.
    pub clique_cuts: bool,
    /// Enable the MIP presolver.
    pub presolve: bool,
    /// Replace general integer variables by binary ones.
    pub binarize: bool,
}

impl Default for BranchBoundOptions {
    fn default() -> Self {
        BranchBoundOptions {
            message_level: MessageLevel::All,
            branching: BranchTechnique::DriebeckTomlin,
            backtracking: BacktrackTechnique::BestLocalBound,
            integer_tolerance: 1e-5,
            objective_tolerance: 1e-7,
            time_limit_ms: i32::MAX,
            mip_gap: 0.0,
            gomory_cuts: false,
            mir_cuts: false,
            cover_cuts: false,
            clique_cuts: false,
            presolve: false,
            binarize: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplex_options_default() {
        let options = SimplexOptions::default();
        assert_eq!(options.message_level, MessageLevel::All);
        assert_eq!(options.method, SimplexMethod::Primal);
        assert_eq!(options.pricing, PricingRule::SteepestEdge);
        assert_eq!(options.ratio_test, RatioTest::Harris);
        assert_eq!(options.iteration_limit, i32::MAX);
        assert_eq!(options.time_limit_ms, i32::MAX);
        assert!(!options.presolve);
    }

    #[test]
    fn test_branch_bound_options_default() {
        let options = BranchBoundOptions::default();
        assert_eq!(options.branching, BranchTechnique::DriebeckTomlin);
        assert_eq!(options.backtracking, BacktrackTechnique::BestLocalBound);
        assert!(!options.gomory_cuts);
        assert!(!options.mir_cuts);
        assert!(!options.cover_cuts);
        assert!(!options.clique_cuts);
        assert!(!options.binarize);
    }

    #[test]
    fn test_message_level_as_str() {
        assert_eq!(MessageLevel::Off.as_str(), "off");
        assert_eq!(MessageLevel::ErrorsOnly.as_str(), "errors_only");
        assert_eq!(MessageLevel::Normal.as_str(), "normal");
        assert_eq!(MessageLevel::All.as_str(), "all");
    }
}
