//! The legacy-shaped control parameter record.
//!
//! One record exists per problem instance, allocated lazily on first access
//! and reset to the documented defaults at allocation time. The record is a
//! plain field bag; the id-based get/set surface lives on
//! [`Problem`](crate::Problem), which also resolves the two engine-backed
//! read-only parameters.

use crate::error::CompatError;

/// Cover cut flag of the cut-type bitmask.
pub const CUT_COVER: i32 = 0x01;
/// Clique cut flag of the cut-type bitmask.
pub const CUT_CLIQUE: i32 = 0x02;
/// Gomory mixed-integer cut flag of the cut-type bitmask.
pub const CUT_GOMORY: i32 = 0x04;
/// Mixed-integer rounding cut flag of the cut-type bitmask.
pub const CUT_MIR: i32 = 0x08;
/// All cut flags combined.
pub const CUT_ALL: i32 = CUT_COVER | CUT_CLIQUE | CUT_GOMORY | CUT_MIR;

/// Kind of value a parameter stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Integer or enumeration value.
    Integer,
    /// Real value.
    Real,
}

impl ParamKind {
    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::Integer => "integer",
            ParamKind::Real => "real",
        }
    }
}

/// A parameter value, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Integer or enumeration value.
    Int(i32),
    /// Real value.
    Real(f64),
}

impl ParamValue {
    /// Kind of this value.
    pub fn kind(self) -> ParamKind {
        match self {
            ParamValue::Int(_) => ParamKind::Integer,
            ParamValue::Real(_) => ParamKind::Real,
        }
    }

    /// The integer payload, if this is an integer value.
    pub fn as_int(self) -> Option<i32> {
        match self {
            ParamValue::Int(v) => Some(v),
            ParamValue::Real(_) => None,
        }
    }

    /// The real payload, if this is a real value.
    pub fn as_real(self) -> Option<f64> {
        match self {
            ParamValue::Int(_) => None,
            ParamValue::Real(v) => Some(v),
        }
    }
}

/// Identifiers of the legacy control parameters.
///
/// The numeric discriminants are the raw ids the flat legacy surface exposes;
/// [`ParamId::from_raw`] and [`ParamId::raw`] round-trip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    /// Terminal output level (0..3).
    MessageLevel = 300,
    /// Automatic scaling toggle.
    Scaling = 301,
    /// Solving method selector: 0 primal, 1 dual.
    Method = 302,
    /// Pricing selector: 0 standard, 1 steepest-edge.
    Pricing = 303,
    /// Harris ratio-test relaxation factor; exactly 0.0 selects the
    /// standard ratio test.
    RelaxFactor = 304,
    /// Primal feasibility tolerance.
    BoundTolerance = 305,
    /// Dual feasibility (reduced cost) tolerance.
    ReducedCostTolerance = 306,
    /// Pivot element tolerance.
    PivotTolerance = 307,
    /// Round computed values near zero in solution reports.
    Rounding = 308,
    /// Objective lower limit.
    ObjectiveLowerLimit = 309,
    /// Objective upper limit.
    ObjectiveUpperLimit = 310,
    /// Simplex iteration limit; negative means unbounded.
    IterationLimit = 311,
    /// Cumulative simplex iteration count (read-only, engine-backed).
    IterationCount = 312,
    /// Time limit in seconds; negative means unbounded.
    TimeLimit = 313,
    /// Output frequency in iterations.
    OutputFrequency = 314,
    /// Delay before the first output line, in seconds.
    OutputDelay = 315,
    /// Branching rule selector (0..3).
    BranchRule = 316,
    /// Backtracking rule selector (0..3).
    BacktrackRule = 317,
    /// Integer feasibility tolerance.
    IntegerTolerance = 318,
    /// Objective comparison tolerance.
    ObjectiveTolerance = 319,
    /// Write comment cards into MPS output.
    MpsInfo = 320,
    /// Objective row handling in MPS output.
    MpsObjective = 321,
    /// Use original symbolic names in MPS output.
    MpsOriginalNames = 322,
    /// Use all data fields in MPS output.
    MpsWide = 323,
    /// Omit column and vector names in MPS output.
    MpsFree = 324,
    /// Skip empty columns in MPS output.
    MpsSkip = 325,
    /// Use original symbolic names in LP-format output.
    LpOriginalNames = 326,
    /// Presolver toggle for the simplex driver.
    Presolve = 327,
    /// Binarization toggle for branch-and-bound.
    Binarize = 328,
    /// Cut-type bitmask, see the `CUT_*` flags.
    CutMask = 329,
    /// Basis factorization technique (read-only, engine-backed).
    FactorizationKind = 330,
    /// Relative MIP gap tolerance.
    MipGap = 331,
}

impl ParamId {
    /// Resolve a raw legacy id.
    ///
    /// # Errors
    ///
    /// Any id outside the documented enumeration is a caller programming
    /// error and yields [`CompatError::UnknownParameter`].
    pub fn from_raw(raw: i32) -> Result<Self, CompatError> {
        match raw {
            300 => Ok(ParamId::MessageLevel),
            301 => Ok(ParamId::Scaling),
            302 => Ok(ParamId::Method),
            303 => Ok(ParamId::Pricing),
            304 => Ok(ParamId::RelaxFactor),
            305 => Ok(ParamId::BoundTolerance),
            306 => Ok(ParamId::ReducedCostTolerance),
            307 => Ok(ParamId::PivotTolerance),
            308 => Ok(ParamId::Rounding),
            309 => Ok(ParamId::ObjectiveLowerLimit),
            310 => Ok(ParamId::ObjectiveUpperLimit),
            311 => Ok(ParamId::IterationLimit),
            312 => Ok(ParamId::IterationCount),
            313 => Ok(ParamId::TimeLimit),
            314 => Ok(ParamId::OutputFrequency),
            315 => Ok(ParamId::OutputDelay),
            316 => Ok(ParamId::BranchRule),
            317 => Ok(ParamId::BacktrackRule),
            318 => Ok(ParamId::IntegerTolerance),
            319 => Ok(ParamId::ObjectiveTolerance),
            320 => Ok(ParamId::MpsInfo),
            321 => Ok(ParamId::MpsObjective),
            322 => Ok(ParamId::MpsOriginalNames),
            323 => Ok(ParamId::MpsWide),
            324 => Ok(ParamId::MpsFree),
            325 => Ok(ParamId::MpsSkip),
            326 => Ok(ParamId::LpOriginalNames),
            327 => Ok(ParamId::Presolve),
            328 => Ok(ParamId::Binarize),
            329 => Ok(ParamId::CutMask),
            330 => Ok(ParamId::FactorizationKind),
            331 => Ok(ParamId::MipGap),
            other => Err(CompatError::UnknownParameter(other)),
        }
    }

    /// The raw legacy id.
    pub fn raw(self) -> i32 {
        self as i32
    }

    /// Kind of value this parameter stores.
    pub fn kind(self) -> ParamKind {
        match self {
            ParamId::RelaxFactor
            | ParamId::BoundTolerance
            | ParamId::ReducedCostTolerance
            | ParamId::PivotTolerance
            | ParamId::ObjectiveLowerLimit
            | ParamId::ObjectiveUpperLimit
            | ParamId::TimeLimit
            | ParamId::OutputDelay
            | ParamId::IntegerTolerance
            | ParamId::ObjectiveTolerance
            | ParamId::MipGap => ParamKind::Real,
            _ => ParamKind::Integer,
        }
    }

    /// Whether the parameter can only be read.
    pub fn is_read_only(self) -> bool {
        matches!(self, ParamId::IterationCount | ParamId::FactorizationKind)
    }

    /// Field name of the parameter.
    pub fn name(self) -> &'static str {
        match self {
            ParamId::MessageLevel => "message_level",
            ParamId::Scaling => "scaling",
            ParamId::Method => "method",
            ParamId::Pricing => "pricing",
            ParamId::RelaxFactor => "relax_factor",
            ParamId::BoundTolerance => "bound_tolerance",
            ParamId::ReducedCostTolerance => "reduced_cost_tolerance",
            ParamId::PivotTolerance => "pivot_tolerance",
            ParamId::Rounding => "rounding",
            ParamId::ObjectiveLowerLimit => "objective_lower_limit",
            ParamId::ObjectiveUpperLimit => "objective_upper_limit",
            ParamId::IterationLimit => "iteration_limit",
            ParamId::IterationCount => "iteration_count",
            ParamId::TimeLimit => "time_limit",
            ParamId::OutputFrequency => "output_frequency",
            ParamId::OutputDelay => "output_delay",
            ParamId::BranchRule => "branch_rule",
            ParamId::BacktrackRule => "backtrack_rule",
            ParamId::IntegerTolerance => "integer_tolerance",
            ParamId::ObjectiveTolerance => "objective_tolerance",
            ParamId::MpsInfo => "mps_info",
            ParamId::MpsObjective => "mps_objective",
            ParamId::MpsOriginalNames => "mps_original_names",
            ParamId::MpsWide => "mps_wide",
            ParamId::MpsFree => "mps_free",
            ParamId::MpsSkip => "mps_skip",
            ParamId::LpOriginalNames => "lp_original_names",
            ParamId::Presolve => "presolve",
            ParamId::Binarize => "binarize",
            ParamId::CutMask => "cut_mask",
            ParamId::FactorizationKind => "factorization_kind",
            ParamId::MipGap => "mip_gap",
        }
    }

    /// All documented ids, in raw-id order.
    pub fn all() -> &'static [ParamId] {
        &[
            ParamId::MessageLevel,
            ParamId::Scaling,
            ParamId::Method,
            ParamId::Pricing,
            ParamId::RelaxFactor,
            ParamId::BoundTolerance,
            ParamId::ReducedCostTolerance,
            ParamId::PivotTolerance,
            ParamId::Rounding,
            ParamId::ObjectiveLowerLimit,
            ParamId::ObjectiveUpperLimit,
            ParamId::IterationLimit,
            ParamId::IterationCount,
            ParamId::TimeLimit,
            ParamId::OutputFrequency,
            ParamId::OutputDelay,
            ParamId::BranchRule,
            ParamId::BacktrackRule,
            ParamId::IntegerTolerance,
            ParamId::ObjectiveTolerance,
            ParamId::MpsInfo,
            ParamId::MpsObjective,
            ParamId::MpsOriginalNames,
            ParamId::MpsWide,
            ParamId::MpsFree,
            ParamId::MpsSkip,
            ParamId::LpOriginalNames,
            ParamId::Presolve,
            ParamId::Binarize,
            ParamId::CutMask,
            ParamId::FactorizationKind,
            ParamId::MipGap,
        ]
    }
}

/// The control parameter record of one problem instance.
///
/// Fields mirror the flat legacy surface one-to-one. Construction always
/// yields the fully defaulted record; there is no partially initialized
/// state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlParams {
    /// Terminal output level (0..3).
    pub message_level: i32,
    /// Automatic scaling toggle.
    pub scaling: i32,
    /// Solving method selector: 0 primal, 1 dual.
    pub method: i32,
    /// Pricing selector: 0 standard, 1 steepest-edge.
    pub pricing: i32,
    /// Harris ratio-test relaxation factor.
    pub relax_factor: f64,
    /// Primal feasibility tolerance.
    pub bound_tolerance: f64,
    /// Dual feasibility (reduced cost) tolerance.
    pub reduced_cost_tolerance: f64,
    /// Pivot element tolerance.
    pub pivot_tolerance: f64,
    /// Round computed values near zero in solution reports.
    pub rounding: i32,
    /// Objective lower limit.
    pub objective_lower_limit: f64,
    /// Objective upper limit.
    pub objective_upper_limit: f64,
    /// Simplex iteration limit; negative means unbounded.
    pub iteration_limit: i32,
    /// Time limit in seconds; negative means unbounded.
    pub time_limit: f64,
    /// Output frequency in iterations.
    pub output_frequency: i32,
    /// Delay before the first output line, in seconds.
    pub output_delay: f64,
    /// Branching rule selector (0..3).
    pub branch_rule: i32,
    /// Backtracking rule selector (0..3).
    pub backtrack_rule: i32,
    /// Integer feasibility tolerance.
    pub integer_tolerance: f64,
    /// Objective comparison tolerance.
    pub objective_tolerance: f64,
    /// Write comment cards into MPS output.
    pub mps_info: i32,
    /// Objective row handling in MPS output.
    pub mps_objective: i32,
    /// Use original symbolic names in MPS output.
    pub mps_original_names: i32,
    /// Use all data fields in MPS output.
    pub mps_wide: i32,
    /// Omit column and vector names in MPS output.
    pub mps_free: i32,
    /// Skip empty columns in MPS output.
    pub mps_skip: i32,
    /// Use original symbolic names in LP-format output.
    pub lp_original_names: i32,
    /// Presolver toggle for the simplex driver.
    pub presolve: i32,
    /// Binarization toggle for branch-and-bound.
    pub binarize: i32,
    /// Cut-type bitmask.
    pub cut_mask: i32,
    /// Relative MIP gap tolerance.
    pub mip_gap: f64,
}

impl ControlParams {
    /// Create a record holding the documented defaults.
    pub fn new() -> Self {
        ControlParams {
            message_level: 3,
            scaling: 1,
            method: 0,
            pricing: 1,
            relax_factor: 0.07,
            bound_tolerance: 1e-7,
            reduced_cost_tolerance: 1e-7,
            pivot_tolerance: 1e-9,
            rounding: 0,
            objective_lower_limit: f64::MIN,
            objective_upper_limit: f64::MAX,
            iteration_limit: -1,
            time_limit: -1.0,
            output_frequency: 200,
            output_delay: 0.0,
            branch_rule: 2,
            backtrack_rule: 3,
            integer_tolerance: 1e-5,
            objective_tolerance: 1e-7,
            mps_info: 1,
            mps_objective: 2,
            mps_original_names: 0,
            mps_wide: 1,
            mps_free: 0,
            mps_skip: 0,
            lp_original_names: 0,
            presolve: 0,
            binarize: 0,
            cut_mask: 0,
            mip_gap: 0.0,
        }
    }

    /// Restore every field to its documented default.
    pub fn reset(&mut self) {
        *self = ControlParams::new();
    }
}

impl Default for ControlParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_table() {
        let params = ControlParams::new();
        assert_eq!(params.message_level, 3);
        assert_eq!(params.scaling, 1);
        assert_eq!(params.method, 0);
        assert_eq!(params.pricing, 1);
        assert_eq!(params.relax_factor, 0.07);
        assert_eq!(params.bound_tolerance, 1e-7);
        assert_eq!(params.reduced_cost_tolerance, 1e-7);
        assert_eq!(params.pivot_tolerance, 1e-9);
        assert_eq!(params.rounding, 0);
        assert_eq!(params.objective_lower_limit, f64::MIN);
        assert_eq!(params.objective_upper_limit, f64::MAX);
        assert_eq!(params.iteration_limit, -1);
        assert_eq!(params.time_limit, -1.0);
        assert_eq!(params.output_frequency, 200);
        assert_eq!(params.output_delay, 0.0);
        assert_eq!(params.branch_rule, 2);
        assert_eq!(params.backtrack_rule, 3);
        assert_eq!(params.integer_tolerance, 1e-5);
        assert_eq!(params.objective_tolerance, 1e-7);
        assert_eq!(params.mps_info, 1);
        assert_eq!(params.mps_objective, 2);
        assert_eq!(params.mps_original_names, 0);
        assert_eq!(params.mps_wide, 1);
        assert_eq!(params.mps_free, 0);
        assert_eq!(params.mps_skip, 0);
        assert_eq!(params.lp_original_names, 0);
        assert_eq!(params.presolve, 0);
        assert_eq!(params.binarize, 0);
        assert_eq!(params.cut_mask, 0);
        assert_eq!(params.mip_gap, 0.0);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut params = ControlParams::new();
        params.message_level = 0;
        params.relax_factor = 0.0;
        params.cut_mask = CUT_ALL;
        params.reset();
        assert_eq!(params, ControlParams::new());
    }

    #[test]
    fn test_raw_id_round_trip() {
        for &id in ParamId::all() {
            let resolved = ParamId::from_raw(id.raw()).unwrap();
            assert_eq!(resolved, id);
        }
    }

    #[test]
    fn test_raw_ids_are_contiguous() {
        let all = ParamId::all();
        assert_eq!(all.len(), 32);
        assert_eq!(all[0].raw(), 300);
        assert_eq!(all[all.len() - 1].raw(), 331);
        for pair in all.windows(2) {
            assert_eq!(pair[1].raw(), pair[0].raw() + 1);
        }
    }

    #[test]
    fn test_from_raw_rejects_unknown_ids() {
        for raw in [-1, 0, 299, 332, 1000] {
            assert_eq!(
                ParamId::from_raw(raw),
                Err(CompatError::UnknownParameter(raw))
            );
        }
    }

    #[test]
    fn test_param_kinds() {
        assert_eq!(ParamId::MessageLevel.kind(), ParamKind::Integer);
        assert_eq!(ParamId::RelaxFactor.kind(), ParamKind::Real);
        assert_eq!(ParamId::TimeLimit.kind(), ParamKind::Real);
        assert_eq!(ParamId::OutputDelay.kind(), ParamKind::Real);
        assert_eq!(ParamId::IterationLimit.kind(), ParamKind::Integer);
        assert_eq!(ParamId::CutMask.kind(), ParamKind::Integer);
        assert_eq!(ParamId::MipGap.kind(), ParamKind::Real);
    }

    #[test]
    fn test_read_only_ids() {
        assert!(ParamId::IterationCount.is_read_only());
        assert!(ParamId::FactorizationKind.is_read_only());
        assert!(!ParamId::IterationLimit.is_read_only());
        assert!(!ParamId::CutMask.is_read_only());
    }

    #[test]
    fn test_cut_flags_are_disjoint() {
        let flags = [CUT_COVER, CUT_CLIQUE, CUT_GOMORY, CUT_MIR];
        for (i, a) in flags.iter().enumerate() {
            for b in &flags[i + 1..] {
                assert_eq!(a & b, 0);
            }
        }
        assert_eq!(CUT_ALL, 0x0f);
    }

    #[test]
    fn test_param_value_kind() {
        assert_eq!(ParamValue::Int(3).kind(), ParamKind::Integer);
        assert_eq!(ParamValue::Real(0.07).kind(), ParamKind::Real);
        assert_eq!(ParamValue::Int(3).as_int(), Some(3));
        assert_eq!(ParamValue::Int(3).as_real(), None);
        assert_eq!(ParamValue::Real(0.07).as_real(), Some(0.07));
        assert_eq!(ParamValue::Real(0.07).as_int(), None);
    }
}
