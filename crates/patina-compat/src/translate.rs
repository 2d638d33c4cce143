//! Translation of the legacy parameter record into engine option blocks.
//!
//! These are pure functions over [`ControlParams`]; nothing here touches the
//! engine. A stored enumeration value outside its documented range is an
//! invariant violation and surfaces as an error, never as a silent default.

use patina_engine::{
    BacktrackTechnique, BranchBoundOptions, BranchTechnique, MessageLevel, PricingRule, RatioTest,
    SimplexMethod, SimplexOptions,
};

use crate::error::CompatError;
use crate::params::{
    ControlParams, ParamId, CUT_CLIQUE, CUT_COVER, CUT_GOMORY, CUT_MIR,
};

/// Upper bound, in seconds, beyond which a branch-and-bound time limit is
/// treated as unbounded so the milliseconds scaling cannot overflow.
const TIME_LIMIT_CEILING_SECONDS: f64 = 1e6;

/// Build the simplex option block from the stored record.
///
/// # Errors
///
/// Returns [`CompatError::ValueOutOfRange`] when a stored selector is
/// outside its documented enumeration.
pub fn simplex_options(params: &ControlParams) -> Result<SimplexOptions, CompatError> {
    let message_level = message_level(params.message_level)?;
    let method = match params.method {
        0 => SimplexMethod::Primal,
        1 => SimplexMethod::Dual,
        value => {
            return Err(CompatError::ValueOutOfRange {
                id: ParamId::Method,
                value,
            })
        }
    };
    let pricing = match params.pricing {
        0 => PricingRule::Standard,
        1 => PricingRule::SteepestEdge,
        value => {
            return Err(CompatError::ValueOutOfRange {
                id: ParamId::Pricing,
                value,
            })
        }
    };
    // The ratio test is derived, not stored: a relaxation factor of exactly
    // zero selects the textbook test.
    let ratio_test = if params.relax_factor == 0.0 {
        RatioTest::Standard
    } else {
        RatioTest::Harris
    };
    let presolve = match params.presolve {
        0 => false,
        1 => true,
        value => {
            return Err(CompatError::ValueOutOfRange {
                id: ParamId::Presolve,
                value,
            })
        }
    };

    Ok(SimplexOptions {
        message_level,
        method,
        pricing,
        ratio_test,
        bound_tolerance: params.bound_tolerance,
        reduced_cost_tolerance: params.reduced_cost_tolerance,
        pivot_tolerance: params.pivot_tolerance,
        objective_lower_limit: params.objective_lower_limit,
        objective_upper_limit: params.objective_upper_limit,
        iteration_limit: iteration_limit(params.iteration_limit),
        time_limit_ms: simplex_time_limit_ms(params.time_limit),
        output_frequency: params.output_frequency,
        output_delay_ms: to_milliseconds(params.output_delay),
        presolve,
    })
}

/// Build the branch-and-bound option block from the stored record.
///
/// The presolve flag is an explicit argument rather than a stored field:
/// branch-and-bound callers may force presolve regardless of the record.
///
/// # Errors
///
/// Returns [`CompatError::ValueOutOfRange`] when a stored selector is
/// outside its documented enumeration.
pub fn branch_bound_options(
    params: &ControlParams,
    presolve: bool,
) -> Result<BranchBoundOptions, CompatError> {
    let message_level = message_level(params.message_level)?;
    let branching = match params.branch_rule {
        0 => BranchTechnique::FirstFractional,
        1 => BranchTechnique::LastFractional,
        2 => BranchTechnique::DriebeckTomlin,
        3 => BranchTechnique::MostFractional,
        value => {
            return Err(CompatError::ValueOutOfRange {
                id: ParamId::BranchRule,
                value,
            })
        }
    };
    let backtracking = match params.backtrack_rule {
        0 => BacktrackTechnique::DepthFirst,
        1 => BacktrackTechnique::BreadthFirst,
        2 => BacktrackTechnique::BestProjection,
        3 => BacktrackTechnique::BestLocalBound,
        value => {
            return Err(CompatError::ValueOutOfRange {
                id: ParamId::BacktrackRule,
                value,
            })
        }
    };

    Ok(BranchBoundOptions {
        message_level,
        branching,
        backtracking,
        integer_tolerance: params.integer_tolerance,
        objective_tolerance: params.objective_tolerance,
        time_limit_ms: search_time_limit_ms(params.time_limit),
        mip_gap: params.mip_gap,
        gomory_cuts: params.cut_mask & CUT_GOMORY != 0,
        mir_cuts: params.cut_mask & CUT_MIR != 0,
        cover_cuts: params.cut_mask & CUT_COVER != 0,
        clique_cuts: params.cut_mask & CUT_CLIQUE != 0,
        presolve,
        binarize: params.binarize != 0,
    })
}

fn message_level(raw: i32) -> Result<MessageLevel, CompatError> {
    match raw {
        0 => Ok(MessageLevel::Off),
        1 => Ok(MessageLevel::ErrorsOnly),
        2 => Ok(MessageLevel::Normal),
        3 => Ok(MessageLevel::All),
        value => Err(CompatError::ValueOutOfRange {
            id: ParamId::MessageLevel,
            value,
        }),
    }
}

/// A negative stored iteration limit means unbounded; the engine has no
/// sentinel for that, so it becomes the representable maximum.
pub(crate) fn iteration_limit(stored: i32) -> i32 {
    if stored < 0 {
        i32::MAX
    } else {
        stored
    }
}

/// Seconds-to-milliseconds conversion for the simplex drivers. Negative
/// means unbounded.
pub(crate) fn simplex_time_limit_ms(seconds: f64) -> i32 {
    if seconds < 0.0 {
        i32::MAX
    } else {
        to_milliseconds(seconds)
    }
}

/// Seconds-to-milliseconds conversion for the branch-and-bound driver.
/// Negative means unbounded, as does anything above the scaling ceiling.
pub(crate) fn search_time_limit_ms(seconds: f64) -> i32 {
    if seconds < 0.0 || seconds > TIME_LIMIT_CEILING_SECONDS {
        i32::MAX
    } else {
        to_milliseconds(seconds)
    }
}

fn to_milliseconds(seconds: f64) -> i32 {
    (1000.0 * seconds) as i32
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::params::CUT_ALL;

    #[test]
    fn test_defaults_translate_to_simplex_options() {
        let params = ControlParams::new();
        let options = simplex_options(&params).unwrap();
        assert_eq!(options.message_level, MessageLevel::All);
        assert_eq!(options.method, SimplexMethod::Primal);
        assert_eq!(options.pricing, PricingRule::SteepestEdge);
        assert_eq!(options.ratio_test, RatioTest::Harris);
        assert_eq!(options.bound_tolerance, 1e-7);
        assert_eq!(options.reduced_cost_tolerance, 1e-7);
        assert_eq!(options.pivot_tolerance, 1e-9);
        assert_eq!(options.iteration_limit, i32::MAX);
        assert_eq!(options.time_limit_ms, i32::MAX);
        assert_eq!(options.output_frequency, 200);
        assert_eq!(options.output_delay_ms, 0);
        assert!(!options.presolve);
    }

    #[test]
    fn test_message_levels_map_bijectively() {
        let mut params = ControlParams::new();
        let expected = [
            MessageLevel::Off,
            MessageLevel::ErrorsOnly,
            MessageLevel::Normal,
            MessageLevel::All,
        ];
        for (raw, level) in expected.iter().enumerate() {
            params.message_level = raw as i32;
            assert_eq!(simplex_options(&params).unwrap().message_level, *level);
        }
    }

    #[test]
    fn test_message_level_out_of_range_is_fatal() {
        let mut params = ControlParams::new();
        params.message_level = 4;
        assert_eq!(
            simplex_options(&params),
            Err(CompatError::ValueOutOfRange {
                id: ParamId::MessageLevel,
                value: 4,
            })
        );
    }

    #[test]
    fn test_method_and_pricing_selectors() {
        let mut params = ControlParams::new();
        params.method = 1;
        params.pricing = 0;
        let options = simplex_options(&params).unwrap();
        assert_eq!(options.method, SimplexMethod::Dual);
        assert_eq!(options.pricing, PricingRule::Standard);

        params.method = 2;
        assert!(simplex_options(&params).is_err());
        params.method = 0;
        params.pricing = -1;
        assert!(simplex_options(&params).is_err());
    }

    #[test]
    fn test_ratio_test_derived_from_relax_factor() {
        let mut params = ControlParams::new();
        params.relax_factor = 0.0;
        assert_eq!(
            simplex_options(&params).unwrap().ratio_test,
            RatioTest::Standard
        );
        params.relax_factor = 0.07;
        assert_eq!(
            simplex_options(&params).unwrap().ratio_test,
            RatioTest::Harris
        );
    }

    #[test]
    fn test_iteration_limit_sentinel() {
        assert_eq!(iteration_limit(-1), i32::MAX);
        assert_eq!(iteration_limit(-100), i32::MAX);
        assert_eq!(iteration_limit(0), 0);
        assert_eq!(iteration_limit(5000), 5000);
    }

    #[test]
    fn test_simplex_time_limit_scaling() {
        assert_eq!(simplex_time_limit_ms(-5.0), i32::MAX);
        assert_eq!(simplex_time_limit_ms(-0.001), i32::MAX);
        assert_eq!(simplex_time_limit_ms(0.0), 0);
        assert_eq!(simplex_time_limit_ms(120.5), 120_500);
        // Truncation, not rounding.
        assert_eq!(simplex_time_limit_ms(0.0019), 1);
    }

    #[test]
    fn test_search_time_limit_overflow_guard() {
        assert_eq!(search_time_limit_ms(-5.0), i32::MAX);
        assert_eq!(search_time_limit_ms(120.5), 120_500);
        assert_eq!(search_time_limit_ms(1e6), 1_000_000_000);
        assert_eq!(search_time_limit_ms(1e6 + 1.0), i32::MAX);
        assert_eq!(search_time_limit_ms(2e6), i32::MAX);
    }

    #[test]
    fn test_output_delay_always_scaled() {
        let mut params = ControlParams::new();
        params.output_delay = 1.5;
        assert_eq!(simplex_options(&params).unwrap().output_delay_ms, 1500);
    }

    #[test]
    fn test_presolve_selector() {
        let mut params = ControlParams::new();
        params.presolve = 1;
        assert!(simplex_options(&params).unwrap().presolve);
        params.presolve = 2;
        assert_eq!(
            simplex_options(&params),
            Err(CompatError::ValueOutOfRange {
                id: ParamId::Presolve,
                value: 2,
            })
        );
    }

    #[test]
    fn test_defaults_translate_to_branch_bound_options() {
        let params = ControlParams::new();
        let options = branch_bound_options(&params, true).unwrap();
        assert_eq!(options.message_level, MessageLevel::All);
        assert_eq!(options.branching, BranchTechnique::DriebeckTomlin);
        assert_eq!(options.backtracking, BacktrackTechnique::BestLocalBound);
        assert_eq!(options.integer_tolerance, 1e-5);
        assert_eq!(options.objective_tolerance, 1e-7);
        assert_eq!(options.time_limit_ms, i32::MAX);
        assert_eq!(options.mip_gap, 0.0);
        assert!(options.presolve);
        assert!(!options.binarize);
        assert!(!options.gomory_cuts);
        assert!(!options.mir_cuts);
        assert!(!options.cover_cuts);
        assert!(!options.clique_cuts);
    }

    #[test]
    fn test_branch_rules_map_bijectively() {
        let mut params = ControlParams::new();
        let expected = [
            BranchTechnique::FirstFractional,
            BranchTechnique::LastFractional,
            BranchTechnique::DriebeckTomlin,
            BranchTechnique::MostFractional,
        ];
        for (raw, technique) in expected.iter().enumerate() {
            params.branch_rule = raw as i32;
            assert_eq!(
                branch_bound_options(&params, false).unwrap().branching,
                *technique
            );
        }
        params.branch_rule = 4;
        assert_eq!(
            branch_bound_options(&params, false),
            Err(CompatError::ValueOutOfRange {
                id: ParamId::BranchRule,
                value: 4,
            })
        );
    }

    #[test]
    fn test_backtrack_rules_map_bijectively() {
        let mut params = ControlParams::new();
        let expected = [
            BacktrackTechnique::DepthFirst,
            BacktrackTechnique::BreadthFirst,
            BacktrackTechnique::BestProjection,
            BacktrackTechnique::BestLocalBound,
        ];
        for (raw, technique) in expected.iter().enumerate() {
            params.backtrack_rule = raw as i32;
            assert_eq!(
                branch_bound_options(&params, false).unwrap().backtracking,
                *technique
            );
        }
        params.backtrack_rule = -1;
        assert_eq!(
            branch_bound_options(&params, false),
            Err(CompatError::ValueOutOfRange {
                id: ParamId::BacktrackRule,
                value: -1,
            })
        );
    }

    #[test]
    fn test_cut_mask_bits_are_independent() {
        let mut params = ControlParams::new();
        params.cut_mask = CUT_GOMORY | CUT_COVER;
        let options = branch_bound_options(&params, false).unwrap();
        assert!(options.gomory_cuts);
        assert!(!options.mir_cuts);
        assert!(options.cover_cuts);
        assert!(!options.clique_cuts);

        params.cut_mask = CUT_ALL;
        let options = branch_bound_options(&params, false).unwrap();
        assert!(
            options.gomory_cuts && options.mir_cuts && options.cover_cuts && options.clique_cuts
        );
    }

    #[test]
    fn test_binarize_enabled_by_any_nonzero_value() {
        let mut params = ControlParams::new();
        params.binarize = 1;
        assert!(branch_bound_options(&params, false).unwrap().binarize);
        params.binarize = 7;
        assert!(branch_bound_options(&params, false).unwrap().binarize);
        params.binarize = 0;
        assert!(!branch_bound_options(&params, false).unwrap().binarize);
    }

    #[test]
    fn test_branch_bound_presolve_comes_from_caller() {
        let mut params = ControlParams::new();
        params.presolve = 0;
        assert!(branch_bound_options(&params, true).unwrap().presolve);
        params.presolve = 1;
        assert!(!branch_bound_options(&params, false).unwrap().presolve);
    }
}
