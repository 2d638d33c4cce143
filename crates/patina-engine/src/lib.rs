//! Solver engine vocabulary for the patina compatibility layer.
//!
//! This crate defines the types the structured solver engine exposes to its
//! drivers: option blocks, outcome codes, solution-condition queries, basis
//! status values, and the [`EngineProblem`] trait that a concrete engine
//! backend implements per problem instance.
//!
//! # Overview
//!
//! - [`SimplexOptions`] / [`BranchBoundOptions`]: structured option blocks
//! - [`EngineCode`]: the engine's closed outcome vocabulary
//! - [`ConditionReport`]: result of a solution-condition query
//! - [`VarStatus`]: basis status of a row or column
//! - [`EngineProblem`]: the per-problem driver interface

mod basis;
mod codes;
mod conditions;
mod options;
mod problem;

pub use basis::{FactorizationKind, VarStatus};
pub use codes::EngineCode;
pub use conditions::{ConditionKind, ConditionReport, SolutionKind};
pub use options::{
    BacktrackTechnique, BranchBoundOptions, BranchTechnique, MessageLevel, PricingRule, RatioTest,
    SimplexMethod, SimplexOptions,
};
pub use problem::EngineProblem;
