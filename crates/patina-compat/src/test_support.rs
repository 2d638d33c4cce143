//! Scriptable engine fixture shared by unit tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use patina_engine::{
    BranchBoundOptions, ConditionKind, ConditionReport, EngineCode, EngineProblem,
    FactorizationKind, SimplexOptions, SolutionKind, VarStatus,
};

/// An engine whose answers are scripted by the test.
pub(crate) struct FixtureEngine {
    pub simplex_code: EngineCode,
    pub exact_code: EngineCode,
    pub interior_code: EngineCode,
    pub branch_code: EngineCode,
    pub last_simplex_options: Option<SimplexOptions>,
    pub last_branch_options: Option<BranchBoundOptions>,
    pub rows: usize,
    pub cols: usize,
    pub integer_cols: usize,
    pub iterations: i32,
    pub factorization: FactorizationKind,
    pub factorization_exists: bool,
    pub optimal_basis: bool,
    pub factorize_calls: usize,
    pub ray_index: usize,
    pub reports: Vec<((SolutionKind, ConditionKind), ConditionReport)>,
    pub row_names: BTreeMap<usize, String>,
    pub col_names: BTreeMap<usize, String>,
    pub row_statuses: Vec<(usize, VarStatus)>,
    pub col_statuses: Vec<(usize, VarStatus)>,
    pub writes: RefCell<Vec<&'static str>>,
}

impl FixtureEngine {
    pub fn new() -> Self {
        FixtureEngine {
            simplex_code: EngineCode::Success,
            exact_code: EngineCode::Success,
            interior_code: EngineCode::Success,
            branch_code: EngineCode::Success,
            last_simplex_options: None,
            last_branch_options: None,
            rows: 0,
            cols: 0,
            integer_cols: 0,
            iterations: 0,
            factorization: FactorizationKind::ForrestTomlin,
            factorization_exists: false,
            optimal_basis: false,
            factorize_calls: 0,
            ray_index: 0,
            reports: Vec::new(),
            row_names: BTreeMap::new(),
            col_names: BTreeMap::new(),
            row_statuses: Vec::new(),
            col_statuses: Vec::new(),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn script_report(
        &mut self,
        solution: SolutionKind,
        condition: ConditionKind,
        report: ConditionReport,
    ) {
        self.reports.push(((solution, condition), report));
    }

    fn record_write(&self, what: &'static str) -> io::Result<()> {
        self.writes.borrow_mut().push(what);
        Ok(())
    }
}

impl EngineProblem for FixtureEngine {
    fn run_simplex(&mut self, options: &SimplexOptions) -> EngineCode {
        self.last_simplex_options = Some(options.clone());
        self.simplex_code
    }

    fn run_exact_simplex(&mut self, options: &SimplexOptions) -> EngineCode {
        self.last_simplex_options = Some(options.clone());
        self.exact_code
    }

    fn run_interior_point(&mut self) -> EngineCode {
        self.interior_code
    }

    fn run_branch_and_bound(&mut self, options: &BranchBoundOptions) -> EngineCode {
        self.last_branch_options = Some(options.clone());
        self.branch_code
    }

    fn check_conditions(
        &self,
        solution: SolutionKind,
        condition: ConditionKind,
    ) -> ConditionReport {
        self.reports
            .iter()
            .find(|(key, _)| *key == (solution, condition))
            .map(|(_, report)| *report)
            .unwrap_or_default()
    }

    fn unbounded_ray_index(&self) -> usize {
        self.ray_index
    }

    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_cols(&self) -> usize {
        self.cols
    }

    fn num_integer_cols(&self) -> usize {
        self.integer_cols
    }

    fn row_name(&self, row: usize) -> Option<&str> {
        self.row_names.get(&row).map(String::as_str)
    }

    fn col_name(&self, col: usize) -> Option<&str> {
        self.col_names.get(&col).map(String::as_str)
    }

    fn set_row_name(&mut self, row: usize, name: &str) {
        self.row_names.insert(row, name.to_string());
    }

    fn set_col_name(&mut self, col: usize, name: &str) {
        self.col_names.insert(col, name.to_string());
    }

    fn set_row_status(&mut self, row: usize, status: VarStatus) {
        self.row_statuses.push((row, status));
    }

    fn set_col_status(&mut self, col: usize, status: VarStatus) {
        self.col_statuses.push((col, status));
    }

    fn iteration_count(&self) -> i32 {
        self.iterations
    }

    fn factorization_kind(&self) -> FactorizationKind {
        self.factorization
    }

    fn basis_factorization_exists(&self) -> bool {
        self.factorization_exists
    }

    fn factorize_basis(&mut self) {
        self.factorize_calls += 1;
        self.factorization_exists = true;
    }

    fn has_optimal_basis(&self) -> bool {
        self.optimal_basis
    }

    fn write_fixed_mps(&self, _path: &Path) -> io::Result<()> {
        self.record_write("fixed_mps")
    }

    fn write_free_mps(&self, _path: &Path) -> io::Result<()> {
        self.record_write("free_mps")
    }

    fn write_cplex_lp(&self, _path: &Path) -> io::Result<()> {
        self.record_write("cplex_lp")
    }

    fn write_plain_text(&self, _path: &Path) -> io::Result<()> {
        self.record_write("plain_text")
    }

    fn write_solution_report(&self, _path: &Path) -> io::Result<()> {
        self.record_write("solution_report")
    }

    fn write_interior_report(&self, _path: &Path) -> io::Result<()> {
        self.record_write("interior_report")
    }

    fn write_mip_report(&self, _path: &Path) -> io::Result<()> {
        self.record_write("mip_report")
    }

    fn write_ranges_report(&self, _path: &Path) -> io::Result<()> {
        self.record_write("ranges_report")
    }
}
