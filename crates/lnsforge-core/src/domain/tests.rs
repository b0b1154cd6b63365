//! Tests for domain traits and stored solutions.

use super::*;
use crate::error::Contradiction;

/// Bounds-only model: each variable is an interval `[lb, ub]`.
struct Bounds(Vec<(i32, i32)>);

impl IntVariables for Bounds {
    fn lower_bound(&self, var: VarId) -> i32 {
        self.0[var.index()].0
    }

    fn upper_bound(&self, var: VarId) -> i32 {
        self.0[var.index()].1
    }

    fn contains(&self, var: VarId, value: i32) -> bool {
        let (lb, ub) = self.0[var.index()];
        lb <= value && value <= ub
    }

    fn instantiate_to(&mut self, var: VarId, value: i32) -> Result<(), Contradiction> {
        if !self.contains(var, value) {
            return Err(Contradiction::new(var, value));
        }
        self.0[var.index()] = (value, value);
        Ok(())
    }
}

#[test]
fn test_value_requires_instantiation() {
    let mut model = Bounds(vec![(0, 3), (2, 2)]);
    assert_eq!(model.value(VarId(0)), None);
    assert_eq!(model.value(VarId(1)), Some(2));

    model.instantiate_to(VarId(0), 1).unwrap();
    assert!(model.is_instantiated(VarId(0)));
    assert_eq!(model.value(VarId(0)), Some(1));
}

#[test]
fn test_instantiate_outside_domain() {
    let mut model = Bounds(vec![(0, 3)]);
    let err = model.instantiate_to(VarId(0), 5).unwrap_err();
    assert_eq!(err, Contradiction::new(VarId(0), 5));
    assert_eq!(model.value(VarId(0)), None);
}

#[test]
fn test_record_skips_free_variables() {
    let model = Bounds(vec![(4, 4), (0, 9), (1, 1)]);
    let vars = [VarId(0), VarId(1), VarId(2)];
    let solution = StoredSolution::record(&model, &vars);

    assert_eq!(solution.len(), 2);
    assert_eq!(solution.int_val(VarId(0)), Some(4));
    assert_eq!(solution.int_val(VarId(1)), None);
    assert_eq!(solution.int_val(VarId(2)), Some(1));
}

#[test]
fn test_stored_solution_builder() {
    let solution = StoredSolution::new().with(VarId(3), 7).with(VarId(3), 8);
    assert_eq!(solution.len(), 1);
    assert_eq!(solution.int_val(VarId(3)), Some(8));

    let collected: StoredSolution = [(VarId(0), 1), (VarId(1), 2)].into_iter().collect();
    assert_eq!(collected.int_val(VarId(1)), Some(2));
}

#[test]
fn test_var_id_display() {
    assert_eq!(VarId(12).to_string(), "x12");
    assert_eq!(VarId::from(5).index(), 5);
}
