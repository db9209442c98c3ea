use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::error::EvalError;
use crate::parser::Formula;

/// Total mapping from variable names to truth values.
pub type Assignment = FxHashMap<String, bool>;

impl Formula {
    /// Evaluates the formula under `assignment`.
    ///
    /// Both operands of a binary connective are always evaluated, so an unbound variable
    /// is reported no matter where it occurs.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        match self {
            Self::Var(name) => assignment
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
            Self::Not(inner) => Ok(!inner.eval(assignment)?),
            Self::And(l, r) => {
                let (l, r) = (l.eval(assignment)?, r.eval(assignment)?);
                Ok(l & r)
            }
            Self::Or(l, r) => {
                let (l, r) = (l.eval(assignment)?, r.eval(assignment)?);
                Ok(l | r)
            }
            Self::Implies(l, r) => {
                let (l, r) = (l.eval(assignment)?, r.eval(assignment)?);
                Ok(!l | r)
            }
            Self::Iff(l, r) => {
                let (l, r) = (l.eval(assignment)?, r.eval(assignment)?);
                Ok(l == r)
            }
        }
    }

    /// Distinct variables in the order of a left-to-right pre-order walk.
    pub fn variables(&self) -> Vec<String> {
        let mut found = Vec::new();
        self.collect_variables(&mut found);

        found.into_iter().unique().cloned().collect()
    }

    /// Distinct variables in lexicographic order; this is the column order of a truth table.
    pub fn sorted_variables(&self) -> Vec<String> {
        let mut vars = self.variables();
        vars.sort();
        vars
    }

    fn collect_variables<'a>(&'a self, found: &mut Vec<&'a String>) {
        match self {
            Self::Var(name) => found.push(name),
            Self::Not(inner) => inner.collect_variables(found),
            Self::And(l, r) | Self::Or(l, r) | Self::Implies(l, r) | Self::Iff(l, r) => {
                l.collect_variables(found);
                r.collect_variables(found);
            }
        }
    }
}
