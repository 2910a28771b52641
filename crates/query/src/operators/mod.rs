//! Built-in filter operator library.
//!
//! The operator set is closed: a clause names one of the variants of
//! [`FilterOperator`] by its string name, and dispatch is a single match.
//! Unknown names surface as `None` from [`FilterOperator::from_name`] and
//! become no-op clauses in the filter evaluator rather than errors.
//!
//! Every operator treats a missing cell value specially; see the
//! per-operator predicates. The predicates are public so operator
//! semantics can be unit tested directly.

pub mod comparison;
pub mod container;
pub mod string;

pub use comparison::{op_between, op_eq, op_ne, op_relational, Relation};
pub use container::op_in;
pub use string::{op_contains, op_ends_with, op_starts_with};

use serde_json::Value;

/// The fixed set of filter operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Contains,
    StartsWith,
    EndsWith,
    In,
    Between,
}

impl FilterOperator {
    /// Look up an operator by its clause name. Unknown names are `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "eq" => Some(Self::Eq),
            "ne" => Some(Self::Ne),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            "gt" => Some(Self::Gt),
            "gte" => Some(Self::Gte),
            "contains" => Some(Self::Contains),
            "startsWith" => Some(Self::StartsWith),
            "endsWith" => Some(Self::EndsWith),
            "in" => Some(Self::In),
            "between" => Some(Self::Between),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Contains => "contains",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::In => "in",
            Self::Between => "between",
        }
    }

    /// Evaluate the operator against a resolved cell value and a clause
    /// value. `case_sensitive` only affects the substring operators.
    pub fn evaluate(
        &self,
        cell: Option<&Value>,
        clause_value: &Value,
        case_sensitive: bool,
    ) -> bool {
        match self {
            Self::Eq => op_eq(cell, clause_value),
            Self::Ne => op_ne(cell, clause_value),
            Self::Lt => op_relational(cell, clause_value, Relation::Lt),
            Self::Lte => op_relational(cell, clause_value, Relation::Lte),
            Self::Gt => op_relational(cell, clause_value, Relation::Gt),
            Self::Gte => op_relational(cell, clause_value, Relation::Gte),
            Self::Contains => op_contains(cell, clause_value, case_sensitive),
            Self::StartsWith => op_starts_with(cell, clause_value, case_sensitive),
            Self::EndsWith => op_ends_with(cell, clause_value, case_sensitive),
            Self::In => op_in(cell, clause_value),
            Self::Between => op_between(cell, clause_value),
        }
    }
}
