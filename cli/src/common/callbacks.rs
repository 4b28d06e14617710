//! The callbacks behind the named `--where`, `--with` and `--op` values.

use crate::cli::{Fold, Predicate, Transform};
use crate::common::{CliError, CliResult};

impl Predicate {
    pub fn test(self, value: i64) -> bool {
        match self {
            Predicate::Even => value % 2 == 0,
            Predicate::Odd => value % 2 != 0,
            Predicate::Positive => value > 0,
            Predicate::Negative => value < 0,
            Predicate::Zero => value == 0,
        }
    }
}

impl Transform {
    pub fn name(self) -> &'static str {
        match self {
            Transform::Double => "double",
            Transform::Square => "square",
            Transform::Negate => "negate",
            Transform::Abs => "abs",
        }
    }

    /// Apply the transform, failing on `i64` overflow.
    pub fn apply(self, value: i64) -> CliResult<i64> {
        let result = match self {
            Transform::Double => value.checked_mul(2),
            Transform::Square => value.checked_mul(value),
            Transform::Negate => value.checked_neg(),
            Transform::Abs => value.checked_abs(),
        };
        result.ok_or(CliError::Overflow {
            operation: self.name(),
        })
    }
}

impl Fold {
    pub fn name(self) -> &'static str {
        match self {
            Fold::Sum => "sum",
            Fold::Product => "product",
        }
    }

    pub fn identity(self) -> i64 {
        match self {
            Fold::Sum => 0,
            Fold::Product => 1,
        }
    }

    /// One fold step; `None` on overflow.
    pub fn step(self, acc: i64, value: i64) -> Option<i64> {
        match self {
            Fold::Sum => acc.checked_add(value),
            Fold::Product => acc.checked_mul(value),
        }
    }
}
