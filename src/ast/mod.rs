pub mod builders;
pub mod expr;
pub mod operators;
pub mod values;

pub use self::expr::{Comparison, Expression, Logical};
pub use self::operators::LogicalOperator;
pub use self::values::Value;
