//! Comparison expressions and version ranges

mod comparison;
mod operator;
mod range;

pub use comparison::ComparisonExpression;
pub use operator::Operator;
pub use range::VersionRange;
