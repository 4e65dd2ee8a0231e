//! Subcommands of the pox-version binary.

pub mod compare;
pub mod parse;
pub mod satisfies;
pub mod sort;

pub use compare::CompareArgs;
pub use parse::ParseArgs;
pub use satisfies::SatisfiesArgs;
pub use sort::SortArgs;
