pub mod deduction;
pub mod error;
pub mod oracle;
pub mod strategy;

pub use deduction::{BoardKnowledge, DeductionEngine, Outcome};
