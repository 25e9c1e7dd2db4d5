pub mod order;
pub mod outcome;
