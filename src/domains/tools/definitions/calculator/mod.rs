//! Calculator tools: integer addition and random number generation.

pub mod add;
pub mod random_number;

pub use add::{AddParams, AddTool};
pub use random_number::{RandomNumberParams, RandomNumberTool};
