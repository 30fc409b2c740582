//! Tool definitions module.
//!
//! Each tool is defined in its own file, grouped by server profile.

pub mod calculator;
pub mod common;
pub mod expenses;

pub use calculator::{AddTool, RandomNumberTool};
pub use expenses::{AddExpenseTool, EditExpenseTool, ListExpensesTool, SummarizeExpensesTool};
