pub mod catalog;

pub use catalog::{lookup, GoalTemplate};
