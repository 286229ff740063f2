//! Domain models for problint
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Issue`] - "this is wrong in that file, on that line"
//! - [`TestResult`] - How a rule run ended
//! - [`RuleOutcome`] - What a rule body reports back
//! - [`SharedData`] - The parsed documents every rule inspects
//! - [`Task`], [`Solution`], [`InputBundle`] - Items in those collections

mod issue;
mod item;
mod outcome;
mod shared_data;

pub use issue::Issue;
pub use item::{InputBundle, Item, Points, Solution, Task};
pub use outcome::{RuleOutcome, TestResult};
pub use shared_data::{DataKey, SharedData};
