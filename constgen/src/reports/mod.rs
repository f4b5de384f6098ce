//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, ExistingType, TargetStatus};
pub use generate::{GenerateReport, TargetResult};
pub use output::{Report, TerminalOutput};
