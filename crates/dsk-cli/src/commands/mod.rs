pub mod analyze;
pub mod dispatch;
pub mod handoff;
pub mod palette;
pub mod prompt;
pub mod report;
pub mod shared;
