pub mod orchestrator;
pub mod report;

pub use orchestrator::{BuildRequest, SetlistBuilder};
pub use report::{BuildReport, BuiltSet};
