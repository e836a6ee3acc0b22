pub mod html;
pub mod persist;
pub mod types;

pub use html::{escape, render, render_at};
pub use persist::{LATEST_REPORT_NAME, persist};
pub use types::{RunResult, Step, StepKind};
