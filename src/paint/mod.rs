pub mod driver;
pub mod exec;
pub mod output;
pub mod plan;

pub use driver::{paint_history, PaintJob};
pub use exec::exec;
pub use plan::Plan;
