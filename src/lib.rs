pub mod cli;
pub mod error;
pub mod git;
pub mod glyph;
pub mod model;
pub mod paint;
pub mod pattern;
pub mod preview;
pub mod publish;
pub mod util;
pub mod window;
