mod cli;
mod repo;

pub use cli::{GitCli, VersionControl};
pub use repo::GitRepo;
