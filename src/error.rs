use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArtError>;

#[derive(Error, Debug)]
pub enum ArtError {
    #[error("Unsupported character {0:?}: no glyph defined")]
    UnsupportedGlyph(char),
    #[error("Message is empty")]
    EmptyMessage,
    #[error("Command `{command}` failed ({status}): {stderr}")]
    Command {
        command: String,
        status: String,
        stderr: String,
    },
    #[error("Git repository error: {0}")]
    GitRepo(String),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::discover::Error> for ArtError {
    fn from(err: gix::discover::Error) -> Self {
        ArtError::GitDiscover(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for ArtError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        ArtError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for ArtError {
    fn from(err: gix::object::commit::Error) -> Self {
        ArtError::Commit(Box::new(err))
    }
}
