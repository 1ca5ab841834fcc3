use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("sections `{first}` and `{second}` overlap")]
    OverlappingSections { first: String, second: String },

    #[error("section `{0}` has no height")]
    EmptySection(String),

    #[error("section `{0}` registered twice")]
    DuplicateSection(String),

    #[error("unknown section `{0}`")]
    UnknownSection(String),

    #[error("sections are out of order: `{later}` starts above `{earlier}`")]
    UnorderedSections { earlier: String, later: String },

    #[error("invalid timer: {0}")]
    InvalidTimer(String),

    #[error("layout failed: {0}")]
    Layout(String),

    #[error("dictionary for `{lang}` is invalid: {reason}")]
    Dictionary { lang: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = FolioError> = std::result::Result<T, E>;
