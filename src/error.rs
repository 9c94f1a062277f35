use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("couldn't load site configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
