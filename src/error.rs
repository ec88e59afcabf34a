/// Custom error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error(transparent)]
    Config(#[from] confy::ConfyError),
    #[error(transparent)]
    BadMimeType(#[from] mime::FromStrError),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error("no application found for '{0}'")]
    NotFound(String),
    #[error("failed to run '{cmd}'")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not split command '{0}' into shell words")]
    BadCmd(String),
    #[error("error talking to selector process '{0}'")]
    Selector(String),
    #[error("selection cancelled")]
    Cancelled,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
