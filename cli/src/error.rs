use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Bip32(#[from] olympus_bip32::Error),

    #[error("invalid hex seed: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("unable to start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{count} addresses starting at index {start} leave the non-hardened range")]
    IndexRange { start: u32, count: u32 },
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Custom(s.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
