// SPDX-License-Identifier: MPL-2.0
use thiserror::Error as ThisError;

/// Errors raised at the crate's I/O boundaries.
///
/// The interaction core never fails; these only come out of configuration,
/// image loading/encoding and share surfaces.
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Image Error: {0}")]
    Image(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Share Error: {0}")]
    Share(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
