/// Convenience result type used across ikform.
pub type IkResult<T> = Result<T, IkError>;

/// Top-level error taxonomy.
///
/// Only two categories are user-observable on the form: [`IkError::Authentication`]
/// (fatal to the page) and [`IkError::MetadataFetch`] (reported inline). The remaining
/// variants cover configuration and input that did not come through the form widgets.
#[derive(thiserror::Error, Debug)]
pub enum IkError {
    /// Missing or mismatching `access_token` / `imagekit_id`.
    #[error("Invalid access_token or imagekit_id")]
    Authentication,

    /// The dimension probe of the origin image failed.
    #[error(transparent)]
    MetadataFetch(#[from] MetadataFetchError),

    /// Form values outside the declared widget constraints.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or incomplete configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Cause of a failed metadata probe.
#[derive(thiserror::Error, Debug)]
pub enum MetadataFetchError {
    /// The origin answered with something other than `200 OK`.
    #[error("Failed to retrieve original image, status code: {0}")]
    Status(u16),

    /// Connection, TLS or body read failure.
    #[error("An error occurred while fetching the original image size: {0}")]
    Transport(String),

    /// The body did not start with a decodable image header.
    #[error("An error occurred while fetching the original image size: {0}")]
    Decode(String),
}

impl IkError {
    /// Build a [`IkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`IkError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`IkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for errors that abort the whole page evaluation.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::MetadataFetch(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
