/// Failures at Glide's fallible edges: configuration, decoding slide lists,
/// and talking to the host page. Widgets themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum GlideError {
    #[error("invalid carousel config: {0}")]
    Config(String),

    #[error("could not decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },

    #[error("`{0}` is not available in this host")]
    MissingHost(&'static str),

    #[error("dom operation failed: {0}")]
    Dom(String),
}

pub type Result<T, E = GlideError> = std::result::Result<T, E>;
