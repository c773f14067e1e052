use econlink_proto::EncodeError;

/// Errors that can occur while building an inspect link.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// The message encoder rejected the normalized descriptor.
    #[error("failed to encode preview block: {0}")]
    Encoding(#[from] EncodeError),
}

pub type Result<T> = std::result::Result<T, LinkError>;
