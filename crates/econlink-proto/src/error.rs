/// Errors that can occur while serializing a preview data block.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The serialized block exceeds the configured maximum size.
    #[error("encoded block too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, EncodeError>;
