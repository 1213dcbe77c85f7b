use alloc::string::String;

/// Failure of a buffer, codec or facade operation.
///
/// Every variant is recoverable. Operations that allocate leave their target
/// buffer empty when they fail; out-of-range coordinates are not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Requested dimensions exceed the configured [`Limits`](crate::Limits).
    #[error("{width}x{height} is beyond the pixel size limit of {max_width}x{max_height}")]
    SizeLimitExceeded {
        width: usize,
        height: usize,
        max_width: usize,
        max_height: usize,
    },

    /// The pixel storage could not be reserved.
    #[error("out of memory allocating {bytes} bytes")]
    OutOfMemory { bytes: usize },

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("decode failed: {0}")]
    DecodeFailure(String),

    #[error("encode failed: {0}")]
    EncodeFailure(String),

    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn size_limit_message_names_both_sizes() {
        let err = Error::SizeLimitExceeded {
            width: 20000,
            height: 10,
            max_width: 10240,
            max_height: 10240,
        };
        assert_eq!(
            err.to_string(),
            "20000x10 is beyond the pixel size limit of 10240x10240"
        );
    }

    #[test]
    fn message_variants_carry_context() {
        let err = Error::InvalidArguments("end is before start".into());
        assert_eq!(err.to_string(), "invalid arguments: end is before start");
    }
}
