//! Dimension ceilings consulted whenever a buffer is (re)allocated.

use crate::error::{Error, Result};

/// Default ceiling for both width and height, in pixels.
pub const DEFAULT_MAX_DIMENSION: usize = 10240;

/// Maximum width and height accepted at allocation time.
///
/// Limits are a plain value handed to every allocating call, so changing them
/// never affects buffers that already exist.
///
/// ```rust
/// use pixlayer::{Limits, PixelBuffer};
///
/// let limits = Limits::default().with_max_width(64).with_max_height(64);
/// assert!(PixelBuffer::with_size(65, 1, &limits).is_err());
/// assert!(PixelBuffer::with_size(64, 64, &limits).is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Limits {
    pub max_width: usize,
    pub max_height: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_DIMENSION,
            max_height: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl Limits {
    /// No ceiling at all. Allocation can still fail with `OutOfMemory`.
    pub const fn none() -> Self {
        Self {
            max_width: usize::MAX,
            max_height: usize::MAX,
        }
    }

    pub const fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    pub const fn with_max_height(mut self, max_height: usize) -> Self {
        self.max_height = max_height;
        self
    }

    /// Reject `width x height` if either side is over its ceiling.
    pub fn check(&self, width: usize, height: usize) -> Result<()> {
        if width > self.max_width || height > self.max_height {
            log::warn!(
                "rejecting {width}x{height} allocation, limit is {}x{}",
                self.max_width,
                self.max_height
            );
            return Err(Error::SizeLimitExceeded {
                width,
                height,
                max_width: self.max_width,
                max_height: self.max_height,
            });
        }
        Ok(())
    }
}
