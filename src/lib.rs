//! # pixlayer
//!
//! *Stack your pixels.*
//!
//! An in-memory RGBA8 raster engine: allocate pixel buffers under explicit
//! size limits, fill them, crop regions out of them, and composite one onto
//! another with Porter-Duff "source over".
//!
//! ```rust
//! use pixlayer::{Limits, PixelBuffer, Rgba};
//!
//! let limits = Limits::default();
//! let mut canvas = PixelBuffer::with_size(4, 4, &limits)?;
//! canvas.fill(Rgba::new(255, 255, 255, 255));
//!
//! let mut stamp = PixelBuffer::with_size(2, 2, &limits)?;
//! stamp.fill(Rgba::new(255, 0, 0, 128));
//! canvas.draw(&stamp, 1, 1);
//!
//! let mut corner = PixelBuffer::new();
//! corner.copy_from(&canvas, 1, 1, 2, 2, &limits)?;
//! assert_eq!(corner.width(), 2);
//! # Ok::<(), pixlayer::Error>(())
//! ```
//!
//! ## Buffers
//!
//! [`PixelBuffer`] owns one contiguous, row-major allocation and a cached
//! `has_alpha` hint. Fills and opaque draws are bulk row copies; row kernels
//! dispatch to AVX2, NEON or WASM SIMD128 when available and fall back to
//! scalar code.
//!
//! ## Codecs and the image facade
//!
//! [`CodecRegistry`] holds decoders and encoders in the order they are tried.
//! [`Image`] and [`Context`] give the argument conventions of a scripting
//! binding (optional origins and sizes, fractional alpha, byte windows).
//!
//! ## Feature flags
//!
//! - **`std`** (default): enables `std` support in the SIMD dispatcher.
//! - **`imgref`**: convert to and from [`imgref`] image views.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod buffer;
mod codec;
mod error;
mod image;
mod limits;
mod rows;

pub mod blend;

#[cfg(feature = "imgref")]
pub mod img;

pub use buffer::PixelBuffer;
pub use codec::{Codec, CodecRegistry, ImageFormat, RawCodec};
pub use error::{Error, Result};
pub use image::{Context, Image};
pub use limits::{DEFAULT_MAX_DIMENSION, Limits};
pub use rgb::Rgba;
