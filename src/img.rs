//! Interop with [`imgref`] image views.
//!
//! ```rust
//! use imgref::ImgVec;
//! use pixlayer::{Limits, PixelBuffer, Rgba};
//!
//! let src = ImgVec::new(vec![Rgba::new(255u8, 0, 128, 200); 12], 4, 3);
//! let buf = PixelBuffer::from_img(src.as_ref(), &Limits::default()).unwrap();
//! assert!(buf.has_alpha());
//! assert_eq!(buf.as_img().width(), 4);
//! ```

use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};
use rgb::Rgba;

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::limits::Limits;

impl PixelBuffer {
    /// Borrow the pixels as a tightly packed (stride = width) image view.
    ///
    /// An empty buffer gives a 0x0 view.
    pub fn as_img(&self) -> ImgRef<'_, Rgba<u8>> {
        // imgref rejects a zero stride, even for 0x0.
        ImgRef::new_stride(self.pixels(), self.width(), self.height(), self.width().max(1))
    }

    /// Copy a possibly strided image into a new buffer and scan it for
    /// transparency.
    pub fn from_img(img: ImgRef<'_, Rgba<u8>>, limits: &Limits) -> Result<Self> {
        let mut buf = Self::with_size(img.width(), img.height(), limits)?;
        if buf.is_empty() {
            return Ok(buf);
        }
        let width = img.width();
        for (src_row, dst_row) in img.rows().zip(buf.pixels_mut().chunks_exact_mut(width)) {
            dst_row.copy_from_slice(src_row);
        }
        buf.detect_transparent();
        Ok(buf)
    }
}

impl From<PixelBuffer> for ImgVec<Rgba<u8>> {
    fn from(buf: PixelBuffer) -> Self {
        let (width, height) = (buf.width(), buf.height());
        let pixels: Vec<Rgba<u8>> = buf.into_pixels();
        ImgVec::new_stride(pixels, width, height, width.max(1))
    }
}
