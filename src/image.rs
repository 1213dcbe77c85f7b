//! Host-facing image object.
//!
//! [`Image`] mirrors what a scripting binding exposes: optional arguments,
//! a fractional alpha for fills, byte windows for loading, and format tags
//! for encoding. Shared configuration lives in a [`Context`] that the caller
//! owns and passes in, so no state is global.

use alloc::format;
use alloc::vec::Vec;

use rgb::Rgba;

use crate::buffer::PixelBuffer;
use crate::codec::{CodecRegistry, ImageFormat, RawCodec};
use crate::error::{Error, Result};
use crate::limits::Limits;

/// Size limits plus the codecs consulted by load and encode.
#[derive(Debug)]
pub struct Context {
    pub limits: Limits,
    pub codecs: CodecRegistry,
}

impl Default for Context {
    /// Default limits and an encode-only [`RawCodec`].
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            codecs: CodecRegistry::new().with_codec(RawCodec::new()),
        }
    }
}

impl Context {
    pub fn new(limits: Limits, codecs: CodecRegistry) -> Self {
        Self { limits, codecs }
    }

    pub fn max_width(&self) -> usize {
        self.limits.max_width
    }

    pub fn set_max_width(&mut self, max_width: usize) {
        self.limits.max_width = max_width;
    }

    pub fn max_height(&self) -> usize {
        self.limits.max_height
    }

    pub fn set_max_height(&mut self, max_height: usize) {
        self.limits.max_height = max_height;
    }
}

/// A pixel buffer with the binding-level API on top.
///
/// ```rust
/// use pixlayer::{Context, Image, ImageFormat};
///
/// let ctx = Context::default();
/// let mut canvas = Image::new(4, 4, &ctx).unwrap();
/// canvas.fill_color(255, 255, 255, None);
///
/// let mut stamp = Image::new(2, 2, &ctx).unwrap();
/// stamp.fill_color(255, 0, 0, Some(0.5));
/// canvas.draw_image(&stamp, 1, 1);
///
/// let raw = canvas.to_buffer(&ctx, ImageFormat::Raw).unwrap();
/// assert_eq!(raw.len(), 4 * 4 * 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    pixels: PixelBuffer,
}

impl Image {
    /// A zeroed `width` x `height` image; zero in either dimension gives an
    /// empty image.
    pub fn new(width: usize, height: usize, ctx: &Context) -> Result<Self> {
        Ok(Self {
            pixels: PixelBuffer::with_size(width, height, &ctx.limits)?,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// The transparency hint of the underlying buffer.
    #[inline]
    pub fn transparent(&self) -> bool {
        self.pixels.has_alpha()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    pub fn into_buffer(self) -> PixelBuffer {
        self.pixels
    }

    /// Fill with `(r, g, b)` and an alpha given as a fraction in `0.0..=1.0`.
    ///
    /// A missing alpha means opaque. The fraction is scaled by 255 and
    /// truncated; values outside the range saturate.
    pub fn fill_color(&mut self, r: u8, g: u8, b: u8, alpha: Option<f64>) {
        let a = match alpha {
            Some(alpha) => (alpha * 255.0) as u8,
            None => 0xFF,
        };
        self.pixels.fill(Rgba::new(r, g, b, a));
    }

    /// Decode `bytes[start..end]` with the context's codecs.
    ///
    /// `start` defaults to 0 and `end` to `bytes.len()`. The image is emptied
    /// before decoding and stays empty if decoding fails.
    pub fn load_from_buffer(
        &mut self,
        ctx: &Context,
        bytes: &[u8],
        start: Option<usize>,
        end: Option<usize>,
    ) -> Result<()> {
        let len = bytes.len();
        let start = start.unwrap_or(0);
        let end = end.unwrap_or(len);
        if start > len || end < start || end > len {
            return Err(Error::InvalidArguments(format!(
                "window {start}..{end} does not fit a buffer of {len} bytes"
            )));
        }

        self.pixels.free();
        self.pixels = ctx.codecs.decode(&bytes[start..end], &ctx.limits)?;
        Ok(())
    }

    /// Replace this image with a region of `source`.
    ///
    /// `origin` defaults to `(0, 0)` and `size` to the full source size; see
    /// [`PixelBuffer::copy_from`] for clipping.
    pub fn copy_from_image(
        &mut self,
        ctx: &Context,
        source: &Image,
        origin: Option<(usize, usize)>,
        size: Option<(usize, usize)>,
    ) -> Result<()> {
        let (x, y) = origin.unwrap_or((0, 0));
        let (w, h) = size.unwrap_or((source.width(), source.height()));
        self.pixels
            .copy_from(&source.pixels, x, y, w, h, &ctx.limits)
    }

    /// Composite `source` onto this image at `(x, y)`.
    pub fn draw_image(&mut self, source: &Image, x: usize, y: usize) {
        self.pixels.draw(&source.pixels, x, y);
    }

    /// Encode with the first codec registered for `format`.
    pub fn to_buffer(&self, ctx: &Context, format: ImageFormat) -> Result<Vec<u8>> {
        ctx.codecs.encode(&self.pixels, format)
    }
}

impl From<PixelBuffer> for Image {
    fn from(pixels: PixelBuffer) -> Self {
        Self { pixels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_ctx(width: usize, height: usize) -> Context {
        Context::new(
            Limits::default(),
            CodecRegistry::new().with_codec(RawCodec::with_dimensions(width, height)),
        )
    }

    #[test]
    fn new_respects_context_limits() {
        let mut ctx = Context::default();
        ctx.set_max_width(16);
        assert_eq!(ctx.max_width(), 16);
        assert_eq!(ctx.max_height(), 10240);
        assert!(matches!(
            Image::new(17, 1, &ctx),
            Err(Error::SizeLimitExceeded { .. })
        ));
        let empty = Image::new(0, 0, &ctx).unwrap();
        assert_eq!((empty.width(), empty.height()), (0, 0));
        assert!(!empty.transparent());
    }

    #[test]
    fn fill_color_alpha_fraction() {
        let ctx = Context::default();
        let mut img = Image::new(2, 2, &ctx).unwrap();

        img.fill_color(10, 20, 30, None);
        assert_eq!(img.buffer().pixel(1, 1), Some(Rgba::new(10, 20, 30, 255)));
        assert!(!img.transparent());

        img.fill_color(10, 20, 30, Some(0.5));
        assert_eq!(img.buffer().pixel(0, 0), Some(Rgba::new(10, 20, 30, 127)));
        assert!(img.transparent());

        img.fill_color(0, 0, 0, Some(2.0));
        assert_eq!(img.buffer().pixel(0, 0).map(|p| p.a), Some(255));
    }

    #[test]
    fn load_from_buffer_window() {
        let ctx = raw_ctx(1, 1);
        let bytes = [0xAA, 1, 2, 3, 4, 0xBB];
        let mut img = Image::default();
        img.load_from_buffer(&ctx, &bytes, Some(1), Some(5)).unwrap();
        assert_eq!(img.buffer().pixel(0, 0), Some(Rgba::new(1, 2, 3, 4)));
        assert!(img.transparent());
    }

    #[test]
    fn load_from_buffer_validates_window() {
        let ctx = raw_ctx(1, 1);
        let mut img = Image::new(1, 1, &ctx).unwrap();
        for (start, end) in [(Some(3), Some(2)), (None, Some(9)), (Some(9), None)] {
            assert!(matches!(
                img.load_from_buffer(&ctx, &[0; 4], start, end),
                Err(Error::InvalidArguments(_))
            ));
        }
        // Argument errors are raised before the image is touched.
        assert_eq!(img.width(), 1);
    }

    #[test]
    fn failed_load_leaves_image_empty() {
        let ctx = raw_ctx(2, 2);
        let mut img = Image::new(3, 3, &ctx).unwrap();
        assert!(matches!(
            img.load_from_buffer(&ctx, &[0; 4], None, None),
            Err(Error::DecodeFailure(_))
        ));
        assert_eq!((img.width(), img.height()), (0, 0));

        let mut img = Image::new(3, 3, &ctx).unwrap();
        assert!(matches!(
            img.load_from_buffer(&Context::default(), &[0; 4], None, None),
            Err(Error::UnsupportedFormat(_))
        ));
        assert_eq!((img.width(), img.height()), (0, 0));
    }

    #[test]
    fn copy_from_image_defaults_to_whole_source() {
        let ctx = Context::default();
        let mut src = Image::new(3, 2, &ctx).unwrap();
        src.fill_color(1, 2, 3, None);

        let mut dst = Image::default();
        dst.copy_from_image(&ctx, &src, None, None).unwrap();
        assert_eq!(dst, src);

        dst.copy_from_image(&ctx, &src, Some((1, 1)), None).unwrap();
        assert_eq!((dst.width(), dst.height()), (2, 1));

        dst.copy_from_image(&ctx, &src, Some((0, 0)), Some((1, 1))).unwrap();
        assert_eq!((dst.width(), dst.height()), (1, 1));
    }

    #[test]
    fn to_buffer_round_trips_raw() {
        let ctx = raw_ctx(2, 2);
        let mut img = Image::new(2, 2, &ctx).unwrap();
        img.fill_color(5, 6, 7, Some(1.0));
        let bytes = img.to_buffer(&ctx, ImageFormat::Raw).unwrap();

        let mut back = Image::default();
        back.load_from_buffer(&ctx, &bytes, None, None).unwrap();
        assert_eq!(back.buffer().pixels(), img.buffer().pixels());
        assert!(!back.transparent());
    }

    #[test]
    fn to_buffer_errors() {
        let ctx = Context::default();
        assert!(matches!(
            Image::default().to_buffer(&ctx, ImageFormat::Raw),
            Err(Error::EncodeFailure(_))
        ));
        let img = Image::new(1, 1, &ctx).unwrap();
        assert!(matches!(
            img.to_buffer(&ctx, ImageFormat::Png),
            Err(Error::UnsupportedFormat(_))
        ));
    }
}
