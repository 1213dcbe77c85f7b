//! Decoder/encoder plug-in interface and an explicit, ordered registry.
//!
//! The crate ships only [`RawCodec`]; format codecs (PNG, JPEG, ...) live
//! elsewhere and plug in through [`Codec`].

use alloc::boxed::Box;
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};
use crate::limits::Limits;

/// Format tag used to pick an encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u32)]
pub enum ImageFormat {
    Png = 1,
    Jpeg = 2,
    Gif = 3,
    Bmp = 4,
    /// Headerless row-major RGBA8, see [`RawCodec`].
    Raw = 5,
}

impl ImageFormat {
    /// Stable numeric code of this tag.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Png),
            2 => Some(Self::Jpeg),
            3 => Some(Self::Gif),
            4 => Some(Self::Bmp),
            5 => Some(Self::Raw),
            _ => None,
        }
    }
}

/// One format's decoder and/or encoder.
///
/// Both directions decline by default, so a codec implements only what it
/// supports.
pub trait Codec {
    fn format(&self) -> ImageFormat;

    /// Decode `data` into a new buffer.
    ///
    /// `Ok(None)` means "not this format" and lets the registry try the next
    /// codec. An `Err` is final.
    fn decode(&self, _data: &[u8], _limits: &Limits) -> Result<Option<PixelBuffer>> {
        Ok(None)
    }

    fn can_encode(&self) -> bool {
        false
    }

    fn encode(&self, _buffer: &PixelBuffer) -> Result<Vec<u8>> {
        Err(Error::UnsupportedFormat(format!(
            "{:?} has no encoder",
            self.format()
        )))
    }
}

/// Codecs in the order they are consulted.
#[derive(Default)]
pub struct CodecRegistry {
    codecs: Vec<Box<dyn Codec + Send + Sync>>,
}

impl core::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.codecs.iter().map(|c| c.format()))
            .finish()
    }
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_codec(mut self, codec: impl Codec + Send + Sync + 'static) -> Self {
        self.register(codec);
        self
    }

    /// Append `codec`; it is consulted after every codec already registered.
    pub fn register(&mut self, codec: impl Codec + Send + Sync + 'static) {
        self.codecs.push(Box::new(codec));
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Format tags in registration order.
    pub fn formats(&self) -> impl Iterator<Item = ImageFormat> + '_ {
        self.codecs.iter().map(|c| c.format())
    }

    /// Try each codec in order until one accepts `data`.
    pub fn decode(&self, data: &[u8], limits: &Limits) -> Result<PixelBuffer> {
        for codec in &self.codecs {
            if let Some(buffer) = codec.decode(data, limits)? {
                log::debug!(
                    "{:?} decoded {} bytes into {}x{}",
                    codec.format(),
                    data.len(),
                    buffer.width(),
                    buffer.height()
                );
                return Ok(buffer);
            }
        }
        Err(Error::UnsupportedFormat("unknown format".to_string()))
    }

    /// Encode `buffer` with the first codec registered for `format`.
    pub fn encode(&self, buffer: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>> {
        if buffer.is_empty() {
            return Err(Error::EncodeFailure("image is empty".to_string()));
        }
        let codec = self
            .codecs
            .iter()
            .find(|c| c.format() == format)
            .ok_or_else(|| Error::UnsupportedFormat(format!("no codec for {format:?}")))?;
        if !codec.can_encode() {
            return Err(Error::UnsupportedFormat(format!("can't encode to {format:?}")));
        }
        log::debug!("encoding {}x{} as {format:?}", buffer.width(), buffer.height());
        codec.encode(buffer).map_err(|e| match e {
            Error::EncodeFailure(_) => e,
            other => Error::EncodeFailure(other.to_string()),
        })
    }
}

/// Headerless RGBA8: row-major, 4 bytes per pixel in R, G, B, A order, no
/// row padding.
///
/// The byte stream does not carry dimensions, so decoding only works when
/// they are supplied with [`with_dimensions`](Self::with_dimensions).
///
/// ```rust
/// use pixlayer::{CodecRegistry, ImageFormat, Limits, PixelBuffer, RawCodec, Rgba};
///
/// let mut img = PixelBuffer::with_size(2, 1, &Limits::default()).unwrap();
/// img.fill(Rgba::new(1, 2, 3, 255));
///
/// let codecs = CodecRegistry::new().with_codec(RawCodec::with_dimensions(2, 1));
/// let bytes = codecs.encode(&img, ImageFormat::Raw).unwrap();
/// assert_eq!(bytes, [1, 2, 3, 255, 1, 2, 3, 255]);
///
/// let back = codecs.decode(&bytes, &Limits::default()).unwrap();
/// assert_eq!(back.pixels(), img.pixels());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawCodec {
    dimensions: Option<(usize, usize)>,
}

impl RawCodec {
    /// Encode-only raw codec.
    pub const fn new() -> Self {
        Self { dimensions: None }
    }

    /// Raw codec that also decodes `width` x `height` images.
    pub const fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            dimensions: Some((width, height)),
        }
    }
}

impl Codec for RawCodec {
    fn format(&self) -> ImageFormat {
        ImageFormat::Raw
    }

    fn decode(&self, data: &[u8], limits: &Limits) -> Result<Option<PixelBuffer>> {
        let Some((width, height)) = self.dimensions else {
            return Ok(None);
        };
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| Error::DecodeFailure(format!("{width}x{height} is too large")))?;
        if data.len() != expected {
            return Err(Error::DecodeFailure(format!(
                "expected {expected} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }

        let mut buffer = PixelBuffer::with_size(width, height, limits)?;
        let dst: &mut [u8] = bytemuck::cast_slice_mut(buffer.pixels_mut());
        dst.copy_from_slice(data);
        buffer.detect_transparent();
        Ok(Some(buffer))
    }

    fn can_encode(&self) -> bool {
        true
    }

    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>> {
        Ok(buffer.as_bytes().to_vec())
    }
}
