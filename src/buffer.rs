//! Owned RGBA8 pixel grid and the operations that write it.

use alloc::vec::Vec;
use core::fmt;

use rgb::Rgba;

use crate::blend;
use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::rows;

/// A `width` x `height` grid of straight-alpha RGBA8 pixels.
///
/// Pixels are stored contiguously in row-major order, `row * width + col`.
/// A buffer with either dimension zero owns no storage at all.
///
/// `has_alpha` is a cached hint meaning "at least one pixel is not fully
/// opaque". It is set by whichever operation last wrote the buffer and is not
/// kept exact by every path: [`draw`](Self::draw) leaves it untouched and
/// [`copy_from`](Self::copy_from) inherits the source's flag. Call
/// [`detect_transparent`](Self::detect_transparent) for a fresh answer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgba<u8>>,
    has_alpha: bool,
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_alpha", &self.has_alpha)
            .finish_non_exhaustive()
    }
}

impl PixelBuffer {
    /// An empty buffer with no storage.
    pub const fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
            has_alpha: false,
        }
    }

    /// Allocate a zeroed (fully transparent) `width` x `height` buffer.
    pub fn with_size(width: usize, height: usize, limits: &Limits) -> Result<Self> {
        let mut buf = Self::new();
        buf.allocate(width, height, limits)?;
        Ok(buf)
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Replace the contents with `width` x `height` zeroed pixels.
    ///
    /// Any previous storage is released first. A zero dimension yields an
    /// empty buffer. On failure the buffer is left empty.
    pub fn allocate(&mut self, width: usize, height: usize, limits: &Limits) -> Result<()> {
        self.free();
        if width == 0 || height == 0 {
            return Ok(());
        }
        limits.check(width, height)?;

        let count = width.checked_mul(height).ok_or(Error::OutOfMemory {
            bytes: usize::MAX,
        })?;
        let bytes = count.checked_mul(4).ok_or(Error::OutOfMemory {
            bytes: usize::MAX,
        })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| Error::OutOfMemory { bytes })?;
        pixels.resize(count, Rgba::new(0, 0, 0, 0));

        log::debug!("allocated {width}x{height} pixel buffer ({bytes} bytes)");
        self.width = width;
        self.height = height;
        self.pixels = pixels;
        // Zeroed pixels are transparent.
        self.has_alpha = true;
        Ok(())
    }

    /// Release the storage and return to the empty state. Idempotent.
    pub fn free(&mut self) {
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
        self.has_alpha = false;
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cached transparency hint; see the type-level docs.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba<u8>] {
        &self.pixels
    }

    /// Mutable access to all pixels. Writes through this slice do not update
    /// the transparency hint.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba<u8>] {
        &mut self.pixels
    }

    /// The pixels as raw bytes: row-major, R, G, B, A, no padding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Give up the storage, row-major with no padding.
    pub fn into_pixels(self) -> Vec<Rgba<u8>> {
        self.pixels
    }

    /// Row `y`, or `None` past the bottom edge.
    pub fn row(&self, y: usize) -> Option<&[Rgba<u8>]> {
        if y >= self.height {
            return None;
        }
        Some(&self.pixels[y * self.width..][..self.width])
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Rgba<u8>]> + '_ {
        // chunks_exact panics on a zero chunk size; an empty buffer has no rows anyway.
        self.pixels.chunks_exact(self.width.max(1))
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba<u8>> {
        if x >= self.width {
            return None;
        }
        self.row(y).map(|row| row[x])
    }

    /// Overwrite the transparency hint without scanning.
    pub fn set_has_alpha(&mut self, has_alpha: bool) {
        self.has_alpha = has_alpha;
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Set every pixel to `color`. Does nothing on an empty buffer.
    pub fn fill(&mut self, color: Rgba<u8>) {
        if self.is_empty() {
            return;
        }
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut self.pixels);
        if color.r == color.a && color.g == color.a && color.b == color.a {
            bytes.fill(color.a);
        } else {
            let row_bytes = self.width * 4;
            let (first, rest) = bytes.split_at_mut(row_bytes);
            rows::fill_row(first, [color.r, color.g, color.b, color.a]);
            for row in rest.chunks_exact_mut(row_bytes) {
                row.copy_from_slice(first);
            }
        }
        self.has_alpha = color.a < 0xFF;
    }

    /// Replace the contents with the `w` x `h` region of `src` at `(x, y)`.
    ///
    /// The buffer is emptied first whatever the outcome. A region whose origin
    /// lies outside `src` produces an empty buffer; one that extends past the
    /// right or bottom edge is clipped. The transparency hint is taken from
    /// `src` as-is.
    pub fn copy_from(
        &mut self,
        src: &PixelBuffer,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
        limits: &Limits,
    ) -> Result<()> {
        self.free();
        if src.is_empty() || x >= src.width || y >= src.height {
            return Ok(());
        }
        let w = w.min(src.width - x);
        let h = h.min(src.height - y);

        self.allocate(w, h, limits)?;
        if self.is_empty() {
            return Ok(());
        }

        log::trace!("copying {w}x{h} region at ({x}, {y}) from {}x{}", src.width, src.height);
        for (row, dst) in self.pixels.chunks_exact_mut(w).enumerate() {
            let start = (y + row) * src.width + x;
            dst.copy_from_slice(&src.pixels[start..start + w]);
        }
        self.has_alpha = src.has_alpha;
        Ok(())
    }

    /// Composite `src` onto this buffer with its top-left corner at `(x, y)`.
    ///
    /// The part of `src` that falls outside this buffer is ignored, and an
    /// offset at or past the right or bottom edge does nothing. A source whose
    /// hint says it is fully opaque is copied row by row; otherwise each pixel
    /// is skipped, copied or [merged](blend::merge) according to the two
    /// alphas. The transparency hint of this buffer is not updated.
    pub fn draw(&mut self, src: &PixelBuffer, x: usize, y: usize) {
        if x >= self.width || y >= self.height || src.is_empty() {
            return;
        }
        let w = src.width.min(self.width - x);
        let h = src.height.min(self.height - y);
        let dst_width = self.width;

        if !src.has_alpha {
            log::trace!("draw {w}x{h} at ({x}, {y}): opaque row copy");
            for (row, src_row) in src.rows().take(h).enumerate() {
                let start = (y + row) * dst_width + x;
                self.pixels[start..start + w].copy_from_slice(&src_row[..w]);
            }
            return;
        }

        log::trace!("draw {w}x{h} at ({x}, {y}): per-pixel composite");
        for (row, src_row) in src.rows().take(h).enumerate() {
            let start = (y + row) * dst_width + x;
            let dst_row = &mut self.pixels[start..start + w];
            for (dp, &sp) in dst_row.iter_mut().zip(&src_row[..w]) {
                if sp.a == 0 {
                    continue;
                } else if sp.a == 0xFF || dp.a == 0 {
                    *dp = sp;
                } else {
                    *dp = blend::merge(*dp, sp);
                }
            }
        }
    }

    /// Recompute the transparency hint by scanning in row-major order.
    ///
    /// Stops at the first pixel whose alpha is not 255 and returns its
    /// row-major index, or `None` when every pixel is opaque (or the buffer
    /// is empty).
    pub fn detect_transparent(&mut self) -> Option<usize> {
        self.has_alpha = false;
        let count = self.pixels.len();
        let opaque = rows::opaque_prefix(self.as_bytes());
        if opaque < count {
            self.has_alpha = true;
            Some(opaque)
        } else {
            None
        }
    }
}
