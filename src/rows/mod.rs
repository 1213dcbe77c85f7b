// ---------------------------------------------------------------------------
// Row kernels over packed RGBA8 bytes with SIMD dispatch.
//
// Each tier module holds #[rite] row loops and the #[arcane] entry points
// that incant! dispatches to. The loops themselves are plain safe Rust
// written so that the widened target features let them vectorize.
// ---------------------------------------------------------------------------

use archmage::incant;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;


/// Pixels examined per step by the vector tiers of [`opaque_prefix`].
const SCAN_BLOCK_PIXELS: usize = 8;

// ===========================================================================
// Shared loop bodies, inlined into every tier
// ===========================================================================

#[inline(always)]
fn fill_row_body(row: &mut [u8], color: [u8; 4]) {
    for px in row.chunks_exact_mut(4) {
        px.copy_from_slice(&color);
    }
}

#[inline(always)]
fn opaque_prefix_pixelwise(px: &[u8]) -> usize {
    px.chunks_exact(4)
        .position(|p| p[3] != 0xFF)
        .unwrap_or(px.len() / 4)
}

/// Block scan: AND the alpha bytes of a whole block, then fall back to a
/// pixel-wise scan inside the first block that is not fully opaque. The first
/// pixel is checked on its own so a translucent start reads one pixel.
#[inline(always)]
fn opaque_prefix_blocked(px: &[u8]) -> usize {
    if px.len() >= 4 && px[3] != 0xFF {
        return 0;
    }
    let mut opaque = 0;
    for block in px.chunks_exact(SCAN_BLOCK_PIXELS * 4) {
        let alpha = block.chunks_exact(4).fold(0xFF, |acc, p| acc & p[3]);
        if alpha != 0xFF {
            break;
        }
        opaque += SCAN_BLOCK_PIXELS;
    }
    opaque + opaque_prefix_pixelwise(&px[opaque * 4..])
}

// ===========================================================================
// Public (crate) API
// ===========================================================================

/// Write `color` (R, G, B, A) into every pixel of `row`.
///
/// `row.len()` must be a multiple of 4; a trailing partial pixel is ignored.
pub(crate) fn fill_row(row: &mut [u8], color: [u8; 4]) {
    if row.is_empty() {
        return;
    }
    incant!(fill_row_impl(row, color), [v3, arm_v2, wasm128, scalar])
}

/// Number of leading pixels whose alpha byte is 255.
///
/// Returns `pixels.len() / 4` when every pixel is opaque. Stops reading at the
/// first translucent pixel (vector tiers at the end of that pixel's block,
/// except that a translucent first pixel is the only one read).
pub(crate) fn opaque_prefix(pixels: &[u8]) -> usize {
    if pixels.is_empty() {
        return 0;
    }
    incant!(opaque_prefix_impl(pixels), [v3, arm_v2, wasm128, scalar])
}
