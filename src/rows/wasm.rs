use archmage::prelude::*;

use super::{fill_row_body, opaque_prefix_blocked};

// ===========================================================================
// WASM SIMD128: rite row implementations
// ===========================================================================

#[rite]
pub(super) fn fill_row_wasm128(_token: Wasm128Token, row: &mut [u8], color: [u8; 4]) {
    fill_row_body(row, color);
}

#[rite]
pub(super) fn opaque_prefix_row_wasm128(_token: Wasm128Token, px: &[u8]) -> usize {
    opaque_prefix_blocked(px)
}

// ===========================================================================
// WASM SIMD128: arcane entry points
// ===========================================================================

#[arcane]
pub(super) fn fill_row_impl_wasm128(t: Wasm128Token, row: &mut [u8], color: [u8; 4]) {
    fill_row_wasm128(t, row, color);
}

#[arcane]
pub(super) fn opaque_prefix_impl_wasm128(t: Wasm128Token, px: &[u8]) -> usize {
    opaque_prefix_row_wasm128(t, px)
}
