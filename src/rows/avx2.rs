use archmage::prelude::*;

use super::{fill_row_body, opaque_prefix_blocked};

// ===========================================================================
// x86-64 AVX2: rite row implementations
// ===========================================================================

#[rite]
pub(super) fn fill_row_v3(_token: X64V3Token, row: &mut [u8], color: [u8; 4]) {
    fill_row_body(row, color);
}

#[rite]
pub(super) fn opaque_prefix_row_v3(_token: X64V3Token, px: &[u8]) -> usize {
    opaque_prefix_blocked(px)
}

// ===========================================================================
// x86-64 AVX2: arcane entry points
// ===========================================================================

#[arcane]
pub(super) fn fill_row_impl_v3(t: X64V3Token, row: &mut [u8], color: [u8; 4]) {
    fill_row_v3(t, row, color);
}

#[arcane]
pub(super) fn opaque_prefix_impl_v3(t: X64V3Token, px: &[u8]) -> usize {
    opaque_prefix_row_v3(t, px)
}
