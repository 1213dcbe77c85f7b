use archmage::prelude::*;

use super::{fill_row_body, opaque_prefix_blocked};

// ===========================================================================
// AArch64 NEON: rite row implementations
// ===========================================================================

#[rite]
pub(super) fn fill_row_arm_v2(_token: Arm64V2Token, row: &mut [u8], color: [u8; 4]) {
    fill_row_body(row, color);
}

#[rite]
pub(super) fn opaque_prefix_row_arm_v2(_token: Arm64V2Token, px: &[u8]) -> usize {
    opaque_prefix_blocked(px)
}

// ===========================================================================
// AArch64 NEON: arcane entry points
// ===========================================================================

#[arcane]
pub(super) fn fill_row_impl_arm_v2(t: Arm64V2Token, row: &mut [u8], color: [u8; 4]) {
    fill_row_arm_v2(t, row, color);
}

#[arcane]
pub(super) fn opaque_prefix_impl_arm_v2(t: Arm64V2Token, px: &[u8]) -> usize {
    opaque_prefix_row_arm_v2(t, px)
}
