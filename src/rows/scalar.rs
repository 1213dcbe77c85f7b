use archmage::prelude::*;

use super::{fill_row_body, opaque_prefix_pixelwise};

// ===========================================================================
// Scalar row implementations
// ===========================================================================

pub(super) fn fill_row_scalar(_token: ScalarToken, row: &mut [u8], color: [u8; 4]) {
    fill_row_body(row, color);
}

pub(super) fn opaque_prefix_row_scalar(_token: ScalarToken, px: &[u8]) -> usize {
    opaque_prefix_pixelwise(px)
}

// ===========================================================================
// Dispatch targets for incant!
// ===========================================================================

pub(super) fn fill_row_impl_scalar(t: ScalarToken, row: &mut [u8], color: [u8; 4]) {
    fill_row_scalar(t, row, color);
}

pub(super) fn opaque_prefix_impl_scalar(t: ScalarToken, px: &[u8]) -> usize {
    opaque_prefix_row_scalar(t, px)
}
