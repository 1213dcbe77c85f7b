//! Porter-Duff "source over" for straight-alpha RGBA8 pixels.

use rgb::Rgba;

/// Blend `src` over `dst` and return the composited pixel.
///
/// Channels are computed in `f64`:
///
/// ```text
/// af = src.a / 255    ab = dst.a / 255    a = 1 - (1 - af)(1 - ab)
/// c  = (src.c * af + dst.c * ab * (1 - af)) / a     (truncated)
/// A  = round(a * 255)
/// ```
///
/// Callers must only pass `0 < src.a < 255` and `dst.a > 0`. Fully
/// transparent and fully opaque sources, and transparent destinations, are
/// copies or skips that [`PixelBuffer::draw`](crate::PixelBuffer::draw)
/// handles before reaching here; under this contract `a >= af > 0`.
#[inline]
pub fn merge(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    debug_assert!(
        src.a > 0 && src.a < 0xFF && dst.a > 0,
        "merge called outside its contract: src.a={} dst.a={}",
        src.a,
        dst.a
    );

    let ab = f64::from(dst.a) / 255.0;
    let af = f64::from(src.a) / 255.0;
    let a = 1.0 - (1.0 - af) * (1.0 - ab);

    let channel = |s: u8, d: u8| -> u8 {
        ((f64::from(s) * af + f64::from(d) * ab * (1.0 - af)) / a) as u8
    };

    Rgba {
        r: channel(src.r, dst.r),
        g: channel(src.g, dst.g),
        b: channel(src.b, dst.b),
        // a * 255 is non-negative, so adding one half before truncating rounds.
        a: (a * 255.0 + 0.5) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
        let ab = dst.a as f64 / 255.0;
        let af = src.a as f64 / 255.0;
        let a = 1.0 - (1.0 - af) * (1.0 - ab);
        let c = |s: u8, d: u8| ((s as f64 * af + d as f64 * ab * (1.0 - af)) / a) as u8;
        Rgba::new(
            c(src.r, dst.r),
            c(src.g, dst.g),
            c(src.b, dst.b),
            (a * 255.0 + 0.5) as u8,
        )
    }

    #[test]
    fn half_blue_over_opaque_red() {
        let dst = Rgba::new(255, 0, 0, 255);
        let src = Rgba::new(0, 0, 255, 128);
        let out = merge(dst, src);
        assert_eq!(out, expected(dst, src));
        assert_eq!(out.a, 255);
        // Roughly half of each; truncation may shave one step.
        assert!((126..=127).contains(&out.r), "r = {}", out.r);
        assert!((127..=128).contains(&out.b), "b = {}", out.b);
        assert_eq!(out.g, 0);
    }

    #[test]
    fn translucent_over_translucent_accumulates_alpha() {
        let dst = Rgba::new(0, 255, 0, 100);
        let src = Rgba::new(200, 0, 50, 100);
        let out = merge(dst, src);
        assert_eq!(out, expected(dst, src));
        // 1 - (155/255)^2 = 0.6305... of 255 = 160.78
        assert_eq!(out.a, 161);
        assert!(out.a > src.a && out.a > dst.a);
    }

    #[test]
    fn same_color_is_stable() {
        let px = Rgba::new(40, 80, 120, 200);
        let out = merge(px, Rgba { a: 10, ..px });
        for (o, p) in [(out.r, px.r), (out.g, px.g), (out.b, px.b)] {
            assert!(o == p || o + 1 == p, "{o} vs {p}");
        }
    }

    #[test]
    fn exhaustive_alpha_pairs_stay_in_range() {
        for sa in 1..=254u8 {
            for da in [1u8, 2, 64, 128, 254, 255] {
                let out = merge(Rgba::new(255, 255, 255, da), Rgba::new(255, 255, 255, sa));
                assert!(out.a >= sa, "alpha shrank: sa={sa} da={da}");
                assert!(out.r >= 254, "white drifted: sa={sa} da={da} r={}", out.r);
            }
        }
    }
}
