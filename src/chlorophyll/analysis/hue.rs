/// Hue angle in whole degrees for the given channel averages.
///
/// Uses the HSV hue formula on floating-point channel values and rounds half
/// up. Gray inputs (all channels equal) return 0, which is also the hue of
/// pure red; callers that need to tell them apart must look at the averages.
/// A result that rounds up to 360 wraps to 0.
pub fn hue_degrees(red: u8, green: u8, blue: u8) -> u16 {
    let (r, g, b) = (f64::from(red), f64::from(green), f64::from(blue));

    let min = r.min(g).min(b);
    let max = r.max(g).max(b);

    if min == max {
        return 0;
    }

    // Numerators stay integer-valued and the division comes last, so a true
    // half-degree tie is exactly representable and rounds up.
    let delta = max - min;
    let numerator = if max == r {
        g - b
    } else if max == g {
        2.0 * delta + (b - r)
    } else {
        4.0 * delta + (r - g)
    };

    let mut hue = 60.0 * numerator / delta;
    if hue < 0.0 {
        hue += 360.0;
    }

    ((hue + 0.5).floor() as u16) % 360
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_is_zero() {
        assert_eq!(hue_degrees(128, 128, 128), 0);
        assert_eq!(hue_degrees(0, 0, 0), 0);
        assert_eq!(hue_degrees(255, 255, 255), 0);
    }

    #[test]
    fn test_pure_red_matches_gray() {
        // Red is the 0 degree reference, so it cannot be told apart from gray by hue alone.
        assert_eq!(hue_degrees(255, 0, 0), 0);
        assert_eq!(hue_degrees(255, 0, 0), hue_degrees(128, 128, 128));
    }

    #[test]
    fn test_primary_and_secondary_colors() {
        assert_eq!(hue_degrees(0, 255, 0), 120);
        assert_eq!(hue_degrees(0, 0, 255), 240);
        assert_eq!(hue_degrees(255, 255, 0), 60);
        assert_eq!(hue_degrees(0, 255, 255), 180);
        assert_eq!(hue_degrees(255, 0, 255), 300);
    }

    #[test]
    fn test_negative_sector_wraps() {
        // (0 - 50) / 100 * 60 = -30
        assert_eq!(hue_degrees(100, 0, 50), 330);
    }

    #[test]
    fn test_rounding_to_360_wraps_to_zero() {
        // -1/255 * 60 + 360 = 359.76..
        assert_eq!(hue_degrees(255, 0, 1), 0);
    }

    #[test]
    fn test_rounds_half_up() {
        // (2 + (0 - 1) / 8) * 60 = 112.5
        assert_eq!(hue_degrees(1, 8, 0), 113);
    }

    #[test]
    fn test_rounds_half_up_on_non_dyadic_ties() {
        // Green sector: 60 * (2 * 24 + 1) / 24 = 122.5
        assert_eq!(hue_degrees(0, 24, 1), 123);
        assert_eq!(hue_degrees(0, 48, 2), 123);
        // Red sector: 60 * 1 / 24 = 2.5
        assert_eq!(hue_degrees(24, 1, 0), 3);
        // Red sector, wrapped: 360 - 2.5 = 357.5
        assert_eq!(hue_degrees(24, 0, 1), 358);
        // Blue sector: 60 * (4 * 24 + 1) / 24 = 242.5
        assert_eq!(hue_degrees(1, 0, 24), 243);
    }

    #[test]
    fn test_uses_float_division() {
        // Integer division would collapse (50 - 25) / 75 to 0.
        assert_eq!(hue_degrees(100, 50, 25), 20);
    }

    #[test]
    fn test_invariant_under_uniform_scaling() {
        assert_eq!(hue_degrees(100, 50, 25), hue_degrees(200, 100, 50));
        assert_eq!(hue_degrees(30, 60, 90), hue_degrees(60, 120, 180));
    }

    #[test]
    fn test_algae_green_sample() {
        // max = G: (2 + (40 - 60) / 100) * 60 = 108
        assert_eq!(hue_degrees(60, 140, 40), 108);
    }
}
