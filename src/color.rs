//! Color mapping
//!
//! Pure conversions from amplitude/hue space to packed `0xAARRGGBB` colors.
//! The alpha channel is always fully opaque. The spectrogram darkening and
//! the bar-edge formula are deliberate visual choices of this renderer and
//! are kept bit-exact rather than generalized.

/// Pack three 0-255 channels into an opaque `0xAARRGGBB` color.
#[inline]
pub fn pack_rgb(r: u32, g: u32, b: u32) -> u32 {
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

#[inline]
fn hue_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// HSL to packed RGB.
/// h wraps modulo 1; s: 0-1 (0 gives gray at lightness l); l: 0-1
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> u32 {
    let (r, g, b) = hsl_to_rgb_f32(h, s, l);
    pack_rgb(
        (r * 255.0) as u32,
        (g * 255.0) as u32,
        (b * 255.0) as u32,
    )
}

/// HSL to unpacked 0-1 channels, for callers that keep working in float space.
pub fn hsl_to_rgb_f32(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let h = h.rem_euclid(1.0);
    if s <= 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    )
}

/// Resolve one spectrogram cell: hue = value at full saturation, half
/// lightness, then every channel darkened by `sqrt(value)` so low-energy
/// bins fade toward black instead of cycling at full brightness.
pub fn spectrogram_color(value: f32) -> u32 {
    let value = value.clamp(0.0, 1.0);
    let (r, g, b) = hsl_to_rgb_f32(value, 1.0, 0.5);
    let dim = value.sqrt();
    pack_rgb(
        (r * dim * 255.0) as u32,
        (g * dim * 255.0) as u32,
        (b * dim * 255.0) as u32,
    )
}

/// Color of the topmost, partially covered pixel of a spectrum bar.
/// Each channel is `0x44 * frac` truncated, applied uniformly. This exact
/// formula is part of the renderer's look; do not swap in a generic blend.
pub fn bar_edge_color(frac: f32) -> u32 {
    let level = (0x44 as f32 * frac.clamp(0.0, 1.0)) as u32;
    pack_rgb(level, level, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), 0xFFFF0000);
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), 0xFF00FF00);
        assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), 0xFF0000FF);
    }

    #[test]
    fn test_hue_wraparound_continuity() {
        // h = 0 and h = 1 are the same base hue before any darkening
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), hsl_to_rgb(1.0, 1.0, 0.5));
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let c = hsl_to_rgb(0.37, 0.0, 0.5);
        let r = (c >> 16) & 0xFF;
        let g = (c >> 8) & 0xFF;
        let b = c & 0xFF;
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn test_spectrogram_zero_energy_is_black() {
        assert_eq!(spectrogram_color(0.0), 0xFF000000);
    }

    #[test]
    fn test_spectrogram_darkening_applied() {
        // value 0.25 halves each channel relative to the raw HSL result
        let raw = hsl_to_rgb_f32(0.25, 1.0, 0.5);
        let c = spectrogram_color(0.25);
        let r = ((c >> 16) & 0xFF) as f32;
        assert!((r - raw.0 * 0.5 * 255.0).abs() <= 1.0);
    }

    #[test]
    fn test_bar_edge_extremes() {
        assert_eq!(bar_edge_color(0.0), 0xFF000000);
        assert_eq!(bar_edge_color(1.0), 0xFF444444);
    }
}
