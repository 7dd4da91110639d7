//! Color helpers. Colors are `0xRRGGBB` integers, the form Three.js takes.

/// Golden-ratio hue step between consecutive sentences
pub const GOLDEN_HUE_STEP: f64 = 0.618;
pub const PATH_SATURATION: f64 = 0.9;
pub const PATH_LIGHTNESS: f64 = 0.6;

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * 6.0 * (2.0 / 3.0 - t);
    }
    p
}

/// HSL (all components in [0, 1], hue wraps) to packed RGB
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> u32 {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let q = 2.0 * l - p;
        (
            hue_to_rgb(q, p, h + 1.0 / 3.0),
            hue_to_rgb(q, p, h),
            hue_to_rgb(q, p, h - 1.0 / 3.0),
        )
    };

    let channel = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u32;
    (channel(r) << 16) | (channel(g) << 8) | channel(b)
}

/// Stroke color for the sentence at `index` (insertion order)
pub fn sentence_color(index: usize) -> u32 {
    let hue = (index as f64 * GOLDEN_HUE_STEP).rem_euclid(1.0);
    hsl_to_hex(hue, PATH_SATURATION, PATH_LIGHTNESS)
}
