use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.42);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Categorical colours
// ---------------------------------------------------------------------------

/// First two entries of the ColorBrewer "Set2" qualitative palette.
pub const SET2: [Color32; 2] = [
    Color32::from_rgb(102, 194, 165),
    Color32::from_rgb(252, 141, 98),
];

pub const HISTOGRAM_BLUE: Color32 = Color32::from_rgb(31, 119, 180);

// ---------------------------------------------------------------------------
// Diverging colour scale
// ---------------------------------------------------------------------------

const COOL: (u8, u8, u8) = (59, 76, 192);
const NEUTRAL: (u8, u8, u8) = (221, 221, 221);
const WARM: (u8, u8, u8) = (180, 4, 38);

fn linear(c: (u8, u8, u8)) -> LinSrgb {
    Srgb::new(c.0, c.1, c.2).into_format::<f32>().into_linear()
}

/// Blue–grey–red diverging scale over `[-1, 1]`; mixed in linear RGB.
/// NaN maps to light grey.
pub fn coolwarm(value: f64) -> Color32 {
    if value.is_nan() {
        return Color32::from_gray(235);
    }
    let v = value.clamp(-1.0, 1.0) as f32;
    let mixed = if v < 0.0 {
        linear(NEUTRAL).mix(linear(COOL), -v)
    } else {
        linear(NEUTRAL).mix(linear(WARM), v)
    };
    to_color32(Srgb::from_linear(mixed))
}

/// Black or white, whichever reads better on `background`.
pub fn contrasting_text(background: Color32) -> Color32 {
    let [r, g, b, _] = background.to_array();
    let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coolwarm_endpoints() {
        assert_eq!(coolwarm(-1.0), Color32::from_rgb(59, 76, 192));
        assert_eq!(coolwarm(0.0), Color32::from_rgb(221, 221, 221));
        assert_eq!(coolwarm(1.0), Color32::from_rgb(180, 4, 38));
        assert_eq!(coolwarm(5.0), coolwarm(1.0));
    }

    #[test]
    fn palette_size() {
        assert_eq!(generate_palette(9).len(), 9);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn text_contrast() {
        assert_eq!(contrasting_text(coolwarm(0.0)), Color32::BLACK);
        assert_eq!(contrasting_text(coolwarm(1.0)), Color32::WHITE);
    }
}
