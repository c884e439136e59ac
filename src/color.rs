use bigcolor::BigColor;
use eframe::egui::Color32;
use std::str::FromStr;

/// A color given on the command line, in a settings file or in the color
/// dialog's text field.
///
/// Accepts `#RGB`, `#RRGGBB` or one of the SVG/CSS color keywords
/// (case-insensitive, e.g. `red`, `DarkSlateGray`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub Color32);

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s).map(Color).ok_or_else(|| {
            anyhow::anyhow!("invalid color '{s}' (expected #RGB, #RRGGBB or a color name)")
        })
    }
}

impl From<Color> for Color32 {
    fn from(value: Color) -> Self {
        value.0
    }
}

pub fn parse_color(input: &str) -> Option<Color32> {
    let s = input.trim().to_ascii_lowercase();
    let accepted = match s.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => {
            // Names only; bare hex like "abc" must not slip through.
            s != "transparent"
                && s.chars().all(|c| c.is_ascii_alphabetic())
                && !s.chars().all(|c| c.is_ascii_hexdigit())
        }
    };
    if !accepted {
        return None;
    }
    let color = BigColor::new(&s);
    if !color.is_valid() {
        return None;
    }
    let rgb = color.to_rgb();
    Some(Color32::from_rgb(rgb.r, rgb.g, rgb.b))
}

/// `#rrggbb` form of a color, used to prefill the color dialog.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
