use anyhow::Context as _;
use eframe::egui::{FontData, FontDefinitions, FontFamily, FontId};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name under which a user supplied font file is registered with egui.
pub const CUSTOM_FONT: &str = "flashlight-custom";

/// Size text is measured at before it is scaled to fit the window.
pub const BASE_FONT_SIZE: f32 = 32.0;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FontSpec {
    #[default]
    Proportional,
    Monospace,
    /// TrueType/OpenType file loaded at startup.
    File(PathBuf),
}

impl FontSpec {
    pub fn family(&self) -> FontFamily {
        match self {
            FontSpec::Proportional => FontFamily::Proportional,
            FontSpec::Monospace => FontFamily::Monospace,
            FontSpec::File(_) => FontFamily::Name(CUSTOM_FONT.into()),
        }
    }

    pub fn font_id(&self, size: f32) -> FontId {
        FontId::new(size, self.family())
    }

    /// Font definitions with the custom font file registered, if any.
    ///
    /// Reading the file happens here so a bad path is reported before the
    /// window opens.
    pub fn definitions(&self) -> anyhow::Result<FontDefinitions> {
        let mut fonts = FontDefinitions::default();
        if let FontSpec::File(path) = self {
            let bytes = read_font_file(path)?;
            fonts
                .font_data
                .insert(CUSTOM_FONT.to_owned(), FontData::from_owned(bytes));
            // Fall back to the bundled fonts for glyphs the file lacks.
            let mut chain = vec![CUSTOM_FONT.to_owned()];
            if let Some(defaults) = fonts.families.get(&FontFamily::Proportional) {
                chain.extend(defaults.iter().cloned());
            }
            fonts
                .families
                .insert(FontFamily::Name(CUSTOM_FONT.into()), chain);
        }
        Ok(fonts)
    }
}

impl FromStr for FontSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => anyhow::bail!("empty font name"),
            "sans" | "sans-serif" | "proportional" => Ok(FontSpec::Proportional),
            "mono" | "monospace" => Ok(FontSpec::Monospace),
            _ => {
                let path = PathBuf::from(trimmed);
                if path.is_file() {
                    read_font_file(&path)?;
                    Ok(FontSpec::File(path))
                } else {
                    anyhow::bail!(
                        "unknown font '{trimmed}' (expected sans, mono or a path to a font file)"
                    )
                }
            }
        }
    }
}

/// Read a font file, rejecting anything egui would fail to parse.
fn read_font_file(path: &Path) -> anyhow::Result<Vec<u8>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read font file {}", path.display()))?;
    ab_glyph::FontRef::try_from_slice(&bytes)
        .map_err(|e| anyhow::anyhow!("{} is not a TrueType/OpenType font: {e}", path.display()))?;
    Ok(bytes)
}

impl std::fmt::Display for FontSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontSpec::Proportional => write!(f, "sans"),
            FontSpec::Monospace => write!(f, "mono"),
            FontSpec::File(path) => write!(f, "{}", path.display()),
        }
    }
}
