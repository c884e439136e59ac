use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static GEOMETRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)x(\d+)\+(\d+)\+(\d+)$").expect("valid geometry regex"));

/// Window size and position in the X11 style `WxH+X+Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl Geometry {
    pub fn size(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }

    pub fn position(&self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }
}

impl FromStr for Geometry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || anyhow::anyhow!("couldn't parse geometry (WxH+X+Y): {s}");
        let caps = GEOMETRY_RE.captures(s.trim()).ok_or_else(err)?;
        let num = |i: usize| caps[i].parse::<u32>().map_err(|_| err());
        Ok(Geometry {
            width: num(1)?,
            height: num(2)?,
            x: num(3)?,
            y: num(4)?,
        })
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}
