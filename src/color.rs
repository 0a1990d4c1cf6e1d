/// Group colors and the palette new groups draw from
use log::warn;
use serde::{Deserialize, Serialize};

/// Colors accepted by `tabGroups.update`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupColor {
    Grey,
    Blue,
    Red,
    Yellow,
    Green,
    Pink,
    Purple,
    Cyan,
    Orange,
}

const DEFAULT_PALETTE: [GroupColor; 8] = [
    GroupColor::Blue,
    GroupColor::Red,
    GroupColor::Yellow,
    GroupColor::Green,
    GroupColor::Pink,
    GroupColor::Purple,
    GroupColor::Cyan,
    GroupColor::Orange,
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Vec<GroupColor>")]
pub struct ColorPalette {
    colors: Vec<GroupColor>,
}

impl ColorPalette {
    /// An empty list falls back to the default palette.
    pub fn new(colors: Vec<GroupColor>) -> ColorPalette {
        if colors.is_empty() {
            return ColorPalette::default();
        }
        ColorPalette { colors }
    }

    pub fn colors(&self) -> &[GroupColor] {
        &self.colors
    }

    /// Uniformly random palette entry.
    pub fn pick(&self) -> GroupColor {
        let mut seed = [0u8; 4];
        if let Err(e) = getrandom::getrandom(&mut seed) {
            warn!("No randomness for group color, using first palette entry: {}", e);
        }
        self.pick_with(u32::from_le_bytes(seed))
    }

    pub fn pick_with(&self, roll: u32) -> GroupColor {
        self.colors[roll as usize % self.colors.len()]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        ColorPalette {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl From<Vec<GroupColor>> for ColorPalette {
    fn from(colors: Vec<GroupColor>) -> Self {
        ColorPalette::new(colors)
    }
}
