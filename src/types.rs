use crate::config::CELL_SIZE;
use crate::error::PayloadError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Top-left grid coordinate of a module footprint.
/// Signed so drops left of or above the workspace stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub col: i32,
    pub row: i32,
}

impl GridPos {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Pixel position of the top-left corner inside the workspace
    pub fn to_pixels(&self) -> Point {
        Point::new(self.col as f64 * CELL_SIZE, self.row as f64 * CELL_SIZE)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Identifier of a placed module, rendered as `m<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ModuleId(pub u64);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

impl FromStr for ModuleId {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('m')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(ModuleId)
            .ok_or_else(|| PayloadError::BadModuleId(s.to_string()))
    }
}

impl From<ModuleId> for String {
    fn from(id: ModuleId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ModuleId {
    type Error = PayloadError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Pot,
    Encoder,
    Button,
    Slider,
}

impl ModuleKind {
    /// Palette order
    pub const ALL: [ModuleKind; 4] = [
        ModuleKind::Pot,
        ModuleKind::Encoder,
        ModuleKind::Button,
        ModuleKind::Slider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Pot => "pot",
            ModuleKind::Encoder => "encoder",
            ModuleKind::Button => "button",
            ModuleKind::Slider => "slider",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModuleKind::Pot => "Potentiometer",
            ModuleKind::Encoder => "Encoder",
            ModuleKind::Button => "Button",
            ModuleKind::Slider => "Slider",
        }
    }

    /// CSS class applied to each sub-cell marker
    pub fn cell_class(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for ModuleKind {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PayloadError::UnknownKind(s.to_string()))
    }
}

/// A module instance on the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedModule {
    pub id: ModuleId,
    pub kind: ModuleKind,
    pub anchor: GridPos,
}

impl PlacedModule {
    pub fn new(id: ModuleId, kind: ModuleKind, anchor: GridPos) -> Self {
        Self { id, kind, anchor }
    }

    pub fn pixel_position(&self) -> Point {
        self.anchor.to_pixels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_id_text_form() {
        assert_eq!(ModuleId(7).to_string(), "m7");
        assert_eq!("m12".parse::<ModuleId>().unwrap(), ModuleId(12));
        assert!("12".parse::<ModuleId>().is_err());
        assert!("m".parse::<ModuleId>().is_err());
        assert!("m-1".parse::<ModuleId>().is_err());
        assert!("mx".parse::<ModuleId>().is_err());
    }

    #[test]
    fn test_module_kind_names() {
        for kind in ModuleKind::ALL {
            assert_eq!(kind.as_str().parse::<ModuleKind>().unwrap(), kind);
        }
        assert_eq!(ModuleKind::Pot.label(), "Potentiometer");
        assert!("knob".parse::<ModuleKind>().is_err());
    }

    #[test]
    fn test_pixel_position_is_derived_from_anchor() {
        let module = PlacedModule::new(ModuleId(0), ModuleKind::Slider, GridPos::new(3, 2));
        assert_eq!(module.pixel_position(), Point::new(180.0, 120.0));
    }
}
