//! Editing mode selection.

/// Editing mode of the ink surface.
///
/// Determines which session kind a pointer gesture activates. Exactly one of
/// the stroke/erase sessions can be live at a time; Drag activates neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditingMode {
    /// Pass-through: pointer events pan the host surface natively
    Drag,
    /// Pointer gestures capture freehand strokes (default)
    #[default]
    Draw,
    /// Pointer gestures erase strokes by proximity
    Erase,
}

impl EditingMode {
    /// Parses a mode name as used by the CLI and traces.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "drag" => Some(Self::Drag),
            "draw" => Some(Self::Draw),
            "erase" => Some(Self::Erase),
            _ => None,
        }
    }

    /// The canonical lowercase name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Drag => "drag",
            Self::Draw => "draw",
            Self::Erase => "erase",
        }
    }
}
