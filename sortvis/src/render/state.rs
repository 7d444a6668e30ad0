use std::fmt;

/// Closed set of colors a bar can show. Applying a state replaces the
/// previous one; states never stack.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum VisualState {
    #[default]
    Neutral,
    /// Cursor or comparison highlight
    Compare,
    Swap,
    Minimum,
    Pivot,
    LeftBoundary,
    RightBoundary,
    /// Insertion sort's sorted prefix
    Sorted,
    /// Terminal state: the element is in its final place
    Finished,
}

impl VisualState {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Neutral => (0, 0, 0),
            Self::Compare => (253, 224, 71),
            Self::Swap => (34, 197, 94),
            Self::Minimum | Self::Pivot => (168, 85, 247),
            Self::LeftBoundary => (59, 130, 246),
            Self::RightBoundary => (236, 72, 153),
            Self::Sorted => (249, 115, 22),
            Self::Finished => (239, 68, 68),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Textual annotation attached to a single bar. A bar carries at most one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Marker {
    Minimum,
    Pivot,
    Left,
    Right,
    LeftRight,
}

impl Marker {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimum => "MINIMUM",
            Self::Pivot => "PIVOT",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::LeftRight => "LEFT & RIGHT",
        }
    }

    /// The color a bar takes while it carries this marker
    pub fn state(&self) -> VisualState {
        match self {
            Self::Minimum => VisualState::Minimum,
            Self::Pivot => VisualState::Pivot,
            Self::Left | Self::LeftRight => VisualState::LeftBoundary,
            Self::Right => VisualState::RightBoundary,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_finished_is_terminal() {
        assert!(VisualState::Finished.is_terminal());
        assert!(!VisualState::Sorted.is_terminal());
        assert!(!VisualState::default().is_terminal());
    }

    #[test]
    fn combined_pointer_marker() {
        assert_eq!(Marker::LeftRight.to_string(), "LEFT & RIGHT");
        assert_eq!(Marker::LeftRight.state(), VisualState::LeftBoundary);
        assert_eq!(Marker::Right.state(), VisualState::RightBoundary);
    }
}
