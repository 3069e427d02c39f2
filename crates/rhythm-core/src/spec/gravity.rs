use std::{fmt, str::FromStr};

/// Orientation and alignment of a repeating line layer.
///
/// [`Top`](Gravity::Top) and [`Bottom`](Gravity::Bottom) produce horizontal
/// lines, [`Left`](Gravity::Left) and [`Right`](Gravity::Right) produce
/// vertical lines. The variant also decides which edge the steps are counted
/// from. Only physical directions exist; there is no start/end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gravity {
    Top,
    Bottom,
    Left,
    Right,
}

impl Gravity {
    /// Returns true for gravities that produce horizontal lines
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Returns the lowercase name of this gravity
    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gravity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(format!(
                "invalid gravity `{s}`, valid values: top, bottom, left, right"
            )),
        }
    }
}
