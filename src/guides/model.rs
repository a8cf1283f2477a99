use serde::{Deserialize, Serialize};

pub const MIN_THICKNESS: u32 = 1;
pub const MAX_THICKNESS: u32 = 20;
pub const DEFAULT_THICKNESS: u32 = 2;
pub const DEFAULT_GUIDE_COLOR: GuideColor = GuideColor::rgba(255, 140, 0, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "h")]
    Horizontal,
}

impl Orientation {
    /// Coordinate of `point` along the axis this guide is positioned on.
    pub fn axis_coord(self, point: (i32, i32)) -> i32 {
        match self {
            Self::Vertical => point.0,
            Self::Horizontal => point.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    #[serde(rename = "Dash-Dot")]
    DashDot,
    #[serde(rename = "Dash-Dot-Dot")]
    DashDotDot,
}

impl LineStyle {
    pub const ALL: [LineStyle; 5] = [
        LineStyle::Solid,
        LineStyle::Dashed,
        LineStyle::Dotted,
        LineStyle::DashDot,
        LineStyle::DashDotDot,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Dashed => "Dashed",
            Self::Dotted => "Dotted",
            Self::DashDot => "Dash-Dot",
            Self::DashDotDot => "Dash-Dot-Dot",
        }
    }


    /// On/off run lengths in multiples of the line thickness. Empty means solid.
    pub fn dash_pattern(self) -> &'static [f32] {
        match self {
            Self::Solid => &[],
            Self::Dashed => &[4.0, 2.0],
            Self::Dotted => &[1.0, 2.0],
            Self::DashDot => &[4.0, 2.0, 1.0, 2.0],
            Self::DashDotDot => &[4.0, 2.0, 1.0, 2.0, 1.0, 2.0],
        }
    }
}

/// 8-bit RGBA colour, persisted as a `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct GuideColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl GuideColor {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_rgba_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for GuideColor {
    fn default() -> Self {
        DEFAULT_GUIDE_COLOR
    }
}

impl From<[u8; 4]> for GuideColor {
    fn from(color: [u8; 4]) -> Self {
        Self::rgba(color[0], color[1], color[2], color[3])
    }
}

impl From<GuideColor> for [u8; 4] {
    fn from(color: GuideColor) -> Self {
        color.to_rgba_array()
    }
}

pub fn clamp_thickness(thickness: u32) -> u32 {
    thickness.clamp(MIN_THICKNESS, MAX_THICKNESS)
}

/// Ambient styling applied to newly added guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideStyle {
    pub color: GuideColor,
    pub thickness: u32,
    pub line_style: LineStyle,
}

impl Default for GuideStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_GUIDE_COLOR,
            thickness: DEFAULT_THICKNESS,
            line_style: LineStyle::Solid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    pub orientation: Orientation,
    pub position: i32,
    pub color: GuideColor,
    pub thickness: u32,
    pub line_style: LineStyle,
}

impl Guide {
    pub fn new(orientation: Orientation, position: i32, style: GuideStyle) -> Self {
        Self {
            orientation,
            position,
            color: style.color,
            thickness: clamp_thickness(style.thickness),
            line_style: style.line_style,
        }
    }

    pub fn vertical(position: i32) -> Self {
        Self::new(Orientation::Vertical, position, GuideStyle::default())
    }

    pub fn horizontal(position: i32) -> Self {
        Self::new(Orientation::Horizontal, position, GuideStyle::default())
    }

    pub fn style(&self) -> GuideStyle {
        GuideStyle {
            color: self.color,
            thickness: self.thickness,
            line_style: self.line_style,
        }
    }
}

/// Size of the overlay surface in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: i32,
    pub height: i32,
}

impl SurfaceSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn extent(self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }

    /// Clamps `position` into `0..=extent-1`; a degenerate surface clamps to 0.
    pub fn clamp_position(self, orientation: Orientation, position: i32) -> i32 {
        let max = self.extent(orientation).saturating_sub(1);
        position.min(max).max(0)
    }
}
