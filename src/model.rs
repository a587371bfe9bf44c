//! Value types at the boundary with the PDF backend.
//!
//! The backend translates library-specific page objects into these types so
//! the statistics and sampling logic never touches the PDF library directly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Rgb {
    /// Create a color from normalized components.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Canonical uppercase `#RRGGBB` key for this color.
    ///
    /// Each channel is scaled by 255 and truncated toward zero, clamped to
    /// the valid byte range. Truncation (not rounding) is the pinned rule:
    /// (0.5, 0.5, 0.5) maps to `#7F7F7F`.
    pub fn to_hex(self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            Self::channel(self.r),
            Self::channel(self.g),
            Self::channel(self.b)
        )
    }

    fn channel(value: f32) -> u8 {
        (value * 255.0).clamp(0.0, 255.0) as u8
    }
}

/// A vector-graphics primitive with optional fill and stroke colors.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Drawing {
    /// Fill color, absent when the path is not filled.
    pub fill: Option<Rgb>,
    /// Stroke color, absent when the path is not stroked.
    pub stroke: Option<Rgb>,
}

/// A run of text sharing one font and one color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSpan {
    /// Font family name.
    pub font: String,
    /// Packed 24-bit RGB color (`0xRRGGBB`).
    pub color: u32,
    /// Literal text content.
    pub text: String,
}

impl TextSpan {
    /// Canonical uppercase `#RRGGBB` key for the span color, zero-padded.
    pub fn color_hex(&self) -> String {
        format!("#{:06X}", self.color & 0x00FF_FFFF)
    }

    /// Whether the span carries no visible text after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Page dimensions in PDF points (1 point = 1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Page width in points.
    pub width: f32,
    /// Page height in points.
    pub height: f32,
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} x {:.1} pt", self.width, self.height)
    }
}
