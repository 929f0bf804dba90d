use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
    /// `rgba(r, g, b, a)` with 0..=255 channels and 0..=1 alpha.
    pub fn from_css(input: &str) -> ChartResult<Self> {
        let input = input.trim();
        let parsed = if let Some(hex) = input.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(body) = input
            .strip_prefix("rgba(")
            .or_else(|| input.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            parse_rgb_function(body)
        } else {
            None
        };

        let color = parsed.ok_or_else(|| {
            ChartError::InvalidData(format!("unsupported css color `{input}`"))
        })?;
        color.validate()?;
        Ok(color)
    }

    /// `#rrggbb`, ignoring alpha.
    #[must_use]
    pub fn to_hex_rgb(self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.red),
            channel(self.green),
            channel(self.blue)
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let nibble = |index: usize| {
        u8::from_str_radix(hex.get(index..=index)?, 16)
            .ok()
            .map(|v| v * 17)
    };
    let byte = |index: usize| u8::from_str_radix(hex.get(index..index + 2)?, 16).ok();
    let unit = |value: u8| f64::from(value) / 255.0;

    match hex.len() {
        3 => Some(Color::rgb(unit(nibble(0)?), unit(nibble(1)?), unit(nibble(2)?))),
        6 => Some(Color::rgb(unit(byte(0)?), unit(byte(2)?), unit(byte(4)?))),
        8 => Some(Color::rgba(
            unit(byte(0)?),
            unit(byte(2)?),
            unit(byte(4)?),
            unit(byte(6)?),
        )),
        _ => None,
    }
}

fn parse_rgb_function(body: &str) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let channel = |part: &str| {
        let value: f64 = part.parse().ok()?;
        (0.0..=255.0).contains(&value).then_some(value / 255.0)
    };
    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => Some(Color::rgba(
            channel(r)?,
            channel(g)?,
            channel(b)?,
            a.parse().ok()?,
        )),
        _ => None,
    }
}

/// Draw command for one straight line in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Stroke settings for a path outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStroke {
    pub color: Color,
    pub width: f64,
}

/// Draw command for a polyline or polygon.
///
/// A single-point path is a move-only command and draws nothing by itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub points: Vec<PlotPoint>,
    pub closed: bool,
    pub fill: Option<Color>,
    pub stroke: Option<PathStroke>,
}

impl PathPrimitive {
    #[must_use]
    pub fn polyline(points: Vec<PlotPoint>, stroke: PathStroke) -> Self {
        Self {
            points,
            closed: false,
            fill: None,
            stroke: Some(stroke),
        }
    }

    #[must_use]
    pub fn polygon(points: Vec<PlotPoint>, fill: Color) -> Self {
        Self {
            points,
            closed: true,
            fill: Some(fill),
            stroke: None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.is_empty() {
            return Err(ChartError::InvalidData(
                "path primitive must have at least one point".to_owned(),
            ));
        }
        if self
            .points
            .iter()
            .any(|point| !point.x.is_finite() || !point.y.is_finite())
        {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            validate_stroke_width(stroke.width)?;
            stroke.color.validate()?;
        }
        Ok(())
    }
}

/// Draw command for an axis-aligned filled rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "rect coordinates must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

fn validate_stroke_width(width: f64) -> ChartResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ChartError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn parses_short_and_long_hex() {
        let short = Color::from_css("#fff").expect("short");
        assert_eq!(short, Color::rgb(1.0, 1.0, 1.0));

        let long = Color::from_css("#ff000080").expect("long");
        assert_eq!(long.red, 1.0);
        assert!((long.alpha - 128.0 / 255.0).abs() <= 1e-12);
    }

    #[test]
    fn parses_rgb_functions() {
        let color = Color::from_css("rgba(0, 255, 0, 0.5)").expect("rgba");
        assert_eq!(color, Color::rgba(0.0, 1.0, 0.0, 0.5));
        assert_eq!(color.to_hex_rgb(), "#00ff00");
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(Color::from_css("tomato").is_err());
        assert!(Color::from_css("#12345").is_err());
        assert!(Color::from_css("rgb(300, 0, 0)").is_err());
    }
}
