use std::fmt::Write;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PathPrimitive, RenderFrame, Renderer, TextHAlign};

const PLOT_CLIP_ID: &str = "plot-clip";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub paths_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderer producing a standalone SVG document per frame.
///
/// Series geometry is grouped under a clip path covering the plot so
/// partially visible edge samples never spill into the axis area.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Markup of the last rendered frame.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    fn write_frame(&self, frame: &RenderFrame) -> Result<(String, SvgRenderStats), std::fmt::Error> {
        let mut out = String::new();
        let mut stats = SvgRenderStats::default();
        let (width, height) = (frame.viewport.width, frame.viewport.height);

        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;

        if let Some(clip) = frame.plot_clip {
            write!(
                out,
                r#"<defs><clipPath id="{PLOT_CLIP_ID}"><rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/></clipPath></defs>"#,
                clip.left, clip.top, clip.width, clip.height
            )?;
        }

        for line in &frame.lines {
            write!(
                out,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke-width="{:.2}"{}/>"#,
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                line.stroke_width,
                paint_attrs("stroke", line.color)
            )?;
            stats.lines_drawn += 1;
        }

        if frame.plot_clip.is_some() {
            write!(out, r#"<g clip-path="url(#{PLOT_CLIP_ID})">"#)?;
        } else {
            out.push_str("<g>");
        }
        for rect in &frame.rects {
            write!(
                out,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"{}/>"#,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                paint_attrs("fill", rect.fill)
            )?;
            stats.rects_drawn += 1;
        }
        for path in &frame.paths {
            write_path(&mut out, path)?;
            stats.paths_drawn += 1;
        }
        out.push_str("</g>");

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            write!(
                out,
                r#"<text x="{:.2}" y="{:.2}" font-size="{:.2}" text-anchor="{anchor}"{}>{}</text>"#,
                text.x,
                text.y,
                text.font_size_px,
                paint_attrs("fill", text.color),
                escape_text(&text.text)
            )?;
            stats.texts_drawn += 1;
        }

        out.push_str("</svg>");
        Ok((out, stats))
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let (document, stats) = self
            .write_frame(frame)
            .map_err(|err| map_backend_error("failed to write svg document", err))?;
        self.document = document;
        self.last_stats = stats;
        Ok(())
    }
}

/// Path data (`d` attribute) for a primitive: `M` then `L` per vertex.
#[must_use]
pub fn svg_path_data(path: &PathPrimitive) -> String {
    let mut data = String::with_capacity(path.points.len() * 16);
    for (position, point) in path.points.iter().enumerate() {
        let command = if position == 0 { 'M' } else { 'L' };
        if position > 0 {
            data.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(data, "{command}{:.2},{:.2}", point.x, point.y);
    }
    if path.closed {
        data.push_str(" Z");
    }
    data
}

fn write_path(out: &mut String, path: &PathPrimitive) -> std::fmt::Result {
    write!(out, r#"<path d="{}""#, svg_path_data(path))?;
    match path.fill {
        Some(fill) => out.push_str(&paint_attrs("fill", fill)),
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = path.stroke {
        write!(
            out,
            r#"{} stroke-width="{:.2}" stroke-linejoin="round" stroke-linecap="round""#,
            paint_attrs("stroke", stroke.color),
            stroke.width
        )?;
    }
    out.push_str("/>");
    Ok(())
}

fn paint_attrs(kind: &str, color: Color) -> String {
    if color.alpha >= 1.0 {
        format!(r#" {kind}="{}""#, color.to_hex_rgb())
    } else {
        format!(
            r#" {kind}="{}" {kind}-opacity="{:.3}""#,
            color.to_hex_rgb(),
            color.alpha
        )
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn map_backend_error(prefix: &str, err: std::fmt::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{SvgRenderer, escape_text, svg_path_data};
    use crate::core::{PlotArea, PlotPoint, Viewport};
    use crate::render::{
        Color, LinePrimitive, PathPrimitive, PathStroke, RectPrimitive, RenderFrame, Renderer,
        TextHAlign, TextPrimitive,
    };

    #[test]
    fn frame_primitives_are_written_in_paint_order() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let frame = RenderFrame::new(Viewport::new(120, 80))
            .with_plot_clip(PlotArea {
                left: 20.0,
                top: 5.0,
                width: 90.0,
                height: 50.0,
            })
            .with_line(LinePrimitive::new(20.0, 30.0, 110.0, 30.0, 1.0, black))
            .with_rect(RectPrimitive::new(30.0, 20.0, 10.0, 35.0, black.with_alpha(0.5)))
            .with_path(PathPrimitive::polyline(
                vec![PlotPoint::new(20.0, 40.0), PlotPoint::new(110.0, 10.0)],
                PathStroke {
                    color: black,
                    width: 2.0,
                },
            ))
            .with_text(TextPrimitive::new("12", 14.0, 33.0, 11.0, black, TextHAlign::Right));

        let mut renderer = SvgRenderer::new();
        renderer.render(&frame).expect("render");
        assert_eq!(renderer.backend_name(), "svg");
        let stats = renderer.last_stats();
        assert_eq!(
            (stats.lines_drawn, stats.rects_drawn, stats.paths_drawn, stats.texts_drawn),
            (1, 1, 1, 1)
        );

        let document = renderer.into_document();
        let line_at = document.find("<line").expect("line");
        let group_at = document.find("<g clip-path").expect("clip group");
        let text_at = document.find("<text").expect("text");
        assert!(line_at < group_at && group_at < text_at);
        assert!(document.contains(r#"fill-opacity="0.500""#));
        assert!(document.contains(r#"text-anchor="end""#));
    }

    #[test]
    fn closed_polygon_path_ends_with_z() {
        let path = PathPrimitive::polygon(
            vec![
                PlotPoint::new(0.0, 10.0),
                PlotPoint::new(5.0, 0.0),
                PlotPoint::new(10.0, 10.0),
            ],
            Color::rgb(0.0, 0.0, 0.0),
        );
        assert_eq!(svg_path_data(&path), "M0.00,10.00 L5.00,0.00 L10.00,10.00 Z");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_text("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
