// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG painter for `plotkit_demo`.

use std::fmt::Write as _;

use kurbo::{Point, Rect};
use peniko::Brush;
use plotkit_core::{Painter, StrokeStyle};

/// Collects painter calls as SVG elements.
#[derive(Debug, Default)]
pub(crate) struct SvgPainter {
    pen: Option<StrokeStyle>,
    brush: Option<Brush>,
    elements: Vec<String>,
}

impl SvgPainter {
    /// Adds a text label (the painter interface has no text).
    pub(crate) fn label(&mut self, pos: Point, font_size: f64, text: &str) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}" font-size="{font_size}" font-family="sans-serif">{}</text>"#,
            pos.x,
            pos.y,
            escape_xml(text)
        ));
    }

    pub(crate) fn to_svg_string(&self, view_box: Rect) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );
        for element in &self.elements {
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    fn push_shape(&mut self, tag: &str, geometry: String) {
        let mut element = format!("<{tag} {geometry}");
        match &self.brush {
            Some(brush) => write_paint_attr(&mut element, "fill", brush),
            None => element.push_str(r#" fill="none""#),
        }
        match &self.pen {
            Some(pen) => {
                write_paint_attr(&mut element, "stroke", &pen.brush);
                let _ = write!(element, r#" stroke-width="{}""#, pen.stroke_width);
            }
            None => element.push_str(r#" stroke="none""#),
        }
        element.push_str("/>");
        self.elements.push(element);
    }
}

impl Painter for SvgPainter {
    fn set_pen(&mut self, pen: Option<&StrokeStyle>) {
        self.pen = pen.cloned();
    }

    fn set_brush(&mut self, brush: Option<&Brush>) {
        self.brush = brush.cloned();
    }

    fn draw_polygon(&mut self, points: &[Point]) {
        self.push_shape("polygon", format!(r#"points="{}""#, points_attr(points)));
    }

    fn draw_polyline(&mut self, points: &[Point]) {
        self.push_shape("polyline", format!(r#"points="{}""#, points_attr(points)));
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.push_shape(
            "rect",
            format!(
                r#"x="{}" y="{}" width="{}" height="{}""#,
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height()
            ),
        );
    }
}

fn points_attr(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:.2},{:.2}", p.x, p.y);
    }
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o:.3}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
