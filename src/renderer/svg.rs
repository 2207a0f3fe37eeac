//! SVG serialization of recorded draw commands.

use super::{DrawCommand, PaintContext, Stroke};

/// Serialize everything recorded in `ctx` into a standalone SVG document
/// with a `width × height` viewport.
pub fn to_svg(ctx: &PaintContext, width: f32, height: f32) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );

    for entry in ctx.entries() {
        let transform = if entry.transform.is_identity() {
            String::new()
        } else {
            format!(r#" transform="{}""#, entry.transform.to_svg_matrix())
        };

        match &entry.command {
            DrawCommand::StrokeCircle {
                center,
                radius,
                stroke,
            } => {
                svg.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{}" fill="none"{}{}/>"#,
                    center.0,
                    center.1,
                    radius,
                    stroke_attributes(stroke),
                    transform
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

fn stroke_attributes(stroke: &Stroke) -> String {
    let mut attrs = format!(
        r#" stroke="{}" stroke-width="{}" stroke-linecap="{}""#,
        stroke.color.to_hex_string(),
        stroke.width,
        stroke.cap.as_svg()
    );
    if stroke.color.a < 1.0 {
        attrs.push_str(&format!(r#" stroke-opacity="{}""#, stroke.color.a.max(0.0)));
    }
    if let Some(dash) = stroke.dash {
        attrs.push_str(&format!(
            r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
            dash.length, dash.offset
        ));
    }
    attrs
}
