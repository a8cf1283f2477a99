use crate::guides::highlight::Highlight;
use crate::guides::model::{Guide, GuideColor, LineStyle, Orientation};
use eframe::egui::{self, Color32, Pos2, Stroke};

pub fn to_color32(color: GuideColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Splits a line of `length` into the "on" runs of `style`'s dash pattern,
/// scaled by `thickness` like a cosmetic pen.
pub fn dash_segments(length: f32, style: LineStyle, thickness: f32) -> Vec<(f32, f32)> {
    let pattern = style.dash_pattern();
    if pattern.is_empty() || length <= 0.0 {
        return vec![(0.0, length.max(0.0))];
    }

    let unit = thickness.max(1.0);
    let mut segments = Vec::new();
    let mut offset = 0.0;
    let mut i = 0;
    while offset < length {
        let run = pattern[i % pattern.len()] * unit;
        if i % 2 == 0 {
            segments.push((offset, (offset + run).min(length)));
        }
        offset += run;
        i += 1;
    }
    segments
}

/// Paints guides in collection order, then the highlight on top.
/// Guide coordinates are physical pixels; the painter works in points.
pub struct GuidePainter<'a> {
    painter: &'a egui::Painter,
    pixels_per_point: f32,
}

impl<'a> GuidePainter<'a> {
    pub fn new(painter: &'a egui::Painter, pixels_per_point: f32) -> Self {
        Self {
            painter,
            pixels_per_point: pixels_per_point.max(f32::EPSILON),
        }
    }

    pub fn paint(&self, guides: &[Guide], highlight: Option<Highlight>) {
        for guide in guides {
            self.paint_guide(guide);
        }
        if let Some(highlight) = highlight {
            if let Some(guide) = guides.get(highlight.index) {
                self.paint_line(
                    guide.orientation,
                    guide.position,
                    highlight.width,
                    to_color32(highlight.color),
                    LineStyle::Solid,
                );
            }
        }
    }

    fn paint_guide(&self, guide: &Guide) {
        self.paint_line(
            guide.orientation,
            guide.position,
            guide.thickness,
            to_color32(guide.color),
            guide.line_style,
        );
    }

    fn paint_line(
        &self,
        orientation: Orientation,
        position: i32,
        thickness: u32,
        color: Color32,
        style: LineStyle,
    ) {
        let rect = self.painter.clip_rect();
        let ppp = self.pixels_per_point;
        let at = (position as f32 + 0.5) / ppp;
        let stroke = Stroke::new(thickness as f32 / ppp, color);
        let (start, length) = match orientation {
            Orientation::Vertical => (rect.top(), rect.height()),
            Orientation::Horizontal => (rect.left(), rect.width()),
        };
        let point = |along: f32| match orientation {
            Orientation::Vertical => Pos2::new(at, start + along),
            Orientation::Horizontal => Pos2::new(start + along, at),
        };

        for (from, to) in dash_segments(length * ppp, style, thickness as f32) {
            self.painter
                .line_segment([point(from / ppp), point(to / ppp)], stroke);
        }
    }
}
