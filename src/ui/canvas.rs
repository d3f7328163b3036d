use ratatui::{
    Frame,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points},
};

use crate::app::state::AppState;
use crate::render::color::Rgba;
use crate::render::frame::DrawOp;
use crate::scene::Bounds;

/// Replay the engine's recorded frame onto a braille canvas.
///
/// The canvas is the terminal stand-in for a real raster surface, so the
/// replay approximates: gradients become banded background lines, fills
/// become row scans, shadows are dropped, and alpha becomes a blend
/// toward the current background tint.
pub fn render_scene(frame: &mut Frame, area: Rect, state: &AppState) {
    let bounds = state.engine.bounds();
    let ops = &state.frame.ops;
    // One scan row per braille dot row.
    let dot_rows = u32::from(area.height) * 4;
    let row_step = bounds.height / dot_rows.max(1) as f32;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, f64::from(bounds.width)])
        .y_bounds([0.0, f64::from(bounds.height)])
        .paint(|ctx| {
            let mut replay = Replay {
                ctx,
                bounds,
                row_step,
                alpha: 1.0,
                background: Rgba::rgb(0, 0, 0),
                rotations: Vec::new(),
                clips: Vec::new(),
            };
            replay.run(ops);
        });
    frame.render_widget(canvas, area);
}

struct Replay<'a, 'b> {
    ctx: &'a mut Context<'b>,
    bounds: Bounds,
    row_step: f32,
    alpha: f32,
    background: Rgba,
    rotations: Vec<(f32, f32, f32)>,
    clips: Vec<(f32, f32, f32)>,
}

impl Replay<'_, '_> {
    fn run(&mut self, ops: &[DrawOp]) {
        for op in ops {
            self.apply(op);
        }
    }

    fn apply(&mut self, op: &DrawOp) {
        match op {
            DrawOp::VerticalGradient { stops } => self.gradient(stops),
            DrawOp::Alpha(alpha) => self.alpha = *alpha,
            // No soft shadows on a character grid.
            DrawOp::Shadow { .. } | DrawOp::ShadowOff => {}
            DrawOp::FillCircle {
                x,
                y,
                radius,
                color,
            } => self.fill_circle(*x, *y, *radius, *color),
            DrawOp::StrokeCircle {
                x, y, radius, color, ..
            } => {
                let (cx, cy) = self.map(*x, *y);
                let circle = Circle {
                    x: cx,
                    y: cy,
                    radius: f64::from(*radius),
                    color: self.shade(*color),
                };
                self.ctx.draw(&circle);
            }
            DrawOp::RadialCircle {
                x,
                y,
                radius,
                highlight,
                stops,
            } => self.radial_circle(*x, *y, *radius, *highlight, stops),
            DrawOp::Blob { lobes, color } => {
                for (x, y, radius) in lobes {
                    self.fill_circle(*x, *y, *radius, *color);
                }
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                ..
            } => self.line(*x1, *y1, *x2, *y2, *color),
            DrawOp::Polyline { points, color, .. } => {
                for pair in points.windows(2) {
                    self.line(pair[0].0, pair[0].1, pair[1].0, pair[1].1, *color);
                }
            }
            DrawOp::ArcSegment {
                x,
                y,
                radius,
                start,
                end,
                color,
            } => self.arc_segment(*x, *y, *radius, *start, *end, *color),
            DrawOp::PushClipCircle { x, y, radius } => self.clips.push((*x, *y, *radius)),
            DrawOp::PopClip => {
                self.clips.pop();
            }
            DrawOp::PushRotation { x, y, angle } => self.rotations.push((*x, *y, *angle)),
            DrawOp::PopTransform => {
                self.rotations.pop();
            }
        }
    }

    /// Rotate through the transform stack (innermost first), then flip
    /// into the canvas's bottom-left origin.
    fn map(&self, x: f32, y: f32) -> (f64, f64) {
        let (mut px, mut py) = (x, y);
        for (ox, oy, angle) in self.rotations.iter().rev() {
            let (sin, cos) = angle.sin_cos();
            let (rx, ry) = (px * cos - py * sin, px * sin + py * cos);
            px = rx + ox;
            py = ry + oy;
        }
        (f64::from(px), f64::from(self.bounds.height - py))
    }

    fn shade(&self, color: Rgba) -> Color {
        let alpha = (self.alpha * color.a).clamp(0.0, 1.0);
        let blended = self.background.lerp(color, alpha);
        Color::Rgb(blended.r, blended.g, blended.b)
    }

    fn gradient(&mut self, stops: &[Rgba]) {
        let Some(first) = stops.first() else {
            return;
        };
        self.background = stops[stops.len() / 2];

        let dot_rows = (self.bounds.height / self.row_step).round().max(1.0) as u32;
        for row in 0..dot_rows {
            let t = row as f32 / (dot_rows - 1).max(1) as f32;
            let color = sample_stops(stops, t).unwrap_or(*first);
            let y = f64::from(self.bounds.height - t * self.bounds.height);
            let line = CanvasLine {
                x1: 0.0,
                y1: y,
                x2: f64::from(self.bounds.width),
                y2: y,
                color: Color::Rgb(color.r, color.g, color.b),
            };
            self.ctx.draw(&line);
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        let shade = self.shade(color);
        if radius < self.row_step {
            let (px, py) = self.map(x, y);
            let points = Points {
                coords: &[(px, py)],
                color: shade,
            };
            self.ctx.draw(&points);
            return;
        }

        let steps = (radius * 2.0 / self.row_step).ceil() as u32;
        for i in 0..=steps {
            let dy = -radius + i as f32 * self.row_step;
            if dy.abs() > radius {
                continue;
            }
            let half = (radius * radius - dy * dy).sqrt();
            let Some((x_from, x_to)) = self.clip_span(x - half, x + half, y + dy) else {
                continue;
            };
            let (x1, y1) = self.map(x_from, y + dy);
            let (x2, y2) = self.map(x_to, y + dy);
            let line = CanvasLine {
                x1,
                y1,
                x2,
                y2,
                color: shade,
            };
            self.ctx.draw(&line);
        }
    }

    /// Intersect a horizontal span with every active clip circle.
    fn clip_span(&self, mut from: f32, mut to: f32, y: f32) -> Option<(f32, f32)> {
        for (cx, cy, cr) in &self.clips {
            let dy = y - cy;
            if dy.abs() > *cr {
                return None;
            }
            let reach = (cr * cr - dy * dy).sqrt();
            from = from.max(cx - reach);
            to = to.min(cx + reach);
            if from >= to {
                return None;
            }
        }
        Some((from, to))
    }

    /// Concentric-disc approximation of a radial gradient: outermost
    /// stop first, inner stops shifted toward the highlight.
    fn radial_circle(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        highlight: (f32, f32),
        stops: &[(f32, Rgba)],
    ) {
        for (position, color) in stops.iter().rev() {
            let r = radius * position.max(0.2);
            let shift = 1.0 - position;
            self.fill_circle(x + highlight.0 * shift, y + highlight.1 * shift, r, *color);
        }
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgba) {
        let (ax, ay) = self.map(x1, y1);
        let (bx, by) = self.map(x2, y2);
        let line = CanvasLine {
            x1: ax,
            y1: ay,
            x2: bx,
            y2: by,
            color: self.shade(color),
        };
        self.ctx.draw(&line);
    }

    /// Chord-closed arc fill. The shaded side is the half-plane the arc's
    /// midpoint direction points into, which covers the half-disc shapes
    /// the scene uses.
    fn arc_segment(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32, color: Rgba) {
        let end = if end < start {
            end + std::f32::consts::TAU
        } else {
            end
        };
        let mid = f32::midpoint(start, end);
        let (dir_x, dir_y) = (mid.cos(), mid.sin());
        let shade = self.shade(color);

        let steps = (radius * 2.0 / self.row_step).ceil() as u32;
        for i in 0..=steps {
            let dy = -radius + i as f32 * self.row_step;
            if dy.abs() > radius {
                continue;
            }
            let half = (radius * radius - dy * dy).sqrt();
            let Some((from, to)) = self.clip_span(x - half, x + half, y + dy) else {
                continue;
            };
            // Keep only the half-plane the arc faces.
            let horizontal = dir_x.abs() > dir_y.abs();
            let (from, to) = if horizontal && dir_x < 0.0 {
                (from, to.min(x))
            } else if horizontal {
                (from.max(x), to)
            } else if (dir_y < 0.0) == (dy > 0.0) {
                continue;
            } else {
                (from, to)
            };
            if from >= to {
                continue;
            }
            let (x1, y1) = self.map(from, y + dy);
            let (x2, y2) = self.map(to, y + dy);
            let line = CanvasLine {
                x1,
                y1,
                x2,
                y2,
                color: shade,
            };
            self.ctx.draw(&line);
        }
    }
}

/// Piecewise-linear sample of evenly spaced gradient stops.
fn sample_stops(stops: &[Rgba], t: f32) -> Option<Rgba> {
    match stops {
        [] => None,
        [only] => Some(*only),
        _ => {
            let span = (stops.len() - 1) as f32;
            let position = t.clamp(0.0, 1.0) * span;
            let index = (position.floor() as usize).min(stops.len() - 2);
            let local = position - index as f32;
            Some(stops[index].lerp(stops[index + 1], local))
        }
    }
}
