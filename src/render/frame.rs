use crate::render::color::Rgba;
use crate::render::surface::Surface;

/// One recorded drawing call.
///
/// The engine renders a tick into a [`SceneFrame`]; the terminal layer
/// replays the ops onto a ratatui canvas, and tests assert on them
/// directly. Field order mirrors the argument order of the matching
/// [`Surface`] method.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    VerticalGradient {
        stops: Vec<Rgba>,
    },
    Alpha(f32),
    Shadow {
        color: Rgba,
        blur: f32,
    },
    ShadowOff,
    FillCircle {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgba,
    },
    StrokeCircle {
        x: f32,
        y: f32,
        radius: f32,
        width: f32,
        color: Rgba,
    },
    RadialCircle {
        x: f32,
        y: f32,
        radius: f32,
        highlight: (f32, f32),
        stops: Vec<(f32, Rgba)>,
    },
    Blob {
        lobes: Vec<(f32, f32, f32)>,
        color: Rgba,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: Rgba,
    },
    Polyline {
        points: Vec<(f32, f32)>,
        width: f32,
        color: Rgba,
    },
    ArcSegment {
        x: f32,
        y: f32,
        radius: f32,
        start: f32,
        end: f32,
        color: Rgba,
    },
    PushClipCircle {
        x: f32,
        y: f32,
        radius: f32,
    },
    PopClip,
    PushRotation {
        x: f32,
        y: f32,
        angle: f32,
    },
    PopTransform,
}

impl DrawOp {
    /// Stable name used by the probe report.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::VerticalGradient { .. } => "gradient",
            Self::Alpha(_) => "alpha",
            Self::Shadow { .. } => "shadow",
            Self::ShadowOff => "shadow-off",
            Self::FillCircle { .. } => "fill-circle",
            Self::StrokeCircle { .. } => "stroke-circle",
            Self::RadialCircle { .. } => "radial-circle",
            Self::Blob { .. } => "blob",
            Self::Line { .. } => "line",
            Self::Polyline { .. } => "polyline",
            Self::ArcSegment { .. } => "arc-segment",
            Self::PushClipCircle { .. } => "clip-push",
            Self::PopClip => "clip-pop",
            Self::PushRotation { .. } => "rotate-push",
            Self::PopTransform => "rotate-pop",
        }
    }
}

/// Recording [`Surface`]: the production drawing target.
///
/// Cleared and refilled every tick, then replayed by the presenter.
#[derive(Debug, Default)]
pub struct SceneFrame {
    pub ops: Vec<DrawOp>,
}

impl SceneFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of ops matching `name` (see [`DrawOp::name`]).
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.ops.iter().filter(|op| op.name() == name).count()
    }
}

impl Surface for SceneFrame {
    fn clear(&mut self) {
        self.ops.clear();
    }

    fn fill_vertical_gradient(&mut self, stops: &[Rgba]) {
        self.ops.push(DrawOp::VerticalGradient {
            stops: stops.to_vec(),
        });
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ops.push(DrawOp::Alpha(alpha.clamp(0.0, 1.0)));
    }

    fn set_shadow(&mut self, color: Rgba, blur: f32) {
        self.ops.push(DrawOp::Shadow { color, blur });
    }

    fn clear_shadow(&mut self) {
        self.ops.push(DrawOp::ShadowOff);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::FillCircle {
            x,
            y,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, width: f32, color: Rgba) {
        self.ops.push(DrawOp::StrokeCircle {
            x,
            y,
            radius,
            width,
            color,
        });
    }

    fn fill_radial_circle(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        highlight: (f32, f32),
        stops: &[(f32, Rgba)],
    ) {
        self.ops.push(DrawOp::RadialCircle {
            x,
            y,
            radius,
            highlight,
            stops: stops.to_vec(),
        });
    }

    fn fill_blob(&mut self, lobes: &[(f32, f32, f32)], color: Rgba) {
        self.ops.push(DrawOp::Blob {
            lobes: lobes.to_vec(),
            color,
        });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Rgba) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        });
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: Rgba) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_arc_segment(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32, color: Rgba) {
        self.ops.push(DrawOp::ArcSegment {
            x,
            y,
            radius,
            start,
            end,
            color,
        });
    }

    fn push_clip_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.ops.push(DrawOp::PushClipCircle { x, y, radius });
    }

    fn pop_clip(&mut self) {
        self.ops.push(DrawOp::PopClip);
    }

    fn push_rotation(&mut self, x: f32, y: f32, angle: f32) {
        self.ops.push(DrawOp::PushRotation { x, y, angle });
    }

    fn pop_transform(&mut self) {
        self.ops.push(DrawOp::PopTransform);
    }
}
