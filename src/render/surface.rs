use crate::render::color::Rgba;

/// Drawing vocabulary the scene engine emits against.
///
/// Coordinates are surface pixels, origin top-left, y growing downward.
/// The engine is the only caller; implementations decide how (or whether)
/// to honor soft effects such as shadows. `push_*`/`pop_*` pairs scope
/// clip regions and rotations the way a 2D canvas save/restore would.
pub trait Surface {
    /// Drop everything drawn so far; called once at the top of each tick.
    fn clear(&mut self);

    /// Full-surface vertical gradient, stops spread evenly top to bottom.
    fn fill_vertical_gradient(&mut self, stops: &[Rgba]);

    /// Global compositing alpha applied to subsequent draws.
    fn set_alpha(&mut self, alpha: f32);

    fn set_shadow(&mut self, color: Rgba, blur: f32);
    fn clear_shadow(&mut self);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, width: f32, color: Rgba);

    /// Disc filled with a radial gradient whose center is shifted by
    /// `highlight` relative to the disc center (gives a lit-sphere look).
    fn fill_radial_circle(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        highlight: (f32, f32),
        stops: &[(f32, Rgba)],
    );

    /// Union of several discs filled as one shape, so overlaps do not
    /// double-composite. `lobes` entries are (x, y, radius).
    fn fill_blob(&mut self, lobes: &[(f32, f32, f32)], color: Rgba);

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Rgba);

    fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: Rgba);

    /// Arc from `start` to `end` (radians, clockwise from +x), closed by
    /// its chord and filled. A half-circle span yields a half-disc.
    fn fill_arc_segment(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32, color: Rgba);

    fn push_clip_circle(&mut self, x: f32, y: f32, radius: f32);
    fn pop_clip(&mut self);

    /// Rotate subsequent draws by `angle` around (x, y); coordinates
    /// inside the scope are local to that origin.
    fn push_rotation(&mut self, x: f32, y: f32, angle: f32);
    fn pop_transform(&mut self);
}
