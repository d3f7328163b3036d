use rand::Rng;

use crate::render::color::Rgba;
use crate::render::surface::Surface;
use crate::scene::Bounds;

/// Short horizontal streak racing rightward.
#[derive(Debug, Clone)]
pub struct WindStreak {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub speed: f32,
    pub opacity: f32,
}

const STREAK_COLOR: Rgba = Rgba::rgba(255, 255, 255, 0.6);

pub fn seed(rng: &mut impl Rng, bounds: Bounds) -> Vec<WindStreak> {
    (0..30)
        .map(|_| WindStreak {
            x: rng.random_range(0.0..bounds.width),
            y: rng.random_range(0.0..bounds.height),
            length: 20.0 + rng.random_range(0.0..40.0),
            speed: 8.0 + rng.random_range(0.0..12.0),
            opacity: 0.3 + rng.random_range(0.0..0.4),
        })
        .collect()
}

/// Race right; recycle past the edge at a fresh random height.
pub fn update_and_draw(
    streaks: &mut [WindStreak],
    bounds: Bounds,
    rng: &mut impl Rng,
    fade: f32,
    surface: &mut dyn Surface,
) {
    for streak in streaks.iter_mut() {
        streak.x += streak.speed;
        if streak.x > bounds.width {
            streak.x = -streak.length;
            streak.y = rng.random_range(0.0..bounds.height);
        }

        surface.set_alpha(fade * streak.opacity);
        surface.stroke_line(
            streak.x,
            streak.y,
            streak.x + streak.length,
            streak.y,
            2.0,
            STREAK_COLOR,
        );
    }
}
