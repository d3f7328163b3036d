use rand::Rng;

use crate::render::color::Rgba;
use crate::render::surface::Surface;

/// Ephemeral droplet thrown up where precipitation hits the ground.
///
/// Unlike the ambient pools, splashes live and die: `life` drains by
/// `decay` every frame and the splash is dropped the first frame it
/// reaches zero.
#[derive(Debug, Clone)]
pub struct Splash {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: f32,
    pub decay: f32,
    pub size: f32,
    pub is_ice: bool,
}

/// Per-family splash physics and tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashStyle {
    Rain,
    Drizzle,
    Freezing,
}

impl SplashStyle {
    fn gravity(self) -> f32 {
        match self {
            Self::Rain => 0.3,
            Self::Drizzle => 0.2,
            Self::Freezing => 0.25,
        }
    }

    fn alpha_scale(self) -> f32 {
        match self {
            Self::Rain => 0.6,
            Self::Drizzle => 0.4,
            Self::Freezing => 0.7,
        }
    }

    fn color(self, is_ice: bool) -> Rgba {
        match self {
            Self::Rain => Rgba::rgba(173, 216, 230, 0.8),
            Self::Drizzle => Rgba::rgba(173, 216, 230, 0.6),
            Self::Freezing if is_ice => Rgba::rgba(200, 220, 255, 0.9),
            Self::Freezing => Rgba::rgba(173, 216, 230, 0.8),
        }
    }
}

/// 3-7 droplets, scaled by `intensity`.
pub fn burst_rain(pool: &mut Vec<Splash>, rng: &mut impl Rng, x: f32, y: f32, intensity: f32) {
    let count = ((3.0 + rng.random_range(0.0f32..4.0)).floor() * intensity) as usize;
    for _ in 0..count {
        pool.push(Splash {
            x: x + rng.random_range(-5.0..5.0),
            y,
            vx: rng.random_range(-3.0..3.0) * intensity,
            vy: -rng.random_range(0.0..4.0) * intensity - 2.0,
            life: 1.0,
            decay: 0.05 + rng.random_range(0.0..0.03),
            size: 1.0 + rng.random_range(0.0..2.0),
            is_ice: false,
        });
    }
}

/// 1-3 gentler droplets.
pub fn burst_drizzle(pool: &mut Vec<Splash>, rng: &mut impl Rng, x: f32, y: f32) {
    let count = (1.0f32 + rng.random_range(0.0..2.0)).floor() as usize;
    for _ in 0..count {
        pool.push(Splash {
            x: x + rng.random_range(-2.5..2.5),
            y,
            vx: rng.random_range(-1.5..1.5),
            vy: -rng.random_range(0.0..2.0) - 1.0,
            life: 1.0,
            decay: 0.08 + rng.random_range(0.0..0.04),
            size: 0.5 + rng.random_range(0.0..1.0),
            is_ice: false,
        });
    }
}

/// 2-4 sharp pellet fragments for an ice impact.
pub fn burst_ice(pool: &mut Vec<Splash>, rng: &mut impl Rng, x: f32, y: f32) {
    let count = (2.0f32 + rng.random_range(0.0..3.0)).floor() as usize;
    for _ in 0..count {
        pool.push(Splash {
            x: x + rng.random_range(-4.0..4.0),
            y,
            vx: rng.random_range(-2.5..2.5),
            vy: -rng.random_range(0.0..3.0) - 1.0,
            life: 1.0,
            decay: 0.06 + rng.random_range(0.0..0.03),
            size: 0.8 + rng.random_range(0.0..1.2),
            is_ice: true,
        });
    }
}

/// Integrate, age, draw, and drop the dead. Drawn alpha and radius both
/// shrink with remaining life.
pub fn update_and_draw(
    pool: &mut Vec<Splash>,
    style: SplashStyle,
    fade: f32,
    surface: &mut dyn Surface,
) {
    let gravity = style.gravity();
    pool.retain_mut(|splash| {
        splash.x += splash.vx;
        splash.y += splash.vy;
        splash.vy += gravity;
        splash.life -= splash.decay;
        if splash.life <= 0.0 {
            return false;
        }

        surface.set_alpha(fade * splash.life * style.alpha_scale());
        surface.fill_circle(
            splash.x,
            splash.y,
            splash.size * splash.life,
            style.color(splash.is_ice),
        );
        true
    });
}
