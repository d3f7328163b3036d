use rand::Rng;

use crate::domain::weather::FogDensity;
use crate::render::color::Rgba;
use crate::render::surface::Surface;
use crate::scene::Bounds;

/// Soft low-alpha disc drifting right with a slight vertical wobble.
/// Fog and haze share the record; the density picks size, count, and
/// tint.
#[derive(Debug, Clone)]
pub struct FogPuff {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    pub drift: f32,
    pub alpha: f32,
}

pub fn seed(density: FogDensity, rng: &mut impl Rng, bounds: Bounds) -> Vec<FogPuff> {
    let count = match density {
        FogDensity::Haze => 100,
        FogDensity::Fog => 60,
    };
    (0..count)
        .map(|_| match density {
            FogDensity::Haze => FogPuff {
                x: rng.random_range(0.0..bounds.width),
                y: rng.random_range(0.0..bounds.height),
                radius: 30.0 + rng.random_range(0.0..60.0),
                speed: 0.1 + rng.random_range(0.0..0.2),
                drift: rng.random_range(-0.05..0.05),
                alpha: 0.05 + rng.random_range(0.0..0.1),
            },
            FogDensity::Fog => FogPuff {
                x: rng.random_range(0.0..bounds.width),
                y: rng.random_range(0.0..bounds.height),
                radius: 60.0 + rng.random_range(0.0..120.0),
                speed: 0.3 + rng.random_range(0.0..0.4),
                drift: rng.random_range(-0.1..0.1),
                alpha: 0.15 + rng.random_range(0.0..0.2),
            },
        })
        .collect()
}

pub fn update_and_draw(
    puffs: &mut [FogPuff],
    density: FogDensity,
    bounds: Bounds,
    fade: f32,
    surface: &mut dyn Surface,
) {
    let (fill, shadow, blur) = match density {
        FogDensity::Fog => (
            Rgba::rgb(229, 229, 229),
            Rgba::rgba(229, 229, 229, 0.5),
            30.0,
        ),
        FogDensity::Haze => (
            Rgba::rgb(221, 216, 199),
            Rgba::rgba(221, 216, 199, 0.3),
            25.0,
        ),
    };

    surface.set_shadow(shadow, blur);
    for puff in puffs.iter_mut() {
        puff.x += puff.speed;
        puff.y += puff.drift;
        if puff.x - puff.radius > bounds.width {
            puff.x = -puff.radius;
        }

        surface.set_alpha(fade * puff.alpha);
        surface.fill_circle(puff.x, puff.y, puff.radius, fill);
    }
    surface.clear_shadow();
}
