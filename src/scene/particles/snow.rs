use std::f32::consts::PI;

use rand::Rng;

use crate::domain::weather::SnowDensity;
use crate::render::color::{Rgba, WHITE};
use crate::render::surface::Surface;
use crate::scene::Bounds;

/// One snowflake. Rotation and twinkle phases advance independently of
/// the fall so large flakes spin while fading in and out.
#[derive(Debug, Clone)]
pub struct Snowflake {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    pub drift: f32,
    pub opacity: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub twinkle: f32,
    pub twinkle_speed: f32,
}

/// Flakes at or below this radius draw as plain discs; larger ones also
/// get six radiating arms.
pub const DETAIL_RADIUS: f32 = 4.0;

const ARM_COLOR: Rgba = Rgba::rgba(255, 255, 255, 0.6);

pub fn seed(density: SnowDensity, rng: &mut impl Rng, bounds: Bounds) -> Vec<Snowflake> {
    let count = match density {
        SnowDensity::Moderate => 80,
        SnowDensity::Heavy => 150,
    };
    (0..count)
        .map(|_| match density {
            SnowDensity::Moderate => Snowflake {
                x: rng.random_range(0.0..bounds.width),
                y: rng.random_range(0.0..bounds.height),
                radius: 2.0 + rng.random_range(0.0..4.0),
                speed: 0.5 + rng.random_range(0.0..1.5),
                drift: rng.random_range(-0.15..0.15),
                opacity: 0.6 + rng.random_range(0.0..0.4),
                rotation: rng.random_range(0.0..PI * 2.0),
                rotation_speed: rng.random_range(-0.005..0.005),
                twinkle: rng.random_range(0.0..PI * 2.0),
                twinkle_speed: 0.02 + rng.random_range(0.0..0.02),
            },
            SnowDensity::Heavy => Snowflake {
                x: rng.random_range(0.0..bounds.width),
                y: rng.random_range(0.0..bounds.height),
                radius: 3.0 + rng.random_range(0.0..6.0),
                speed: 1.0 + rng.random_range(0.0..2.5),
                drift: rng.random_range(-0.25..0.25),
                opacity: 0.7 + rng.random_range(0.0..0.3),
                rotation: rng.random_range(0.0..PI * 2.0),
                rotation_speed: rng.random_range(-0.0075..0.0075),
                twinkle: rng.random_range(0.0..PI * 2.0),
                twinkle_speed: 0.015 + rng.random_range(0.0..0.025),
            },
        })
        .collect()
}

/// Fall, sway, spin, twinkle; recycle past the bottom edge.
///
/// The sway adds a shared sinusoid of the clock and the flake's own
/// height on top of the per-flake drift, which reads as gusting wind.
pub fn update_and_draw(
    flakes: &mut [Snowflake],
    clock: f32,
    bounds: Bounds,
    rng: &mut impl Rng,
    fade: f32,
    surface: &mut dyn Surface,
) {
    let time_offset = clock * 0.005;
    for flake in flakes.iter_mut() {
        flake.y += flake.speed;
        flake.x += flake.drift + (time_offset + flake.y * 0.005).sin() * 0.2;
        flake.rotation += flake.rotation_speed;
        flake.twinkle += flake.twinkle_speed;
        let twinkle_alpha = 0.7 + 0.3 * flake.twinkle.sin();

        if flake.y > bounds.height {
            flake.y = -flake.radius;
            flake.x = rng.random_range(0.0..bounds.width);
        }

        surface.set_alpha(fade * flake.opacity * twinkle_alpha);
        surface.set_shadow(Rgba::rgba(255, 255, 255, 0.5), 8.0);
        if flake.radius <= DETAIL_RADIUS {
            surface.fill_circle(flake.x, flake.y, flake.radius, WHITE);
        } else {
            draw_detailed_flake(flake, surface);
        }
        surface.clear_shadow();
    }
}

fn draw_detailed_flake(flake: &Snowflake, surface: &mut dyn Surface) {
    surface.push_rotation(flake.x, flake.y, flake.rotation);
    surface.fill_circle(0.0, 0.0, flake.radius, WHITE);
    surface.set_shadow(Rgba::rgba(255, 255, 255, 0.5), 4.0);
    for i in 0..6 {
        let angle = i as f32 * PI / 3.0;
        surface.stroke_line(
            0.0,
            0.0,
            angle.cos() * flake.radius * 0.8,
            angle.sin() * flake.radius * 0.8,
            1.0,
            ARM_COLOR,
        );
    }
    surface.pop_transform();
}
