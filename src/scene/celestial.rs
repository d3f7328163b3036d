use std::f32::consts::PI;

use rand::Rng;

use crate::domain::weather::{CelestialSpec, MoonPhase};
use crate::render::color::{Rgba, WHITE};
use crate::render::surface::Surface;
use crate::scene::Bounds;

/// Arc positions persist across weather changes, so toggling between
/// presets never teleports the sun or moon.
#[derive(Debug, Clone, Copy)]
pub struct CelestialState {
    /// Sun progress along its arc, [0, 1).
    pub sun_arc: f32,
    /// Accumulated ray rotation, unbounded (wraps implicitly via trig).
    pub sun_ray_rotation: f32,
    /// Moon progress along its arc, [0, 1).
    pub moon_arc: f32,
}

/// Arc advance per draw call. The moon crawls slightly faster than the
/// sun's creep; both take thousands of frames per crossing.
const SUN_ARC_STEP: f32 = 0.000_08;
const MOON_ARC_STEP: f32 = 0.000_1;
const RAY_ROTATION_STEP: f32 = 0.002;

const RAY_COUNT: usize = 16;

const GOLD: Rgba = Rgba::rgb(255, 215, 0);
const MOON_BEIGE: Rgba = Rgba::rgb(245, 245, 220);

/// Surface-flare constellation on the sun disc: normalized offset and
/// size relative to the disc radius.
const SUN_FLARES: [(f32, f32, f32); 5] = [
    (-0.2, -0.3, 0.1),
    (0.3, -0.1, 0.08),
    (-0.1, 0.2, 0.12),
    (0.2, 0.3, 0.06),
    (-0.3, 0.1, 0.07),
];

/// Crater constellation on the moon disc.
const MOON_CRATERS: [(f32, f32, f32); 7] = [
    (-0.3, -0.2, 0.15),
    (0.2, -0.4, 0.1),
    (-0.1, 0.3, 0.12),
    (0.4, 0.1, 0.08),
    (-0.4, 0.2, 0.06),
    (0.1, -0.1, 0.05),
    (0.3, 0.4, 0.07),
];

/// Lens-flare rings: distance (in radii), ring weight, alpha, tint.
const FLARE_RINGS: [(f32, f32, f32, Rgba); 3] = [
    (1.8, 0.6, 0.2, Rgba::rgba(255, 200, 100, 0.3)),
    (2.5, 0.4, 0.15, Rgba::rgba(100, 200, 255, 0.25)),
    (3.2, 0.3, 0.1, Rgba::rgba(255, 150, 200, 0.2)),
];

impl Default for CelestialState {
    fn default() -> Self {
        Self {
            sun_arc: 0.3,
            sun_ray_rotation: 0.0,
            moon_arc: 0.0,
        }
    }
}

/// Screen position of the sun: linear sweep across the middle 80 % of
/// the width, elevated by a half-sine arc peaking at mid-crossing.
#[must_use]
pub fn sun_screen_position(arc: f32, spec: CelestialSpec, bounds: Bounds) -> (f32, f32) {
    let x = bounds.width * (0.1 + arc * 0.8);
    let y = bounds.height * spec.base_y - (arc * PI).sin() * 80.0;
    (x, y)
}

/// Screen position of the moon: narrower sweep, shallower arc.
#[must_use]
pub fn moon_screen_position(arc: f32, spec: CelestialSpec, bounds: Bounds) -> (f32, f32) {
    let x = bounds.width * (0.2 + arc * 0.6);
    let y = bounds.height * spec.base_y - (arc * PI).sin() * 50.0;
    (x, y)
}

pub fn draw_sun(
    state: &mut CelestialState,
    spec: CelestialSpec,
    clock: f32,
    bounds: Bounds,
    fade: f32,
    surface: &mut dyn Surface,
) {
    state.sun_arc += SUN_ARC_STEP;
    if state.sun_arc > 1.0 {
        state.sun_arc = 0.0;
    }
    state.sun_ray_rotation += RAY_ROTATION_STEP;

    let (x, y) = sun_screen_position(state.sun_arc, spec, bounds);
    let r = spec.radius;

    // Glow halo, widest first.
    surface.set_alpha(fade);
    surface.fill_circle(x, y, r + 40.0, GOLD.with_alpha(0.1));
    surface.fill_circle(x, y, r + 25.0, GOLD.with_alpha(0.2));

    draw_sun_rays(state, x, y, r, clock, fade, surface);

    surface.set_alpha(fade);
    surface.set_shadow(GOLD, 20.0);
    surface.fill_radial_circle(
        x,
        y,
        r,
        (-r * 0.3, -r * 0.3),
        &[
            (0.0, Rgba::rgb(255, 255, 153)),
            (0.4, GOLD),
            (1.0, Rgba::rgb(255, 165, 0)),
        ],
    );
    surface.clear_shadow();

    draw_sun_texture(x, y, r, fade, surface);
    draw_lens_flare(x, y, r, fade, surface);
}

fn draw_sun_rays(
    state: &CelestialState,
    x: f32,
    y: f32,
    r: f32,
    clock: f32,
    fade: f32,
    surface: &mut dyn Surface,
) {
    surface.set_shadow(GOLD, 10.0);
    for i in 0..RAY_COUNT {
        let angle = i as f32 * PI * 2.0 / RAY_COUNT as f32 + state.sun_ray_rotation;
        let (x1, y1) = (x + angle.cos() * (r + 20.0), y + angle.sin() * (r + 20.0));
        let (x2, y2) = (x + angle.cos() * (r + 45.0), y + angle.sin() * (r + 45.0));
        // Each ray pulses on its own phase of the simulation clock.
        let pulse = 0.8 + 0.2 * (clock * 2.0 + i as f32).sin();
        surface.set_alpha(fade * pulse);
        surface.stroke_line(x1, y1, x2, y2, 3.0, GOLD);
    }
    surface.clear_shadow();
}

fn draw_sun_texture(x: f32, y: f32, r: f32, fade: f32, surface: &mut dyn Surface) {
    surface.set_alpha(fade * 0.3);
    for (fx, fy, fsize) in SUN_FLARES {
        let (cx, cy) = (x + fx * r, y + fy * r);
        let fr = fsize * r;
        surface.fill_circle(cx, cy, fr, WHITE.with_alpha(0.6));
        surface.fill_circle(cx, cy, fr * 1.5, Rgba::rgba(255, 255, 0, 0.3));
    }
}

fn draw_lens_flare(x: f32, y: f32, r: f32, fade: f32, surface: &mut dyn Surface) {
    // Bright core.
    surface.set_alpha(fade * 0.4);
    surface.set_shadow(WHITE.with_alpha(0.6), 20.0);
    surface.fill_circle(x, y, r * 0.2, WHITE.with_alpha(0.8));
    surface.clear_shadow();

    for (distance, weight, alpha, tint) in FLARE_RINGS {
        surface.set_alpha(fade * alpha);
        surface.set_shadow(tint, 10.0);
        surface.stroke_circle(x, y, r * distance, r * weight * 0.05, tint);
        surface.clear_shadow();
    }

    // Distant streaks offset well away from the disc, never crossing it.
    surface.set_alpha(fade * 0.15);
    surface.set_shadow(WHITE.with_alpha(0.4), 15.0);
    let streak = WHITE.with_alpha(0.3);
    surface.stroke_line(x - r * 4.0, y, x - r * 2.0, y, 1.0, streak);
    surface.stroke_line(x + r * 2.0, y, x + r * 4.0, y, 1.0, streak);
    surface.stroke_line(x, y - r * 4.0, x, y - r * 2.0, 1.0, streak);
    surface.stroke_line(x, y + r * 2.0, x, y + r * 4.0, 1.0, streak);
    surface.clear_shadow();
}

pub fn draw_moon(
    state: &mut CelestialState,
    spec: CelestialSpec,
    phase: MoonPhase,
    bounds: Bounds,
    fade: f32,
    surface: &mut dyn Surface,
) {
    state.moon_arc += MOON_ARC_STEP;
    if state.moon_arc > 1.0 {
        state.moon_arc = 0.0;
    }

    let (x, y) = moon_screen_position(state.moon_arc, spec, bounds);
    let r = spec.radius;

    surface.set_alpha(fade);
    surface.set_shadow(MOON_BEIGE.with_alpha(0.3), 30.0);
    surface.fill_circle(x, y, r + 15.0, MOON_BEIGE.with_alpha(0.1));
    surface.set_shadow(MOON_BEIGE, 20.0);
    surface.fill_circle(x, y, r, MOON_BEIGE);
    surface.clear_shadow();

    draw_moon_craters(x, y, r, fade, surface);

    if phase != MoonPhase::Full {
        draw_phase_shadow(x, y, r, phase, fade, surface);
    }
}

fn draw_moon_craters(x: f32, y: f32, r: f32, fade: f32, surface: &mut dyn Surface) {
    surface.set_alpha(fade * 0.3);
    for (cx, cy, csize) in MOON_CRATERS {
        let (px, py) = (x + cx * r, y + cy * r);
        let cr = csize * r;
        surface.fill_circle(px, py, cr, Rgba::rgba(0, 0, 0, 0.4));
        surface.fill_circle(
            px - cr * 0.3,
            py - cr * 0.3,
            cr * 0.6,
            WHITE.with_alpha(0.2),
        );
    }
}

/// Phase shadow, clipped to the disc: the whole disc for a new moon, one
/// half for the quarters. Nothing is drawn for a full moon.
fn draw_phase_shadow(
    x: f32,
    y: f32,
    r: f32,
    phase: MoonPhase,
    fade: f32,
    surface: &mut dyn Surface,
) {
    surface.push_clip_circle(x, y, r);
    surface.set_alpha(fade);
    match phase {
        MoonPhase::New => {
            surface.fill_circle(x, y, r, Rgba::rgba(0, 0, 0, 0.9));
        }
        // First quarter lights the right half: shade the left.
        MoonPhase::FirstQuarter => {
            surface.fill_arc_segment(x, y, r, PI * 0.5, PI * 1.5, Rgba::rgba(0, 0, 0, 0.7));
        }
        // Last quarter lights the left half: shade the right.
        MoonPhase::LastQuarter => {
            surface.fill_arc_segment(x, y, r, PI * 1.5, PI * 0.5, Rgba::rgba(0, 0, 0, 0.7));
        }
        MoonPhase::Full => {}
    }
    surface.pop_clip();
}

/// Slowly wandering night-sky star, confined to the upper band.
#[derive(Debug, Clone)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub brightness: f32,
    pub drift_x: f32,
    pub drift_y: f32,
    pub twinkle: f32,
    pub twinkle_speed: f32,
}

/// Fraction of the surface height stars may occupy.
pub const STAR_BAND: f32 = 0.7;

pub fn seed_stars(rng: &mut impl Rng, bounds: Bounds) -> Vec<Star> {
    (0..80)
        .map(|_| Star {
            x: rng.random_range(0.0..bounds.width),
            y: rng.random_range(0.0..bounds.height * STAR_BAND),
            size: 0.5 + rng.random_range(0.0..2.0),
            brightness: 0.3 + rng.random_range(0.0..0.7),
            drift_x: rng.random_range(-0.01..0.01),
            drift_y: rng.random_range(-0.005..0.005),
            twinkle: rng.random_range(0.0..PI * 2.0),
            twinkle_speed: 0.01 + rng.random_range(0.0..0.02),
        })
        .collect()
}

/// Drift imperceptibly, wrap at the band edges, twinkle.
pub fn update_and_draw_stars(
    stars: &mut [Star],
    bounds: Bounds,
    fade: f32,
    surface: &mut dyn Surface,
) {
    let band = bounds.height * STAR_BAND;
    for star in stars.iter_mut() {
        star.x += star.drift_x;
        star.y += star.drift_y;
        if star.x > bounds.width {
            star.x = 0.0;
        }
        if star.x < 0.0 {
            star.x = bounds.width;
        }
        if star.y > band {
            star.y = 0.0;
        }
        if star.y < 0.0 {
            star.y = band;
        }

        star.twinkle += star.twinkle_speed;
        let twinkle = 0.5 + 0.5 * star.twinkle.sin();
        surface.set_alpha(fade * star.brightness * twinkle);
        surface.set_shadow(WHITE, star.size * 2.0);
        surface.fill_circle(star.x, star.y, star.size, WHITE);
        surface.clear_shadow();
    }
}
