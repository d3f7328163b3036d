use rand::Rng;

use crate::domain::weather::PrecipFamily;
use crate::render::color::Rgba;
use crate::render::surface::Surface;
use crate::scene::Bounds;
use crate::scene::particles::splash::{self, Splash};

/// One falling drop. The freezing family flags ~30 % of its drops as ice
/// pellets, rendered as dots instead of strokes.
#[derive(Debug, Clone)]
pub struct Raindrop {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub length: f32,
    pub opacity: f32,
    pub is_ice: bool,
}

/// Seed-time and draw-time numbers for one precipitation family. The
/// families share the record shape and differ only here.
struct FamilyProfile {
    count: usize,
    speed: (f32, f32),
    length: (f32, f32),
    opacity: (f32, f32),
    /// Leftward slide per frame (wind-blown slant).
    slant: f32,
    /// Stroke offset from head to tail.
    tail_dx: f32,
    stroke_width: f32,
    stroke: Rgba,
    shadow: Option<(Rgba, f32)>,
    /// Distance of the ground line above the bottom edge.
    ground_margin: f32,
    ice_share: f32,
}

fn profile(family: PrecipFamily) -> FamilyProfile {
    match family {
        PrecipFamily::Rain => FamilyProfile {
            count: 200,
            speed: (12.0, 20.0),
            length: (20.0, 35.0),
            opacity: (0.6, 1.0),
            slant: 2.0,
            tail_dx: -3.0,
            stroke_width: 3.0,
            stroke: Rgba::rgba(173, 216, 230, 0.8),
            shadow: Some((Rgba::rgba(173, 216, 230, 0.4), 2.0)),
            ground_margin: 5.0,
            ice_share: 0.0,
        },
        PrecipFamily::HeavyRain => FamilyProfile {
            count: 350,
            speed: (18.0, 30.0),
            length: (25.0, 45.0),
            opacity: (0.7, 1.0),
            ..profile(PrecipFamily::Rain)
        },
        PrecipFamily::StormRain => FamilyProfile {
            count: 250,
            speed: (15.0, 25.0),
            length: (22.0, 40.0),
            opacity: (0.7, 1.0),
            ..profile(PrecipFamily::Rain)
        },
        PrecipFamily::Drizzle => FamilyProfile {
            count: 80,
            speed: (4.0, 7.0),
            length: (8.0, 14.0),
            opacity: (0.4, 0.7),
            slant: 0.5,
            tail_dx: -1.0,
            stroke_width: 1.0,
            stroke: Rgba::rgba(173, 216, 230, 0.6),
            shadow: None,
            ground_margin: 3.0,
            ice_share: 0.0,
        },
        PrecipFamily::Freezing => FamilyProfile {
            count: 150,
            speed: (10.0, 16.0),
            length: (15.0, 25.0),
            opacity: (0.6, 0.9),
            slant: 1.5,
            tail_dx: -2.0,
            stroke_width: 2.0,
            stroke: Rgba::rgba(173, 216, 230, 0.7),
            shadow: None,
            ground_margin: 4.0,
            ice_share: 0.3,
        },
    }
}

const ICE_PELLET_RADIUS: f32 = 2.0;
const ICE_PELLET_COLOR: Rgba = Rgba::rgba(200, 220, 255, 0.8);

pub fn seed(family: PrecipFamily, rng: &mut impl Rng, bounds: Bounds) -> Vec<Raindrop> {
    let profile = profile(family);
    (0..profile.count)
        .map(|_| Raindrop {
            x: rng.random_range(0.0..bounds.width),
            y: rng.random_range(0.0..bounds.height),
            speed: rng.random_range(profile.speed.0..profile.speed.1),
            length: rng.random_range(profile.length.0..profile.length.1),
            opacity: rng.random_range(profile.opacity.0..profile.opacity.1),
            is_ice: profile.ice_share > 0.0 && rng.random_range(0.0..1.0) < profile.ice_share,
        })
        .collect()
}

/// Advance every drop, spawn splashes on ground contact, recycle to the
/// top edge, and draw. Ground contact never destroys a drop.
pub fn update_and_draw(
    family: PrecipFamily,
    drops: &mut [Raindrop],
    splashes: &mut Vec<Splash>,
    bounds: Bounds,
    rng: &mut impl Rng,
    fade: f32,
    surface: &mut dyn Surface,
) {
    let profile = profile(family);
    let ground = bounds.height - profile.ground_margin;

    if let Some((color, blur)) = profile.shadow {
        surface.set_shadow(color, blur);
    }
    for drop in drops.iter_mut() {
        drop.y += drop.speed;
        drop.x -= profile.slant;

        if drop.y > ground {
            spawn_impact(family, drop.is_ice, splashes, rng, drop.x, ground);
            drop.y = -drop.length;
            drop.x = rng.random_range(0.0..bounds.width);
        }

        surface.set_alpha(fade * drop.opacity);
        if drop.is_ice {
            surface.fill_circle(drop.x, drop.y, ICE_PELLET_RADIUS, ICE_PELLET_COLOR);
        } else {
            surface.stroke_line(
                drop.x,
                drop.y,
                drop.x + profile.tail_dx,
                drop.y + drop.length,
                profile.stroke_width,
                profile.stroke,
            );
        }
    }
    if profile.shadow.is_some() {
        surface.clear_shadow();
    }
}

fn spawn_impact(
    family: PrecipFamily,
    is_ice: bool,
    splashes: &mut Vec<Splash>,
    rng: &mut impl Rng,
    x: f32,
    y: f32,
) {
    match family {
        PrecipFamily::Rain | PrecipFamily::HeavyRain | PrecipFamily::StormRain => {
            splash::burst_rain(splashes, rng, x, y, 1.0);
        }
        PrecipFamily::Drizzle => splash::burst_drizzle(splashes, rng, x, y),
        // Ice pellets shatter; liquid freezing drops splash like rain at
        // reduced strength. Both land in the freezing pool.
        PrecipFamily::Freezing if is_ice => splash::burst_ice(splashes, rng, x, y),
        PrecipFamily::Freezing => splash::burst_rain(splashes, rng, x, y, 0.8),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::render::frame::SceneFrame;

    fn bounds() -> Bounds {
        Bounds::new(960.0, 540.0)
    }

    #[test]
    fn pool_sizes_match_the_family() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(seed(PrecipFamily::Rain, &mut rng, bounds()).len(), 200);
        assert_eq!(seed(PrecipFamily::HeavyRain, &mut rng, bounds()).len(), 350);
        assert_eq!(seed(PrecipFamily::StormRain, &mut rng, bounds()).len(), 250);
        assert_eq!(seed(PrecipFamily::Drizzle, &mut rng, bounds()).len(), 80);
        assert_eq!(seed(PrecipFamily::Freezing, &mut rng, bounds()).len(), 150);
    }

    #[test]
    fn only_the_freezing_family_carries_ice() {
        let mut rng = StdRng::seed_from_u64(11);
        let rain = seed(PrecipFamily::HeavyRain, &mut rng, bounds());
        assert!(rain.iter().all(|d| !d.is_ice));

        let freezing = seed(PrecipFamily::Freezing, &mut rng, bounds());
        let ice = freezing.iter().filter(|d| d.is_ice).count();
        // ~30 % of 150, loosely bounded.
        assert!((15..=75).contains(&ice), "ice count {ice}");
    }

    #[test]
    fn ground_contact_recycles_and_splashes() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut drops = seed(PrecipFamily::Rain, &mut rng, bounds());
        for drop in &mut drops {
            drop.y = bounds().height; // next step crosses the ground line
        }
        let mut splashes = Vec::new();
        let mut frame = SceneFrame::new();
        update_and_draw(
            PrecipFamily::Rain,
            &mut drops,
            &mut splashes,
            bounds(),
            &mut rng,
            1.0,
            &mut frame,
        );
        assert!(!splashes.is_empty());
        for drop in &drops {
            assert!(drop.y <= 0.0, "recycled to above the top edge");
            assert!((0.0..bounds().width).contains(&drop.x));
        }
    }

    #[test]
    fn recycled_drops_re_enter_the_surface() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut drops = seed(PrecipFamily::Drizzle, &mut rng, bounds());
        let mut splashes = Vec::new();
        let mut frame = SceneFrame::new();
        // Long enough for every drop to fall through and recycle at
        // least once (drizzle is the slowest family).
        for _ in 0..200 {
            update_and_draw(
                PrecipFamily::Drizzle,
                &mut drops,
                &mut splashes,
                bounds(),
                &mut rng,
                1.0,
                &mut frame,
            );
        }
        assert!(!splashes.is_empty(), "drops recycled at least once");
        for drop in &drops {
            // Nothing sinks below the ground line or lingers far above
            // the top edge: recycling keeps the pool on the surface.
            assert!(drop.y < bounds().height);
            assert!(drop.y >= -(drop.length + 1.0));
        }
    }

    #[test]
    fn ice_drops_draw_dots_and_liquid_drops_draw_strokes() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut drops = seed(PrecipFamily::Freezing, &mut rng, bounds());
        for drop in &mut drops {
            drop.y = 10.0; // keep everything airborne
        }
        let ice = drops.iter().filter(|d| d.is_ice).count();
        let mut splashes = Vec::new();
        let mut frame = SceneFrame::new();
        update_and_draw(
            PrecipFamily::Freezing,
            &mut drops,
            &mut splashes,
            bounds(),
            &mut rng,
            1.0,
            &mut frame,
        );
        assert_eq!(frame.count("fill-circle"), ice);
        assert_eq!(frame.count("line"), drops.len() - ice);
    }
}
