use rand::Rng;

use crate::render::color::Rgba;
use crate::render::surface::Surface;
use crate::scene::Bounds;
use crate::scene::particles::clouds::Cloud;

/// A strike: a jagged cloud-to-ground path that flashes once and fades.
///
/// The path is generated in one shot and never recomputed; only `alpha`
/// changes afterwards, decaying multiplicatively until the bolt drops
/// below the visibility floor and is discarded.
#[derive(Debug, Clone)]
pub struct LightningBolt {
    pub points: Vec<(f32, f32)>,
    pub alpha: f32,
}

/// Interior segments between origin and ground point; a bolt has
/// `SEGMENTS + 1` path points.
pub const SEGMENTS: usize = 20;

/// Alpha multiplier applied every frame.
pub const DECAY: f32 = 0.9;

/// Bolts dimmer than this are discarded.
pub const VISIBILITY_FLOOR: f32 = 0.05;

/// Delay range to the next strike, in wall-time-equivalent milliseconds.
pub const STRIKE_DELAY_MIN_MS: f32 = 2000.0;
pub const STRIKE_DELAY_SPREAD_MS: f32 = 3000.0;

const BOLT_COLOR: Rgba = Rgba::rgb(232, 244, 253);

/// First strike is armed one minimum delay after activation.
#[must_use]
pub fn arm(clock_ms: f32) -> f32 {
    clock_ms + STRIKE_DELAY_MIN_MS
}

/// Fire a strike when due, then fade and draw the live bolts.
///
/// Returns the re-armed strike time when a strike fired. With no clouds
/// to strike from, the scheduler still re-arms but no bolt appears.
pub fn update_and_draw(
    bolts: &mut Vec<LightningBolt>,
    next_strike_ms: &mut f32,
    clouds: &[Cloud],
    clock_ms: f32,
    bounds: Bounds,
    rng: &mut impl Rng,
    fade: f32,
    surface: &mut dyn Surface,
) {
    if clock_ms > *next_strike_ms {
        if let Some(bolt) = generate(clouds, rng, bounds) {
            bolts.push(bolt);
        }
        *next_strike_ms =
            clock_ms + STRIKE_DELAY_MIN_MS + rng.random_range(0.0..STRIKE_DELAY_SPREAD_MS);
    }

    surface.set_shadow(BOLT_COLOR, 20.0);
    bolts.retain_mut(|bolt| {
        bolt.alpha *= DECAY;
        if bolt.alpha < VISIBILITY_FLOOR {
            return false;
        }
        surface.set_alpha(fade * bolt.alpha);
        surface.stroke_polyline(&bolt.points, 5.0, BOLT_COLOR);
        true
    });
    surface.clear_shadow();
}

/// One-shot jagged path from a random cloud to a random ground-band
/// point. Interior jitter shrinks toward the ground so the path
/// converges on its endpoint.
pub fn generate(clouds: &[Cloud], rng: &mut impl Rng, bounds: Bounds) -> Option<LightningBolt> {
    if clouds.is_empty() {
        return None;
    }
    let cloud = &clouds[rng.random_range(0..clouds.len())];
    let start_x = cloud.x + rng.random_range(-0.5..0.5) * cloud.radius;
    let start_y = cloud.y + cloud.radius * 0.5;
    let end_x = start_x + rng.random_range(-50.0..50.0);
    let end_y = bounds.height * (0.8 + rng.random_range(0.0..0.2));

    let mut points = Vec::with_capacity(SEGMENTS + 1);
    points.push((start_x, start_y));
    for i in 1..=SEGMENTS {
        let t = i as f32 / SEGMENTS as f32;
        let x = start_x + (end_x - start_x) * t + rng.random_range(-20.0..20.0) * (1.0 - t);
        let y = start_y + (end_y - start_y) * t + rng.random_range(-10.0..10.0);
        points.push((x, y));
    }

    Some(LightningBolt { points, alpha: 1.0 })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::weather::CloudStyle;
    use crate::scene::particles::clouds;

    fn bounds() -> Bounds {
        Bounds::new(960.0, 540.0)
    }

    fn storm_clouds(rng: &mut StdRng) -> Vec<Cloud> {
        clouds::seed_full(CloudStyle::Storm, rng, bounds())
    }

    #[test]
    fn bolts_have_twenty_one_points() {
        let mut rng = StdRng::seed_from_u64(41);
        let deck = storm_clouds(&mut rng);
        for _ in 0..20 {
            let bolt = generate(&deck, &mut rng, bounds()).unwrap();
            assert_eq!(bolt.points.len(), SEGMENTS + 1);
            assert!((bolt.alpha - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn bolts_end_in_the_ground_band() {
        let mut rng = StdRng::seed_from_u64(41);
        let deck = storm_clouds(&mut rng);
        for _ in 0..20 {
            let bolt = generate(&deck, &mut rng, bounds()).unwrap();
            let (_, end_y) = *bolt.points.last().unwrap();
            // Ground band plus the +-10 px interior jitter.
            assert!(end_y >= bounds().height * 0.8 - 10.0);
            assert!(end_y <= bounds().height + 10.0);
        }
    }

    #[test]
    fn no_clouds_means_no_bolt() {
        let mut rng = StdRng::seed_from_u64(41);
        assert!(generate(&[], &mut rng, bounds()).is_none());
    }

    #[test]
    fn scheduler_fires_once_and_rearms_within_the_window() {
        let mut rng = StdRng::seed_from_u64(41);
        let deck = storm_clouds(&mut rng);
        let mut bolts = Vec::new();
        let clock_ms = 10_000.0;
        let mut next = clock_ms - 1.0; // already due
        let mut frame = crate::render::frame::SceneFrame::new();
        update_and_draw(
            &mut bolts, &mut next, &deck, clock_ms, bounds(), &mut rng, 1.0, &mut frame,
        );
        assert_eq!(bolts.len(), 1);
        assert!(next >= clock_ms + STRIKE_DELAY_MIN_MS);
        assert!(next < clock_ms + STRIKE_DELAY_MIN_MS + STRIKE_DELAY_SPREAD_MS);
    }

    #[test]
    fn bolts_fade_multiplicatively_and_die_below_the_floor() {
        let mut rng = StdRng::seed_from_u64(41);
        let deck = storm_clouds(&mut rng);
        let mut bolts = vec![generate(&deck, &mut rng, bounds()).unwrap()];
        let mut next = f32::MAX; // never fire again
        let mut frame = crate::render::frame::SceneFrame::new();
        let mut last_alpha = bolts[0].alpha;
        let mut frames = 0;
        while !bolts.is_empty() {
            update_and_draw(
                &mut bolts, &mut next, &deck, 0.0, bounds(), &mut rng, 1.0, &mut frame,
            );
            if let Some(bolt) = bolts.first() {
                assert!(bolt.alpha < last_alpha);
                assert!(bolt.alpha >= VISIBILITY_FLOOR);
                last_alpha = bolt.alpha;
            }
            frames += 1;
            assert!(frames < 100, "bolt never faded out");
        }
        // 0.9^29 ~ 0.047: the flash lives roughly half a second.
        assert!((25..=35).contains(&frames));
    }
}
