use rand::Rng;

use crate::domain::weather::CloudStyle;
use crate::render::color::{Rgba, WHITE};
use crate::render::surface::Surface;
use crate::scene::Bounds;

/// One drifting cloud. `style` is `None` for the light fair-weather
/// variant, which is white, unlayered, and sparser.
#[derive(Debug, Clone)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub speed: f32,
    pub opacity: f32,
    pub layer: usize,
    pub style: Option<CloudStyle>,
}

const LAYERS: usize = 3;

/// Sparse white clouds for clear/partly-cloudy/sunrise/sunset skies.
pub fn seed_light(rng: &mut impl Rng, bounds: Bounds) -> Vec<Cloud> {
    (0..8)
        .map(|_| Cloud {
            x: rng.random_range(0.0..bounds.width),
            y: bounds.height * (0.2 + rng.random_range(0.0..0.3)),
            radius: 80.0 + rng.random_range(0.0..60.0),
            speed: 0.3 + rng.random_range(0.0..0.2),
            opacity: 0.6 + rng.random_range(0.0..0.3),
            layer: 0,
            style: None,
        })
        .collect()
}

/// Three-layer overcast deck. Further layers are larger and slower
/// (parallax depth).
pub fn seed_full(style: CloudStyle, rng: &mut impl Rng, bounds: Bounds) -> Vec<Cloud> {
    let count = if style == CloudStyle::Storm { 12 } else { 15 };
    let mut clouds = Vec::with_capacity(count);
    for layer in 0..LAYERS {
        for _ in 0..count / LAYERS {
            clouds.push(Cloud {
                x: rng.random_range(0.0..bounds.width),
                y: bounds.height * (0.1 + 0.25 * layer as f32) + rng.random_range(0.0..60.0),
                radius: 120.0 + rng.random_range(0.0..100.0) + layer as f32 * 40.0,
                speed: (0.5 - layer as f32 * 0.15) + rng.random_range(0.0..0.3),
                opacity: if style == CloudStyle::Storm {
                    0.8 + rng.random_range(0.0..0.2)
                } else {
                    0.7 + rng.random_range(0.0..0.3)
                },
                layer,
                style: Some(style),
            });
        }
    }
    clouds
}

/// Drift right, recycle at the far edge, draw as a five-lobe blob.
pub fn update_and_draw(
    clouds: &mut [Cloud],
    bounds: Bounds,
    fade: f32,
    surface: &mut dyn Surface,
) {
    for cloud in clouds.iter_mut() {
        cloud.x += cloud.speed;
        if cloud.x - cloud.radius > bounds.width {
            cloud.x = -cloud.radius;
        }

        let (fill, shadow) = tint(cloud.style);
        let blur = if cloud.style.is_some() { 25.0 } else { 20.0 };
        surface.set_alpha(fade * cloud.opacity);
        surface.set_shadow(shadow, blur);
        surface.fill_blob(&lobes(cloud.x, cloud.y, cloud.radius), fill);
        surface.clear_shadow();
    }
}

fn tint(style: Option<CloudStyle>) -> (Rgba, Rgba) {
    match style {
        None => (WHITE, Rgba::rgba(255, 255, 255, 0.5)),
        Some(CloudStyle::Storm) => (Rgba::rgb(44, 62, 80), Rgba::rgba(44, 62, 80, 0.5)),
        Some(CloudStyle::Rain) => (Rgba::rgb(93, 109, 126), Rgba::rgba(93, 109, 126, 0.5)),
        Some(CloudStyle::Drizzle) => (Rgba::rgb(119, 136, 153), Rgba::rgba(119, 136, 153, 0.5)),
        Some(CloudStyle::Freezing) => (Rgba::rgb(176, 196, 222), Rgba::rgba(176, 196, 222, 0.5)),
        Some(CloudStyle::Grey) => (Rgba::rgb(149, 165, 166), Rgba::rgba(149, 165, 166, 0.5)),
    }
}

fn lobes(x: f32, y: f32, r: f32) -> [(f32, f32, f32); 5] {
    [
        (x - r * 0.5, y, r * 0.6),
        (x - r * 0.2, y - r * 0.3, r * 0.8),
        (x + r * 0.2, y - r * 0.2, r * 0.7),
        (x + r * 0.5, y, r * 0.6),
        (x, y + r * 0.2, r * 0.9),
    ]
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
    fn light_deck_is_eight_unstyled_clouds() {
        let mut rng = StdRng::seed_from_u64(7);
        let clouds = seed_light(&mut rng, bounds());
        assert_eq!(clouds.len(), 8);
        assert!(clouds.iter().all(|c| c.style.is_none() && c.layer == 0));
    }

    #[test]
    fn full_deck_spreads_across_three_layers() {
        let mut rng = StdRng::seed_from_u64(7);
        let clouds = seed_full(CloudStyle::Rain, &mut rng, bounds());
        assert_eq!(clouds.len(), 15);
        for layer in 0..3 {
            assert_eq!(clouds.iter().filter(|c| c.layer == layer).count(), 5);
        }
        // Back layers are biased larger and slower than the front layer.
        let front_max_r = clouds
            .iter()
            .filter(|c| c.layer == 0)
            .map(|c| c.radius)
            .fold(0.0f32, f32::max);
        let back_min_r = clouds
            .iter()
            .filter(|c| c.layer == 2)
            .map(|c| c.radius)
            .fold(f32::INFINITY, f32::min);
        assert!(back_min_r > front_max_r - 100.0);
    }

    #[test]
    fn storm_deck_is_smaller_and_denser() {
        let mut rng = StdRng::seed_from_u64(7);
        let clouds = seed_full(CloudStyle::Storm, &mut rng, bounds());
        assert_eq!(clouds.len(), 12);
        assert!(clouds.iter().all(|c| c.opacity >= 0.8));
    }

    #[test]
    fn clouds_recycle_at_the_right_edge() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut clouds = seed_light(&mut rng, bounds());
        clouds[0].x = bounds().width + clouds[0].radius + 1.0;
        let mut frame = SceneFrame::new();
        update_and_draw(&mut clouds, bounds(), 1.0, &mut frame);
        assert!(clouds[0].x <= 0.0);
        assert!(clouds[0].x >= -clouds[0].radius - 1.0);
    }

    #[test]
    fn every_cloud_draws_one_blob() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut clouds = seed_full(CloudStyle::Grey, &mut rng, bounds());
        let mut frame = SceneFrame::new();
        update_and_draw(&mut clouds, bounds(), 1.0, &mut frame);
        assert_eq!(frame.count("blob"), clouds.len());
    }
}
