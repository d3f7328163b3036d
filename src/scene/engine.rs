use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::weather::{
    CelestialBody, CloudMode, MoonPhase, PrecipFamily, WeatherKind, sun_position_label,
};
use crate::render::surface::Surface;
use crate::scene::Bounds;
use crate::scene::celestial::{self, CelestialState, Star};
use crate::scene::particles::clouds::{self, Cloud};
use crate::scene::particles::fog::{self, FogPuff};
use crate::scene::particles::lightning::{self, LightningBolt};
use crate::scene::particles::precip::{self, Raindrop};
use crate::scene::particles::snow::{self, Snowflake};
use crate::scene::particles::splash::{self, Splash, SplashStyle};
use crate::scene::particles::wind::{self, WindStreak};
use crate::scene::transition::Transition;

/// Simulation-clock advance per tick: a nominal 60 Hz step, not locked
/// to wall time.
pub const CLOCK_STEP: f32 = 0.016;

/// Every particle pool the active preset may own.
///
/// Switching presets replaces the whole set; pools are never reused
/// across weather kinds, even phenomenologically similar ones. Ambient
/// pools keep a fixed population and recycle at the edges; `splashes`
/// and `bolts` are the two event-driven pools that grow and shrink.
#[derive(Debug, Default)]
pub struct ParticlePools {
    pub clouds: Vec<Cloud>,
    pub drops: Vec<Raindrop>,
    pub splashes: Vec<Splash>,
    pub snowflakes: Vec<Snowflake>,
    pub fog: Vec<FogPuff>,
    pub wind: Vec<WindStreak>,
    pub stars: Vec<Star>,
    pub bolts: Vec<LightningBolt>,
}

/// The scene controller: owns all mutable scene state and is the sole
/// issuer of drawing calls. Driven from outside by `tick`, one call per
/// host frame; it performs no scheduling of its own.
#[derive(Debug)]
pub struct SceneEngine {
    weather: WeatherKind,
    clock: f32,
    transition: Transition,
    bounds: Bounds,
    show_moon: bool,
    moon_phase: MoonPhase,
    celestial: CelestialState,
    pools: ParticlePools,
    next_strike_ms: f32,
    rng: StdRng,
}

impl SceneEngine {
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self::with_rng(bounds, StdRng::from_os_rng())
    }

    /// Deterministic engine for tests and `--seed`.
    #[must_use]
    pub fn with_seed(bounds: Bounds, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: Bounds, rng: StdRng) -> Self {
        let mut engine = Self {
            weather: WeatherKind::Clear,
            clock: 0.0,
            transition: Transition::settled(),
            bounds,
            show_moon: true,
            moon_phase: MoonPhase::Full,
            celestial: CelestialState::default(),
            pools: ParticlePools::default(),
            next_strike_ms: 0.0,
            rng,
        };
        engine.reseed();
        engine
    }

    // ── commands ─────────────────────────────────────────────────────────

    /// Step to the neighboring preset and start the cross-fade.
    ///
    /// Rejected outright while a fade is in progress; rapid repeated
    /// input is dropped, never queued.
    pub fn cycle_weather(&mut self, direction: isize) {
        if self.transition.is_active() {
            return;
        }
        self.transition.begin();
        self.weather = self.weather.cycled(direction);
        self.reseed();
    }

    /// Jump straight to `kind` with no fade (startup presets).
    pub fn set_weather(&mut self, kind: WeatherKind) {
        self.weather = kind;
        self.transition = Transition::settled();
        self.reseed();
    }

    pub fn toggle_moon(&mut self) {
        self.show_moon = !self.show_moon;
    }

    pub fn set_moon_visible(&mut self, visible: bool) {
        self.show_moon = visible;
    }

    pub fn cycle_moon_phase(&mut self, direction: isize) {
        self.moon_phase = self.moon_phase.cycled(direction);
    }

    pub fn set_moon_phase(&mut self, phase: MoonPhase) {
        self.moon_phase = phase;
    }

    /// Nudge the sun along its arc, wrapping into [0, 1).
    pub fn adjust_sun_position(&mut self, delta: f32) {
        self.celestial.sun_arc = wrap_unit(self.celestial.sun_arc + delta);
    }

    pub fn set_sun_position(&mut self, position: f32) {
        self.celestial.sun_arc = wrap_unit(position);
    }

    /// New surface extent; the active pools are re-seeded against it
    /// before the next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
        self.reseed();
    }

    // ── frame loop ───────────────────────────────────────────────────────

    /// Advance one simulation step and redraw the whole scene.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        self.clock += CLOCK_STEP;
        self.transition.advance();

        surface.clear();
        let fade = self.transition.progress();
        surface.set_alpha(fade);
        surface.fill_vertical_gradient(self.weather.palette());

        self.draw_scene(fade, surface);
    }

    /// Fixed layering: celestial bodies and stars sit behind everything,
    /// clouds in front of them, precipitation under its overlays.
    fn draw_scene(&mut self, fade: f32, surface: &mut dyn Surface) {
        let recipe = self.weather.recipe();

        if let Some(spec) = recipe.celestial {
            match spec.body {
                CelestialBody::Sun => celestial::draw_sun(
                    &mut self.celestial,
                    spec,
                    self.clock,
                    self.bounds,
                    fade,
                    surface,
                ),
                CelestialBody::Moon if self.show_moon => celestial::draw_moon(
                    &mut self.celestial,
                    spec,
                    self.moon_phase,
                    self.bounds,
                    fade,
                    surface,
                ),
                CelestialBody::Moon => {}
            }
        }

        if recipe.stars {
            celestial::update_and_draw_stars(&mut self.pools.stars, self.bounds, fade, surface);
        }

        if recipe.clouds != CloudMode::None {
            clouds::update_and_draw(&mut self.pools.clouds, self.bounds, fade, surface);
        }

        if let Some(density) = recipe.fog {
            fog::update_and_draw(&mut self.pools.fog, density, self.bounds, fade, surface);
        }

        if let Some(family) = recipe.precip {
            precip::update_and_draw(
                family,
                &mut self.pools.drops,
                &mut self.pools.splashes,
                self.bounds,
                &mut self.rng,
                fade,
                surface,
            );
            splash::update_and_draw(
                &mut self.pools.splashes,
                splash_style(family),
                fade,
                surface,
            );
        }

        // Snow density only matters at seed time.
        if recipe.snow.is_some() {
            snow::update_and_draw(
                &mut self.pools.snowflakes,
                self.clock,
                self.bounds,
                &mut self.rng,
                fade,
                surface,
            );
        }

        if recipe.wind {
            wind::update_and_draw(
                &mut self.pools.wind,
                self.bounds,
                &mut self.rng,
                fade,
                surface,
            );
        }

        if recipe.lightning {
            let clock_ms = self.clock_ms();
            lightning::update_and_draw(
                &mut self.pools.bolts,
                &mut self.next_strike_ms,
                &self.pools.clouds,
                clock_ms,
                self.bounds,
                &mut self.rng,
                fade,
                surface,
            );
        }
    }

    /// Discard every pool and seed the set the current recipe calls for.
    fn reseed(&mut self) {
        let recipe = self.weather.recipe();
        self.pools = ParticlePools::default();

        match recipe.clouds {
            CloudMode::None => {}
            CloudMode::Light => {
                self.pools.clouds = clouds::seed_light(&mut self.rng, self.bounds);
            }
            CloudMode::Full(style) => {
                self.pools.clouds = clouds::seed_full(style, &mut self.rng, self.bounds);
            }
        }
        if let Some(family) = recipe.precip {
            self.pools.drops = precip::seed(family, &mut self.rng, self.bounds);
        }
        if let Some(density) = recipe.snow {
            self.pools.snowflakes = snow::seed(density, &mut self.rng, self.bounds);
        }
        if let Some(density) = recipe.fog {
            self.pools.fog = fog::seed(density, &mut self.rng, self.bounds);
        }
        if recipe.wind {
            self.pools.wind = wind::seed(&mut self.rng, self.bounds);
        }
        if recipe.stars {
            self.pools.stars = celestial::seed_stars(&mut self.rng, self.bounds);
        }
        if recipe.lightning {
            self.next_strike_ms = lightning::arm(self.clock_ms());
        }
    }

    // ── status ───────────────────────────────────────────────────────────

    #[must_use]
    pub fn weather(&self) -> WeatherKind {
        self.weather
    }

    #[must_use]
    pub fn weather_name(&self) -> &'static str {
        self.weather.display_name()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    #[must_use]
    pub fn transition_progress(&self) -> f32 {
        self.transition.progress()
    }

    #[must_use]
    pub fn moon_visible(&self) -> bool {
        self.show_moon
    }

    #[must_use]
    pub fn moon_phase(&self) -> MoonPhase {
        self.moon_phase
    }

    #[must_use]
    pub fn sun_position(&self) -> f32 {
        self.celestial.sun_arc
    }

    #[must_use]
    pub fn sun_label(&self) -> &'static str {
        sun_position_label(self.celestial.sun_arc)
    }

    #[must_use]
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Simulation clock in wall-time-equivalent milliseconds; the
    /// lightning scheduler works in these units.
    #[must_use]
    pub fn clock_ms(&self) -> f32 {
        self.clock * 1000.0
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn pools(&self) -> &ParticlePools {
        &self.pools
    }

    #[must_use]
    pub fn next_strike_ms(&self) -> f32 {
        self.next_strike_ms
    }

    /// Test hook: advance the simulation clock without rendering.
    #[cfg(test)]
    pub(crate) fn advance_clock(&mut self, seconds: f32) {
        self.clock += seconds;
    }
}

/// Wrap into [0, 1). `rem_euclid` alone can round up to exactly 1.0 for
/// inputs a hair below zero.
fn wrap_unit(value: f32) -> f32 {
    let wrapped = value.rem_euclid(1.0);
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

fn splash_style(family: PrecipFamily) -> SplashStyle {
    match family {
        PrecipFamily::Drizzle => SplashStyle::Drizzle,
        PrecipFamily::Freezing => SplashStyle::Freezing,
        PrecipFamily::Rain | PrecipFamily::HeavyRain | PrecipFamily::StormRain => SplashStyle::Rain,
    }
}
