use std::str::FromStr;

use crate::render::color::Rgba;

/// The seventeen sky presets, in carousel order.
///
/// The order is part of the contract: prev/next navigation wraps through
/// the list exactly as written here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherKind {
    Clear,
    ClearNight,
    PartlyCloudy,
    PartlyCloudyNight,
    Cloudy,
    Windy,
    Haze,
    Fog,
    Drizzle,
    Rain,
    HeavyRain,
    FreezingRain,
    Thunderstorm,
    Snow,
    HeavySnow,
    Sunrise,
    Sunset,
}

pub const WEATHER_KINDS: [WeatherKind; 17] = [
    WeatherKind::Clear,
    WeatherKind::ClearNight,
    WeatherKind::PartlyCloudy,
    WeatherKind::PartlyCloudyNight,
    WeatherKind::Cloudy,
    WeatherKind::Windy,
    WeatherKind::Haze,
    WeatherKind::Fog,
    WeatherKind::Drizzle,
    WeatherKind::Rain,
    WeatherKind::HeavyRain,
    WeatherKind::FreezingRain,
    WeatherKind::Thunderstorm,
    WeatherKind::Snow,
    WeatherKind::HeavySnow,
    WeatherKind::Sunrise,
    WeatherKind::Sunset,
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weather '{0}', expected one of: clear, clear-night, partly-cloudy, partly-cloudy-night, cloudy, windy, haze, fog, drizzle, rain, heavy-rain, freezing-rain, thunderstorm, snow, heavy-snow, sunrise, sunset")]
pub struct UnknownWeather(String);

impl WeatherKind {
    #[must_use]
    pub fn index(self) -> usize {
        WEATHER_KINDS
            .iter()
            .position(|&kind| kind == self)
            .unwrap_or(0)
    }

    /// Kind at `index`, wrapped modulo the table length.
    #[must_use]
    pub fn from_index(index: isize) -> Self {
        let len = WEATHER_KINDS.len() as isize;
        WEATHER_KINDS[index.rem_euclid(len) as usize]
    }

    /// Neighbor in carousel order; any direction magnitude works.
    #[must_use]
    pub fn cycled(self, direction: isize) -> Self {
        Self::from_index(self.index() as isize + direction)
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::ClearNight => "Clear (Night)",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::PartlyCloudyNight => "Partly Cloudy (Night)",
            Self::Cloudy => "Cloudy",
            Self::Windy => "Windy",
            Self::Haze => "Haze",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::HeavyRain => "Heavy Rain",
            Self::FreezingRain => "Freezing Rain",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::HeavySnow => "Heavy Snow",
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::ClearNight => "clear-night",
            Self::PartlyCloudy => "partly-cloudy",
            Self::PartlyCloudyNight => "partly-cloudy-night",
            Self::Cloudy => "cloudy",
            Self::Windy => "windy",
            Self::Haze => "haze",
            Self::Fog => "fog",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::HeavyRain => "heavy-rain",
            Self::FreezingRain => "freezing-rain",
            Self::Thunderstorm => "thunderstorm",
            Self::Snow => "snow",
            Self::HeavySnow => "heavy-snow",
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
        }
    }

    /// Background gradient, top to bottom.
    #[must_use]
    pub fn palette(self) -> &'static [Rgba] {
        match self {
            Self::Clear | Self::PartlyCloudy => const {
                &[
                    Rgba::rgb(135, 206, 235),
                    Rgba::rgb(224, 246, 255),
                    Rgba::rgb(240, 248, 255),
                ]
            },
            Self::ClearNight | Self::PartlyCloudyNight => const {
                &[
                    Rgba::rgb(25, 25, 112),
                    Rgba::rgb(47, 47, 79),
                    Rgba::rgb(72, 61, 139),
                ]
            },
            Self::Cloudy => const {
                &[
                    Rgba::rgb(112, 128, 144),
                    Rgba::rgb(169, 169, 169),
                    Rgba::rgb(192, 192, 192),
                ]
            },
            Self::Windy => const {
                &[
                    Rgba::rgb(135, 206, 235),
                    Rgba::rgb(176, 196, 222),
                    Rgba::rgb(211, 211, 211),
                ]
            },
            Self::Haze => const {
                &[
                    Rgba::rgb(245, 222, 179),
                    Rgba::rgb(221, 216, 199),
                    Rgba::rgb(229, 229, 220),
                ]
            },
            Self::Fog => const {
                &[
                    Rgba::rgb(211, 211, 211),
                    Rgba::rgb(229, 229, 229),
                    Rgba::rgb(245, 245, 245),
                ]
            },
            Self::Drizzle => const {
                &[
                    Rgba::rgb(119, 136, 153),
                    Rgba::rgb(169, 169, 169),
                    Rgba::rgb(192, 192, 192),
                ]
            },
            Self::Rain => const {
                &[
                    Rgba::rgb(70, 130, 180),
                    Rgba::rgb(100, 149, 237),
                    Rgba::rgb(135, 206, 235),
                ]
            },
            Self::HeavyRain => const {
                &[
                    Rgba::rgb(47, 79, 79),
                    Rgba::rgb(70, 130, 180),
                    Rgba::rgb(95, 158, 160),
                ]
            },
            Self::FreezingRain => const {
                &[
                    Rgba::rgb(70, 130, 180),
                    Rgba::rgb(176, 196, 222),
                    Rgba::rgb(230, 230, 250),
                ]
            },
            Self::Thunderstorm => const {
                &[
                    Rgba::rgb(44, 62, 80),
                    Rgba::rgb(52, 73, 94),
                    Rgba::rgb(93, 109, 126),
                ]
            },
            Self::Snow => const {
                &[
                    Rgba::rgb(47, 79, 79),
                    Rgba::rgb(112, 128, 144),
                    Rgba::rgb(169, 169, 169),
                ]
            },
            Self::HeavySnow => const {
                &[
                    Rgba::rgb(28, 28, 28),
                    Rgba::rgb(47, 79, 79),
                    Rgba::rgb(105, 105, 105),
                ]
            },
            Self::Sunrise => const {
                &[
                    Rgba::rgb(30, 60, 114),
                    Rgba::rgb(42, 82, 152),
                    Rgba::rgb(255, 123, 123),
                    Rgba::rgb(255, 216, 155),
                    Rgba::rgb(135, 206, 235),
                ]
            },
            Self::Sunset => const {
                &[
                    Rgba::rgb(15, 32, 39),
                    Rgba::rgb(32, 58, 67),
                    Rgba::rgb(44, 83, 100),
                    Rgba::rgb(255, 107, 107),
                    Rgba::rgb(254, 202, 87),
                    Rgba::rgb(72, 202, 228),
                ]
            },
        }
    }

    /// Which subsystems this preset activates, and where its celestial
    /// body sits. The match is exhaustive, so adding a kind without a
    /// recipe fails the build.
    #[must_use]
    pub fn recipe(self) -> SceneRecipe {
        match self {
            Self::Clear => SceneRecipe {
                celestial: Some(CelestialSpec::sun(0.25, 70.0)),
                ..SceneRecipe::EMPTY
            },
            Self::ClearNight => SceneRecipe {
                celestial: Some(CelestialSpec::moon(0.25, 50.0)),
                stars: true,
                ..SceneRecipe::EMPTY
            },
            Self::PartlyCloudy => SceneRecipe {
                celestial: Some(CelestialSpec::sun(0.2, 60.0)),
                clouds: CloudMode::Light,
                ..SceneRecipe::EMPTY
            },
            Self::PartlyCloudyNight => SceneRecipe {
                celestial: Some(CelestialSpec::moon(0.2, 45.0)),
                clouds: CloudMode::Light,
                stars: true,
                ..SceneRecipe::EMPTY
            },
            Self::Cloudy => SceneRecipe {
                clouds: CloudMode::Full(CloudStyle::Grey),
                ..SceneRecipe::EMPTY
            },
            Self::Windy => SceneRecipe {
                clouds: CloudMode::Full(CloudStyle::Grey),
                wind: true,
                ..SceneRecipe::EMPTY
            },
            Self::Haze => SceneRecipe {
                fog: Some(FogDensity::Haze),
                ..SceneRecipe::EMPTY
            },
            Self::Fog => SceneRecipe {
                fog: Some(FogDensity::Fog),
                ..SceneRecipe::EMPTY
            },
            Self::Drizzle => SceneRecipe {
                clouds: CloudMode::Full(CloudStyle::Drizzle),
                precip: Some(PrecipFamily::Drizzle),
                ..SceneRecipe::EMPTY
            },
            Self::Rain => SceneRecipe {
                clouds: CloudMode::Full(CloudStyle::Rain),
                precip: Some(PrecipFamily::Rain),
                ..SceneRecipe::EMPTY
            },
            Self::HeavyRain => SceneRecipe {
                clouds: CloudMode::Full(CloudStyle::Rain),
                precip: Some(PrecipFamily::HeavyRain),
                ..SceneRecipe::EMPTY
            },
            Self::FreezingRain => SceneRecipe {
                clouds: CloudMode::Full(CloudStyle::Freezing),
                precip: Some(PrecipFamily::Freezing),
                ..SceneRecipe::EMPTY
            },
            Self::Thunderstorm => SceneRecipe {
                clouds: CloudMode::Full(CloudStyle::Storm),
                precip: Some(PrecipFamily::StormRain),
                lightning: true,
                ..SceneRecipe::EMPTY
            },
            Self::Snow => SceneRecipe {
                snow: Some(SnowDensity::Moderate),
                ..SceneRecipe::EMPTY
            },
            Self::HeavySnow => SceneRecipe {
                snow: Some(SnowDensity::Heavy),
                ..SceneRecipe::EMPTY
            },
            Self::Sunrise | Self::Sunset => SceneRecipe {
                celestial: Some(CelestialSpec::sun(0.7, 80.0)),
                clouds: CloudMode::Light,
                ..SceneRecipe::EMPTY
            },
        }
    }
}

impl FromStr for WeatherKind {
    type Err = UnknownWeather;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let wanted = input.trim().to_ascii_lowercase();
        WEATHER_KINDS
            .iter()
            .copied()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| UnknownWeather(input.to_string()))
    }
}

/// Subsystem activation table for one weather kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneRecipe {
    pub celestial: Option<CelestialSpec>,
    pub clouds: CloudMode,
    pub precip: Option<PrecipFamily>,
    pub snow: Option<SnowDensity>,
    pub fog: Option<FogDensity>,
    pub wind: bool,
    pub lightning: bool,
    pub stars: bool,
}

impl SceneRecipe {
    pub const EMPTY: Self = Self {
        celestial: None,
        clouds: CloudMode::None,
        precip: None,
        snow: None,
        fog: None,
        wind: false,
        lightning: false,
        stars: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelestialBody {
    Sun,
    Moon,
}

/// Placement of the sun or moon for a preset: the body's resting
/// elevation as a fraction of surface height, and its disc radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialSpec {
    pub body: CelestialBody,
    pub base_y: f32,
    pub radius: f32,
}

impl CelestialSpec {
    #[must_use]
    pub const fn sun(base_y: f32, radius: f32) -> Self {
        Self {
            body: CelestialBody::Sun,
            base_y,
            radius,
        }
    }

    #[must_use]
    pub const fn moon(base_y: f32, radius: f32) -> Self {
        Self {
            body: CelestialBody::Moon,
            base_y,
            radius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudMode {
    None,
    /// Few, white, translucent, single-layered.
    Light,
    /// Full three-layer deck tinted by style.
    Full(CloudStyle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudStyle {
    Grey,
    Drizzle,
    Rain,
    Freezing,
    Storm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipFamily {
    Drizzle,
    Rain,
    HeavyRain,
    /// The rain layered under a thunderstorm.
    StormRain,
    Freezing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnowDensity {
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogDensity {
    Haze,
    Fog,
}

/// Moon phases in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

pub const MOON_PHASES: [MoonPhase; 4] = [
    MoonPhase::New,
    MoonPhase::FirstQuarter,
    MoonPhase::Full,
    MoonPhase::LastQuarter,
];

impl MoonPhase {
    #[must_use]
    pub fn cycled(self, direction: isize) -> Self {
        let len = MOON_PHASES.len() as isize;
        let at = MOON_PHASES.iter().position(|&p| p == self).unwrap_or(0) as isize;
        MOON_PHASES[(at + direction).rem_euclid(len) as usize]
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::FirstQuarter => "First Quarter",
            Self::Full => "Full Moon",
            Self::LastQuarter => "Last Quarter",
        }
    }
}

/// Coarse daypart label for a sun arc position in [0, 1).
#[must_use]
pub fn sun_position_label(position: f32) -> &'static str {
    if position < 0.2 {
        "Sunrise"
    } else if position < 0.4 {
        "Morning"
    } else if position < 0.6 {
        "Midday"
    } else if position < 0.8 {
        "Afternoon"
    } else {
        "Sunset"
    }
}

#[cfg(test)]
mod tests;
