#![allow(clippy::missing_errors_doc)]

use clap::{Parser, ValueEnum};

use crate::domain::weather::{MoonPhase, WeatherKind};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum MoonPhaseArg {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl From<MoonPhaseArg> for MoonPhase {
    fn from(arg: MoonPhaseArg) -> Self {
        match arg {
            MoonPhaseArg::New => MoonPhase::New,
            MoonPhaseArg::FirstQuarter => MoonPhase::FirstQuarter,
            MoonPhaseArg::Full => MoonPhase::Full,
            MoonPhaseArg::LastQuarter => MoonPhase::LastQuarter,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "sky-stage",
    version,
    about = "Procedural animated sky scenes for the terminal"
)]
pub struct Cli {
    /// Starting weather preset (e.g. clear, rain, heavy-snow)
    #[arg(long)]
    pub weather: Option<WeatherKind>,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Seed the scene's randomness for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with the moon hidden
    #[arg(long)]
    pub hide_moon: bool,

    /// Starting moon phase
    #[arg(long, value_enum)]
    pub moon_phase: Option<MoonPhaseArg>,

    /// Starting sun arc position in [0, 1)
    #[arg(long)]
    pub sun_position: Option<f32>,

    /// Lower motion mode (caps the frame rate)
    #[arg(long)]
    pub reduced_motion: bool,

    /// Render N frames headless, print scene statistics, and exit
    #[arg(long, value_name = "N")]
    pub probe: Option<u32>,
}

impl Cli {
    #[must_use]
    pub fn effective_fps(&self) -> u8 {
        if self.reduced_motion {
            self.fps.min(20)
        } else {
            self.fps
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(position) = self.sun_position
            && !(0.0..1.0).contains(&position)
        {
            anyhow::bail!("--sun-position must lie in [0, 1)")
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, MoonPhaseArg};
    use crate::domain::weather::WeatherKind;

    #[test]
    fn parses_weather_slugs() {
        let cli = Cli::parse_from(["sky-stage", "--weather", "freezing-rain"]);
        assert_eq!(cli.weather, Some(WeatherKind::FreezingRain));
    }

    #[test]
    fn rejects_unknown_weather() {
        assert!(Cli::try_parse_from(["sky-stage", "--weather", "monsoon"]).is_err());
    }

    #[test]
    fn rejects_out_of_range_fps() {
        assert!(Cli::try_parse_from(["sky-stage", "--fps", "5"]).is_err());
        assert!(Cli::try_parse_from(["sky-stage", "--fps", "61"]).is_err());
    }

    #[test]
    fn reduced_motion_caps_the_frame_rate() {
        let cli = Cli::parse_from(["sky-stage", "--fps", "60", "--reduced-motion"]);
        assert_eq!(cli.effective_fps(), 20);

        let cli = Cli::parse_from(["sky-stage", "--fps", "60"]);
        assert_eq!(cli.effective_fps(), 60);
    }

    #[test]
    fn parses_moon_phase_values() {
        let cli = Cli::parse_from(["sky-stage", "--moon-phase", "first-quarter"]);
        assert_eq!(cli.moon_phase, Some(MoonPhaseArg::FirstQuarter));
    }

    #[test]
    fn validate_rejects_out_of_range_sun_position() {
        let cli = Cli::parse_from(["sky-stage", "--sun-position", "1.5"]);
        assert!(cli.validate().is_err());
        let cli = Cli::parse_from(["sky-stage", "--sun-position", "0.45"]);
        assert!(cli.validate().is_ok());
    }
}
