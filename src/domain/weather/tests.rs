use super::*;

// ── carousel order ───────────────────────────────────────────────────────

#[test]
fn table_has_seventeen_unique_kinds() {
    assert_eq!(WEATHER_KINDS.len(), 17);
    for (i, kind) in WEATHER_KINDS.iter().enumerate() {
        assert_eq!(kind.index(), i, "{kind:?}");
    }
}

#[test]
fn carousel_starts_at_clear_and_wraps_both_ways() {
    assert_eq!(WEATHER_KINDS[0], WeatherKind::Clear);
    assert_eq!(WeatherKind::Clear.cycled(-1), WeatherKind::Sunset);
    assert_eq!(WeatherKind::Sunset.cycled(1), WeatherKind::Clear);
}

#[test]
fn from_index_wraps_via_modulo() {
    assert_eq!(WeatherKind::from_index(17), WeatherKind::Clear);
    assert_eq!(WeatherKind::from_index(-1), WeatherKind::Sunset);
    assert_eq!(WeatherKind::from_index(-18), WeatherKind::Sunset);
}

// ── slugs & parsing ──────────────────────────────────────────────────────

#[test]
fn every_slug_round_trips_through_from_str() {
    for kind in WEATHER_KINDS {
        let parsed: WeatherKind = kind.slug().parse().expect(kind.slug());
        assert_eq!(parsed, kind);
    }
}

#[test]
fn from_str_is_case_and_whitespace_tolerant() {
    assert_eq!(
        " Heavy-Rain ".parse::<WeatherKind>().unwrap(),
        WeatherKind::HeavyRain
    );
}

#[test]
fn from_str_rejects_unknown_names() {
    assert!("monsoon".parse::<WeatherKind>().is_err());
}

// ── palettes ─────────────────────────────────────────────────────────────

#[test]
fn palettes_have_three_to_six_stops() {
    for kind in WEATHER_KINDS {
        let stops = kind.palette().len();
        assert!((3..=6).contains(&stops), "{kind:?} has {stops} stops");
    }
}

#[test]
fn sunrise_and_sunset_carry_the_wide_gradients() {
    assert_eq!(WeatherKind::Sunrise.palette().len(), 5);
    assert_eq!(WeatherKind::Sunset.palette().len(), 6);
}

// ── recipes ──────────────────────────────────────────────────────────────

#[test]
fn clear_activates_only_the_sun() {
    let recipe = WeatherKind::Clear.recipe();
    assert_eq!(
        recipe.celestial.map(|c| c.body),
        Some(CelestialBody::Sun)
    );
    assert_eq!(recipe.clouds, CloudMode::None);
    assert!(recipe.precip.is_none());
    assert!(recipe.snow.is_none());
    assert!(recipe.fog.is_none());
    assert!(!recipe.wind && !recipe.lightning && !recipe.stars);
}

#[test]
fn thunderstorm_layers_clouds_rain_and_lightning() {
    let recipe = WeatherKind::Thunderstorm.recipe();
    assert_eq!(recipe.clouds, CloudMode::Full(CloudStyle::Storm));
    assert_eq!(recipe.precip, Some(PrecipFamily::StormRain));
    assert!(recipe.lightning);
    assert!(recipe.celestial.is_none());
}

#[test]
fn night_scenes_seed_stars() {
    assert!(WeatherKind::ClearNight.recipe().stars);
    assert!(WeatherKind::PartlyCloudyNight.recipe().stars);
    assert!(!WeatherKind::Cloudy.recipe().stars);
}

#[test]
fn snow_variants_differ_only_in_density() {
    assert_eq!(
        WeatherKind::Snow.recipe().snow,
        Some(SnowDensity::Moderate)
    );
    assert_eq!(
        WeatherKind::HeavySnow.recipe().snow,
        Some(SnowDensity::Heavy)
    );
    assert_eq!(WeatherKind::HeavySnow.recipe().clouds, CloudMode::None);
}

// ── moon phases ──────────────────────────────────────────────────────────

#[test]
fn moon_phase_cycles_through_all_four_and_wraps() {
    let mut phase = MoonPhase::New;
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(phase);
        phase = phase.cycled(1);
    }
    assert_eq!(seen, MOON_PHASES.to_vec());
    assert_eq!(phase, MoonPhase::New);
    assert_eq!(MoonPhase::New.cycled(-1), MoonPhase::LastQuarter);
}

#[test]
fn moon_phase_names_match_the_ui_labels() {
    assert_eq!(MoonPhase::Full.display_name(), "Full Moon");
    assert_eq!(MoonPhase::FirstQuarter.display_name(), "First Quarter");
}

// ── sun position labels ──────────────────────────────────────────────────

#[test]
fn sun_position_label_buckets() {
    assert_eq!(sun_position_label(0.0), "Sunrise");
    assert_eq!(sun_position_label(0.19), "Sunrise");
    assert_eq!(sun_position_label(0.2), "Morning");
    assert_eq!(sun_position_label(0.45), "Midday");
    assert_eq!(sun_position_label(0.6), "Afternoon");
    assert_eq!(sun_position_label(0.85), "Sunset");
    assert_eq!(sun_position_label(0.999), "Sunset");
}
