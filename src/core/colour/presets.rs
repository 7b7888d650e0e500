use crate::core::data::colour::Colour;
use crate::core::data::gradient_stops::{GradientStops, GradientStopsError};

/// Built-in gradient tables carried over as static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum GradientPreset {
    #[default]
    TrafficLights,
    VibrantRainbow,
    GloomyGreyscale,
    IceColdBlues,
    RedHotFire,
}

const TRAFFIC_LIGHTS: &[Colour] = &[
    Colour { r: 255, g: 0, b: 0 },
    Colour { r: 255, g: 255, b: 0 },
    Colour { r: 0, g: 255, b: 0 },
];

const VIBRANT_RAINBOW: &[Colour] = &[
    Colour { r: 255, g: 0, b: 0 },
    Colour { r: 255, g: 255, b: 0 },
    Colour { r: 0, g: 255, b: 0 },
    Colour { r: 0, g: 255, b: 255 },
    Colour { r: 0, g: 0, b: 255 },
    Colour { r: 255, g: 0, b: 255 },
];

const GLOOMY_GREYSCALE: &[Colour] = &[
    Colour { r: 0, g: 0, b: 0 },
    Colour {
        r: 255,
        g: 255,
        b: 255,
    },
];

const ICE_COLD_BLUES: &[Colour] = &[
    Colour { r: 0, g: 128, b: 255 },
    Colour { r: 135, g: 0, b: 255 },
    Colour {
        r: 255,
        g: 255,
        b: 255,
    },
];

const RED_HOT_FIRE: &[Colour] = &[
    Colour { r: 255, g: 0, b: 0 },
    Colour { r: 255, g: 170, b: 0 },
    Colour { r: 255, g: 255, b: 0 },
    Colour {
        r: 255,
        g: 255,
        b: 255,
    },
];

impl GradientPreset {
    pub const ALL: &'static [Self] = &[
        Self::TrafficLights,
        Self::VibrantRainbow,
        Self::GloomyGreyscale,
        Self::IceColdBlues,
        Self::RedHotFire,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TrafficLights => "TRAFFIC LIGHTS",
            Self::VibrantRainbow => "VIBRANT RAINBOW",
            Self::GloomyGreyscale => "GLOOMY GREYSCALE",
            Self::IceColdBlues => "ICE-COLD BLUES",
            Self::RedHotFire => "RED-HOT FIRE",
        }
    }

    #[must_use]
    pub const fn colours(self) -> &'static [Colour] {
        match self {
            Self::TrafficLights => TRAFFIC_LIGHTS,
            Self::VibrantRainbow => VIBRANT_RAINBOW,
            Self::GloomyGreyscale => GLOOMY_GREYSCALE,
            Self::IceColdBlues => ICE_COLD_BLUES,
            Self::RedHotFire => RED_HOT_FIRE,
        }
    }

    pub fn stops(self) -> Result<GradientStops, GradientStopsError> {
        GradientStops::from_slice(self.colours())
    }
}

impl std::fmt::Display for GradientPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            GradientPreset::ALL.first(),
            Some(&GradientPreset::default())
        );
    }

    #[test]
    fn every_preset_builds_valid_stops() {
        for &preset in GradientPreset::ALL {
            let stops = preset.stops().unwrap();
            assert!(stops.len() >= 2, "{} has too few stops", preset);
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = GradientPreset::ALL
            .iter()
            .map(|p| p.display_name())
            .collect();

        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn traffic_lights_runs_red_to_green() {
        let stops = GradientPreset::TrafficLights.stops().unwrap();

        assert_eq!(stops.stops()[0], Colour { r: 255, g: 0, b: 0 });
        assert_eq!(stops.stops()[2], Colour { r: 0, g: 255, b: 0 });
    }
}
