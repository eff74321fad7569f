//! Temperature scales, converted through Celsius

use serde::{Deserialize, Serialize};

/// Supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
    Delisle,
    Newton,
    Reaumur,
    Romer,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 8] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
        TemperatureScale::Rankine,
        TemperatureScale::Delisle,
        TemperatureScale::Newton,
        TemperatureScale::Reaumur,
        TemperatureScale::Romer,
    ];

    /// Unit id used in the catalog
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "C",
            TemperatureScale::Fahrenheit => "F",
            TemperatureScale::Kelvin => "K",
            TemperatureScale::Rankine => "R",
            TemperatureScale::Delisle => "De",
            TemperatureScale::Newton => "N",
            TemperatureScale::Reaumur => "Ré",
            TemperatureScale::Romer => "Rø",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scale| scale.symbol() == symbol)
    }

    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => ((value - 32.0) * 5.0) / 9.0,
            TemperatureScale::Kelvin => value - 273.15,
            TemperatureScale::Rankine => ((value - 491.67) * 5.0) / 9.0,
            TemperatureScale::Delisle => 100.0 - (value * 2.0) / 3.0,
            TemperatureScale::Newton => (value * 100.0) / 33.0,
            TemperatureScale::Reaumur => (value * 5.0) / 4.0,
            TemperatureScale::Romer => ((value - 7.5) * 40.0) / 21.0,
        }
    }

    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            // Explicit parentheses keep (c * 9/5) + 32 ordering
            TemperatureScale::Fahrenheit => ((celsius * 9.0) / 5.0) + 32.0,
            TemperatureScale::Kelvin => celsius + 273.15,
            TemperatureScale::Rankine => ((celsius + 273.15) * 9.0) / 5.0,
            TemperatureScale::Delisle => ((100.0 - celsius) * 3.0) / 2.0,
            TemperatureScale::Newton => (celsius * 33.0) / 100.0,
            TemperatureScale::Reaumur => (celsius * 4.0) / 5.0,
            TemperatureScale::Romer => (celsius * 21.0) / 40.0 + 7.5,
        }
    }

    /// Converts between scales, returning `value` untouched when both are equal
    pub fn convert(self, value: f64, to: TemperatureScale) -> f64 {
        if self == to {
            return value;
        }
        to.from_celsius(self.to_celsius(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_fixed_points() {
        use TemperatureScale::*;
        assert_close(Celsius.convert(100.0, Fahrenheit), 212.0);
        assert_close(Celsius.convert(0.0, Kelvin), 273.15);
        assert_close(Fahrenheit.convert(-40.0, Celsius), -40.0);
        assert_close(Kelvin.convert(0.0, Rankine), 0.0);
        assert_close(Celsius.convert(100.0, Delisle), 0.0);
        assert_close(Celsius.convert(0.0, Delisle), 150.0);
        assert_close(Celsius.convert(100.0, Newton), 33.0);
        assert_close(Celsius.convert(100.0, Reaumur), 80.0);
        assert_close(Celsius.convert(0.0, Romer), 7.5);
        assert_close(Celsius.convert(100.0, Romer), 60.0);
    }

    #[test]
    fn test_round_trip_every_scale() {
        for scale in TemperatureScale::ALL {
            for value in [-459.67, -40.0, 0.0, 36.6, 100.0, 1234.5] {
                assert_close(scale.from_celsius(scale.to_celsius(value)), value);
            }
        }
    }

    #[test]
    fn test_same_scale_is_identity() {
        let value = 0.1 + 0.2;
        for scale in TemperatureScale::ALL {
            assert_eq!(scale.convert(value, scale), value);
        }
    }

    #[test]
    fn test_symbols_round_trip() {
        for scale in TemperatureScale::ALL {
            assert_eq!(TemperatureScale::from_symbol(scale.symbol()), Some(scale));
        }
        assert_eq!(TemperatureScale::from_symbol("X"), None);
    }
}
