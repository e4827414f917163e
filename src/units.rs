//! Rate-to-text formatting with magnitude-scaled unit selection.

use std::fmt;

/// Which unit family rates are displayed in.
///
/// `bits` switches from bytes to bits (×8), `binary` switches the scaling
/// step from 1000 to 1024 with IEC-style suffixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitSystem {
    pub bits: bool,
    pub binary: bool,
}

const DECIMAL_BYTES: [&str; 4] = ["B/s", "kB/s", "MB/s", "GB/s"];
const BINARY_BYTES: [&str; 4] = ["B/s", "KiB/s", "MiB/s", "GiB/s"];
const DECIMAL_BITS: [&str; 4] = ["b/s", "kb/s", "Mb/s", "Gb/s"];
const BINARY_BITS: [&str; 4] = ["b/s", "Kib/s", "Mib/s", "Gib/s"];

impl UnitSystem {
    /// Magnitude step between adjacent units.
    fn step(&self) -> f64 {
        if self.binary {
            1024.0
        } else {
            1000.0
        }
    }

    fn suffixes(&self) -> &'static [&'static str; 4] {
        match (self.bits, self.binary) {
            (false, false) => &DECIMAL_BYTES,
            (false, true) => &BINARY_BYTES,
            (true, false) => &DECIMAL_BITS,
            (true, true) => &BINARY_BITS,
        }
    }

    /// Unit shown for a zero rate.
    pub fn base_unit(&self) -> &'static str {
        self.suffixes()[0]
    }
}

/// A rate rendered for display: numeric text plus unit suffix, kept
/// separate so frontends can style them independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSpeed {
    pub text: String,
    pub unit: &'static str,
}

impl Default for FormattedSpeed {
    fn default() -> Self {
        FormattedSpeed {
            text: String::new(),
            unit: "",
        }
    }
}

impl fmt::Display for FormattedSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.text, self.unit)
    }
}

/// Format a rate in bytes/sec as a (text, unit) pair.
///
/// The largest unit keeping the magnitude below the step is chosen, capped
/// at the GB/s tier. `digits` is the total digit budget (minimum 3): the
/// fractional part shrinks by two once the integer part reaches three
/// digits and by one once it reaches two, so the overall precision stays
/// roughly constant. Zero bypasses scaling entirely.
pub fn format_speed(bytes_per_sec: f64, digits: u32, unit: UnitSystem) -> FormattedSpeed {
    if bytes_per_sec == 0.0 {
        return FormattedSpeed {
            text: "0".to_string(),
            unit: unit.base_unit(),
        };
    }

    let mut digits = digits.max(3) as i32;
    let mut amount = bytes_per_sec;
    if unit.bits {
        amount *= 8.0;
    }

    let step = unit.step();
    let mut tier = 0;
    while amount >= step && tier < 3 {
        amount /= step;
        tier += 1;
    }

    if amount >= 100.0 {
        digits -= 2;
    } else if amount >= 10.0 {
        digits -= 1;
    }
    let decimals = (digits - 1).max(0) as usize;

    FormattedSpeed {
        text: format!("{amount:.decimals$}"),
        unit: unit.suffixes()[tier],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_special_cased() {
        let speed = format_speed(0.0, 3, UnitSystem::default());
        assert_eq!(speed.text, "0");
        assert_eq!(speed.unit, "B/s");

        let bits = UnitSystem {
            bits: true,
            binary: false,
        };
        assert_eq!(format_speed(0.0, 5, bits).unit, "b/s");
    }

    #[test]
    fn stays_in_base_unit_below_step() {
        let speed = format_speed(999.0, 3, UnitSystem::default());
        assert_eq!(speed.text, "999");
        assert_eq!(speed.unit, "B/s");
    }

    #[test]
    fn scales_to_megabytes() {
        let speed = format_speed(1_500_000.0, 3, UnitSystem::default());
        assert_eq!(speed.text, "1.50");
        assert_eq!(speed.unit, "MB/s");
    }

    #[test]
    fn fractional_digits_shrink_with_magnitude() {
        let unit = UnitSystem::default();
        assert_eq!(format_speed(1_500.0, 3, unit).text, "1.50");
        assert_eq!(format_speed(15_000.0, 3, unit).text, "15.0");
        assert_eq!(format_speed(150_000.0, 3, unit).text, "150");
    }

    #[test]
    fn digit_budget_is_clamped_to_three() {
        let speed = format_speed(1_500.0, 0, UnitSystem::default());
        assert_eq!(speed.text, "1.50");
    }

    #[test]
    fn binary_prefixes_use_1024_step() {
        let unit = UnitSystem {
            bits: false,
            binary: true,
        };
        let below = format_speed(1023.0, 3, unit);
        assert_eq!(below.unit, "B/s");

        let above = format_speed(1024.0, 3, unit);
        assert_eq!(above.text, "1.00");
        assert_eq!(above.unit, "KiB/s");

        assert_eq!(format_speed(1024.0 * 1024.0, 3, unit).unit, "MiB/s");
    }

    #[test]
    fn bit_units_multiply_by_eight() {
        let unit = UnitSystem {
            bits: true,
            binary: false,
        };
        let speed = format_speed(1_000_000.0, 3, unit);
        assert_eq!(speed.text, "8.00");
        assert_eq!(speed.unit, "Mb/s");
    }

    #[test]
    fn caps_at_gigabyte_tier() {
        let speed = format_speed(2_500_000_000_000.0, 3, UnitSystem::default());
        assert_eq!(speed.unit, "GB/s");
        assert_eq!(speed.text, "2500");
    }

    #[test]
    fn formatting_is_pure() {
        let unit = UnitSystem {
            bits: true,
            binary: true,
        };
        let a = format_speed(123_456.0, 4, unit);
        let b = format_speed(123_456.0, 4, unit);
        assert_eq!(a, b);
    }
}
