//! Compact "years ago" labels such as `3.5 mya` or `2 kya`.

/// Unit shown after the number. Only every third power of ten has a unit;
/// anything outside `ya..=bya` falls back to [`DecadeUnit::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecadeUnit {
    Ya,
    Kya,
    Mya,
    Bya,
    Unknown,
}

impl DecadeUnit {
    pub fn from_exponent(exponent: i32) -> Self {
        match exponent {
            0 => DecadeUnit::Ya,
            3 => DecadeUnit::Kya,
            6 => DecadeUnit::Mya,
            9 => DecadeUnit::Bya,
            _ => DecadeUnit::Unknown,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            DecadeUnit::Ya => "ya",
            DecadeUnit::Kya => "kya",
            DecadeUnit::Mya => "mya",
            DecadeUnit::Bya => "bya",
            DecadeUnit::Unknown => "--",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// `3.5 mya`, used for event labels
    #[default]
    OneDecimal,
    /// `3 mya`, used for axis ticks
    Integer,
}

pub const NOW_LABEL: &str = "Now";

pub fn format_years_ago(years_ago: f64, precision: Precision) -> String {
    if years_ago == 1.0 || years_ago == 0.0 {
        return NOW_LABEL.to_string();
    }
    let power = years_ago.log10();
    let remainder = power.rem_euclid(3.0);
    let even_power = (power - remainder).round() as i32;
    let unit = DecadeUnit::from_exponent(even_power);
    let number = 10f64.powf(remainder);
    match precision {
        Precision::OneDecimal => format!("{number:.1} {}", unit.suffix()),
        Precision::Integer => format!("{} {}", number.round() as i64, unit.suffix()),
    }
}
