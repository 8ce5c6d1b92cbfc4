//! Human-readable magnitude strings such as `"1.2M"` or `"300k"`

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    static ref MAGNITUDE: Regex =
        Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)([kM])$")
            .expect("magnitude pattern is valid");
}

/// Unit suffix of a magnitude string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    /// `k`, ×1 000
    Thousands,
    /// `M`, ×1 000 000
    Millions,
}

impl Magnitude {
    pub fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            'k' => Some(Magnitude::Thousands),
            'M' => Some(Magnitude::Millions),
            _ => None,
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Magnitude::Thousands => 1_000.0,
            Magnitude::Millions => 1_000_000.0,
        }
    }

    pub fn suffix(&self) -> char {
        match self {
            Magnitude::Thousands => 'k',
            Magnitude::Millions => 'M',
        }
    }
}

/// Parse `<number><unit>` where unit is `k` or `M`.
///
/// Strings without one of those two suffixes are rejected.
pub fn parse_magnitude(s: &str) -> Result<f64> {
    let s = s.trim();
    let caps = MAGNITUDE.captures(s).ok_or_else(|| {
        Error::Value(format!(
            "'{}' is not a magnitude string (expected a number followed by 'k' or 'M')",
            s
        ))
    })?;

    let number: f64 = caps[1]
        .parse()
        .map_err(|_| Error::Value(format!("could not convert '{}' to float", &caps[1])))?;
    let unit = caps[2]
        .chars()
        .next()
        .and_then(Magnitude::from_suffix)
        .ok_or_else(|| Error::Value(format!("unrecognized unit in '{}'", s)))?;

    Ok(number * unit.factor())
}

/// The scripts' original conversion rule.
///
/// Any `M` anywhere in the string means millions; everything else drops its
/// last character and is read as thousands, so `"300"` becomes `30 000`.
/// Prefer [`parse_magnitude`]; this exists to reproduce historical output.
pub fn parse_magnitude_legacy(s: &str) -> Result<f64> {
    let factor = if s.contains('M') {
        Magnitude::Millions.factor()
    } else {
        Magnitude::Thousands.factor()
    };

    let mut chars = s.chars();
    chars.next_back();
    let head = chars.as_str();
    let number: f64 = head
        .trim()
        .parse()
        .map_err(|_| Error::Value(format!("could not convert string to float: '{}'", head)))?;

    Ok(number * factor)
}
