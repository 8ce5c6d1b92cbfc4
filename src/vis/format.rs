//! Axis tick label formatting

/// Values above this render in millions on an auto-selected axis
pub const MILLIONS_THRESHOLD: f64 = 2_000_000.0;

/// How tick values on one axis are rendered
///
/// A format applies to a whole axis; it is chosen once per chart, never per
/// tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickFormat {
    /// The number itself, without a trailing `.0` for whole values
    #[default]
    Plain,
    /// `round(x / 1 000)` followed by `k`
    Thousands,
    /// `round(x / 1 000 000)` followed by `M`
    Millions,
    /// `Thousands` from 1 000 upwards, `Plain` below
    CompactThousands,
}

impl TickFormat {
    /// `Millions` when `max` exceeds 2 000 000, otherwise `Thousands`
    pub fn for_max(max: f64) -> TickFormat {
        if max > MILLIONS_THRESHOLD {
            TickFormat::Millions
        } else {
            TickFormat::Thousands
        }
    }

    pub fn format(&self, x: f64) -> String {
        match self {
            TickFormat::Plain => format_plain(x),
            TickFormat::Thousands => format!("{:.0}k", x / 1e3),
            TickFormat::Millions => format!("{:.0}M", x / 1e6),
            TickFormat::CompactThousands => {
                if x >= 1_000.0 {
                    format!("{:.0}k", x / 1e3)
                } else {
                    format_plain(x)
                }
            }
        }
    }
}

fn format_plain(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{:.0}", x)
    } else {
        format!("{:.2}", x)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_threshold() {
        assert_eq!(TickFormat::for_max(3_000_000.0), TickFormat::Millions);
        assert_eq!(TickFormat::for_max(2_000_000.0), TickFormat::Thousands);
        assert_eq!(TickFormat::for_max(500_000.0), TickFormat::Thousands);
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(TickFormat::Millions.format(80_000_000.0), "80M");
        assert_eq!(TickFormat::Millions.format(3_000_000.0), "3M");
        assert_eq!(TickFormat::Thousands.format(500_000.0), "500k");
        assert_eq!(TickFormat::Thousands.format(12_345.0), "12k");
    }

    #[test]
    fn test_compact_thousands() {
        assert_eq!(TickFormat::CompactThousands.format(300.0), "300");
        assert_eq!(TickFormat::CompactThousands.format(1_000.0), "1k");
        assert_eq!(TickFormat::CompactThousands.format(10_000.0), "10k");
    }

    #[test]
    fn test_plain() {
        assert_eq!(TickFormat::Plain.format(1990.0), "1990");
        assert_eq!(TickFormat::Plain.format(72.25), "72.25");
        assert_eq!(TickFormat::Plain.format(72.5), "72.5");
    }
}
