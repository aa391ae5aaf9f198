use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a value is compared against a band's upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Half-open bands: `value < upper`.
    Below,
    /// Closed upper bounds: `value <= upper`.
    AtMost,
}

impl Edge {
    fn contains(self, value: Decimal, upper: Decimal) -> bool {
        match self {
            Edge::Below => value < upper,
            Edge::AtMost => value <= upper,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Edge::Below => "<",
            Edge::AtMost => "<=",
        }
    }
}

/// Ordered classification bands, cleanest first.
///
/// `bounded` lists `(upper, class)` pairs in ascending order; anything above
/// the last bound falls into `top`.
#[derive(Debug)]
pub struct BandTable<C: 'static> {
    pub edge: Edge,
    pub bounded: &'static [(Decimal, C)],
    pub top: C,
}

impl<C: Copy> BandTable<C> {
    pub fn classify(&self, value: Decimal) -> C {
        self.bounded
            .iter()
            .find(|(upper, _)| self.edge.contains(value, *upper))
            .map(|(_, class)| *class)
            .unwrap_or(self.top)
    }
}

impl<C: Copy + fmt::Display> BandTable<C> {
    /// Human-readable band list, e.g. `"< 25"  -> "Excellent"`.
    pub fn describe(&self) -> Vec<BandDescription> {
        let mut out: Vec<BandDescription> = self
            .bounded
            .iter()
            .map(|(upper, class)| BandDescription {
                range: format!("{} {}", self.edge.symbol(), upper),
                label: class.to_string(),
            })
            .collect();

        let top_range = match (self.edge, self.bounded.last()) {
            (Edge::Below, Some((upper, _))) => format!(">= {upper}"),
            (Edge::AtMost, Some((upper, _))) => format!("> {upper}"),
            (_, None) => "any".to_string(),
        };
        out.push(BandDescription {
            range: top_range,
            label: self.top.to_string(),
        });
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandDescription {
    pub range: String,
    pub label: String,
}

/// Qualitative risk attached to some classifications.
///
/// Each index uses its own subset of these levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Safe,
    Low,
    Medium,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    Critical,
    Acceptable,
    Caution,
    Unacceptable,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Safe => write!(f, "Safe"),
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::VeryHigh => write!(f, "Very High"),
            RiskLevel::Critical => write!(f, "Critical"),
            RiskLevel::Acceptable => write!(f, "Acceptable"),
            RiskLevel::Caution => write!(f, "Caution"),
            RiskLevel::Unacceptable => write!(f, "Unacceptable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Grade {
        A,
        B,
        C,
    }

    impl fmt::Display for Grade {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{self:?}")
        }
    }

    const HALF_OPEN: BandTable<Grade> = BandTable {
        edge: Edge::Below,
        bounded: &[(dec!(10), Grade::A), (dec!(20), Grade::B)],
        top: Grade::C,
    };

    const CLOSED: BandTable<Grade> = BandTable {
        edge: Edge::AtMost,
        bounded: &[(dec!(10), Grade::A), (dec!(20), Grade::B)],
        top: Grade::C,
    };

    #[test]
    fn test_half_open_edges() {
        assert_eq!(HALF_OPEN.classify(dec!(9.999)), Grade::A);
        assert_eq!(HALF_OPEN.classify(dec!(10)), Grade::B);
        assert_eq!(HALF_OPEN.classify(dec!(20)), Grade::C);
    }

    #[test]
    fn test_closed_edges() {
        assert_eq!(CLOSED.classify(dec!(10)), Grade::A);
        assert_eq!(CLOSED.classify(dec!(10.0001)), Grade::B);
        assert_eq!(CLOSED.classify(dec!(20)), Grade::B);
        assert_eq!(CLOSED.classify(dec!(1000)), Grade::C);
    }

    #[test]
    fn test_describe() {
        let lines = HALF_OPEN.describe();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].range, "< 10");
        assert_eq!(lines[2].range, ">= 20");
        assert_eq!(lines[2].label, "C");

        let closed = CLOSED.describe();
        assert_eq!(closed[2].range, "> 20");
    }
}
