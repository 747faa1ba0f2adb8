//! Planner configuration.

use std::fmt;
use std::str::FromStr;

/// How equal-cost candidates are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The first candidate in enumeration order wins.
    #[default]
    FirstSeen,

    /// The vehicle listed earliest for the weather wins.
    /// Still tied: the first candidate in enumeration order wins.
    VehiclePriority,
}

/// Which destination orders are enumerated for a multi-stop trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisitOrder {
    /// Visit destinations exactly in the order given.
    #[default]
    AsRequested,

    /// Also consider visiting the second destination first.
    EitherOrder,
}

/// Error returned when parsing an unknown option value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {option} value {value:?} (expected one of: {expected})")]
pub struct InvalidOption {
    option: &'static str,
    value: String,
    expected: &'static str,
}

impl FromStr for TieBreak {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-seen" => Ok(TieBreak::FirstSeen),
            "vehicle-priority" => Ok(TieBreak::VehiclePriority),
            _ => Err(InvalidOption {
                option: "tie-break",
                value: s.to_string(),
                expected: "first-seen, vehicle-priority",
            }),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TieBreak::FirstSeen => "first-seen",
            TieBreak::VehiclePriority => "vehicle-priority",
        })
    }
}

impl FromStr for VisitOrder {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "as-requested" => Ok(VisitOrder::AsRequested),
            "either-order" => Ok(VisitOrder::EitherOrder),
            _ => Err(InvalidOption {
                option: "visit-order",
                value: s.to_string(),
                expected: "as-requested, either-order",
            }),
        }
    }
}

impl fmt::Display for VisitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VisitOrder::AsRequested => "as-requested",
            VisitOrder::EitherOrder => "either-order",
        })
    }
}

/// Configuration parameters for the planner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlannerConfig {
    /// How equal-cost candidates are resolved.
    pub tie_break: TieBreak,

    /// Which destination orders are enumerated.
    pub visit_order: VisitOrder,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(tie_break: TieBreak, visit_order: VisitOrder) -> Self {
        Self {
            tie_break,
            visit_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.tie_break, TieBreak::FirstSeen);
        assert_eq!(config.visit_order, VisitOrder::AsRequested);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(TieBreak::VehiclePriority, VisitOrder::EitherOrder);

        assert_eq!(config.tie_break, TieBreak::VehiclePriority);
        assert_eq!(config.visit_order, VisitOrder::EitherOrder);
    }

    #[test]
    fn parse_tie_break() {
        assert_eq!("first-seen".parse(), Ok(TieBreak::FirstSeen));
        assert_eq!(" Vehicle-Priority ".parse(), Ok(TieBreak::VehiclePriority));

        let err = "cheapest".parse::<TieBreak>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown tie-break value \"cheapest\" (expected one of: first-seen, vehicle-priority)"
        );
    }

    #[test]
    fn parse_visit_order() {
        assert_eq!("as-requested".parse(), Ok(VisitOrder::AsRequested));
        assert_eq!("EITHER-ORDER".parse(), Ok(VisitOrder::EitherOrder));
        assert!("reverse".parse::<VisitOrder>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for t in [TieBreak::FirstSeen, TieBreak::VehiclePriority] {
            assert_eq!(t.to_string().parse(), Ok(t));
        }
        for v in [VisitOrder::AsRequested, VisitOrder::EitherOrder] {
            assert_eq!(v.to_string().parse(), Ok(v));
        }
    }
}
