use std::str::FromStr;

use crate::{error::SweepError, extract::SimulationResult, settings::NormalizationSettings};

/// which scalar the optimizer asked for: a raw simulator metric, or one of
/// the composite targets mixing normalized cycle/area and power/area ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSelector {
    Cycle,
    Power,
    Area,
    P1,
    P2,
    P3,
    P4,
    P5,
}

impl TargetSelector {
    /// the (c1, c2) weight pair of a composite selector
    fn coefficients(self) -> Option<(f64, f64)> {
        match self {
            TargetSelector::P1 => Some((0.50, 0.50)),
            TargetSelector::P2 => Some((0.25, 0.75)),
            TargetSelector::P3 => Some((0.75, 0.25)),
            TargetSelector::P4 => Some((0.99, 0.01)),
            TargetSelector::P5 => Some((0.01, 0.99)),
            _ => None,
        }
    }
}

impl FromStr for TargetSelector {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cycle" => Ok(TargetSelector::Cycle),
            "power" => Ok(TargetSelector::Power),
            "area" => Ok(TargetSelector::Area),
            "P1" => Ok(TargetSelector::P1),
            "P2" => Ok(TargetSelector::P2),
            "P3" => Ok(TargetSelector::P3),
            "P4" => Ok(TargetSelector::P4),
            "P5" => Ok(TargetSelector::P5),
            other => Err(SweepError::InvalidSelector(other.to_string())),
        }
    }
}

/// the value of the target function for one simulation run.
///
/// raw selectors return the metric itself (cycle widened to float). the
/// composite selectors compute
/// `c1 * (cycle_norm / area_norm) + c2 * (power_norm / area_norm)` against
/// the configured reference maxima. a zero area makes the composite value
/// infinite (or NaN when the numerator is also zero); the value is passed
/// through uninterpreted.
pub fn target_value(
    results: &SimulationResult,
    selector: TargetSelector,
    norm: &NormalizationSettings,
) -> f64 {
    match selector {
        TargetSelector::Cycle => results.cycle as f64,
        TargetSelector::Power => results.power,
        TargetSelector::Area => results.area,
        composite => {
            let area_norm = results.area / norm.max_area;
            let cycle_norm = results.cycle as f64 / norm.max_cycle;
            let power_norm = results.power / norm.max_power;

            // coefficients() is total over the composite selectors
            let (c1, c2) = composite.coefficients().unwrap();
            c1 * (cycle_norm / area_norm) + c2 * (power_norm / area_norm)
        }
    }
}

#[cfg(test)]
mod target_test {
    use super::*;

    fn reference_norm() -> NormalizationSettings {
        NormalizationSettings {
            max_area: 2515230.0,
            max_cycle: 62966.0,
            max_power: 225.118,
        }
    }

    fn reference_results() -> SimulationResult {
        SimulationResult {
            cycle: 65029,
            power: 67.5946,
            area: 1094960.0,
        }
    }

    #[test]
    fn test_raw_selectors() {
        let results = reference_results();
        let norm = reference_norm();
        assert_eq!(target_value(&results, TargetSelector::Cycle, &norm), 65029.0);
        assert_eq!(target_value(&results, TargetSelector::Power, &norm), 67.5946);
        assert_eq!(target_value(&results, TargetSelector::Area, &norm), 1094960.0);
    }

    #[test]
    fn test_composite_p1() {
        let results = reference_results();
        let norm = reference_norm();

        let area_norm = 1094960.0 / 2515230.0;
        let cycle_norm = 65029.0 / 62966.0;
        let power_norm = 67.5946 / 225.118;
        let expected = 0.50 * (cycle_norm / area_norm) + 0.50 * (power_norm / area_norm);

        let value = target_value(&results, TargetSelector::P1, &norm);
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_asymmetric_weighting() {
        let results = reference_results();
        let norm = reference_norm();
        let p4 = target_value(&results, TargetSelector::P4, &norm);
        let p5 = target_value(&results, TargetSelector::P5, &norm);
        assert_ne!(p4, p5);
    }

    #[test]
    fn test_zero_area_is_infinite() {
        let results = SimulationResult {
            cycle: 100,
            power: 1.0,
            area: 0.0,
        };
        let value = target_value(&results, TargetSelector::P1, &reference_norm());
        assert!(value.is_infinite());
    }

    #[test]
    fn test_unknown_selector() {
        let err = "P9".parse::<TargetSelector>().unwrap_err();
        match err {
            SweepError::InvalidSelector(key) => assert_eq!(key, "P9"),
            other => panic!("expected invalid selector, got {:?}", other),
        }
    }
}
