use types::SimParams;

/// Continuous reference position for a given physics phase.
/// Always within `params.position_range()`.
pub fn true_position(phase: f64, params: &SimParams) -> f64 {
    params.center + params.amplitude * (phase * params.phase_frequency).sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn phase_zero_is_centre() {
        assert_eq!(true_position(0.0, &SimParams::default()), 50.0);
    }

    #[test]
    fn quarter_period_is_peak() {
        let p = SimParams::default();
        let quarter = std::f64::consts::FRAC_PI_2 / p.phase_frequency;
        assert!((true_position(quarter, &p) - 90.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn stays_within_range(phase in 0.0f64..1.0e9) {
            let params = SimParams::default();
            let (low, high) = params.position_range();
            let pos = true_position(phase, &params);
            prop_assert!((low..=high).contains(&pos), "pos {} out of range", pos);
        }
    }
}
