use std::f32::consts::TAU;

/// Easing curves mapping normalized progress [0, 1] to eased progress.
///
/// The power family follows the usual naming where `PowerNOut` is an
/// ease-out of degree N + 1 (Power1 = quad, Power2 = cubic, Power4 = quint).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2Out,
    Power4Out,
    /// Overshoot-and-settle ease-out
    ElasticOut { amplitude: f32, period: f32 },
}

impl Ease {
    /// Evaluate the curve at progress `p`; input is clamped to [0, 1].
    pub fn apply(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Ease::Linear => p,
            Ease::Power1Out => power_out(p, 2),
            Ease::Power2Out => power_out(p, 3),
            Ease::Power4Out => power_out(p, 5),
            Ease::ElasticOut { amplitude, period } => elastic_out(p, amplitude, period),
        }
    }
}

fn power_out(p: f32, degree: i32) -> f32 {
    1.0 - (1.0 - p).powi(degree)
}

fn elastic_out(p: f32, amplitude: f32, period: f32) -> f32 {
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }
    // Amplitudes below 1 stretch the period instead of shrinking the swing
    let a = amplitude.max(1.0);
    let period = period / amplitude.min(1.0);
    let shift = period / TAU * (1.0 / a).asin();
    a * 2f32.powf(-10.0 * p) * ((p - shift) * TAU / period).sin() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power2Out,
        Ease::Power4Out,
        Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.3,
        },
    ];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-6, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", ease);
        }
    }

    #[test]
    fn test_input_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-0.5), ease.apply(0.0));
            assert_eq!(ease.apply(1.5), ease.apply(1.0));
        }
    }

    #[test]
    fn test_power_out_is_front_loaded() {
        // Ease-out curves cover more than half the distance by the midpoint
        assert!((Ease::Power2Out.apply(0.5) - 0.875).abs() < 1e-6);
        assert!((Ease::Power4Out.apply(0.5) - 0.96875).abs() < 1e-6);
        assert!(Ease::Power4Out.apply(0.2) > Ease::Power2Out.apply(0.2));
    }

    #[test]
    fn test_power_out_monotonic() {
        let mut prev = 0.0;
        for step in 1..=100 {
            let v = Ease::Power4Out.apply(step as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_elastic_overshoots_then_settles() {
        let ease = Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.3,
        };
        let max = (1..100)
            .map(|step| ease.apply(step as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(max > 1.0, "elastic should overshoot, max {}", max);

        // Tail stays within the decaying envelope, which it touches at a trough
        let trough = ease.apply(0.9);
        assert!((trough - 1.0).abs() <= 2f32.powf(-9.0) + 1e-6);
        let tail = ease.apply(0.95);
        assert!((tail - 1.0).abs() < 2f32.powf(-9.5));
    }
}
