use super::easing::Ease;
use super::tween::{Tween, Yoyo};
use crate::config::{
    WaveConfig, ELASTIC_AMPLITUDE, ELASTIC_PERIOD, EXPLOSION_BURST_DURATION, EXPLOSION_CHAOS,
    EXPLOSION_SETTLE_DURATION, EXPLOSION_SPACING, FLASH_HALF_DURATION, FLASH_INTENSITY,
};

/// One burst-and-settle run
#[derive(Clone, Copy, Debug, PartialEq)]
struct Sequence {
    burst_spacing: Tween<f32>,
    burst_chaos: Tween<f32>,
    settle_spacing: Tween<f32>,
    settle_chaos: Tween<f32>,
    flash: Yoyo,
}

impl Sequence {
    fn new(time: f64, config: &WaveConfig, rest_spacing: f32, light_intensity: f32) -> Self {
        let settle_start = time + EXPLOSION_BURST_DURATION;
        let settle = Ease::ElasticOut {
            amplitude: ELASTIC_AMPLITUDE,
            period: ELASTIC_PERIOD,
        };

        Self {
            burst_spacing: Tween::new(
                config.spacing,
                EXPLOSION_SPACING,
                time,
                EXPLOSION_BURST_DURATION,
                Ease::Power4Out,
            ),
            burst_chaos: Tween::new(
                config.chaos,
                EXPLOSION_CHAOS,
                time,
                EXPLOSION_BURST_DURATION,
                Ease::Power4Out,
            ),
            settle_spacing: Tween::new(
                EXPLOSION_SPACING,
                rest_spacing,
                settle_start,
                EXPLOSION_SETTLE_DURATION,
                settle,
            ),
            settle_chaos: Tween::new(
                EXPLOSION_CHAOS,
                0.0,
                settle_start,
                EXPLOSION_SETTLE_DURATION,
                settle,
            ),
            flash: Yoyo {
                base: light_intensity,
                peak: FLASH_INTENSITY,
                start: time,
                half_duration: FLASH_HALF_DURATION,
                ease: Ease::Power1Out,
            },
        }
    }

    fn end(&self) -> f64 {
        self.settle_spacing.end()
    }
}

/// Click-triggered explosion of the grid.
///
/// At most one sequence runs at a time; triggering during a run is ignored
/// and a started run always plays to completion.
pub struct Explosion {
    rest_spacing: f32,
    sequence: Option<Sequence>,
}

impl Explosion {
    pub fn new(rest_spacing: f32) -> Self {
        Self {
            rest_spacing,
            sequence: None,
        }
    }

    pub fn is_exploding(&self) -> bool {
        self.sequence.is_some()
    }

    /// Start a sequence at `time`. Returns false (and changes nothing) if one
    /// is already running.
    pub fn trigger(&mut self, time: f64, config: &WaveConfig, light_intensity: f32) -> bool {
        if self.is_exploding() {
            log::debug!("Explosion already in progress, ignoring trigger");
            return false;
        }
        log::info!("Explosion triggered at t={:.2}s", time);
        self.sequence = Some(Sequence::new(
            time,
            config,
            self.rest_spacing,
            light_intensity,
        ));
        true
    }

    /// Drive `spacing` and `chaos` for `time`; on completion both are set to
    /// their rest values and the sequence is cleared.
    pub fn apply(&mut self, time: f64, config: &mut WaveConfig) {
        let Some(sequence) = self.sequence else {
            return;
        };

        if time >= sequence.end() {
            config.spacing = self.rest_spacing;
            config.chaos = 0.0;
            self.sequence = None;
            log::info!("Explosion settled");
            return;
        }

        let (spacing, chaos) = if time < sequence.settle_spacing.start {
            (
                sequence.burst_spacing.value_at(time),
                sequence.burst_chaos.value_at(time),
            )
        } else {
            (
                sequence.settle_spacing.value_at(time),
                sequence.settle_chaos.value_at(time),
            )
        };
        config.spacing = spacing;
        config.chaos = chaos.clamp(0.0, 1.0);
    }

    /// Colored light intensity at `time`, `base` when no flash is running
    pub fn light_intensity(&self, time: f64, base: f32) -> f32 {
        match &self.sequence {
            Some(sequence) => sequence.flash.value_at(time),
            None => base,
        }
    }

    /// Time the running sequence completes
    #[cfg(test)]
    pub fn ends_at(&self) -> Option<f64> {
        self.sequence.as_ref().map(Sequence::end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{POINT_LIGHT_INTENSITY, SPACING};

    fn run(explosion: &mut Explosion, config: &mut WaveConfig, from: f64, to: f64) -> Vec<(f64, f32, f32)> {
        let mut samples = Vec::new();
        let mut t = from;
        while t <= to {
            explosion.apply(t, config);
            samples.push((t, config.spacing, config.chaos));
            t += 1.0 / 60.0;
        }
        samples
    }

    #[test]
    fn test_full_sequence_returns_to_rest() {
        let mut config = WaveConfig::default();
        let mut explosion = Explosion::new(SPACING);
        assert!(!explosion.is_exploding());

        assert!(explosion.trigger(0.0, &config, POINT_LIGHT_INTENSITY));
        assert!(explosion.is_exploding());

        let samples = run(&mut explosion, &mut config, 0.0, 1.59);
        assert!(explosion.is_exploding());
        let peak = samples.iter().map(|s| s.1).fold(f32::MIN, f32::max);
        assert!((peak - 4.0).abs() < 0.05, "peak spacing {}", peak);

        explosion.apply(1.6, &mut config);
        assert!(!explosion.is_exploding());
        assert!((config.spacing - 0.9).abs() < 0.01);
        assert_eq!(config.chaos, 0.0);
    }

    #[test]
    fn test_burst_reaches_maximum() {
        let mut config = WaveConfig::default();
        let mut explosion = Explosion::new(SPACING);
        explosion.trigger(2.0, &config, POINT_LIGHT_INTENSITY);

        explosion.apply(2.0, &mut config);
        assert!((config.spacing - 0.9).abs() < 1e-6);
        assert_eq!(config.chaos, 0.0);

        explosion.apply(2.4, &mut config);
        assert!((config.spacing - 4.0).abs() < 1e-4);
        assert!((config.chaos - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_chaos_stays_in_unit_range() {
        let mut config = WaveConfig::default();
        let mut explosion = Explosion::new(SPACING);
        explosion.trigger(0.0, &config, POINT_LIGHT_INTENSITY);
        for (_, _, chaos) in run(&mut explosion, &mut config, 0.0, 2.0) {
            assert!((0.0..=1.0).contains(&chaos), "chaos {}", chaos);
        }
    }

    #[test]
    fn test_settle_overshoots_rest() {
        let mut config = WaveConfig::default();
        let mut explosion = Explosion::new(SPACING);
        explosion.trigger(0.0, &config, POINT_LIGHT_INTENSITY);
        let samples = run(&mut explosion, &mut config, 0.4, 1.59);
        let min = samples.iter().map(|s| s.1).fold(f32::MAX, f32::min);
        assert!(min < SPACING, "elastic settle should dip below rest, min {}", min);
    }

    #[test]
    fn test_retrigger_is_noop() {
        let mut config = WaveConfig::default();
        let mut explosion = Explosion::new(SPACING);
        explosion.trigger(0.0, &config, POINT_LIGHT_INTENSITY);
        explosion.apply(0.5, &mut config);

        let ends_at = explosion.ends_at();
        let flash_before = explosion.light_intensity(0.05, POINT_LIGHT_INTENSITY);
        let config_before = config;

        assert!(!explosion.trigger(0.5, &config, POINT_LIGHT_INTENSITY));
        assert_eq!(explosion.ends_at(), ends_at);
        assert_eq!(config, config_before);
        // Flash schedule unchanged: no second flash at the retrigger time
        assert_eq!(explosion.light_intensity(0.05, POINT_LIGHT_INTENSITY), flash_before);
        assert_eq!(
            explosion.light_intensity(0.55, POINT_LIGHT_INTENSITY),
            POINT_LIGHT_INTENSITY
        );
    }

    #[test]
    fn test_can_trigger_again_after_completion() {
        let mut config = WaveConfig::default();
        let mut explosion = Explosion::new(SPACING);
        explosion.trigger(0.0, &config, POINT_LIGHT_INTENSITY);
        explosion.apply(5.0, &mut config);
        assert!(explosion.trigger(5.0, &config, POINT_LIGHT_INTENSITY));
    }

    #[test]
    fn test_light_flash() {
        let config = WaveConfig::default();
        let mut explosion = Explosion::new(SPACING);
        assert_eq!(explosion.light_intensity(0.0, 5.0), 5.0);

        explosion.trigger(1.0, &config, 5.0);
        assert!((explosion.light_intensity(1.1, 5.0) - 10.0).abs() < 1e-3);
        assert!(explosion.light_intensity(1.15, 5.0) > 5.0);
        assert_eq!(explosion.light_intensity(1.3, 5.0), 5.0);
    }
}
