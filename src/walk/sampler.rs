use serde::Serialize;

/// Number of points a quadratic fit needs.
pub const SAMPLES_NEEDED: usize = 3;

/// Frontier size observed at a step congruent to the target modulo the period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Sample {
    /// Whole tile periods elapsed since the first sample.
    pub index: usize,
    pub step: u64,
    pub reachable: usize,
}

/// Records one sample per tile period, at the steps that line up with the target.
#[derive(Clone, Debug)]
pub struct Sampler {
    period: u64,
    phase: u64,
    samples: Vec<Sample>,
}

impl Sampler {
    pub fn new(period: u64, target: u64) -> Self {
        debug_assert!(period > 0);
        Self {
            period,
            phase: target % period,
            samples: Vec::with_capacity(SAMPLES_NEEDED),
        }
    }

    /// Offer the frontier size at `step`. Returns the new sample when one was taken.
    pub fn observe(&mut self, step: u64, reachable: usize) -> Option<Sample> {
        if self.is_full() || step % self.period != self.phase {
            return None;
        }
        let sample = Sample {
            index: self.samples.len(),
            step,
            reachable,
        };
        self.samples.push(sample);
        Some(sample)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.samples.len() >= SAMPLES_NEEDED
    }

    #[inline]
    pub fn phase(&self) -> u64 {
        self.phase
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_once_per_period_at_the_target_phase() {
        let mut s = Sampler::new(11, 5000);
        assert_eq!(s.phase(), 6);
        let taken: Vec<u64> = (1..100)
            .filter_map(|step| s.observe(step, step as usize * 2))
            .map(|sample| sample.step)
            .collect();
        assert_eq!(taken, vec![6, 17, 28]);
        assert!(s.is_full());
    }

    #[test]
    fn indices_follow_observation_order() {
        let mut s = Sampler::new(5, 12);
        for step in 1..=12 {
            s.observe(step, step as usize);
        }
        let samples = s.into_samples();
        assert_eq!(
            samples,
            vec![
                Sample { index: 0, step: 2, reachable: 2 },
                Sample { index: 1, step: 7, reachable: 7 },
                Sample { index: 2, step: 12, reachable: 12 },
            ]
        );
    }

    #[test]
    fn ignores_offers_once_full() {
        let mut s = Sampler::new(1, 0);
        assert!(s.observe(1, 1).is_some());
        assert!(s.observe(2, 1).is_some());
        assert!(s.observe(3, 1).is_some());
        assert!(s.observe(4, 1).is_none());
        assert_eq!(s.samples().len(), SAMPLES_NEEDED);
    }
}
