use serde::Serialize;

use crate::error::{Error, Result};
use crate::walk::Sample;

/// f(n) = a·n² + b·n + c through three samples at n = 0, 1, 2.
///
/// Kept as the base value plus first and second forward differences so
/// evaluation stays in integers: `f(n) = y0 + n·d1 + n(n-1)/2·d2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Quadratic {
    pub y0: i64,
    pub d1: i64,
    pub d2: i64,
}

impl Quadratic {
    pub fn from_points(y0: i64, y1: i64, y2: i64) -> Self {
        Self {
            y0,
            d1: y1 - y0,
            d2: y2 - 2 * y1 + y0,
        }
    }

    /// Fit through the first three samples.
    pub fn fit(samples: &[Sample]) -> Result<Self> {
        match samples {
            [s0, s1, s2, ..] => Ok(Self::from_points(
                s0.reachable as i64,
                s1.reachable as i64,
                s2.reachable as i64,
            )),
            _ => Err(Error::InsufficientSamples {
                found: samples.len(),
            }),
        }
    }

    /// (a, b, c). `a` and `b` are halves of integers.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        let a = self.d2 as f64 / 2.0;
        let b = self.d1 as f64 - a;
        (a, b, self.y0 as f64)
    }

    /// Floating-point evaluation from the coefficients.
    pub fn eval(&self, n: f64) -> f64 {
        let (a, b, c) = self.coefficients();
        a * n * n + b * n + c
    }

    /// Exact value at integer `n`. `n(n-1)` is always even, so the
    /// half-integer coefficients never leave a fractional part.
    pub fn at(&self, n: i64) -> Result<i64> {
        let pairs = n.checked_mul(n - 1).ok_or(Error::Overflow)? / 2;
        let curve = pairs.checked_mul(self.d2).ok_or(Error::Overflow)?;
        let line = n.checked_mul(self.d1).ok_or(Error::Overflow)?;
        self.y0
            .checked_add(line)
            .and_then(|v| v.checked_add(curve))
            .ok_or(Error::Overflow)
    }
}

/// Fit the samples and evaluate at `target / period` whole periods.
pub fn extrapolate(samples: &[Sample], target: u64, period: u64) -> Result<i64> {
    let q = Quadratic::fit(samples)?;
    let n = i64::try_from(target / period).map_err(|_| Error::Overflow)?;
    q.at(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(ys: &[usize]) -> Vec<Sample> {
        ys.iter()
            .enumerate()
            .map(|(i, &y)| Sample {
                index: i,
                step: i as u64,
                reachable: y,
            })
            .collect()
    }

    #[test]
    fn coefficients_from_finite_differences() {
        let q = Quadratic::from_points(10, 20, 40);
        assert_eq!(q.coefficients(), (5.0, 5.0, 10.0));
        assert_eq!(q.at(3).unwrap(), 70);
        assert_eq!(q.eval(3.0), 70.0);
    }

    #[test]
    fn reproduces_the_fitted_points() {
        let q = Quadratic::from_points(3889, 34504, 95591);
        assert_eq!(q.at(0).unwrap(), 3889);
        assert_eq!(q.at(1).unwrap(), 34504);
        assert_eq!(q.at(2).unwrap(), 95591);
    }

    #[test]
    fn half_integer_coefficients_still_give_integers() {
        // a = 0.5, b = 0.5
        let q = Quadratic::from_points(1, 2, 4);
        assert_eq!(q.coefficients(), (0.5, 0.5, 1.0));
        for n in 0..50 {
            let exact = q.at(n).unwrap();
            let float = q.eval(n as f64);
            assert_eq!(float.fract(), 0.0);
            assert_eq!(exact as f64, float);
        }
    }

    #[test]
    fn integer_and_float_paths_agree_at_puzzle_scale() {
        let q = Quadratic::from_points(3889, 34504, 95591);
        let n = 26_501_365 / 131;
        assert_eq!(q.at(n).unwrap() as f64, q.eval(n as f64));
    }

    #[test]
    fn extrapolates_whole_periods() {
        // (s+1)^2 sampled at s = 2, 7, 12 with period 5
        let s = samples(&[9, 64, 169]);
        assert_eq!(extrapolate(&s, 1002, 5).unwrap(), 1003 * 1003);
    }

    #[test]
    fn needs_three_samples() {
        let err = extrapolate(&samples(&[1, 2]), 10, 3).unwrap_err();
        assert!(matches!(err, Error::InsufficientSamples { found: 2 }));
        assert!(matches!(
            Quadratic::fit(&[]),
            Err(Error::InsufficientSamples { found: 0 })
        ));
    }

    #[test]
    fn overflow_is_reported() {
        let q = Quadratic::from_points(0, 1, i64::MAX / 4);
        assert!(matches!(q.at(i64::MAX / 2), Err(Error::Overflow)));
    }
}
