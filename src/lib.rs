pub mod config;
pub mod error;
pub mod extrapolate;
pub mod garden;
pub mod grid;
pub mod render;
pub mod report;
pub mod walk;

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use config::Params;
pub use error::{Error, Result};
use garden::Garden;
use walk::{Frontier, Sample, Sampler};

/// Results of one run.
#[derive(Clone, Debug, Serialize)]
pub struct Outcome {
    pub target_steps: u64,
    pub period: u64,
    /// Frontier size at the diagnostic step, if expansion got that far.
    pub diagnostic: Option<Diagnostic>,
    pub samples: Vec<Sample>,
    /// Extrapolated number of plots reachable at `target_steps`.
    pub reachable: i64,
    pub steps_simulated: u64,
    #[serde(skip)]
    pub frontier: Frontier,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub step: u64,
    pub reachable: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Expand until three samples exist, then extrapolate to the target.
pub fn solve(garden: &Garden, params: &Params) -> Result<(Outcome, Vec<Timing>)> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    let target = params.target_steps;
    let period = garden.h() as u64;
    if garden.h() != garden.w() {
        warn!(
            h = garden.h(),
            w = garden.w(),
            "grid is not square; period-based extrapolation assumes it is"
        );
    }
    if target % period == 0 {
        return Err(Error::UnsampleableTarget { target, period });
    }

    // 1. Expand, sampling once per period
    let t = Instant::now();
    let mut frontier = Frontier::new(garden.start);
    let mut sampler = Sampler::new(period, target);
    let mut diagnostic = None;

    while frontier.step() + 1 < target && !sampler.is_full() {
        frontier.advance(garden);
        let step = frontier.step();

        if step == params.diagnostic_step {
            info!(step, reachable = frontier.len(), "diagnostic");
            diagnostic = Some(Diagnostic {
                step,
                reachable: frontier.len(),
            });
        }
        if let Some(sample) = sampler.observe(step, frontier.len()) {
            info!(
                index = sample.index,
                step = sample.step,
                reachable = sample.reachable,
                "sample"
            );
        }
        if step % period == 0 {
            debug!(step, reachable = frontier.len(), "expanding");
        }
    }
    timings.push(Timing {
        name: "expand",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Fit and evaluate
    let t = Instant::now();
    let reachable = extrapolate::extrapolate(sampler.samples(), target, period)?;
    timings.push(Timing {
        name: "extrapolate",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    let outcome = Outcome {
        target_steps: target,
        period,
        diagnostic,
        steps_simulated: frontier.step(),
        samples: sampler.into_samples(),
        reachable,
        frontier,
    };

    Ok((outcome, timings))
}
