use std::io::{self, Write};
use std::time::Duration;

use crate::Outcome;

pub const BANNER: &str = "Gardens";

/// Console transcript: banner, diagnostic count, one line per sample, result.
pub fn write_transcript(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    if let Some(d) = &outcome.diagnostic {
        writeln!(out, "part1 {} after {} steps", d.reachable, d.step)?;
    }
    for s in &outcome.samples {
        writeln!(
            out,
            "point {} {} after {} steps",
            s.index + 1,
            s.reachable,
            s.step
        )?;
    }
    writeln!(out, "part2 {}", outcome.reachable)
}

/// Wall-clock seconds, five decimals.
pub fn write_elapsed(out: &mut impl Write, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "{:.5}", elapsed.as_secs_f64())
}
