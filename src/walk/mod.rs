pub mod frontier;
pub mod sampler;

pub use frontier::{Frontier, expand, reachable_after};
pub use sampler::{SAMPLES_NEEDED, Sample, Sampler};
