use rand::{rngs::ThreadRng, thread_rng, Rng};

/// Source of target numbers for new sessions.
pub trait Sampler {
    /// Draw an integer uniformly from `min..=max`.
    fn sample_int(&mut self, min: i64, max: i64) -> i64;
}

/// A sampler backed by any `rand` generator.
#[derive(Debug)]
pub struct RngSampler<R: Rng = ThreadRng> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        RngSampler { rng }
    }
}

impl Default for RngSampler<ThreadRng> {
    fn default() -> Self {
        RngSampler::new(thread_rng())
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn sample_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }
}

/// Closures make deterministic samplers, e.g. `|_, _| 7`.
impl<F: FnMut(i64, i64) -> i64> Sampler for F {
    fn sample_int(&mut self, min: i64, max: i64) -> i64 {
        self(min, max)
    }
}
