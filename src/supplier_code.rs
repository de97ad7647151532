use std::ops::RangeInclusive;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Stand-in 8-digit supplier hotel codes; there is no real supplier behind them
pub const SUPPLIER_CODE_RANGE: RangeInclusive<u32> = 10_000_000..=99_999_999;

pub trait CodeGenerator: Send + Sync {
    fn supplier_code(&self) -> String;
}

/// Draws from the calling thread's RNG, so concurrent requests never share
/// generator state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn supplier_code(&self) -> String {
        let code = rand::thread_rng().gen_range(SUPPLIER_CODE_RANGE);
        tracing::debug!(code, "generated supplier hotel code");
        code.to_string()
    }
}

// Reproducible sequence for tests and benchmarks
pub struct SeededCodeGenerator {
    rng: Mutex<StdRng>,
}

impl SeededCodeGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl CodeGenerator for SeededCodeGenerator {
    fn supplier_code(&self) -> String {
        self.rng.lock().gen_range(SUPPLIER_CODE_RANGE).to_string()
    }
}
