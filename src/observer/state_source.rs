use super::*;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Produces the next state each time the subject changes
pub trait StateSource {
    fn next_state(&mut self) -> i64;
}

/// Uniformly random states in 0..range
pub struct RandomStates {
    rng: StdRng,
    range: i64,
}

impl RandomStates {
    /// If seed is None the generator is seeded from system entropy.
    pub fn new(range: i64, seed: Option<u64>) -> Self {
        assert!(range > 0, "state range must be positive");
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, range }
    }
}

impl StateSource for RandomStates {
    fn next_state(&mut self) -> i64 {
        self.rng.gen_range(0..self.range)
    }
}

/// Counts up from 0 and wraps back to 0 at range
pub struct CyclingStates {
    next: i64,
    range: i64,
}

impl CyclingStates {
    pub fn new(range: i64) -> Self {
        assert!(range > 0, "state range must be positive");
        Self { next: 0, range }
    }
}

impl StateSource for CyclingStates {
    fn next_state(&mut self) -> i64 {
        let state = self.next;
        self.next = (self.next + 1) % self.range;
        state
    }
}

/// Build the state source the configuration asks for
pub fn state_source_for(conf: &MasterConfig) -> Box<dyn StateSource> {
    match conf.state_source {
        StateSourceKind::Random => Box::new(RandomStates::new(conf.state_range, conf.state_seed)),
        StateSourceKind::Cycle => Box::new(CyclingStates::new(conf.state_range)),
    }
}
