use super::*;

/// How the subject picks its next state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateSourceKind {
    Random,
    Cycle,
}

/// Configuration for the whole observer-demo program
#[derive(Debug)]
pub struct MasterConfig {
    pub state_source: StateSourceKind,
    /// None to seed from system entropy
    pub state_seed: Option<u64>,
    /// States are picked from 0 up to but not including this
    pub state_range: i64,
    /// How long the subject pauses after changing state before it tells anyone
    pub settle_time: Duration,
}

impl Default for MasterConfig {
    /// NOTE: the true default configuration is determined by config_entries(), this is just a
    /// valid starting point for them to be applied to
    fn default() -> Self {
        Self {
            state_source: StateSourceKind::Random,
            state_seed: None,
            state_range: 10,
            settle_time: Duration::from_secs(0),
        }
    }
}
