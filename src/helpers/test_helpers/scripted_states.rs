use super::*;

/// Hands out a fixed list of states in order, and panics if asked for more
pub struct ScriptedStates(VecDeque<i64>);

impl ScriptedStates {
    pub fn new(states: &[i64]) -> Self {
        Self(states.iter().copied().collect())
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }

    pub fn boxed(self) -> Box<dyn StateSource> {
        Box::new(self)
    }
}

impl StateSource for ScriptedStates {
    fn next_state(&mut self) -> i64 {
        self.0
            .pop_front()
            .expect("subject asked for more states than were scripted")
    }
}
