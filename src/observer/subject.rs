use super::*;

/// Holds a state and notifies every attached observer each time the state changes
#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct Subject {
    state: i64,
    #[derivative(Debug = "ignore")]
    observers: ObserverList,
    #[derivative(Debug = "ignore")]
    console: Box<dyn Console>,
    #[derivative(Debug = "ignore")]
    state_source: Box<dyn StateSource>,
    /// Pause between changing the state and announcing it
    settle_time: Duration,
}

impl Subject {
    pub fn new(console: Box<dyn Console>, state_source: Box<dyn StateSource>) -> Self {
        Self {
            state: 0,
            observers: ObserverList::new(),
            console,
            state_source,
            settle_time: Duration::from_secs(0),
        }
    }

    pub fn with_settle_time(mut self, settle_time: Duration) -> Self {
        self.settle_time = settle_time;
        self
    }

    pub fn state(&self) -> i64 {
        self.state
    }

    /// Sets the state without notifying anyone
    #[cfg(test)]
    pub fn set_state(&mut self, state: i64) {
        self.state = state;
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn attach(&mut self, observer: &Rc<dyn Observer>) {
        self.console.println("Subject: Attached an observer.");
        let report = self.observers.attach(observer);
        debug!(
            "attached observer (was empty: {}, now {} attached)",
            report.was_empty,
            self.observers.len()
        );
    }

    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        let report = self.observers.detach(observer);
        self.console.println("Subject: Detached an observer.");
        if report.was_attached {
            debug!(
                "detached observer (now empty: {}, {} still attached)",
                report.is_now_empty,
                self.observers.len()
            );
        } else {
            debug!("detached an observer that was not attached");
        }
    }

    /// Calls every attached observer once per entry, in attachment order. Observers only get a
    /// shared reference, so the list can not change while this runs.
    pub fn notify(&self) {
        self.console.println("Subject: Notifying observers...");
        if self.observers.is_empty() {
            trace!("no observers attached");
        }
        for observer in self.observers.iter() {
            match observer {
                Some(observer) => observer.update(self, self.console.as_ref()),
                None => warn!("observer dropped without being detached, skipping it"),
            }
        }
    }

    /// Stands in for real business logic: takes a new state and then notifies. The state is
    /// always assigned before notify() runs.
    pub fn trigger_change(&mut self) {
        self.console.println("");
        self.console.println("Subject: I'm doing something important.");
        self.state = self.state_source.next_state();
        trace!("state set to {}, settling for {:?}", self.state, self.settle_time);
        if self.settle_time > Duration::from_secs(0) {
            sleep(self.settle_time);
        }
        self.console
            .println(&format!("Subject: My state has just changed to: {}", self.state));
        self.notify();
    }
}
