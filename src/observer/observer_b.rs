use super::*;

/// Reacts to a zero state and to states of two or more
pub struct ObserverB;

impl Observer for ObserverB {
    fn update(&self, subject: &Subject, console: &dyn Console) {
        let state = subject.state();
        if state == 0 || state >= 2 {
            console.println("ConcreteObserverB: Reacted to the event.");
        }
    }
}
