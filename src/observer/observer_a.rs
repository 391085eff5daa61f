use super::*;

/// Reacts to low states
pub struct ObserverA;

impl Observer for ObserverA {
    fn update(&self, subject: &Subject, console: &dyn Console) {
        if subject.state() < 3 {
            console.println("ConcreteObserverA: Reacted to the event.");
        }
    }
}
