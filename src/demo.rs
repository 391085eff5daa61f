//! The fixed sequence main() runs to show observers being notified and detached

use super::*;

/// Attaches both observers, changes state twice, detaches ObserverB and changes state once more.
pub fn run_demo(subject: &mut Subject) {
    let observer_a: Rc<dyn Observer> = Rc::new(ObserverA);
    subject.attach(&observer_a);

    let observer_b: Rc<dyn Observer> = Rc::new(ObserverB);
    subject.attach(&observer_b);

    subject.trigger_change();
    subject.trigger_change();

    subject.detach(&observer_b);

    subject.trigger_change();
}
