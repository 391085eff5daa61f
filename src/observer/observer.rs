use super::*;

/// An object that reacts after the subject it is attached to changes state. Implementations read
/// whatever they need from the subject at the time of the call and must not cache it.
pub trait Observer {
    fn update(&self, subject: &Subject, console: &dyn Console);
}
