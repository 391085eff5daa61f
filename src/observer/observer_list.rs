use super::*;

/// Returned by ObserverList::attach(), used instead of a raw bool for code readablity
pub struct AttachReport {
    pub was_empty: bool,
}

/// Returned by ObserverList::detach(), used instead of raw bools for code readablity
pub struct DetachReport {
    pub was_attached: bool,
    pub is_now_empty: bool,
}

/// The observers attached to a subject, in the order they were attached. The list does not own
/// its observers, so it holds Weaks.
///
/// Entries are identified by the address of the Rc allocation they were attached from. Addresses
/// are stored next to each Weak so identity checks don't have to upgrade. A Weak keeps its
/// allocation alive, so an address can not be reused while its entry is still in the list.
///
/// The same observer may be attached more than once, in which case it is notified once per entry.
#[derive(Default)]
pub struct ObserverList(Vec<(usize, Weak<dyn Observer>)>);

fn identity_of(observer: &Rc<dyn Observer>) -> usize {
    Rc::as_ptr(observer) as *const () as usize
}

impl ObserverList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn attach(&mut self, observer: &Rc<dyn Observer>) -> AttachReport {
        let was_empty = self.0.is_empty();
        self.0.push((identity_of(observer), Rc::downgrade(observer)));
        AttachReport { was_empty }
    }

    /// Removes the first entry for the observer. Does nothing if it is not attached.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) -> DetachReport {
        let identity = identity_of(observer);
        let was_attached = match self.0.iter().position(|(ptr, _)| *ptr == identity) {
            Some(i) => {
                // Not swap_remove(), notification order must be kept
                self.0.remove(i);
                true
            }
            None => false,
        };
        DetachReport {
            was_attached,
            is_now_empty: self.0.is_empty(),
        }
    }

    /// Observers in attachment order. Entries whose observer has been dropped come out as None.
    pub fn iter(&self) -> impl Iterator<Item = Option<Rc<dyn Observer>>> + '_ {
        self.0.iter().map(|(_ptr, observer)| observer.upgrade())
    }
}
