use super::*;

struct MockObserverInner {
    count: Cell<u32>,
    f: Box<dyn Fn(&Subject)>,
}

/// Counts how many times it was updated, and optionally runs a function on each update
pub struct MockObserver(Rc<MockObserverInner>);

impl MockObserver {
    pub fn new() -> Self {
        Self::new_with_fn(|_| ())
    }

    pub fn new_terrified() -> Self {
        Self::new_with_fn(|_| panic!("mock observer should not have been notified"))
    }

    pub fn new_with_fn<F>(f: F) -> Self
    where
        F: Fn(&Subject) + 'static,
    {
        Self(Rc::new(MockObserverInner {
            count: Cell::new(0),
            f: Box::new(f),
        }))
    }

    /// Every call returns a handle to the same observer
    pub fn get(&self) -> Rc<dyn Observer> {
        self.0.clone()
    }

    pub fn notify_count(&self) -> u32 {
        self.0.count.get()
    }
}

impl Observer for MockObserverInner {
    fn update(&self, subject: &Subject, _: &dyn Console) {
        self.count.set(self.count.get() + 1);
        (self.f)(subject);
    }
}
