use super::*;

/// Records every line printed to it. Clones share the same record.
#[derive(Clone, Default)]
pub struct MockConsole(Rc<RefCell<Vec<String>>>);

impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed(&self) -> Box<dyn Console> {
        Box::new(self.clone())
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Console for MockConsole {
    fn println(&self, line: &str) {
        self.0.borrow_mut().push(line.to_string());
    }
}
