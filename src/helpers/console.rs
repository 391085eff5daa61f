/// Where the demo's human-readable output goes. Kept apart from logging, which goes to stderr.
pub trait Console {
    fn println(&self, line: &str);
}

pub fn stdout_console() -> Box<dyn Console> {
    Box::new(StdoutConsole)
}

struct StdoutConsole;

impl Console for StdoutConsole {
    fn println(&self, line: &str) {
        println!("{}", line);
    }
}
