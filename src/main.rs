use std::{
    collections::HashSet,
    error::Error,
    rc::{Rc, Weak},
    thread::sleep,
    time::Duration,
};

use log::{debug, error, info, trace, warn};

mod demo;
mod helpers;
mod observer;

use helpers::*;
use observer::*;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() {
    init_logging();
    let conf = match build_config() {
        Ok(conf) => conf,
        Err(e) => {
            error!("failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    trace!("configuration: {:?}", conf);
    let mut subject = Subject::new(stdout_console(), state_source_for(&conf))
        .with_settle_time(conf.settle_time);
    demo::run_demo(&mut subject);
    info!(
        "demo finished with {} observer(s) attached: {:?}",
        subject.observer_count(),
        subject
    );
}
