//! The subject, the observers that watch it and the list that connects them

use super::*;

#[allow(clippy::module_inception)]
mod observer;
mod observer_a;
mod observer_b;
mod observer_list;
mod state_source;
mod subject;

pub use observer::Observer;
pub use observer_a::ObserverA;
pub use observer_b::ObserverB;
pub use observer_list::ObserverList;
pub use state_source::{state_source_for, StateSource};
pub use subject::Subject;
