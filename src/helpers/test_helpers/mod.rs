use super::*;

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, VecDeque},
};

mod mock_console;
mod mock_filesystem;
mod mock_observer;
mod scripted_states;

pub use mock_console::*;
pub use mock_filesystem::*;
pub use mock_observer::*;
pub use scripted_states::*;
