//! General useful bits and bobs

use super::*;

mod config;
mod console;
mod filesystem;
#[cfg(test)]
mod test_helpers;

pub use config::{build_config, MasterConfig, StateSourceKind};
pub use console::{stdout_console, Console};
pub use filesystem::{real_filesystem, Filesystem, FilesystemTrait};
#[cfg(test)]
pub use test_helpers::*;
