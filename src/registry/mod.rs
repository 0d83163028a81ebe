//! Variable registry subsystem.
//!
//! # Data Flow
//! ```text
//! Set:
//!     name + raw string → lookup → readonly check → pipeline → stored value
//!
//! Save / Export:
//!     every variable → value (or template leaf) → set_nested_value → JSON file
//!
//! Load:
//!     JSON file → parse once → for each registered name:
//!         get_nested_value → pipeline → stored value (errors collected)
//!
//! On file change (watcher.rs):
//!     notify event → load → ReloadEvent on channel
//! ```
//!
//! # Design Decisions
//! - One lock guards the map and the config path; each call is atomic
//! - Duplicate names are refused, never overwritten
//! - Load applies what validates and reports the rest in one error
//! - Keys in the file with no registered variable are ignored

pub mod info;
pub mod path;
pub mod persist;
pub mod store;
pub mod watcher;

pub use info::VariableInfo;
pub use path::{get_nested_value, set_nested_value};
pub use store::Registry;
pub use watcher::{RegistryWatcher, ReloadEvent};
