//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where tries live, where the config file is read from and where the
//! log is written.

pub mod paths;

pub use paths::{absolutize, config_path, expand_tilde, get_data_dir, resolve_root, root_from_env};
