//! Configuration management module
//!
//! Raw user configuration, the resolved configuration tree, built-in
//! defaults, and loading (YAML/JSON parsing plus JSON schema validation).

pub mod defaults;
pub mod loader;
pub mod merge;
pub mod resolved;
pub mod schema;
pub mod shorthand;
pub mod user;

pub use resolved::ReleaseConfig;
pub use shorthand::{Shorthand, Toggle};
pub use user::ReleaseUserConfig;

use crate::system::System;
use std::path::Path;

impl ReleaseUserConfig {
    /// Load the user release configuration from a YAML or JSON file
    pub fn load_from_file(system: &dyn System, path: &Path) -> anyhow::Result<Self> {
        loader::load_user_config(system, path)
    }
}
