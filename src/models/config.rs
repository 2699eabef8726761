//! Configuration model loaded from external sources.

use std::path::PathBuf;

use serde::Deserialize;

use crate::forms::ListDefaults;
use crate::list_view::DEFAULT_ITEMS_PER_PAGE;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Directory holding the JSON exports of the personnel API.
    pub data_dir: PathBuf,
    #[serde(default = "default_per_page")]
    pub default_per_page: usize,
}

fn default_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

impl ServerConfig {
    /// Defaults applied to list queries that omit a page size.
    pub fn list_defaults(&self) -> ListDefaults {
        ListDefaults {
            per_page: self.default_per_page.clamp(1, 100),
        }
    }
}
