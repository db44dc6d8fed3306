//! config.json を読み込むアダプタ

use crate::domain::AppConfig;
use crate::ports::outbound::ConfigLoader;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::Path;
use std::sync::Arc;

pub struct FileConfigLoader {
    fs: Arc<dyn FileSystem>,
}

impl FileConfigLoader {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self, path: &Path) -> Result<AppConfig, Error> {
        if !self.fs.exists(path) {
            return Ok(AppConfig::default());
        }
        let s = self.fs.read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&s)
            .map_err(|e| Error::json(format!("parse {}: {}", path.display(), e)))?;
        config
            .validate()
            .map_err(|e| Error::invalid_data(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}
