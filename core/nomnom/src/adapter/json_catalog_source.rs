//! JSON ファイル（レストラン配列）からカタログを読み込むアダプタ

use crate::domain::{Catalog, Restaurant};
use crate::ports::outbound::CatalogSource;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct JsonCatalogSource {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> Result<Catalog, Error> {
        let s = self.fs.read_to_string(&self.path)?;
        let restaurants: Vec<Restaurant> = serde_json::from_str(&s).map_err(|e| {
            Error::json(format!("parse {}: {}", self.path.display(), e))
        })?;
        Catalog::new(restaurants).map_err(|e| {
            Error::invalid_data(format!("{}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::mock_catalog::mock_restaurants;
    use common::adapter::StdFileSystem;

    fn source_with(content: &str) -> (tempfile::TempDir, JsonCatalogSource) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("catalog.json");
        std::fs::write(&path, content).unwrap();
        let source = JsonCatalogSource::new(Arc::new(StdFileSystem), &path);
        (tmp, source)
    }

    #[test]
    fn test_load_written_catalog() {
        let json = serde_json::to_string(&mock_restaurants()).unwrap();
        let (_tmp, source) = source_with(&json);
        let catalog = source.load().unwrap();
        assert_eq!(catalog.restaurants(), mock_restaurants().as_slice());
    }

    #[test]
    fn test_duplicate_ids_are_invalid_data() {
        let mut list = mock_restaurants();
        list[1].id = list[0].id.clone();
        let (_tmp, source) = source_with(&serde_json::to_string(&list).unwrap());
        let err = source.load().unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(err.to_string().contains("Duplicate restaurant id in catalog: r1"));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let (_tmp, source) = source_with("{not json");
        assert!(matches!(source.load().unwrap_err(), Error::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let source = JsonCatalogSource::new(Arc::new(StdFileSystem), tmp.path().join("none.json"));
        assert!(matches!(source.load().unwrap_err(), Error::Io(_)));
    }
}
