//! ローカルストレージを `<dir>/<key>.json` の 1 キー 1 ファイルで保存するアダプタ
//!
//! 書き込みは一時ファイルに書いてから rename する（読み手が途中状態を見ない）。

use crate::domain::config::is_storage_key_char;
use crate::ports::outbound::LocalStorage;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const RECORD_EXT: &str = "json";
const TMP_EXT: &str = "json.tmp";

pub struct FileLocalStorage {
    fs: Arc<dyn FileSystem>,
    dir: PathBuf,
}

impl FileLocalStorage {
    pub fn new(fs: Arc<dyn FileSystem>, dir: impl AsRef<Path>) -> Self {
        Self {
            fs,
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path(&self, key: &str, ext: &str) -> Result<PathBuf, Error> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, ext)))
    }
}

/// キーはファイル名になるので英数字・`_`・`-` のみ許可
fn validate_key(key: &str) -> Result<(), Error> {
    let ok = !key.is_empty() && key.chars().all(is_storage_key_char);
    if ok {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!("invalid storage key: {:?}", key)))
    }
}

impl LocalStorage for FileLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path(key, RECORD_EXT)?;
        if !self.fs.exists(&path) {
            return Ok(None);
        }
        self.fs.read_to_string(&path).map(Some)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path(key, RECORD_EXT)?;
        let tmp = self.path(key, TMP_EXT)?;
        self.fs.create_dir_all(&self.dir)?;
        self.fs.write(&tmp, value)?;
        self.fs.rename(&tmp, &path)
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        let path = self.path(key, RECORD_EXT)?;
        if self.fs.exists(&path) {
            self.fs.remove_file(&path)?;
        }
        Ok(())
    }
}
