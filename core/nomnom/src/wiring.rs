//! 配線: 標準アダプタで NomNomApp を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, StdClock, StdEnvResolver, StdFileSystem, StdIdGenerator};
use common::domain::{Dirs, HomeDir};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, IdGenerator, Log};

use crate::adapter::{FileConfigLoader, FileLocalStorage, JsonCatalogSource, MockCatalogSource};
use crate::ports::outbound::{CatalogSource, ConfigLoader, LocalStorage};
use crate::usecase::{AppDeps, NomNomApp};

/// CLI から渡す配線オプション（config.json より優先）
#[derive(Debug, Clone, Default)]
pub struct WireOptions {
    pub home_dir: Option<HomeDir>,
    pub catalog_path: Option<PathBuf>,
}

/// 配線で組み立てたアプリと周辺ポート（main のディスパッチで利用）
pub struct App {
    pub app: NomNomApp,
    /// 構造化ログ（ファイルへ JSONL）。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
    pub dirs: Dirs,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_nomnom(opts: &WireOptions) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let dirs = env_resolver.resolve_dirs(opts.home_dir.as_ref())?;
    let logger: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), dirs.log_file()));

    let config_loader = FileConfigLoader::new(Arc::clone(&fs));
    let mut config = config_loader.load(&dirs.config_file())?;
    if let Some(path) = &opts.catalog_path {
        config.catalog_path = Some(path.clone());
    }

    let catalog_source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonCatalogSource::new(Arc::clone(&fs), path)),
        None => Box::new(MockCatalogSource),
    };
    let catalog = catalog_source.load()?;

    let storage: Arc<dyn LocalStorage> =
        Arc::new(FileLocalStorage::new(Arc::clone(&fs), dirs.storage_dir()));
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let id_gen: Arc<dyn IdGenerator> = Arc::new(StdIdGenerator::new(Arc::clone(&clock)));

    let app = NomNomApp::start(
        catalog,
        AppDeps {
            storage,
            clock,
            id_gen,
            logger: Arc::clone(&logger),
            key_prefix: config.storage_key_prefix.clone(),
        },
    );
    Ok(App { app, logger, dirs })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(home: &std::path::Path) -> WireOptions {
        WireOptions {
            home_dir: Some(HomeDir::new(home)),
            catalog_path: None,
        }
    }

    #[test]
    fn test_unusable_key_prefix_stops_startup() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = Dirs::under(&HomeDir::new(tmp.path()));
        std::fs::create_dir_all(&dirs.config_dir).unwrap();
        std::fs::write(dirs.config_file(), r#"{"storage_key_prefix": "nom."}"#).unwrap();

        let err = wire_nomnom(&options(tmp.path())).err().unwrap();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(!dirs.storage_dir().exists());
    }

    #[test]
    fn test_configured_prefix_persists_across_restart() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = Dirs::under(&HomeDir::new(tmp.path()));
        std::fs::create_dir_all(&dirs.config_dir).unwrap();
        std::fs::write(dirs.config_file(), r#"{"storage_key_prefix": "dev-"}"#).unwrap();

        {
            let mut wired = wire_nomnom(&options(tmp.path())).unwrap();
            wired.app.login("Asha", "asha@example.com");
        }
        assert!(dirs.storage_dir().join("dev-user.json").exists());

        let wired = wire_nomnom(&options(tmp.path())).unwrap();
        assert_eq!(
            wired.app.current_session().map(|s| s.name.as_str()),
            Some("Asha")
        );
    }
}
