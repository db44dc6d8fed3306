//! カタログ供給 Outbound ポート

use crate::domain::Catalog;
use common::error::Error;

/// 起動時に 1 度だけ呼ばれ、不変のカタログを返す
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Catalog, Error>;
}
