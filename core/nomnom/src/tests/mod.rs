//! NomNomApp を組み立てて行うシナリオテスト

mod persistence_tests;

use std::sync::Arc;

use common::adapter::{FixedClock, MemoryLog, StdIdGenerator};
use common::ports::outbound::{Clock, IdGenerator, Log};

use crate::adapter::mock_catalog::mock_restaurants;
use crate::domain::Catalog;
use crate::ports::outbound::LocalStorage;
use crate::usecase::{AppDeps, NomNomApp};

/// 2023-11-14T22:13:20Z
pub(crate) const T0: u64 = 1_700_000_000_000;

/// 同じストレージで何度でも起動し直せるテスト用の外界
pub(crate) struct Harness {
    pub storage: Arc<dyn LocalStorage>,
    pub clock: Arc<FixedClock>,
    pub logger: Arc<MemoryLog>,
}

impl Harness {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self {
            storage,
            clock: Arc::new(FixedClock::new(T0)),
            logger: Arc::new(MemoryLog::new()),
        }
    }

    /// モックカタログで起動する（起動のたびに ID 生成器は作り直す）
    pub fn start(&self) -> NomNomApp {
        let clock: Arc<dyn Clock> = self.clock.clone();
        let id_gen: Arc<dyn IdGenerator> = Arc::new(StdIdGenerator::new(Arc::clone(&clock)));
        let logger: Arc<dyn Log> = self.logger.clone();
        let catalog = Catalog::new(mock_restaurants()).unwrap();
        NomNomApp::start(
            catalog,
            AppDeps {
                storage: Arc::clone(&self.storage),
                clock,
                id_gen,
                logger,
                key_prefix: "nom_".to_string(),
            },
        )
    }
}
