//! 時刻由来の単調増加 ID を生成する IdGenerator の標準実装（Clock + 直前値）

use crate::ports::outbound::{Clock, IdGenerator};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Clock のミリ秒を ID とし、同じミリ秒や時計の巻き戻りでは直前値 + 1 を返す
pub struct StdIdGenerator {
    clock: Arc<dyn Clock>,
    last: AtomicU64,
}

impl StdIdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for StdIdGenerator {
    fn next_id(&self) -> u64 {
        let now = self.clock.now_ms();
        loop {
            let prev = self.last.load(Ordering::SeqCst);
            let next = if now > prev { now } else { prev + 1 };
            if self
                .last
                .compare_exchange(prev, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return next;
            }
        }
    }
}
