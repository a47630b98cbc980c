use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Cleared when the owning view is disposed; async results check it before touching signals
#[derive(Clone, Debug)]
pub struct AliveFlag(Arc<AtomicBool>);

impl AliveFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Flag tied to the current reactive owner
    pub fn for_owner() -> Self {
        let flag = Self::new();
        let on_dispose = flag.clone();
        on_cleanup(move || on_dispose.dispose());
        flag
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn dispose(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for AliveFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Numbers repeated requests of one view; only the newest may apply its response
#[derive(Clone, Debug, Default)]
pub struct LatestRequest(Arc<AtomicU64>);

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket of a new request, superseding every earlier one
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.0.load(Ordering::Acquire) == ticket
    }
}
