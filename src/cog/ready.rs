use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Records which cogs have reported ready.
///
/// Both the per-cog flags and the aggregate `booted` flag only ever go from
/// false to true. Reconnects that deliver further ready events change nothing.
pub struct ReadinessTracker {
    expected: BTreeSet<String>,
    ready: Mutex<BTreeSet<String>>,
    booted: AtomicBool,
}

impl ReadinessTracker {
    pub fn new<I, S>(expected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected: expected.into_iter().map(Into::into).collect(),
            ready: Mutex::new(BTreeSet::new()),
            booted: AtomicBool::new(false),
        }
    }

    pub fn is_up(&self, cog: &str) -> bool {
        self.ready
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(cog)
    }

    /// Marks a cog as ready.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn up(&self, cog: &str) -> bool {
        let all_ready = {
            let mut ready = self.ready.lock().unwrap_or_else(PoisonError::into_inner);

            if !ready.insert(cog.to_string()) {
                return false;
            }

            self.expected.iter().all(|name| ready.contains(name))
        };

        tracing::info!("{} cog ready", cog);

        if all_ready && !self.booted.swap(true, Ordering::SeqCst) {
            tracing::info!("All {} cogs ready", self.expected.len());
        }

        true
    }

    /// Whether every expected cog has reported ready.
    pub fn booted(&self) -> bool {
        self.booted.load(Ordering::SeqCst)
    }
}
