use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use tracing::{debug, warn};

/// Ctrl+C latch. The signal only sets the flag; the run loop reads it
/// between generations, so a step is never cut short.
#[derive(Clone, Debug, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening for Ctrl+C on a background thread.
    /// If no listener can be set up, Ctrl+C keeps its default behaviour.
    pub fn install() -> Self {
        let interrupt = Self::new();
        let handle = interrupt.clone();

        let spawned = thread::Builder::new()
            .name("ctrl-c".to_string())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
                    Ok(runtime) => runtime,
                    Err(err) => {
                        warn!(%err, "Ctrl+C handling unavailable");
                        return;
                    }
                };
                runtime.block_on(async {
                    match tokio::signal::ctrl_c().await {
                        Ok(()) => {
                            debug!("interrupt received");
                            handle.trigger();
                        }
                        Err(err) => warn!(%err, "Ctrl+C handling unavailable"),
                    }
                });
            });
        if let Err(err) = spawned {
            warn!(%err, "Ctrl+C handling unavailable");
        }

        interrupt
    }

    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
