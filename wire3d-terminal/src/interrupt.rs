/// SIGINT / SIGTERM turned into a flag polled between frames
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::signal::{SIGINT, SIGTERM};
use tracing::debug;

/// Shared stop request. Cloning hands out another view of the same flag.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    /// A flag that only [`raise`](Self::raise) can set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the flag for SIGINT and SIGTERM.
    ///
    /// The handlers only store `true`; the process keeps running until the
    /// loop notices.
    pub fn install() -> io::Result<Self> {
        let interrupt = Self::new();
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&interrupt.flag))?;
        }
        debug!("installed SIGINT/SIGTERM handlers");
        Ok(interrupt)
    }

    pub fn raise(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
