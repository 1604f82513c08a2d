use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;

static VERBOSE_LOGS: Lazy<AtomicBool> = Lazy::new(|| {
    let enabled = match std::env::var("PLAYGEN_LOGS") {
        Ok(v) => matches!(
            v.as_str(),
            "1" | "true" | "TRUE" | "yes" | "YES" | "on" | "ON"
        ),
        Err(_) => false,
    };
    AtomicBool::new(enabled)
});

#[inline]
pub fn verbose_enabled() -> bool {
    VERBOSE_LOGS.load(Ordering::Relaxed)
}

/// Forces verbose logging on, used by the `--verbose` flag.
pub fn enable_verbose() {
    VERBOSE_LOGS.store(true, Ordering::Relaxed);
}
