//! Logging support.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros used inside the crate and can install a `tracing-subscriber`
//! formatter.  Without it, the same names resolve to no-op replacements so
//! call sites never need their own `cfg` attributes.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing::Level;

    /// Installs a global fmt subscriber.  Only the first call has any effect,
    /// and an already-installed subscriber is left in place.
    pub fn init_tracing(verbose: bool) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let level = if verbose { Level::TRACE } else { Level::INFO };
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .try_init();
        });
    }

    pub(crate) use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing(_verbose: bool) {
        // No-op when tracing is disabled
    }

    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! info_span {
        ($($arg:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub(crate) use {debug, info_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::init_tracing;
#[cfg(feature = "tracing")]
pub(crate) use enabled::{debug, info_span, trace};

#[cfg(not(feature = "tracing"))]
pub use disabled::{NoOpSpan, NoOpSpanGuard, init_tracing};
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span, trace};
