//! Conditional logging macros.
//!
//! With the `tracing` feature these re-export the `tracing` macros; without
//! it they expand to no-ops with zero runtime overhead. The aggregated
//! unknown-shape warning goes through `warn!`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
