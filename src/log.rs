//! Logging macros for the controller and host adapter.
//!
//! With the `tracing` feature these are the `tracing` macros. Without it they
//! expand to nothing, so frame steps and path generation carry no logging cost.
//!
//! Call sites use the full path: `crate::log::debug!(...)`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __squircley_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __squircley_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __squircley_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{__squircley_debug as debug, __squircley_info as info, __squircley_warn as warn};
