//! Diagnostic logging shims
//!
//! Forward to `tracing` when the `logging` feature is enabled and compile to
//! nothing otherwise.

macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            tracing::debug!($($arg)+);
        }
    };
}

macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            tracing::trace!($($arg)+);
        }
    };
}

pub(crate) use {debug, trace};
