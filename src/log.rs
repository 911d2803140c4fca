//! Internal logging macros.
//!
//! With the `defmt` feature the macros forward to `defmt` so on-target builds
//! get binary logging over RTT. Without it they only borrow their arguments,
//! which keeps call sites warning-free and costs nothing.
//!
//! Format strings must use `defmt` syntax (`{}` / `{=u32}`).

/// Log a message at Trace level.
macro_rules! plot_trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::trace!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        {
            $( let _ = &$arg; )*
        }
    }};
}

/// Log a message at Debug level.
macro_rules! plot_debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        {
            $( let _ = &$arg; )*
        }
    }};
}

/// Log a message at Warn level.
macro_rules! plot_warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        {
            $( let _ = &$arg; )*
        }
    }};
}
