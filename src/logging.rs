//! Logging macros
//!
//! Forward to `defmt` when built for the MCU. On the host (unit tests) the
//! arguments are only borrowed so no global logger is needed at link time.
//! Format strings must stay within the subset both sides understand (`{}`, `{:?}`).

#[macro_export]
macro_rules! log_debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(target_os = "none")]
        defmt::debug!($fmt $(, $arg)*);
        #[cfg(not(target_os = "none"))]
        { $( let _ = &$arg; )* }
    }};
}

#[macro_export]
macro_rules! log_info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(target_os = "none")]
        defmt::info!($fmt $(, $arg)*);
        #[cfg(not(target_os = "none"))]
        { $( let _ = &$arg; )* }
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(target_os = "none")]
        defmt::warn!($fmt $(, $arg)*);
        #[cfg(not(target_os = "none"))]
        { $( let _ = &$arg; )* }
    }};
}

#[macro_export]
macro_rules! log_error {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(target_os = "none")]
        defmt::error!($fmt $(, $arg)*);
        #[cfg(not(target_os = "none"))]
        { $( let _ = &$arg; )* }
    }};
}
