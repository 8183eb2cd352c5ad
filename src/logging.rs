// Logging macros that compile to nothing in release builds.

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            log::debug!($($arg)*);
        }
    }};
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            log::info!($($arg)*);
        }
    }};
}
