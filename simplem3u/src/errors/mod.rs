// From lcsm-server project
#[macro_export]
macro_rules! something_with_error_log {
    ($fallback:expr) => {
        |e| {
            use log::error;

            error!("{}", e);
            $fallback
        }
    };

    ($position:expr, $fallback:expr) => {
        |e| {
            use log::error;

            error!("{}: {}", $position, e);
            $fallback
        }
    };
}

/// Logs the error and falls back to `Default::default()`
#[macro_export]
macro_rules! default_with_log {
    () => {{ $crate::something_with_error_log!(Default::default()) }};

    ($msg:expr) => {{ $crate::something_with_error_log!($msg, Default::default()) }};
}

pub use default_with_log;
pub use something_with_error_log;
