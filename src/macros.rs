//! Logging macros bound to the RMM default logger. They take the same
//! arguments as the `tracing` event macros.

#[macro_export]
macro_rules! rmm_log_trace {
    ($($arg:tt)+) => { $crate::default_logger().in_scope(|| $crate::tracing::trace!($($arg)+)) };
}

#[macro_export]
macro_rules! rmm_log_debug {
    ($($arg:tt)+) => { $crate::default_logger().in_scope(|| $crate::tracing::debug!($($arg)+)) };
}

#[macro_export]
macro_rules! rmm_log_info {
    ($($arg:tt)+) => { $crate::default_logger().in_scope(|| $crate::tracing::info!($($arg)+)) };
}

#[macro_export]
macro_rules! rmm_log_warn {
    ($($arg:tt)+) => { $crate::default_logger().in_scope(|| $crate::tracing::warn!($($arg)+)) };
}

#[macro_export]
macro_rules! rmm_log_error {
    ($($arg:tt)+) => { $crate::default_logger().in_scope(|| $crate::tracing::error!($($arg)+)) };
}
