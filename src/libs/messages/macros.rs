//! Output macros for taskdeck messages.
//!
//! Every macro routes through [`__msg_emit!`]: in normal mode the message is
//! printed to the console, in debug mode it becomes a `tracing` event so it
//! interleaves with the store's own debug events.
//!
//! Debug mode is on when `TASKDECK_DEBUG` or `RUST_LOG` is set. The check is
//! done once and cached.
//!
//! ```rust,no_run
//! use taskdeck::libs::messages::Message;
//! use taskdeck::{msg_info, msg_success};
//!
//! msg_success!(Message::TaskCreated(7));
//! msg_info!(Message::NoTasksFound, true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when taskdeck runs with structured logging enabled.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKDECK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:expr, $out:ident, $prefix:expr, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            ::tracing::event!($level, "{}{}", $prefix, $msg);
        } else {
            $out!("{}{}", $prefix, $msg);
        }
    };
    ($level:expr, $out:ident, $prefix:expr, $msg:expr, padded) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            ::tracing::event!($level, "\n{}{}\n", $prefix, $msg);
        } else {
            $out!("\n{}{}\n", $prefix, $msg);
        }
    };
}

/// Prints a message without a prefix.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(::tracing::Level::INFO, println, "", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(::tracing::Level::INFO, println, "", $msg, padded)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(::tracing::Level::INFO, println, "✅ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(::tracing::Level::INFO, println, "✅ ", $msg, padded)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(::tracing::Level::INFO, println, "ℹ️ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(::tracing::Level::INFO, println, "ℹ️ ", $msg, padded)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(::tracing::Level::WARN, eprintln, "⚠️ ", $msg)
    };
}

/// Errors always go to stderr in normal mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(::tracing::Level::ERROR, eprintln, "❌ ", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(::tracing::Level::ERROR, eprintln, "❌ ", $msg, padded)
    };
}

/// Debug output is dropped entirely outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            ::tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        ::anyhow::anyhow!("{}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        ::anyhow::bail!("{}", $msg)
    };
}
