//! Unit test runner for host and target
//!
//! Client code implements a single `tests()` function made of
//! [`assert!`] checks and hands it to [`main!`]. Built for a hosted OS the
//! outcome is the process exit code. Built for a bare-metal ARM target the
//! outcome is which of the [`markers`] the attached debugger sees hit first.

#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_std)]

pub mod assertion;
pub mod config;
pub mod logger;
pub mod markers;
pub mod mode;
pub mod runtime;
pub mod sync;

#[cfg(all(target_arch = "arm", target_os = "none", feature = "panic-handler"))]
mod panic_handler;

pub use assertion::{assertion_failure, Failure};
pub use config::Config;
pub use runtime::run;

#[doc(hidden)]
pub mod __private {
    #[cfg(all(target_arch = "arm", target_os = "none"))]
    pub use cortex_m_rt::entry;

    pub use crate::assertion::{function_path, type_name_of};
}
