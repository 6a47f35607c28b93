//! Entry point into host and target unit tests

use crate::config::{Config, DEFAULT_LOG_LEVEL};
use crate::logger;
use crate::markers;
use crate::mode::{self, Completion};
use log::{debug, warn};

/// Run the client's tests once and report the outcome.
///
/// Returning from `tests` means every check held, so this hits the success
/// marker exactly once. A failed check never comes back here.
pub fn run(tests: fn()) -> ! {
    run_with::<mode::Active>(tests)
}

pub(crate) fn run_with<C: Completion>(tests: fn()) -> ! {
    // Semihosting output doesn't exist until the channel is opened
    C::init();

    let (config, config_error) = match Config::from_env() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    if let Err(e) = logger::init(config.log_level) {
        debug!("{}, keeping the installed logger", e);
    }
    if let Some(e) = config_error {
        warn!("{}, using {}", e, DEFAULT_LOG_LEVEL);
    }

    let (success, failure) = markers::addresses();
    debug!("success marker @ {:#010x}", success);
    debug!("failure marker @ {:#010x}", failure);

    debug!("running tests");
    tests();
    debug!("tests returned");

    C::report_success()
}

/// Generate the program entry point around the client's `tests` function.
///
/// ```ignore
/// unit::main!(tests);
///
/// fn tests() {
///     unit::assert!(1 + 1 == 2);
/// }
/// ```
#[cfg(not(all(target_arch = "arm", target_os = "none")))]
#[macro_export]
macro_rules! main {
    ($tests:path) => {
        fn main() {
            // type check the given path
            let tests: fn() = $tests;

            $crate::run(tests)
        }
    };
}

/// Generate the program entry point around the client's `tests` function.
///
/// The crate must be `#![no_std]` and `#![no_main]`.
#[cfg(all(target_arch = "arm", target_os = "none"))]
#[macro_export]
macro_rules! main {
    ($tests:path) => {
        #[$crate::__private::entry]
        fn main() -> ! {
            // type check the given path
            let tests: fn() = $tests;

            $crate::run(tests)
        }
    };
}
