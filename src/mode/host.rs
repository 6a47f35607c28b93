use super::{Completion, Outcome};
use std::fmt;
use std::io::{self, Write};
use std::panic;
use std::process;

/// Process exit status on the first failed check.
pub const EXIT_FAILURE: i32 = 1;

/// A general purpose OS: stderr for diagnostics, exit code for the outcome.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Host;

impl Completion for Host {
    const BREAKPOINT_DRIVEN: bool = false;

    fn init() {
        // A panic in client code fails the run the same way an assertion does
        panic::set_hook(Box::new(|info| {
            Host::diagnostic(format_args!("{}\n", info));
            Host::report_failure()
        }));
    }

    fn diagnostic(args: fmt::Arguments) {
        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        stderr.write_fmt(args).ok();
        stderr.flush().ok();
    }

    fn exit(outcome: Outcome) -> ! {
        match outcome {
            Outcome::Success => process::exit(0),
            Outcome::Failure => process::exit(EXIT_FAILURE),
        }
    }
}
