//! Completion signaling, chosen at build time
//!
//! [`Active`] names the implementation compiled into this build: [`Host`]
//! anywhere with an OS process model, `Target` on bare-metal ARM. Both share
//! the marker-first ordering in [`Completion::report_success`] and
//! [`Completion::report_failure`].

use crate::markers;
use core::fmt;

/// Printed when execution carries on past the success breakpoint.
pub const PAST_BREAKPOINTS: &str = "execution past breakpoints :=(\n";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Outcome {
    Success,
    Failure,
}

/// How a run reports its diagnostics and outcome to whoever is watching.
pub trait Completion {
    /// A debugger watches the markers; nothing after them is expected to run.
    const BREAKPOINT_DRIVEN: bool;

    /// Bring up the diagnostic channel. Runs before any output is attempted.
    fn init();

    /// Write to the diagnostic channel. Dropped silently if the channel is down.
    fn diagnostic(args: fmt::Arguments);

    /// Hit the breakpoint marker for `outcome`.
    fn mark(outcome: Outcome) {
        match outcome {
            Outcome::Success => markers::success(),
            Outcome::Failure => markers::failure(),
        }
    }

    /// Stop for good.
    fn exit(outcome: Outcome) -> !;

    /// Every check held. Hits the success marker before anything else.
    fn report_success() -> ! {
        Self::mark(Outcome::Success);
        if Self::BREAKPOINT_DRIVEN {
            // Only reached when the debugger didn't stop on `success`
            Self::diagnostic(format_args!("{}", PAST_BREAKPOINTS));
        }
        Self::exit(Outcome::Success)
    }

    /// A check failed. Hits the failure marker before stopping.
    fn report_failure() -> ! {
        Self::mark(Outcome::Failure);
        Self::exit(Outcome::Failure)
    }
}

#[cfg(not(all(target_arch = "arm", target_os = "none")))]
mod host;
#[cfg(not(all(target_arch = "arm", target_os = "none")))]
pub use host::Host;
#[cfg(not(all(target_arch = "arm", target_os = "none")))]
pub type Active = Host;

#[cfg(all(target_arch = "arm", target_os = "none"))]
mod target;
#[cfg(all(target_arch = "arm", target_os = "none"))]
pub use target::Target;
#[cfg(all(target_arch = "arm", target_os = "none"))]
pub type Active = Target;
