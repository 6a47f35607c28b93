use super::{Completion, Outcome};
use crate::sync::SingleCoreLock;
use core::fmt::{self, Write};
use cortex_m::asm;
use cortex_m_semihosting::hio::{self, HostStream};

type Inner = HostStream;

/// Semihosting stderr, opened by `init`
static CHANNEL: SingleCoreLock<Option<Inner>> = SingleCoreLock::new(None);

/// Bare-metal ARM under an attached debugger: semihosting for diagnostics,
/// breakpoints on the markers for the outcome.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Target;

impl Target {
    pub fn set_inner(inner: Inner) {
        let _ = CHANNEL.lock(|i| i.replace(inner));
    }
}

impl Completion for Target {
    const BREAKPOINT_DRIVEN: bool = true;

    fn init() {
        // Without a debugger attached there's nobody to talk to
        if let Ok(stream) = hio::hstderr() {
            Target::set_inner(stream);
        }
    }

    fn diagnostic(args: fmt::Arguments) {
        // A panic while writing lands back here; that nested write is dropped
        let _ = CHANNEL.lock(|maybe_stream| {
            if let Some(stream) = maybe_stream {
                stream.write_fmt(args).ok();
            }
        });
    }

    /// With `semihosting-exit`, QEMU exits with the matching status first.
    fn exit(outcome: Outcome) -> ! {
        #[cfg(feature = "semihosting-exit")]
        {
            use cortex_m_semihosting::debug;
            debug::exit(match outcome {
                Outcome::Success => debug::EXIT_SUCCESS,
                Outcome::Failure => debug::EXIT_FAILURE,
            });
        }
        #[cfg(not(feature = "semihosting-exit"))]
        let _ = outcome;

        loop {
            asm::wfi();
        }
    }
}
