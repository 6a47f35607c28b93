//! Breakpoint targets for the debugger
//!
//! Embedded applications never quite return, and even if they did the
//! invoker would not know about it. The upload recipe loads the binary
//! through gdb and sets a breakpoint on each of these symbols; gdb exits
//! with success or failure depending on which one hits.
//!
//! Both bodies are empty. They stay in the image as two distinct symbols
//! because they are exported unmangled, never inlined, referenced from
//! [`MARKERS`], and (for this crate's binaries) listed as `--undefined`
//! roots on the link line. The harness is also built at `opt-level = 0`.

/// Hit once, after `tests()` returns.
#[no_mangle]
#[inline(never)]
pub extern "C" fn success() {}

/// Hit on the first failed assertion or panic.
#[no_mangle]
#[inline(never)]
pub extern "C" fn failure() {}

/// Address table for both markers, in `[success, failure]` order.
#[used]
pub static MARKERS: [extern "C" fn(); 2] = [success, failure];

/// Marker addresses as seen by the debugger.
pub fn addresses() -> (usize, usize) {
    (MARKERS[0] as usize, MARKERS[1] as usize)
}
