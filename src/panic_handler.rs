use crate::mode::{self, Completion};
use core::panic::PanicInfo;

#[panic_handler]
fn panic_handler_for_tests(info: &PanicInfo) -> ! {
    mode::Active::diagnostic(format_args!("{}\n", info));
    mode::Active::report_failure()
}
