//! The second check fails: one diagnostic line, then exit code 1 on host,
//! `failure` breakpoint on target.

#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_std)]
#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_main)]

use unit::assert;

unit::main!(tests);

fn tests() {
    assert!(1 == 1);
    progress("first check held");
    assert!(2 == 3);
    progress("second check held");
}

fn progress(step: &str) {
    #[cfg(not(all(target_arch = "arm", target_os = "none")))]
    println!("{}", step);
    #[cfg(all(target_arch = "arm", target_os = "none"))]
    log::info!("{}", step);
}
