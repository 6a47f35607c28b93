//! Every check holds: exit code 0 on host, `success` breakpoint on target.

#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_std)]
#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_main)]

use log::info;
use unit::assert;

unit::main!(tests);

fn tests() {
    arithmetic();
    slices();
    info!("all checks held");
}

fn arithmetic() {
    assert!(1 == 1);
    assert!(2 + 2 == 4);
    assert!(u8::MAX.checked_add(1).is_none());
}

fn slices() {
    let readings = [3u16, 1, 4, 1, 5];
    assert!(readings.len() == 5);
    assert!(readings.iter().copied().max() == Some(5));
    assert!(!readings.contains(&9));
}
