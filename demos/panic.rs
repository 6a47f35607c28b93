//! A panic in client code fails the run like an assertion.

#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_std)]
#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_main)]

use unit::assert;

unit::main!(tests);

fn tests() {
    assert!(true);
    let reading: Option<u16> = None;
    let value = reading.unwrap_or_else(|| panic!("sensor returned no reading"));
    assert!(value > 0);
}
