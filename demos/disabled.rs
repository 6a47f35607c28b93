//! Built with `disable-assertions`: nothing is checked and nothing inside
//! a check is evaluated.

#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_std)]
#![cfg_attr(all(target_arch = "arm", target_os = "none"), no_main)]

use unit::assert;

unit::main!(tests);

fn tests() {
    let mut side_effect_flag = false;
    assert!({
        side_effect_flag = true;
        side_effect_flag
    });
    assert!(2 == 3);

    #[cfg(not(all(target_arch = "arm", target_os = "none")))]
    println!("side_effect_flag = {}", side_effect_flag);
    #[cfg(all(target_arch = "arm", target_os = "none"))]
    log::warn!("side_effect_flag = {}", side_effect_flag);
}
