use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Symbols the debugger resolves by name before the run starts
const MARKERS: [&str; 2] = ["success", "failure"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-env-changed=UNIT_LOG");

    let target = env::var("TARGET").unwrap_or_default();
    if !(target.starts_with("thumb") || target.starts_with("arm")) || !target.contains("-none-") {
        return;
    }

    // cortex-m-rt's link.x pulls in memory.x from the search path
    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());

    for marker in MARKERS.iter() {
        println!("cargo:rustc-link-arg-bins=--undefined={}", marker);
    }
}
