#[cfg(all(target_arch = "arm", target_os = "none"))]
mod lock;

#[cfg(all(target_arch = "arm", target_os = "none"))]
pub use lock::SingleCoreLock;
