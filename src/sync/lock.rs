use core::cell::{Cell, UnsafeCell};

/// Interior mutability for statics on a single core target.
///
/// Exclusive access comes from running the closure with interrupts
/// masked, so an interrupt handler can't observe a half-written value.
/// A nested `lock` from inside the closure (a panic handler, say) gets
/// `None` instead of a second `&mut`.
pub struct SingleCoreLock<T> {
    data: UnsafeCell<T>,
    held: Cell<bool>,
}

unsafe impl<T> Sync for SingleCoreLock<T> {}

impl<T> SingleCoreLock<T> {
    pub const fn new(data: T) -> SingleCoreLock<T> {
        SingleCoreLock {
            data: UnsafeCell::new(data),
            held: Cell::new(false),
        }
    }
}

impl<T> SingleCoreLock<T> {
    pub fn lock<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        cortex_m::interrupt::free(|_| {
            if self.held.replace(true) {
                return None;
            }
            let r = f(unsafe { &mut *self.data.get() });
            self.held.set(false);
            Some(r)
        })
    }
}
