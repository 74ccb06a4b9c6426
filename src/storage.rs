use std::alloc::{ self, Layout };
use std::marker::PhantomData;
use std::mem;
use std::ptr::{ self, NonNull };

use error::OwnershipError;

/// Uninitialized heap storage for exactly one `T`.
///
/// A slot is reserved before the value exists so that constructors run only
/// once memory is known to be available. Dropping an unfilled slot hands the
/// memory back to the global allocator.
pub struct Slot<T> {
    ptr: NonNull<T>,
    _marker: PhantomData<T>,
}

impl<T> Slot<T> {
    pub fn reserve() -> Result<Self, OwnershipError> {
        let layout = Layout::new::<T>();

        // zero sized values never touch the allocator
        if layout.size() == 0 {
            return Ok(Slot { ptr: NonNull::dangling(), _marker: PhantomData });
        }

        let raw = unsafe { alloc::alloc(layout) } as *mut T;

        match NonNull::new(raw) {
            Some(ptr) => {
                trace!("reserved {} bytes for {}", layout.size(), ::std::any::type_name::<T>());
                Ok(Slot { ptr, _marker: PhantomData })
            },
            None => Err(OwnershipError::allocation_failure::<T>()),
        }
    }

    /// Moves `value` into the slot. The returned box owns the allocation.
    pub fn fill(self, value: T) -> Box<T> {
        let ptr = self.ptr.as_ptr();

        mem::forget(self);

        unsafe {
            ptr::write(ptr, value);
            Box::from_raw(ptr)
        }
    }
}

impl<T> Drop for Slot<T> {
    fn drop(&mut self) {
        let layout = Layout::new::<T>();

        if layout.size() == 0 {
            return;
        }

        trace!("returning unfilled slot for {}", ::std::any::type_name::<T>());

        unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout) };
    }
}
