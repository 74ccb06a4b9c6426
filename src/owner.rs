use std::alloc::{ handle_alloc_error, Layout };
use std::any::type_name;
use std::fmt;
use std::ops::{ Deref, DerefMut };
use std::ptr;

use error::OwnershipError;
use state::{ OwnerState, Operation };
use storage::Slot;

/// Sole owner of one heap allocated `T`.
///
/// An `Owner` can be moved but never duplicated. Moving it by value hands the
/// resource to the destination and the compiler rejects every later use of the
/// source:
///
/// ```compile_fail
/// use unique_owner::Owner;
///
/// fn sink(_owner: Owner<u32>) {}
///
/// let owner = Owner::new(1998);
///
/// sink(owner);
/// sink(owner);
/// ```
///
/// There is no way to produce a second owner of the same resource:
///
/// ```compile_fail
/// use unique_owner::Owner;
///
/// let owner = Owner::new(1998);
/// let copy: Owner<u32> = Clone::clone(&owner);
/// ```
///
/// Borrows of the resource can't outlive the owner:
///
/// ```compile_fail
/// use unique_owner::Owner;
///
/// let borrowed: &u32;
/// {
///     let owner = Owner::new(1998);
///     borrowed = &*owner;
/// }
/// assert_eq!(*borrowed, 1998);
/// ```
///
/// When a move has to happen behind a `&mut` (for example out of a struct
/// field), [`take`](#method.take) leaves the source empty instead. Accessing an
/// empty owner through `Deref` panics, `get` and `release` report
/// `OwnershipError::EmptyAccess`.
///
/// The resource is destroyed exactly once: when the owner holding it goes out
/// of scope, on unwind included, or earlier through [`reset`](#method.reset).
pub struct Owner<T> {
    protege: Option<Box<T>>,
}

impl<T> Owner<T> {
    /// Allocates storage for `value` and takes ownership of it.
    pub fn create(value: T) -> Result<Self, OwnershipError> {
        Self::create_with(|| value)
    }

    /// Reserves storage first and only then runs `init`.
    ///
    /// If `init` panics the reserved storage is given back before the panic
    /// continues.
    pub fn create_with<F: FnOnce() -> T>(init: F) -> Result<Self, OwnershipError> {
        let slot = Slot::reserve()?;
        let value = init();
        let protege = slot.fill(value);

        debug!("created owner of {} at {:p}", type_name::<T>(), &*protege);

        Ok(Owner { protege: Some(protege) })
    }

    /// Like [`create`](#method.create), but diverts allocation failure to the
    /// global allocation error handler.
    pub fn new(value: T) -> Self {
        match Self::create(value) {
            Ok(owner) => owner,
            Err(_) => handle_alloc_error(Layout::new::<T>()),
        }
    }

    pub fn empty() -> Self {
        Owner { protege: None }
    }

    /// Moves the resource into a new owner and leaves `self` empty.
    ///
    /// Taking from an empty owner yields another empty owner.
    pub fn take(&mut self) -> Owner<T> {
        let protege = self.protege.take();

        if let Some(ref protege) = protege {
            debug!("moved {} at {:p} to a new owner", type_name::<T>(), &**protege);
        }

        Owner { protege }
    }

    /// Move assignment: destroys the current resource, if any, and takes over
    /// the one held by `source`. `source` is left empty.
    ///
    /// ```compile_fail
    /// use unique_owner::Owner;
    ///
    /// let mut owner = Owner::new(1998);
    ///
    /// owner.move_from(&mut owner);
    /// ```
    pub fn move_from(&mut self, source: &mut Owner<T>) {
        let incoming = source.take();

        self.reset();
        self.protege = incoming.into_box();
    }

    pub fn get(&self) -> Result<&T, OwnershipError> {
        self.protege.as_ref()
            .map(|protege| &**protege)
            .ok_or_else(|| OwnershipError::empty_access::<T>(Operation::Dereference))
    }

    pub fn get_mut(&mut self) -> Result<&mut T, OwnershipError> {
        self.protege.as_mut()
            .map(|protege| &mut **protege)
            .ok_or_else(|| OwnershipError::empty_access::<T>(Operation::Dereference))
    }

    /// Hands the bare value to the caller, who becomes responsible for
    /// destroying it. The owner is left empty.
    pub fn release(&mut self) -> Result<T, OwnershipError> {
        match self.protege.take() {
            Some(protege) => {
                debug!("released {} at {:p}", type_name::<T>(), &*protege);

                Ok(*protege)
            },
            None => Err(OwnershipError::empty_access::<T>(Operation::Release)),
        }
    }

    pub fn into_inner(mut self) -> Option<T> {
        self.protege.take().map(|protege| *protege)
    }

    pub fn into_box(mut self) -> Option<Box<T>> {
        self.protege.take()
    }

    /// Destroys the resource now. Calling it on an empty owner does nothing.
    pub fn reset(&mut self) {
        // the owner is empty before the value's destructor runs, so a
        // panicking destructor can't be entered twice
        if let Some(protege) = self.protege.take() {
            debug!("destroying {} at {:p}", type_name::<T>(), &*protege);

            drop(protege);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.protege.is_none()
    }

    pub fn state(&self) -> OwnerState {
        if self.is_empty() {
            OwnerState::Empty
        } else {
            OwnerState::Owning
        }
    }

    /// Address of the resource, null when empty.
    pub fn as_ptr(&self) -> *const T {
        match self.protege {
            Some(ref protege) => &**protege as *const T,
            None => ptr::null(),
        }
    }
}

impl<T> Drop for Owner<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Default for Owner<T> {
    fn default() -> Self {
        Owner::empty()
    }
}

impl<T> From<Box<T>> for Owner<T> {
    fn from(protege: Box<T>) -> Self {
        Owner { protege: Some(protege) }
    }
}

impl<T> Deref for Owner<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.get() {
            Ok(protege) => protege,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> DerefMut for Owner<T> {
    fn deref_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Ok(protege) => protege,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Owner<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.protege {
            Some(ref protege) => f.debug_tuple("Owner").field(&**protege).finish(),
            None => f.write_str("Owner(Empty)"),
        }
    }
}
