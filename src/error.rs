use failure::*;
use state::Operation;

#[derive(Debug, Fail, PartialEq, Eq, Clone)]
pub enum OwnershipError {
    #[fail(display = "unable to allocate {} bytes for {}!", size, type_name)]
    AllocationFailure {
        type_name: &'static str,
        size: usize,
    },

    #[fail(display = "attempted to {} an empty owner of {}!", operation, type_name)]
    EmptyAccess {
        operation: Operation,
        type_name: &'static str,
    },
}

impl OwnershipError {
    pub fn empty_access<T>(operation: Operation) -> Self {
        OwnershipError::EmptyAccess { operation, type_name: ::std::any::type_name::<T>() }
    }

    pub fn allocation_failure<T>() -> Self {
        OwnershipError::AllocationFailure {
            type_name: ::std::any::type_name::<T>(),
            size: ::std::mem::size_of::<T>(),
        }
    }

    pub fn is_empty_access(&self) -> bool {
        match self {
            OwnershipError::EmptyAccess { .. } => true,
            _ => false,
        }
    }
}
