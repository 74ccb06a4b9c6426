//! A handle that is the one and only owner of a heap allocated value.
//!
//! ```
//! use unique_owner::{ Owner, OwnerState };
//!
//! fn sink(owner: Owner<String>) -> usize {
//!     owner.len()
//! }
//!
//! let owner = Owner::new(String::from("widget"));
//! let mut moved = owner;
//!
//! assert_eq!(moved.state(), OwnerState::Owning);
//!
//! let taken = moved.take();
//!
//! assert!(moved.is_empty());
//! assert_eq!(sink(taken), 6);
//! ```

extern crate failure;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg(test)]
extern crate serde_json;

mod error;
mod owner;
mod serialization;
mod state;
mod storage;
mod traits;

pub use error::OwnershipError;
pub use owner::Owner;
pub use state::{ OwnerState, Operation };
pub use traits::SafeBorrow;
