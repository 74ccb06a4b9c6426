#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

/// Records every id whose destructor ran.
#[derive(Clone, Default)]
pub struct DropLedger {
    dropped: Rc<RefCell<Vec<u32>>>,
}

impl DropLedger {
    pub fn new() -> Self {
        DropLedger::default()
    }

    pub fn widget(&self, id: u32) -> Widget {
        Widget { id, ledger: self.clone() }
    }

    pub fn times_dropped(&self, id: u32) -> usize {
        self.dropped.borrow().iter().filter(|dropped| **dropped == id).count()
    }

    pub fn total(&self) -> usize {
        self.dropped.borrow().len()
    }
}

#[derive(Debug)]
pub struct Widget {
    pub id: u32,
    ledger: DropLedger,
}

impl Drop for Widget {
    fn drop(&mut self) {
        self.ledger.dropped.borrow_mut().push(self.id);
    }
}

impl ::std::fmt::Debug for DropLedger {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        f.debug_list().entries(self.dropped.borrow().iter()).finish()
    }
}
