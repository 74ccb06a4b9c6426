use owner::Owner;

/// Non-owning access that lasts exactly as long as `scope` runs.
pub trait SafeBorrow<T> {
    fn borrow_safe<B, Func: FnOnce(&T) -> B>(&self, scope: Func) -> B;
    fn borrow_mut_safe<B, Func: FnOnce(&mut T) -> B>(&mut self, scope: Func) -> B;
}

impl<T> SafeBorrow<T> for Owner<T> {
    fn borrow_safe<B, Func: FnOnce(&T) -> B>(&self, scope: Func) -> B {
        scope(&**self)
    }

    fn borrow_mut_safe<B, Func: FnOnce(&mut T) -> B>(&mut self, scope: Func) -> B {
        scope(&mut **self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_borrow_reads_and_writes() {
        let mut owner = Owner::new(vec!(1, 2));

        owner.borrow_mut_safe(|list| list.push(3));

        assert_eq!(owner.borrow_safe(|list| list.len()), 3);
        assert!(!owner.is_empty());
    }

    #[test]
    #[should_panic(expected = "attempted to dereference an empty owner")]
    fn scoped_borrow_of_empty_owner_panics() {
        let owner: Owner<u8> = Owner::empty();

        owner.borrow_safe(|value| *value);
    }
}
