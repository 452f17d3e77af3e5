//! This module is for testing only

use std::cell::Cell;
use std::rc::Rc;

/// Shared count of how many `Tracked` values were dropped.
#[derive(Clone, Default)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn get(&self) -> usize {
        self.drops.get()
    }
}

/// A value that reports its drop to a `DropCounter`. Clones report to the same counter.
#[derive(Debug)]
pub struct Tracked {
    pub value: i32,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    pub fn new(value: i32, counter: &DropCounter) -> Tracked {
        Tracked { value, drops: counter.drops.clone() }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Tracked { value: self.value, drops: self.drops.clone() }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn dropflag() {
    let counter = DropCounter::default();
    let tracked = Tracked::new(7, &counter);
    let copy = tracked.clone();
    assert_eq!(0, counter.get());
    std::mem::drop(tracked);
    assert_eq!(1, counter.get());
    std::mem::drop(copy);
    assert_eq!(2, counter.get());
}
