use crate::raw::DEFAULT_INITIAL_CAPACITY;
use crate::{List, ListError};

/// Configures the growth policy of new lists.
///
/// The initial capacity is the number of slots the first growth allocates;
/// every later growth doubles the capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListBuilder {
    initial_capacity: usize,
}

impl ListBuilder {
    pub fn new() -> ListBuilder {
        ListBuilder {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// Sets the first growth size, at least one slot.
    pub fn initial_capacity(mut self, slots: usize) -> ListBuilder {
        self.initial_capacity = slots.max(1);
        self
    }

    pub fn get_initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Empty list; nothing is allocated until the first insertion.
    pub fn build<T>(&self) -> List<T> {
        List::with_initial_capacity(self.initial_capacity)
    }

    pub fn build_boxed<T>(&self) -> Result<Box<List<T>>, ListError> {
        self.build().into_heap()
    }

    pub fn build_from_slice<T: Clone>(&self, source: &[T]) -> Result<List<T>, ListError> {
        let mut list = self.build();
        list.assign_from_slice(source)?;
        Ok(list)
    }
}

impl Default for ListBuilder {
    fn default() -> Self {
        ListBuilder::new()
    }
}

#[cfg(test)]
mod builder_tests {
    use crate::{ListBuilder, DEFAULT_INITIAL_CAPACITY};

    #[test]
    fn defaults_to_twenty_slots() {
        assert_eq!(DEFAULT_INITIAL_CAPACITY, ListBuilder::default().get_initial_capacity());
        let mut list = ListBuilder::new().build();
        list.append(1u8).unwrap();
        assert_eq!(20, list.capacity());
    }

    #[test]
    fn configured_first_growth_then_doubling() {
        let builder = ListBuilder::new().initial_capacity(3);
        let mut list = builder.build();
        let mut seen = Vec::new();
        for i in 0..13 {
            list.append(i).unwrap();
            if seen.last() != Some(&list.capacity()) {
                seen.push(list.capacity());
            }
        }
        assert_eq!(vec![3, 6, 12, 24], seen);
    }

    #[test]
    fn zero_initial_capacity_is_clamped() {
        assert_eq!(1, ListBuilder::new().initial_capacity(0).get_initial_capacity());
    }

    #[test]
    fn clones_keep_configuration() {
        let list = ListBuilder::new().initial_capacity(4).build_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(4, list.capacity());
        let mut copy = list.try_clone().unwrap();
        assert_eq!(4, copy.capacity());
        copy.append(4).unwrap();
        copy.append(5).unwrap();
        assert_eq!(8, copy.capacity());
    }

    #[test]
    fn boxed_lists_use_configuration() {
        let mut list = ListBuilder::new().initial_capacity(2).build_boxed::<&str>().unwrap();
        list.append("a").unwrap();
        assert_eq!(2, list.capacity());
        list.release_boxed();
    }
}
