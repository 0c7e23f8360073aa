use crate::arena::{Arena, ItemId};
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the items of a chain, yielding their handles.
///
/// It uses a pair of nodes `front..=back` to represent the remaining range,
/// and the number of remaining items to know when the two ends meet. The
/// `Iter` borrows the arena immutably, so the chain cannot change under it.
///
/// Walking a list backwards is `list.iter().rev()`.
///
/// # Examples
///
/// ```
/// use listable::{Arena, Insertable};
///
/// let mut arena = Arena::new();
/// let list = arena.new_list();
/// let mut view = arena.list_mut(list);
/// for c in ['a', 'b', 'c'] {
///     view.push(Insertable::Value(c))?;
/// }
///
/// let list = arena.list(list);
/// let mut iter = list.iter();
/// assert_eq!(iter.len(), 3);
/// assert_eq!(iter.next().map(|id| arena[id]), Some('a'));
/// assert_eq!(iter.next_back().map(|id| arena[id]), Some('c'));
/// assert_eq!(iter.next().map(|id| arena[id]), Some('b'));
/// assert_eq!(iter.next(), None);
/// # Ok::<(), listable::Error>(())
/// ```
pub struct Iter<'a, T: 'a> {
    arena: &'a Arena<T>,
    front: Option<usize>,
    back: Option<usize>,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, chain: usize) -> Self {
        let record = &arena.chains[chain];
        Self {
            arena,
            front: record.front,
            back: record.back,
            len: record.len,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        for id in self.clone() {
            f.field(&self.arena.nodes[id.0].element);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = ItemId;

    /// Return `front` and shrink the range to `front.next..=back`, or return
    /// `None` if the range is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let key = self.front?;
        self.len -= 1;
        self.front = self.arena.nodes[key].next;
        Some(ItemId(key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn count(self) -> usize {
        self.len
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Return `back` and shrink the range to `front..=back.prev`, or return
    /// `None` if the range is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let key = self.back?;
        self.len -= 1;
        self.back = self.arena.nodes[key].prev;
        Some(ItemId(key))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An iterator over the values of a chain. Created by `values()` on lists.
pub struct Values<'a, T: 'a> {
    iter: Iter<'a, T>,
}

impl<'a, T: 'a> Values<'a, T> {
    pub(crate) fn new(iter: Iter<'a, T>) -> Self {
        Self { iter }
    }

    fn element(&self, id: ItemId) -> &'a T {
        &self.iter.arena.nodes[id.0].element
    }
}

impl<'a, T: 'a> Clone for Values<'a, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Values<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: 'a> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|id| self.element(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Values<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|id| self.element(id))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Values<'a, T> {}

impl<'a, T: 'a> FusedIterator for Values<'a, T> {}

/// An iterator over the items strictly before or after an item, nearest
/// first. Created by `before()` and `after()` on item views.
///
/// It stops at the boundary of the chain, never at the end-of-list sentinel
/// of another list.
pub struct Siblings<'a, T: 'a> {
    arena: &'a Arena<T>,
    next: Option<usize>,
    forward: bool,
}

impl<'a, T: 'a> Siblings<'a, T> {
    pub(crate) fn after(arena: &'a Arena<T>, key: usize) -> Self {
        Self {
            arena,
            next: arena.nodes[key].next,
            forward: true,
        }
    }

    pub(crate) fn before(arena: &'a Arena<T>, key: usize) -> Self {
        Self {
            arena,
            next: arena.nodes[key].prev,
            forward: false,
        }
    }
}

impl<'a, T: 'a> Clone for Siblings<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: 'a> fmt::Debug for Siblings<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: 'a> Iterator for Siblings<'a, T> {
    type Item = ItemId;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next?;
        let node = &self.arena.nodes[key];
        self.next = if self.forward { node.next } else { node.prev };
        Some(ItemId(key))
    }
}

impl<'a, T: 'a> FusedIterator for Siblings<'a, T> {}

#[cfg(test)]
mod tests {
    use crate::{Arena, Insertable, ListId};

    fn list_of(arena: &mut Arena<u32>, values: &[u32]) -> ListId {
        let list = arena.new_list();
        let mut view = arena.list_mut(list);
        for &value in values {
            view.push(Insertable::Value(value)).unwrap();
        }
        list
    }

    #[test]
    fn test_iter() {
        let mut arena = Arena::new();
        let list = list_of(&mut arena, &[1, 2, 3, 4, 5]);
        let list = arena.list(list);

        let mut iter = list.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next().map(|id| arena[id]), Some(1));
        assert_eq!(iter.next_back().map(|id| arena[id]), Some(5));
        assert_eq!(iter.len(), 3);

        let rest: Vec<_> = iter.clone().map(|id| arena[id]).collect();
        assert_eq!(rest, vec![2, 3, 4]);
        let rest: Vec<_> = iter.rev().map(|id| arena[id]).collect();
        assert_eq!(rest, vec![4, 3, 2]);
    }

    #[test]
    fn test_iter_meet_in_the_middle() {
        let mut arena = Arena::new();
        let list = list_of(&mut arena, &[1, 2]);
        let list = arena.list(list);

        let mut iter = list.iter();
        assert!(iter.next().is_some());
        assert!(iter.next_back().is_some());
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_iter_restartable() {
        let mut arena = Arena::new();
        let list = list_of(&mut arena, &[7, 8]);
        let list = arena.list(list);
        let first: Vec<_> = list.values().collect();
        let second: Vec<_> = list.values().collect();
        assert_eq!(first, second);
        assert_eq!(format!("{:?}", list.values()), "[7, 8]");
        assert_eq!(format!("{:?}", list.iter()), "Iter(7, 8)");
    }

    #[test]
    fn test_iter_empty() {
        let mut arena = Arena::new();
        let list = list_of(&mut arena, &[]);
        let list = arena.list(list);
        assert_eq!(list.iter().next(), None);
        assert_eq!(list.values().next_back(), None);
        assert_eq!(list.iter().len(), 0);
    }

    #[test]
    fn test_siblings() {
        let mut arena = Arena::new();
        let list = list_of(&mut arena, &[1, 2, 3, 4]);
        let third = arena.list(list).iter().nth(2).unwrap();
        let item = arena.item(third);

        let after: Vec<_> = item.after().map(|id| arena[id]).collect();
        assert_eq!(after, vec![4]);
        let before: Vec<_> = item.before().map(|id| arena[id]).collect();
        assert_eq!(before, vec![2, 1]);

        let last = arena.list(list).last().unwrap();
        assert_eq!(arena.item(last).after().next(), None);
    }
}
