use crate::arena::eol::Eol;
use crate::arena::item::ItemMut;
use crate::arena::iterator::{Iter, Values};
use crate::arena::{Arena, Chain, Insertable, ItemId, ListId, Sentinel};
use crate::Error;
use std::fmt;

/// A read-only view of a list.
///
/// A list is a chain anchored by an end-of-list sentinel, so its count is
/// known in *O*(1) time and it can be walked from both ends. Views compare
/// and hash by the sequence of values.
pub struct ListRef<'a, T: 'a> {
    pub(crate) arena: &'a Arena<T>,
    pub(crate) list: usize,
}

/// A view of a list with editing operations.
///
/// # Examples
///
/// ```
/// use listable::{Arena, Insertable};
///
/// let mut arena = Arena::new();
/// let list = arena.new_list();
/// let mut view = arena.list_mut(list);
/// view.push(Insertable::Value(2))?
///     .push(Insertable::Value(3))?
///     .unshift(Insertable::Value(1))?;
/// assert_eq!(view.count(), 3);
///
/// let last = view.pop()?.unwrap();
/// assert_eq!(view.count(), 2);
/// assert_eq!(arena[last], 3);
/// assert!(arena.item(last).is_head() && arena.item(last).is_tail());
/// # Ok::<(), listable::Error>(())
/// ```
pub struct ListMut<'a, T: 'a> {
    pub(crate) arena: &'a mut Arena<T>,
    pub(crate) list: usize,
}

fn count_arg<N: TryInto<usize>>(n: N) -> Result<usize, Error> {
    n.try_into()
        .map_err(|_| Error::InvalidArgument("count must not be negative"))
}

macro_rules! impl_list_view {
    ($LIST:ident) => {
        // Private methods
        impl<'a, T: 'a> $LIST<'a, T> {
            fn sentinel(&self) -> &Sentinel<T> {
                &self.arena.lists[self.list]
            }
            fn chain_key(&self) -> usize {
                self.sentinel().chain
            }
            fn record(&self) -> &Chain {
                &self.arena.chains[self.chain_key()]
            }
        }

        impl<'a, T: 'a> $LIST<'a, T> {
            /// Returns the handle of the list.
            pub fn id(&self) -> ListId {
                ListId(self.list)
            }

            /// Returns the number of items in the list.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(1) time.
            pub fn count(&self) -> usize {
                self.record().len
            }

            /// Returns `true` if the list holds no item.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(1) time.
            pub fn is_empty(&self) -> bool {
                self.record().front.is_none()
            }

            /// Returns `true` if the list was frozen.
            pub fn is_frozen(&self) -> bool {
                self.sentinel().frozen
            }

            /// Returns the first item, or `None` if the list is empty.
            pub fn first(&self) -> Option<ItemId> {
                self.record().front.map(ItemId)
            }

            /// Returns the last item, or `None` if the list is empty.
            pub fn last(&self) -> Option<ItemId> {
                self.record().back.map(ItemId)
            }

            /// Returns the first `n` items, or all of them if there are fewer.
            ///
            /// # Errors
            ///
            /// [`Error::InvalidArgument`] if `n` is negative.
            ///
            /// # Complexity
            ///
            /// This operation visits min(*n*, count) items.
            ///
            /// # Examples
            ///
            /// ```
            /// use listable::{Arena, Error, Insertable};
            ///
            /// let mut arena = Arena::new();
            /// let list = arena.new_list();
            /// let mut view = arena.list_mut(list);
            /// view.push(Insertable::Value('a'))?.push(Insertable::Value('b'))?;
            ///
            /// let list = arena.list(list);
            /// assert_eq!(list.first_n(1)?, vec![list.first().unwrap()]);
            /// assert_eq!(list.first_n(9)?.len(), 2);
            /// assert!(list.first_n(0)?.is_empty());
            /// assert!(matches!(list.first_n(-1), Err(Error::InvalidArgument(_))));
            /// # Ok::<(), listable::Error>(())
            /// ```
            pub fn first_n<N: TryInto<usize>>(&self, n: N) -> Result<Vec<ItemId>, Error> {
                let n = count_arg(n)?;
                Ok(self.iter().take(n).collect())
            }

            /// Returns the last `n` items in list order, or all of them if
            /// there are fewer.
            ///
            /// # Errors
            ///
            /// [`Error::InvalidArgument`] if `n` is negative.
            pub fn last_n<N: TryInto<usize>>(&self, n: N) -> Result<Vec<ItemId>, Error> {
                let n = count_arg(n)?;
                let mut items: Vec<_> = self.iter().rev().take(n).collect();
                items.reverse();
                Ok(items)
            }

            /// Returns `true` if the item `id` belongs to this list.
            ///
            /// This is identity, not value equality: a duplicate of a member
            /// is not included. A removed item is never included.
            pub fn include(&self, id: ItemId) -> bool {
                self.arena
                    .nodes
                    .get(id.0)
                    .map_or(false, |node| node.chain == self.chain_key())
            }

            /// Iterates the items from first to last. Use `.rev()` to walk
            /// from last to first.
            pub fn iter(&self) -> Iter<'_, T> {
                Iter::new(&*self.arena, self.chain_key())
            }

            /// Iterates the values of the items from first to last.
            pub fn values(&self) -> Values<'_, T> {
                Values::new(self.iter())
            }
        }
    };
}

impl_list_view!(ListRef);
impl_list_view!(ListMut);

impl<'a, T: 'a> ListRef<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, list: usize) -> Self {
        Self { arena, list }
    }
}

impl<'a, T: 'a> Clone for ListRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for ListRef<'a, T> {}

impl<'a, T: 'a> IntoIterator for ListRef<'a, T> {
    type Item = ItemId;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.arena, self.chain_key())
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for ListRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for ListMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<'a, T: 'a> ListMut<'a, T> {
    pub(crate) fn new(arena: &'a mut Arena<T>, list: usize) -> Self {
        Self { arena, list }
    }

    fn ensure_mutable(&self) -> Result<(), Error> {
        if self.is_frozen() {
            Err(Error::Frozen)
        } else {
            Ok(())
        }
    }

    /// Provides a read-only view of the list.
    pub fn as_list_ref(&self) -> ListRef<'_, T> {
        ListRef::new(self.arena, self.list)
    }

    /// Turns into a read-only view of the list.
    pub fn into_list_ref(self) -> ListRef<'a, T> {
        ListRef::new(self.arena, self.list)
    }

    /// Provides the end-of-list sentinel.
    pub fn eol(&mut self) -> Eol<'_, T> {
        Eol::new(self.arena, self.list)
    }

    /// Appends `object` at the back of the list. An existing item is moved
    /// together with everything after it in its chain.
    ///
    /// See [`Eol::append`].
    pub fn push<I: Into<Insertable<T>>>(&mut self, object: I) -> Result<&mut Self, Error> {
        self.eol().append(object)?;
        Ok(self)
    }

    /// Prepends `object` at the front of the list. An existing item is moved
    /// together with everything before it in its chain.
    ///
    /// See [`Eol::prepend`].
    pub fn unshift<I: Into<Insertable<T>>>(&mut self, object: I) -> Result<&mut Self, Error> {
        self.eol().prepend(object)?;
        Ok(self)
    }

    /// Appends every value of `values` at the back of the list.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) -> Result<&mut Self, Error> {
        for value in values {
            self.push(Insertable::Value(value))?;
        }
        Ok(self)
    }

    /// Removes the last item and returns it as a detached singleton, or
    /// `None` if the list is empty.
    pub fn pop(&mut self) -> Result<Option<ItemId>, Error> {
        self.ensure_mutable()?;
        match self.last() {
            Some(last) => ItemMut::new(self.arena, last.0).delete().map(Some),
            None => Ok(None),
        }
    }

    /// Removes the first item and returns it as a detached singleton, or
    /// `None` if the list is empty.
    pub fn shift(&mut self) -> Result<Option<ItemId>, Error> {
        self.ensure_mutable()?;
        match self.first() {
            Some(first) => ItemMut::new(self.arena, first.0).delete().map(Some),
            None => Ok(None),
        }
    }

    /// Freezes the list and every item in it. Later attempts to change the
    /// list or its items fail with [`Error::Frozen`].
    ///
    /// # Examples
    ///
    /// ```
    /// use listable::{Arena, Error, Insertable};
    ///
    /// let mut arena = Arena::new();
    /// let list = arena.new_list();
    /// arena.list_mut(list).extend([1, 2])?.freeze();
    ///
    /// let first = arena.list(list).first().unwrap();
    /// assert_eq!(arena.list_mut(list).pop(), Err(Error::Frozen));
    /// assert_eq!(arena.item_mut(first).replace(0), Err(Error::Frozen));
    /// assert_eq!(arena.list_mut(list).push(Insertable::Value(3)).err(), Some(Error::Frozen));
    /// # Ok::<(), listable::Error>(())
    /// ```
    pub fn freeze(&mut self) {
        let chain = self.chain_key();
        self.arena.lists[self.list].frozen = true;
        let mut cursor = self.arena.chains[chain].front;
        while let Some(key) = cursor {
            let node = &mut self.arena.nodes[key];
            node.frozen = true;
            cursor = node.next;
        }
    }

    /// Removes every item of the list from the arena, dropping their values.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.ensure_mutable()?;
        if self.iter().any(|id| self.arena.nodes[id.0].frozen) {
            return Err(Error::Frozen);
        }
        let chain = self.chain_key();
        if let Some(detached) = self.arena.detach_all(chain) {
            self.arena.free_detached(detached);
        }
        Ok(())
    }

    /// Copies the list: a new list with a new sentinel, holding a copy of
    /// every value in the same order. The copy shares the factory of the
    /// list, and it is not frozen.
    ///
    /// # Examples
    ///
    /// ```
    /// use listable::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let list = arena.new_list();
    /// arena.list_mut(list).extend(["x", "y"])?;
    ///
    /// let copy = arena.list_mut(list).duplicate();
    /// assert_eq!(arena.list(copy), arena.list(list));
    /// let first = arena.list(list).first().unwrap();
    /// assert!(!arena.list(copy).include(first));
    /// # Ok::<(), listable::Error>(())
    /// ```
    pub fn duplicate(&mut self) -> ListId
    where
        T: Clone,
    {
        let factory = self.sentinel().factory.clone();
        let copy = self.arena.new_sentinel(factory);
        let copy_chain = self.arena.lists[copy].chain;
        let mut cursor = self.record().front;
        while let Some(key) = cursor {
            let element = self.arena.nodes[key].element.clone();
            let detached = self.arena.new_detached(element);
            let back = self.arena.chains[copy_chain].back;
            self.arena.attach_nodes(copy_chain, back, None, detached);
            cursor = self.arena.nodes[key].next;
        }
        ListId(copy)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Arena, Error, Insertable, ItemId, ListId};
    use std::rc::Rc;

    fn values<T: Clone>(arena: &Arena<T>, list: ListId) -> Vec<T> {
        arena.list(list).values().cloned().collect()
    }

    fn ids_to_values(arena: &Arena<&'static str>, ids: &[ItemId]) -> Vec<&'static str> {
        ids.iter().map(|&id| arena[id]).collect()
    }

    #[test]
    fn list_push_first_last() {
        let mut arena = Arena::new();
        let list = arena.new_list();
        let mut view = arena.list_mut(list);
        assert_eq!(view.first(), None);
        assert_eq!(view.last(), None);
        view.push(Insertable::Value("A")).unwrap();
        view.push(Insertable::Value("B")).unwrap();
        view.push(Insertable::Value("C")).unwrap();
        assert_eq!(view.count(), 3);

        let first = view.first().unwrap();
        let last = view.last().unwrap();
        assert_eq!(arena[first], "A");
        assert_eq!(arena[last], "C");
        arena.assert_all();
    }

    #[test]
    fn list_first_n_last_n() {
        let mut arena = Arena::new();
        let list = arena.new_list();
        arena.list_mut(list).extend(["A", "B", "C"]).unwrap();
        let view = arena.list(list);

        assert_eq!(ids_to_values(&arena, &view.first_n(2).unwrap()), ["A", "B"]);
        assert_eq!(ids_to_values(&arena, &view.last_n(2).unwrap()), ["B", "C"]);
        assert_eq!(ids_to_values(&arena, &view.first_n(10).unwrap()), ["A", "B", "C"]);
        assert_eq!(ids_to_values(&arena, &view.last_n(10u8).unwrap()), ["A", "B", "C"]);
        assert!(view.first_n(0).unwrap().is_empty());
        assert_eq!(
            view.last_n(-1),
            Err(Error::InvalidArgument("count must not be negative"))
        );
        assert!(matches!(view.first_n(-3i64), Err(Error::InvalidArgument(_))));

        let empty = arena.new_list();
        assert!(arena.list(empty).first_n(3).unwrap().is_empty());
        assert!(arena.list(empty).last_n(3).unwrap().is_empty());
    }

    #[test]
    fn list_pop_shift() {
        let mut arena = Arena::new();
        let list = arena.new_list();
        let mut view = arena.list_mut(list);
        view.extend([1, 2, 3]).unwrap();

        let last = view.pop().unwrap().unwrap();
        let first = view.shift().unwrap().unwrap();
        assert_eq!(view.count(), 1);
        assert_eq!((arena[first], arena[last]), (1, 3));
        assert_eq!(arena.item(last).list(), Err(Error::NotInList));
        assert_eq!(arena.item(first).chain_length(), 1);
        assert_eq!(values(&arena, list), vec![2]);

        let mut view = arena.list_mut(list);
        assert!(view.pop().unwrap().is_some());
        assert!(view.is_empty());
        assert_eq!(view.pop(), Ok(None));
        assert_eq!(view.shift(), Ok(None));
        arena.assert_all();
    }

    #[test]
    fn list_delete_only_item_empties_list() {
        let mut arena = Arena::new();
        let list = arena.new_list();
        arena.list_mut(list).push(Insertable::Value(1)).unwrap();
        let only = arena.list(list).first().unwrap();
        arena.item_mut(only).delete().unwrap();
        assert!(arena.list(list).is_empty());
        assert_eq!(arena.list(list).first(), None);
        assert_eq!(arena.list(list).last(), None);
        arena.assert_all();

        // The emptied list is usable again.
        arena.list_mut(list).push(only).unwrap();
        assert_eq!(arena.list(list).first(), Some(only));
        arena.assert_all();
    }

    #[test]
    fn list_push_existing_item_moves_it() {
        let mut arena = Arena::new();
        let left = arena.new_list();
        let right = arena.new_list();
        arena.list_mut(left).extend([1, 2, 3]).unwrap();
        arena.list_mut(right).extend([4]).unwrap();
        let two = arena.list(left).iter().nth(1).unwrap();

        arena.list_mut(right).push(two).unwrap();
        assert_eq!(values(&arena, left), vec![1]);
        assert_eq!(values(&arena, right), vec![4, 2, 3]);
        assert!(arena.list(right).include(two));
        assert!(!arena.list(left).include(two));

        let four = arena.list(right).first().unwrap();
        let three = arena.list(right).last().unwrap();
        arena.list_mut(left).unshift(three).unwrap();
        assert_eq!(values(&arena, left), vec![4, 2, 3, 1]);
        assert!(arena.list(right).is_empty());
        assert!(arena.item(four).in_list(left));
        arena.assert_all();
    }

    #[test]
    fn list_iter_and_reverse() {
        let mut arena = Arena::new();
        let list = arena.new_list();
        arena.list_mut(list).extend('a'..='e').unwrap();
        let view = arena.list(list);
        let forward: String = view.values().collect();
        let backward: String = view.values().rev().collect();
        assert_eq!(forward, "abcde");
        assert_eq!(backward, "edcba");
        assert_eq!(view.into_iter().count(), 5);
        assert_eq!(format!("{:?}", view), "['a', 'b', 'c', 'd', 'e']");
    }

    #[test]
    fn list_duplicate() {
        let mut arena = Arena::new();
        let list = arena.new_list_with(|n: i32| n * 10);
        arena.list_mut(list).extend([1, 2]).unwrap();
        arena.list_mut(list).freeze();

        let copy = arena.list_mut(list).duplicate();
        assert_eq!(values(&arena, copy), vec![10, 20]);
        assert_eq!(arena.list(copy), arena.list(list));
        assert!(!arena.list(copy).is_frozen());
        for id in arena.list(list) {
            assert!(!arena.list(copy).include(id));
        }

        // The factory is shared with the copy.
        arena.list_mut(copy).push(Insertable::Value(3)).unwrap();
        assert_eq!(values(&arena, copy), vec![10, 20, 30]);
        assert_eq!(arena.list(list).count(), 2);
        arena.assert_all();
    }

    #[test]
    fn list_factory_hook() {
        let mut arena = Arena::new();
        let list = arena.new_list_with(|s: String| format!("<{}>", s));
        arena
            .list_mut(list)
            .push(Insertable::Value("a".to_string()))
            .unwrap();
        let first = arena.list(list).first().unwrap();
        arena
            .item_mut(first)
            .append(Insertable::Value("b".to_string()))
            .unwrap();
        assert_eq!(values(&arena, list), vec!["<a>", "<b>"]);

        // Existing items enter the list unchanged.
        let raw = arena.insert("c".to_string());
        arena.list_mut(list).push(raw).unwrap();
        assert_eq!(values(&arena, list), vec!["<a>", "<b>", "c"]);

        // Free chains have no factory.
        let d = arena.item_mut(raw).delete().unwrap();
        let e = arena.item_mut(d).append(Insertable::Value("e".to_string())).unwrap();
        assert_eq!(arena[e], "e");
    }

    #[test]
    fn list_freeze() {
        let mut arena = Arena::new();
        let list = arena.new_list();
        arena.list_mut(list).extend([1, 2, 3]).unwrap();
        let outsider = arena.insert(9);
        arena.list_mut(list).freeze();

        let first = arena.list(list).first().unwrap();
        let last = arena.list(list).last().unwrap();
        assert!(arena.list(list).is_frozen());
        assert!(arena.item(first).is_frozen());
        assert_eq!(arena.list_mut(list).pop(), Err(Error::Frozen));
        assert_eq!(arena.list_mut(list).shift(), Err(Error::Frozen));
        assert_eq!(arena.list_mut(list).clear(), Err(Error::Frozen));
        assert_eq!(arena.list_mut(list).push(outsider).err(), Some(Error::Frozen));
        assert_eq!(arena.item_mut(last).delete_before(), Err(Error::Frozen));
        assert_eq!(arena.item_mut(outsider).append(first), Err(Error::Frozen));
        assert_eq!(arena.remove_list(list), Err(Error::Frozen));
        // Frozen even when there is nothing to change.
        let empty = arena.new_list();
        arena.list_mut(empty).freeze();
        assert_eq!(arena.list_mut(empty).pop(), Err(Error::Frozen));

        assert_eq!(values(&arena, list), vec![1, 2, 3]);
        assert_eq!(arena.item(outsider).chain_length(), 1);
        arena.assert_all();
    }

    #[test]
    fn list_clear() {
        let mut arena = Arena::new();
        let list = arena.new_list();
        arena.list_mut(list).extend([1, 2, 3]).unwrap();
        let kept = arena.insert(4);
        arena.list_mut(list).clear().unwrap();
        assert!(arena.list(list).is_empty());
        assert_eq!(arena.len(), 1);
        assert!(arena.contains(kept));
        arena.assert_all();
    }

    #[test]
    fn list_of_lists() {
        #[derive(Clone, Debug, PartialEq)]
        enum Entry {
            Leaf(i32),
            Sub(ListId),
        }

        let mut arena = Arena::new();
        let inner = arena.new_list();
        arena
            .list_mut(inner)
            .extend([Entry::Leaf(2), Entry::Leaf(3)])
            .unwrap();
        let outer = arena.new_list();
        arena
            .list_mut(outer)
            .extend([Entry::Leaf(1), Entry::Sub(inner), Entry::Leaf(4)])
            .unwrap();

        fn flatten(arena: &Arena<Entry>, list: ListId, out: &mut Vec<i32>) {
            for entry in arena.list(list).values() {
                match entry {
                    Entry::Leaf(n) => out.push(*n),
                    Entry::Sub(sub) => flatten(arena, *sub, out),
                }
            }
        }
        let mut flat = Vec::new();
        flatten(&arena, outer, &mut flat);
        assert_eq!(flat, vec![1, 2, 3, 4]);
        assert_eq!(arena.list(outer).count(), 3);
        assert_eq!(arena.list(inner).count(), 2);
    }

    #[test]
    fn list_shared_payloads() {
        let mut arena = Arena::new();
        let list = arena.new_list();
        let shared = Rc::new(vec![1, 2]);
        arena
            .list_mut(list)
            .push(Insertable::Value(Rc::clone(&shared)))
            .unwrap();
        let copy = arena.list_mut(list).duplicate();
        let first = arena.list(copy).first().unwrap();
        assert!(Rc::ptr_eq(&arena[first], &shared));
        assert_eq!(Rc::strong_count(&shared), 3);
    }
}
