use crate::arena::iterator::{Iter, Siblings};
use crate::arena::{Arena, Chain, Insertable, ItemId, ListId, Node};
use crate::Error;
use std::fmt;

/// A read-only view of an item.
///
/// An item is a node of exactly one chain at a time. When the chain belongs
/// to a list the item is *list-owned*; otherwise it is part of a free chain.
/// A freshly inserted item is a free chain of length 1.
///
/// Views compare and hash by payload, not by identity: compare [`ItemId`]s
/// to tell two items apart.
///
/// # Examples
///
/// ```
/// use listable::{Arena, Error};
///
/// let mut arena = Arena::new();
/// let a = arena.insert(1);
/// let b = arena.insert(2);
/// arena.item_mut(a).append(b)?;
///
/// let item = arena.item(a);
/// assert!(item.is_head());
/// assert_eq!(item.prev(), Err(Error::EndOfChain));
/// assert_eq!(item.next(), Ok(b));
/// assert_eq!(item.chain_tail(), b);
/// assert_eq!(item.list(), Err(Error::NotInList));
/// # Ok::<(), listable::Error>(())
/// ```
pub struct ItemRef<'a, T: 'a> {
    pub(crate) arena: &'a Arena<T>,
    pub(crate) key: usize,
}

/// A view of an item with editing operations.
///
/// Editing an item may touch its whole chain: `append` and `prepend` move
/// runs of items between chains, `delete_before` and `delete_after` split
/// chains in two.
pub struct ItemMut<'a, T: 'a> {
    pub(crate) arena: &'a mut Arena<T>,
    pub(crate) key: usize,
}

macro_rules! impl_item_view {
    ($ITEM:ident) => {
        // Private methods
        impl<'a, T: 'a> $ITEM<'a, T> {
            fn node(&self) -> &Node<T> {
                &self.arena.nodes[self.key]
            }
            fn record(&self) -> &Chain {
                &self.arena.chains[self.node().chain]
            }
        }

        impl<'a, T: 'a> $ITEM<'a, T> {
            /// Returns the handle of the item.
            pub fn id(&self) -> ItemId {
                ItemId(self.key)
            }

            /// Provides a reference to the value of the item.
            pub fn value(&self) -> &T {
                &self.node().element
            }

            /// Returns `true` if the item was frozen, directly or by freezing
            /// its list.
            pub fn is_frozen(&self) -> bool {
                self.node().frozen
            }

            /// Returns `true` if nothing comes before the item in its chain.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(1) time.
            pub fn is_head(&self) -> bool {
                self.node().prev.is_none()
            }

            /// Returns `true` if nothing comes after the item in its chain.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(1) time.
            pub fn is_tail(&self) -> bool {
                self.node().next.is_none()
            }

            /// Returns the item after this one, or [`Error::EndOfChain`] at the
            /// tail.
            pub fn next(&self) -> Result<ItemId, Error> {
                self.peek_next().ok_or(Error::EndOfChain)
            }

            /// Returns the item before this one, or [`Error::EndOfChain`] at the
            /// head.
            pub fn prev(&self) -> Result<ItemId, Error> {
                self.peek_prev().ok_or(Error::EndOfChain)
            }

            /// Returns the item after this one, or `None` at the tail.
            pub fn peek_next(&self) -> Option<ItemId> {
                self.node().next.map(ItemId)
            }

            /// Returns the item before this one, or `None` at the head.
            pub fn peek_prev(&self) -> Option<ItemId> {
                self.node().prev.map(ItemId)
            }

            /// Returns the first item of the chain.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(1) time.
            pub fn chain_head(&self) -> ItemId {
                ItemId(self.record().front.expect("a chain holding an item has a front"))
            }

            /// Returns the last item of the chain.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(1) time.
            pub fn chain_tail(&self) -> ItemId {
                ItemId(self.record().back.expect("a chain holding an item has a back"))
            }

            /// Returns the number of items in the chain, the item included.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(1) time.
            pub fn chain_length(&self) -> usize {
                self.record().len
            }

            /// Returns the list owning the item, or [`Error::NotInList`] when
            /// the item is part of a free chain.
            pub fn list(&self) -> Result<ListId, Error> {
                self.record().list.map(ListId).ok_or(Error::NotInList)
            }

            /// Returns `true` if the item belongs to `list`.
            pub fn in_list(&self, list: ListId) -> bool {
                self.record().list == Some(list.0)
            }

            /// Returns `true` if `other` is linked in the same chain.
            pub fn in_chain(&self, other: ItemId) -> bool {
                self.arena.nodes[other.0].chain == self.node().chain
            }

            /// Iterates the items strictly before this one, nearest first.
            pub fn before(&self) -> Siblings<'_, T> {
                Siblings::before(&*self.arena, self.key)
            }

            /// Iterates the items strictly after this one, nearest first.
            pub fn after(&self) -> Siblings<'_, T> {
                Siblings::after(&*self.arena, self.key)
            }

            /// Iterates the whole chain from its head.
            pub fn chain(&self) -> Iter<'_, T> {
                Iter::new(&*self.arena, self.node().chain)
            }

            /// Collects up to `|n|` items of the chain, in chain order.
            ///
            /// A positive `n` takes the item and the `n - 1` items after it; a
            /// negative `n` takes the `|n| - 1` items before it and the item.
            /// The result is cut short at the boundary of the chain.
            ///
            /// # Examples
            ///
            /// ```
            /// use listable::{Arena, Insertable, ItemId};
            ///
            /// let mut arena = Arena::new();
            /// let list = arena.new_list();
            /// let mut view = arena.list_mut(list);
            /// for c in ['a', 'b', 'c', 'd'] {
            ///     view.push(Insertable::Value(c))?;
            /// }
            /// let c = arena.list(list).iter().nth(2).unwrap();
            /// let item = arena.item(c);
            ///
            /// let values = |ids: Vec<ItemId>| ids.into_iter().map(|id| arena[id]).collect::<String>();
            /// assert_eq!(values(item.take(2)), "cd");
            /// assert_eq!(values(item.take(5)), "cd");
            /// assert_eq!(values(item.take(-2)), "bc");
            /// assert_eq!(values(item.take(-9)), "abc");
            /// assert!(item.take(0).is_empty());
            /// # Ok::<(), listable::Error>(())
            /// ```
            pub fn take(&self, n: isize) -> Vec<ItemId> {
                let count = n.unsigned_abs();
                if count == 0 {
                    return Vec::new();
                }
                let mut taken = Vec::with_capacity(count.min(self.chain_length()));
                taken.push(self.id());
                if n > 0 {
                    taken.extend(self.after().take(count - 1));
                } else {
                    taken.extend(self.before().take(count - 1));
                    taken.reverse();
                }
                taken
            }
        }
    };
}

impl_item_view!(ItemRef);
impl_item_view!(ItemMut);

impl<'a, T: 'a> ItemRef<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, key: usize) -> Self {
        Self { arena, key }
    }
}

impl<'a, T: 'a> Clone for ItemRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: 'a> Copy for ItemRef<'a, T> {}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for ItemRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRef")
            .field("id", &self.key)
            .field("value", self.value())
            .finish()
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for ItemMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemMut")
            .field("id", &self.key)
            .field("value", self.value())
            .finish()
    }
}

impl<'a, T: 'a> ItemMut<'a, T> {
    pub(crate) fn new(arena: &'a mut Arena<T>, key: usize) -> Self {
        Self { arena, key }
    }

    fn chain_key(&self) -> usize {
        self.arena.nodes[self.key].chain
    }

    /// Provides a read-only view of the item.
    pub fn as_item_ref(&self) -> ItemRef<'_, T> {
        ItemRef::new(self.arena, self.key)
    }

    /// Turns into a read-only view of the item.
    pub fn into_item_ref(self) -> ItemRef<'a, T> {
        ItemRef::new(self.arena, self.key)
    }

    /// Provides a mutable reference to the value of the item, or
    /// [`Error::Frozen`] if the item is frozen.
    pub fn value_mut(&mut self) -> Result<&mut T, Error> {
        self.arena.ensure_mutable(Some(self.key))?;
        Ok(&mut self.arena.nodes[self.key].element)
    }

    /// Replaces the value of the item, returning the old one.
    pub fn replace(&mut self, value: T) -> Result<T, Error> {
        self.value_mut().map(|slot| std::mem::replace(slot, value))
    }

    /// Freezes the item: its value and its links can no longer change, and
    /// every attempt fails with [`Error::Frozen`]. Freezing cannot be undone.
    pub fn freeze(&mut self) {
        self.arena.nodes[self.key].frozen = true;
    }

    /// Inserts `object` right after this item and returns the last inserted
    /// item.
    ///
    /// A raw value becomes a single new item, passed through the factory of
    /// the owning list if there is one. An existing item is moved *together
    /// with everything after it* in its chain: the run is unlinked from its
    /// old chain (which becomes shorter, or empty) and spliced in here.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if this item is part of the moved run,
    ///   which would link the chain into a cycle.
    /// - [`Error::Frozen`] if an item or list whose links would change is
    ///   frozen.
    ///
    /// Nothing is changed when an error is returned.
    ///
    /// # Complexity
    ///
    /// Moving a run computes in *O*(*k*) time, where *k* is its length.
    /// Inserting a value computes in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use listable::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let ids: Vec<_> = "abcde".chars().map(|c| arena.insert(c)).collect();
    /// // (a b c)
    /// arena.item_mut(ids[0]).append(ids[1])?;
    /// arena.item_mut(ids[1]).append(ids[2])?;
    /// // (d e)
    /// arena.item_mut(ids[3]).append(ids[4])?;
    ///
    /// // b.append(d) gives (a b d e c)
    /// assert_eq!(arena.item_mut(ids[1]).append(ids[3])?, ids[4]);
    /// let chain: String = arena.item(ids[0]).chain().map(|id| arena[id]).collect();
    /// assert_eq!(chain, "abdec");
    /// assert_eq!(arena.item(ids[3]).chain_length(), 5);
    /// # Ok::<(), listable::Error>(())
    /// ```
    pub fn append<I: Into<Insertable<T>>>(&mut self, object: I) -> Result<ItemId, Error> {
        let chain = self.chain_key();
        self.arena.insert_after(chain, Some(self.key), object.into())
    }

    /// Inserts `object` right before this item and returns the first inserted
    /// item.
    ///
    /// The mirror image of [`append`]: an existing item is moved together
    /// with everything *before* it in its chain.
    ///
    /// [`append`]: ItemMut::append
    pub fn prepend<I: Into<Insertable<T>>>(&mut self, object: I) -> Result<ItemId, Error> {
        let chain = self.chain_key();
        self.arena.insert_before(chain, Some(self.key), object.into())
    }

    /// Unlinks the item from its chain and returns it as a detached
    /// singleton. Its neighbours are linked to each other.
    ///
    /// Deleting the only item of a list leaves the list empty. Deleting a
    /// singleton that is already detached changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use listable::{Arena, Insertable};
    ///
    /// let mut arena = Arena::new();
    /// let list = arena.new_list();
    /// let mut view = arena.list_mut(list);
    /// view.push(Insertable::Value('a'))?.push(Insertable::Value('b'))?;
    /// let a = arena.list(list).first().unwrap();
    ///
    /// arena.item_mut(a).delete()?;
    /// assert_eq!(arena.list(list).count(), 1);
    /// assert!(!arena.list(list).include(a));
    /// assert_eq!(arena.item(a).chain_length(), 1);
    /// # Ok::<(), listable::Error>(())
    /// ```
    pub fn delete(&mut self) -> Result<ItemId, Error> {
        self.arena.unlink(self.key)?;
        Ok(self.id())
    }

    /// Splits off every item before this one as a new free chain and returns
    /// its head, or `None` if this item is the head of its chain.
    pub fn delete_before(&mut self) -> Result<Option<ItemId>, Error> {
        Ok(self.arena.split_before(self.key)?.map(ItemId))
    }

    /// Splits off every item after this one as a new free chain and returns
    /// its head, or `None` if this item is the tail of its chain.
    pub fn delete_after(&mut self) -> Result<Option<ItemId>, Error> {
        Ok(self.arena.split_after(self.key)?.map(ItemId))
    }

    /// Copies the value into a new detached singleton. See
    /// [`Arena::duplicate`].
    pub fn duplicate(&mut self) -> ItemId
    where
        T: Clone,
    {
        self.arena.duplicate(self.id())
    }
}
