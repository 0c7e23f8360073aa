use std::fmt::{self, Debug, Formatter};
use std::ops::Index;
use std::rc::Rc;

use slab::Slab;

use crate::arena::eol::Eol;
use crate::arena::item::{ItemMut, ItemRef};
use crate::arena::list::{ListMut, ListRef};
use crate::Error;

pub mod eol;
pub mod item;
pub mod iterator;
pub mod list;

mod algorithms;
#[cfg(all(not(miri), test))]
mod proptests;

/// A handle to an item stored in an [`Arena`].
///
/// Handles are plain indices: they are cheap to copy and stay valid while
/// the item moves between chains and lists. Once the item is removed with
/// [`Arena::remove`], the handle must not be used again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) usize);

/// A handle to a list stored in an [`Arena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(pub(crate) usize);

/// Something that can be linked into a chain: an existing item (together with
/// the run it drags along), or a raw value that is wrapped into a new item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Insertable<T> {
    /// An item already stored in the arena.
    Item(ItemId),
    /// A value to be wrapped into a new item.
    Value(T),
}

impl<T> From<ItemId> for Insertable<T> {
    fn from(id: ItemId) -> Self {
        Insertable::Item(id)
    }
}

/// The node factory of a list, applied to every raw value entering it.
pub(crate) type Factory<T> = Rc<dyn Fn(T) -> T>;

/// Chain key of a node that has been created or detached but not attached
/// anywhere yet.
const DETACHED: usize = usize::MAX;

pub(crate) struct Node<T> {
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
    pub(crate) chain: usize,
    pub(crate) frozen: bool,
    pub(crate) element: T,
}

/// The bookkeeping shared by every node of one chain.
///
/// `front` and `back` are both `None` only for the empty chain of a list.
#[derive(Debug)]
pub(crate) struct Chain {
    pub(crate) front: Option<usize>,
    pub(crate) back: Option<usize>,
    pub(crate) len: usize,
    pub(crate) list: Option<usize>,
}

impl Chain {
    fn new(list: Option<usize>) -> Self {
        Self {
            front: None,
            back: None,
            len: 0,
            list,
        }
    }
}

/// The end-of-list sentinel of a list. It anchors the list's chain record,
/// which stays alive (and empty) when every item has left.
pub(crate) struct Sentinel<T> {
    pub(crate) chain: usize,
    pub(crate) frozen: bool,
    pub(crate) factory: Option<Factory<T>>,
}

/// Nodes fragment detached from a chain, used in moving runs between chains.
///
/// When detached, `front.prev` and `back.next` are `None`, and the `chain`
/// key of the nodes is stale until they are attached again.
#[derive(Debug)]
pub(crate) struct DetachedNodes {
    pub(crate) front: usize,
    pub(crate) back: usize,
    pub(crate) len: usize,
}

impl DetachedNodes {
    fn new(front: usize, back: usize, len: usize) -> Self {
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self { front, back, len }
    }
}

/// The storage of every item, chain and list.
///
/// All structure lives here: items are linked through indices, every chain
/// keeps its length in a shared record, and lists are anchored by a
/// sentinel. Items and lists are reached through the views returned by
/// [`Arena::item`], [`Arena::item_mut`], [`Arena::list`] and
/// [`Arena::list_mut`].
///
/// # Examples
///
/// ```
/// use listable::{Arena, Insertable};
///
/// let mut arena = Arena::new();
/// let a = arena.insert('a');
/// let b = arena.insert('b');
///
/// // A free chain, not owned by any list.
/// arena.item_mut(a).append(b)?;
/// assert_eq!(arena.item(a).chain_length(), 2);
///
/// // Moving the chain into a list.
/// let list = arena.new_list();
/// arena.list_mut(list).push(a)?.push(Insertable::Value('c'))?;
/// let values: Vec<_> = arena.list(list).values().copied().collect();
/// assert_eq!(values, vec!['a', 'b', 'c']);
/// # Ok::<(), listable::Error>(())
/// ```
pub struct Arena<T> {
    pub(crate) nodes: Slab<Node<T>>,
    pub(crate) chains: Slab<Chain>,
    pub(crate) lists: Slab<Sentinel<T>>,
}

// private methods
impl<T> Arena<T> {
    pub(crate) fn is_frozen_chain(&self, chain: usize) -> bool {
        self.chains[chain]
            .list
            .map_or(false, |list| self.lists[list].frozen)
    }

    pub(crate) fn ensure_mutable(&self, key: Option<usize>) -> Result<(), Error> {
        match key {
            Some(key) if self.nodes[key].frozen => Err(Error::Frozen),
            _ => Ok(()),
        }
    }

    pub(crate) fn ensure_chain_mutable(&self, chain: usize) -> Result<(), Error> {
        if self.is_frozen_chain(chain) {
            Err(Error::Frozen)
        } else {
            Ok(())
        }
    }

    fn connect(&mut self, prev: Option<usize>, next: Option<usize>) {
        if let Some(prev) = prev {
            self.nodes[prev].next = next;
        }
        if let Some(next) = next {
            self.nodes[next].prev = prev;
        }
    }

    /// Apply the factory of the list owning `chain`, if any.
    fn create_item(&self, chain: usize, value: T) -> T {
        let factory = self.chains[chain]
            .list
            .and_then(|list| self.lists[list].factory.as_ref());
        match factory {
            Some(factory) => (**factory)(value),
            None => value,
        }
    }

    /// Create a single detached node holding `element`.
    fn new_detached(&mut self, element: T) -> DetachedNodes {
        let key = self.nodes.insert(Node {
            prev: None,
            next: None,
            chain: DETACHED,
            frozen: false,
            element,
        });
        DetachedNodes::new(key, key, 1)
    }

    pub(crate) fn new_sentinel(&mut self, factory: Option<Factory<T>>) -> usize {
        let chain = self.chains.insert(Chain::new(None));
        let list = self.lists.insert(Sentinel {
            chain,
            frozen: false,
            factory,
        });
        self.chains[chain].list = Some(list);
        list
    }

    /// Detach a range of nodes `front..=back` from its chain, and return the
    /// detached nodes.
    ///
    /// `front..=back` must be a valid range of one chain and `len` must be its
    /// length. A free chain left empty is released; the chain of a list is
    /// kept, empty.
    pub(crate) fn detach_nodes(&mut self, front: usize, back: usize, len: usize) -> DetachedNodes {
        let chain = self.nodes[front].chain;
        let prev = self.nodes[front].prev;
        let next = self.nodes[back].next;
        self.connect(prev, next);
        self.nodes[front].prev = None;
        self.nodes[back].next = None;

        let record = &mut self.chains[chain];
        debug_assert!(record.len >= len, "Cannot detach more nodes than the chain holds");
        record.len -= len;
        if prev.is_none() {
            record.front = next;
        }
        if next.is_none() {
            record.back = prev;
        }
        debug_assert_eq!(record.len == 0, record.front.is_none());
        if record.len == 0 && record.list.is_none() {
            self.chains.remove(chain);
        } else {
            #[cfg(feature = "debug-invariants")]
            self.assert_chain(chain);
        }
        DetachedNodes::new(front, back, len)
    }

    /// Attach detached nodes to `chain`, between `prev` and `next`.
    ///
    /// `prev` and `next` must be adjacent in `chain`, where `None` stands for
    /// the boundary of the chain. This is the counting pass of a splice:
    /// every attached node is repointed to its new chain.
    pub(crate) fn attach_nodes(
        &mut self,
        chain: usize,
        prev: Option<usize>,
        next: Option<usize>,
        detached: DetachedNodes,
    ) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(chain, prev, next);
        self.connect(prev, Some(detached.front));
        self.connect(Some(detached.back), next);

        let mut cursor = Some(detached.front);
        let mut visited = 0;
        while let Some(key) = cursor {
            self.nodes[key].chain = chain;
            visited += 1;
            if key == detached.back {
                break;
            }
            cursor = self.nodes[key].next;
        }
        debug_assert_eq!(visited, detached.len, "Detached nodes have a wrong length");

        let record = &mut self.chains[chain];
        record.len += detached.len;
        if prev.is_none() {
            record.front = Some(detached.front);
        }
        if next.is_none() {
            record.back = Some(detached.back);
        }
        #[cfg(feature = "debug-invariants")]
        self.assert_chain(chain);
    }

    /// Attach detached nodes as a new free chain, and return its key.
    pub(crate) fn attach_detached(&mut self, detached: DetachedNodes) -> usize {
        let chain = self.chains.insert(Chain::new(None));
        self.attach_nodes(chain, None, None, detached);
        chain
    }

    /// Detach every node of `chain`, or return `None` if it is empty.
    pub(crate) fn detach_all(&mut self, chain: usize) -> Option<DetachedNodes> {
        let record = &self.chains[chain];
        match (record.front, record.back) {
            (Some(front), Some(back)) => {
                let len = record.len;
                Some(self.detach_nodes(front, back, len))
            }
            _ => None,
        }
    }

    /// Drop detached nodes together with their elements.
    pub(crate) fn free_detached(&mut self, detached: DetachedNodes) {
        let mut cursor = Some(detached.front);
        while let Some(key) = cursor {
            let node = self.nodes.remove(key);
            cursor = if key == detached.back { None } else { node.next };
        }
    }

    /// Walk from `front` to the back of its chain, returning the back and the
    /// number of nodes visited. Fails if `anchor` is part of the walk.
    fn run_after(&self, front: usize, anchor: Option<usize>) -> Result<(usize, usize), Error> {
        let mut back = front;
        let mut len = 0;
        let mut cursor = Some(front);
        while let Some(key) = cursor {
            if Some(key) == anchor {
                return Err(Error::InvalidArgument("cannot move a run next to itself"));
            }
            back = key;
            len += 1;
            cursor = self.nodes[key].next;
        }
        Ok((back, len))
    }

    /// Walk from `back` to the front of its chain, returning the front and
    /// the number of nodes visited. Fails if `anchor` is part of the walk.
    fn run_before(&self, back: usize, anchor: Option<usize>) -> Result<(usize, usize), Error> {
        let mut front = back;
        let mut len = 0;
        let mut cursor = Some(back);
        while let Some(key) = cursor {
            if Some(key) == anchor {
                return Err(Error::InvalidArgument("cannot move a run next to itself"));
            }
            front = key;
            len += 1;
            cursor = self.nodes[key].prev;
        }
        Ok((front, len))
    }

    /// Detach `object` and everything after it, to be placed after `anchor`.
    fn take_run_after(&mut self, object: usize, anchor: Option<usize>) -> Result<DetachedNodes, Error> {
        let (back, len) = self.run_after(object, anchor)?;
        self.ensure_mutable(Some(object))?;
        self.ensure_mutable(Some(back))?;
        self.ensure_mutable(self.nodes[object].prev)?;
        self.ensure_chain_mutable(self.nodes[object].chain)?;
        Ok(self.detach_nodes(object, back, len))
    }

    /// Detach `object` and everything before it, to be placed before `anchor`.
    fn take_run_before(&mut self, object: usize, anchor: Option<usize>) -> Result<DetachedNodes, Error> {
        let (front, len) = self.run_before(object, anchor)?;
        self.ensure_mutable(Some(object))?;
        self.ensure_mutable(Some(front))?;
        self.ensure_mutable(self.nodes[object].next)?;
        self.ensure_chain_mutable(self.nodes[object].chain)?;
        Ok(self.detach_nodes(front, object, len))
    }

    /// Insert `object` into `chain` right after `anchor`, or at the front of
    /// the chain if `anchor` is `None`. Returns the last inserted node.
    ///
    /// Every check happens before the first link is touched.
    pub(crate) fn insert_after(
        &mut self,
        chain: usize,
        anchor: Option<usize>,
        object: Insertable<T>,
    ) -> Result<ItemId, Error> {
        self.ensure_chain_mutable(chain)?;
        self.ensure_mutable(anchor)?;
        self.ensure_mutable(self.successor(chain, anchor))?;
        let detached = match object {
            Insertable::Value(value) => {
                let element = self.create_item(chain, value);
                self.new_detached(element)
            }
            Insertable::Item(ItemId(object)) => self.take_run_after(object, anchor)?,
        };
        // Detaching a run of the same chain may have moved the successor.
        let next = self.successor(chain, anchor);
        let back = detached.back;
        self.attach_nodes(chain, anchor, next, detached);
        Ok(ItemId(back))
    }

    /// Insert `object` into `chain` right before `anchor`, or at the back of
    /// the chain if `anchor` is `None`. Returns the first inserted node.
    pub(crate) fn insert_before(
        &mut self,
        chain: usize,
        anchor: Option<usize>,
        object: Insertable<T>,
    ) -> Result<ItemId, Error> {
        self.ensure_chain_mutable(chain)?;
        self.ensure_mutable(anchor)?;
        self.ensure_mutable(self.predecessor(chain, anchor))?;
        let detached = match object {
            Insertable::Value(value) => {
                let element = self.create_item(chain, value);
                self.new_detached(element)
            }
            Insertable::Item(ItemId(object)) => self.take_run_before(object, anchor)?,
        };
        let prev = self.predecessor(chain, anchor);
        let front = detached.front;
        self.attach_nodes(chain, prev, anchor, detached);
        Ok(ItemId(front))
    }

    fn successor(&self, chain: usize, anchor: Option<usize>) -> Option<usize> {
        match anchor {
            Some(anchor) => self.nodes[anchor].next,
            None => self.chains[chain].front,
        }
    }

    fn predecessor(&self, chain: usize, anchor: Option<usize>) -> Option<usize> {
        match anchor {
            Some(anchor) => self.nodes[anchor].prev,
            None => self.chains[chain].back,
        }
    }

    /// Unlink a single node and turn it into a fresh singleton chain.
    pub(crate) fn unlink(&mut self, key: usize) -> Result<(), Error> {
        let node = &self.nodes[key];
        let (prev, next, chain) = (node.prev, node.next, node.chain);
        self.ensure_mutable(Some(key))?;
        self.ensure_mutable(prev)?;
        self.ensure_mutable(next)?;
        self.ensure_chain_mutable(chain)?;
        if prev.is_none() && next.is_none() && self.chains[chain].list.is_none() {
            // Already a detached singleton.
            return Ok(());
        }
        let detached = self.detach_nodes(key, key, 1);
        self.attach_detached(detached);
        Ok(())
    }

    /// Split off everything before `key` as a new free chain, returning its
    /// front, or `None` if `key` is the head of its chain.
    pub(crate) fn split_before(&mut self, key: usize) -> Result<Option<usize>, Error> {
        let node = &self.nodes[key];
        let (prev, chain) = (node.prev, node.chain);
        self.ensure_mutable(Some(key))?;
        self.ensure_mutable(prev)?;
        self.ensure_chain_mutable(chain)?;
        let back = match prev {
            Some(back) => back,
            None => return Ok(None),
        };
        let (front, len) = self.run_before(back, None)?;
        let detached = self.detach_nodes(front, back, len);
        self.attach_detached(detached);
        Ok(Some(front))
    }

    /// Split off everything after `key` as a new free chain, returning its
    /// front, or `None` if `key` is the tail of its chain.
    pub(crate) fn split_after(&mut self, key: usize) -> Result<Option<usize>, Error> {
        let node = &self.nodes[key];
        let (next, chain) = (node.next, node.chain);
        self.ensure_mutable(Some(key))?;
        self.ensure_mutable(next)?;
        self.ensure_chain_mutable(chain)?;
        let front = match next {
            Some(front) => front,
            None => return Ok(None),
        };
        let (back, len) = self.run_after(front, None)?;
        let detached = self.detach_nodes(front, back, len);
        self.attach_detached(detached);
        Ok(Some(front))
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, chain: usize, prev: Option<usize>, next: Option<usize>) {
        match prev {
            Some(prev) => {
                assert_eq!(self.nodes[prev].next, next);
                assert_eq!(self.nodes[prev].chain, chain);
            }
            None => assert_eq!(self.chains[chain].front, next),
        }
        match next {
            Some(next) => {
                assert_eq!(self.nodes[next].prev, prev);
                assert_eq!(self.nodes[next].chain, chain);
            }
            None => assert_eq!(self.chains[chain].back, prev),
        }
    }

    /// Walk a whole chain and check its links, its membership and its length.
    #[cfg(any(test, feature = "debug-invariants"))]
    pub(crate) fn assert_chain(&self, chain: usize) {
        let record = &self.chains[chain];
        let mut prev = None;
        let mut cursor = record.front;
        let mut len = 0;
        while let Some(key) = cursor {
            let node = &self.nodes[key];
            assert_eq!(node.prev, prev, "broken `prev` link at {}", key);
            assert_eq!(node.chain, chain, "item {} points at a foreign chain", key);
            len += 1;
            prev = Some(key);
            cursor = node.next;
        }
        assert_eq!(record.back, prev, "chain back is not the last item");
        assert_eq!(record.len, len, "chain length is stale");
        if let Some(list) = record.list {
            assert_eq!(self.lists[list].chain, chain, "list anchors another chain");
        } else {
            assert!(len > 0, "empty free chain was not released");
        }
    }

    /// Check every chain, and that every item is reachable from its chain.
    #[cfg(test)]
    pub(crate) fn assert_all(&self) {
        let mut reachable = 0;
        for (chain, record) in self.chains.iter() {
            self.assert_chain(chain);
            reachable += record.len;
        }
        assert_eq!(reachable, self.nodes.len(), "some items belong to no chain");
    }
}

impl<T> Arena<T> {
    /// Create an empty `Arena`.
    ///
    /// # Examples
    /// ```
    /// use listable::Arena;
    /// let arena: Arena<u32> = Arena::new();
    /// assert!(arena.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            chains: Slab::new(),
            lists: Slab::new(),
        }
    }

    /// Create an empty `Arena` with room for `items` items and `lists`
    /// lists before reallocating.
    pub fn with_capacity(items: usize, lists: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(items),
            chains: Slab::with_capacity(items + lists),
            lists: Slab::with_capacity(lists),
        }
    }

    /// Returns the number of items in the arena, whether they are in a list or
    /// in a free chain.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena holds no item.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `id` refers to a live item.
    pub fn contains(&self, id: ItemId) -> bool {
        self.nodes.contains(id.0)
    }

    /// Returns the value of an item, or `None` if `id` is not a live item.
    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.nodes.get(id.0).map(|node| &node.element)
    }

    /// Store `value` as a detached singleton item: the head and the tail of
    /// its own chain of length 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use listable::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let item = arena.insert(7);
    /// assert!(arena.item(item).is_head());
    /// assert!(arena.item(item).is_tail());
    /// assert_eq!(arena.item(item).chain_length(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> ItemId {
        let detached = self.new_detached(value);
        let key = detached.front;
        self.attach_detached(detached);
        ItemId(key)
    }

    /// Copy the value of an item into a new detached singleton.
    ///
    /// The copy never shares chain or list membership with the original, and
    /// it is not frozen. Payload types that cannot be deep-copied are usually
    /// stored behind an `Rc`, whose clone shares the original value.
    pub fn duplicate(&mut self, id: ItemId) -> ItemId
    where
        T: Clone,
    {
        let value = self.nodes[id.0].element.clone();
        self.insert(value)
    }

    /// Unlink an item from its chain (see [`ItemMut::delete`]) and drop it
    /// from the arena, returning its value.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a live item.
    ///
    /// # Examples
    ///
    /// ```
    /// use listable::{Arena, Insertable};
    ///
    /// let mut arena = Arena::new();
    /// let list = arena.new_list();
    /// let item = arena.list_mut(list).eol().append(Insertable::Value("x"))?;
    ///
    /// assert_eq!(arena.remove(item)?, "x");
    /// assert!(!arena.contains(item));
    /// assert!(arena.list(list).is_empty());
    /// # Ok::<(), listable::Error>(())
    /// ```
    pub fn remove(&mut self, id: ItemId) -> Result<T, Error> {
        self.unlink(id.0)?;
        let node = self.nodes.remove(id.0);
        self.chains.remove(node.chain);
        Ok(node.element)
    }

    /// Create an empty list.
    pub fn new_list(&mut self) -> ListId {
        ListId(self.new_sentinel(None))
    }

    /// Create an empty list whose raw values go through `factory` before
    /// they are stored. This is the hook to customize how values are wrapped
    /// into items.
    ///
    /// # Examples
    ///
    /// ```
    /// use listable::{Arena, Insertable};
    ///
    /// let mut arena = Arena::new();
    /// let list = arena.new_list_with(|value: String| value.to_uppercase());
    /// arena.list_mut(list).push(Insertable::Value("abc".to_string()))?;
    ///
    /// let first = arena.list(list).first().unwrap();
    /// assert_eq!(arena.get(first).map(String::as_str), Some("ABC"));
    /// # Ok::<(), listable::Error>(())
    /// ```
    pub fn new_list_with<F>(&mut self, factory: F) -> ListId
    where
        F: Fn(T) -> T + 'static,
    {
        ListId(self.new_sentinel(Some(Rc::new(factory))))
    }

    /// Drop a list and its sentinel. The items still in the list are not
    /// dropped: they stay linked as one free chain, whose head is returned.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a live list.
    pub fn remove_list(&mut self, id: ListId) -> Result<Option<ItemId>, Error> {
        let sentinel = &self.lists[id.0];
        if sentinel.frozen {
            return Err(Error::Frozen);
        }
        let chain = sentinel.chain;
        let head = self.detach_all(chain).map(|detached| {
            let front = detached.front;
            self.attach_detached(detached);
            ItemId(front)
        });
        self.chains.remove(chain);
        self.lists.remove(id.0);
        Ok(head)
    }

    /// Provides a read-only view of an item.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a live item.
    pub fn item(&self, id: ItemId) -> ItemRef<'_, T> {
        assert!(self.nodes.contains(id.0), "Cannot view a nonexistent item");
        ItemRef::new(self, id.0)
    }

    /// Provides a view of an item with editing operations.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a live item.
    pub fn item_mut(&mut self, id: ItemId) -> ItemMut<'_, T> {
        assert!(self.nodes.contains(id.0), "Cannot view a nonexistent item");
        ItemMut::new(self, id.0)
    }

    /// Provides a read-only view of a list.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a live list.
    pub fn list(&self, id: ListId) -> ListRef<'_, T> {
        assert!(self.lists.contains(id.0), "Cannot view a nonexistent list");
        ListRef::new(self, id.0)
    }

    /// Provides a view of a list with editing operations.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a live list.
    pub fn list_mut(&mut self, id: ListId) -> ListMut<'_, T> {
        assert!(self.lists.contains(id.0), "Cannot view a nonexistent list");
        ListMut::new(self, id.0)
    }

    /// Provides the end-of-list sentinel of a list. Shorthand for
    /// `arena.list_mut(id).eol()`.
    pub fn eol(&mut self, id: ListId) -> Eol<'_, T> {
        assert!(self.lists.contains(id.0), "Cannot view a nonexistent list");
        Eol::new(self, id.0)
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the value of an item.
///
/// # Panics
///
/// Panics if `id` is not a live item.
impl<T> Index<ItemId> for Arena<T> {
    type Output = T;

    fn index(&self, id: ItemId) -> &T {
        &self.nodes[id.0].element
    }
}

impl<T> Debug for Arena<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("items", &self.nodes.len())
            .field("chains", &self.chains.len())
            .field("lists", &self.lists.len())
            .finish()
    }
}
