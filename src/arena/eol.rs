use crate::arena::item::ItemMut;
use crate::arena::{Arena, Insertable, ItemId, ListId};
use crate::Error;

/// The end-of-list sentinel of a list.
///
/// The sentinel closes the list into a ring: its successor is the first
/// item and its predecessor is the last one. On an empty list it points at
/// itself. It holds no value, so it reports itself as absent, and it can
/// never be deleted.
///
/// Pushing onto a list appends after the last item, or right after the
/// sentinel when there is none.
///
/// ```text
///    ┌─────────────────────────────────────┐
///    └─→ [#] ⇄ [A] ⇄ [B] ⇄ [C] ──(next)────┘
///         ↑ Eol
/// ```
///
/// # Examples
///
/// ```
/// use listable::{Arena, Insertable};
///
/// let mut arena = Arena::new();
/// let list = arena.new_list();
///
/// let mut eol = arena.eol(list);
/// assert!(eol.is_absent());
/// assert_eq!(eol.peek_next(), None);
///
/// let b = eol.append(Insertable::Value('b'))?;
/// let a = eol.prepend(Insertable::Value('a'))?;
/// let c = eol.append(Insertable::Value('c'))?;
/// assert_eq!(eol.peek_next(), Some(a));
/// assert_eq!(eol.peek_prev(), Some(c));
/// assert_eq!(arena.item(a).next(), Ok(b));
/// # Ok::<(), listable::Error>(())
/// ```
pub struct Eol<'a, T: 'a> {
    arena: &'a mut Arena<T>,
    list: usize,
}

impl<'a, T: 'a> Eol<'a, T> {
    pub(crate) fn new(arena: &'a mut Arena<T>, list: usize) -> Self {
        Self { arena, list }
    }

    fn chain_key(&self) -> usize {
        self.arena.lists[self.list].chain
    }

    /// Always `true`: the sentinel stands for "no item".
    pub fn is_absent(&self) -> bool {
        true
    }

    /// Returns the list closed by this sentinel.
    pub fn list(&self) -> ListId {
        ListId(self.list)
    }

    /// Returns the first item of the list, or `None` if it is empty.
    pub fn peek_next(&self) -> Option<ItemId> {
        self.arena.chains[self.chain_key()].front.map(ItemId)
    }

    /// Returns the last item of the list, or `None` if it is empty.
    pub fn peek_prev(&self) -> Option<ItemId> {
        self.arena.chains[self.chain_key()].back.map(ItemId)
    }

    /// Inserts `object` at the back of the list and returns the last
    /// inserted item.
    ///
    /// On an empty list, the inserted run becomes both the first and the
    /// last of the list. Otherwise this is [`ItemMut::append`] on the last
    /// item.
    pub fn append<I: Into<Insertable<T>>>(&mut self, object: I) -> Result<ItemId, Error> {
        let chain = self.chain_key();
        match self.arena.chains[chain].back {
            Some(back) => ItemMut::new(self.arena, back).append(object),
            None => self.arena.insert_after(chain, None, object.into()),
        }
    }

    /// Inserts `object` at the front of the list and returns the first
    /// inserted item.
    ///
    /// On an empty list, the inserted run becomes both the first and the
    /// last of the list. Otherwise this is [`ItemMut::prepend`] on the first
    /// item.
    pub fn prepend<I: Into<Insertable<T>>>(&mut self, object: I) -> Result<ItemId, Error> {
        let chain = self.chain_key();
        match self.arena.chains[chain].front {
            Some(front) => ItemMut::new(self.arena, front).prepend(object),
            None => self.arena.insert_before(chain, None, object.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Arena, Error, Insertable};

    #[test]
    fn eol_on_empty_list() {
        let mut arena = Arena::new();
        let list = arena.new_list();
        let x = arena.insert(1);
        let y = arena.insert(2);
        arena.item_mut(x).append(y).unwrap();

        // The whole run `x y` becomes the list.
        assert_eq!(arena.eol(list).append(x), Ok(y));
        assert_eq!(arena.list(list).first(), Some(x));
        assert_eq!(arena.list(list).last(), Some(y));
        assert_eq!(arena.list(list).count(), 2);
        arena.assert_all();
    }

    #[test]
    fn eol_prepend_run_on_empty_list() {
        let mut arena = Arena::new();
        let list = arena.new_list();
        let x = arena.insert(1);
        let y = arena.insert(2);
        arena.item_mut(x).append(y).unwrap();

        // Prepending drags everything before `y`.
        assert_eq!(arena.eol(list).prepend(y), Ok(x));
        let values: Vec<_> = arena.list(list).values().copied().collect();
        assert_eq!(values, vec![1, 2]);
        arena.assert_all();
    }

    #[test]
    fn eol_absent_and_list() {
        let mut arena: Arena<u8> = Arena::new();
        let list = arena.new_list();
        let eol = arena.eol(list);
        assert!(eol.is_absent());
        assert_eq!(eol.list(), list);
        assert_eq!(eol.peek_prev(), None);
    }

    #[test]
    fn eol_frozen_list() {
        let mut arena = Arena::new();
        let list = arena.new_list();
        arena.list_mut(list).freeze();
        assert_eq!(
            arena.eol(list).append(Insertable::Value(0)),
            Err(Error::Frozen)
        );
        assert_eq!(
            arena.eol(list).prepend(Insertable::Value(0)),
            Err(Error::Frozen)
        );
        assert!(arena.list(list).is_empty());
    }
}
