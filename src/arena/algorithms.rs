use crate::arena::item::ItemRef;
use crate::arena::list::ListRef;
use crate::arena::ItemId;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<'a, T: PartialEq + 'a> PartialEq for ItemRef<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<'a, T: Eq + 'a> Eq for ItemRef<'a, T> {}

impl<'a, T: Hash + 'a> Hash for ItemRef<'a, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl<'a, T: PartialEq + 'a> PartialEq for ListRef<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.count() == other.count() && self.values().eq(other.values())
    }
}

impl<'a, T: Eq + 'a> Eq for ListRef<'a, T> {}

impl<'a, T: PartialOrd + 'a> PartialOrd for ListRef<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.values().partial_cmp(other.values())
    }
}

impl<'a, T: Ord + 'a> Ord for ListRef<'a, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.values().cmp(other.values())
    }
}

impl<'a, T: Hash + 'a> Hash for ListRef<'a, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elt in self.values() {
            elt.hash(state);
        }
        self.count().hash(state);
    }
}

impl<'a, T: 'a> ListRef<'a, T> {
    /// Returns `true` if the list holds an item whose value equals `x`.
    ///
    /// Unlike [`include`](ListRef::include), this compares values.
    ///
    /// # Examples
    ///
    /// ```
    /// use listable::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let list = arena.new_list();
    /// arena.list_mut(list).extend([0, 1, 2])?;
    ///
    /// assert!(arena.list(list).contains(&1));
    /// assert!(!arena.list(list).contains(&10));
    /// # Ok::<(), listable::Error>(())
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.values().any(|e| e == x)
    }

    /// Returns the first item whose value satisfies `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<ItemId>
    where
        P: FnMut(&T) -> bool,
    {
        let arena = self.arena;
        self.iter().find(|id| predicate(&arena[*id]))
    }
}

#[cfg(test)]
mod tests {
    use crate::Arena;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<H: Hash>(value: H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_eq_and_hash() {
        let mut arena = Arena::new();
        let [a, b, c] = [arena.new_list(), arena.new_list(), arena.new_list()];
        arena.list_mut(a).extend([1, 2, 3]).unwrap();
        arena.list_mut(b).extend([1, 2, 3]).unwrap();
        arena.list_mut(c).extend([1, 2]).unwrap();

        assert_eq!(arena.list(a), arena.list(b));
        assert_ne!(arena.list(a), arena.list(c));
        assert_eq!(hash_of(arena.list(a)), hash_of(arena.list(b)));
        assert!(arena.list(c) < arena.list(a));
    }

    #[test]
    fn list_contains_and_find() {
        let mut arena = Arena::new();
        let list = arena.new_list();
        arena.list_mut(list).extend([4, 5, 6]).unwrap();
        let view = arena.list(list);
        assert!(view.contains(&5));
        assert!(!view.contains(&7));

        let found = view.find(|&n| n > 4).unwrap();
        assert_eq!(arena[found], 5);
        assert_eq!(view.find(|&n| n > 9), None);
    }

    #[test]
    fn item_hash_by_value() {
        let mut arena = Arena::new();
        let x = arena.insert("same");
        let y = arena.insert("same");
        assert_eq!(hash_of(arena.item(x)), hash_of(arena.item(y)));
    }
}
