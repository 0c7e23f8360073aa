//! This crate provides doubly-linked chains of items. An item can float
//! freely in a chain of its own, or belong to a list that is closed by an
//! end-of-list sentinel.
//!
//! Every chain keeps its length, so counting a list, finding the ends of a
//! chain or finding the list of an item all take constant time. Whole runs of
//! items can be spliced from one chain to another, and a list can hold
//! handles to other lists.
//!
//! Here is a quick example showing how chains and lists work.
//!
//! ```
//! use listable::{Arena, Error};
//!
//! let mut arena = Arena::new();
//! let list = arena.new_list();
//! arena.list_mut(list).extend(['A', 'B', 'C'])?;
//!
//! let [a, b, c] = [0, 1, 2].map(|i| arena.list(list).iter().nth(i).unwrap());
//!
//! // Deleting `B` links `A` and `C` together.
//! arena.item_mut(b).delete()?;
//! assert_eq!(arena.item(a).next(), Ok(c));
//! assert_eq!(arena.list(list).count(), 2);
//!
//! // `B` is now a detached singleton: no list, nothing around it.
//! assert_eq!(arena.item(b).list(), Err(Error::NotInList));
//! assert_eq!(arena.item(b).prev(), Err(Error::EndOfChain));
//!
//! // Put it back at the front.
//! arena.list_mut(list).unshift(b)?;
//! let values: String = arena.list(list).values().collect();
//! assert_eq!(values, "BAC");
//! # Ok::<(), Error>(())
//! ```
//!
//! # Memory Layout
//!
//! Items, chains and lists all live in one [`Arena`] and refer to each other
//! by index:
//! ```text
//!                   ┌──────────────────────────────────────────┐
//!                   ↓                                          │
//!    ╔═══════════╗    ╔═══════════╗                ╔═══════════╗
//!    ║ next      ║ ─→ ║ next      ║ ─→ ┄┄┄┄┄┄┄┄ ─→ ║ next: ∅   ║
//!    ║ prev: ∅   ║ ←─ ║ prev      ║ ←─ ┄┄┄┄┄┄┄┄ ←─ ║ prev      ║
//!    ║ chain     ║    ║ chain     ║                ║ chain     ║
//!    ║ payload T ║    ║ payload T ║                ║ payload T ║
//!    ╚═══════════╝    ╚═══════════╝                ╚═══════════╝
//!       Item 0  │        Item 1  │                    Item n-1 │
//!          ↑    └────────────────┴──────────┬─────────────────┘
//!          │                                ↓
//!          │   ┌────────────────────────────────┐     ┌──────────┐
//!          └── │ front, back, len, list (or ∅)  │ ──→ │ Sentinel │
//!              └────────────────────────────────┘     └──────────┘
//!                         Chain record                    List
//! ```
//! - Each item has `prev` and `next` links, where `∅` marks the boundary of
//!   the chain, and the key of its chain record.
//! - The chain record stores the front, the back and the length of the chain
//!   and, when the chain belongs to a list, the list it belongs to.
//! - The sentinel of a list owns its chain record. An empty list keeps its
//!   record with a length of 0, while a free chain is released as soon as its
//!   last item leaves.
//!
//! Moving a run of *k* items to another chain repoints the *k* items to the
//! new record, in the same pass that counts them.
//!
//! # Chains
//!
//! [`Arena::insert`] creates an item as a chain of length 1. Items are linked
//! with [`ItemMut::append`] and [`ItemMut::prepend`], which accept either a
//! value or an existing item. An existing item is moved together with
//! everything after it (for `append`) or before it (for `prepend`):
//!
//! ```
//! use listable::Arena;
//!
//! let mut arena = Arena::new();
//! let [a, b, c, d, e] = ['a', 'b', 'c', 'd', 'e'].map(|c| arena.insert(c));
//! arena.item_mut(a).append(b)?;
//! arena.item_mut(b).append(c)?; // (a b c)
//! arena.item_mut(d).append(e)?; // (d e)
//!
//! arena.item_mut(b).append(d)?; // (a b d e c)
//! let chain: String = arena.item(e).chain().map(|id| arena[id]).collect();
//! assert_eq!(chain, "abdec");
//!
//! // Split the chain before `d`.
//! assert_eq!(arena.item_mut(d).delete_before()?, Some(a));
//! assert_eq!(arena.item(a).chain_length(), 2);
//! assert_eq!(arena.item(d).chain_length(), 3);
//! # Ok::<(), listable::Error>(())
//! ```
//!
//! # Lists
//!
//! A list is edited through [`ListMut`]: [`push`] and [`unshift`] add at both
//! ends, [`pop`] and [`shift`] remove from both ends. Both ends are reached
//! through the [`Eol`] sentinel, whose successor is the first item and whose
//! predecessor is the last one.
//!
//! Lists iterate with [`Iter`] (handles) and [`Values`] (payloads), which are
//! double-ended, exact-size and fused.
//!
//! # Freezing
//!
//! An item or a list can be frozen. Every later attempt to change it fails
//! with [`Error::Frozen`] and leaves the arena untouched.
//!
//! [`push`]: ListMut::push
//! [`unshift`]: ListMut::unshift
//! [`pop`]: ListMut::pop
//! [`shift`]: ListMut::shift

#[doc(inline)]
pub use arena::eol::Eol;
#[doc(inline)]
pub use arena::item::{ItemMut, ItemRef};
#[doc(inline)]
pub use arena::iterator::{Iter, Siblings, Values};
#[doc(inline)]
pub use arena::list::{ListMut, ListRef};
#[doc(inline)]
pub use arena::{Arena, Insertable, ItemId, ListId};
pub use error::Error;

pub mod arena;
mod error;
