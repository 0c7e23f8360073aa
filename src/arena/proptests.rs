use std::collections::VecDeque;

use proptest::prelude::*;
use proptest::test_runner::Config;
use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};

use crate::{Arena, Insertable, ItemId, ListId};

proptest_state_machine::prop_state_machine! {
    #![proptest_config(Config {
        failure_persistence: None,
        .. Config::default()
    })]

    #[test]
    fn list_state_machine_test(sequential 1..200 => Harness);
}

/// Operations on a single list. Indices count from the first item.
#[derive(Clone, Debug)]
pub enum Transition {
    Push(u32),
    Unshift(u32),
    Pop,
    Shift,
    Remove(usize),
    InsertAfter(usize, u32),
    /// Split off everything before an item, then push it back.
    RotateLeft(usize),
    /// Split off everything after an item, then unshift it back.
    RotateRight(usize),
}

pub struct ListStateMachine;

impl ReferenceStateMachine for ListStateMachine {
    type State = VecDeque<u32>;
    type Transition = Transition;

    fn init_state() -> BoxedStrategy<Self::State> {
        Just(VecDeque::new()).boxed()
    }

    fn transitions(state: &Self::State) -> BoxedStrategy<Self::Transition> {
        let len = state.len();
        if len == 0 {
            return prop_oneof![
                3 => any::<u32>().prop_map(Transition::Push),
                3 => any::<u32>().prop_map(Transition::Unshift),
                1 => Just(Transition::Pop),
                1 => Just(Transition::Shift),
            ]
            .boxed();
        }
        prop_oneof![
            3 => any::<u32>().prop_map(Transition::Push),
            3 => any::<u32>().prop_map(Transition::Unshift),
            1 => Just(Transition::Pop),
            1 => Just(Transition::Shift),
            1 => (0..len).prop_map(Transition::Remove),
            2 => (0..len, any::<u32>()).prop_map(|(i, v)| Transition::InsertAfter(i, v)),
            1 => (0..len).prop_map(Transition::RotateLeft),
            1 => (0..len).prop_map(Transition::RotateRight),
        ]
        .boxed()
    }

    fn preconditions(state: &Self::State, transition: &Self::Transition) -> bool {
        match *transition {
            Transition::Remove(i)
            | Transition::InsertAfter(i, _)
            | Transition::RotateLeft(i)
            | Transition::RotateRight(i) => i < state.len(),
            _ => true,
        }
    }

    fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
        match *transition {
            Transition::Push(value) => state.push_back(value),
            Transition::Unshift(value) => state.push_front(value),
            Transition::Pop => {
                state.pop_back();
            }
            Transition::Shift => {
                state.pop_front();
            }
            Transition::Remove(i) => {
                state.remove(i);
            }
            Transition::InsertAfter(i, value) => state.insert(i + 1, value),
            Transition::RotateLeft(i) => state.rotate_left(i),
            Transition::RotateRight(i) => {
                let len = state.len();
                state.rotate_right(len - i - 1)
            }
        }
        state
    }
}

pub struct Harness {
    arena: Arena<u32>,
    list: ListId,
}

impl Harness {
    fn nth(&self, i: usize) -> ItemId {
        self.arena
            .list(self.list)
            .iter()
            .nth(i)
            .expect("index checked by preconditions")
    }

    fn discard(&mut self, item: Option<ItemId>) {
        if let Some(item) = item {
            self.arena.remove(item).unwrap();
        }
    }
}

impl StateMachineTest for Harness {
    type SystemUnderTest = Self;
    type Reference = ListStateMachine;

    fn init_test(
        _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) -> Self::SystemUnderTest {
        let mut arena = Arena::new();
        let list = arena.new_list();
        Self { arena, list }
    }

    fn apply(
        mut state: Self::SystemUnderTest,
        _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        transition: Transition,
    ) -> Self::SystemUnderTest {
        let list = state.list;
        match transition {
            Transition::Push(value) => {
                state.arena.list_mut(list).push(Insertable::Value(value)).unwrap();
            }
            Transition::Unshift(value) => {
                state.arena.list_mut(list).unshift(Insertable::Value(value)).unwrap();
            }
            Transition::Pop => {
                let popped = state.arena.list_mut(list).pop().unwrap();
                state.discard(popped);
            }
            Transition::Shift => {
                let shifted = state.arena.list_mut(list).shift().unwrap();
                state.discard(shifted);
            }
            Transition::Remove(i) => {
                let item = state.nth(i);
                state.arena.remove(item).unwrap();
            }
            Transition::InsertAfter(i, value) => {
                let item = state.nth(i);
                state.arena.item_mut(item).append(Insertable::Value(value)).unwrap();
            }
            Transition::RotateLeft(i) => {
                let item = state.nth(i);
                if let Some(head) = state.arena.item_mut(item).delete_before().unwrap() {
                    assert_eq!(state.arena.item(head).chain_length(), i);
                    state.arena.list_mut(list).push(head).unwrap();
                }
            }
            Transition::RotateRight(i) => {
                let item = state.nth(i);
                if let Some(head) = state.arena.item_mut(item).delete_after().unwrap() {
                    let tail = state.arena.item(head).chain_tail();
                    state.arena.list_mut(list).unshift(tail).unwrap();
                }
            }
        }
        state
    }

    fn check_invariants(
        state: &Self::SystemUnderTest,
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) {
        let list = state.arena.list(state.list);
        assert_eq!(list.count(), ref_state.len());
        assert_eq!(list.is_empty(), ref_state.is_empty());
        assert!(list.values().eq(ref_state.iter()));
        assert!(list.values().rev().eq(ref_state.iter().rev()));
        // Detached items are dropped as soon as they leave the list.
        assert_eq!(state.arena.len(), ref_state.len());
        state.arena.assert_all();
    }
}
