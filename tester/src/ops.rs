use core::mem;

use linked_lists::{ListError, SinglyLinkedList};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    PushFront(i32),
    PushBack(i32),
    Insert(usize, i32),
    PopFront,
    PopBack,
    RemoveAt(usize),
    RemoveValue(i32),
    Set(usize, i32),
    Get(usize),
    Find(i32),
    Reverse,
    Sort,
    Dedup,
    Clear,
}

/// What an operation reported, in a shape both implementations can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unit,
    Inserted(Result<(), ListError>),
    Removed(Result<i32, ListError>),
    DidRemove(bool),
    Replaced(Result<i32, ListError>),
    Peeked(Result<i32, ListError>),
    Found(Option<usize>),
}

impl Operation {
    pub fn apply_list(self, list: &mut SinglyLinkedList<i32>) -> Outcome {
        match self {
            Operation::PushFront(value) => {
                list.push_front(value);
                Outcome::Unit
            }
            Operation::PushBack(value) => {
                list.push_back(value);
                Outcome::Unit
            }
            Operation::Insert(index, value) => Outcome::Inserted(list.insert(index, value)),
            Operation::PopFront => Outcome::Removed(list.pop_front()),
            Operation::PopBack => Outcome::Removed(list.pop_back()),
            Operation::RemoveAt(index) => Outcome::Removed(list.remove_at(index)),
            Operation::RemoveValue(value) => Outcome::DidRemove(list.remove_value(&value)),
            Operation::Set(index, value) => Outcome::Replaced(list.set(index, value)),
            Operation::Get(index) => Outcome::Peeked(list.get(index).copied()),
            Operation::Find(value) => Outcome::Found(list.find(&value)),
            Operation::Reverse => {
                list.reverse();
                Outcome::Unit
            }
            Operation::Sort => {
                list.sort();
                Outcome::Unit
            }
            Operation::Dedup => {
                list.dedup();
                Outcome::Unit
            }
            Operation::Clear => {
                list.clear();
                Outcome::Unit
            }
        }
    }

    /// The same contract replayed against `Vec`, the reference
    /// implementation. `Vec::sort` is stable and `Vec::dedup` collapses
    /// consecutive runs, so both line up with the list's semantics.
    pub fn apply_model(self, model: &mut Vec<i32>) -> Outcome {
        let len = model.len();
        match self {
            Operation::PushFront(value) => {
                model.insert(0, value);
                Outcome::Unit
            }
            Operation::PushBack(value) => {
                model.push(value);
                Outcome::Unit
            }
            Operation::Insert(index, value) => Outcome::Inserted(if index <= len {
                model.insert(index, value);
                Ok(())
            } else {
                Err(ListError::OutOfBounds { index, len })
            }),
            Operation::PopFront => Outcome::Removed(if model.is_empty() {
                Err(ListError::Empty)
            } else {
                Ok(model.remove(0))
            }),
            Operation::PopBack => Outcome::Removed(model.pop().ok_or(ListError::Empty)),
            Operation::RemoveAt(index) => Outcome::Removed(if index < len {
                Ok(model.remove(index))
            } else {
                Err(ListError::OutOfBounds { index, len })
            }),
            Operation::RemoveValue(value) => {
                Outcome::DidRemove(match model.iter().position(|item| *item == value) {
                    Some(position) => {
                        model.remove(position);
                        true
                    }
                    None => false,
                })
            }
            Operation::Set(index, value) => Outcome::Replaced(match model.get_mut(index) {
                Some(slot) => Ok(mem::replace(slot, value)),
                None => Err(ListError::OutOfBounds { index, len }),
            }),
            Operation::Get(index) => Outcome::Peeked(
                model
                    .get(index)
                    .copied()
                    .ok_or(ListError::OutOfBounds { index, len }),
            ),
            Operation::Find(value) => Outcome::Found(model.iter().position(|item| *item == value)),
            Operation::Reverse => {
                model.reverse();
                Outcome::Unit
            }
            Operation::Sort => {
                model.sort();
                Outcome::Unit
            }
            Operation::Dedup => {
                model.dedup();
                Outcome::Unit
            }
            Operation::Clear => {
                model.clear();
                Outcome::Unit
            }
        }
    }
}

impl Distribution<Operation> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Operation {
        // small value domain so removals, finds, and dedup runs collide;
        // indices run past the typical length to hit the error paths
        let value = rng.gen_range(-8..8);
        let index = rng.gen_range(0..24);
        match rng.gen_range(0..19u8) {
            0 | 1 | 2 => Operation::PushFront(value),
            3 | 4 | 5 => Operation::PushBack(value),
            6 | 7 => Operation::Insert(index, value),
            8 => Operation::PopFront,
            9 => Operation::PopBack,
            10 => Operation::RemoveAt(index),
            11 => Operation::RemoveValue(value),
            12 => Operation::Set(index, value),
            13 => Operation::Get(index),
            14 => Operation::Find(value),
            15 => Operation::Reverse,
            16 => Operation::Sort,
            17 => Operation::Dedup,
            _ => Operation::Clear,
        }
    }
}
