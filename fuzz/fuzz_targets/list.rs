#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linkstack::{Error, List};
use std::collections::VecDeque;

#[derive(Arbitrary, Debug)]
enum Action {
    PushFront(u32),
    PushBack(u32),
    PopFront,
    PopBack,
    Insert(usize, u32),
    Remove(usize),
}

use self::Action::*;

fuzz_target!(|actions: Vec<Action>| {
    let mut list = List::new();
    let mut model: VecDeque<u32> = VecDeque::new();
    for action in actions {
        match action {
            PushFront(value) => {
                list.push_front(value).unwrap();
                model.push_front(value);
            }
            PushBack(value) => {
                list.push_back(value).unwrap();
                model.push_back(value);
            }
            PopFront => {
                assert_eq!(model.pop_front().ok_or(Error::EmptyCollection), list.pop_front());
            }
            PopBack => {
                assert_eq!(model.pop_back().ok_or(Error::EmptyCollection), list.pop_back());
            }
            Insert(index, value) => {
                // Bias towards in-range positions but keep some overshoot.
                let index = index % (model.len() + 2);
                if index <= model.len() {
                    list.insert(index, value).unwrap();
                    model.insert(index, value);
                } else {
                    assert!(list.insert(index, value).is_err());
                }
            }
            Remove(index) => {
                let index = index % (model.len() + 2);
                if index < model.len() {
                    assert_eq!(model.remove(index).ok_or(Error::EmptyCollection), list.remove(index));
                } else {
                    assert!(list.remove(index).is_err());
                }
            }
        }
        assert_eq!(model.len(), list.len());
        assert_eq!(model.front(), list.front());
        assert_eq!(model.back().ok_or(Error::EmptyCollection), list.back());
    }
    assert!(model.iter().eq(list.iter()));
});
