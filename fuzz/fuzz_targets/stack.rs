#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linkstack::{Error, Stack};

#[derive(Arbitrary, Debug)]
enum Action {
    Push(u32),
    Pop,
    Top,
    Get(usize),
    Grow(u8),
}

use self::Action::*;

fuzz_target!(|input: (u8, Vec<Action>)| {
    let mut capacity = input.0 as usize;
    let mut stack: Stack<u32> = Stack::new(capacity).unwrap();
    let mut model: Vec<u32> = Vec::new();
    for action in input.1 {
        match action {
            Push(value) => {
                if model.len() < capacity {
                    assert_eq!(Ok(()), stack.push(value));
                    model.push(value);
                } else {
                    assert_eq!(Err(value), stack.push(value));
                }
            }
            Pop => {
                assert_eq!(model.pop().ok_or(Error::EmptyCollection), stack.pop());
            }
            Top => {
                assert_eq!(model.last().ok_or(Error::EmptyCollection), stack.top());
            }
            Get(index) => {
                let index = index % (model.len() + 2);
                assert_eq!(
                    model.get(index).ok_or(Error::IndexOutOfBounds {
                        index,
                        len: model.len(),
                    }),
                    stack.get(index)
                );
            }
            Grow(extra) => {
                stack.grow(extra as usize).unwrap();
                capacity += extra as usize;
            }
        }
        assert_eq!(model.len(), stack.len());
        assert_eq!(capacity, stack.capacity());
        assert_eq!(model.as_slice(), stack.as_slice());
    }
});
