//! Model-checks the cyclic queue against `VecDeque`.
//!
//! Every operation sequence is replayed on a `VecDeque` of the same capacity;
//! the two must agree on contents, relative indexing, and iteration order at
//! every step. Operations that would violate the queue's preconditions are
//! rewritten into legal ones so sequences stay within contract while still
//! reaching full/empty boundary states.

use std::collections::VecDeque;

use proptest::prelude::*;

use unrandom_rs::stdx::CyclicQueue;

const PROPTEST_CASES: u32 = 64;

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Pop,
    PopAndPush(i32),
    Get(u8),
    FromBack(u8),
    Ends,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        Just(Op::Pop),
        any::<i32>().prop_map(Op::PopAndPush),
        any::<u8>().prop_map(Op::Get),
        any::<u8>().prop_map(Op::FromBack),
        Just(Op::Ends),
    ]
}

fn check_sequence<const N: usize>(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut queue: CyclicQueue<i32, N> = CyclicQueue::new();
    let mut model: VecDeque<i32> = VecDeque::with_capacity(N);

    for op in ops {
        match op {
            Op::Push(v) => {
                if model.len() == N {
                    // Full: a plain push would violate the contract, so keep
                    // the pressure on the wraparound path instead.
                    model.pop_front();
                    model.push_back(v);
                    queue.pop_and_push(v);
                } else {
                    model.push_back(v);
                    queue.push(v);
                }
            }
            Op::Pop => {
                if model.pop_front().is_some() {
                    queue.pop();
                }
            }
            Op::PopAndPush(v) => {
                if model.is_empty() {
                    model.push_back(v);
                    queue.push(v);
                } else {
                    model.pop_front();
                    model.push_back(v);
                    queue.pop_and_push(v);
                }
            }
            Op::Get(k) => {
                if !model.is_empty() {
                    let k = (k as usize % model.len()) as u32;
                    prop_assert_eq!(*queue.get(k), model[k as usize]);
                }
            }
            Op::FromBack(k) => {
                if !model.is_empty() {
                    let k = (k as usize % model.len()) as u32;
                    let from_front = model.len() - 1 - k as usize;
                    prop_assert_eq!(*queue.from_back(k), model[from_front]);
                }
            }
            Op::Ends => {
                if !model.is_empty() {
                    prop_assert_eq!(queue.front(), model.front().unwrap());
                    prop_assert_eq!(queue.back(), model.back().unwrap());
                }
            }
        }

        prop_assert_eq!(queue.len() as usize, model.len());
        prop_assert_eq!(queue.is_empty(), model.is_empty());
        prop_assert_eq!(queue.is_full(), model.len() == N);
        prop_assert!(queue.iter().eq(model.iter()));
        prop_assert!(queue.iter().rev().eq(model.iter().rev()));
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(crate::cases(PROPTEST_CASES)))]

    #[test]
    fn sequence_matches_vecdeque(ops in prop::collection::vec(op_strategy(), 1..300)) {
        check_sequence::<8>(ops)?;
    }

    #[test]
    fn sequence_matches_vecdeque_capacity_one(
        ops in prop::collection::vec(op_strategy(), 1..100),
    ) {
        check_sequence::<1>(ops)?;
    }

    #[test]
    fn sequence_matches_vecdeque_window_width(
        ops in prop::collection::vec(op_strategy(), 1..300),
    ) {
        // The capacity the solver actually runs at.
        check_sequence::<31>(ops)?;
    }

    #[test]
    fn push_then_back_returns_pushed_value(
        prefix in prop::collection::vec(any::<i32>(), 0..7),
        value in any::<i32>(),
    ) {
        let mut queue: CyclicQueue<i32, 8> = CyclicQueue::new();
        for v in prefix {
            queue.push(v);
        }
        let former_second = if queue.len() >= 2 { Some(*queue.get(1)) } else { None };
        queue.push(value);
        prop_assert_eq!(*queue.from_back(0), value);

        if let Some(second) = former_second {
            queue.pop();
            prop_assert_eq!(*queue.get(0), second);
        }
    }
}
