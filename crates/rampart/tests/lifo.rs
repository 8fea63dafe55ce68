// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use rampart::{StackConfig, ValidatedStack, XorShiftEntropySource};

#[derive(Debug, Clone)]
enum Op {
    Push(u32),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![3 => any::<u32>().prop_map(Op::Push), 2 => Just(Op::Pop)]
}

proptest! {
    #[test]
    fn prop_pops_reverse_pushes(
        values in proptest::collection::vec(any::<i64>(), 0..200),
        initial_capacity in 0usize..16,
    ) {
        let mut stack = ValidatedStack::<i64>::with_capacity(initial_capacity);
        for &value in &values {
            stack.push(value);
        }

        let mut popped = Vec::with_capacity(values.len());
        while !stack.is_empty() {
            popped.push(stack.pop());
        }
        popped.reverse();

        prop_assert_eq!(popped, values);
    }

    #[test]
    fn prop_len_is_pushes_minus_pops(n in 0usize..128, m_frac in 0.0f64..=1.0) {
        let m = ((n as f64) * m_frac) as usize;
        let mut stack = ValidatedStack::<u16>::with_capacity(2);

        for i in 0..n {
            stack.push(i as u16);
        }
        for _ in 0..m {
            stack.pop();
        }

        prop_assert_eq!(stack.len(), n - m);
        prop_assert!(stack.is_valid());
    }

    #[test]
    fn prop_matches_vec_model(
        ops in proptest::collection::vec(op_strategy(), 0..300),
        seed in any::<u64>(),
    ) {
        let config = StackConfig::default().with_initial_capacity(1);
        let mut stack =
            ValidatedStack::<u32, _>::with_entropy(config, XorShiftEntropySource::from_seed(seed));
        let mut model: Vec<u32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    stack.try_push(value).expect("Failed to try_push(..)");
                    model.push(value);
                }
                Op::Pop => {
                    prop_assert_eq!(stack.try_pop().ok(), model.pop());
                }
            }
            prop_assert_eq!(stack.len(), model.len());
            prop_assert!(stack.capacity() >= stack.len());
            prop_assert_eq!(stack.try_peek().ok(), model.last().copied());
        }

        prop_assert!(stack.try_destroy().is_ok());
    }
}
