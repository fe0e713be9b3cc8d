#![no_main]

use std::collections::HashMap;

use libfuzzer_sys::fuzz_target;

use fibref_core::fixed_buffer::FixedBuffer;
use fibref_core::growable::GrowableSequence;
use fibref_core::memoized::fib_memoized;
use fibref_core::naive::NaiveRecursion;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Index below the default capacity so every bottom-up strategy applies
    let n = u64::from(u16::from_le_bytes([data[0], data[1]]) % 1000);

    let vector = GrowableSequence::new().fibonacci(n);
    let array = FixedBuffer::default()
        .try_fibonacci(n)
        .expect("index is below the default capacity");
    let memo = fib_memoized(n, &mut HashMap::new());

    assert_eq!(vector, array, "GrowableSequence != FixedBuffer at n={n}");
    assert_eq!(vector, memo, "GrowableSequence != MemoizedRecursion at n={n}");

    // The naive recursion is only affordable for small n
    if n <= 25 {
        assert_eq!(vector, NaiveRecursion::new().fibonacci(n), "naive mismatch at n={n}");
    }
});
