#![no_main]

use libfuzzer_sys::fuzz_target;

use fibref_core::fixed_buffer::FixedBuffer;
use fibref_core::growable::GrowableSequence;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Small capacities and indices on both sides of them
    let capacity = usize::from(u16::from_le_bytes([data[0], data[1]]) % 512);
    let n = u64::from(u16::from_le_bytes([data[2], data[3]]) % 1024);

    let fixed = FixedBuffer::new(capacity);
    match fixed.try_fibonacci(n) {
        Ok(value) => {
            assert!(n < capacity as u64, "accepted n={n} at capacity {capacity}");
            assert_eq!(value, GrowableSequence::new().fibonacci(n));
        }
        Err(_) => assert!(n >= capacity as u64, "rejected n={n} at capacity {capacity}"),
    }
});
