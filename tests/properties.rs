use ccitt16::{Crc16, bitwise, crc16_compute, crc16_update};
use proptest::prelude::*;

proptest! {
    #[test]
    fn empty_input_returns_seed(seed in any::<u16>()) {
        prop_assert_eq!(crc16_compute(seed, &[]), seed);
    }

    #[test]
    fn compute_is_deterministic(
        seed in any::<u16>(),
        data in proptest::collection::vec(any::<u8>(), 0..=1024),
    ) {
        prop_assert_eq!(crc16_compute(seed, &data), crc16_compute(seed, &data));
    }

    #[test]
    fn split_anywhere_matches_whole(
        seed in any::<u16>(),
        data in proptest::collection::vec(any::<u8>(), 0..=1024),
        at in any::<prop::sample::Index>(),
    ) {
        let split = at.index(data.len() + 1);
        let (head, tail) = data.split_at(split);
        prop_assert_eq!(
            crc16_compute(crc16_compute(seed, head), tail),
            crc16_compute(seed, &data)
        );
    }

    #[test]
    fn table_engine_matches_bitwise(
        seed in any::<u16>(),
        data in proptest::collection::vec(any::<u8>(), 0..=4096),
    ) {
        prop_assert_eq!(crc16_compute(seed, &data), bitwise::compute(seed, &data));
    }

    #[test]
    fn update_matches_bitwise(crc in any::<u16>(), byte in any::<u8>()) {
        prop_assert_eq!(crc16_update(crc, byte), bitwise::update(crc, byte));
    }

    #[test]
    fn chunked_streaming_matches_one_shot(
        seed in any::<u16>(),
        data in proptest::collection::vec(any::<u8>(), 0..=4096),
        chunk in 1usize..=257,
    ) {
        let mut crc = Crc16::new(seed);
        for part in data.chunks(chunk) {
            crc.update(part);
        }
        prop_assert_eq!(crc.value(), crc16_compute(seed, &data));
    }

    #[test]
    fn single_bit_flip_changes_checksum(
        seed in any::<u16>(),
        data in proptest::collection::vec(any::<u8>(), 1..=512),
        at in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let i = at.index(data.len());
        let mut flipped = data.clone();
        flipped[i] ^= 1 << bit;
        prop_assert_ne!(crc16_compute(seed, &flipped), crc16_compute(seed, &data));
    }
}

#[test]
fn known_answer() {
    assert_eq!(crc16_compute(0x0000, b"123456789"), 0x31C3);
}
