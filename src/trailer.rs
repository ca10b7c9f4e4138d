use crate::engine::compute;

/// Length of the CRC trailer on the wire.
pub const TRAILER_LEN: usize = 2;

/// Wire form of a CRC: high byte first.
pub fn to_bytes(crc: u16) -> [u8; TRAILER_LEN] {
    crc.to_be_bytes()
}

/// Checksum `buf` as it stands, push the trailer, and return the CRC.
pub fn append(seed: u16, buf: &mut Vec<u8>) -> u16 {
    let crc = compute(seed, buf);
    buf.extend_from_slice(&to_bytes(crc));
    crc
}

/// Split a frame into payload and the CRC it carries.
/// Returns `None` if the frame is too short to hold a trailer.
pub fn split(frame: &[u8]) -> Option<(&[u8], u16)> {
    let at = frame.len().checked_sub(TRAILER_LEN)?;
    let (payload, trailer) = frame.split_at(at);
    Some((payload, u16::from_be_bytes([trailer[0], trailer[1]])))
}

/// True if the frame's trailer matches the CRC of its payload.
///
/// Running the CRC over payload and trailer together leaves a zero residue
/// for an intact frame, so this is a single pass.
pub fn verify(seed: u16, frame: &[u8]) -> bool {
    frame.len() >= TRAILER_LEN && compute(seed, frame) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailer_is_big_endian() {
        assert_eq!(to_bytes(0x31C3), [0x31, 0xC3]);
    }

    #[test]
    fn append_then_verify() {
        let mut frame = b"123456789".to_vec();
        let crc = append(0x0000, &mut frame);
        assert_eq!(crc, 0x31C3);
        assert_eq!(frame.len(), 11);
        assert_eq!(&frame[9..], &[0x31, 0xC3]);
        assert!(verify(0x0000, &frame));
    }

    #[test]
    fn residue_is_zero_for_any_seed() {
        for seed in [0x0000, 0xFFFF, 0x1D0F] {
            let mut frame = vec![0x01, 0x02, 0x03, 0xFE];
            append(seed, &mut frame);
            assert_eq!(compute(seed, &frame), 0);
        }
    }

    #[test]
    fn corrupted_frame_fails() {
        let mut frame = b"hello".to_vec();
        append(0xFFFF, &mut frame);
        frame[2] ^= 0x04;
        assert!(!verify(0xFFFF, &frame));
    }

    #[test]
    fn wrong_seed_fails() {
        let mut frame = b"hello".to_vec();
        append(0xFFFF, &mut frame);
        assert!(!verify(0x0000, &frame));
    }

    #[test]
    fn split_returns_payload_and_crc() {
        let mut frame = vec![0xAA, 0xBB];
        let crc = append(0x0000, &mut frame);
        assert_eq!(split(&frame), Some((&[0xAA, 0xBB][..], crc)));
    }

    #[test]
    fn short_frames() {
        assert_eq!(split(&[0x01]), None);
        assert!(!verify(0x0000, &[]));
        assert!(!verify(0x0000, &[0x00]));
        // Two zero bytes are the trailer of an empty payload under seed 0.
        assert!(verify(0x0000, &[0x00, 0x00]));
    }
}
