//! Frame checksums.
//!
//! The PN532 frame format carries two checksums: the length checksum (LCS)
//! over the single length byte and the data checksum (DCS) over the payload.
//! Both use the same arithmetic: the two's complement of the mod-256 sum, so
//! that `sum + checksum == 0 (mod 256)` on a correctly received frame.

/// Compute the data checksum (DCS) for a payload.
pub fn checksum(payload: &[u8]) -> u8 {
    let sum = payload
        .iter()
        .fold(0u8, |acc, &byte| acc.wrapping_add(byte));
    0u8.wrapping_sub(sum)
}

/// Check a received data checksum against a payload.
pub fn checksum_ok(payload: &[u8], received: u8) -> bool {
    checksum(payload) == received
}

/// Compute the length checksum (LCS) for a length byte.
pub fn length_checksum(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Check a received length checksum against a length byte.
pub fn length_checksum_ok(len: u8, received: u8) -> bool {
    len.wrapping_add(received) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_empty_payload() {
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn test_checksum_known_values() {
        // SAMConfiguration payload: D4 + 14 + 01 = E9, DCS = 0x100 - 0xE9
        assert_eq!(checksum(&[0xD4, 0x14, 0x01]), 0x17);
        // InListPassiveTarget payload: D4 + 4A + 01 + 00 = 0x11F -> 0x1F
        assert_eq!(checksum(&[0xD4, 0x4A, 0x01, 0x00]), 0xE1);
    }

    #[test]
    fn test_checksum_is_self_inverse_for_all_lengths() {
        // For every payload length 0..=255, the computed checksum must make
        // the byte sum cancel mod 256.
        for len in 0..=255usize {
            let payload: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            let dcs = checksum(&payload);
            let sum = payload
                .iter()
                .fold(0u8, |acc, &byte| acc.wrapping_add(byte));
            assert_eq!(sum.wrapping_add(dcs), 0, "length {}", len);
            assert!(checksum_ok(&payload, dcs));
            assert!(!checksum_ok(&payload, dcs.wrapping_add(1)));
        }
    }

    #[test]
    fn test_length_checksum_pairs() {
        for len in 0..=255u8 {
            let lcs = length_checksum(len);
            assert!(length_checksum_ok(len, lcs));
            assert!(!length_checksum_ok(len, lcs.wrapping_add(1)));
        }
    }
}
