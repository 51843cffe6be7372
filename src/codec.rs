//! Bit-exact float32 <-> hexadecimal codec for vector files.
//!
//! Every value in a vector file is a single IEEE-754 binary32 word rendered
//! as exactly eight lowercase hex characters, most significant byte first.
//! Encoding is pure bit reinterpretation: no rounding, no normalization, and
//! NaN payloads survive a round trip untouched.

use crate::error::{DoradoError, Result};

/// Encode a float32 as eight lowercase big-endian hex characters.
///
/// The value's raw bits are rendered directly, so every representable
/// float (including negative zero, infinities, and NaNs) has a unique,
/// stable encoding.
///
/// # Example
///
/// ```
/// use dorado::codec::encode;
///
/// assert_eq!(encode(1.0), "3f800000");
/// assert_eq!(encode(-2.0), "c0000000");
/// assert_eq!(encode(0.0), "00000000");
/// ```
#[must_use]
pub fn encode(value: f32) -> String {
    format!("{:08x}", value.to_bits())
}

/// Decode an eight-character hex word back into the exact float32 it encodes.
///
/// Accepts uppercase and lowercase hex digits. Anything that is not exactly
/// eight hex characters is rejected, including empty strings, seven- or
/// nine-character words, and words carrying a sign prefix.
///
/// # Errors
///
/// Returns [`DoradoError::MalformedHex`] if `hex` is not exactly eight
/// hexadecimal characters.
///
/// # Example
///
/// ```
/// use dorado::codec::decode;
///
/// assert_eq!(decode("3f800000").unwrap(), 1.0);
/// assert!(decode("3f80").is_err());
/// assert!(decode("+f800000").is_err());
/// ```
pub fn decode(hex: &str) -> Result<f32> {
    if hex.len() != 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DoradoError::malformed_hex(hex));
    }
    let bits =
        u32::from_str_radix(hex, 16).map_err(|_| DoradoError::malformed_hex(hex))?;
    Ok(f32::from_bits(bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(1.0), "3f800000");
        assert_eq!(encode(-2.0), "c0000000");
        assert_eq!(encode(0.0), "00000000");
        assert_eq!(encode(0.5), "3f000000");
    }

    #[test]
    fn test_encode_negative_zero_distinct() {
        assert_eq!(encode(-0.0), "80000000");
        assert_ne!(encode(-0.0), encode(0.0));
    }

    #[test]
    fn test_encode_infinities() {
        assert_eq!(encode(f32::INFINITY), "7f800000");
        assert_eq!(encode(f32::NEG_INFINITY), "ff800000");
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode("3f800000").expect("valid hex"), 1.0);
        assert_eq!(decode("c0000000").expect("valid hex"), -2.0);
        assert_eq!(decode("00000000").expect("valid hex"), 0.0);
    }

    #[test]
    fn test_decode_accepts_uppercase() {
        assert_eq!(decode("3F800000").expect("valid hex"), 1.0);
        assert_eq!(decode("FF800000").expect("valid hex"), f32::NEG_INFINITY);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert!(decode("").is_err());
        assert!(decode("3f80000").is_err());
        assert!(decode("3f8000000").is_err());
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        assert!(decode("zf800000").is_err());
        assert!(decode("3f80 000").is_err());
    }

    #[test]
    fn test_decode_rejects_signed_words() {
        // u32::from_str_radix would happily parse "+f800000"; the codec
        // must not.
        assert!(decode("+f800000").is_err());
        assert!(decode("-f800000").is_err());
    }

    #[test]
    fn test_nan_payload_survives_round_trip() {
        let quiet_nan = f32::from_bits(0x7fc0_0001);
        let hex = encode(quiet_nan);
        assert_eq!(hex, "7fc00001");
        let back = decode(&hex).expect("valid hex");
        assert!(back.is_nan());
        assert_eq!(back.to_bits(), 0x7fc0_0001);
    }

    #[test]
    fn test_denormal_round_trip() {
        let denormal = f32::from_bits(0x0000_0001);
        let back = decode(&encode(denormal)).expect("valid hex");
        assert_eq!(back.to_bits(), denormal.to_bits());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Every bit pattern round-trips exactly, NaNs included.
        #[test]
        fn prop_round_trip_is_bit_exact(bits in any::<u32>()) {
            let value = f32::from_bits(bits);
            let hex = encode(value);
            prop_assert_eq!(hex.len(), 8);
            prop_assert!(hex.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
            let back = decode(&hex).expect("encoder output is always valid");
            prop_assert_eq!(back.to_bits(), bits);
        }
    }
}
