//! Serialization tests for the format descriptor.

#![expect(missing_docs, reason = "test repo")]
#![expect(unused_crate_dependencies, reason = "macro hacks")]

use arbitrary::{Arbitrary, Unstructured};
use fastbuf_codec::{ByteWidth, Endian, IntFormat, Signedness};
use fastbuf_codec_tests::proptest::prelude::*;

#[test]
fn test_json_uses_string_form() {
    let fmt = IntFormat::new(ByteWidth::W6, Signedness::Unsigned, Endian::Little);
    let json = serde_json::to_string(&fmt).unwrap();
    assert_eq!(json, "\"u48le\"");
    assert_eq!(serde_json::from_str::<IntFormat>(&json).unwrap(), fmt);

    assert!(serde_json::from_str::<IntFormat>("\"u56le\"").is_err());
    assert!(serde_json::from_str::<IntFormat>("\"i24\"").is_err());
}

#[test]
fn test_bincode_uses_tag() {
    let fmt = IntFormat::new(ByteWidth::W3, Signedness::Signed, Endian::Big);
    let bytes = bincode::serialize(&fmt).unwrap();
    assert_eq!(bytes, vec![fmt.to_tag()]);
    assert_eq!(bincode::deserialize::<IntFormat>(&bytes).unwrap(), fmt);

    assert!(bincode::deserialize::<IntFormat>(&[0x07]).is_err());
    assert!(bincode::deserialize::<IntFormat>(&[0x21]).is_err());
}

#[test]
fn test_arbitrary_formats_are_usable() {
    let seed: Vec<u8> = (0u8..=255).collect();
    let mut u = Unstructured::new(&seed);
    for _ in 0..32 {
        let fmt = IntFormat::arbitrary(&mut u).unwrap();
        assert!(fmt.min() <= 0 && fmt.max() > 0);
        let bytes = fastbuf_codec::encode_to_vec(fmt, fmt.max()).unwrap();
        assert_eq!(bytes.len(), fmt.byte_len());
    }
}

proptest! {
    #[test]
    fn test_config_roundtrip(tag in 0u8..0x20) {
        prop_assume!(IntFormat::from_tag(tag).is_ok());
        let fmt = IntFormat::from_tag(tag).unwrap();

        let json = serde_json::to_string(&fmt).unwrap();
        prop_assert_eq!(serde_json::from_str::<IntFormat>(&json).unwrap(), fmt);

        let bytes = bincode::serialize(&fmt).unwrap();
        prop_assert_eq!(bincode::deserialize::<IntFormat>(&bytes).unwrap(), fmt);
    }
}
