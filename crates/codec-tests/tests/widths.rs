//! Property tests for every fixed-width accessor family.

#![expect(missing_docs, reason = "test repo")]
#![expect(unused_crate_dependencies, reason = "macro hacks")]

use fastbuf_codec_tests::generate_width_tests;

generate_width_tests!(uint8, u8, "u8", single);
generate_width_tests!(int8, i8, "i8", single);

generate_width_tests!(uint16, u16, "u16");
generate_width_tests!(uint24, u32, "u24");
generate_width_tests!(uint32, u32, "u32");
generate_width_tests!(uint40, u64, "u40");
generate_width_tests!(uint48, u64, "u48");

generate_width_tests!(int16, i16, "i16");
generate_width_tests!(int24, i32, "i24");
generate_width_tests!(int32, i32, "i32");
generate_width_tests!(int40, i64, "i40");
generate_width_tests!(int48, i64, "i48");
