#![no_main]

use facturx::core::CodeList;
use facturx::facturx::codec;
use libfuzzer_sys::fuzz_target;
use strum::IntoEnumIterator;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = codec::encode_binary(s, "/fuzz");
        for list in CodeList::iter() {
            let _ = codec::encode_code(list, s, "/fuzz");
        }
    }
});
