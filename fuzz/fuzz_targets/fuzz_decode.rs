#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Both decode paths must never panic
    let _ = zentga::decode_tga(data, enough::Unstoppable);
    let _ = zentga::decode_tga_native(data, enough::Unstoppable);

    // Probing must agree with decoding about header validity
    let _ = zentga::ImageInfo::from_bytes(data);
});
