#![no_main]

use jwks_service::crypto::parse_public_key_der;
use jwks_service::services::key_management_service::build_jwk;
use jwks_service::models::JwkMetadata;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Skips the PEM armor so the fuzzer reaches the ASN.1 decoder directly:
    // - truncated SEQUENCE lengths
    // - unknown algorithm OIDs
    // - EC parameters that are not a named curve
    // - points off the curve
    if let Ok(key) = parse_public_key_der(data) {
        let _ = build_jwk(&key, &JwkMetadata::default());
    }
});
