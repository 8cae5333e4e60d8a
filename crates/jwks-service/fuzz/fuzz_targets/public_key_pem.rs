#![no_main]

use jwks_service::crypto::parse_public_key_pem;
use jwks_service::models::JwkMetadata;
use jwks_service::services::key_management_service::encode_jwks_body;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either fail cleanly or yield a key that encodes
    if let Ok(key) = parse_public_key_pem(data) {
        let _ = encode_jwks_body(&key, &JwkMetadata::default());
    }
});
