//! Custom test assertions for expressive tests
//!
//! Provides trait-based assertions over a parsed JWKS document.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde_json::Value;

/// Custom assertions for JWKS documents
///
/// # Example
/// ```rust,ignore
/// jwks
///     .assert_single_key()
///     .assert_ec_key("P-256", X_HEX, Y_HEX)
///     .assert_metadata("test-key", "sig", "ES256");
/// ```
pub trait JwksAssertions {
    /// Assert that `keys` is an array holding exactly one object
    fn assert_single_key(&self) -> &Self;

    /// Assert the first key is an EC key on `crv` with the given coordinates
    fn assert_ec_key(&self, crv: &str, x_hex: &str, y_hex: &str) -> &Self;

    /// Assert the first key is an RSA key with the given modulus and exponent
    fn assert_rsa_key(&self, n_hex: &str, e_hex: &str) -> &Self;

    /// Assert the `kid`, `use` and `alg` of the first key
    fn assert_metadata(&self, kid: &str, key_use: &str, alg: &str) -> &Self;
}

fn first_key(jwks: &Value) -> &Value {
    jwks["keys"]
        .get(0)
        .unwrap_or_else(|| panic!("JWKS has no keys: {}", jwks))
}

fn decode_member(key: &Value, member: &str) -> Vec<u8> {
    let encoded = key[member]
        .as_str()
        .unwrap_or_else(|| panic!("JWK member '{}' missing or not a string: {}", member, key));

    assert!(
        !encoded.contains('=') && !encoded.contains('+') && !encoded.contains('/'),
        "JWK member '{}' is not base64url without padding: {}",
        member,
        encoded
    );

    URL_SAFE_NO_PAD
        .decode(encoded)
        .unwrap_or_else(|e| panic!("JWK member '{}' failed to decode: {}", member, e))
}

impl JwksAssertions for Value {
    fn assert_single_key(&self) -> &Self {
        let keys = self["keys"]
            .as_array()
            .unwrap_or_else(|| panic!("JWKS must have a 'keys' array: {}", self));
        assert_eq!(keys.len(), 1, "Expected exactly one JWK, got {}", keys.len());
        assert!(keys[0].is_object(), "JWK must be an object");
        self
    }

    fn assert_ec_key(&self, crv: &str, x_hex: &str, y_hex: &str) -> &Self {
        let key = first_key(self);
        assert_eq!(key["kty"], "EC", "Expected EC key type");
        assert_eq!(key["crv"], crv, "Unexpected curve");
        assert_eq!(hex::encode(decode_member(key, "x")), x_hex, "x coordinate mismatch");
        assert_eq!(hex::encode(decode_member(key, "y")), y_hex, "y coordinate mismatch");
        assert!(key.get("n").is_none(), "EC key must not carry 'n'");
        assert!(key.get("e").is_none(), "EC key must not carry 'e'");
        self
    }

    fn assert_rsa_key(&self, n_hex: &str, e_hex: &str) -> &Self {
        let key = first_key(self);
        assert_eq!(key["kty"], "RSA", "Expected RSA key type");
        assert_eq!(hex::encode(decode_member(key, "n")), n_hex, "modulus mismatch");
        assert_eq!(hex::encode(decode_member(key, "e")), e_hex, "exponent mismatch");
        for member in ["crv", "x", "y"] {
            assert!(key.get(member).is_none(), "RSA key must not carry '{}'", member);
        }
        self
    }

    fn assert_metadata(&self, kid: &str, key_use: &str, alg: &str) -> &Self {
        let key = first_key(self);
        assert_eq!(key["kid"], kid, "Unexpected kid");
        assert_eq!(key["use"], key_use, "Unexpected use");
        assert_eq!(key["alg"], alg, "Unexpected alg");
        self
    }
}
