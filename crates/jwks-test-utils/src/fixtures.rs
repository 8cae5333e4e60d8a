//! Key fixtures for testing
//!
//! Two kinds of fixtures are provided:
//! - PEM files under `fixtures/` generated once with OpenSSL, together with
//!   their expected coordinates / modulus as hex and base64url
//! - deterministic EC keys derived from a seed, for sweeping many keys
//!
//! The private halves are only used to sign test JWTs.

use p256::pkcs8::{EncodePublicKey, LineEnding};
use std::io::Write;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Test fixture error type
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Cryptographic operation failed: {0}")]
    Crypto(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// P-256
pub const EC_P256_PUBLIC_PEM: &str = include_str!("../fixtures/ec_p256_public.pem");
pub const EC_P256_PRIVATE_PEM: &str = include_str!("../fixtures/ec_p256_private.pem");
pub const EC_P256_X_HEX: &str = "6cbb962423069325e19c431d2d36f51dc8ad28ea96bf24fdb8fa851c2ebffe69";
pub const EC_P256_Y_HEX: &str = "a42e84e93c7d92ea66720ca76cfa38c317d34f268753d46e884018569ba595a3";
pub const EC_P256_X_B64URL: &str = "bLuWJCMGkyXhnEMdLTb1HcitKOqWvyT9uPqFHC6__mk";
pub const EC_P256_Y_B64URL: &str = "pC6E6Tx9kupmcgynbPo4wxfTTyaHU9RuiEAYVpullaM";

// P-384
pub const EC_P384_PUBLIC_PEM: &str = include_str!("../fixtures/ec_p384_public.pem");
pub const EC_P384_PRIVATE_PEM: &str = include_str!("../fixtures/ec_p384_private.pem");
pub const EC_P384_X_HEX: &str =
    "7b93428a5a2f02d253ccd9395661368685f708cfad7502a6db1e60929d4a3f60782b5c9371f90a358db1dc8ee3cd1c2b";
pub const EC_P384_Y_HEX: &str =
    "846b06e5ba76413c4e186fae36f313f5a0ad3ce5f1b6145e636a94311e23c95f4b6ba713274f7f2ad71d39cbcb5e6909";

// P-521 (both coordinates start with a zero byte)
pub const EC_P521_PUBLIC_PEM: &str = include_str!("../fixtures/ec_p521_public.pem");
pub const EC_P521_X_HEX: &str = "00b1ebc4cc32d6b763e3ac343e71008bd52708bd2c84e1391830d44791e93fa4167dd0c2fd006972db0d2d3be960383b4352525b410f9b7614e18953ca5149526539";
pub const EC_P521_Y_HEX: &str = "003e15bfc28947fbb107efafc779bc454f2a668c6ba3a02a50ca44aa38c633531737684b2743ac9705fe74d74823b29c697cf5b053068102dcfacd83eeb093f4e08b";
pub const EC_P521_X_B64URL: &str =
    "ALHrxMwy1rdj46w0PnEAi9UnCL0shOE5GDDUR5HpP6QWfdDC_QBpctsNLTvpYDg7Q1JSW0EPm3YU4YlTylFJUmU5";

// RSA 2048, e = 65537
pub const RSA_2048_PUBLIC_PEM: &str = include_str!("../fixtures/rsa_2048_public.pem");
pub const RSA_2048_PRIVATE_PEM: &str = include_str!("../fixtures/rsa_2048_private.pem");
pub const RSA_2048_MODULUS_HEX: &str = "af882bb76cf442c2a5304197b7a27f9ad6df5c9169e721794bc107e1da87d68caacdc4c289526e956f1fe3ecd2ef84d8ae14f8909940f9a7fc86e55b642b15835e8196cca2f44e20686b7b78a0117f2ab6e64598ba879acdab2191f50a075e96af9c3c38a4ec392178b9ed4f06c02c987f460aacf5c127d03487037ab958873e104106c03a25afa2815c5e1041697a745210b5a883595d03ee40236427cda10623de2761800bc2f1f2318ce4ee7d2aa49b397a56873949bbb23857dd8c12a885a9c1407db3a5d695b80cf8c172aa67dc441ccac041b80baade0dc956b115af58d48cbe26d64e371bed33e4125de8821db24349c92508dc4d8e8d96e80b3e7963";
pub const RSA_2048_MODULUS_B64URL: &str = "r4grt2z0QsKlMEGXt6J_mtbfXJFp5yF5S8EH4dqH1oyqzcTCiVJulW8f4-zS74TYrhT4kJlA-af8huVbZCsVg16Blsyi9E4gaGt7eKARfyq25kWYuoeazashkfUKB16Wr5w8OKTsOSF4ue1PBsAsmH9GCqz1wSfQNIcDerlYhz4QQQbAOiWvooFcXhBBaXp0UhC1qINZXQPuQCNkJ82hBiPeJ2GAC8Lx8jGM5O59KqSbOXpWhzlJu7I4V92MEqiFqcFAfbOl1pW4DPjBcqpn3EQcysBBuAuq3g3JVrEVr1jUjL4m1k43G-0z5BJd6IIdskNJySUI3E2OjZboCz55Yw";

// RSA 8192, above the size the `rsa` crate accepts for encryption
pub const RSA_8192_PUBLIC_PEM: &str = include_str!("../fixtures/rsa_8192_public.pem");
pub const RSA_8192_MODULUS_HEX: &str = include_str!("../fixtures/rsa_8192_modulus.hex");

// RSA 2048, e = 2^80 + 1
pub const RSA_2048_LARGE_EXPONENT_PUBLIC_PEM: &str =
    include_str!("../fixtures/rsa_2048_large_exponent_public.pem");
pub const RSA_2048_LARGE_EXPONENT_MODULUS_HEX: &str =
    include_str!("../fixtures/rsa_2048_large_exponent_modulus.hex");
pub const RSA_LARGE_EXPONENT_HEX: &str = "0100000000000000000001";

// Keys that cannot be published
pub const ED25519_PUBLIC_PEM: &str = include_str!("../fixtures/ed25519_public.pem");
pub const DSA_PUBLIC_PEM: &str = include_str!("../fixtures/dsa_public.pem");
pub const SECP256K1_PUBLIC_PEM: &str = include_str!("../fixtures/secp256k1_public.pem");

/// Deterministic big-endian scalar for `seed`.
///
/// The leading byte is zero so the value stays below every supported curve
/// order (P-521 scalars only use the low bit of their top byte).
fn seeded_scalar(seed: u8, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    for (i, byte) in bytes.iter_mut().enumerate().skip(1) {
        *byte = seed.wrapping_mul(i as u8).wrapping_add(i as u8);
    }
    // Never zero
    if let Some(last) = bytes.last_mut() {
        *last |= 1;
    }
    bytes
}

/// Generate a deterministic P-256 public key in SPKI PEM format.
///
/// The same seed always produces the same key.
pub fn p256_public_pem(seed: u8) -> Result<String, FixtureError> {
    let secret = p256::SecretKey::from_slice(&seeded_scalar(seed, 32))
        .map_err(|e| FixtureError::Crypto(format!("Invalid P-256 scalar: {}", e)))?;
    secret
        .public_key()
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| FixtureError::Crypto(format!("P-256 PEM encoding failed: {}", e)))
}

/// Generate a deterministic P-384 public key in SPKI PEM format.
pub fn p384_public_pem(seed: u8) -> Result<String, FixtureError> {
    let secret = p384::SecretKey::from_slice(&seeded_scalar(seed, 48))
        .map_err(|e| FixtureError::Crypto(format!("Invalid P-384 scalar: {}", e)))?;
    secret
        .public_key()
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| FixtureError::Crypto(format!("P-384 PEM encoding failed: {}", e)))
}

/// Generate a deterministic P-521 public key in SPKI PEM format.
pub fn p521_public_pem(seed: u8) -> Result<String, FixtureError> {
    let secret = p521::SecretKey::from_slice(&seeded_scalar(seed, 66))
        .map_err(|e| FixtureError::Crypto(format!("Invalid P-521 scalar: {}", e)))?;
    secret
        .public_key()
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| FixtureError::Crypto(format!("P-521 PEM encoding failed: {}", e)))
}

/// Write `contents` to a fresh temporary `.pem` file.
///
/// The file is deleted when the returned handle is dropped.
pub fn write_temp_pem(prefix: &str, contents: &str) -> Result<NamedTempFile, FixtureError> {
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".pem")
        .tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}
