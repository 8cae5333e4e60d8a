//! JWT helpers for JOSE interoperability checks
//!
//! Tokens are signed with a fixture private key and verified against a JWK
//! taken from a served JWKS document, the way a relying party would.

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// 2100-01-01T00:00:00Z
const FAR_FUTURE_EXP: i64 = 4_102_444_800;

/// Claims carried by test tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestClaims {
    pub sub: String,
    pub exp: i64,
}

impl TestClaims {
    pub fn for_subject(sub: &str) -> Self {
        Self {
            sub: sub.to_string(),
            exp: FAR_FUTURE_EXP,
        }
    }
}

/// Sign `claims` with a PKCS#8 private key PEM, setting `kid` in the header.
pub fn sign_test_token(
    algorithm: Algorithm,
    private_key_pem: &str,
    kid: &str,
    claims: &TestClaims,
) -> Result<String, anyhow::Error> {
    let key = match algorithm {
        Algorithm::ES256 | Algorithm::ES384 => EncodingKey::from_ec_pem(private_key_pem.as_bytes())?,
        Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512 => {
            EncodingKey::from_rsa_pem(private_key_pem.as_bytes())?
        }
        other => anyhow::bail!("unsupported test signing algorithm {:?}", other),
    };

    let mut header = Header::new(algorithm);
    header.kid = Some(kid.to_string());

    Ok(encode(&header, claims, &key)?)
}

/// Verify `token` with the key selected by its `kid` from a JWKS document.
pub fn verify_with_jwks(
    token: &str,
    jwks_json: &[u8],
    algorithm: Algorithm,
) -> Result<TestClaims, anyhow::Error> {
    let jwks: JwkSet = serde_json::from_slice(jwks_json)?;

    let kid = jsonwebtoken::decode_header(token)?
        .kid
        .ok_or_else(|| anyhow::anyhow!("token header has no kid"))?;
    let jwk = jwks
        .find(&kid)
        .ok_or_else(|| anyhow::anyhow!("kid {} not present in JWKS", kid))?;

    let key = DecodingKey::from_jwk(jwk)?;
    let mut validation = Validation::new(algorithm);
    validation.validate_aud = false;

    Ok(decode::<TestClaims>(token, &key, &validation)?.claims)
}
