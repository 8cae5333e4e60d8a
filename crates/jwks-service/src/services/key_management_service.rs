use crate::crypto::{self, strip_leading_zeros, PublicKeyMaterial};
use crate::errors::JwksError;
use crate::models::{JsonWebKey, JwkMetadata, JwkParams, Jwks};
use crate::observability::metrics::record_key_load;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use bytes::Bytes;
use std::path::Path;
use tracing::instrument;

/// Read the PEM file at `path` and decode its first public key.
///
/// The file is read exactly once; nothing is written back.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_public_key(path: &Path) -> Result<PublicKeyMaterial, JwksError> {
    let result = std::fs::read(path)
        .map_err(|source| JwksError::FileRead {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|pem_data| crypto::parse_public_key_pem(&pem_data));

    match &result {
        Ok(key) => record_key_load(key.key_type(), "success"),
        Err(e) => record_key_load("unknown", e.category()),
    }

    result
}

/// Derive the JWK for `key`.
///
/// `kid` and `use` are copied verbatim from `metadata`. `alg` comes from the
/// metadata override when present, otherwise from the key itself.
pub fn build_jwk(key: &PublicKeyMaterial, metadata: &JwkMetadata) -> JsonWebKey {
    let params = match key {
        PublicKeyMaterial::Ec(ec) => {
            let width = ec.curve().coordinate_len();
            JwkParams::Ec {
                crv: ec.curve().name().to_string(),
                x: URL_SAFE_NO_PAD.encode(left_pad(ec.x(), width)),
                y: URL_SAFE_NO_PAD.encode(left_pad(ec.y(), width)),
            }
        }
        PublicKeyMaterial::Rsa(rsa) => JwkParams::Rsa {
            n: URL_SAFE_NO_PAD.encode(strip_leading_zeros(rsa.n())),
            e: URL_SAFE_NO_PAD.encode(strip_leading_zeros(rsa.e())),
        },
    };

    let alg = metadata
        .alg
        .clone()
        .unwrap_or_else(|| key.default_algorithm().to_string());

    JsonWebKey {
        kty: key.key_type().to_string(),
        kid: metadata.kid.clone(),
        use_: metadata.use_.clone(),
        alg,
        params,
    }
}

/// Wrap the single published key in a JWKS document.
pub fn build_jwks(key: &PublicKeyMaterial, metadata: &JwkMetadata) -> Jwks {
    Jwks {
        keys: vec![build_jwk(key, metadata)],
    }
}

/// Serialize the JWKS document once into the immutable response body.
///
/// Output is deterministic: the same key and metadata always yield
/// byte-identical JSON.
#[instrument(skip_all, fields(kid = %metadata.kid))]
pub fn encode_jwks_body(key: &PublicKeyMaterial, metadata: &JwkMetadata) -> Result<Bytes, JwksError> {
    let jwks = build_jwks(key, metadata);
    let body = serde_json::to_vec(&jwks)?;
    Ok(Bytes::from(body))
}

/// Big-endian value left-padded with zeros to `width` bytes.
///
/// Values wider than `width` have their leading zero bytes removed first;
/// a point on the curve never exceeds the coordinate width after that.
fn left_pad(value: &[u8], width: usize) -> Vec<u8> {
    let significant = strip_leading_zeros(value);
    let mut padded = vec![0u8; width.saturating_sub(significant.len())];
    padded.extend_from_slice(significant);
    padded
}
