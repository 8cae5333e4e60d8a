//! Public key loading.
//!
//! Turns PEM-armored `SubjectPublicKeyInfo` bytes into a [`PublicKeyMaterial`]:
//!
//! 1. strip the PEM armor of the first block found (later blocks are ignored)
//! 2. parse the DER payload as a PKIX `SubjectPublicKeyInfo`
//! 3. dispatch on the algorithm OID (`id-ecPublicKey` or `rsaEncryption`)
//!
//! A successful return always carries structurally valid key material: EC
//! points are checked to lie on their curve and RSA keys carry a positive
//! modulus and exponent. RSA keys of any size are accepted.

use crate::errors::JwksError;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rsa::pkcs1::der::Decode;
use spki::{ObjectIdentifier, SubjectPublicKeyInfoRef};
use std::fmt;
use tracing::instrument;

/// `id-ecPublicKey` (RFC 5480).
pub const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// `rsaEncryption` (RFC 3279).
pub const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

const SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
const SECP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");
const SECP521R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

/// Uncompressed SEC1 point tag.
const SEC1_UNCOMPRESSED: u8 = 0x04;

/// NIST curves that can be published as `kty = "EC"` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcCurve {
    P256,
    P384,
    P521,
}

impl EcCurve {
    /// Look up a curve by its named-curve OID.
    pub fn from_oid(oid: ObjectIdentifier) -> Option<Self> {
        match oid {
            SECP256R1 => Some(EcCurve::P256),
            SECP384R1 => Some(EcCurve::P384),
            SECP521R1 => Some(EcCurve::P521),
            _ => None,
        }
    }

    /// JWK `crv` value.
    pub fn name(&self) -> &'static str {
        match self {
            EcCurve::P256 => "P-256",
            EcCurve::P384 => "P-384",
            EcCurve::P521 => "P-521",
        }
    }

    /// Width of one affine coordinate in bytes.
    pub fn coordinate_len(&self) -> usize {
        match self {
            EcCurve::P256 => 32,
            EcCurve::P384 => 48,
            EcCurve::P521 => 66,
        }
    }

    /// JWS algorithm conventionally paired with the curve (RFC 7518 §3.4).
    pub fn signature_algorithm(&self) -> &'static str {
        match self {
            EcCurve::P256 => "ES256",
            EcCurve::P384 => "ES384",
            EcCurve::P521 => "ES512",
        }
    }
}

/// Affine point of an elliptic-curve public key.
///
/// Coordinates are big-endian and may be shorter than the curve width;
/// encoders must left-pad them to [`EcCurve::coordinate_len`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcPublicKey {
    curve: EcCurve,
    x: Vec<u8>,
    y: Vec<u8>,
}

impl EcPublicKey {
    pub(crate) fn from_coordinates(curve: EcCurve, x: Vec<u8>, y: Vec<u8>) -> Self {
        Self { curve, x, y }
    }

    pub fn curve(&self) -> EcCurve {
        self.curve
    }

    pub fn x(&self) -> &[u8] {
        &self.x
    }

    pub fn y(&self) -> &[u8] {
        &self.y
    }
}

/// RSA public key as big-endian unsigned integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    n: Vec<u8>,
    e: Vec<u8>,
}

impl RsaPublicKey {
    pub(crate) fn from_components(n: Vec<u8>, e: Vec<u8>) -> Self {
        Self { n, e }
    }

    /// Modulus.
    pub fn n(&self) -> &[u8] {
        &self.n
    }

    /// Public exponent.
    pub fn e(&self) -> &[u8] {
        &self.e
    }

    /// Modulus size in bits, ignoring leading zero bytes.
    pub fn modulus_bits(&self) -> usize {
        let trimmed = strip_leading_zeros(&self.n);
        match trimmed.first() {
            Some(first) => trimmed.len() * 8 - first.leading_zeros() as usize,
            None => 0,
        }
    }
}

/// A decoded public key, one variant per supported key algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyMaterial {
    Ec(EcPublicKey),
    Rsa(RsaPublicKey),
}

impl PublicKeyMaterial {
    /// JWK `kty` value.
    pub fn key_type(&self) -> &'static str {
        match self {
            PublicKeyMaterial::Ec(_) => "EC",
            PublicKeyMaterial::Rsa(_) => "RSA",
        }
    }

    /// `alg` published when no override is configured.
    ///
    /// RSA keys do not pin a single JWS algorithm, so `RS256` is assumed.
    pub fn default_algorithm(&self) -> &'static str {
        match self {
            PublicKeyMaterial::Ec(key) => key.curve().signature_algorithm(),
            PublicKeyMaterial::Rsa(_) => "RS256",
        }
    }
}

impl fmt::Display for PublicKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicKeyMaterial::Ec(key) => write!(f, "EC {}", key.curve().name()),
            PublicKeyMaterial::Rsa(key) => write!(f, "RSA {}-bit", key.modulus_bits()),
        }
    }
}

/// Parse the first PEM block in `input` as a PKIX public key.
///
/// # Errors
///
/// - `JwksError::Format` when no PEM block is present, the DER is not a
///   `SubjectPublicKeyInfo`, or the key bytes are invalid for their algorithm.
/// - `JwksError::UnsupportedKeyType` for algorithms or curves that cannot be
///   published.
#[instrument(skip_all)]
pub fn parse_public_key_pem(input: &[u8]) -> Result<PublicKeyMaterial, JwksError> {
    let block = pem::parse(input).map_err(|e| {
        tracing::debug!(target: "jwks.crypto", error = %e, "PEM decoding failed");
        JwksError::Format("no PEM block found".to_string())
    })?;

    if block.tag() != "PUBLIC KEY" {
        tracing::debug!(target: "jwks.crypto", tag = %block.tag(), "Unexpected PEM label, parsing anyway");
    }

    parse_public_key_der(block.contents())
}

/// Parse DER-encoded `SubjectPublicKeyInfo` bytes.
pub fn parse_public_key_der(der: &[u8]) -> Result<PublicKeyMaterial, JwksError> {
    let spki = SubjectPublicKeyInfoRef::try_from(der).map_err(|e| {
        tracing::debug!(target: "jwks.crypto", error = %e, "SubjectPublicKeyInfo decoding failed");
        JwksError::Format("invalid PKIX structure".to_string())
    })?;

    match spki.algorithm.oid {
        ID_EC_PUBLIC_KEY => {
            let curve_oid = spki
                .algorithm
                .parameters_oid()
                .map_err(|e| invalid_pkix(format!("EC key is missing its named curve: {}", e)))?;

            let curve = EcCurve::from_oid(curve_oid).ok_or_else(|| {
                JwksError::UnsupportedKeyType(format!("elliptic curve {}", curve_oid))
            })?;

            let point = spki
                .subject_public_key
                .as_bytes()
                .ok_or_else(|| invalid_pkix("EC public key is not an octet-aligned bit string"))?;

            decode_ec_point(curve, point).map(PublicKeyMaterial::Ec)
        }
        RSA_ENCRYPTION => {
            let der = spki
                .subject_public_key
                .as_bytes()
                .ok_or_else(|| invalid_pkix("RSA public key is not an octet-aligned bit string"))?;

            decode_rsa_key(der).map(PublicKeyMaterial::Rsa)
        }
        other => Err(JwksError::UnsupportedKeyType(format!(
            "key algorithm {}",
            other
        ))),
    }
}

/// Validate a SEC1 point on `curve` and split it into affine coordinates.
///
/// Compressed points are accepted and expanded.
fn decode_ec_point(curve: EcCurve, sec1: &[u8]) -> Result<EcPublicKey, JwksError> {
    let uncompressed = match curve {
        EcCurve::P256 => p256::PublicKey::from_sec1_bytes(sec1)
            .map(|key| key.to_encoded_point(false).as_bytes().to_vec()),
        EcCurve::P384 => p384::PublicKey::from_sec1_bytes(sec1)
            .map(|key| key.to_encoded_point(false).as_bytes().to_vec()),
        EcCurve::P521 => p521::PublicKey::from_sec1_bytes(sec1)
            .map(|key| key.to_encoded_point(false).as_bytes().to_vec()),
    }
    .map_err(|_| invalid_pkix(format!("invalid {} public key point", curve.name())))?;

    let width = curve.coordinate_len();
    match uncompressed.split_first() {
        Some((&SEC1_UNCOMPRESSED, coordinates)) if coordinates.len() == 2 * width => {
            let (x, y) = coordinates.split_at(width);
            Ok(EcPublicKey::from_coordinates(curve, x.to_vec(), y.to_vec()))
        }
        _ => Err(invalid_pkix(format!(
            "unexpected {} point encoding",
            curve.name()
        ))),
    }
}

/// Decode a PKCS#1 `RSAPublicKey` into its raw integers.
///
/// Only structural checks apply: both integers must be positive. Modulus
/// size and exponent value are not restricted.
fn decode_rsa_key(der: &[u8]) -> Result<RsaPublicKey, JwksError> {
    let key = rsa::pkcs1::RsaPublicKey::from_der(der)
        .map_err(|e| invalid_pkix(format!("RSAPublicKey: {}", e)))?;

    let n = strip_leading_zeros(key.modulus.as_bytes());
    let e = strip_leading_zeros(key.public_exponent.as_bytes());
    if n.is_empty() || e.is_empty() {
        return Err(invalid_pkix("RSA modulus and exponent must be positive"));
    }

    Ok(RsaPublicKey::from_components(n.to_vec(), e.to_vec()))
}

/// Format error for DER that decoded but does not describe a usable key.
fn invalid_pkix(detail: impl fmt::Display) -> JwksError {
    JwksError::Format(format!("invalid PKIX structure: {}", detail))
}

/// Drop leading zero bytes of a big-endian integer.
pub(crate) fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bytes.get(start..).unwrap_or_default()
}
