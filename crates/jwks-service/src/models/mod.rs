use serde::{Deserialize, Serialize};

/// JWKS document (RFC 7517 §5)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<JsonWebKey>,
}

/// JSON Web Key (RFC 7517 §4)
///
/// Serialized field order is `kty`, `kid`, `use`, `alg`, then the
/// key-type specific parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWebKey {
    pub kty: String, // Key Type ("EC" or "RSA")
    pub kid: String, // Key ID
    #[serde(rename = "use")]
    pub use_: String, // Public key use (e.g., "sig")
    pub alg: String, // Algorithm (e.g., "ES256")
    #[serde(flatten)]
    pub params: JwkParams,
}

/// Key-type specific public parameters (RFC 7518 §6)
///
/// All values are base64url without padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JwkParams {
    Ec { crv: String, x: String, y: String },
    Rsa { n: String, e: String },
}

/// Static metadata attached to the published key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwkMetadata {
    pub kid: String,
    pub use_: String,
    /// Overrides the algorithm derived from the key when set.
    pub alg: Option<String>,
}

impl Default for JwkMetadata {
    fn default() -> Self {
        Self {
            kid: DEFAULT_KEY_ID.to_string(),
            use_: DEFAULT_KEY_USE.to_string(),
            alg: None,
        }
    }
}

/// Key ID published when none is configured.
pub const DEFAULT_KEY_ID: &str = "test-key";

/// Signature verification use (RFC 7517 §4.2).
pub const DEFAULT_KEY_USE: &str = "sig";
