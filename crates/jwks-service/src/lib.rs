//! JWKS Publisher Library
//!
//! Loads one PKIX public key from a PEM file, derives its JSON Web Key
//! (RFC 7517) and serves the resulting key set over HTTP.
//!
//! # Modules
//!
//! - `config` - Command-line and environment configuration
//! - `crypto` - PEM / SubjectPublicKeyInfo parsing into typed key material
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `models` - JWK and JWKS data models
//! - `observability` - Metrics
//! - `routes` - HTTP router
//! - `services` - Key loading and JWKS encoding

pub mod config;
pub mod crypto;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod routes;
pub mod services;
