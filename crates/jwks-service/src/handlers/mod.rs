pub mod jwks_handler;
