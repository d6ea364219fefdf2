#![deny(unsafe_code)]

use sha2::Digest;

/// SHA-256 of a raw catalogue document, lowercase hex.
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}
