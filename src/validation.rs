//! Field validation for identity data.
//!
//! Both limits are byte lengths:
//! - Name: 0-20 bytes (empty clears the name)
//! - Image hash: empty, or exactly 46 bytes (a base58 CIDv0 such as `Qm...`)
//!
//! The hash content itself is not inspected; the image store is addressed
//! by whatever string the owner provides.

use soroban_sdk::String;

/// Maximum name length in bytes.
pub const MAX_NAME_LENGTH: u32 = 20;

/// Required image hash length in bytes when set.
pub const IMAGE_HASH_LENGTH: u32 = 46;

/// Check a name against the length limit.
pub fn validate_name(name: &String) -> bool {
    name.len() <= MAX_NAME_LENGTH
}

/// Check an image hash: either unset or exactly `IMAGE_HASH_LENGTH` bytes.
pub fn validate_image_hash(image_hash: &String) -> bool {
    let len = image_hash.len();
    len == 0 || len == IMAGE_HASH_LENGTH
}
