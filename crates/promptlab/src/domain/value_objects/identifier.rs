//! Identifier - Random entity ids

use uuid::Uuid;

/// Generate a fresh entity id (UUID v4, hyphenated)
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
