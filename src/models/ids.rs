//! Identifier generation
//!
//! Records are keyed by free-form string ids supplied by the user. When the
//! command line is given no id, one is generated from a random UUID with a
//! short type prefix.

use uuid::Uuid;

/// Prefix for generated account ids
pub const ACCOUNT_PREFIX: &str = "acc-";
/// Prefix for generated transaction ids
pub const TRANSACTION_PREFIX: &str = "txn-";
/// Prefix for generated budget ids
pub const BUDGET_PREFIX: &str = "bud-";

/// Generate a short id such as `acc-1a2b3c4d`
pub fn generate_id(prefix: &str) -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}{}", prefix, &uuid[..8])
}
