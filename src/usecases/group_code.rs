//! Group-code generation and provisioning.
//!
//! Codes are short, human-shareable, and collision-resistant only in the
//! casual sense (1 in 36^5). Two clients generating concurrently can collide
//! or both provision the same fresh code; the at-least-once, best-effort
//! design accepts that without a transaction.

use anyhow::Result;
use rand::Rng;
use serde_json::{json, Value};

use crate::{store::paths, usecases::contracts::RemoteStore};

const CODE_PREFIX: &str = "grp-";
const CODE_SUFFIX_LEN: usize = 5;
const CODE_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Produces a fresh code: `grp-` plus five random lowercase-alphanumeric
/// characters.
pub fn generate_code<R: Rng>(rng: &mut R) -> String {
    let suffix: String = (0..CODE_SUFFIX_LEN)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect();
    format!("{CODE_PREFIX}{suffix}")
}

/// Ensures the group exists with an empty message list.
///
/// An absent, null, or empty document is overwritten with an empty array so
/// the first fetch finds a well-shaped list. A group that already holds
/// messages is left alone.
pub fn provision(store: &dyn RemoteStore, group_code: &str) -> Result<()> {
    let path = paths::group_messages(group_code);
    let existing = store.get(&path)?;

    if needs_provisioning(existing.as_ref()) {
        store.put(&path, &json!([]))?;
    }

    Ok(())
}

/// Generates a code and provisions its empty message list in one step, the
/// way the join screen requests one.
pub fn request_code<R: Rng>(store: &dyn RemoteStore, rng: &mut R) -> Result<String> {
    let code = generate_code(rng);
    provision(store, &code)?;
    Ok(code)
}

fn needs_provisioning(existing: Option<&Value>) -> bool {
    match existing {
        None => true,
        Some(Value::Object(entries)) => entries.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}
