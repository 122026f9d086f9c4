//! core::config::env
//!
//! Environment-derived flag defaults.
//!
//! # Policy
//!
//! Every resolver re-reads the process environment on each call. A variable
//! that is unset, empty, or (for booleans) unparsable yields the supplied
//! fallback. Parse failures are never reported: a malformed environment must
//! not block startup.
//!
//! # Accepted booleans
//!
//! - true: `1`, `t`, `T`, `TRUE`, `true`, `True`
//! - false: `0`, `f`, `F`, `FALSE`, `false`, `False`
//!
//! # Example
//!
//! ```
//! use burrow_client::core::config::env::{parse_bool, resolve_bool_default};
//!
//! assert_eq!(parse_bool("T"), Some(true));
//! assert_eq!(parse_bool("yes"), None);
//! assert!(resolve_bool_default("BURROW_CLIENT_DOC_UNSET_FLAG", true));
//! ```

use std::env;

pub const VERBOSE_VAR: &str = "BURROW_CLIENT_VERBOSE";
pub const DEBUG_VAR: &str = "BURROW_CLIENT_DEBUG";
pub const NODE_ADDRESS_VAR: &str = "BURROW_CLIENT_NODE_ADDRESS";
pub const SIGN_ADDRESS_VAR: &str = "BURROW_CLIENT_SIGN_ADDRESS";
pub const PUBLIC_KEY_VAR: &str = "BURROW_CLIENT_PUBLIC_KEY";
pub const ADDRESS_VAR: &str = "BURROW_CLIENT_ADDRESS";
pub const CHAIN_ID_VAR: &str = "CHAIN_ID";

pub const DEFAULT_NODE_ADDRESS: &str = "tcp://127.0.0.1:46657";
pub const DEFAULT_SIGN_ADDRESS: &str = "http://127.0.0.1:4767";

/// Parse a boolean from its conventional textual forms.
///
/// Returns `None` for anything outside the accepted set.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Read `var` and parse it as a boolean, falling back to `fallback` when
/// the variable is unset, empty or unparsable.
pub fn resolve_bool_default(var: &str, fallback: bool) -> bool {
    match non_empty_var(var) {
        Some(value) => match parse_bool(&value) {
            Some(parsed) => parsed,
            None => {
                tracing::trace!(var, value = %value, "ignoring unparsable boolean");
                fallback
            }
        },
        None => fallback,
    }
}

/// Read `var` verbatim, falling back to `fallback` when unset or empty.
pub fn resolve_string_default(var: &str, fallback: &str) -> String {
    non_empty_var(var).unwrap_or_else(|| fallback.to_string())
}

/// Default for `--verbose`; respects `$BURROW_CLIENT_VERBOSE`.
pub fn default_verbose() -> bool {
    resolve_bool_default(VERBOSE_VAR, false)
}

/// Default for `--debug`; respects `$BURROW_CLIENT_DEBUG`.
pub fn default_debug() -> bool {
    resolve_bool_default(DEBUG_VAR, false)
}

/// Default for `--node-addr`; respects `$BURROW_CLIENT_NODE_ADDRESS`.
pub fn default_node_address() -> String {
    resolve_string_default(NODE_ADDRESS_VAR, DEFAULT_NODE_ADDRESS)
}

/// Default for `--sign-addr`; respects `$BURROW_CLIENT_SIGN_ADDRESS`.
pub fn default_sign_address() -> String {
    resolve_string_default(SIGN_ADDRESS_VAR, DEFAULT_SIGN_ADDRESS)
}

/// Default for `--pubkey`; respects `$BURROW_CLIENT_PUBLIC_KEY`.
pub fn default_public_key() -> String {
    resolve_string_default(PUBLIC_KEY_VAR, "")
}

/// Default for `--addr`; respects `$BURROW_CLIENT_ADDRESS`.
pub fn default_address() -> String {
    resolve_string_default(ADDRESS_VAR, "")
}

/// Default for `--chain-id`; respects `$CHAIN_ID`.
pub fn default_chain_id() -> String {
    resolve_string_default(CHAIN_ID_VAR, "")
}

/// Non-UTF-8 values count as unset.
fn non_empty_var(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.is_empty())
}

/// Serializes unit tests that touch the `BURROW_CLIENT_*` variables, which
/// are also read when the command tree is registered.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::Mutex;
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
