//! Integration tests for the burrow-client binary.
//!
//! These tests run the built binary with a scrubbed environment and check
//! exit codes and output streams.

use assert_cmd::Command;
use predicates::prelude::*;

use burrow_client::version::full_version;

const FROM: &str = "00112233445566778899AABBCCDDEEFF00112233";
const TO: &str = "FFEEDDCCBBAA99887766554433221100FFEEDDCC";

const CLIENT_VARS: &[&str] = &[
    "BURROW_CLIENT_VERBOSE",
    "BURROW_CLIENT_DEBUG",
    "BURROW_CLIENT_NODE_ADDRESS",
    "BURROW_CLIENT_SIGN_ADDRESS",
    "BURROW_CLIENT_PUBLIC_KEY",
    "BURROW_CLIENT_ADDRESS",
    "CHAIN_ID",
    "RUST_LOG",
];

/// Get a command for running burrow-client with no client variables set.
fn client() -> Command {
    let mut cmd = Command::cargo_bin("burrow-client").unwrap();
    for var in CLIENT_VARS {
        cmd.env_remove(var);
    }
    cmd
}

// =============================================================================
// Root
// =============================================================================

#[test]
fn root_without_command_prints_help() {
    client()
        .assert()
        .success()
        .stdout(predicate::str::contains("interacts with a running burrow chain"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn help_lists_persistent_flags() {
    client()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--debug"))
        .stdout(predicate::str::contains("BURROW_CLIENT_VERBOSE"));
}

#[test]
fn long_help_carries_description_and_version() {
    client()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "burrow-client interacts with a running burrow chain.",
        ))
        .stdout(predicate::str::contains(format!("VERSION: {}", full_version())));
}

#[test]
fn unknown_command_is_usage_error() {
    client()
        .arg("teleport")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("teleport"));
}

#[test]
fn invalid_flag_value_is_usage_error() {
    client().args(["--verbose=perhaps", "version"]).assert().code(2);
}

// =============================================================================
// version
// =============================================================================

#[test]
fn version_prints_full_version() {
    client()
        .arg("version")
        .assert()
        .success()
        .stdout(format!("{}\n", full_version()));
}

#[test]
fn version_unaffected_by_output_flags() {
    client()
        .args(["-v", "-d", "version"])
        .assert()
        .success()
        .stdout(format!("{}\n", full_version()));
}

#[test]
fn version_unaffected_by_environment_flags() {
    client()
        .arg("version")
        .env("BURROW_CLIENT_DEBUG", "true")
        .env("BURROW_CLIENT_VERBOSE", "1")
        .assert()
        .success()
        .stdout(format!("{}\n", full_version()));
}

#[test]
fn unparsable_environment_flag_is_ignored() {
    client()
        .arg("version")
        .env("BURROW_CLIENT_VERBOSE", "maybe")
        .assert()
        .success()
        .stdout(format!("{}\n", full_version()));
}

// =============================================================================
// tx
// =============================================================================

#[test]
fn tx_without_kind_prints_help() {
    client()
        .arg("tx")
        .assert()
        .success()
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("--broadcast"));
}

#[test]
fn formulate_only_prints_transaction() {
    client()
        .args(["tx", "--broadcast=false", "--chain-id", "burrow-test", "--addr", FROM])
        .args(["send", "--amt", "10", "--to", TO])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "send""#))
        .stdout(predicate::str::contains(r#""chain_id": "burrow-test""#))
        .stdout(predicate::str::contains(TO));
}

#[test]
fn sender_taken_from_environment() {
    client()
        .env("BURROW_CLIENT_ADDRESS", FROM)
        .args(["tx", "--broadcast=false", "unbond", "--height", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(FROM));
}

#[test]
fn missing_sender_fails() {
    client()
        .args(["tx", "--broadcast=false", "send", "--amt", "1", "--to", TO])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--addr or --pubkey"));
}

#[test]
fn schemeless_node_address_warns() {
    client()
        .args(["tx", "--broadcast=false", "--node-addr", "127.0.0.1:46657", "--addr", FROM])
        .args(["send", "--amt", "1", "--to", TO])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"));
}

#[test]
fn malformed_recipient_is_usage_error() {
    client()
        .args(["tx", "--addr", FROM, "send", "--amt", "1", "--to", "nothex"])
        .assert()
        .code(2);
}

#[test]
fn broadcast_without_transport_fails() {
    client()
        .args(["tx", "--addr", FROM, "send", "--amt", "1", "--to", TO])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("tcp://127.0.0.1:46657"));
}

// =============================================================================
// status
// =============================================================================

#[test]
fn status_uses_environment_node_address() {
    client()
        .arg("status")
        .env("BURROW_CLIENT_NODE_ADDRESS", "unix:///tmp/burrow-test.sock")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unix:///tmp/burrow-test.sock"));
}

#[test]
fn status_rejects_unknown_field() {
    client()
        .args(["status", "--field", "mood"])
        .assert()
        .code(2);
}

// =============================================================================
// completion
// =============================================================================

#[test]
fn bash_completion_generated() {
    client()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("burrow-client"));
}
