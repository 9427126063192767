use std::time::Duration;

use assert_cmd::Command;

/// The server should shut down cleanly when its transport closes
#[test]
fn test_server_exits_cleanly_on_eof() {
    let mut cmd = Command::cargo_bin("mcp-server-datetimeday").unwrap();
    let assert = cmd.timeout(Duration::from_secs(30)).write_stdin("").assert();

    assert.success();
}

/// An initialize request should produce a JSON-RPC response before shutdown
#[test]
fn test_initialize_handshake() {
    let request = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":"#,
        r#"{"protocolVersion":"2024-11-05","capabilities":{},"#,
        r#""clientInfo":{"name":"smoke-test","version":"0.0.0"}}}"#,
        "\n",
    );

    let mut cmd = Command::cargo_bin("mcp-server-datetimeday").unwrap();
    let assert = cmd
        .timeout(Duration::from_secs(30))
        .write_stdin(request)
        .assert();

    assert.success().stdout(predicates::str::contains("jsonrpc"));
}
