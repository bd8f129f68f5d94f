//! End-to-end client tests against a one-shot TCP stub standing in for the
//! simulator service.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use qd_client::{ClientError, SimulatorClient};
use qd_wire::{AnalyzeParams, SimulateParams};

/// Serve exactly one HTTP exchange with a canned response and return the
/// base URL pointing at the stub.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");

        // Drain the request fully (headers, then content-length bytes of
        // body) before answering.
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let (header_end, content_length) = loop {
            let n = stream.read(&mut chunk).expect("read request");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find_header_end(&buf) {
                break (pos, content_length_of(&buf[..pos]));
            }
        };
        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).expect("read request body");
            buf.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
    });

    format!("http://{addr}")
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn content_length_of(headers: &[u8]) -> usize {
    let text = String::from_utf8_lossy(headers);
    text.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.trim()
                .eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0)
}

#[test]
fn simulate_round_trips_against_stub() {
    let base = serve_once(
        "200 OK",
        r#"{"qber": 0.0123, "sifted_length": 48, "key_length": 40,
            "detected_eve": false,
            "alice_final_key": [0, 1, 0, 1], "bob_final_key": [0, 1, 0, 1],
            "alice_sifted_key": [0, 1, 0, 1, 1], "bob_sifted_key": [0, 1, 0, 1, 1]}"#,
    );
    let client = SimulatorClient::new(base).expect("build client");

    let result = client
        .simulate(&SimulateParams {
            n_qubits: Some(100),
            noise_prob: Some(0.05),
            eve_prob: Some(0.0),
        })
        .expect("simulate should decode");

    assert_eq!(result.qber, 0.0123);
    assert_eq!(result.key_length, 40);
    assert!(!result.detected_eve);
}

#[test]
fn service_fault_surfaces_its_message() {
    let base = serve_once("400 BAD REQUEST", r#"{"error": "n_qubits must be positive"}"#);
    let client = SimulatorClient::new(base).expect("build client");

    let err = client
        .analyze(&AnalyzeParams {
            n_runs: Some(10),
            n_qubits: None,
        })
        .expect_err("400 must not decode");

    match err {
        ClientError::Remote { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "n_qubits must be positive");
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let base = serve_once("200 OK", r#"{"totally": "unexpected"}"#);
    let client = SimulatorClient::new(base).expect("build client");

    let err = client
        .simulate(&SimulateParams {
            n_qubits: Some(10),
            noise_prob: Some(0.0),
            eve_prob: Some(0.0),
        })
        .expect_err("shape mismatch must not decode");

    assert!(matches!(err, ClientError::Decode { .. }));
}

#[test]
fn unreachable_service_is_a_network_error() {
    // Bind then drop so the port is known-closed.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = SimulatorClient::new(format!("http://{addr}")).expect("build client");
    let err = client
        .analyze(&AnalyzeParams {
            n_runs: Some(1),
            n_qubits: Some(10),
        })
        .expect_err("nothing is listening");

    assert!(matches!(err, ClientError::Network(_)));
}
