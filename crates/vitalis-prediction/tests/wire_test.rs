//! Wire-level tests for `PredictionClient` against a canned HTTP server.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;

use vitalis_core::config::PredictionConfig;
use vitalis_core::errors::PredictionError;
use vitalis_core::models::PredictionResult;
use vitalis_prediction::PredictionClient;

/// A throwaway HTTP server that answers each accepted connection with
/// the next canned response and records the raw requests it saw.
struct MockServer {
    base_url: String,
    requests: mpsc::Receiver<String>,
    handle: thread::JoinHandle<()>,
}

impl MockServer {
    fn spawn(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("local addr");
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().expect("accept");
                let request = read_http_request(&mut stream);
                tx.send(request).ok();

                let reason = match status {
                    200 => "OK",
                    500 => "Internal Server Error",
                    _ => "Error",
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).expect("write response");
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests: rx,
            handle,
        }
    }

    fn client(&self) -> PredictionClient {
        let config = PredictionConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
        };
        PredictionClient::new(&config).expect("build client")
    }

    fn finish(self) -> Vec<String> {
        self.handle.join().expect("server thread");
        self.requests.try_iter().collect()
    }
}

/// Read one full HTTP request (headers plus Content-Length body).
fn read_http_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

#[test]
fn binary_one_resolves_positive() {
    let server = MockServer::spawn(vec![(200, r#"{"prediction": 1}"#)]);
    let result = server.client().predict(&test_fixtures::sample_features()).unwrap();
    assert_eq!(result, PredictionResult::Binary(true));
    assert_eq!(result.summary(), "positive");
    server.finish();
}

#[test]
fn binary_zero_resolves_negative() {
    let server = MockServer::spawn(vec![(200, r#"{"prediction": 0}"#)]);
    let result = server.client().predict(&test_fixtures::sample_features()).unwrap();
    assert_eq!(result.summary(), "negative");
    server.finish();
}

#[test]
fn graded_response_formats_probability() {
    let server = MockServer::spawn(vec![(200, r#"{"risk_level": "Low", "probability": 0.153}"#)]);
    let result = server.client().predict(&test_fixtures::sample_features()).unwrap();
    assert_eq!(result.summary(), "Low Risk (15.3% probability)");
    server.finish();
}

#[test]
fn http_500_is_server_error_with_status_in_message() {
    let server = MockServer::spawn(vec![(500, r#"{"detail": "model not loaded"}"#)]);
    let err = server
        .client()
        .predict(&test_fixtures::sample_features())
        .unwrap_err();
    assert!(matches!(err, PredictionError::ServerError { status: 500 }));
    assert!(err.to_string().contains("500"));
    server.finish();
}

#[test]
fn empty_object_body_is_invalid_shape() {
    let server = MockServer::spawn(vec![(200, "{}")]);
    let err = server
        .client()
        .predict(&test_fixtures::sample_features())
        .unwrap_err();
    assert!(matches!(err, PredictionError::InvalidResponseShape { .. }));
    server.finish();
}

#[test]
fn non_json_body_is_invalid_shape() {
    let server = MockServer::spawn(vec![(200, "not json at all")]);
    let err = server
        .client()
        .predict(&test_fixtures::sample_features())
        .unwrap_err();
    assert!(matches!(err, PredictionError::InvalidResponseShape { .. }));
    server.finish();
}

#[test]
fn connection_refused_is_transport_failure() {
    // Bind then drop to get a port with nothing listening on it.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = PredictionConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        timeout_secs: 2,
    };
    let client = PredictionClient::new(&config).unwrap();
    let err = client
        .predict(&test_fixtures::sample_features())
        .unwrap_err();
    assert!(matches!(err, PredictionError::TransportFailure { .. }));
}

#[test]
fn identical_calls_issue_two_requests() {
    let server = MockServer::spawn(vec![
        (200, r#"{"prediction": 1}"#),
        (200, r#"{"prediction": 1}"#),
    ]);
    let client = server.client();
    let features = test_fixtures::sample_features();

    let first = client.predict(&features).unwrap();
    let second = client.predict(&features).unwrap();
    assert_eq!(first, second);

    let requests = server.finish();
    assert_eq!(requests.len(), 2, "no caching: every call hits the wire");
    for request in &requests {
        assert!(request.starts_with("POST /predict"));
        assert!(request.contains(r#""features""#));
    }
}

#[test]
fn request_body_carries_positional_features() {
    let server = MockServer::spawn(vec![(200, r#"{"prediction": 0}"#)]);
    server.client().predict(&test_fixtures::sample_features()).unwrap();

    let requests = server.finish();
    let body = requests[0]
        .split("\r\n\r\n")
        .nth(1)
        .expect("request has a body");
    let parsed: serde_json::Value = serde_json::from_str(body).unwrap();
    let features = parsed["features"].as_array().unwrap();
    assert_eq!(features.len(), 8);
    assert_eq!(features[1].as_f64(), Some(148.0));
}

#[test]
fn health_probe_decodes_status() {
    let server = MockServer::spawn(vec![(200, r#"{"status": "healthy", "model_loaded": true}"#)]);
    let health = server.client().health().unwrap();
    assert!(health.is_ready());

    let requests = server.finish();
    assert!(requests[0].starts_with("GET /health"));
}
