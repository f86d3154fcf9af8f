//! HTTP record source backed by the registration store's REST API.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use super::{ConnectionError, LoadReport, RecordSource};

/// Default collection endpoint, relative to the base URL.
pub const DEFAULT_ENDPOINT: &str = "/api/registrations";
const HEALTH_ENDPOINT: &str = "/api/health";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches registrations with `GET {base_url}{endpoint}`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
    endpoint: String,
    timeout: Duration,
}

impl HttpSource {
    /// Creates a source for the given base URL with the default endpoint
    /// and timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the collection endpoint (e.g. `/api/admin/registrations`).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = if endpoint.starts_with('/') {
            endpoint
        } else {
            format!("/{endpoint}")
        };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn registrations_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }

    fn health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_ENDPOINT)
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, ConnectionError> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .map_err(|e| ConnectionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "store returned an error status");
            return Err(ConnectionError::Status {
                code: status.as_u16(),
            });
        }
        Ok(response)
    }

    /// Calls the store's health endpoint and returns its body.
    pub fn check_health(&self) -> Result<String, ConnectionError> {
        let url = self.health_url();
        debug!(url = %url, "checking store health");
        self.get(&url)?
            .text()
            .map_err(|e| ConnectionError::Transport(e.to_string()))
    }
}

impl RecordSource for HttpSource {
    fn fetch_all(&self) -> Result<LoadReport, ConnectionError> {
        let url = self.registrations_url();
        debug!(url = %url, "fetching registrations");

        let body = self
            .get(&url)?
            .bytes()
            .map_err(|e| ConnectionError::Transport(e.to_string()))?;
        let report = LoadReport::from_slice(&body)?;

        info!(
            url = %url,
            records = report.records.len(),
            rejected = report.rejected.len(),
            "registrations fetched"
        );
        Ok(report)
    }

    fn describe(&self) -> String {
        self.registrations_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves exactly one canned HTTP response and returns the request line.
    fn serve_once(status: &str, body: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let status = status.to_string();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            let text = String::from_utf8_lossy(&request).to_string();
            text.lines().next().unwrap_or_default().to_string()
        });
        (format!("http://{addr}"), handle)
    }

    #[test]
    fn test_fetch_all_decodes_array() {
        let (url, server) = serve_once(
            "200 OK",
            r#"[{"_id":"a1","name":"Sarah Chen","email":"sarah.c@uni.edu","registration_type":"student","created_at":"2024-03-11T14:20:00Z"}]"#,
        );
        let source = HttpSource::new(url);
        let report = source.fetch_all().unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].name, "Sarah Chen");

        let request_line = server.join().unwrap();
        assert_eq!(request_line, "GET /api/registrations HTTP/1.1");
    }

    #[test]
    fn test_custom_endpoint() {
        let (url, server) = serve_once("200 OK", "[]");
        let source = HttpSource::new(format!("{url}/")).with_endpoint("api/admin/registrations");
        assert_eq!(
            source.registrations_url(),
            format!("{url}/api/admin/registrations")
        );
        let report = source.fetch_all().unwrap();
        assert!(report.records.is_empty());
        assert_eq!(
            server.join().unwrap(),
            "GET /api/admin/registrations HTTP/1.1"
        );
    }

    #[test]
    fn test_error_status_is_connection_error() {
        let (url, server) = serve_once(
            "500 Internal Server Error",
            r#"{"message":"Failed to fetch registrations"}"#,
        );
        let err = HttpSource::new(url).fetch_all().unwrap_err();
        assert!(matches!(err, ConnectionError::Status { code: 500 }));
        server.join().unwrap();
    }

    #[test]
    fn test_unparseable_body_is_connection_error() {
        let (url, server) = serve_once("200 OK", "not json");
        let err = HttpSource::new(url).fetch_all().unwrap_err();
        assert!(matches!(err, ConnectionError::Payload(_)));
        server.join().unwrap();
    }

    #[test]
    fn test_refused_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpSource::new(format!("http://{addr}"))
            .with_timeout(Duration::from_secs(2))
            .fetch_all()
            .unwrap_err();
        assert!(matches!(err, ConnectionError::Transport(_)));
    }

    #[test]
    fn test_check_health() {
        let (url, server) = serve_once("200 OK", r#"{"status":"ok"}"#);
        let body = HttpSource::new(url).check_health().unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
        assert_eq!(server.join().unwrap(), "GET /api/health HTTP/1.1");
    }
}
