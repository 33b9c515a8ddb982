//! HTTP transport shared by every model handle of a client.

use reqwest::{Client, RequestBuilder};
use std::time::Duration;

/// A pooled `reqwest` client plus the timeout applied to each request.
///
/// The timeout lives here rather than inside the `reqwest::Client` so it can
/// still be changed after a caller-supplied client has been installed.
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport backed by a default `reqwest` client.
    pub fn new(timeout: Duration) -> Self {
        Self::with_client(Client::new(), timeout)
    }

    /// Wrap an existing `reqwest` client.
    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Create a transport that routes all traffic through `proxy_url`.
    pub fn with_proxy(proxy_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .proxy(reqwest::Proxy::all(proxy_url)?)
            .build()?;
        Ok(Self::with_client(client, timeout))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Start a POST request carrying this transport's timeout.
    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.client.post(url).timeout(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_timeout() {
        let mut transport = HttpTransport::new(Duration::from_secs(30));
        transport.set_timeout(Duration::from_secs(5));
        assert_eq!(transport.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_with_proxy() {
        let transport =
            HttpTransport::with_proxy("http://proxy.example.com:8080", Duration::from_secs(10));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_post_carries_timeout() {
        let transport = HttpTransport::new(Duration::from_secs(7));
        let request = transport.post("http://localhost/completion").build().unwrap();
        assert_eq!(request.timeout(), Some(&Duration::from_secs(7)));
    }
}
