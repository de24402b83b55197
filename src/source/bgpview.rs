//! Prefix lookup against the BGPView REST API.
//!
//! One GET per ASN; the body is decoded with `serde_path_to_error` so a
//! schema change reports the exact JSON path that broke.

use crate::config;
use crate::error::{NetworkError, Result};
use crate::models::Asn;
use serde::{Deserialize, Serialize};

/// Raw prefix strings as announced for an ASN, before any parsing.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct RawPrefixes {
    pub ipv4: Vec<String>,
    pub ipv6: Vec<String>,
}

/// Top level of the `/asn/{asn}/prefixes` response.
#[derive(Deserialize, Debug)]
struct PrefixesResponse {
    data: PrefixesData,
}

#[derive(Deserialize, Debug)]
struct PrefixesData {
    ipv4_prefixes: Vec<PrefixEntry>,
    ipv6_prefixes: Vec<PrefixEntry>,
}

/// A single announced prefix. Other fields (name, roa_status, parent ...) are ignored.
#[derive(Deserialize, Debug)]
struct PrefixEntry {
    prefix: String,
}

/// Fetch the announced prefixes of `asn` from the public API.
pub async fn fetch_prefixes(asn: Asn) -> Result<RawPrefixes> {
    fetch_prefixes_from(config::API_BASE, asn).await
}

/// Fetch the announced prefixes of `asn` from the API rooted at `api_base`.
///
/// # Arguments
/// * `api_base` - Scheme and host of the API, e.g. `https://api.bgpview.io`
/// * `asn` - The ASN to look up
///
/// # Returns
/// * `Ok(RawPrefixes)` - IPv4 and IPv6 prefix strings in response order
/// * `Err(Error::NetworkFailure)` - Connection error, non-success status or unexpected body
pub async fn fetch_prefixes_from(api_base: &str, asn: Asn) -> Result<RawPrefixes> {
    let url = config::prefixes_url(api_base, asn);
    log::info!("GET {url}");

    let request_error = |source: reqwest::Error| NetworkError::Request {
        url: url.clone(),
        source,
    };

    // Client lives for this call only; dropping it closes the connection on every path.
    let client = reqwest::Client::builder()
        .user_agent(config::USER_AGENT)
        .no_proxy()
        .build()
        .map_err(request_error)?;

    let response = client.get(&url).send().await.map_err(request_error)?;
    let status = response.status();
    log::debug!("{url} => HTTP {status}");
    if !status.is_success() {
        log::warn!("prefix lookup for {asn} failed with HTTP {status}");
        return Err(NetworkError::Status {
            url: url.clone(),
            status,
        }
        .into());
    }

    let body = response.text().await.map_err(request_error)?;
    log::debug!("received {} bytes from {url}", body.len());

    parse_prefixes_response(&body)
}

/// Decode a prefixes response body into [`RawPrefixes`].
pub fn parse_prefixes_response(body: &str) -> Result<RawPrefixes> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let parsed: PrefixesResponse =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            log::trace!("BODY START:\n\n{body}\n\nBODY END\n");
            NetworkError::Body {
                path: e.path().to_string(),
                reason: e.inner().to_string(),
            }
        })?;

    let raw = RawPrefixes {
        ipv4: parsed
            .data
            .ipv4_prefixes
            .into_iter()
            .map(|p| p.prefix)
            .collect(),
        ipv6: parsed
            .data
            .ipv6_prefixes
            .into_iter()
            .map(|p| p.prefix)
            .collect(),
    };
    log::info!(
        "got raw prefixes ipv4={} ipv6={}",
        raw.ipv4.len(),
        raw.ipv6.len()
    );
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const AS714_FIXTURE: &str = "src/tests/test_data/bgpview_as714_prefixes.json";

    fn read_fixture(path: &str) -> String {
        std::fs::read_to_string(path).expect("Error reading test fixture")
    }

    /// Serve exactly one HTTP response on a local port, returning the API base URL.
    async fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Error binding test listener");
        let addr = listener.local_addr().expect("Error reading local addr");

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("Error accepting");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.expect("Error reading request");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("Error writing response");
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}")
    }

    #[test]
    fn test_parse_fixture() {
        let raw = parse_prefixes_response(&read_fixture(AS714_FIXTURE))
            .expect("Error parsing fixture");
        assert_eq!(raw.ipv4.len(), 6);
        assert_eq!(raw.ipv6.len(), 4);
        assert_eq!(raw.ipv4[0], "17.0.0.0/9");
        assert_eq!(raw.ipv6[0], "2620:149::/36");
    }

    #[test]
    fn test_parse_missing_data_reports_path() {
        let err = parse_prefixes_response(&read_fixture(
            "src/tests/test_data/bgpview_missing_prefixes.json",
        ))
        .unwrap_err();
        match err {
            Error::NetworkFailure(NetworkError::Body { path, reason }) => {
                assert_eq!(path, "data");
                assert!(reason.contains("ipv6_prefixes"), "reason: {reason}");
            }
            other => panic!("expected body error, got {other}"),
        }
    }

    #[test]
    fn test_parse_entry_without_prefix() {
        let body = r#"{"data":{"ipv4_prefixes":[{"ip":"1.1.1.0","cidr":24}],"ipv6_prefixes":[]}}"#;
        match parse_prefixes_response(body).unwrap_err() {
            Error::NetworkFailure(NetworkError::Body { path, .. }) => {
                assert_eq!(path, "data.ipv4_prefixes[0]");
            }
            other => panic!("expected body error, got {other}"),
        }
    }

    #[test]
    fn test_parse_not_json() {
        let err = parse_prefixes_response("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::NetworkFailure(NetworkError::Body { .. })));
    }

    #[test]
    fn test_parse_empty_lists() {
        let raw = parse_prefixes_response(
            r#"{"status":"ok","data":{"ipv4_prefixes":[],"ipv6_prefixes":[]}}"#,
        )
        .unwrap();
        assert_eq!(raw, RawPrefixes::default());
    }

    #[tokio::test]
    async fn test_fetch_prefixes_from_local_server() {
        let api_base = serve_once("200 OK", read_fixture(AS714_FIXTURE)).await;
        let raw = fetch_prefixes_from(&api_base, Asn::new(714).unwrap())
            .await
            .expect("Error fetching from local server");
        assert_eq!(raw.ipv4.len(), 6);
        assert_eq!(raw.ipv6.len(), 4);
    }

    #[tokio::test]
    async fn test_fetch_prefixes_http_error_status() {
        let api_base = serve_once("500 Internal Server Error", "{}".to_string()).await;
        let err = fetch_prefixes_from(&api_base, Asn::new(714).unwrap())
            .await
            .unwrap_err();
        match err {
            Error::NetworkFailure(NetworkError::Status { status, url }) => {
                assert_eq!(status.as_u16(), 500);
                assert!(url.ends_with("/asn/714/prefixes"), "url: {url}");
            }
            other => panic!("expected status error, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_prefixes_connection_refused() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetch_prefixes_from(&format!("http://{addr}"), Asn::new(714).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::NetworkFailure(NetworkError::Request { .. })
        ));
    }
}
