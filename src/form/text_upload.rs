// SPDX-License-Identifier: MPL-2.0
//! Text file upload over HTTP multipart form data.
//!
//! The endpoint contract is a single `file` field carrying the raw bytes;
//! the success response is a JSON object with a `content` string field
//! holding the decoded text.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Errors that can occur during a text upload round trip.
#[derive(Debug, Clone)]
pub enum UploadError {
    /// Server reachable but the response status was not success.
    BadStatus,
    /// The chosen file could not be read.
    Io(String),
    /// The request failed in transit.
    Transport(String),
    /// The response body was not the expected JSON shape.
    InvalidResponse(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::BadStatus => write!(f, "Network response was not ok"),
            UploadError::Io(msg) => write!(f, "{msg}"),
            UploadError::Transport(msg) => write!(f, "{msg}"),
            UploadError::InvalidResponse(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for UploadError {}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    content: String,
}

/// Posts the file at `path` as the single `file` field of a multipart form
/// and returns the text content echoed back by the endpoint.
///
/// No retry and no timeout; stale completions are filtered out by the
/// caller's generation check.
pub async fn upload_text_file(endpoint: String, path: PathBuf) -> Result<String, UploadError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload.txt")
        .to_string();

    let client = reqwest::Client::builder()
        .user_agent("IcedDropzone/0.1.0")
        .build()
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = client
        .post(&endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(UploadError::BadStatus);
    }

    let body: UploadResponse = response
        .json()
        .await
        .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

    Ok(body.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
    }

    /// Serves exactly one canned HTTP response on a loopback port and sends
    /// the raw request bytes back through the returned channel.
    async fn serve_once(
        status_line: &'static str,
        body: String,
    ) -> (SocketAddr, oneshot::Receiver<Vec<u8>>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind loopback listener");
        let addr = listener.local_addr().expect("listener has no local addr");
        let (request_tx, request_rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept failed");

            // Drain the request: headers, then Content-Length body bytes.
            let mut request = Vec::new();
            let mut chunk = [0u8; 4096];
            let header_end = loop {
                let n = stream.read(&mut chunk).await.expect("read failed");
                if n == 0 {
                    break None;
                }
                request.extend_from_slice(&chunk[..n]);
                if let Some(pos) = find_subsequence(&request, b"\r\n\r\n") {
                    break Some(pos + 4);
                }
            };
            if let Some(header_end) = header_end {
                let headers = String::from_utf8_lossy(&request[..header_end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                let mut remaining =
                    content_length.saturating_sub(request.len() - header_end);
                while remaining > 0 {
                    let n = stream.read(&mut chunk).await.expect("read failed");
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&chunk[..n]);
                    remaining = remaining.saturating_sub(n);
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len(),
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("write failed");
            let _ = stream.shutdown().await;
            let _ = request_tx.send(request);
        });

        (addr, request_rx)
    }

    fn write_temp_text_file(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, content).expect("failed to write temp file");
        (dir, path)
    }

    #[tokio::test]
    async fn upload_returns_content_on_success() {
        let body = serde_json::json!({ "content": "hello" }).to_string();
        let (addr, _request) = serve_once("200 OK", body).await;
        let (_dir, path) = write_temp_text_file("hello");

        let content = upload_text_file(format!("http://{addr}/uploadfile/"), path)
            .await
            .expect("upload should succeed");

        assert_eq!(content, "hello");
    }

    #[tokio::test]
    async fn upload_sends_single_multipart_file_field() {
        let body = serde_json::json!({ "content": "ok" }).to_string();
        let (addr, request) = serve_once("200 OK", body).await;
        let (_dir, path) = write_temp_text_file("line one\nline two\n");

        upload_text_file(format!("http://{addr}/uploadfile/"), path)
            .await
            .expect("upload should succeed");

        let request = request.await.expect("request was not captured");
        let request_text = String::from_utf8_lossy(&request);
        assert!(request_text.contains("POST /uploadfile/"));
        assert!(request_text.contains(r#"name="file""#));
        assert!(request_text.contains(r#"filename="notes.txt""#));
        assert!(request_text.contains("line one\nline two\n"));
    }

    #[tokio::test]
    async fn upload_maps_non_success_status_to_bad_status() {
        let (addr, _request) = serve_once("500 Internal Server Error", "{}".to_string()).await;
        let (_dir, path) = write_temp_text_file("hello");

        let err = upload_text_file(format!("http://{addr}/uploadfile/"), path)
            .await
            .expect_err("500 should fail the upload");

        assert!(matches!(err, UploadError::BadStatus));
        assert_eq!(err.to_string(), "Network response was not ok");
    }

    #[tokio::test]
    async fn upload_rejects_malformed_response_body() {
        let (addr, _request) = serve_once("200 OK", "not json at all".to_string()).await;
        let (_dir, path) = write_temp_text_file("hello");

        let err = upload_text_file(format!("http://{addr}/uploadfile/"), path)
            .await
            .expect_err("malformed body should fail the upload");

        assert!(matches!(err, UploadError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn upload_reports_transport_failure_when_unreachable() {
        // Bind then immediately drop the listener so the port refuses
        // connections.
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind loopback listener");
        let addr = listener.local_addr().expect("listener has no local addr");
        drop(listener);

        let (_dir, path) = write_temp_text_file("hello");
        let err = upload_text_file(format!("http://{addr}/uploadfile/"), path)
            .await
            .expect_err("connection refused should fail the upload");

        assert!(matches!(err, UploadError::Transport(_)));
    }

    #[tokio::test]
    async fn upload_reports_missing_file_as_io_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("does_not_exist.txt");

        let err = upload_text_file(
            "http://127.0.0.1:8000/uploadfile/".to_string(),
            missing,
        )
        .await
        .expect_err("missing file should fail before any request");

        assert!(matches!(err, UploadError::Io(_)));
    }
}
