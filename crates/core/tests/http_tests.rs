// ═══════════════════════════════════════════════════════════════════
// HTTP Client Tests — HttpCommitmentsApi against a canned local server
// ═══════════════════════════════════════════════════════════════════

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use commitments_viewer_core::api::http::HttpCommitmentsApi;
use commitments_viewer_core::api::traits::CommitmentsApi;
use commitments_viewer_core::errors::CoreError;
use commitments_viewer_core::models::settings::ClientSettings;
use commitments_viewer_core::CommitmentsViewer;

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — one-shot HTTP server
// ═══════════════════════════════════════════════════════════════════

/// Serve `responses` (status, body) on consecutive connections.
/// The handle yields the raw request head of every connection.
async fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }
            requests.push(String::from_utf8_lossy(&head).into_owned());

            let reason = match status {
                200 => "OK",
                404 => "Not Found",
                _ => "Internal Server Error",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
        requests
    });

    (format!("http://{addr}"), handle)
}

fn client(base_url: &str) -> HttpCommitmentsApi {
    let _ = env_logger::try_init();
    HttpCommitmentsApi::new(&ClientSettings::new(base_url)).unwrap()
}

fn request_line(request: &str) -> &str {
    request.lines().next().unwrap_or_default()
}

const INVESTORS_BODY: &str = r#"{"investors": [
    {"id": 1, "name": "ioo gryffindor fund", "type": "fund manager",
     "date_added": "2000-07-06", "country": "Singapore", "total_commitment": 11000000000}
]}"#;

const TOTALS_BODY: &str =
    r#"{"total_by_asset_class": {"All": 9000000, "Real Estate": 6000000, "Hedge Funds": 3000000}}"#;

const COMMITMENTS_BODY: &str = r#"{"commitments": [
    {"id": 11, "asset_class": "Real Estate", "amount": 6000000, "currency": "GBP"}
]}"#;

// ═══════════════════════════════════════════════════════════════════
// URLs
// ═══════════════════════════════════════════════════════════════════

mod urls {
    use super::*;

    #[test]
    fn built_from_normalised_base() {
        let api = client("http://localhost:8000/");
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.investors_url(), "http://localhost:8000/investors");
        assert_eq!(
            api.asset_class_totals_url(7),
            "http://localhost:8000/investors/7/commitments/total_by_asset_class"
        );
        assert_eq!(
            api.commitments_url(7),
            "http://localhost:8000/investors/7/commitments"
        );
    }

    #[test]
    fn invalid_base_rejected() {
        let result = HttpCommitmentsApi::new(&ClientSettings::new(""));
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Requests and decoding
// ═══════════════════════════════════════════════════════════════════

mod endpoints {
    use super::*;

    #[tokio::test]
    async fn list_investors() {
        let (base, server) = serve(vec![(200, INVESTORS_BODY)]).await;
        let investors = client(&base).list_investors().await.unwrap();

        assert_eq!(investors.len(), 1);
        assert_eq!(investors[0].investor_type, "fund manager");
        let requests = server.await.unwrap();
        assert!(request_line(&requests[0]).starts_with("GET /investors HTTP/1.1"));
    }

    #[tokio::test]
    async fn asset_class_totals() {
        let (base, server) = serve(vec![(200, TOTALS_BODY)]).await;
        let totals = client(&base).get_asset_class_totals(42).await.unwrap();

        let labels: Vec<&str> = totals.labels().collect();
        assert_eq!(labels, vec!["All", "Real Estate", "Hedge Funds"]);
        let requests = server.await.unwrap();
        assert!(request_line(&requests[0])
            .starts_with("GET /investors/42/commitments/total_by_asset_class HTTP/1.1"));
    }

    #[tokio::test]
    async fn unfiltered_commitments_send_no_query() {
        let (base, server) = serve(vec![(200, COMMITMENTS_BODY)]).await;
        let list = client(&base).get_commitments(5, None).await.unwrap();

        assert_eq!(list.len(), 1);
        let requests = server.await.unwrap();
        assert!(request_line(&requests[0]).starts_with("GET /investors/5/commitments HTTP/1.1"));
    }

    #[tokio::test]
    async fn filtered_commitments_encode_label() {
        let (base, server) = serve(vec![(200, COMMITMENTS_BODY)]).await;
        let list = client(&base)
            .get_commitments(5, Some("Real Estate"))
            .await
            .unwrap();

        assert!(list.iter().all(|c| c.asset_class == "Real Estate"));
        let requests = server.await.unwrap();
        assert!(request_line(&requests[0])
            .starts_with("GET /investors/5/commitments?asset_class=Real+Estate HTTP/1.1"));
    }

    #[tokio::test]
    async fn empty_filtered_result() {
        let (base, _server) = serve(vec![(200, r#"{"commitments": []}"#)]).await;
        let list = client(&base).get_commitments(5, Some("Natural Resources")).await.unwrap();
        assert!(list.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Failure modes
// ═══════════════════════════════════════════════════════════════════

mod failures {
    use super::*;

    #[tokio::test]
    async fn not_found_status() {
        let (base, _server) = serve(vec![(404, r#"{"detail": "Not Found"}"#)]).await;
        let err = client(&base).get_asset_class_totals(999).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)), "got {err:?}");
        assert!(err.to_string().contains("999"));
    }

    #[tokio::test]
    async fn server_error_is_network_error() {
        let (base, _server) = serve(vec![(500, "Internal Server Error")]).await;
        let err = client(&base).list_investors().await.unwrap_err();
        assert!(matches!(err, CoreError::Network(_)), "got {err:?}");
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn wrong_shape_is_decode_error() {
        let (base, _server) = serve(vec![(200, r#"{"investors": "nope"}"#)]).await;
        let err = client(&base).list_investors().await.unwrap_err();
        assert!(matches!(err, CoreError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}"))
            .get_commitments(1, None)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Network(_)), "got {err:?}");
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn transport_error_redacts_query_string() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}"))
            .get_commitments(1, Some("Real Estate"))
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, CoreError::Network(_)), "got {err:?}");
        assert!(msg.contains("<query redacted>"), "got {msg}");
        assert!(!msg.contains("asset_class"), "got {msg}");
        assert!(!msg.contains("Real"), "got {msg}");
    }
}

// ═══════════════════════════════════════════════════════════════════
// End to end through the facade
// ═══════════════════════════════════════════════════════════════════

mod viewer {
    use super::*;

    #[tokio::test]
    async fn start_loads_investors_over_http() {
        let (base, _server) = serve(vec![(200, INVESTORS_BODY)]).await;
        let viewer = CommitmentsViewer::start(&ClientSettings::new(base)).await.unwrap();

        assert_eq!(viewer.state().investors.len(), 1);
        assert!(viewer.render().contains("Ioo Gryffindor Fund"));
        assert!(viewer.render().contains("£11.0B"));
    }

    #[tokio::test]
    async fn start_survives_unreachable_backend() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let viewer = CommitmentsViewer::start(&ClientSettings::new(format!("http://{addr}")))
            .await
            .unwrap();
        let state = viewer.state();
        assert!(state.investors.is_empty());
        assert_eq!(state.failures.len(), 1);
    }
}
