use mockito::Matcher;
use safereport_client::{ReportClient, ReportTransport, SubmitError};
use safereport_core::{EncodedAttachment, Language, ReportForm, ReportPayload};
use serde_json::json;

const PATH: &str = "/api/sendReport";

fn payload() -> ReportPayload {
    let form = ReportForm {
        site: "riyadh".to_string(),
        message: "Irregular invoices".to_string(),
        ..Default::default()
    };
    let attachments = vec![EncodedAttachment {
        filename: "notes.txt".to_string(),
        content: "aGVsbG8=".to_string(),
        content_type: "text/plain".to_string(),
    }];
    ReportPayload::assemble(&form, Language::En, attachments, "compliance@example.com")
}

async fn client_for(server: &mockito::Server) -> ReportClient {
    ReportClient::new(format!("{}{}", server.url(), PATH), None).unwrap()
}

#[tokio::test]
async fn test_success_posts_json_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "name": "Anonymous",
            "email": "Not provided",
            "site": "riyadh",
            "language": "en",
            "recipientEmail": "compliance@example.com",
            "attachments": [{
                "filename": "notes.txt",
                "content": "aGVsbG8=",
                "contentType": "text/plain"
            }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"message":"Report sent"}"#)
        .create_async()
        .await;

    let response = client_for(&server).await.send_report(&payload()).await.unwrap();

    assert_eq!(response.success, Some(true));
    assert_eq!(response.message.as_deref(), Some("Report sent"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_carries_details() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"send failed","details":"mailbox full"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .await
        .send_report(&payload())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SubmitError::Rejected {
            status: Some(500),
            details: Some("mailbox full".to_string()),
            message: "HTTP error! status: 500".to_string(),
        }
    );
    assert_eq!(err.detail(), "mailbox full");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_without_body_uses_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let err = client_for(&server)
        .await
        .send_report(&payload())
        .await
        .unwrap_err();

    assert_eq!(err.detail(), "HTTP error! status: 503");
}

#[tokio::test]
async fn test_success_false_is_a_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Rejected","details":"recipient unknown"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .await
        .send_report(&payload())
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Rejected { status: Some(200), .. }));
    assert_eq!(err.detail(), "recipient unknown");
}

#[tokio::test]
async fn test_non_json_success_body_is_invalid() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body("<html>ok</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .await
        .send_report(&payload())
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Port 1 is reserved and never listening in test environments.
    let client = ReportClient::new("http://127.0.0.1:1/api/sendReport", None).unwrap();
    let err = client.send_report(&payload()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Network(_)));
}
