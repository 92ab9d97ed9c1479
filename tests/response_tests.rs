use fn_adapter::core::models::OutboundResponse;

#[test]
fn test_response_serializes_camel_case() {
    let payload = serde_json::to_string(&OutboundResponse::text(200, "Hello, world!")).unwrap();

    assert!(payload.contains("\"statusCode\":200"));
    assert!(payload.contains("\"isBase64Encoded\":false"));
    assert!(payload.contains("\"Content-Type\":\"text/plain\""));
    assert!(payload.contains("\"body\":\"Hello, world!\""));
}

#[test]
fn test_no_content_response() {
    let response = OutboundResponse::no_content();

    assert_eq!(response.status_code, 204);
    assert!(response.body.is_empty());
    assert!(response.headers.is_empty());
    assert!(!response.is_base64_encoded);
}

#[test]
fn test_error_response_body() {
    let response = OutboundResponse::error(400, "Malformed input: schedule body is empty");

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(
        body.get("error").and_then(|v| v.as_str()),
        Some("Malformed input: schedule body is empty")
    );
}
