use std::collections::HashMap;

use fn_adapter::adapter::InvocationAdapter;
use fn_adapter::adapter::diagnostics::MemorySink;
use fn_adapter::core::models::InboundEvent;
use fn_adapter::handlers::HelloWorld;

fn event_with(body: &str, headers: &[(&str, &str)]) -> InboundEvent {
    InboundEvent {
        path: "/.netlify/functions/hello-world".to_string(),
        http_method: Some("GET".to_string()),
        headers: headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<HashMap<_, _>>(),
        body: body.to_string(),
        is_base64_encoded: false,
    }
}

#[test]
fn test_hello_world_ignores_input() {
    let adapter = InvocationAdapter::with_sink(HelloWorld, MemorySink::new());

    let inputs = [
        event_with("", &[]),
        event_with("not json at all", &[("X-Custom", "1")]),
        event_with(r#"{"next_run":"2024-01-01T10:00:00Z"}"#, &[("x-nf-event", "schedule")]),
        InboundEvent::default(),
    ];

    for event in &inputs {
        let response = adapter.invoke(event);
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("text/plain")
        );
        assert_eq!(response.body, "Hello, world!");
        assert!(!response.is_base64_encoded);
    }
}

#[test]
fn test_hello_world_is_idempotent() {
    let adapter = InvocationAdapter::with_sink(HelloWorld, MemorySink::new());
    let event = event_with("payload", &[("Accept", "*/*")]);

    let first = serde_json::to_vec(&adapter.invoke(&event)).unwrap();
    let second = serde_json::to_vec(&adapter.invoke(&event)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_hello_world_emits_one_diagnostic_per_call() {
    let sink = MemorySink::new();
    let adapter = InvocationAdapter::with_sink(HelloWorld, &sink);

    adapter.invoke(&event_with("", &[]));
    adapter.invoke(&event_with("", &[]));

    let entries = sink.entries();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|d| d.handler == "hello-world"));
}
