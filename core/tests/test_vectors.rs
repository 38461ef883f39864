//! Verify `parse_response` against JSON test vectors stored in `test-vectors/`.
//!
//! Each case describes a simulated response and the expected outcome: a JSON
//! or text payload, or an error of a given kind. Comparing parsed JSON (not
//! raw strings) avoids false negatives from field-ordering differences.

use fetch_core::{parse_response, ErrorKind, HttpResponse, Payload};

fn parse_kind(s: &str) -> ErrorKind {
    match s {
        "transport" => ErrorKind::Transport,
        "http_status" => ErrorKind::HttpStatus,
        "parse" => ErrorKind::Parse,
        other => panic!("unknown error kind: {other}"),
    }
}

fn simulated_response(sim: &serde_json::Value) -> HttpResponse {
    let headers = sim["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        status_text: sim["status_text"].as_str().unwrap().to_string(),
        headers,
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected"];
        let result = parse_response(simulated_response(&case["response"]));

        if let Some(payload) = expected.get("payload") {
            let actual = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e}"));
            if let Some(json) = payload.get("json") {
                assert_eq!(actual, Payload::Json(json.clone()), "{name}: json payload");
            } else {
                let text = payload["text"].as_str().unwrap();
                assert_eq!(actual, Payload::Text(text.to_string()), "{name}: text payload");
            }
        } else {
            let err = result.expect_err(name);
            let want = &expected["error"];
            assert_eq!(err.kind(), parse_kind(want["kind"].as_str().unwrap()), "{name}: kind");
            if let Some(message) = want.get("message") {
                assert_eq!(err.to_string(), message.as_str().unwrap(), "{name}: message");
            }
        }
    }
}
