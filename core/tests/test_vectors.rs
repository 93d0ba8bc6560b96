//! Verify URL assembly and form encoding against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file lists inputs as ordered `[name, value]` pairs and the
//! exact output expected from the builder.

use httplib::RequestBuilder;

fn pairs(value: &serde_json::Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (
                arr[0].as_str().unwrap().to_string(),
                arr[1].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// URL
// ---------------------------------------------------------------------------

#[test]
fn url_test_vectors() {
    let raw = include_str!("../../test-vectors/url.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let base = case["base"].as_str().unwrap();

        let mut b = RequestBuilder::new("GET", base);
        for (key, value) in pairs(&case["queries"]) {
            b.with_query(key, value);
        }

        assert_eq!(b.url(), case["expected_url"].as_str().unwrap(), "{name}: url");
    }
}

#[test]
fn url_test_vectors_via_with_queries() {
    let raw = include_str!("../../test-vectors/url.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let mut b = RequestBuilder::new("GET", case["base"].as_str().unwrap());
        b.with_queries(pairs(&case["queries"]));
        assert_eq!(b.url(), case["expected_url"].as_str().unwrap(), "{name}: url");
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

#[test]
fn form_test_vectors() {
    let raw = include_str!("../../test-vectors/form.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let mut b = RequestBuilder::new("POST", "http://localhost:3000");
        b.set_string_body("replaced").with_forms(pairs(&case["fields"]));

        let req = b.build().unwrap();
        assert_eq!(
            req.header("Content-Type"),
            Some("application/x-www-form-urlencoded"),
            "{name}: content type"
        );
        let body = req.body.unwrap().into_bytes().unwrap();
        assert_eq!(
            String::from_utf8(body).unwrap(),
            case["expected_body"].as_str().unwrap(),
            "{name}: body"
        );
    }
}
