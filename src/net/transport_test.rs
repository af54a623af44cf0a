use super::*;
use serde_json::json;

#[test]
fn builders_set_method_and_path() {
    assert_eq!(ApiRequest::get("/books/1").method, HttpMethod::Get);
    assert_eq!(ApiRequest::post("/x").method, HttpMethod::Post);
    assert_eq!(ApiRequest::put("/x").method, HttpMethod::Put);
    assert_eq!(ApiRequest::patch("/x").method, HttpMethod::Patch);
    assert_eq!(ApiRequest::delete("/x").path, "/x");
}

#[test]
fn query_opt_skips_missing_and_blank_values() {
    let req = ApiRequest::get("/borrow/all")
        .query_opt("branchId", Some(3))
        .query_opt("status", None::<&str>)
        .query_opt("keyword", Some("  "))
        .query("page", 0);
    assert_eq!(
        req.query,
        vec![("branchId".to_owned(), "3".to_owned()), ("page".to_owned(), "0".to_owned())]
    );
}

#[test]
fn json_attaches_serialized_body() {
    let req = ApiRequest::post("/fines/batch-pay").json(&[1, 2, 3]).unwrap();
    assert_eq!(req.body, Some(json!([1, 2, 3])));
}

#[test]
fn prepared_header_lookup_is_case_insensitive() {
    let prepared = PreparedRequest {
        method: HttpMethod::Get,
        url: "/api/x".into(),
        query: Vec::new(),
        headers: vec![("Authorization".into(), "Basic abc".into())],
        body: None,
    };
    assert_eq!(prepared.header("authorization"), Some("Basic abc"));
    assert_eq!(prepared.header("content-type"), None);
}

#[test]
fn raw_response_success_range() {
    assert!(RawResponse { status: 204, body: String::new() }.is_success());
    assert!(!RawResponse { status: 401, body: String::new() }.is_success());
}

#[test]
fn method_names_are_uppercase() {
    assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
}

#[test]
fn anonymous_flag_defaults_off() {
    assert!(!ApiRequest::get("/auth/current-user").anonymous);
    assert!(ApiRequest::post("/auth/login").anonymous().anonymous);
}
