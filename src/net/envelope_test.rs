use super::*;
use serde::Deserialize;

#[derive(Debug, PartialEq, Deserialize)]
struct Item {
    id: i64,
}

#[test]
fn success_envelope_unwraps_data() {
    let env = Envelope::parse(r#"{"code":200,"message":"Success","data":{"id":7}}"#).unwrap();
    let outcome = env.into_outcome::<Item>().unwrap();
    assert_eq!(outcome, ApiOutcome::Success { data: Item { id: 7 }, message: "Success".into() });
}

#[test]
fn msg_alias_is_accepted() {
    let env = Envelope::parse(r#"{"code":400,"msg":"bad input"}"#).unwrap();
    assert_eq!(env.message(), Some("bad input"));
}

#[test]
fn message_wins_over_msg() {
    let env = Envelope::parse(r#"{"code":400,"message":"primary","msg":"secondary"}"#).unwrap();
    assert_eq!(env.message(), Some("primary"));
}

#[test]
fn missing_data_decodes_into_unit_and_option() {
    let env = Envelope::parse(r#"{"code":200,"message":"ok"}"#).unwrap();
    assert_eq!(env.clone().into_outcome::<()>().unwrap().into_result(), Ok(()));
    assert_eq!(env.into_outcome::<Option<Item>>().unwrap().into_result(), Ok(None));
}

#[test]
fn non_200_code_is_failure_even_with_data() {
    let env = Envelope::parse(r#"{"code":500,"message":"boom","data":{"id":1}}"#).unwrap();
    let result = env.into_outcome::<Item>().unwrap().into_result();
    assert_eq!(result, Err(ApiError::Business { code: 500, message: "boom".into() }));
}

#[test]
fn failure_without_message_gets_generic_text() {
    let env = Envelope::parse(r#"{"code":403}"#).unwrap();
    let outcome = env.into_outcome::<Value>().unwrap();
    assert_eq!(outcome, ApiOutcome::Failure { code: 403, message: "request failed".into() });
}

#[test]
fn code_401_becomes_unauthorized() {
    let env = Envelope::parse(r#"{"code":401,"message":"not logged in"}"#).unwrap();
    let result = env.into_outcome::<Value>().unwrap().into_result();
    assert_eq!(result, Err(ApiError::Unauthorized("not logged in".into())));
}

#[test]
fn float_and_string_codes_are_tolerated() {
    assert_eq!(Envelope::parse(r#"{"code":200.0}"#).unwrap().code, 200);
    assert_eq!(Envelope::parse(r#"{"code":"401"}"#).unwrap().code, 401);
}

#[test]
fn mismatched_success_data_is_decode_error() {
    let env = Envelope::parse(r#"{"code":200,"data":"nope"}"#).unwrap();
    assert!(matches!(env.into_outcome::<Item>(), Err(ApiError::Decode(_))));
}

#[test]
fn non_object_body_is_decode_error() {
    assert!(matches!(Envelope::parse("<html>"), Err(ApiError::Decode(_))));
    assert!(matches!(Envelope::parse(r#"{"message":"no code"}"#), Err(ApiError::Decode(_))));
}
