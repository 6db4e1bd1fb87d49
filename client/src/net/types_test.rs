use super::*;

#[test]
fn contact_record_omits_missing_optionals() {
    let record = ContactRecord {
        name: "Amina".to_owned(),
        email: "amina@example.com".to_owned(),
        company: None,
        service: None,
        message: "Hello".to_owned(),
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "name": "Amina", "email": "amina@example.com", "message": "Hello" })
    );
}

#[test]
fn contact_record_includes_present_optionals() {
    let record = ContactRecord {
        company: Some("Acme".to_owned()),
        service: Some("Cybersecurity".to_owned()),
        ..ContactRecord::default()
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["company"], "Acme");
    assert_eq!(json["service"], "Cybersecurity");
}

#[test]
fn submit_response_tolerates_missing_and_extra_fields() {
    let ok: SubmitResponse = serde_json::from_str(r#"{"ok":true,"next":"/thanks"}"#).unwrap();
    assert!(ok.ok);
    assert!(ok.errors.is_empty());

    let rejected: SubmitResponse =
        serde_json::from_str(r#"{"errors":[{"field":"email","code":"TYPE_EMAIL","message":"should be an email"}]}"#)
            .unwrap();
    assert!(!rejected.ok);
    assert_eq!(
        rejected.errors,
        vec![FieldError { field: "email".to_owned(), message: "should be an email".to_owned() }]
    );
}

#[test]
fn field_error_without_field_is_form_level() {
    let err: FieldError = serde_json::from_str(r#"{"message":"form disabled"}"#).unwrap();
    assert_eq!(err.field, "");
}

#[test]
fn optional_field_trims_and_drops_blank() {
    assert_eq!(optional_field("  Acme  "), Some("Acme".to_owned()));
    assert_eq!(optional_field("   "), None);
    assert_eq!(optional_field(""), None);
}
