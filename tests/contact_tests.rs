// Host-side tests for contact form validation and submission outcomes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod notice {
        include!("../src/core/notice.rs");
    }
    pub mod contact {
        include!("../src/core/contact.rs");
    }
}

use crate::site::contact::*;
use crate::site::notice::{Notice, NoticeKind};

fn fields(name: &str, email: &str, message: &str) -> ContactFields {
    ContactFields {
        name: name.into(),
        email: email.into(),
        message: message.into(),
    }
}

#[test]
fn email_shape() {
    for ok in ["a@b.co", "first.last@example.org", "x+y@sub.domain.io"] {
        assert!(is_valid_email(ok), "{ok} should be valid");
    }
    for bad in ["", "a@b", "@b.co", "a b@c.de", "a@b@c.de", "plain"] {
        assert!(!is_valid_email(bad), "{bad} should be invalid");
    }
}

#[test]
fn empty_field_is_rejected_without_request() {
    let plan = plan_submission(&fields("Ada", "", "hi"), None);
    assert_eq!(plan, SubmitPlan::Reject(Notice::error(MSG_MISSING_FIELDS)));
    assert_eq!(
        fields("", "a@b.co", "hi").validate(),
        Err(ValidationError::MissingField("name"))
    );
    assert_eq!(
        fields("Ada", "a@b.co", "").validate(),
        Err(ValidationError::MissingField("message"))
    );
}

#[test]
fn bad_email_is_rejected() {
    let plan = plan_submission(&fields("Ada", "ada@", "hi"), None);
    match plan {
        SubmitPlan::Reject(n) => {
            assert_eq!(n.kind, NoticeKind::Error);
            assert_eq!(n.message, MSG_BAD_EMAIL);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn valid_fields_are_encoded_for_the_endpoint() {
    let plan = plan_submission(&fields("Ada L", "ada@x.io", "hi & bye"), None);
    assert_eq!(
        plan,
        SubmitPlan::Send(SubmitRequest {
            url: DEFAULT_ENDPOINT.to_string(),
            body: "name=Ada%20L&email=ada%40x.io&message=hi%20%26%20bye".to_string(),
        })
    );
}

#[test]
fn form_action_overrides_default_endpoint() {
    assert_eq!(resolve_endpoint(Some("https://example.com/f")), "https://example.com/f");
    assert_eq!(resolve_endpoint(Some("   ")), DEFAULT_ENDPOINT);
    assert_eq!(resolve_endpoint(None), DEFAULT_ENDPOINT);
}

#[test]
fn success_resets_the_form() {
    for status in [200, 201, 204] {
        let out = finish_submission(Ok(status));
        assert!(out.reset_form);
        assert_eq!(out.notice, Notice::success(MSG_SENT));
    }
}

#[test]
fn rejection_keeps_the_form() {
    for status in [302, 400, 422, 500] {
        let out = finish_submission(Ok(status));
        assert!(!out.reset_form);
        assert_eq!(out.notice, Notice::error(MSG_REJECTED));
    }
}

#[test]
fn network_failure_keeps_the_form() {
    let out = finish_submission(Err(SubmitError::Network("offline".into())));
    assert!(!out.reset_form);
    assert_eq!(out.notice, Notice::error(MSG_NETWORK));
}

#[test]
fn notice_classes() {
    assert_eq!(
        Notice::info("x").class_name(),
        "notification notification-info"
    );
    assert_eq!(NoticeKind::Success.as_str(), "success");
    assert_ne!(NoticeKind::Error.background(), NoticeKind::Info.background());
}
