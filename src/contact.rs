use crate::constants::CONTACT_FORM_SELECTOR;
use crate::core::contact::{
    finish_submission, plan_submission, ContactFields, SubmitError, SubmitPlan, SubmitRequest,
};
use crate::dom;
use crate::notify;
use anyhow::anyhow;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn field_value(form: &web::HtmlFormElement, name: &str) -> String {
    let Some(el) = form
        .query_selector(&format!("[name=\"{name}\"]"))
        .ok()
        .flatten()
    else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn read_fields(form: &web::HtmlFormElement) -> ContactFields {
    ContactFields {
        name: field_value(form, "name"),
        email: field_value(form, "email"),
        message: field_value(form, "message"),
    }
}

async fn send(req: &SubmitRequest) -> Result<u16, SubmitError> {
    let request = Request::post(&req.url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(req.body.clone())
        .map_err(|e| SubmitError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;
    Ok(response.status())
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let form: web::HtmlFormElement = dom::query(document, CONTACT_FORM_SELECTOR)
        .ok_or_else(|| anyhow!("missing {}", CONTACT_FORM_SELECTOR))?
        .dyn_into()
        .map_err(|_| anyhow!("{} is not a <form>", CONTACT_FORM_SELECTOR))?;

    let doc = document.clone();
    let form_for_submit = form.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let form = form_for_submit.clone();
        let fields = read_fields(&form);
        let action = form.get_attribute("action");
        match plan_submission(&fields, action.as_deref()) {
            SubmitPlan::Reject(notice) => notify::show(&doc, &notice),
            SubmitPlan::Send(req) => {
                let doc = doc.clone();
                spawn_local(async move {
                    let result = send(&req).await;
                    if let Err(e) = &result {
                        log::warn!("[contact] submission failed: {}", e);
                    }
                    let outcome = finish_submission(result);
                    if outcome.reset_form {
                        form.reset();
                    } else {
                        log::warn!("[contact] not sent: {}", outcome.notice.message);
                    }
                    notify::show(&doc, &outcome.notice);
                });
            }
        }
    });
    log::info!("[contact] form wired");
    Ok(())
}
