// src/outreach.rs: Contact / Hire actions on a candidate card
use gloo::console::error;
use web_sys::window;

use crate::candidates::StudentCandidate;

/// Used in the email body when the founder has no company on file.
pub const FALLBACK_COMPANY: &str = "our startup";

pub trait Browser {
    fn navigate(&self, url: &str);
    fn alert(&self, message: &str);
}

pub struct WebBrowser;

impl Browser for WebBrowser {
    fn navigate(&self, url: &str) {
        let res = window()
            .ok_or("No window".to_string())
            .and_then(|w| {
                w.location()
                    .set_href(url)
                    .map_err(|_| "Could not open mail client".to_string())
            });
        if let Err(e) = res {
            error!(e);
        }
    }

    fn alert(&self, message: &str) {
        if let Some(w) = window() {
            if w.alert_with_message(message).is_err() {
                error!("Alert dialog blocked");
            }
        }
    }
}

pub fn contact_link(candidate: &StudentCandidate, company: Option<&str>) -> String {
    let company = company
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(FALLBACK_COMPANY);

    let subject = format!("Opportunity for {}", candidate.name);
    let body = format!(
        "Hi {},\n\nI'm reaching out from {} about a role that looks like a great fit for your work. \
         Would you be open to a quick chat this week?\n\nBest regards",
        candidate.name, company
    );

    format!(
        "mailto:{}?subject={}&body={}",
        candidate.email,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

pub fn hire_notice(candidate: &StudentCandidate) -> String {
    format!(
        "Hire request noted for {}! Hiring goes live once the portal backend is connected.",
        candidate.name
    )
}

pub fn contact(candidate: &StudentCandidate, company: Option<&str>, browser: &dyn Browser) {
    browser.navigate(&contact_link(candidate, company));
}

pub fn hire(candidate: &StudentCandidate, browser: &dyn Browser) {
    browser.alert(&hire_notice(candidate));
}
