// src/onboarding.rs: founder sign-up form
use std::rc::Rc;

use gloo::console::{error, log};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::profile::{submit_profile, FounderProfile, ProfileDraft, ProfileRepository};
use crate::session::SessionSource;

#[derive(Properties, Clone)]
pub struct OnboardingProps {
    pub profiles: Rc<dyn ProfileRepository>,
    pub session: Rc<dyn SessionSource>,
    pub on_created: Callback<FounderProfile>,
}

impl PartialEq for OnboardingProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.profiles, &other.profiles)
            && Rc::ptr_eq(&self.session, &other.session)
            && self.on_created == other.on_created
    }
}

#[function_component(Onboarding)]
pub fn onboarding(props: &OnboardingProps) -> Html {
    let draft = use_state(ProfileDraft::default);
    let submitting = use_state(|| false);
    let failure = use_state(|| None::<String>);

    let on_submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let failure = failure.clone();
        let props = props.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let user_id = props.session.current_user_id();
            // Raised and dropped inside this handler; no render ever sees it high.
            let busy = {
                let submitting = submitting.clone();
                move |b: bool| submitting.set(b)
            };
            match submit_profile(&draft, user_id, props.profiles.as_ref(), busy) {
                Ok(profile) => {
                    log!(format!("Founder profile created for {}", profile.company));
                    failure.set(None);
                    props.on_created.emit(profile);
                }
                Err(e) => {
                    error!(format!("Profile not saved: {e}"));
                    failure.set(Some(e.to_string()));
                }
            }
        })
    };

    let on_name = bind_input(draft.clone(), |d, v| d.name = v);
    let on_company = bind_input(draft.clone(), |d, v| d.company = v);
    let on_email = bind_input(draft.clone(), |d, v| d.email = v);
    let on_website = bind_input(draft.clone(), |d, v| d.website = v);

    let can_submit = draft.can_submit();

    html! {
        <section class="card onboarding">
            <div class="card-h">
                <h2 class="card-t">{ "Create your founder profile" }</h2>
                <p class="card-p">{ "Tell students who you are. You only do this once." }</p>
            </div>
            <form class="card-b form" onsubmit={on_submit}>
                { field("Your name", "text", &draft.name, on_name, "Rohan Mehta") }
                { field("Company", "text", &draft.company, on_company, "Acme Labs") }
                { field("Work email", "email", &draft.email, on_email, "rohan@acme.com") }
                { field("Website (optional)", "url", &draft.website, on_website, "https://acme.com") }
                {
                    if let Some(msg) = (*failure).clone() {
                        html! { <div class="alert">{ msg }</div> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="btn" disabled={!can_submit}>{ "Continue" }</button>
            </form>
        </section>
    }
}

fn field(label: &str, kind: &str, value: &str, oninput: Callback<InputEvent>, placeholder: &str) -> Html {
    html! {
        <label class="field">
            <span class="label">{ label }</span>
            <input
                type={kind.to_string()}
                value={value.to_string()}
                {oninput}
                placeholder={placeholder.to_string()}
            />
        </label>
    }
}

fn bind_input(
    draft: UseStateHandle<ProfileDraft>,
    mutator: fn(&mut ProfileDraft, String),
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
        if let Some(i) = input {
            let mut d = (*draft).clone();
            mutator(&mut d, i.value());
            draft.set(d);
        }
    })
}
