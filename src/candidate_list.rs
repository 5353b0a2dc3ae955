// src/candidate_list.rs: candidate cards with Contact / Hire
use std::rc::Rc;

use gloo::console::log;
use yew::prelude::*;

use crate::candidates::{CandidateSource, StudentCandidate};
use crate::outreach::{self, Browser};
use crate::profile::FounderProfile;

#[derive(Properties, Clone)]
pub struct CandidateListProps {
    pub founder: FounderProfile,
    pub candidates: Rc<dyn CandidateSource>,
    pub browser: Rc<dyn Browser>,
}

impl PartialEq for CandidateListProps {
    fn eq(&self, other: &Self) -> bool {
        self.founder == other.founder
            && Rc::ptr_eq(&self.candidates, &other.candidates)
            && Rc::ptr_eq(&self.browser, &other.browser)
    }
}

#[function_component(CandidateList)]
pub fn candidate_list(props: &CandidateListProps) -> Html {
    // Filled by the initializer so the very first render already has the roster.
    let candidates = {
        let source = props.candidates.clone();
        use_state(move || source.candidates())
    };

    let founder = &props.founder;

    html! {
        <section class="card">
            <div class="card-h">
                <h2 class="card-t">{ "Student candidates" }</h2>
                <p class="card-p">
                    { format!("Welcome, {} · {}", founder.name, founder.company) }
                </p>
            </div>
            <div class="card-b list">
                {
                    if candidates.is_empty() {
                        html! { <div class="muted">{ "No candidates yet." }</div> }
                    } else {
                        html! {
                            <>{ for candidates.iter().map(|c| candidate_card(c, founder, &props.browser)) }</>
                        }
                    }
                }
            </div>
        </section>
    }
}

fn candidate_card(c: &StudentCandidate, founder: &FounderProfile, browser: &Rc<dyn Browser>) -> Html {
    let on_contact = {
        let c = c.clone();
        let company = founder.company.clone();
        let browser = browser.clone();
        Callback::from(move |_: MouseEvent| {
            log!(format!("Contacting {}", c.email));
            outreach::contact(&c, Some(company.as_str()), browser.as_ref());
        })
    };

    let on_hire = {
        let c = c.clone();
        let browser = browser.clone();
        Callback::from(move |_: MouseEvent| {
            log!(format!("Hire clicked for {}", c.id));
            outreach::hire(&c, browser.as_ref());
        })
    };

    let pct = c.progress_pct();

    html! {
        <div class="candidate" key={c.id.clone()}>
            <div class="candidate-top">
                <div>
                    <div class="candidate-name">{ c.name.clone() }</div>
                    <div class="candidate-role">{ c.role.clone() }</div>
                </div>
                <span class="badge">{ c.projects_label() }</span>
            </div>

            <div class="skills">
                { for c.skills.iter().map(|s| html! { <span class="chip">{ s.clone() }</span> }) }
            </div>

            <div class="progress" title={format!("{pct}% complete")}>
                <div class="progress-fill" style={format!("width:{pct}%;")}></div>
            </div>
            <div class="candidate-meta">
                <span>{ format!("{pct}% progress") }</span>
                <span>{ format!("Active {}", c.last_active) }</span>
            </div>

            <div class="row">
                <button class="btn" onclick={on_contact}>{ "Contact" }</button>
                <button class="btn btn2" onclick={on_hire}>{ "Hire" }</button>
            </div>
        </div>
    }
}
