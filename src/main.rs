// src/main.rs: Founder Portal (Rust + Yew + WASM)
// Founders create a profile once (kept in localStorage), then browse
// student candidates and reach out by email.

mod candidate_list;
mod candidates;
mod onboarding;
mod outreach;
mod profile;
mod session;

use std::rc::Rc;

use gloo::console::log;
use yew::prelude::*;

use candidate_list::CandidateList;
use candidates::{CandidateSource, SeededCandidates};
use onboarding::Onboarding;
use outreach::{Browser, WebBrowser};
use profile::{FounderProfile, LocalProfileStore, ProfileRepository};
use session::{EmbeddedSession, SessionSource};

/// Collaborators the screens talk to. Swapped for fakes in tests.
#[derive(Clone)]
pub struct Services {
    pub profiles: Rc<dyn ProfileRepository>,
    pub candidates: Rc<dyn CandidateSource>,
    pub session: Rc<dyn SessionSource>,
    pub browser: Rc<dyn Browser>,
}

impl Services {
    fn web() -> Self {
        Self {
            profiles: Rc::new(LocalProfileStore),
            candidates: Rc::new(SeededCandidates),
            session: Rc::new(EmbeddedSession),
            browser: Rc::new(WebBrowser),
        }
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.profiles, &other.profiles)
            && Rc::ptr_eq(&self.candidates, &other.candidates)
            && Rc::ptr_eq(&self.session, &other.session)
            && Rc::ptr_eq(&self.browser, &other.browser)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Screen {
    Onboarding,
    Candidates(FounderProfile),
}

impl Screen {
    fn from_stored(profile: Option<FounderProfile>) -> Self {
        match profile {
            Some(p) => Screen::Candidates(p),
            None => Screen::Onboarding,
        }
    }

    /// Only ever moves forward: a screen that already has a profile keeps it.
    fn with_created(self, profile: FounderProfile) -> Self {
        match self {
            Screen::Onboarding => Screen::Candidates(profile),
            current => current,
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    services: Services,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let services = props.services.clone();

    let screen = {
        let profiles = services.profiles.clone();
        use_state(move || Screen::from_stored(profiles.load()))
    };

    let on_created = {
        let screen = screen.clone();
        Callback::from(move |p: FounderProfile| screen.set((*screen).clone().with_created(p)))
    };

    html! {
        <>
          <div class="bg" aria-hidden="true"></div>
          <div class="wrap">
            <header class="hero">
              <div class="badge">{ "Founder Portal" }</div>
              <h1 class="h1">{ "Find your first hires" }</h1>
              <p class="sub">{ "Students with real project work, ready to talk." }</p>
            </header>
            {
                match &*screen {
                    Screen::Onboarding => html! {
                        <Onboarding
                            profiles={services.profiles.clone()}
                            session={services.session.clone()}
                            {on_created}
                        />
                    },
                    Screen::Candidates(founder) => html! {
                        <CandidateList
                            founder={founder.clone()}
                            candidates={services.candidates.clone()}
                            browser={services.browser.clone()}
                        />
                    },
                }
            }
          </div>
        </>
    }
}

fn main() {
    log!("Founder Portal starting");
    yew::Renderer::<App>::with_props(AppProps {
        services: Services::web(),
    })
    .render();
}
