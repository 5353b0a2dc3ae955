// src/profile.rs: founder profile, local persistence, form submission
use std::fmt;

use gloo::console::warn;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::session::GUEST_FOUNDER_ID;

pub const STORAGE_KEY: &str = "founder_portal_profile_v1";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FounderProfile {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Raw text of the onboarding form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileDraft {
    pub name: String,
    pub company: String,
    pub email: String,
    pub website: String,
}

impl ProfileDraft {
    pub fn can_submit(&self) -> bool {
        [&self.name, &self.company, &self.email]
            .iter()
            .all(|f| !f.trim().is_empty())
    }

    pub fn to_profile(&self, id: String) -> FounderProfile {
        let website = self.website.trim();
        FounderProfile {
            id,
            name: self.name.trim().to_string(),
            company: self.company.trim().to_string(),
            email: self.email.trim().to_string(),
            website: (!website.is_empty()).then(|| website.to_string()),
        }
    }
}

pub trait ProfileRepository {
    /// Absent and unreadable profiles both come back as `None`.
    fn load(&self) -> Option<FounderProfile>;
    fn save(&self, profile: &FounderProfile) -> Result<(), String>;
}

/// A missing key is simply "no profile yet". Anything else is handed back so the
/// caller can report it before treating it the same way.
pub fn fail_open(
    stored: Result<FounderProfile, StorageError>,
) -> Result<Option<FounderProfile>, StorageError> {
    match stored {
        Ok(p) => Ok(Some(p)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Browser localStorage, one JSON entry under [`STORAGE_KEY`].
pub struct LocalProfileStore;

impl ProfileRepository for LocalProfileStore {
    fn load(&self) -> Option<FounderProfile> {
        fail_open(LocalStorage::get::<FounderProfile>(STORAGE_KEY)).unwrap_or_else(|e| {
            warn!(format!("Ignoring stored founder profile: {e}"));
            None
        })
    }

    fn save(&self, profile: &FounderProfile) -> Result<(), String> {
        LocalStorage::set(STORAGE_KEY, profile)
            .map_err(|e| format!("Could not save profile to LocalStorage: {e}"))
    }
}

/// Holds a busy flag high for as long as the guard lives.
pub struct Busy<F: Fn(bool)> {
    set: F,
}

impl<F: Fn(bool)> Busy<F> {
    pub fn start(set: F) -> Self {
        set(true);
        Self { set }
    }
}

impl<F: Fn(bool)> Drop for Busy<F> {
    fn drop(&mut self) {
        (self.set)(false);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    Incomplete,
    Storage(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Incomplete => write!(f, "Name, company and email are required."),
            SubmitError::Storage(e) => write!(f, "{e}"),
        }
    }
}

pub fn submit_profile(
    draft: &ProfileDraft,
    user_id: Option<String>,
    repo: &dyn ProfileRepository,
    busy: impl Fn(bool),
) -> Result<FounderProfile, SubmitError> {
    if !draft.can_submit() {
        return Err(SubmitError::Incomplete);
    }

    let id = user_id.unwrap_or_else(|| GUEST_FOUNDER_ID.to_string());
    let profile = draft.to_profile(id);

    let _busy = Busy::start(busy);
    repo.save(&profile).map_err(SubmitError::Storage)?;
    Ok(profile)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Same contract as [`LocalProfileStore`], backed by a JSON string in memory.
    #[derive(Default)]
    pub struct MemoryProfileStore {
        pub raw: RefCell<Option<String>>,
        pub fail_writes: bool,
    }

    impl MemoryProfileStore {
        pub fn with_raw(raw: &str) -> Self {
            Self {
                raw: RefCell::new(Some(raw.to_string())),
                fail_writes: false,
            }
        }
    }

    impl ProfileRepository for MemoryProfileStore {
        fn load(&self) -> Option<FounderProfile> {
            let stored = match self.raw.borrow().as_deref() {
                Some(raw) => serde_json::from_str(raw).map_err(StorageError::SerdeError),
                None => Err(StorageError::KeyNotFound(STORAGE_KEY.to_string())),
            };
            fail_open(stored).unwrap_or_default()
        }

        fn save(&self, profile: &FounderProfile) -> Result<(), String> {
            if self.fail_writes {
                return Err("quota exceeded".into());
            }
            let json = serde_json::to_string(profile).map_err(|e| e.to_string())?;
            *self.raw.borrow_mut() = Some(json);
            Ok(())
        }
    }

    fn draft(name: &str, company: &str, email: &str, website: &str) -> ProfileDraft {
        ProfileDraft {
            name: name.into(),
            company: company.into(),
            email: email.into(),
            website: website.into(),
        }
    }

    #[test]
    fn can_submit_needs_all_three_required_fields() {
        assert!(!ProfileDraft::default().can_submit());
        assert!(!draft("", "Acme", "r@acme.com", "").can_submit());
        assert!(!draft("Rohan", "   ", "r@acme.com", "").can_submit());
        assert!(!draft("Rohan", "Acme", "\t\n", "https://acme.com").can_submit());
        assert!(draft("Rohan", "Acme", "r@acme.com", "").can_submit());
        assert!(draft("Rohan", "Acme", "r@acme.com", "   ").can_submit());
    }

    #[test]
    fn blank_website_is_left_out_of_stored_json() {
        let repo = MemoryProfileStore::default();
        let p = submit_profile(
            &draft("Rohan", "Acme", "r@acme.com", ""),
            Some("uid-1".into()),
            &repo,
            |_| {},
        )
        .unwrap();

        assert_eq!(p.website, None);
        let raw = repo.raw.borrow().clone().unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(v["id"], "uid-1");
        assert_eq!(v["name"], "Rohan");
        assert!(v.get("website").is_none());
        assert_eq!(repo.load(), Some(p));
    }

    #[test]
    fn website_is_kept_and_fields_are_trimmed() {
        let repo = MemoryProfileStore::default();
        let p = submit_profile(
            &draft("  Rohan ", "Acme\n", " r@acme.com", "  https://acme.com  "),
            None,
            &repo,
            |_| {},
        )
        .unwrap();

        assert_eq!(p.name, "Rohan");
        assert_eq!(p.company, "Acme");
        assert_eq!(p.email, "r@acme.com");
        assert_eq!(p.website.as_deref(), Some("https://acme.com"));
        assert_eq!(repo.load().unwrap().website.as_deref(), Some("https://acme.com"));
    }

    #[test]
    fn missing_user_id_falls_back_to_guest() {
        let repo = MemoryProfileStore::default();
        let p = submit_profile(&draft("Rohan", "Acme", "r@acme.com", ""), None, &repo, |_| {})
            .unwrap();
        assert_eq!(p.id, GUEST_FOUNDER_ID);
    }

    #[test]
    fn incomplete_draft_is_rejected_without_writing() {
        let repo = MemoryProfileStore::default();
        let flags = RefCell::new(vec![]);
        let err = submit_profile(&draft("Rohan", "", "r@acme.com", ""), None, &repo, |b| {
            flags.borrow_mut().push(b)
        })
        .unwrap_err();

        assert_eq!(err, SubmitError::Incomplete);
        assert!(repo.raw.borrow().is_none());
        assert!(flags.borrow().is_empty());
    }

    #[test]
    fn busy_flag_is_cleared_after_write() {
        let repo = MemoryProfileStore::default();
        let flags = RefCell::new(vec![]);
        submit_profile(&draft("Rohan", "Acme", "r@acme.com", ""), None, &repo, |b| {
            flags.borrow_mut().push(b)
        })
        .unwrap();
        assert_eq!(*flags.borrow(), vec![true, false]);
    }

    #[test]
    fn busy_flag_is_cleared_when_write_fails() {
        let repo = MemoryProfileStore {
            fail_writes: true,
            ..Default::default()
        };
        let flags = RefCell::new(vec![]);
        let err = submit_profile(&draft("Rohan", "Acme", "r@acme.com", ""), None, &repo, |b| {
            flags.borrow_mut().push(b)
        })
        .unwrap_err();

        assert_eq!(err, SubmitError::Storage("quota exceeded".into()));
        assert_eq!(*flags.borrow(), vec![true, false]);
        assert_eq!(repo.load(), None);
    }

    #[test]
    fn malformed_stored_profile_loads_as_none() {
        assert_eq!(MemoryProfileStore::with_raw("{not json").load(), None);
        assert_eq!(MemoryProfileStore::with_raw(r#"{"id":"x"}"#).load(), None);
        assert_eq!(MemoryProfileStore::default().load(), None);
    }

    #[test]
    fn fail_open_treats_missing_key_as_no_profile() {
        let res = fail_open(Err(StorageError::KeyNotFound(STORAGE_KEY.to_string())));
        assert!(matches!(res, Ok(None)));
    }

    #[test]
    fn fail_open_hands_back_unreadable_json() {
        let bad = serde_json::from_str::<FounderProfile>("{\"id\":").unwrap_err();
        let res = fail_open(Err(StorageError::SerdeError(bad)));
        assert!(matches!(res, Err(StorageError::SerdeError(_))));
        assert_eq!(res.unwrap_or_default(), None);
    }

    #[test]
    fn fail_open_passes_profile_through() {
        let p = draft("Rohan", "Acme", "r@acme.com", "").to_profile("u".into());
        assert_eq!(fail_open(Ok(p.clone())).unwrap(), Some(p));
    }

    #[test]
    fn stored_profile_without_website_parses() {
        let repo = MemoryProfileStore::with_raw(
            r#"{"id":"u","name":"Rohan","company":"Acme","email":"r@acme.com"}"#,
        );
        let p = repo.load().unwrap();
        assert_eq!(p.company, "Acme");
        assert_eq!(p.website, None);
    }
}
