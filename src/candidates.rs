// src/candidates.rs: student candidates shown to founders
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentCandidate {
    pub id: String,
    pub name: String,
    pub role: String,
    pub skills: Vec<String>,
    /// 0–100
    pub progress: u8,
    pub projects: u32,
    /// Display text such as "2 hours ago", not a timestamp.
    pub last_active: String,
    pub email: String,
}

impl StudentCandidate {
    pub fn progress_pct(&self) -> u8 {
        self.progress.min(100)
    }

    pub fn projects_label(&self) -> String {
        match self.projects {
            1 => "1 project".to_string(),
            n => format!("{n} projects"),
        }
    }
}

pub trait CandidateSource {
    fn candidates(&self) -> Vec<StudentCandidate>;
}

/// Hard-coded roster used until the portal has a backend.
pub struct SeededCandidates;

impl CandidateSource for SeededCandidates {
    fn candidates(&self) -> Vec<StudentCandidate> {
        vec![
            candidate(
                "s1",
                "Aarav Sharma",
                "Full-Stack Developer",
                &["React", "Node.js", "PostgreSQL"],
                85,
                4,
                "2 hours ago",
                "aarav@example.com",
            ),
            candidate(
                "s2",
                "Zoya Khan",
                "UI/UX Designer",
                &["Figma", "Prototyping", "User Research"],
                72,
                3,
                "1 day ago",
                "zoya@example.com",
            ),
            candidate(
                "s3",
                "Kabir Singh",
                "Data Analyst",
                &["Python", "SQL", "Tableau"],
                64,
                2,
                "3 days ago",
                "kabir@example.com",
            ),
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: &str,
    name: &str,
    role: &str,
    skills: &[&str],
    progress: u8,
    projects: u32,
    last_active: &str,
    email: &str,
) -> StudentCandidate {
    StudentCandidate {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        progress,
        projects,
        last_active: last_active.into(),
        email: email.into(),
    }
}
