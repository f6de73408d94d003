//! Profile — the fixed identity and skill set of the evaluated candidate.
//!
//! Identity, skills and descriptive fields are immutable once built. The fear string
//! and headshots are crate-private: they feed the evaluator but never leave it, and
//! the `Debug` impl redacts them.

pub mod headshots;

use std::fmt;

use crate::errors::AppError;

pub use headshots::{HeadshotStyle, Headshots};

const LEON_SKILLS: &[&str] = &[
    "HTML",
    "CSS",
    "JavaScript",
    "React",
    "Redux",
    "SASS",
    "Express",
    "Node",
    "Git",
    "Docker",
    "Java",
    "DevOps",
    "Kubernetes",
    "CI/CD",
    "PSM1 Scrum Master",
    "AWS Cloud Practitioner",
];

const LEON_FEAR: &str = "Spiders that dissapear when you look away for like, ONE second.";

#[derive(Clone)]
pub struct Profile {
    first_name: String,
    last_name: String,
    skills: Vec<String>,
    portfolio_url: String,
    home_location: String,
    fears: String,
    headshots: Headshots,
    is_agile: bool,
    currently_learning: Option<Vec<String>>,
}

impl Profile {
    /// The hardcoded candidate.
    pub fn leon_brown(headshots: Headshots) -> Self {
        Profile {
            first_name: "Leon".to_string(),
            last_name: "Brown".to_string(),
            skills: LEON_SKILLS.iter().map(|s| s.to_string()).collect(),
            portfolio_url: "https://www.leonbrown.dev".to_string(),
            home_location: "Edinburgh, UK".to_string(),
            fears: LEON_FEAR.to_string(),
            headshots,
            is_agile: true,
            currently_learning: None,
        }
    }

    pub fn builder(first_name: impl Into<String>, last_name: impl Into<String>) -> ProfileBuilder {
        ProfileBuilder {
            first_name: first_name.into(),
            last_name: last_name.into(),
            skills: Vec::new(),
            portfolio_url: String::new(),
            home_location: String::new(),
            fears: String::new(),
            headshots: Headshots::default(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn portfolio_url(&self) -> &str {
        &self.portfolio_url
    }

    pub fn home_location(&self) -> &str {
        &self.home_location
    }

    pub fn is_agile(&self) -> bool {
        self.is_agile
    }

    /// Empty until `set_currently_learning` has been called.
    pub fn currently_learning(&self) -> &[String] {
        self.currently_learning.as_deref().unwrap_or(&[])
    }

    /// Assigns the learning list. Allowed exactly once.
    pub fn set_currently_learning<I, S>(&mut self, items: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.currently_learning.is_some() {
            return Err(AppError::AlreadySet(
                "currently_learning can only be assigned once".to_string(),
            ));
        }
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.iter().any(|i| i.trim().is_empty()) {
            return Err(AppError::invalid("currently_learning entries cannot be blank"));
        }
        self.currently_learning = Some(items);
        Ok(())
    }

    pub(crate) fn fears(&self) -> &str {
        &self.fears
    }

    pub(crate) fn headshot(&self, style: HeadshotStyle) -> &str {
        self.headshots.get(style)
    }

    pub(crate) fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("skills", &self.skills)
            .field("portfolio_url", &self.portfolio_url)
            .field("home_location", &self.home_location)
            .field("is_agile", &self.is_agile)
            .field("currently_learning", &self.currently_learning)
            .finish_non_exhaustive()
    }
}

/// Builds a `Profile` other than the hardcoded one.
#[derive(Debug)]
pub struct ProfileBuilder {
    first_name: String,
    last_name: String,
    skills: Vec<String>,
    portfolio_url: String,
    home_location: String,
    fears: String,
    headshots: Headshots,
}

impl ProfileBuilder {
    /// Appends a skill unless an identical one is already present.
    pub fn skill(mut self, skill: impl Into<String>) -> Self {
        let skill = skill.into();
        if !self.skills.contains(&skill) {
            self.skills.push(skill);
        }
        self
    }

    pub fn portfolio_url(mut self, url: impl Into<String>) -> Self {
        self.portfolio_url = url.into();
        self
    }

    pub fn home_location(mut self, home: impl Into<String>) -> Self {
        self.home_location = home.into();
        self
    }

    pub fn fears(mut self, fears: impl Into<String>) -> Self {
        self.fears = fears.into();
        self
    }

    pub fn headshots(mut self, headshots: Headshots) -> Self {
        self.headshots = headshots;
        self
    }

    pub fn build(self) -> Result<Profile, AppError> {
        if self.skills.is_empty() {
            return Err(AppError::invalid("a profile needs at least one skill"));
        }
        if self.skills.iter().any(|s| s.trim().is_empty()) {
            return Err(AppError::invalid("skills cannot be blank"));
        }
        if self.fears.is_empty() {
            // An empty needle matches every description.
            return Err(AppError::invalid("fears cannot be empty"));
        }

        Ok(Profile {
            first_name: self.first_name,
            last_name: self.last_name,
            skills: self.skills,
            portfolio_url: self.portfolio_url,
            home_location: self.home_location,
            fears: self.fears,
            headshots: self.headshots,
            is_agile: true,
            currently_learning: None,
        })
    }
}
