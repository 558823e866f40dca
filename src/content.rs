use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::counter::CounterSpec;

const PORTFOLIO_FILE: &str = "portfolio.json";

pub static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(Portfolio::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    pub greetings: Vec<String>,
    pub bio: String,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// Shorter title shown on the card, when it differs from the modal title.
    #[serde(default)]
    pub card_title: Option<String>,
    pub summary: String,
    pub image: String,
    pub timeline: String,
    pub technologies: Vec<String>,
    pub details: Vec<ProjectDetail>,
}

impl Project {
    pub fn card_title(&self) -> &str {
        self.card_title.as_deref().unwrap_or(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub socials: Vec<Social>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub stats: Vec<CounterSpec>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PORTFOLIO_FILE)
            .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
        Self::parse(&file.data)
    }

    pub fn parse(raw: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(raw).map_err(|e| ContentError::ParseError(e.to_string()))
    }
}

pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::StatIcon;

    #[test]
    fn test_embedded_portfolio_parses() {
        let portfolio = portfolio().expect("embedded portfolio should parse");

        assert_eq!(portfolio.profile.name, "Sasanka Gayathra");
        assert_eq!(portfolio.profile.greetings.len(), 2);
        assert_eq!(portfolio.skills.len(), 8);
        assert_eq!(portfolio.projects.len(), 4);

        let targets = portfolio.stats.iter().map(|s| s.target).collect::<Vec<_>>();
        assert_eq!(targets, vec![2, 4, 8, 99]);
        assert_eq!(portfolio.stats[3].icon, StatIcon::ThumbsUp);
    }

    #[test]
    fn test_projects_have_details() {
        let portfolio = portfolio().unwrap();
        for project in &portfolio.projects {
            assert!(!project.technologies.is_empty());
            assert!(!project.details.is_empty());
        }
        let forest = &portfolio.projects[3];
        assert_eq!(forest.card_title(), "Forest Vibe");
        assert_eq!(forest.title, "Forest Vibe - Wild Life Learning Platform");
        assert_eq!(portfolio.projects[0].card_title(), portfolio.projects[0].title);
    }

    #[test]
    fn test_malformed_content() {
        let err = Portfolio::parse(b"{\"profile\": 3}").unwrap_err();
        assert!(matches!(err, ContentError::ParseError(_)));
    }
}
