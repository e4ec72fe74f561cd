//! Learning roadmaps: the static catalog, filters and the preview browser

mod browser;
mod filter;

pub use browser::{Modal, Preview, RoadmapBrowser, DEFAULT_START_BASE};
pub use filter::{FilterAxis, FilterState};

use std::collections::HashSet;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_CATALOG: &str = include_str!("../../data/roadmaps.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced]
    }
}

/// How long a roadmap takes to complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Short,
    Medium,
    Long,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Short => "short",
            Timeframe::Medium => "medium",
            Timeframe::Long => "long",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "short" => Some(Timeframe::Short),
            "medium" => Some(Timeframe::Medium),
            "long" => Some(Timeframe::Long),
            _ => None,
        }
    }

    pub fn all() -> Vec<Timeframe> {
        vec![Timeframe::Short, Timeframe::Medium, Timeframe::Long]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Development,
    Data,
    Security,
    Cloud,
    Mobile,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Development => "development",
            Category::Data => "data",
            Category::Security => "security",
            Category::Cloud => "cloud",
            Category::Mobile => "mobile",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" => Some(Category::Development),
            "data" => Some(Category::Data),
            "security" => Some(Category::Security),
            "cloud" => Some(Category::Cloud),
            "mobile" => Some(Category::Mobile),
            _ => None,
        }
    }

    pub fn all() -> Vec<Category> {
        vec![
            Category::Development,
            Category::Data,
            Category::Security,
            Category::Cloud,
            Category::Mobile,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub difficulty: Difficulty,
    pub duration: Timeframe,
    pub category: Category,
    pub description: String,
    pub modules: Vec<Module>,
}

#[derive(Deserialize)]
struct CatalogFile {
    roadmaps: Vec<Roadmap>,
}

/// Read-only set of roadmaps, in display order
#[derive(Debug, Clone)]
pub struct Catalog {
    roadmaps: Vec<Roadmap>,
}

impl Catalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("built-in roadmap catalog is invalid")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.roadmaps)
    }

    pub fn new(roadmaps: Vec<Roadmap>) -> Result<Self> {
        let mut seen = HashSet::new();
        for roadmap in &roadmaps {
            if roadmap.id.trim().is_empty() {
                bail!("roadmap '{}' has an empty id", roadmap.title);
            }
            if !seen.insert(roadmap.id.as_str()) {
                return Err(anyhow!("duplicate roadmap id '{}'", roadmap.id));
            }
            if roadmap.modules.is_empty() {
                bail!("roadmap '{}' has no modules", roadmap.id);
            }
        }
        Ok(Self { roadmaps })
    }

    pub fn get(&self, id: &str) -> Option<&Roadmap> {
        self.roadmaps.iter().find(|r| r.id == id)
    }

    pub fn roadmaps(&self) -> &[Roadmap] {
        &self.roadmaps
    }
}
