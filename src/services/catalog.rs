// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static catalog loading and lookups.
//!
//! Catalogs are read-only; nothing here touches the progress store.

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;

use crate::models::{Challenge, Food, FoodCategory, Recipe, RecipeCategory};

const BUILTIN_FOODS: &str = include_str!("../../data/foods.json");
const BUILTIN_RECIPES: &str = include_str!("../../data/recipes.json");
const BUILTIN_CHALLENGES: &str = include_str!("../../data/challenges.json");
const BUILTIN_QUOTES: &str = include_str!("../../data/quotes.json");

/// Case-insensitive substring match.
fn matches_text(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Food catalog with per-100g nutrient values.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<Food>,
}

impl FoodCatalog {
    pub fn new(foods: Vec<Food>) -> Self {
        Self { foods }
    }

    pub fn all(&self) -> &[Food] {
        &self.foods
    }

    pub fn lookup_by_id(&self, id: &str) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn list_by_category(&self, category: FoodCategory) -> Vec<&Food> {
        self.foods.iter().filter(|f| f.category == category).collect()
    }

    /// Foods whose name contains `query`, ignoring case.
    pub fn search_by_text(&self, query: &str) -> Vec<&Food> {
        let needle = query.to_lowercase();
        self.foods
            .iter()
            .filter(|f| matches_text(&f.name, &needle))
            .collect()
    }
}

/// Recipe catalog with per-serving nutrient values.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn lookup_by_id(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn list_by_category(&self, category: RecipeCategory) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    /// Recipes whose name or any ingredient contains `query`, ignoring case.
    pub fn search_by_text(&self, query: &str) -> Vec<&Recipe> {
        let needle = query.to_lowercase();
        self.recipes
            .iter()
            .filter(|r| {
                matches_text(&r.name, &needle)
                    || r.ingredients.iter().any(|i| matches_text(i, &needle))
            })
            .collect()
    }
}

/// Challenge catalog plus motivational quotes.
#[derive(Debug, Clone, Default)]
pub struct ChallengeCatalog {
    challenges: Vec<Challenge>,
    quotes: Vec<String>,
}

impl ChallengeCatalog {
    pub fn new(challenges: Vec<Challenge>, quotes: Vec<String>) -> Self {
        Self { challenges, quotes }
    }

    pub fn all(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn lookup_by_id(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Challenges grouped by length: up to a week, up to 15 days, longer.
    pub fn list_by_category(&self, category: ChallengeLength) -> Vec<&Challenge> {
        self.challenges
            .iter()
            .filter(|c| ChallengeLength::of(c.duration) == category)
            .collect()
    }

    /// Challenges whose name or description contains `query`, ignoring case.
    pub fn search_by_text(&self, query: &str) -> Vec<&Challenge> {
        let needle = query.to_lowercase();
        self.challenges
            .iter()
            .filter(|c| matches_text(&c.name, &needle) || matches_text(&c.description, &needle))
            .collect()
    }

    /// Quote of the day; stable for a given date.
    pub fn quote_for(&self, date: NaiveDate) -> Option<&str> {
        if self.quotes.is_empty() {
            return None;
        }
        let index = date.num_days_from_ce().rem_euclid(self.quotes.len() as i32) as usize;
        self.quotes.get(index).map(String::as_str)
    }
}

/// Length bucket used to group challenges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeLength {
    Sprint,
    Medium,
    Long,
}

impl ChallengeLength {
    pub fn of(duration_days: u32) -> Self {
        match duration_days {
            0..=7 => ChallengeLength::Sprint,
            8..=15 => ChallengeLength::Medium,
            _ => ChallengeLength::Long,
        }
    }
}

/// All reference catalogs.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub foods: FoodCatalog,
    pub recipes: RecipeCatalog,
    pub challenges: ChallengeCatalog,
}

impl Catalogs {
    /// Catalogs compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::load_from_json(
            BUILTIN_FOODS,
            BUILTIN_RECIPES,
            BUILTIN_CHALLENGES,
            BUILTIN_QUOTES,
        )
    }

    /// Load `foods.json`, `recipes.json`, `challenges.json` and `quotes.json`
    /// from a directory.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path)
                .map_err(|e| CatalogError::IoError(format!("{}: {}", path.display(), e)))
        };
        Self::load_from_json(
            &read("foods.json")?,
            &read("recipes.json")?,
            &read("challenges.json")?,
            &read("quotes.json")?,
        )
    }

    /// Parse the four catalogs from JSON strings.
    pub fn load_from_json(
        foods: &str,
        recipes: &str,
        challenges: &str,
        quotes: &str,
    ) -> Result<Self, CatalogError> {
        let foods: Vec<Food> = parse("foods", foods)?;
        let recipes: Vec<Recipe> = parse("recipes", recipes)?;
        let challenges: Vec<Challenge> = parse("challenges", challenges)?;
        let quotes: Vec<String> = parse("quotes", quotes)?;

        check_unique_ids("foods", foods.iter().map(|f| f.id.as_str()))?;
        check_unique_ids("recipes", recipes.iter().map(|r| r.id.as_str()))?;
        check_unique_ids("challenges", challenges.iter().map(|c| c.id.as_str()))?;

        tracing::info!(
            foods = foods.len(),
            recipes = recipes.len(),
            challenges = challenges.len(),
            quotes = quotes.len(),
            "Loaded catalogs"
        );

        Ok(Self {
            foods: FoodCatalog::new(foods),
            recipes: RecipeCatalog::new(recipes),
            challenges: ChallengeCatalog::new(challenges, quotes),
        })
    }
}

fn parse<T: DeserializeOwned>(catalog: &'static str, json: &str) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
        catalog,
        message: e.to_string(),
    })
}

fn check_unique_ids<'a>(
    catalog: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                catalog,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    IoError(String),

    #[error("Failed to parse {catalog} catalog: {message}")]
    ParseError {
        catalog: &'static str,
        message: String,
    },

    #[error("Duplicate id {id:?} in {catalog} catalog")]
    DuplicateId { catalog: &'static str, id: String },
}

impl From<CatalogError> for crate::error::AppError {
    fn from(err: CatalogError) -> Self {
        crate::error::AppError::Catalog(err.to_string())
    }
}
