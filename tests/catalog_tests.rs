// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reference catalog lookups.

mod common;

use common::test_store;
use fitgod_tracker::models::{FoodCategory, RecipeCategory};
use fitgod_tracker::services::catalog::ChallengeLength;
use fitgod_tracker::services::Catalogs;

fn catalogs() -> Catalogs {
    Catalogs::builtin().expect("Built-in catalogs should parse")
}

#[test]
fn test_food_lookup_by_id() {
    let catalogs = catalogs();
    let frango = catalogs.foods.lookup_by_id("frango").unwrap();

    assert_eq!(frango.name, "Frango");
    assert_eq!(frango.category, FoodCategory::Protein);
    assert_eq!(frango.calories, 165.0);
    assert_eq!(frango.protein, 31.0);
    assert!(catalogs.foods.lookup_by_id("pizza").is_none());
}

#[test]
fn test_food_list_by_category() {
    let catalogs = catalogs();
    let drinks = catalogs.foods.list_by_category(FoodCategory::Drinks);

    let ids: Vec<&str> = drinks.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["agua", "cafe-sem-acucar", "cha-sem-acucar", "agua-com-limao"]
    );
    for category in [
        FoodCategory::Protein,
        FoodCategory::Carbs,
        FoodCategory::Fats,
        FoodCategory::Vegetables,
    ] {
        assert!(!catalogs.foods.list_by_category(category).is_empty());
    }
}

#[test]
fn test_food_search_ignores_case() {
    let catalogs = catalogs();
    let hits = catalogs.foods.search_by_text("ARROZ");

    let ids: Vec<&str> = hits.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["arroz-branco", "arroz-integral"]);
    assert!(catalogs.foods.search_by_text("xyz").is_empty());
}

#[test]
fn test_recipe_search_matches_ingredients() {
    let catalogs = catalogs();

    // "whey" appears only in ingredient lists for some recipes
    let hits = catalogs.recipes.search_by_text("whey");
    assert!(hits.iter().any(|r| r.id == "titan-shake"));
    assert!(hits.iter().all(|r| {
        r.name.to_lowercase().contains("whey")
            || r.ingredients.iter().any(|i| i.to_lowercase().contains("whey"))
    }));

    let shakes = catalogs.recipes.list_by_category(RecipeCategory::Shake);
    assert!(shakes.iter().any(|r| r.id == "titan-shake"));
    assert_eq!(
        catalogs.recipes.lookup_by_id("power-omelete").unwrap().protein,
        45.0
    );
}

#[test]
fn test_challenge_catalog() {
    let catalogs = catalogs();
    let burn = catalogs.challenges.lookup_by_id("7-day-burn").unwrap();
    assert_eq!(burn.duration, 7);
    assert_eq!(burn.goals.len(), 4);

    let long = catalogs.challenges.list_by_category(ChallengeLength::Long);
    assert_eq!(long.len(), 1);
    assert_eq!(long[0].id, "30-day-transformation");

    assert_eq!(catalogs.challenges.search_by_text("massa").len(), 1);
}

#[test]
fn test_catalog_reads_never_touch_the_store() {
    let catalogs = catalogs();
    let store = test_store();
    let before = store.get_state();

    catalogs.foods.lookup_by_id("frango");
    catalogs.foods.search_by_text("a");
    catalogs.recipes.search_by_text("frango");
    catalogs.challenges.lookup_by_id("7-day-burn");

    assert_eq!(*store.get_state(), *before);
    assert!(store.get_state().daily_progress.is_empty());
}

#[test]
fn test_load_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("foods.json"),
        r#"[{"id":"tofu","name":"Tofu","category":"protein","calories":76,"protein":8,"carbs":1.9,"fats":4.8}]"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("recipes.json"), "[]").unwrap();
    std::fs::write(dir.path().join("challenges.json"), "[]").unwrap();
    std::fs::write(dir.path().join("quotes.json"), r#"["Disciplina vence."]"#).unwrap();

    let catalogs = Catalogs::load_from_dir(dir.path()).unwrap();
    assert_eq!(catalogs.foods.all().len(), 1);
    assert_eq!(catalogs.foods.lookup_by_id("tofu").unwrap().fiber, None);

    std::fs::remove_file(dir.path().join("quotes.json")).unwrap();
    assert!(Catalogs::load_from_dir(dir.path()).is_err());
}
