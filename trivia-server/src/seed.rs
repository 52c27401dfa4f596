//! Default categories and sample questions

use std::collections::HashMap;

use trivia_core::NewQuestion;

use crate::db::DbError;
use crate::store::{MemoryStore, TriviaStore};

/// Category labels, inserted in this order (ids 1..=6 on a fresh store)
pub const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, category label, difficulty)
const QUESTIONS: &[(&str, &str, &str, i32)] = &[
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", "History", 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", "History", 1),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", "Entertainment", 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", "Entertainment", 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", "Entertainment", 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", "Sports", 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", "Sports", 4),
    ("Who invented Peanut Butter?", "George Washington Carver", "History", 2),
    ("What is the largest lake in Africa?", "Lake Victoria", "Geography", 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", "Geography", 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", "Geography", 2),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", "Art", 1),
    ("La Giaconda is better known as what?", "Mona Lisa", "Art", 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", "Art", 4),
    ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", "Art", 2),
    ("What is the heaviest organ in the human body?", "The Liver", "Science", 4),
    ("Who discovered penicillin?", "Alexander Fleming", "Science", 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", "Science", 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", "History", 4),
];

/// What a seed run inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub questions: usize,
}

/// Insert the default categories and sample questions.
///
/// Each table is only filled when it is empty, so running this twice is a
/// no-op. Questions are linked to categories by label.
pub async fn seed(store: &dyn TriviaStore) -> Result<SeedReport, DbError> {
    let mut report = SeedReport::default();

    let mut categories = store.categories().await?;
    if categories.is_empty() {
        for label in CATEGORIES {
            categories.push(store.insert_category(label).await?);
            report.categories += 1;
        }
    }

    if !store.questions().await?.is_empty() {
        tracing::info!(?report, "questions already present, skipping sample questions");
        return Ok(report);
    }

    let ids: HashMap<&str, i32> = categories
        .iter()
        .map(|c| (c.label.as_str(), c.id))
        .collect();

    for (question, answer, label, difficulty) in QUESTIONS {
        let Some(&category) = ids.get(label) else {
            tracing::warn!(category = %label, "category missing, skipping sample question");
            continue;
        };
        store
            .insert_question(NewQuestion {
                question: (*question).to_owned(),
                answer: (*answer).to_owned(),
                category,
                difficulty: *difficulty,
            })
            .await?;
        report.questions += 1;
    }

    tracing::info!(?report, "seed complete");
    Ok(report)
}

/// An in-memory store filled with the sample data set.
pub async fn sample_store() -> Result<MemoryStore, DbError> {
    let store = MemoryStore::new();
    seed(&store).await?;
    Ok(store)
}
