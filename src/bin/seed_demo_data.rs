// ABOUTME: Demo data seeder for local LiftLog dashboards
// ABOUTME: Creates the default exercise catalog for a user and a synthetic training history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Demo data seeder for LiftLog.
//!
//! Usage:
//! ```bash
//! # Seed a random user with 120 days of history
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific user
//! cargo run --bin seed-demo-data -- --user-id 7f1c...
//!
//! # Reproducible history
//! cargo run --bin seed-demo-data -- --seed 42 --days 365
//! ```

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::Parser;
use liftlog_core::models::ExerciseCategory;
use liftlog_server::{
    config::{DatabaseConfig, DatabaseUrl},
    database::{NewExercise, NewSet, SetStore, SqliteSetStore},
    logging::{self, AppLogger},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "LiftLog Demo Data Seeder",
    long_about = "Populate the database with an exercise catalog and synthetic sets"
)]
struct SeedArgs {
    /// User to seed (a new id is generated if not specified)
    #[arg(long)]
    user_id: Option<Uuid>,

    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Number of days of history to generate, ending today
    #[arg(long, default_value = "120")]
    days: u32,

    /// RNG seed for reproducible history
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Default exercise catalog
const DEFAULT_EXERCISES: &[(&str, ExerciseCategory)] = &[
    ("Bench Press (Barbell)", ExerciseCategory::Chest),
    ("Bench Press (Dumbbell)", ExerciseCategory::Chest),
    ("Incline Bench Press", ExerciseCategory::Chest),
    ("Decline Bench Press", ExerciseCategory::Chest),
    ("Chest Fly (Dumbbell)", ExerciseCategory::Chest),
    ("Cable Fly", ExerciseCategory::Chest),
    ("Push-Ups", ExerciseCategory::Chest),
    ("Chest Press Machine", ExerciseCategory::Chest),
    ("Pec Deck", ExerciseCategory::Chest),
    ("Pull-Ups", ExerciseCategory::Back),
    ("Lat Pulldown", ExerciseCategory::Back),
    ("Bent Over Row (Barbell)", ExerciseCategory::Back),
    ("Bent Over Row (Dumbbell)", ExerciseCategory::Back),
    ("T-Bar Row", ExerciseCategory::Back),
    ("Seated Cable Row", ExerciseCategory::Back),
    ("Deadlift", ExerciseCategory::Back),
    ("Romanian Deadlift", ExerciseCategory::Back),
    ("Face Pulls", ExerciseCategory::Back),
    ("Squat (Barbell)", ExerciseCategory::Legs),
    ("Front Squat", ExerciseCategory::Legs),
    ("Leg Press", ExerciseCategory::Legs),
    ("Leg Extension", ExerciseCategory::Legs),
    ("Leg Curl", ExerciseCategory::Legs),
    ("Walking Lunges", ExerciseCategory::Legs),
    ("Bulgarian Split Squat", ExerciseCategory::Legs),
    ("Calf Raises", ExerciseCategory::Legs),
    ("Hack Squat", ExerciseCategory::Legs),
    ("Overhead Press (Barbell)", ExerciseCategory::Shoulders),
    ("Overhead Press (Dumbbell)", ExerciseCategory::Shoulders),
    ("Arnold Press", ExerciseCategory::Shoulders),
    ("Lateral Raise", ExerciseCategory::Shoulders),
    ("Front Raise", ExerciseCategory::Shoulders),
    ("Rear Delt Fly", ExerciseCategory::Shoulders),
    ("Upright Row", ExerciseCategory::Shoulders),
    ("Shoulder Press Machine", ExerciseCategory::Shoulders),
    ("Bicep Curl (Barbell)", ExerciseCategory::Arms),
    ("Bicep Curl (Dumbbell)", ExerciseCategory::Arms),
    ("Hammer Curl", ExerciseCategory::Arms),
    ("Preacher Curl", ExerciseCategory::Arms),
    ("Cable Curl", ExerciseCategory::Arms),
    ("Tricep Extension", ExerciseCategory::Arms),
    ("Tricep Pushdown", ExerciseCategory::Arms),
    ("Close-Grip Bench Press", ExerciseCategory::Arms),
    ("Dips", ExerciseCategory::Arms),
    ("Plank", ExerciseCategory::Core),
    ("Crunches", ExerciseCategory::Core),
    ("Russian Twists", ExerciseCategory::Core),
    ("Leg Raises", ExerciseCategory::Core),
    ("Ab Wheel", ExerciseCategory::Core),
    ("Cable Crunch", ExerciseCategory::Core),
    ("Dead Bug", ExerciseCategory::Core),
    ("Treadmill", ExerciseCategory::Cardio),
    ("Elliptical", ExerciseCategory::Cardio),
    ("Rowing Machine", ExerciseCategory::Cardio),
    ("Stationary Bike", ExerciseCategory::Cardio),
    ("Stair Climber", ExerciseCategory::Cardio),
];

/// Starting working weight in pounds for a category
const fn base_weight(category: ExerciseCategory) -> f64 {
    match category {
        ExerciseCategory::Legs | ExerciseCategory::Back => 185.0,
        ExerciseCategory::Chest => 135.0,
        ExerciseCategory::Shoulders => 75.0,
        ExerciseCategory::Arms => 45.0,
        ExerciseCategory::Core | ExerciseCategory::Cardio | ExerciseCategory::Other => 0.0,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    if args.verbose {
        env::set_var("RUST_LOG", "debug");
    }
    logging::init_from_env()?;

    let mut database = DatabaseConfig::from_env()?;
    if let Some(url) = args.database_url.as_deref() {
        database.url = DatabaseUrl::parse_url(url)?;
    }
    database.auto_migrate = true;

    let store = SqliteSetStore::connect(&database)
        .await
        .context("Failed to open set store")?;
    let user_id = args.user_id.unwrap_or_else(Uuid::new_v4);
    let mut rng = args
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    info!(user_id = %user_id, database = %database.url, "Seeding demo data");
    let started = Instant::now();

    let catalog = seed_catalog(&store, user_id).await?;
    let sets = seed_history(&store, user_id, &catalog, args.days, &mut rng).await?;

    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_database_operation("seed", "workout_sets", true, elapsed_ms);

    println!("Seeded {} exercises and {sets} sets for user {user_id}", catalog.len());
    Ok(())
}

/// Create the default catalog, reusing exercises the user already has
async fn seed_catalog(
    store: &SqliteSetStore,
    user_id: Uuid,
) -> Result<Vec<(Uuid, ExerciseCategory)>> {
    let existing = store.list_exercises(user_id).await?;
    let mut catalog = Vec::with_capacity(DEFAULT_EXERCISES.len());

    for (name, category) in DEFAULT_EXERCISES {
        let id = match existing.iter().find(|exercise| exercise.name == *name) {
            Some(exercise) => exercise.id,
            None => {
                store
                    .create_exercise(user_id, &NewExercise::new(*name, *category))
                    .await?
                    .id
            }
        };
        catalog.push((id, *category));
    }

    info!(count = catalog.len(), "Exercise catalog ready");
    Ok(catalog)
}

/// Generate roughly four sessions a week with slowly progressing weights
async fn seed_history(
    store: &SqliteSetStore,
    user_id: Uuid,
    catalog: &[(Uuid, ExerciseCategory)],
    days: u32,
    rng: &mut StdRng,
) -> Result<usize> {
    let lifts: Vec<_> = catalog
        .iter()
        .filter(|(_, category)| base_weight(*category) > 0.0)
        .collect();
    if lifts.is_empty() {
        return Ok(0);
    }

    let now = Utc::now();
    let mut recorded = 0;

    for days_ago in (0..days).rev() {
        if !rng.gen_bool(4.0 / 7.0) {
            continue;
        }
        let progress = 1.0 + f64::from(days - days_ago) / f64::from(days.max(1)) * 0.15;
        let session_start = now - Duration::days(i64::from(days_ago))
            - Duration::minutes(rng.gen_range(30..180));

        for slot in 0..rng.gen_range(4..7) {
            let (exercise_id, category) = lifts[rng.gen_range(0..lifts.len())];
            let weight = (base_weight(*category) * progress / 5.0).round() * 5.0;

            for set_index in 0..3 {
                let set = NewSet {
                    exercise_id: *exercise_id,
                    performed_at: session_start + Duration::minutes(slot * 12 + set_index * 3),
                    weight,
                    reps: rng.gen_range(5..=12),
                };
                store.record_set(user_id, set).await?;
                recorded += 1;
            }
        }
        debug!(days_ago, "Seeded session");
    }

    Ok(recorded)
}
