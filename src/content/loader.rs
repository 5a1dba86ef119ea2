//! Loader for RON content files at startup.

use bevy::prelude::*;
use ron::Options;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::data::*;
use crate::fighter::FighterTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Everything read from `assets/data`.
#[derive(Debug, Clone)]
pub struct LoadedContent {
    pub stages: HashMap<String, StageDef>,
    pub tuning: FighterTuning,
    pub defaults: GameplayDefaults,
}

impl LoadedContent {
    /// The stage named by the gameplay defaults, if it was loaded.
    pub fn selected_stage(&self) -> Option<&StageDef> {
        self.stages.get(&self.defaults.stage_id)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON text, tagging errors with a file name for reporting.
pub(crate) fn parse_ron<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    let data: DataFile<T> = parse_ron(&path.display().to_string(), &contents)?;
    Ok(data.items)
}

/// Load a single RON struct (not wrapped in DataFile).
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_ron(&path.display().to_string(), &contents)
}

/// Load all content from `base_path/*.ron`.
/// Returns every error encountered rather than stopping at the first.
pub fn load_all_content(base_path: &Path) -> Result<LoadedContent, Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let mut stages = HashMap::new();
    match load_data_file::<StageDef>(&base_path.join("stages.ron")) {
        Ok(items) => {
            for stage in items {
                stages.insert(stage.id.clone(), stage);
            }
        }
        Err(e) => errors.push(e),
    }

    let tuning = match load_single_file::<FighterTuning>(&base_path.join("fighter_tuning.ron")) {
        Ok(tuning) => tuning,
        Err(e) => {
            errors.push(e);
            FighterTuning::default()
        }
    };

    let defaults =
        match load_single_file::<GameplayDefaults>(&base_path.join("gameplay_defaults.ron")) {
            Ok(defaults) => defaults,
            Err(e) => {
                errors.push(e);
                GameplayDefaults::default()
            }
        };

    if !errors.is_empty() {
        return Err(errors);
    }

    debug!(
        "Loaded {} stage(s), selected stage '{}'",
        stages.len(),
        defaults.stage_id
    );

    Ok(LoadedContent {
        stages,
        tuning,
        defaults,
    })
}
