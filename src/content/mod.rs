//! Content domain: RON-backed stage and tuning data.

mod data;
mod loader;
mod validation;


pub use data::{DataFile, GameplayDefaults, PlatformDef, StageDef};
pub use loader::{ContentLoadError, LoadedContent, load_all_content};
pub use validation::{ValidationError, validate_content, validate_stage, validate_tuning};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::stage::StageLayout;

/// Directory the content files are read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentPath(pub PathBuf);

impl Default for ContentPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data"))
    }
}

/// Active gameplay defaults, available after content load.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveDefaults(pub GameplayDefaults);

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<StageDef>()
            .register_type::<PlatformDef>()
            .register_type::<GameplayDefaults>()
            .init_resource::<ContentPath>()
            .init_resource::<ActiveDefaults>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load content and install the stage and tuning resources.
/// Any load or validation failure keeps the built-in defaults.
fn load_content(mut commands: Commands, path: Res<ContentPath>) {
    let content = match load_all_content(&path.0) {
        Ok(content) => content,
        Err(errors) => {
            for error in &errors {
                warn!("{}", error);
            }
            warn!("Content load failed, using built-in stage and tuning");
            return;
        }
    };

    let errors = validate_content(&content);
    if !errors.is_empty() {
        for error in &errors {
            warn!("{}", error);
        }
        warn!("Content validation failed, using built-in stage and tuning");
        return;
    }

    if let Some(stage) = content.selected_stage() {
        let layout = StageLayout::from_def(stage);
        info!(
            "Stage '{}' loaded with {} platform(s)",
            layout.name,
            layout.platforms.len()
        );
        commands.insert_resource(layout);
    }
    commands.insert_resource(content.tuning.clone());
    commands.insert_resource(ActiveDefaults(content.defaults.clone()));
}
