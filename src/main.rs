//! Headless match: fighters driven by seeded bot inputs on the configured
//! stage, stepped at a fixed 60 Hz.
//!
//! Usage: `whisker-brawl [seed] [frames]`

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::ecs::message::MessageWriter;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use whisker_brawl::SimulationPlugin;
use whisker_brawl::content::ActiveDefaults;
use whisker_brawl::core::{MatchConfig, SimulationFrame, SimulationSet};
use whisker_brawl::fighter::{Buttons, Fighter, FighterInput, FighterTuning, spawn_fighter};
use whisker_brawl::stage::StageLayout;

const DEFAULT_FRAMES: u64 = 600;

/// Chance per frame that a bot changes the buttons it holds.
const BOT_REPRESS_CHANCE: f64 = 0.12;

#[derive(Resource, Debug, Clone, Copy)]
struct FrameLimit(u64);

#[derive(Resource)]
struct BotRng(ChaCha8Rng);

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(0);
    let frames = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / 60.0),
        )))
        .add_plugins(LogPlugin::default())
        .add_plugins(SimulationPlugin)
        .insert_resource(MatchConfig { seed })
        .insert_resource(FrameLimit(frames))
        .add_systems(Startup, (seed_bots, spawn_fighters))
        .add_systems(Update, drive_bots.in_set(SimulationSet::Input))
        .add_systems(Update, finish_match.after(SimulationSet::Present))
        .run();
}

fn seed_bots(mut commands: Commands, config: Res<MatchConfig>) {
    info!("Match seed {}", config.seed);
    commands.insert_resource(BotRng(ChaCha8Rng::seed_from_u64(config.seed)));
}

fn spawn_fighters(
    mut commands: Commands,
    stage: Res<StageLayout>,
    tuning: Res<FighterTuning>,
    defaults: Res<ActiveDefaults>,
) {
    for slot in 0..defaults.0.player_count {
        spawn_fighter(&mut commands, slot, &stage, &tuning);
    }
}

/// Bots hold a random button set and occasionally switch to another one.
fn drive_bots(rng: Option<ResMut<BotRng>>, mut inputs: Query<&mut FighterInput>) {
    let Some(mut rng) = rng else {
        return;
    };

    for mut input in &mut inputs {
        let mut held = input.0.held;
        if rng.0.random_bool(BOT_REPRESS_CHANCE) {
            held = Buttons::from_bits_truncate(rng.0.random::<u8>());
            if held.contains(Buttons::LEFT | Buttons::RIGHT) {
                held.remove(Buttons::LEFT);
            }
        }
        input.set_held(held);
    }
}

fn finish_match(
    frame: Res<SimulationFrame>,
    limit: Res<FrameLimit>,
    fighters: Query<&Fighter>,
    mut exit: MessageWriter<AppExit>,
) {
    if frame.0 < limit.0 {
        return;
    }

    for fighter in &fighters {
        let view = fighter.view();
        info!(
            "Fighter {} ended in {} at ({:.1}, {:.1}) with {:.1}%",
            view.slot, view.state, view.x, view.y, view.percent
        );
    }
    exit.write(AppExit::Success);
}
