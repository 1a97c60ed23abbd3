//! Bubble plugin wiring identity, lifecycle, and growth systems.
use bevy::prelude::*;
#[cfg(feature = "lifecycle_debug")]
use bevy::time::TimerMode;

use super::components::{BubbleIdGenerator, BubbleSettings};
use super::events::SpawnBubbleEvent;
use super::ledger::BubbleLedger;
use super::systems::{dress_bubbles, expire_bubbles, grow_bubbles, spawn_bubbles, sweep_on_exit};

#[cfg(feature = "lifecycle_debug")]
#[derive(Resource)]
struct PopulationLogTimer {
    timer: Timer,
}

#[cfg(feature = "lifecycle_debug")]
impl Default for PopulationLogTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Plugin providing the bubble lifecycle: spawn on input, grow every frame,
/// expire after the TTL, sweep on teardown.
///
/// # System Ordering
///
/// 1. `spawn_bubbles` - Consumes SpawnBubbleEvent (runs in Update)
/// 2. `dress_bubbles` - Attaches circle visuals to the new entities
/// 3. `expire_bubbles` - Ticks lifetimes, despawns finished bubbles
/// 4. `grow_bubbles` - Applies the growth scale to survivors
///
/// `sweep_on_exit` runs in Last so teardown catches same-frame spawns.
pub struct BubblePlugin;

impl Plugin for BubblePlugin {
    fn build(&self, app: &mut App) {
        let settings = BubbleSettings::load_or_default();
        info!(
            "Bubble lifecycle configured: ttl {:.1}s, growth {:.4}/ms, radius {:.1}",
            settings.ttl_seconds, settings.growth_per_ms, settings.radius
        );

        app.insert_resource(settings)
            .init_resource::<BubbleIdGenerator>()
            .init_resource::<BubbleLedger>()
            .add_event::<SpawnBubbleEvent>()
            .add_systems(
                Update,
                (
                    spawn_bubbles,
                    dress_bubbles.after(spawn_bubbles),
                    expire_bubbles.after(spawn_bubbles),
                    grow_bubbles.after(expire_bubbles),
                ),
            )
            .add_systems(Last, sweep_on_exit);

        #[cfg(feature = "lifecycle_debug")]
        {
            app.init_resource::<PopulationLogTimer>()
                .add_systems(Update, log_bubble_population);
        }
    }
}

#[cfg(feature = "lifecycle_debug")]
fn log_bubble_population(
    time: Res<Time>,
    mut log_timer: ResMut<PopulationLogTimer>,
    ledger: Res<BubbleLedger>,
) {
    if log_timer.timer.tick(time.delta()).just_finished() {
        info!(target: "lifecycle_debug", "Live bubbles: {}", ledger.len());
    }
}
