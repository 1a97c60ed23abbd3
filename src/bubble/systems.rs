// src/bubble/systems.rs
//
// Systems for spawning, growing, expiring, and sweeping bubbles.

use bevy::{ecs::message::MessageReader, prelude::*};
use rand::Rng;

use super::components::{Bubble, BubbleColor, BubbleIdGenerator, BubbleSettings};
use super::events::SpawnBubbleEvent;
use super::ledger::BubbleLedger;

/// Spawn a bubble for every pending spawn request.
///
/// Each request yields an independent bubble: a fresh id, a random color,
/// the requesting position, and a freshly armed lifetime timer. Requests at
/// identical coordinates are not deduplicated.
pub fn spawn_bubbles(
    mut commands: Commands,
    mut generator: ResMut<BubbleIdGenerator>,
    mut ledger: ResMut<BubbleLedger>,
    settings: Res<BubbleSettings>,
    mut events: MessageReader<SpawnBubbleEvent>,
) {
    let mut rng = rand::thread_rng();

    for event in events.read() {
        let id = generator.next_id();
        let entity = commands
            .spawn((
                Bubble::new(id, settings.ttl_seconds),
                BubbleColor(random_bubble_color(&mut rng)),
                Transform::from_translation(event.position.extend(0.0)),
            ))
            .id();

        ledger.insert(id, entity);
        debug!(
            "Spawned {} at ({:.1}, {:.1})",
            id, event.position.x, event.position.y
        );
    }
}

/// Attach the circle mesh and translucent material to newly spawned bubbles.
///
/// Kept separate from `spawn_bubbles` so the lifecycle systems can run
/// headless, with the drawing handles joining on the same frame.
pub fn dress_bubbles(
    mut commands: Commands,
    settings: Res<BubbleSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    query: Query<(Entity, &BubbleColor), Added<Bubble>>,
) {
    for (entity, color) in query.iter() {
        commands.entity(entity).insert((
            Mesh2d(meshes.add(Circle::new(settings.radius))),
            MeshMaterial2d(
                materials.add(ColorMaterial::from(color.0.with_alpha(settings.opacity))),
            ),
        ));
    }
}

/// Tick every lifetime timer and despawn bubbles whose TTL has elapsed.
///
/// Despawning releases the drawing handles and the growth animation with the
/// entity, so nothing can keep animating a removed bubble.
pub fn expire_bubbles(
    mut commands: Commands,
    time: Res<Time>,
    mut ledger: ResMut<BubbleLedger>,
    mut query: Query<(Entity, &mut Bubble)>,
) {
    for (entity, mut bubble) in query.iter_mut() {
        bubble.tick(time.delta());
        if !bubble.is_expired() {
            continue;
        }

        // Removal targets the specific id; an entry already gone is a no-op.
        if ledger.remove(bubble.id()).is_some() {
            debug!("Expired {}", bubble.id());
        }
        commands.entity(entity).despawn();
    }
}

/// Apply the growth animation: scale each live bubble from its elapsed
/// lifetime, once per frame.
pub fn grow_bubbles(settings: Res<BubbleSettings>, mut query: Query<(&Bubble, &mut Transform)>) {
    for (bubble, mut transform) in query.iter_mut() {
        transform.scale = Vec3::splat(bubble.scale(settings.growth_per_ms));
    }
}

/// Drain the ledger and despawn every remaining bubble when the app exits.
///
/// Runs in the `Last` schedule so a bubble spawned on the final frame is
/// still swept. After this no expiry timer or growth animation survives.
pub fn sweep_on_exit(
    mut commands: Commands,
    mut exit_events: MessageReader<AppExit>,
    mut ledger: ResMut<BubbleLedger>,
) {
    if exit_events.read().next().is_none() {
        return;
    }

    for (id, entity) in ledger.drain() {
        commands.entity(entity).despawn();
        debug!("Swept {} during teardown", id);
    }
}

fn random_bubble_color(rng: &mut impl Rng) -> Color {
    // Floor each channel away from the dark corner so bubbles stay visible
    // on the black background.
    Color::srgb(
        rng.gen::<f32>() * 0.9 + 0.1,
        rng.gen::<f32>() * 0.9 + 0.1,
        rng.gen::<f32>() * 0.9 + 0.1,
    )
}
