//! Bubble components, identity, and tunable lifecycle settings.
use std::{fmt, fs, path::Path, time::Duration};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/bubbles.toml";

/// Unique identifier for a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Component)]
pub struct BubbleId(u64);

impl BubbleId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BubbleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bubble-{:04}", self.0)
    }
}

/// Resource that issues monotonically increasing bubble ids.
///
/// Ids are never reused within a session, so an expiry can only ever
/// target the bubble it was armed for.
#[derive(Resource, Default)]
pub struct BubbleIdGenerator {
    next: u64,
}

impl BubbleIdGenerator {
    pub fn next_id(&mut self) -> BubbleId {
        let id = self.next;
        self.next += 1;
        BubbleId::new(id)
    }
}

/// Component attached to every live bubble entity.
///
/// Carries the bubble's identity and its lifetime timer. The timer doubles
/// as the expiry schedule and the growth-animation clock: scale is derived
/// from its elapsed time each frame and never stored.
#[derive(Component, Debug)]
pub struct Bubble {
    id: BubbleId,
    lifetime: Timer,
}

impl Bubble {
    /// Create a bubble with a one-shot lifetime of `ttl_secs`.
    pub fn new(id: BubbleId, ttl_secs: f32) -> Self {
        Self {
            id,
            lifetime: Timer::from_seconds(ttl_secs, TimerMode::Once),
        }
    }

    pub fn id(&self) -> BubbleId {
        self.id
    }

    /// Tick the lifetime timer.
    pub fn tick(&mut self, delta: Duration) {
        self.lifetime.tick(delta);
    }

    /// Check if the bubble's lifetime has expired.
    pub fn is_expired(&self) -> bool {
        self.lifetime.is_finished()
    }

    /// Current growth scale, derived from elapsed lifetime.
    ///
    /// Monotonically non-decreasing while the bubble is alive.
    pub fn scale(&self, growth_per_ms: f32) -> f32 {
        1.0 + self.lifetime.elapsed_secs() * 1000.0 * growth_per_ms
    }
}

/// The bubble's fill color, chosen at spawn time, immutable afterwards.
#[derive(Component, Debug, Clone, Copy)]
pub struct BubbleColor(pub Color);

#[derive(Debug, Clone, Deserialize, Default)]
struct RawBubbleConfig {
    #[serde(default)]
    lifecycle: RawLifecycleSection,
    #[serde(default)]
    animation: RawAnimationSection,
    #[serde(default)]
    surface: RawSurfaceSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawLifecycleSection {
    ttl_seconds: f32,
}

impl Default for RawLifecycleSection {
    fn default() -> Self {
        Self { ttl_seconds: 3.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawAnimationSection {
    growth_per_ms: f32,
}

impl Default for RawAnimationSection {
    fn default() -> Self {
        Self {
            growth_per_ms: 0.0075,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSurfaceSection {
    radius: f32,
    opacity: f32,
}

impl Default for RawSurfaceSection {
    fn default() -> Self {
        Self {
            radius: 12.5,
            opacity: 0.5,
        }
    }
}

/// Tunable parameters describing bubble lifetime and appearance.
#[derive(Resource, Debug, Clone)]
pub struct BubbleSettings {
    /// How long a bubble remains live after spawning (seconds).
    pub ttl_seconds: f32,

    /// Scale gained per elapsed millisecond of lifetime.
    pub growth_per_ms: f32,

    /// Circle radius before any growth is applied (world units).
    pub radius: f32,

    /// Fill opacity of the rendered circle.
    pub opacity: f32,
}

impl BubbleSettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawBubbleConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawBubbleConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawBubbleConfig::default().into()
            }
        }
    }
}

impl Default for BubbleSettings {
    fn default() -> Self {
        RawBubbleConfig::default().into()
    }
}

impl From<RawBubbleConfig> for BubbleSettings {
    fn from(value: RawBubbleConfig) -> Self {
        Self {
            ttl_seconds: value.lifecycle.ttl_seconds.max(0.1),
            growth_per_ms: value.animation.growth_per_ms.max(0.0),
            radius: value.surface.radius.max(1.0),
            opacity: value.surface.opacity.clamp(0.0, 1.0),
        }
    }
}
