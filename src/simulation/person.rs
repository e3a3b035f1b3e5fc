//! Person behavior, state, and lifecycle.
//!
//! Each person runs a small composite state machine: walk toward a target,
//! scan for apples while wandering, lock onto the first apple seen, eat on
//! arrival, then pick the next target. State changes and movement live here;
//! drawing is a separate read-only phase that emits [`DrawCmd`]s.

use glam::Vec2;
use rand::Rng;

use super::draw::{DrawCmd, Rgba};
use super::food::{AppleId, AppleStore, StaleApple};
use super::geometry;
use super::map::Map;
use super::params::Params;

/// Composite movement/eating state.
///
/// A single enum replaces separate movement and eating flags so that a food
/// lock without pursuit, or eating while en route, cannot be represented.
/// Between ticks only `Wandering` and `PursuingFood` occur; `Arriving` and
/// `Eating` are passed through while a tick resolves an arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Walking toward a randomly chosen target, scanning for apples.
    Wandering,
    /// Reached a plain waypoint; a new target is chosen before the tick ends.
    Arriving,
    /// Walking toward a locked apple.
    PursuingFood {
        /// Handle of the apple being approached.
        apple: AppleId,
    },
    /// Consuming a locked apple after arriving on top of it.
    Eating {
        /// Handle of the apple being consumed.
        apple: AppleId,
    },
}

/// What a person's tick did, reported for logging and stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Moved one step toward the current target.
    Stepped,
    /// Arrived at a plain waypoint and chose a new target.
    Retargeted,
    /// Consumed an apple, then chose a new target.
    Ate(AppleId),
}

/// Optional overrides for [`Person::spawn`].
///
/// Fields left as `None` are randomized from the configured ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnOverrides {
    /// Fixed initial position instead of a random point on the map.
    pub pos: Option<Vec2>,
    /// Fixed maximum life instead of a draw from `life_range`.
    pub max_life: Option<f32>,
    /// Fixed maximum energy instead of a draw from `energy_range`.
    pub max_energy: Option<f32>,
}

/// A simulated person that wanders the map and eats apples.
///
/// Fields are private; state only changes through [`Person::perceive_food`]
/// and [`Person::tick`] so the behavior/target coupling cannot be broken
/// from outside.
#[derive(Debug, Clone)]
pub struct Person {
    id: usize,
    pos: Vec2,
    size: Vec2,
    life: f32,
    energy: f32,
    max_life: f32,
    max_energy: f32,
    velocity: Vec2,
    behavior: Behavior,
    target: Vec2,
    comfort_radius: f32,
    perception_radius: f32,
    wander_probability: f32,
    life_decrement: f32,
    energy_decrement: f32,
}

impl Person {
    /// Creates a new person with an initial random target computed
    /// immediately.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier assigned by the world
    /// * `params` - Tunables and randomization ranges
    /// * `map` - Bounds for the initial position and target
    /// * `rng` - Random source for size, vitality maxima, and the target
    /// * `overrides` - Fixed values to use instead of randomized ones
    ///
    /// # Panics
    ///
    /// Expects `params` to have passed [`Params::validate`]; an inverted
    /// life, energy, or size range panics on the range draw.
    pub fn spawn(
        id: usize,
        params: &Params,
        map: &Map,
        rng: &mut impl Rng,
        overrides: SpawnOverrides,
    ) -> Self {
        let max_life = overrides
            .max_life
            .unwrap_or_else(|| rng.random_range(params.life_range[0]..=params.life_range[1]));
        let max_energy = overrides
            .max_energy
            .unwrap_or_else(|| rng.random_range(params.energy_range[0]..=params.energy_range[1]));
        let size = Vec2::new(
            rng.random_range(params.size_range[0]..=params.size_range[1]),
            rng.random_range(params.size_range[0]..=params.size_range[1]),
        );
        let pos = overrides.pos.unwrap_or_else(|| map.random_point(rng));

        let mut person = Self {
            id,
            pos,
            size,
            life: max_life,
            energy: max_energy,
            max_life,
            max_energy,
            velocity: Vec2::new(params.velocity_x, params.velocity_y),
            behavior: Behavior::Wandering,
            target: pos,
            comfort_radius: params.comfort_radius,
            perception_radius: params.perception_radius,
            wander_probability: params.wander_probability,
            life_decrement: params.life_decrement,
            energy_decrement: params.energy_decrement,
        };
        person.choose_next_target(map, rng);
        person
    }

    /// Scans the apple store and locks onto the first apple in insertion
    /// order within the perception radius.
    ///
    /// Only acts while wandering: a held lock is never replaced, so calling
    /// this repeatedly is idempotent. Distances are measured from `pos`, and
    /// the radius boundary counts as inside. No claim is recorded on the
    /// apple itself; two people may lock the same one and race to it.
    pub fn perceive_food(&mut self, apples: &AppleStore) {
        if self.behavior != Behavior::Wandering {
            return;
        }
        for (id, apple) in apples.iter() {
            if !apple.is_taken()
                && geometry::point_in_circle(apple.pos(), self.pos, self.perception_radius)
            {
                self.behavior = Behavior::PursuingFood { apple: id };
                self.target = apple.pos();
                return;
            }
        }
    }

    /// Runs one simulation tick: vitality decay, then the movement/eating
    /// state machine.
    ///
    /// On a stale food claim the person has already recovered (lock dropped,
    /// fresh wander target) when the error is returned; the caller only
    /// needs to log it.
    pub fn tick(
        &mut self,
        apples: &mut AppleStore,
        map: &Map,
        rng: &mut impl Rng,
    ) -> Result<TickEvent, StaleApple> {
        self.apply_decay();
        self.advance(apples, map, rng)
    }

    /// Emits this person's draw commands in layering order: body, target
    /// marker, pursuit line, comfort circle, perception circle.
    ///
    /// The radius circles sit on the body center while perception itself
    /// measures from `pos`, so the overlay is offset by half a body size.
    pub fn draw_commands(&self, out: &mut Vec<DrawCmd>) {
        let center = self.center();
        let target_center = self.target + self.size / 2.0;
        out.push(DrawCmd::Rect {
            min: self.pos,
            max: self.pos + self.size,
            color: Rgba::WHITE,
        });
        out.push(DrawCmd::Rect {
            min: self.target,
            max: self.target + self.size,
            color: Rgba::BLUE,
        });
        out.push(DrawCmd::Line {
            from: center,
            to: target_center,
            color: Rgba::BLUE,
        });
        out.push(DrawCmd::Circle {
            center,
            radius: self.comfort_radius,
            color: Rgba::TRANSLUCENT_BLUE,
        });
        out.push(DrawCmd::Circle {
            center,
            radius: self.perception_radius,
            color: Rgba::TRANSLUCENT_GREEN,
        });
    }

    /// Unique identifier assigned by the world.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current position (top-left corner of the body rectangle).
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Body rectangle size, fixed at creation.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Center of the body rectangle.
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// The point currently walked toward.
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Current composite behavior state.
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Remaining life.
    pub fn life(&self) -> f32 {
        self.life
    }

    /// Remaining energy.
    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// Maximum energy this person can hold.
    pub fn max_energy(&self) -> f32 {
        self.max_energy
    }

    /// Maximum life this person started with.
    pub fn max_life(&self) -> f32 {
        self.max_life
    }

    /// True while both vitality counters are positive.
    pub fn is_alive(&self) -> bool {
        self.life > 0.0 && self.energy > 0.0
    }

    /// Reduces both vitality counters by their per-tick decrements,
    /// clamping at zero.
    fn apply_decay(&mut self) {
        self.life = (self.life - self.life_decrement).max(0.0);
        self.energy = (self.energy - self.energy_decrement).max(0.0);
    }

    /// One pass of the movement/eating state machine.
    ///
    /// Arrival is exact equality on both axes; the landing clamp in
    /// [`step_axis`] guarantees it fires. On arrival the state passes
    /// through `Arriving` or `Eating` and settles back on `Wandering` with
    /// a fresh target, whether or not the claimed apple was still there.
    fn advance(
        &mut self,
        apples: &mut AppleStore,
        map: &Map,
        rng: &mut impl Rng,
    ) -> Result<TickEvent, StaleApple> {
        if self.pos != self.target {
            self.step();
            return Ok(TickEvent::Stepped);
        }

        let event = match std::mem::replace(&mut self.behavior, Behavior::Arriving) {
            Behavior::PursuingFood { apple } => {
                self.behavior = Behavior::Eating { apple };
                match apples.take(apple) {
                    Ok(gained) => {
                        self.energy = (self.energy + gained).min(self.max_energy);
                        Ok(TickEvent::Ate(apple))
                    }
                    Err(stale) => Err(stale),
                }
            }
            _ => Ok(TickEvent::Retargeted),
        };
        self.choose_next_target(map, rng);
        event
    }

    /// Advances each axis independently toward the target.
    fn step(&mut self) {
        self.pos.x = step_axis(self.pos.x, self.target.x, self.velocity.x);
        self.pos.y = step_axis(self.pos.y, self.target.y, self.velocity.y);
    }

    /// Picks the next target: map-wide with `wander_probability`, otherwise
    /// within the comfort radius, clamped to bounds by the map.
    fn choose_next_target(&mut self, map: &Map, rng: &mut impl Rng) {
        self.target = if rng.random::<f32>() < self.wander_probability {
            map.random_point(rng)
        } else {
            map.random_point_in_circle(rng, self.pos, self.comfort_radius)
        };
        self.behavior = Behavior::Wandering;
    }
}

/// Moves one coordinate toward its target by at most `speed`.
///
/// When the remaining distance fits within one step the target coordinate is
/// assigned outright, so arrival holds under exact f32 equality and a step
/// never overshoots.
fn step_axis(current: f32, target: f32, speed: f32) -> f32 {
    let remaining = target - current;
    if remaining == 0.0 {
        current
    } else if remaining.abs() <= speed {
        target
    } else {
        current + speed.copysign(remaining)
    }
}
