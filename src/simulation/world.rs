//! World state and the per-frame simulation pass.
//!
//! The world owns the map, the people, and the apple store, and drives them
//! through discrete ticks. Each tick updates every person in population
//! order, sweeps out the dead and the eaten, and tops the orchard back up.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::draw::{DrawCmd, Rgba};
use super::food::{Apple, AppleId, AppleStore};
use super::map::Map;
use super::params::{ConfigError, Params};
use super::person::{Person, SpawnOverrides, TickEvent};

/// Running totals the world keeps for the UI and logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldStats {
    /// Ticks simulated since the world was created.
    pub ticks: u64,
    /// Apples successfully consumed.
    pub apples_eaten: u64,
    /// Apples added by the respawn pass (initial stock not included).
    pub apples_spawned: u64,
    /// People removed after their life or energy ran out.
    pub deaths: u64,
}

/// The complete simulation state.
#[derive(Debug)]
pub struct World {
    params: Params,
    map: Map,
    people: Vec<Person>,
    apples: AppleStore,
    rng: SmallRng,
    next_person_id: usize,
    spawn_carry: f32,
    stats: WorldStats,
}

impl World {
    /// Builds a world from validated parameters, populating the initial
    /// people and apples.
    ///
    /// With `seed` set the run is fully reproducible; otherwise the RNG is
    /// seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the parameters fail validation.
    pub fn new(params: Params, seed: Option<u64>) -> Result<Self, ConfigError> {
        params.validate()?;
        let map = Map::new(params.map_width, params.map_height)?;
        let mut rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut apples = AppleStore::new();
        for _ in 0..params.n_apples {
            let pos = map.random_point(&mut rng);
            apples.insert(Apple::new(pos, params.apple_energy));
        }

        let mut people = Vec::with_capacity(params.n_people);
        for id in 0..params.n_people {
            people.push(Person::spawn(
                id,
                &params,
                &map,
                &mut rng,
                SpawnOverrides::default(),
            ));
        }

        info!(
            ?seed,
            people = people.len(),
            apples = apples.len(),
            "world initialized"
        );

        Ok(Self {
            next_person_id: params.n_people,
            params,
            map,
            people,
            apples,
            rng,
            spawn_carry: 0.0,
            stats: WorldStats::default(),
        })
    }

    /// Runs one simulation tick.
    ///
    /// People update in population order: each perceives the apples as they
    /// stand at that moment, then decays and moves. Apples eaten earlier in
    /// the pass are already invisible to people later in it. After the pass
    /// the dead are removed, eaten apples are swept out of the store, and
    /// the respawn rate accumulates toward new apples.
    pub fn tick(&mut self) {
        self.stats.ticks += 1;

        for person in &mut self.people {
            person.perceive_food(&self.apples);
            match person.tick(&mut self.apples, &self.map, &mut self.rng) {
                Ok(TickEvent::Ate(apple)) => {
                    self.stats.apples_eaten += 1;
                    debug!(person = person.id(), ?apple, "apple eaten");
                }
                Ok(_) => {}
                Err(stale) => {
                    warn!(person = person.id(), %stale, "food claim failed, rerouting");
                }
            }
        }

        let before = self.people.len();
        self.people.retain(Person::is_alive);
        let died = before - self.people.len();
        if died > 0 {
            self.stats.deaths += died as u64;
            debug!(died, remaining = self.people.len(), "people starved");
        }

        self.apples.sweep();
        self.respawn_apples();
    }

    /// Collects this frame's draw commands: apples first, then each
    /// person's overlay stack in population order. Later commands paint
    /// over earlier ones.
    pub fn draw_commands(&self) -> Vec<DrawCmd> {
        let mut out = Vec::with_capacity(self.apples.len() + self.people.len() * 5);
        for (_, apple) in self.apples.iter() {
            if !apple.is_taken() {
                out.push(DrawCmd::Circle {
                    center: apple.pos(),
                    radius: self.params.apple_radius,
                    color: Rgba::RED,
                });
            }
        }
        for person in &self.people {
            person.draw_commands(&mut out);
        }
        out
    }

    /// Adds a person at a random position, returning its id.
    pub fn spawn_person(&mut self) -> usize {
        let id = self.next_person_id;
        self.next_person_id += 1;
        let person = Person::spawn(
            id,
            &self.params,
            &self.map,
            &mut self.rng,
            SpawnOverrides::default(),
        );
        self.people.push(person);
        id
    }

    /// Adds an apple at `pos` with the configured energy, returning its
    /// handle.
    pub fn add_apple(&mut self, pos: Vec2) -> AppleId {
        self.apples
            .insert(Apple::new(pos, self.params.apple_energy))
    }

    /// The parameters this world was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The map people and apples live on.
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// The living population, in update order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// The apple store.
    pub fn apples(&self) -> &AppleStore {
        &self.apples
    }

    /// Running totals since the world was created.
    pub fn stats(&self) -> WorldStats {
        self.stats
    }

    /// True once every person has died.
    pub fn is_extinct(&self) -> bool {
        self.people.is_empty()
    }

    /// Accumulates the fractional spawn rate and inserts whole apples while
    /// the orchard is below its configured stock. A rate of 0.25 yields one
    /// apple every fourth tick.
    fn respawn_apples(&mut self) {
        self.spawn_carry += self.params.apple_spawn_rate;
        // Drain the whole part in one step; repeated `carry -= 1.0` stops
        // making progress once the carry outgrows f32 integer precision.
        let whole = self.spawn_carry.floor();
        self.spawn_carry -= whole;
        let deficit = self
            .params
            .n_apples
            .saturating_sub(self.apples.available());
        for _ in 0..(whole as usize).min(deficit) {
            let pos = self.map.random_point(&mut self.rng);
            self.apples
                .insert(Apple::new(pos, self.params.apple_energy));
            self.stats.apples_spawned += 1;
        }
    }
}
