//! Load maps from TOML or JSON configuration
//!
//! A [`MapConfig`] lists entity descriptors plus the run settings. Building
//! it yields a validated [`WorldState`] and [`RunConfig`]. Ids and omitted
//! piston phase slots come from a ChaCha RNG seeded by the map, so the same
//! config always produces the same world.

use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Builder;

use crate::core::config::{RunConfig, MAX_PHASE_SLOT, MIN_PHASE_SLOT};
use crate::core::error::{GridError, Result};
use crate::core::types::{Direction, EntityId, GridPos};
use crate::simulation::run::SimulationRun;
use crate::world::entity::{Entity, EntityKind, EntityTag};
use crate::world::state::WorldState;

/// Seed used when a map does not pin one
pub const DEFAULT_SEED: u64 = 0x5EED;

/// One entity as written in a map file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityConfig {
    pub kind: EntityTag,
    pub x: i32,
    pub z: i32,
    /// Required for pistons and slide floors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing: Option<Direction>,
    /// Pistons only; drawn from 1..=4 when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_slot: Option<u8>,
    /// Explicit id; generated as `<kind>-<uuid>` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl EntityConfig {
    pub fn new(kind: EntityTag, x: i32, z: i32) -> Self {
        Self {
            kind,
            x,
            z,
            facing: None,
            phase_slot: None,
            id: None,
        }
    }

    pub fn player_at(x: i32, z: i32) -> Self {
        Self::new(EntityTag::Player, x, z)
    }

    pub fn goal_at(x: i32, z: i32) -> Self {
        Self::new(EntityTag::Goal, x, z)
    }

    pub fn box_at(x: i32, z: i32) -> Self {
        Self::new(EntityTag::Box, x, z)
    }

    pub fn piston_at(x: i32, z: i32, facing: Direction) -> Self {
        Self::new(EntityTag::Piston, x, z).facing(facing)
    }

    pub fn slide_floor_at(x: i32, z: i32, facing: Direction) -> Self {
        Self::new(EntityTag::SlideFloor, x, z).facing(facing)
    }

    pub fn facing(mut self, facing: Direction) -> Self {
        self.facing = Some(facing);
        self
    }

    pub fn phase_slot(mut self, slot: u8) -> Self {
        self.phase_slot = Some(slot);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn position(&self) -> GridPos {
        GridPos::new(self.x, self.z)
    }

    fn require_facing(&self) -> Result<Direction> {
        self.facing.ok_or(GridError::MissingFacing {
            kind: self.kind.name(),
            position: self.position(),
        })
    }

    fn to_entity(&self, rng: &mut ChaCha8Rng) -> Result<Entity> {
        let kind = match self.kind {
            EntityTag::Player => EntityKind::Player,
            EntityTag::Goal => EntityKind::Goal,
            EntityTag::Box => EntityKind::Box,
            EntityTag::SlideFloor => EntityKind::SlideFloor {
                facing: self.require_facing()?,
            },
            EntityTag::Piston => EntityKind::Piston {
                facing: self.require_facing()?,
                phase_slot: match self.phase_slot {
                    Some(slot) => slot,
                    None => rng.gen_range(MIN_PHASE_SLOT..=MAX_PHASE_SLOT),
                },
            },
        };

        // Drawn even for explicit ids so adding an id never reshuffles the rest
        let bytes: [u8; 16] = rng.gen();
        let id = match &self.id {
            Some(id) => EntityId::new(id.clone()),
            None => {
                let uuid = Builder::from_random_bytes(bytes).into_uuid();
                EntityId::new(format!("{}-{}", self.kind.name(), uuid))
            }
        };

        Ok(Entity::new(id, self.position(), kind))
    }
}

/// A complete map: entities plus run settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default)]
    pub name: String,
    /// Starting energy budget
    pub energy: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub initial_phase: u8,
    #[serde(default)]
    pub stay_costs_energy: bool,
    #[serde(default)]
    pub entities: Vec<EntityConfig>,
}

impl MapConfig {
    pub fn new(name: impl Into<String>, energy: i32) -> Self {
        Self {
            name: name.into(),
            energy,
            seed: None,
            initial_phase: 0,
            stay_costs_energy: false,
            entities: Vec::new(),
        }
    }

    pub fn with_entity(mut self, entity: EntityConfig) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_stay_cost(mut self, stay_costs_energy: bool) -> Self {
        self.stay_costs_energy = stay_costs_energy;
        self
    }

    pub fn with_initial_phase(mut self, phase: u8) -> Self {
        self.initial_phase = phase;
        self
    }

    /// Parse a map from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a map from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a map file; `.json` is read as JSON, anything else as TOML
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let map = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        tracing::debug!(path = %path.display(), name = %map.name, "Loaded map file");
        Ok(map)
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(self.energy)
            .with_stay_cost(self.stay_costs_energy)
            .with_initial_phase(self.initial_phase)
    }

    /// Instantiate the world, failing fast on malformed entries
    pub fn build_world(&self) -> Result<WorldState> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed.unwrap_or(DEFAULT_SEED));
        let entities = self
            .entities
            .iter()
            .map(|entity| entity.to_entity(&mut rng))
            .collect::<Result<Vec<_>>>()?;
        WorldState::new(entities)
    }

    /// Build the world and start a run on it
    pub fn start_run(&self) -> Result<SimulationRun> {
        let world = self.build_world()?;
        SimulationRun::new(world, self.run_config())
    }
}
