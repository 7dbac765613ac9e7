//! Game state and entity arena
//!
//! Entities live in a flat arena addressed by `EntityId`. Hierarchy links are
//! plain ids, never ownership.

use glam::{Mat4, Vec2, Vec4};
use serde::{Deserialize, Serialize};

use super::orbit::orbit_offset;
use super::transform::{scale_uniform, scale_xy, translate_along, translate_xy};
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{normalize_heading, polar_to_cartesian};

/// Stable index into the entity arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Diamond,
    Fire,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Diamonds left to collect
    Playing,
    /// Every diamond is attached to the ship
    Won,
}

/// A simulated object with pose and hierarchy state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Homogeneous point (z = 0, w = 1)
    pub position: Vec4,
    /// Facing angle, radians in [0, 2π)
    pub heading: f32,
    /// Accumulated pose; deltas are left-multiplied
    pub transform: Mat4,
    pub default_position: Vec4,
    pub default_heading: f32,
    pub default_transform: Mat4,
    pub active: bool,
    pub parent: Option<EntityId>,
    /// Attached entities in capture order (ship only)
    pub children: Vec<EntityId>,
    /// Deltas applied this tick by an ancestor, waiting for the paired fire
    pub pending_deltas: Vec<Mat4>,
}

impl Entity {
    fn new(id: EntityId, kind: EntityKind, position: Vec2, heading: f32, transform: Mat4) -> Self {
        let position = position.extend(0.0).extend(1.0);
        let heading = normalize_heading(heading);
        Self {
            id,
            kind,
            position,
            heading,
            transform,
            default_position: position,
            default_heading: heading,
            default_transform: transform,
            active: true,
            parent: None,
            children: Vec::new(),
            pending_deltas: Vec::new(),
        }
    }

    /// Position on the plane
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.position.truncate().truncate()
    }

    #[inline]
    pub fn set_pos(&mut self, pos: Vec2) {
        self.position = pos.extend(0.0).extend(1.0);
    }

    /// Fold a delta into the running transform
    #[inline]
    pub fn apply(&mut self, delta: Mat4) {
        self.transform = delta * self.transform;
    }

    /// Apply a delta and record it for the dependent fire
    #[inline]
    pub fn apply_and_record(&mut self, delta: Mat4) {
        self.apply(delta);
        self.pending_deltas.push(delta);
    }

    fn restore_defaults(&mut self) {
        self.position = self.default_position;
        self.heading = self.default_heading;
        self.transform = self.default_transform;
        self.active = true;
        self.parent = None;
        self.children.clear();
        self.pending_deltas.clear();
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Step sizes used by every system
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Diamonds captured since the last reset
    pub score: u32,
    entities: Vec<Entity>,
    ship: EntityId,
    /// Diamond ids; `fires[i]` orbits `diamonds[i]`
    diamonds: Vec<EntityId>,
    fires: Vec<EntityId>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Build the default scene with default tuning
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    /// Build the default scene: one ship, three diamonds, one fire per diamond
    pub fn with_tuning(tuning: Tuning) -> Self {
        let mut state = Self {
            tuning,
            time_ticks: 0,
            phase: GamePhase::Playing,
            score: 0,
            entities: Vec::new(),
            ship: EntityId(0),
            diamonds: Vec::new(),
            fires: Vec::new(),
        };

        state.ship = state.spawn(
            EntityKind::Ship,
            Vec2::ZERO,
            SHIP_HEADING,
            scale_xy(SHIP_SCALE.0, SHIP_SCALE.1),
        );

        for &(distance, direction) in DIAMOND_PLACEMENTS.iter() {
            let transform = translate_along(distance, direction) * scale_uniform(DIAMOND_SCALE);
            let id = state.spawn(
                EntityKind::Diamond,
                polar_to_cartesian(distance, direction),
                0.0,
                transform,
            );
            state.diamonds.push(id);
        }

        let orbit_radius = state.tuning.orbit_radius;
        for i in 0..state.diamonds.len() {
            let diamond = state.entity(state.diamonds[i]);
            let anchor = diamond.pos();
            let transform = translate_xy(0.0, orbit_radius)
                * diamond.default_transform
                * scale_xy(FIRE_SCALE.0, FIRE_SCALE.1);
            let id = state.spawn(
                EntityKind::Fire,
                anchor + orbit_offset(orbit_radius, FIRE_HEADING),
                FIRE_HEADING,
                transform,
            );
            state.fires.push(id);
        }

        log::debug!(
            "Scene built: {} diamonds, {} fires",
            state.diamonds.len(),
            state.fires.len()
        );
        state
    }

    fn spawn(&mut self, kind: EntityKind, position: Vec2, heading: f32, transform: Mat4) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        self.entities
            .push(Entity::new(id, kind, position, heading, transform));
        id
    }

    /// Panics on an id that did not come from this state
    #[inline]
    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.index()]
    }

    #[inline]
    pub fn entity_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id.index()]
    }

    /// All entities in arena order (ship, diamonds, fires)
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[inline]
    pub fn ship_id(&self) -> EntityId {
        self.ship
    }

    #[inline]
    pub fn ship(&self) -> &Entity {
        self.entity(self.ship)
    }

    #[inline]
    pub fn ship_mut(&mut self) -> &mut Entity {
        let id = self.ship;
        self.entity_mut(id)
    }

    pub fn diamonds(&self) -> &[EntityId] {
        &self.diamonds
    }

    pub fn fires(&self) -> &[EntityId] {
        &self.fires
    }

    /// Fire paired with the diamond at `index`
    #[inline]
    pub fn fire_for(&self, index: usize) -> EntityId {
        self.fires[index]
    }

    pub fn total_diamonds(&self) -> usize {
        self.diamonds.len()
    }

    pub fn captured_count(&self) -> usize {
        self.diamonds
            .iter()
            .filter(|&&id| !self.entity(id).active)
            .count()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Return every entity to its default snapshot and start over
    pub fn reset(&mut self) {
        for entity in &mut self.entities {
            entity.restore_defaults();
        }
        self.score = 0;
        self.phase = GamePhase::Playing;
        log::debug!("Scene restored to defaults");
    }

    /// Move to `Won` once every diamond is attached. Returns true on the transition.
    pub fn update_phase(&mut self) -> bool {
        if self.phase == GamePhase::Playing && self.captured_count() == self.total_diamonds() {
            self.phase = GamePhase::Won;
            return true;
        }
        false
    }
}
