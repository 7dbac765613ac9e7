//! Draw list for the rendering collaborator
//!
//! The simulation never touches the GPU. Each frame the renderer asks for the
//! ordered list of sprites and draws `vertex::QUAD` once per entry.

pub mod vertex;

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::sim::{EntityId, EntityKind, GameState};

pub use vertex::{QUAD, Vertex};

/// Texture slot a sprite samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TextureHandle {
    Ship = 0,
    Diamond = 1,
    Fire = 2,
}

impl TextureHandle {
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Ship => TextureHandle::Ship,
            EntityKind::Diamond => TextureHandle::Diamond,
            EntityKind::Fire => TextureHandle::Fire,
        }
    }

    /// Asset path relative to the game root
    pub fn path(&self) -> &'static str {
        match self {
            TextureHandle::Ship => "textures/ship.png",
            TextureHandle::Diamond => "textures/diamond.png",
            TextureHandle::Fire => "textures/fire.png",
        }
    }

    /// Sampler filter; the ship is pixel art
    pub fn filter(&self) -> wgpu::FilterMode {
        match self {
            TextureHandle::Ship => wgpu::FilterMode::Nearest,
            TextureHandle::Diamond | TextureHandle::Fire => wgpu::FilterMode::Linear,
        }
    }
}

/// One sprite to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderable {
    pub entity: EntityId,
    pub transform: Mat4,
    pub texture: TextureHandle,
}

/// Sprites in draw order: ship, then diamonds, then fires
pub fn list_renderables(state: &GameState) -> Vec<Renderable> {
    std::iter::once(state.ship_id())
        .chain(state.diamonds().iter().copied())
        .chain(state.fires().iter().copied())
        .map(|id| {
            let entity = state.entity(id);
            Renderable {
                entity: entity.id,
                transform: entity.transform,
                texture: TextureHandle::for_kind(entity.kind),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::capture;

    #[test]
    fn test_draw_order() {
        let state = GameState::new();
        let list = list_renderables(&state);
        let textures: Vec<_> = list.iter().map(|r| r.texture).collect();
        assert_eq!(
            textures,
            vec![
                TextureHandle::Ship,
                TextureHandle::Diamond,
                TextureHandle::Diamond,
                TextureHandle::Diamond,
                TextureHandle::Fire,
                TextureHandle::Fire,
                TextureHandle::Fire,
            ]
        );
        assert_eq!(list[0].entity, state.ship_id());
    }

    #[test]
    fn test_captured_entities_stay_visible() {
        let mut state = GameState::new();
        capture(&mut state, 0);
        let list = list_renderables(&state);
        assert_eq!(list.len(), 7);
        let diamond = state.diamonds()[0];
        let entry = list.iter().find(|r| r.entity == diamond).unwrap();
        assert_eq!(entry.transform, state.entity(diamond).transform);
    }

    #[test]
    fn test_texture_metadata() {
        assert_eq!(TextureHandle::Ship.filter(), wgpu::FilterMode::Nearest);
        assert_eq!(TextureHandle::Fire.filter(), wgpu::FilterMode::Linear);
        assert!(TextureHandle::Diamond.path().ends_with("diamond.png"));
        assert_eq!(TextureHandle::Fire as u8, 2);
    }
}
