//! Frame assembly
//!
//! `render` is a pure function from game state to an ordered list of draw
//! commands, so the game logic can be exercised headless and any backend
//! (GPU, software, test capture) can present a frame.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::GameState;

/// One backend-agnostic draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Connected polyline with a fixed stroke width
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: [f32; 4],
    },
    /// The player sprite, rotated about its center
    Sprite {
        top_left: Vec2,
        size: Vec2,
        angle_deg: f32,
    },
}

/// A complete frame: clear color plus commands in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear_color: [f32; 4],
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Flatten the whole frame into a triangle list (sprite rendered as a
    /// tinted quad; texture-capable backends can match on `Sprite` instead)
    pub fn tessellate(&self) -> Vec<Vertex> {
        let mut vertices = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Polyline {
                    points,
                    width,
                    color,
                } => vertices.extend(shapes::polyline(points, *width, *color)),
                DrawCommand::Sprite {
                    top_left,
                    size,
                    angle_deg,
                } => vertices.extend(shapes::rotated_quad(
                    *top_left,
                    *size,
                    *angle_deg,
                    colors::SPRITE,
                )),
            }
        }
        vertices
    }
}

/// Build the frame for the current state: background, trail, floor, ceiling,
/// tilted sprite (the original's draw order)
pub fn render(state: &GameState) -> Frame {
    let mut commands = Vec::with_capacity(4);

    if state.trail.len() >= 2 {
        commands.push(DrawCommand::Polyline {
            points: state.trail.points().to_vec(),
            width: TRAIL_STROKE,
            color: colors::TRAIL,
        });
    }

    commands.push(DrawCommand::Polyline {
        points: state.floor.points.clone(),
        width: BOUNDARY_STROKE,
        color: colors::BOUNDARY,
    });
    commands.push(DrawCommand::Polyline {
        points: state.ceiling.points.clone(),
        width: BOUNDARY_STROKE,
        color: colors::BOUNDARY,
    });

    commands.push(DrawCommand::Sprite {
        top_left: Vec2::new(state.player.x, state.player.y),
        size: Vec2::splat(SPRITE_SIZE),
        angle_deg: state.player.tilt_angle(state.tuning.tilt_angle_max),
    });

    Frame {
        clear_color: colors::BACKGROUND,
        commands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn frame_draws_boundaries_and_sprite() {
        let state = GameState::new(11);
        let frame = render(&state);

        // Fresh state has no trail yet: floor, ceiling, sprite
        assert_eq!(frame.commands.len(), 3);
        assert!(matches!(
            frame.commands.last(),
            Some(DrawCommand::Sprite { .. })
        ));
    }

    #[test]
    fn trail_appears_once_it_has_a_segment() {
        let mut state = GameState::new(11);
        for p in &mut state.floor.points {
            p.y = SCREEN_HEIGHT - 1.0;
        }
        for p in &mut state.ceiling.points {
            p.y = 1.0;
        }
        tick(&mut state, &TickInput::default());
        tick(&mut state, &TickInput::default());

        let frame = render(&state);
        assert_eq!(frame.commands.len(), 4);
        match &frame.commands[0] {
            DrawCommand::Polyline { width, color, .. } => {
                assert_eq!(*width, TRAIL_STROKE);
                assert_eq!(*color, colors::TRAIL);
            }
            other => panic!("expected trail polyline first, got {:?}", other),
        }
    }

    #[test]
    fn sprite_angle_follows_tilt() {
        let mut state = GameState::new(11);
        state.player.ascending = true;
        let frame = render(&state);
        match frame.commands.last() {
            Some(DrawCommand::Sprite { angle_deg, .. }) => {
                assert_eq!(*angle_deg, state.tuning.tilt_angle_max);
            }
            other => panic!("expected sprite, got {:?}", other),
        }
    }

    #[test]
    fn tessellation_covers_every_command() {
        let state = GameState::new(11);
        let frame = render(&state);
        let verts = frame.tessellate();
        // 14 segments per boundary plus the sprite quad
        let expected = 2 * (BOUNDARY_POINTS - 1) * 6 + 6;
        assert_eq!(verts.len(), expected);
    }
}
