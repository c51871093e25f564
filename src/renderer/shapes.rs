//! Shape generation for obstacles
//!
//! Art is wider than the hitbox: spikes and blocks are drawn 30 px wide while
//! collisions only use a 20 px band.

use glam::Vec2;

use super::frame::ScreenObstacle;
use crate::consts::ORB_RADIUS;
use crate::settings::Tuning;
use crate::sim::ObstacleKind;

/// Width of spike and orb art
const ART_WIDTH: f32 = 30.0;
const SPIKE_HEIGHT: f32 = 25.0;

/// A drawable primitive in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled triangle
    Triangle([Vec2; 3]),
    /// Filled axis-aligned rectangle
    Rect { min: Vec2, size: Vec2 },
    /// Stroked circle
    Ring { center: Vec2, radius: f32 },
}

/// Geometry for one visible obstacle
pub fn obstacle_shape(obstacle: &ScreenObstacle, tuning: &Tuning) -> Shape {
    let x = obstacle.x;
    let ground = tuning.ground_y;
    match obstacle.kind {
        ObstacleKind::Hazard => Shape::Triangle([
            Vec2::new(x, ground),
            Vec2::new(x + ART_WIDTH / 2.0, ground - SPIKE_HEIGHT),
            Vec2::new(x + ART_WIDTH, ground),
        ]),
        // A grounded block is drawn sitting on the ground line
        ObstacleKind::Block => Shape::Rect {
            min: Vec2::new(
                x,
                obstacle
                    .obstacle
                    .elevation
                    .unwrap_or(ground - tuning.block_size),
            ),
            size: Vec2::splat(tuning.block_size),
        },
        ObstacleKind::Orb => Shape::Ring {
            center: Vec2::new(
                x + ART_WIDTH / 2.0,
                obstacle.obstacle.orb_anchor(tuning) - tuning.orb_lift,
            ),
            radius: ORB_RADIUS,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;

    fn place(obstacle: Obstacle, x: f32) -> ScreenObstacle {
        ScreenObstacle {
            index: 0,
            kind: obstacle.kind,
            x,
            obstacle,
        }
    }

    #[test]
    fn test_spike_triangle() {
        let tuning = Tuning::default();
        let shape = obstacle_shape(&place(Obstacle::hazard(0.0), 200.0), &tuning);
        assert_eq!(
            shape,
            Shape::Triangle([
                Vec2::new(200.0, 250.0),
                Vec2::new(215.0, 225.0),
                Vec2::new(230.0, 250.0),
            ])
        );
    }

    #[test]
    fn test_block_rects() {
        let tuning = Tuning::default();
        let grounded = obstacle_shape(&place(Obstacle::block(0.0), 10.0), &tuning);
        assert_eq!(
            grounded,
            Shape::Rect {
                min: Vec2::new(10.0, 220.0),
                size: Vec2::splat(30.0)
            }
        );
        let floating = obstacle_shape(&place(Obstacle::block(0.0).at(150.0), 10.0), &tuning);
        assert!(matches!(floating, Shape::Rect { min, .. } if min.y == 150.0));
    }

    #[test]
    fn test_orb_ring_sits_on_trigger_point() {
        let tuning = Tuning::default();
        let shape = obstacle_shape(&place(Obstacle::orb(0.0), 300.0), &tuning);
        assert_eq!(
            shape,
            Shape::Ring {
                center: Vec2::new(315.0, 190.0),
                radius: 12.0
            }
        );
    }
}
