// Simple particle struct to keep track of individual position, velocity, size, and color.
// Knows how to advance itself by one tick.

use crate::color::{Color, PALETTE};
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Uniform position over the surface, velocity in [-0.25, 0.25) per axis,
    // radius in [2, 5), and a palette color
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 0.5;
        let vel_y = (rng.gen::<f64>() - 0.5) * 0.5;
        let radius = rng.gen::<f64>() * 3.0 + 2.0;
        let color = PALETTE[rng.gen_range(0, PALETTE.len())];
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }

    // Squared distance from this particle to a point
    pub fn dist_sq_to(&self, point: Vector2<f64>) -> f64 {
        vecmath::vec2_square_len(vecmath::vec2_sub(point, self.pos))
    }

    /// Advances the particle by one tick: integrate, pull toward the
    /// pointer, wrap around the surface edges, then cap the speed.
    pub fn step(&mut self, pointer: Option<Vector2<f64>>, config: &FieldConfig) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);

        if let Some(pointer) = pointer {
            let to_pointer = vecmath::vec2_sub(pointer, self.pos);
            if vecmath::vec2_square_len(to_pointer) < config.attraction_radius_sq() {
                let pull = vecmath::vec2_scale(to_pointer, config.attraction_strength);
                self.vel = vecmath::vec2_add(self.vel, pull);
            }
        }

        self.wrap(config.width_f64(), config.height_f64());
        self.clamp_speed(config.max_speed);
    }

    // Each axis is checked on its own; a particle leaving through a corner
    // wraps both coordinates in the same tick
    fn wrap(&mut self, width: f64, height: f64) {
        if self.pos[0] < 0.0 {
            self.pos[0] = width;
        } else if self.pos[0] > width {
            self.pos[0] = 0.0;
        }
        if self.pos[1] < 0.0 {
            self.pos[1] = height;
        } else if self.pos[1] > height {
            self.pos[1] = 0.0;
        }
    }

    fn clamp_speed(&mut self, max_speed: f64) {
        let speed = self.speed();
        if speed > max_speed {
            self.vel = vecmath::vec2_scale(self.vel, max_speed / speed);
        }
    }
}
