// The particle field: owns the particles and the pointer, advances them once
// per tick and draws the result onto a Surface

use crate::color::Color;
use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::pointer::Pointer;
use crate::surface::Surface;
use rand::Rng;
use vecmath::Vector2;

pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    pointer: Pointer,
}

impl ParticleField {
    /// Fixes the surface size, then scatters `config.particle_count`
    /// randomized particles across it.
    pub fn new<S, R>(surface: &mut S, config: FieldConfig, rng: &mut R) -> ParticleField
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        surface.set_size(config.width, config.height);

        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            particles.push(Particle::random(rng, config.width_f64(), config.height_f64()));
        }
        ParticleField::with_particles(config, particles)
    }

    // Field with a known particle set; the surface size is left untouched
    pub fn with_particles(config: FieldConfig, particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            config,
            particles,
            pointer: Pointer::default(),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Option<Vector2<f64>> {
        self.pointer.position()
    }

    pub fn pointer_moved(&mut self, client: Vector2<f64>, surface_origin: Vector2<f64>) {
        self.pointer.move_to(client, surface_origin);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.leave();
    }

    /// One animation frame: the whole update finishes before anything is drawn.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.update();
        self.render(surface)
    }

    pub fn update(&mut self) {
        let pointer = self.pointer.position();
        for particle in &mut self.particles {
            particle.step(pointer, &self.config);
        }
    }

    // Later draws layer over earlier ones: links, then particles, then
    // pointer links on top
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear(self.config.width_f64(), self.config.height_f64());
        surface.set_line_width(self.config.line_width);

        self.render_links(surface);
        self.render_particles(surface)?;
        self.render_pointer_links(surface);
        Ok(())
    }

    fn render_links<S: Surface + ?Sized>(&self, surface: &mut S) {
        for (i, particle) in self.particles.iter().enumerate() {
            for other in &self.particles[i + 1..] {
                if let Some(alpha) = self.config.link_alpha(particle.dist_sq_to(other.pos)) {
                    surface.stroke_line(particle.pos, other.pos, Color::WHITE.with_alpha(alpha));
                }
            }
        }
    }

    fn render_particles<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        for particle in &self.particles {
            surface.set_glow(self.config.glow_blur, particle.color);
            surface.fill_circle(particle.pos, particle.radius, particle.color)?;
        }
        surface.clear_glow();
        Ok(())
    }

    fn render_pointer_links<S: Surface + ?Sized>(&self, surface: &mut S) {
        let pointer = match self.pointer.position() {
            Some(pointer) => pointer,
            None => return,
        };
        for particle in &self.particles {
            if let Some(alpha) = self.config.link_alpha(particle.dist_sq_to(pointer)) {
                surface.stroke_line(particle.pos, pointer, Color::ACCENT.with_alpha(alpha));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;
    use crate::surface::{DrawCommand, Recorder};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f64, y: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 3.0, PALETTE[0])
    }

    fn field_of(particles: Vec<Particle>) -> ParticleField {
        ParticleField::with_particles(FieldConfig::default(), particles)
    }

    fn line_alphas(recorder: &Recorder) -> Vec<f64> {
        recorder
            .lines()
            .map(|c| match c {
                DrawCommand::Line { color, .. } => color.a,
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn new_sizes_surface_and_spawns_particles() {
        let mut recorder = Recorder::new();
        let mut rng = StdRng::seed_from_u64(1);
        let field = ParticleField::new(&mut recorder, FieldConfig::default(), &mut rng);

        assert_eq!(recorder.size, Some((1200, 628)));
        assert_eq!(field.particles().len(), 80);
        assert_eq!(field.pointer(), None);
    }

    #[test]
    fn link_at_half_distance_has_quarter_alpha() {
        let field = field_of(vec![still(100.0, 100.0), still(175.0, 100.0)]);
        let mut recorder = Recorder::new();
        field.render(&mut recorder).unwrap();

        let alphas = line_alphas(&recorder);
        assert_eq!(alphas.len(), 1);
        assert!((alphas[0] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn coincident_particles_link_at_full_alpha() {
        let field = field_of(vec![still(300.0, 300.0), still(300.0, 300.0)]);
        let mut recorder = Recorder::new();
        field.render(&mut recorder).unwrap();
        assert_eq!(line_alphas(&recorder), vec![0.5]);
    }

    #[test]
    fn no_link_at_or_beyond_threshold() {
        let field = field_of(vec![
            still(0.0, 0.0),
            still(150.0, 0.0),
            still(0.0, 400.0),
        ]);
        let mut recorder = Recorder::new();
        field.render(&mut recorder).unwrap();
        assert_eq!(recorder.lines().count(), 0);
    }

    #[test]
    fn each_pair_is_linked_once() {
        let field = field_of(vec![
            still(100.0, 100.0),
            still(110.0, 100.0),
            still(100.0, 110.0),
        ]);
        let mut recorder = Recorder::new();
        field.render(&mut recorder).unwrap();
        assert_eq!(recorder.lines().count(), 3);
    }

    #[test]
    fn render_order_is_links_particles_then_pointer_links() {
        let mut field = field_of(vec![still(100.0, 100.0), still(120.0, 100.0)]);
        field.pointer_moved([110.0, 140.0], [0.0, 0.0]);
        let mut recorder = Recorder::new();
        field.render(&mut recorder).unwrap();

        let c = &recorder.commands;
        assert_eq!(c[0], DrawCommand::Clear { width: 1200.0, height: 628.0 });
        assert_eq!(c[1], DrawCommand::LineWidth(1.0));
        assert!(matches!(c[2], DrawCommand::Line { color, .. } if color.r == 255 && color.g == 255));
        assert_eq!(c[3], DrawCommand::Glow { blur: 10.0, color: PALETTE[0] });
        assert!(matches!(c[4], DrawCommand::Circle { radius, .. } if radius == 3.0));
        assert!(matches!(c[5], DrawCommand::Glow { .. }));
        assert!(matches!(c[6], DrawCommand::Circle { .. }));
        assert_eq!(c[7], DrawCommand::ClearGlow);
        for cmd in &c[8..] {
            match cmd {
                DrawCommand::Line { to, color, .. } => {
                    assert_eq!(*to, [110.0, 140.0]);
                    assert_eq!((color.r, color.g, color.b), (122, 184, 0));
                }
                other => panic!("unexpected command after glow reset: {:?}", other),
            }
        }
        assert_eq!(c.len(), 10);
    }

    #[test]
    fn pointer_links_fade_like_particle_links() {
        let mut field = field_of(vec![still(100.0, 100.0), still(900.0, 500.0)]);
        field.pointer_moved([175.0, 100.0], [0.0, 0.0]);
        let mut recorder = Recorder::new();
        field.render(&mut recorder).unwrap();

        let alphas = line_alphas(&recorder);
        assert_eq!(alphas.len(), 1);
        assert!((alphas[0] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn no_pointer_means_no_pointer_links_and_no_pull() {
        let particles = vec![
            Particle::new(100.0, 100.0, 0.2, 0.1, 2.5, PALETTE[1]),
            Particle::new(800.0, 400.0, -0.2, 0.05, 4.0, PALETTE[2]),
        ];
        let mut field = field_of(particles.clone());
        let mut recorder = Recorder::new();
        field.tick(&mut recorder).unwrap();

        for (before, after) in particles.iter().zip(field.particles()) {
            assert_eq!(before.vel, after.vel);
        }
        assert_eq!(recorder.lines().count(), 0);
        assert_eq!(recorder.circles().count(), 2);
    }

    #[test]
    fn pointer_leaving_stops_attraction() {
        let mut field = field_of(vec![still(500.0, 300.0)]);
        field.pointer_moved([550.0, 300.0], [0.0, 0.0]);
        field.pointer_left();
        field.update();
        assert_eq!(field.particles()[0].vel, [0.0, 0.0]);
    }

    #[test]
    fn tick_draws_post_update_positions() {
        let mut field = field_of(vec![Particle::new(10.0, 10.0, 0.5, 0.25, 3.0, PALETTE[0])]);
        let mut recorder = Recorder::new();
        field.tick(&mut recorder).unwrap();

        let center = recorder
            .circles()
            .find_map(|c| match c {
                DrawCommand::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .unwrap();
        assert_eq!(center, [10.5, 10.25]);
    }
}
