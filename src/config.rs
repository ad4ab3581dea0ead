//! Fixed tuning constants for the particle field.

/// How pointer client coordinates are mapped onto the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OriginPolicy {
    /// Read the canvas bounding rectangle once when listeners are attached.
    /// Goes stale if the page scrolls or the layout changes.
    CapturedAtSetup,
    /// Read the canvas bounding rectangle on every pointer event.
    PerEvent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    /// Declared canvas width in pixels
    pub width: u32,
    /// Declared canvas height in pixels
    pub height: u32,
    pub particle_count: usize,
    /// Particles (and the pointer) closer than this get a connection line
    pub connection_distance: f64,
    /// Particles closer than this to the pointer are pulled toward it
    pub attraction_radius: f64,
    /// Fraction of the pointer offset added to velocity each tick
    pub attraction_strength: f64,
    pub max_speed: f64,
    /// Alpha of a connection line at zero distance
    pub max_line_alpha: f64,
    pub line_width: f64,
    pub glow_blur: f64,
    pub origin_policy: OriginPolicy,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 628,
            particle_count: 80,
            connection_distance: 150.0,
            attraction_radius: 100.0,
            attraction_strength: 0.0002,
            max_speed: 1.0,
            max_line_alpha: 0.5,
            line_width: 1.0,
            glow_blur: 10.0,
            origin_policy: OriginPolicy::PerEvent,
        }
    }
}

impl FieldConfig {
    pub fn width_f64(&self) -> f64 {
        self.width as f64
    }

    pub fn height_f64(&self) -> f64 {
        self.height as f64
    }

    pub fn connection_distance_sq(&self) -> f64 {
        self.connection_distance * self.connection_distance
    }

    pub fn attraction_radius_sq(&self) -> f64 {
        self.attraction_radius * self.attraction_radius
    }

    /// Opacity of a connection line spanning `dist_sq`, or `None` when the
    /// endpoints are too far apart to be connected.
    pub fn link_alpha(&self, dist_sq: f64) -> Option<f64> {
        if dist_sq < self.connection_distance_sq() {
            let dist = dist_sq.sqrt();
            Some((1.0 - dist / self.connection_distance) * self.max_line_alpha)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_banner_size() {
        let config = FieldConfig::default();
        assert_eq!((config.width, config.height), (1200, 628));
        assert_eq!(config.particle_count, 80);
        assert_eq!(config.connection_distance_sq(), 22500.0);
        assert_eq!(config.attraction_radius_sq(), 10000.0);
    }

    #[test]
    fn link_alpha_fades_linearly() {
        let config = FieldConfig::default();
        assert_eq!(config.link_alpha(0.0), Some(0.5));
        let half = config.link_alpha(75.0 * 75.0).unwrap();
        assert!((half - 0.25).abs() < 1e-12);
        assert!(config.link_alpha(149.9 * 149.9).unwrap() > 0.0);
    }

    #[test]
    fn link_alpha_excludes_threshold() {
        let config = FieldConfig::default();
        assert_eq!(config.link_alpha(22500.0), None);
        assert_eq!(config.link_alpha(40000.0), None);
    }
}
