// Last known pointer position in surface coordinates, or nothing when the
// pointer has left the surface

use vecmath::Vector2;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pointer {
    pos: Option<Vector2<f64>>,
}

impl Pointer {
    pub fn position(&self) -> Option<Vector2<f64>> {
        self.pos
    }

    pub fn is_present(&self) -> bool {
        self.pos.is_some()
    }

    // Client coordinates minus the surface's on-screen top-left corner
    pub fn move_to(&mut self, client: Vector2<f64>, surface_origin: Vector2<f64>) {
        self.pos = Some(vecmath::vec2_sub(client, surface_origin));
    }

    pub fn leave(&mut self) {
        self.pos = None;
    }
}
