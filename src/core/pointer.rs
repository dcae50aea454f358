use super::constants::POINTER_PARKED;
use glam::Vec2;

/// Most recent interaction point, in logical pixels.
///
/// Input callbacks write it; the frame reads it once per tick. Between ticks
/// the last write wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vec2::from_array(POINTER_PARKED),
            active: false,
        }
    }
}

impl PointerState {
    #[inline]
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
        self.active = true;
    }

    /// Pointer left the surface or the last touch lifted. The position is
    /// kept; only `active` gates the repulsion.
    #[inline]
    pub fn release(&mut self) {
        self.active = false;
    }

    /// Touch move with the current contact points; only the first is used.
    /// An empty contact list leaves the state untouched.
    pub fn touch(&mut self, contacts: &[Vec2]) {
        if let Some(first) = contacts.first() {
            self.move_to(*first);
        }
    }
}
