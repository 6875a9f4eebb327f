use glam::Vec2;
use rustc_hash::FxHashMap;

/// The pointers currently pressed on the controlled element.
///
/// A session exists from the first pointer-down until the last pointer is
/// released or cancelled. Ids are kept in press order so the "first"
/// pointer of a two-finger gesture is stable.
#[derive(Debug, Clone, Default)]
pub struct PointerSession {
    pointers: Vec<i32>,
    positions: FxHashMap<i32, Vec2>,
}

impl PointerSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a pointer id. Duplicate ids are ignored.
    pub fn add(&mut self, pointer_id: i32) {
        if !self.is_tracked(pointer_id) {
            self.pointers.push(pointer_id);
        }
    }

    /// Stop tracking a pointer id and forget its position.
    pub fn remove(&mut self, pointer_id: i32) {
        let _ = self.positions.remove(&pointer_id);
        self.pointers.retain(|&id| id != pointer_id);
    }

    /// Whether `pointer_id` is currently pressed.
    #[must_use]
    pub fn is_tracked(&self, pointer_id: i32) -> bool {
        self.pointers.contains(&pointer_id)
    }

    /// Record the latest position of a pointer.
    pub fn track(&mut self, pointer_id: i32, position: Vec2) {
        let _ = self.positions.insert(pointer_id, position);
    }

    /// Last known position of a pointer.
    #[must_use]
    pub fn position(&self, pointer_id: i32) -> Option<Vec2> {
        self.positions.get(&pointer_id).copied()
    }

    /// Number of pressed pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    /// Whether no pointer is pressed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// Pressed pointer ids in press order.
    #[must_use]
    pub fn ids(&self) -> &[i32] {
        &self.pointers
    }

    /// Position of the pointer paired with `pointer_id` in a two-pointer
    /// gesture.
    #[must_use]
    pub fn other_position(&self, pointer_id: i32) -> Option<Vec2> {
        let other = match self.pointers.as_slice() {
            [first, second, ..] if *first == pointer_id => *second,
            [first, ..] => *first,
            [] => return None,
        };
        self.position(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_follows_presses_and_releases() {
        let mut session = PointerSession::new();
        session.add(3);
        session.add(9);
        session.add(3);
        assert_eq!(session.len(), 2);

        session.remove(3);
        assert_eq!(session.ids(), &[9]);
        session.remove(42);
        assert_eq!(session.len(), 1);
        session.remove(9);
        assert!(session.is_empty());
    }

    #[test]
    fn other_position_pairs_first_and_second() {
        let mut session = PointerSession::new();
        session.add(1);
        session.add(2);
        session.track(1, Vec2::new(10.0, 0.0));
        session.track(2, Vec2::new(20.0, 0.0));

        assert_eq!(session.other_position(1), Some(Vec2::new(20.0, 0.0)));
        assert_eq!(session.other_position(2), Some(Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn removing_forgets_position() {
        let mut session = PointerSession::new();
        session.add(5);
        session.track(5, Vec2::ONE);
        session.remove(5);
        assert_eq!(session.position(5), None);
    }
}
