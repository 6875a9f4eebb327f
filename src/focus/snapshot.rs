use glam::Vec3;

use crate::scene::{BodyHandle, BodyRegistry};

/// Position and visibility of one body at capture time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRecord {
    /// Body the record belongs to.
    pub handle: BodyHandle,
    /// Captured world position.
    pub position: Vec3,
    /// Captured visibility.
    pub visible: bool,
}

/// Scene state captured when leaving the overview, restored verbatim when
/// returning to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocusSnapshot {
    records: Vec<BodyRecord>,
}

impl FocusSnapshot {
    /// Record every body of `registry`.
    #[must_use]
    pub fn capture(registry: &BodyRegistry) -> Self {
        let records = registry
            .iter()
            .map(|(handle, body)| BodyRecord {
                handle,
                position: body.position,
                visible: body.visible,
            })
            .collect();
        Self { records }
    }

    /// Record for `handle`, if the body existed at capture time.
    #[must_use]
    pub fn record(&self, handle: BodyHandle) -> Option<&BodyRecord> {
        self.records.iter().find(|r| r.handle == handle)
    }

    /// Captured records in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &BodyRecord> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write every record back into `registry`.
    pub fn restore(&self, registry: &mut BodyRegistry) {
        for record in &self.records {
            apply(record, registry);
        }
    }

    /// Write back a single body. Returns `false` when it was not captured.
    pub fn restore_body(
        &self,
        registry: &mut BodyRegistry,
        handle: BodyHandle,
    ) -> bool {
        match self.record(handle) {
            Some(record) => {
                apply(record, registry);
                true
            }
            None => false,
        }
    }
}

fn apply(record: &BodyRecord, registry: &mut BodyRegistry) {
    if let Some(body) = registry.get_mut(record.handle) {
        body.position = record.position;
        body.visible = record.visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Body;

    #[test]
    fn restore_is_exact() {
        let mut registry = BodyRegistry::new();
        let a = registry.insert(Body::new("A", 1.0)).unwrap();
        let b = registry.insert(Body::new("B", 1.0)).unwrap();
        registry.get_mut(a).unwrap().position = Vec3::new(0.1, 0.2, 0.3);
        registry.get_mut(b).unwrap().visible = false;
        let snapshot = FocusSnapshot::capture(&registry);

        registry.get_mut(a).unwrap().position = Vec3::ZERO;
        registry.get_mut(a).unwrap().visible = false;
        registry.get_mut(b).unwrap().visible = true;

        snapshot.restore(&mut registry);
        assert_eq!(registry.get(a).unwrap().position, Vec3::new(0.1, 0.2, 0.3));
        assert!(registry.get(a).unwrap().visible);
        assert!(!registry.get(b).unwrap().visible);
    }

    #[test]
    fn restore_body_touches_only_that_body() {
        let mut registry = BodyRegistry::new();
        let a = registry.insert(Body::new("A", 1.0)).unwrap();
        let b = registry.insert(Body::new("B", 1.0)).unwrap();
        let snapshot = FocusSnapshot::capture(&registry);
        registry.get_mut(a).unwrap().visible = false;
        registry.get_mut(b).unwrap().visible = false;

        assert!(snapshot.restore_body(&mut registry, a));
        assert!(registry.get(a).unwrap().visible);
        assert!(!registry.get(b).unwrap().visible);
        assert_eq!(snapshot.len(), 2);
    }
}
