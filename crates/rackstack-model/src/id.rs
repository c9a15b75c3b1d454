//! Identifier allocation.
//!
//! Every rack, component, sub-component, interface, and address gets a
//! string id that is unique across the whole configuration and is never
//! reused or regenerated on update. A monotonic counter keeps allocation
//! deterministic; after an import, [`IdAllocator::observe`] bumps the
//! counter past any numeric suffixes already in use so fresh ids cannot
//! collide with loaded ones.

/// Monotonic id source for one workspace.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u64 {
        self.next += 1;
        self.next
    }

    /// `rack-N`
    pub fn rack_id(&mut self) -> String {
        format!("rack-{}", self.next())
    }

    /// `component-N`
    pub fn component_id(&mut self) -> String {
        format!("component-{}", self.next())
    }

    /// `sub-N`
    pub fn sub_component_id(&mut self) -> String {
        format!("sub-{}", self.next())
    }

    /// `iface-N`
    pub fn interface_id(&mut self) -> String {
        format!("iface-{}", self.next())
    }

    /// `addr-N`
    pub fn address_id(&mut self) -> String {
        format!("addr-{}", self.next())
    }

    /// Advance the counter past an id seen in imported data.
    ///
    /// Ids with a trailing integer (`component-17`, `rack-3`) move the
    /// counter to at least that value; anything else is ignored.
    pub fn observe(&mut self, id: &str) {
        if let Some(suffix) = id.rsplit('-').next()
            && let Ok(n) = suffix.parse::<u64>()
        {
            self.next = self.next.max(n);
        }
    }
}
