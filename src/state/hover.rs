//! Hovered-country tracking.

use crate::geo::{Country, World};

/// Result of feeding a new hit-test result into [`HoverSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    Unchanged,
    /// A different country is now hovered
    Entered(usize),
    /// Nothing is hovered any more
    Cleared,
}

/// The country under the mouse, as an index into [`World::countries`].
#[derive(Debug, Clone, Default)]
pub struct HoverSelection {
    current: Option<usize>,
}

impl HoverSelection {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn country<'a>(&self, world: &'a World) -> Option<&'a Country> {
        self.current.and_then(|i| world.country_at(i))
    }

    /// Text for the hover label: the country name, or empty.
    pub fn label<'a>(&self, world: &'a World) -> &'a str {
        self.country(world).map_or("", |c| c.name.as_str())
    }

    /// Replaces the selection with this frame's hit.
    pub fn update(&mut self, hit: Option<usize>) -> HoverChange {
        if hit == self.current {
            return HoverChange::Unchanged;
        }
        self.current = hit;
        match hit {
            Some(index) => HoverChange::Entered(index),
            None => HoverChange::Cleared,
        }
    }
}
