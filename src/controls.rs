//! State behind the shop's filter controls.
//!
//! The checkbox list and price radio group from the filter sidebar, minus
//! any rendering. Both hand back the wholesale value the shop page sends
//! to the server when a control changes.

// ---------------------------------------------------------------------------
// CategoryChecklist
// ---------------------------------------------------------------------------

/// Ordered set of checked category ids. Toggling appends an unchecked id
/// at the end and removes a checked one in place, so insertion order is
/// preserved for the ids that stay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryChecklist {
    checked: Vec<String>,
}

impl CategoryChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a category and return the full checked list, which is what the
    /// shop page replaces its category dimension with.
    pub fn toggle(&mut self, category_id: &str) -> Vec<String> {
        match self.checked.iter().position(|id| id == category_id) {
            Some(index) => {
                self.checked.remove(index);
            }
            None => self.checked.push(category_id.to_string()),
        }
        self.checked.clone()
    }

    pub fn is_checked(&self, category_id: &str) -> bool {
        self.checked.iter().any(|id| id == category_id)
    }

    pub fn checked(&self) -> &[String] {
        &self.checked
    }
}

// ---------------------------------------------------------------------------
// PriceRadio
// ---------------------------------------------------------------------------

/// Single-selection price bucket. Selecting returns the bucket id for the
/// shop page to resolve through the price fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceRadio {
    selected: Option<u32>,
}

impl PriceRadio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, bucket_id: u32) -> u32 {
        self.selected = Some(bucket_id);
        bucket_id
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }
}
