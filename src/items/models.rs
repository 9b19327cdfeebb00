//! Shopping List Domain Models
//!
//! This module contains all data structures related to the shopping list
//! business domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Item Domain Models
// =============================================================================

/// Represents a single item on the shopping list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Name of the item (defaults to "" when absent; no validation is applied)
    #[serde(default)]
    pub name: String,

    /// Price of the item; omitted from output when never supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Partial update payload for PATCH requests
///
/// Each field is independently optional; absent fields leave the stored
/// value untouched.
#[derive(Debug, Default, Deserialize)]
pub struct ItemPatch {
    /// New name, when supplied (renaming re-keys subsequent lookups)
    pub name: Option<String>,

    /// New price, when supplied
    pub price: Option<f64>,
}

impl Item {
    /// Shallow-merges a patch into this item: supplied fields win, absent
    /// fields retain their current value.
    pub fn merged_with(&self, patch: ItemPatch) -> Item {
        Item {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            price: patch.price.or(self.price),
        }
    }
}

// =============================================================================
// Response Envelopes
// =============================================================================

/// Response for item creation
#[derive(Serialize)]
pub struct AddedResponse {
    /// The item as stored
    pub added: Item,
}

/// Response for item updates
#[derive(Serialize)]
pub struct UpdatedResponse {
    /// The record after the merge
    pub updated: Item,
}

/// Response for item deletion
#[derive(Serialize)]
pub struct DeletedResponse {
    /// Status message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_unsupplied_fields() {
        let item = Item {
            name: "popsicle".into(),
            price: Some(1.45),
        };

        let merged = item.merged_with(ItemPatch {
            name: None,
            price: Some(2.45),
        });

        assert_eq!(merged.name, "popsicle");
        assert_eq!(merged.price, Some(2.45));
    }

    #[test]
    fn merge_overwrites_every_supplied_field() {
        let item = Item {
            name: "popsicle".into(),
            price: Some(1.45),
        };

        let merged = item.merged_with(ItemPatch {
            name: Some("new popsicle".into()),
            price: Some(2.45),
        });

        assert_eq!(
            merged,
            Item {
                name: "new popsicle".into(),
                price: Some(2.45),
            }
        );
    }

    #[test]
    fn empty_patch_is_identity() {
        let item = Item {
            name: "cheerios".into(),
            price: None,
        };

        let merged = item.merged_with(ItemPatch::default());
        assert_eq!(merged, item);
    }
}
