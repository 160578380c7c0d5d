//! # Domain Types
//!
//! The product entity and its creation payload.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                 ┌─────────────────┐               │
//! │  │   NewProduct    │  repository     │    Product      │               │
//! │  │  ─────────────  │  create()       │  ─────────────  │               │
//! │  │  user_id        │ ──────────────► │  id (UUID v4)   │               │
//! │  │  name           │  assigns id     │  user_id        │               │
//! │  │  description    │                 │  name           │               │
//! │  │  price          │                 │  description    │               │
//! │  └─────────────────┘                 │  price          │               │
//! │                                      └─────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `NewProduct` has no `id` field: the repository is the only place an id is
//! ever assigned.

use uuid::Uuid;

// =============================================================================
// Product
// =============================================================================

/// A stored product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier (UUID v4), assigned on creation.
    pub id: Uuid,

    /// Owning user. Opaque; never checked against a user registry.
    pub user_id: Uuid,

    /// Short display label.
    pub name: String,

    /// Free text.
    pub description: String,

    /// Price in the smallest currency unit.
    pub price: u32,
}

// =============================================================================
// NewProduct
// =============================================================================

/// Input for creating a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: u32,
}

impl NewProduct {
    /// Attaches an identifier, producing the stored form.
    pub fn with_id(self, id: Uuid) -> Product {
        Product {
            id,
            user_id: self.user_id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// Generates a fresh product identifier.
pub fn generate_product_id() -> Uuid {
    Uuid::new_v4()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> NewProduct {
        NewProduct {
            user_id: Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap(),
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 100,
        }
    }

    #[test]
    fn test_with_id_keeps_fields() {
        let id = generate_product_id();
        let product = widget().with_id(id);

        assert_eq!(product.id, id);
        assert_eq!(product.user_id, widget().user_id);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "A widget");
        assert_eq!(product.price, 100);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(generate_product_id(), generate_product_id());
    }
}
