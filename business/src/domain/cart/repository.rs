use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::CartKey;

use super::model::{Cart, CartChange};

/// Process-wide home of every cart, keyed by the client-supplied cart key.
///
/// Implementations must guarantee that concurrent first accesses to the same
/// key observe one and the same cart, and that `apply` (change plus total
/// recomputation) is atomic with respect to other readers of that cart.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Returns a snapshot of the cart, creating an empty one if needed.
    async fn get_or_create(&self, key: &CartKey) -> Result<Cart, RepositoryError>;
    /// Applies `change` to the cart (creating it if needed) and returns the result.
    async fn apply(&self, key: &CartKey, change: CartChange) -> Result<Cart, RepositoryError>;
}
