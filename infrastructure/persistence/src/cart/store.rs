use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;

use business::domain::cart::model::{Cart, CartChange};
use business::domain::cart::repository::CartStore;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::CartKey;

/// Process-wide cart map. The outer lock only guards membership; each cart
/// has its own mutex so unrelated carts never contend.
#[derive(Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<CartKey, Arc<Mutex<Cart>>>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomic insert-if-absent: racing first accesses all get the same handle.
    fn handle(&self, key: &CartKey) -> Result<Arc<Mutex<Cart>>, RepositoryError> {
        {
            let carts = self.carts.read().map_err(|_| RepositoryError::Persistence)?;
            if let Some(cart) = carts.get(key) {
                return Ok(Arc::clone(cart));
            }
        }

        let mut carts = self.carts.write().map_err(|_| RepositoryError::Persistence)?;
        let cart = carts.entry(key.clone()).or_insert_with(|| {
            tracing::debug!(cart = %key, "creating cart");
            Arc::new(Mutex::new(Cart::new(key.clone())))
        });
        Ok(Arc::clone(cart))
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn get_or_create(&self, key: &CartKey) -> Result<Cart, RepositoryError> {
        let handle = self.handle(key)?;
        let cart = handle.lock().map_err(|_| RepositoryError::Persistence)?;
        Ok(cart.clone())
    }

    async fn apply(&self, key: &CartKey, change: CartChange) -> Result<Cart, RepositoryError> {
        let handle = self.handle(key)?;
        let mut cart = handle.lock().map_err(|_| RepositoryError::Persistence)?;
        cart.apply(change);
        Ok(cart.clone())
    }
}
