use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::CartKey;

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// Unique within its cart; never reused after removal.
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
    /// Product as it was when first added. Prices are not refreshed.
    pub product: Product,
}

impl CartItem {
    pub fn subtotal(&self) -> BigDecimal {
        &self.product.price * &BigDecimal::from(self.quantity)
    }
}

/// A single mutation of a cart, applied atomically together with the
/// recomputation of its totals.
#[derive(Debug, Clone, PartialEq)]
pub enum CartChange {
    AddItem { product: Product, quantity: i32 },
    SetQuantity { item_id: i64, quantity: i32 },
    RemoveItem { item_id: i64 },
    Clear,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartKey,
    pub items: Vec<CartItem>,
    pub item_count: i64,
    pub total: BigDecimal,
    next_item_id: i64,
}

impl Cart {
    pub fn new(id: CartKey) -> Self {
        Self {
            id,
            items: Vec::new(),
            item_count: 0,
            total: BigDecimal::zero(),
            next_item_id: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn apply(&mut self, change: CartChange) {
        match change {
            CartChange::AddItem { product, quantity } => self.add_item(product, quantity),
            CartChange::SetQuantity { item_id, quantity } => self.update_item(item_id, quantity),
            CartChange::RemoveItem { item_id } => self.remove_item(item_id),
            CartChange::Clear => self.clear(),
        }
    }

    /// Merges into the existing line for the same product, otherwise appends
    /// a new line holding a snapshot of `product`.
    pub fn add_item(&mut self, product: Product, quantity: i32) {
        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => {
                let id = self.next_item_id;
                self.next_item_id += 1;
                self.items.push(CartItem {
                    id,
                    product_id: product.id,
                    quantity,
                    product,
                });
            }
        }
        self.recompute();
    }

    /// A quantity of zero or less removes the item. Unknown ids are ignored.
    pub fn update_item(&mut self, item_id: i64, quantity: i32) {
        if quantity <= 0 {
            self.remove_item(item_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) {
            item.quantity = quantity;
            self.recompute();
        }
    }

    pub fn remove_item(&mut self, item_id: i64) {
        self.items.retain(|i| i.id != item_id);
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.item_count = self.items.iter().map(|i| i64::from(i.quantity)).sum();
        self.total = self
            .items
            .iter()
            .fold(BigDecimal::zero(), |acc, item| acc + item.subtotal());
    }
}
