//! Test Helpers

use jiff::Timestamp;

/// Builder for catalog rows inserted by [`super::TestContext::insert_product`].
#[derive(Debug, Clone)]
pub(crate) struct NewTestProduct {
    pub name: String,
    pub price: u64,
    pub image: String,
    pub stock: u32,
    pub added_at: Timestamp,
}

impl NewTestProduct {
    /// A product priced at 10.00 with ten units in stock and an image named
    /// after it, e.g. `"Mug"` → `"mug.png"`.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            price: 10_00,
            image: format!("{}.png", name.to_lowercase()),
            stock: 10,
            added_at: Timestamp::now(),
        }
    }

    pub fn price(mut self, price: u64) -> Self {
        self.price = price;
        self
    }

    pub fn stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn added_at(mut self, added_at: Timestamp) -> Self {
        self.added_at = added_at;
        self
    }
}
