//! Read-only product catalog.

use demo_shop_core::{Product, ProductId};
use rust_decimal::Decimal;

/// The fixed set of products the shop sells.
///
/// Products keep their seed order, which is also ascending ID order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The catalog every store starts with.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(vec![
            seed_product(
                1,
                "Wireless Headphones",
                "High-quality wireless headphones with noise cancellation",
                9999,
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=300&h=200&fit=crop",
                "Electronics",
            ),
            seed_product(
                2,
                "Smart Watch",
                "Fitness tracking smartwatch with heart rate monitor",
                19999,
                "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=300&h=200&fit=crop",
                "Electronics",
            ),
            seed_product(
                3,
                "Coffee Maker",
                "Automatic drip coffee maker with programmable timer",
                7999,
                "https://images.unsplash.com/photo-1495474472287-4d71bcdd2085?w=300&h=200&fit=crop",
                "Kitchen",
            ),
            seed_product(
                4,
                "Running Shoes",
                "Comfortable running shoes with breathable mesh",
                12999,
                "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=300&h=200&fit=crop",
                "Sports",
            ),
            seed_product(
                5,
                "Laptop Backpack",
                "Durable laptop backpack with multiple compartments",
                4999,
                "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=300&h=200&fit=crop",
                "Accessories",
            ),
        ])
    }

    /// All products in catalog order.
    #[must_use]
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a single product.
    #[must_use]
    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Unit price of a product, or zero if the catalog has no such product.
    ///
    /// Unknown products are priced at zero rather than rejected so that an
    /// order referencing them still goes through.
    #[must_use]
    pub fn price_of(&self, id: ProductId) -> Decimal {
        self.get_product(id)
            .map_or(Decimal::ZERO, |product| product.price)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

fn seed_product(
    id: i64,
    name: &str,
    description: &str,
    price_cents: i64,
    image: &str,
    category: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(price_cents, 2),
        image: image.to_string(),
        category: category.to_string(),
    }
}
