//! Domain entities: customers, products and orders

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer record.
///
/// Customers are immutable once created: this API exposes no update or
/// delete operations for them. The email address is globally unique across
/// all stored customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer with a fresh id and creation timestamp.
    pub fn new(name: String, email: String, phone: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            created_at: Utc::now(),
        }
    }
}

/// A product record.
///
/// Invariants enforced at the API boundary: `price` is strictly positive
/// and `stock` is never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with a fresh id and creation timestamp.
    pub fn new(name: String, price: f64, stock: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            stock,
            created_at: Utc::now(),
        }
    }
}

/// An order placed by one customer for one or more products.
///
/// The order owns the many-to-many relation to its products via
/// `product_ids`. `total_amount` is the sum of the referenced products'
/// prices as they were at creation time; it is a frozen snapshot and is
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub product_ids: Vec<Uuid>,
    pub order_date: DateTime<Utc>,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order with a fresh id.
    ///
    /// The product relation starts empty and is attached through the store
    /// after the row exists. An absent `order_date` defaults to now.
    pub fn new(customer_id: Uuid, order_date: Option<DateTime<Utc>>, total_amount: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            customer_id,
            product_ids: Vec::new(),
            order_date: order_date.unwrap_or(now),
            total_amount,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_new_assigns_unique_ids() {
        let a = Customer::new("Alice".to_string(), "alice@example.com".to_string(), None);
        let b = Customer::new("Bob".to_string(), "bob@example.com".to_string(), None);
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Alice");
        assert_eq!(a.phone, None);
    }

    #[test]
    fn test_product_new_keeps_given_stock() {
        let product = Product::new("Laptop".to_string(), 999.99, 7);
        assert_eq!(product.stock, 7);
        assert_eq!(product.price, 999.99);
    }

    #[test]
    fn test_order_date_defaults_to_creation_time() {
        let order = Order::new(Uuid::new_v4(), None, 10.0);
        assert_eq!(order.order_date, order.created_at);
        assert!(order.product_ids.is_empty());
    }

    #[test]
    fn test_order_date_explicit_value_is_kept() {
        let date = "2024-06-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let order = Order::new(Uuid::new_v4(), Some(date), 10.0);
        assert_eq!(order.order_date, date);
        assert_ne!(order.order_date, order.created_at);
    }
}
