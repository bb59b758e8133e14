//! Mutation orchestration over the entity gateways
//!
//! [`CrmService`] owns the create operations: boundary validation,
//! uniqueness and reference checks, and the bulk partial-failure contract.
//! Expected failures come back as [`Outcome::Rejected`] data; only storage
//! faults surface as `Err`.

use crate::core::entity::{Customer, Order, Product};
use crate::core::error::{Rejection, StoreError};
use crate::core::validation;
use crate::storage::{CustomerStore, CustomerTransaction, EntityStore, OrderStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Result of a single-record mutation.
///
/// A rejection is an ordinary outcome carrying its user-facing message, not
/// an error: storage faults are the only thing reported through `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Created(T),
    Rejected(Rejection),
}

impl<T> Outcome<T> {
    /// The created record, if the mutation succeeded.
    pub fn created(self) -> Option<T> {
        match self {
            Outcome::Created(record) => Some(record),
            Outcome::Rejected(_) => None,
        }
    }

    /// The rejection, if the mutation failed.
    pub fn rejected(self) -> Option<Rejection> {
        match self {
            Outcome::Created(_) => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Input record for customer creation, shared by the single and bulk paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Result of a bulk customer creation: partial success is first-class.
///
/// `errors` entries are keyed by the row's 1-based position in the input
/// ("Row N: ..."); `created` holds every row that was persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkReport {
    pub created: Vec<Customer>,
    pub errors: Vec<String>,
}

/// The mutation layer over the three entity gateways.
pub struct CrmService {
    customers: Arc<dyn CustomerStore>,
    products: Arc<dyn EntityStore<Product>>,
    orders: Arc<dyn OrderStore>,
}

impl CrmService {
    pub fn new(
        customers: Arc<dyn CustomerStore>,
        products: Arc<dyn EntityStore<Product>>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Create a single customer.
    ///
    /// Rejects a duplicate email before any write, then a malformed phone;
    /// an absent phone is valid.
    pub async fn create_customer(
        &self,
        input: NewCustomer,
    ) -> Result<Outcome<Customer>, StoreError> {
        if self.customers.email_exists(&input.email).await? {
            return Ok(Outcome::Rejected(Rejection::DuplicateEmail {
                email: input.email,
            }));
        }
        if let Some(phone) = input.phone.as_deref() {
            if !validation::is_valid_phone(phone) {
                return Ok(Outcome::Rejected(Rejection::InvalidPhone));
            }
        }

        let customer = self
            .customers
            .insert(Customer::new(input.name, input.email, input.phone))
            .await?;
        tracing::debug!(customer_id = %customer.id, "customer created");

        Ok(Outcome::Created(customer))
    }

    /// Create a batch of customers inside one atomic scope.
    ///
    /// A row's validation failure or storage fault never aborts its
    /// siblings; it is recorded under the row's 1-based index and the batch
    /// continues. Commit makes all surviving rows durable together. Faults
    /// in `begin` or `commit` themselves propagate, and nothing from the
    /// batch survives them.
    pub async fn bulk_create_customers(
        &self,
        inputs: Vec<NewCustomer>,
    ) -> Result<BulkReport, StoreError> {
        let tx = self.customers.begin().await?;
        let mut report = BulkReport::default();

        for (idx, input) in inputs.into_iter().enumerate() {
            let row = idx + 1;
            match Self::admit_row(tx.as_ref(), input).await {
                Ok(Outcome::Created(customer)) => report.created.push(customer),
                Ok(Outcome::Rejected(Rejection::DuplicateEmail { email })) => report
                    .errors
                    .push(format!("Row {row}: Email '{email}' already exists.")),
                Ok(Outcome::Rejected(rejection)) => {
                    report.errors.push(format!("Row {row}: {rejection}"));
                }
                Err(e) => report.errors.push(format!("Row {row}: {e}")),
            }
        }

        tx.commit().await?;

        tracing::debug!(
            created = report.created.len(),
            errors = report.errors.len(),
            "bulk customer creation committed"
        );

        Ok(report)
    }

    /// Validate one bulk row against the transaction scope and stage it.
    ///
    /// Same admission rules as [`create_customer`](Self::create_customer),
    /// but uniqueness is judged against committed rows plus rows already
    /// staged earlier in the batch.
    async fn admit_row(
        tx: &dyn CustomerTransaction,
        input: NewCustomer,
    ) -> Result<Outcome<Customer>, StoreError> {
        if tx.email_exists(&input.email).await? {
            return Ok(Outcome::Rejected(Rejection::DuplicateEmail {
                email: input.email,
            }));
        }
        if let Some(phone) = input.phone.as_deref() {
            if !validation::is_valid_phone(phone) {
                return Ok(Outcome::Rejected(Rejection::InvalidPhone));
            }
        }

        let customer = tx
            .insert(Customer::new(input.name, input.email, input.phone))
            .await?;

        Ok(Outcome::Created(customer))
    }

    /// Create a single product.
    pub async fn create_product(
        &self,
        name: String,
        price: f64,
        stock: i32,
    ) -> Result<Outcome<Product>, StoreError> {
        if !validation::is_valid_price(price) {
            return Ok(Outcome::Rejected(Rejection::NonPositivePrice));
        }
        if !validation::is_valid_stock(stock) {
            return Ok(Outcome::Rejected(Rejection::NegativeStock));
        }

        let product = self.products.insert(Product::new(name, price, stock)).await?;
        tracing::debug!(product_id = %product.id, "product created");

        Ok(Outcome::Created(product))
    }

    /// Create an order for one customer and one or more products.
    ///
    /// Checks run in order and short-circuit on the first failure: customer
    /// resolution, non-empty product list, then each product id in input
    /// order. No order row is written unless every reference resolves.
    /// `total_amount` freezes the sum of the resolved prices at call time.
    /// Ids arrive as raw API strings; one that does not parse is the same
    /// miss as one that parses but resolves to nothing.
    pub async fn create_order(
        &self,
        customer_id: &str,
        product_ids: &[String],
        order_date: Option<DateTime<Utc>>,
    ) -> Result<Outcome<Order>, StoreError> {
        let customer = match Uuid::parse_str(customer_id) {
            Ok(id) => self.customers.get(&id).await?,
            Err(_) => None,
        };
        let Some(customer) = customer else {
            return Ok(Outcome::Rejected(Rejection::UnknownCustomer));
        };

        if product_ids.is_empty() {
            return Ok(Outcome::Rejected(Rejection::NoProducts));
        }

        let mut resolved = Vec::with_capacity(product_ids.len());
        let mut total_amount = 0.0;
        for raw in product_ids {
            let product = match Uuid::parse_str(raw) {
                Ok(id) => self.products.get(&id).await?,
                Err(_) => None,
            };
            let Some(product) = product else {
                return Ok(Outcome::Rejected(Rejection::UnknownProduct(raw.clone())));
            };
            total_amount += product.price;
            resolved.push(product.id);
        }

        let order = self
            .orders
            .insert(Order::new(customer.id, order_date, total_amount))
            .await?;
        let order = self.orders.set_products(&order.id, &resolved).await?;
        tracing::debug!(order_id = %order.id, total_amount, "order created");

        Ok(Outcome::Created(order))
    }
}
