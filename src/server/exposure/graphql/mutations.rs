//! Root mutation type
//!
//! Thin resolvers: each one hands its arguments to [`CrmService`] and maps
//! the typed outcome onto the payload envelope. Expected failures become
//! `success = false` + message data; storage faults propagate as top-level
//! GraphQL errors.

use crate::core::service::{CrmService, NewCustomer, Outcome};
use async_graphql::{Context, ID, Object, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::types::{
    BulkCreateCustomersPayload, CreateCustomerPayload, CreateOrderPayload, CreateProductPayload,
    CustomerInput, CustomerType, OrderType, ProductType,
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_customer(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        phone: Option<String>,
    ) -> Result<CreateCustomerPayload> {
        let service = ctx.data::<Arc<CrmService>>()?;
        let outcome = service
            .create_customer(NewCustomer { name, email, phone })
            .await?;

        Ok(match outcome {
            Outcome::Created(customer) => CreateCustomerPayload {
                customer: Some(CustomerType(customer)),
                success: true,
                message: "Customer created successfully.".to_string(),
            },
            Outcome::Rejected(rejection) => CreateCustomerPayload {
                customer: None,
                success: false,
                message: rejection.to_string(),
            },
        })
    }

    async fn bulk_create_customers(
        &self,
        ctx: &Context<'_>,
        customers: Vec<CustomerInput>,
    ) -> Result<BulkCreateCustomersPayload> {
        let service = ctx.data::<Arc<CrmService>>()?;
        let report = service
            .bulk_create_customers(customers.into_iter().map(Into::into).collect())
            .await?;

        Ok(BulkCreateCustomersPayload {
            created_customers: report.created.into_iter().map(CustomerType).collect(),
            errors: report.errors,
        })
    }

    async fn create_product(
        &self,
        ctx: &Context<'_>,
        name: String,
        price: f64,
        #[graphql(default)] stock: i32,
    ) -> Result<CreateProductPayload> {
        let service = ctx.data::<Arc<CrmService>>()?;
        let outcome = service.create_product(name, price, stock).await?;

        Ok(match outcome {
            Outcome::Created(product) => CreateProductPayload {
                product: Some(ProductType(product)),
                success: true,
                message: "Product created successfully.".to_string(),
            },
            Outcome::Rejected(rejection) => CreateProductPayload {
                product: None,
                success: false,
                message: rejection.to_string(),
            },
        })
    }

    async fn create_order(
        &self,
        ctx: &Context<'_>,
        customer_id: ID,
        product_ids: Vec<ID>,
        order_date: Option<DateTime<Utc>>,
    ) -> Result<CreateOrderPayload> {
        let service = ctx.data::<Arc<CrmService>>()?;
        let product_ids: Vec<String> = product_ids.into_iter().map(|id| id.0).collect();
        let outcome = service
            .create_order(&customer_id.0, &product_ids, order_date)
            .await?;

        Ok(match outcome {
            Outcome::Created(order) => CreateOrderPayload {
                order: Some(OrderType(order)),
                success: true,
                message: "Order created successfully.".to_string(),
            },
            Outcome::Rejected(rejection) => CreateOrderPayload {
                order: None,
                success: false,
                message: rejection.to_string(),
            },
        })
    }
}
