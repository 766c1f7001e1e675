//! REST resource implementations.
//!
//! Each resource is a plain serde model plus declarative metadata: its
//! field [`Schema`](crate::rest::Schema), `object` discriminator, path
//! templates and parameter types. The CRUD operations come from
//! [`RestResource`](crate::rest::RestResource); resources with custom
//! actions add them as inherent methods.
//!
//! # Available Resources
//!
//! | Resource | Operations | Notes |
//! |----------|------------|-------|
//! | [`Account`] | retrieve, list, create, update, delete | |
//! | [`Capability`] | retrieve, list, update | nested under an account |
//! | [`Charge`] | retrieve, list, create, update, `capture` | embeds a refunds page |
//! | [`Customer`] | retrieve, list, create, update, delete | |
//! | [`Event`] | retrieve, list | shape-drifted `request`, polymorphic `data.object` |
//! | [`InvoiceLineItem`] | list | nested under an invoice |
//! | [`Order`] | retrieve, list, create, update, `pay`, `return_order` | embeds a returns page |
//! | [`OrderReturn`] | retrieve, list | |
//! | [`Refund`] | retrieve, list, create, update | |
//! | [`Sku`] | retrieve, list, create, update, delete | |
//! | [`TaxRate`] | retrieve, list, create, update | |
//!
//! [`Discount`] has no endpoints of its own and appears expanded inside
//! other resources.
//!
//! # Example
//!
//! ```rust,ignore
//! use stripe_api::rest::{RequestOptions, RestResource};
//! use stripe_api::rest::resources::{Customer, CustomerParams};
//!
//! let params = CustomerParams {
//!     email: Some("jenny@example.com".to_string()),
//!     ..Default::default()
//! };
//! let customer = Customer::create(
//!     &client,
//!     &params,
//!     Some(RequestOptions::new().idempotency_key(IdempotencyKey::new("signup-42")?)),
//! ).await?;
//! ```

mod account;
mod any_resource;
mod capability;
mod charge;
pub mod common;
mod customer;
mod discount;
mod event;
mod invoice_line_item;
mod order;
mod order_return;
mod refund;
mod sku;
mod tax_rate;

pub use account::{Account, AccountCreateParams, AccountUpdateParams};
pub use any_resource::{schema_for, AnyResource};
pub use capability::{Capability, CapabilityRequirements, CapabilityUpdateParams, RequirementError};
pub use charge::{
    Charge, ChargeCaptureParams, ChargeCreateParams, ChargeListParams, ChargeUpdateParams,
};
pub use common::{Address, Deleted, ListParams, Period, ShippingDetails};
pub use customer::{Customer, CustomerListParams, CustomerParams};
pub use discount::Discount;
pub use event::{Event, EventData, EventListParams, EventRequest};
pub use invoice_line_item::{DiscountAmount, InvoiceLineItem, TaxAmount};
pub use order::{
    DeliveryEstimate, Order, OrderCreateParams, OrderItem, OrderItemParams, OrderListParams,
    OrderPayParams, OrderReturnOrderParams, OrderShippingParams, OrderUpdateParams,
    ShippingMethod, StatusTransitions,
};
pub use order_return::{OrderReturn, OrderReturnListParams};
pub use refund::{Refund, RefundCreateParams, RefundListParams, RefundUpdateParams};
pub use sku::{Inventory, Sku, SkuListParams, SkuParams};
pub use tax_rate::{TaxRate, TaxRateListParams, TaxRateParams};

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AnyResource>();
    assert_send_sync::<Event>();
    assert_send_sync::<Order>();
};
