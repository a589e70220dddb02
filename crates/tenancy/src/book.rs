//! Order book: the shared order and customer collections.
//!
//! The book holds every tenant's records; callers read them through a
//! [`TenantScope`] so that tenant staff only ever see their own slice.

use forno_core::entity::{find_by_id, replace_by_id};
use forno_core::{CustomerId, OrderId};

use crate::customer::Customer;
use crate::order::{Order, OrderStatus};
use crate::scope::TenantScope;

#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
    customers: Vec<Customer>,
}

impl OrderBook {
    pub fn new(orders: Vec<Order>, customers: Vec<Customer>) -> Self {
        Self { orders, customers }
    }

    /// Every order across tenants, newest first.
    pub fn all_orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn all_customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Orders visible in `scope`, newest first.
    pub fn orders_for(&self, scope: &TenantScope) -> Vec<&Order> {
        self.orders.iter().filter(|o| scope.admits(*o)).collect()
    }

    pub fn customers_for(&self, scope: &TenantScope) -> Vec<&Customer> {
        self.customers.iter().filter(|c| scope.admits(*c)).collect()
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        find_by_id(&self.orders, id)
    }

    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        find_by_id(&self.customers, id)
    }

    /// New orders go to the front of the book.
    pub fn add_order(&mut self, order: Order) {
        tracing::info!(order_id = %order.id, tenant_id = %order.tenant_id, "order added");
        self.orders.insert(0, order);
    }

    /// Set an order's status. Any status may follow any other, delivered and
    /// cancelled included. Returns `false` if the order is unknown.
    pub fn update_order_status(&mut self, id: &OrderId, status: OrderStatus) -> bool {
        match self.orders.iter_mut().find(|o| &o.id == id) {
            Some(order) => {
                tracing::debug!(
                    order_id = %id,
                    from = %order.status,
                    to = %status,
                    "order status changed"
                );
                order.status = status;
                true
            }
            None => false,
        }
    }

    pub fn add_customer(&mut self, customer: Customer) {
        tracing::info!(
            customer_id = %customer.id,
            tenant_id = %customer.tenant_id,
            "customer added"
        );
        self.customers.insert(0, customer);
    }

    pub fn update_customer(&mut self, customer: Customer) -> bool {
        replace_by_id(&mut self.customers, customer).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use forno_core::TenantId;

    use crate::seed;

    #[test]
    fn new_orders_are_listed_first() {
        let mut book = OrderBook::new(seed::orders(Utc::now()), seed::customers(Utc::now()));
        let mut order = book.all_orders()[0].clone();
        order.id = OrderId::from_static("99");
        order.tenant_id = TenantId::from_static("tenant-2");
        book.add_order(order);

        assert_eq!(book.all_orders()[0].id.as_str(), "99");

        let scope = TenantScope::Tenant(TenantId::from_static("tenant-2"));
        let visible = book.orders_for(&scope);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "99");
    }

    #[test]
    fn scoped_views_outlive_the_scope() {
        let book = OrderBook::new(seed::orders(Utc::now()), seed::customers(Utc::now()));

        let (orders, customers) = {
            let scope = TenantScope::for_actor(Some(&TenantId::from_static("tenant-1")));
            (book.orders_for(&scope), book.customers_for(&scope))
        };

        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(customers.len(), 2);
    }

    #[test]
    fn update_status_by_id() {
        let mut book = OrderBook::new(seed::orders(Utc::now()), Vec::new());
        let id = OrderId::from_static("1");

        assert!(book.update_order_status(&id, OrderStatus::Delivered));
        assert_eq!(book.order(&id).unwrap().status, OrderStatus::Delivered);
        assert!(book.update_order_status(&id, OrderStatus::Cancelled));
        assert_eq!(book.order(&id).unwrap().status, OrderStatus::Cancelled);
        assert!(!book.update_order_status(&OrderId::from_static("404"), OrderStatus::Cancelled));
    }

    #[test]
    fn customers_are_scoped_and_updatable() {
        let mut book = OrderBook::new(Vec::new(), seed::customers(Utc::now()));
        let scope = TenantScope::Tenant(TenantId::from_static("tenant-1"));
        assert_eq!(book.customers_for(&scope).len(), 2);
        let express = TenantScope::Tenant(TenantId::from_static("tenant-2"));
        assert!(book.customers_for(&express).is_empty());

        let mut customer = book.customer(&CustomerId::from_static("2")).cloned().unwrap();
        customer.phone = "(11) 77777-7777".to_string();
        assert!(book.update_customer(customer));
        assert_eq!(book.customer(&CustomerId::from_static("2")).unwrap().phone, "(11) 77777-7777");
    }
}
