//! Demo data the back-office starts with.

use chrono::{DateTime, Duration, TimeZone, Utc};

use forno_core::{CustomerId, OrderId, TenantId};

use crate::customer::{Address, Customer};
use crate::order::{Order, OrderItem, OrderStatus};
use crate::tenant::{DayHours, DeliveryArea, Tenant, TenantSettings, WorkingHours};

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .earliest()
        .unwrap_or_default()
}

fn area(id: &str, name: &str, fee: u64) -> DeliveryArea {
    DeliveryArea {
        id: id.to_string(),
        name: name.to_string(),
        fee,
    }
}

fn methods(names: &[&str]) -> Vec<String> {
    names.iter().map(|m| m.to_string()).collect()
}

pub fn tenants() -> Vec<Tenant> {
    let mut express_hours = WorkingHours::evenings("19:00", "23:00", "24:00");
    express_hours.sunday = DayHours::new("19:00", "23:00", false);

    vec![
        Tenant {
            id: TenantId::from_static("tenant-1"),
            slug: "bella-vista".to_string(),
            name: "Pizzaria Bella Vista".to_string(),
            phone: "(11) 99999-9999".to_string(),
            address: "Rua das Flores, 123 - Centro".to_string(),
            is_active: true,
            monthly_revenue: 850_000,
            settings: TenantSettings {
                working_hours: WorkingHours::evenings("18:00", "23:00", "24:00"),
                delivery_areas: vec![area("1", "Centro", 300), area("2", "Bairro Norte", 500)],
                payment_methods: methods(&[
                    "Dinheiro",
                    "PIX",
                    "Cartão de Débito",
                    "Cartão de Crédito",
                ]),
                minimum_order: 2_500,
                is_open: true,
            },
            created_at: at(2024, 1, 15, 10, 0),
        },
        Tenant {
            id: TenantId::from_static("tenant-2"),
            slug: "pizza-express".to_string(),
            name: "Pizza Express".to_string(),
            phone: "(11) 88888-8888".to_string(),
            address: "Av. Principal, 456 - Vila Nova".to_string(),
            is_active: false,
            monthly_revenue: 395_000,
            settings: TenantSettings {
                working_hours: express_hours,
                delivery_areas: vec![area("1", "Vila Nova", 400)],
                payment_methods: methods(&["PIX", "Cartão de Crédito"]),
                minimum_order: 3_000,
                is_open: false,
            },
            created_at: at(2024, 2, 1, 14, 30),
        },
    ]
}

fn item(product_id: &str, product_name: &str, quantity: u32, unit_price: u64) -> OrderItem {
    OrderItem {
        product_id: product_id.to_string(),
        product_name: product_name.to_string(),
        quantity,
        unit_price,
        total: unit_price * u64::from(quantity),
    }
}

/// Two open orders of the Bella Vista pizzeria, relative to `now`.
pub fn orders(now: DateTime<Utc>) -> Vec<Order> {
    vec![
        Order {
            id: OrderId::from_static("1"),
            tenant_id: TenantId::from_static("tenant-1"),
            customer_id: CustomerId::from_static("1"),
            items: vec![
                item("1", "Pizza Margherita", 1, 3_590),
                item("3", "Coca-Cola 2L", 2, 890),
            ],
            total: 5_870,
            status: OrderStatus::Preparing,
            payment_method: "PIX".to_string(),
            delivery_address: "Rua das Flores, 123".to_string(),
            delivery_fee: 500,
            created_at: now,
        },
        Order {
            id: OrderId::from_static("2"),
            tenant_id: TenantId::from_static("tenant-1"),
            customer_id: CustomerId::from_static("2"),
            items: vec![item("2", "Pizza Pepperoni", 2, 4_290)],
            total: 9_080,
            status: OrderStatus::OutForDelivery,
            payment_method: "Cartão de Crédito".to_string(),
            delivery_address: "Av. Principal, 456".to_string(),
            delivery_fee: 500,
            created_at: now - Duration::hours(1),
        },
    ]
}

pub fn customers(now: DateTime<Utc>) -> Vec<Customer> {
    vec![
        Customer {
            id: CustomerId::from_static("1"),
            tenant_id: TenantId::from_static("tenant-1"),
            name: "João Silva".to_string(),
            phone: "(11) 99999-9999".to_string(),
            email: Some("joao@email.com".to_string()),
            addresses: vec![Address {
                id: "1".to_string(),
                street: "Rua das Flores, 123".to_string(),
                neighborhood: "Centro".to_string(),
                city: "São Paulo".to_string(),
                zip_code: "01234-567".to_string(),
                is_default: true,
            }],
            created_at: now,
        },
        Customer {
            id: CustomerId::from_static("2"),
            tenant_id: TenantId::from_static("tenant-1"),
            name: "Maria Santos".to_string(),
            phone: "(11) 88888-8888".to_string(),
            email: Some("maria@email.com".to_string()),
            addresses: vec![Address {
                id: "2".to_string(),
                street: "Av. Principal, 456".to_string(),
                neighborhood: "Vila Nova".to_string(),
                city: "São Paulo".to_string(),
                zip_code: "01234-890".to_string(),
                is_default: true,
            }],
            created_at: now - Duration::days(1),
        },
    ]
}
