//! Demo accounts the back-office starts with when nothing is persisted yet.

use chrono::{DateTime, TimeZone, Utc};

use forno_core::{TenantId, UserId};

use crate::{Credentials, Role, User};

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "admin123";

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .earliest()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn account(
    id: &'static str,
    email: &str,
    name: &str,
    role: Role,
    tenant: Option<&'static str>,
    is_active: bool,
    created_at: DateTime<Utc>,
    last_login: DateTime<Utc>,
) -> User {
    User {
        id: UserId::from_static(id),
        email: email.to_string(),
        display_name: name.to_string(),
        role,
        tenant_id: tenant.map(TenantId::from_static),
        is_active,
        created_at,
        last_login: Some(last_login),
    }
}

pub fn users() -> Vec<User> {
    vec![
        account(
            "1",
            "admin@pizza.com",
            "Super Administrador",
            Role::SuperAdmin,
            None,
            true,
            at(2024, 1, 1, 0, 0),
            at(2024, 6, 24, 10, 0),
        ),
        account(
            "2",
            "bellavista@admin.com",
            "João Silva",
            Role::Admin,
            Some("tenant-1"),
            true,
            at(2024, 1, 15, 0, 0),
            at(2024, 6, 23, 18, 30),
        ),
        account(
            "3",
            "bellavista@atendente.com",
            "Maria Santos",
            Role::Attendant,
            Some("tenant-1"),
            true,
            at(2024, 2, 1, 0, 0),
            at(2024, 6, 24, 9, 15),
        ),
        account(
            "4",
            "express@admin.com",
            "Carlos Oliveira",
            Role::Admin,
            Some("tenant-2"),
            true,
            at(2024, 2, 1, 0, 0),
            at(2024, 6, 20, 16, 45),
        ),
        account(
            "5",
            "express@atendente.com",
            "Ana Costa",
            Role::Attendant,
            Some("tenant-2"),
            false,
            at(2024, 3, 1, 0, 0),
            at(2024, 6, 10, 14, 20),
        ),
    ]
}

pub fn credentials() -> Credentials {
    users()
        .into_iter()
        .map(|u| (u.email, DEMO_PASSWORD))
        .collect()
}
