//! Tenant (pizzeria) records and their nested store settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forno_core::{Entity, TenantId};

/// Opening window for one weekday. Times are wall-clock `HH:MM` strings;
/// `24:00` is a valid closing time (midnight).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    pub open: String,
    pub close: String,
    pub is_open: bool,
}

impl DayHours {
    pub fn new(open: &str, close: &str, is_open: bool) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
            is_open,
        }
    }
}

/// Weekly working hours, one entry per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

impl WorkingHours {
    /// Same window every weekday, with Friday and Saturday closing at `late_close`.
    pub fn evenings(open: &str, close: &str, late_close: &str) -> Self {
        let day = DayHours::new(open, close, true);
        let late = DayHours::new(open, late_close, true);
        Self {
            monday: day.clone(),
            tuesday: day.clone(),
            wednesday: day.clone(),
            thursday: day.clone(),
            friday: late.clone(),
            saturday: late,
            sunday: day,
        }
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self::evenings("18:00", "23:00", "24:00")
    }
}

/// Neighbourhood served by delivery, with its fee in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryArea {
    pub id: String,
    pub name: String,
    pub fee: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantSettings {
    pub working_hours: WorkingHours,
    pub delivery_areas: Vec<DeliveryArea>,
    /// Accepted payment method names, as shown to attendants.
    pub payment_methods: Vec<String>,
    /// Minimum order amount in cents.
    pub minimum_order: u64,
    /// Whether the store is currently taking orders.
    pub is_open: bool,
}

impl Default for TenantSettings {
    fn default() -> Self {
        Self {
            working_hours: WorkingHours::default(),
            delivery_areas: Vec::new(),
            payment_methods: vec!["Dinheiro".to_string(), "PIX".to_string()],
            minimum_order: 2_500,
            is_open: true,
        }
    }
}

/// One independently operated pizzeria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    pub slug: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub is_active: bool,
    /// Estimated monthly revenue in cents (super-admin overview only).
    #[serde(default)]
    pub monthly_revenue: u64,
    pub settings: TenantSettings,
    pub created_at: DateTime<Utc>,
}

impl Entity for Tenant {
    type Id = TenantId;

    fn id(&self) -> &TenantId {
        &self.id
    }
}

/// Draft for registering a new tenant from the super-admin console.
///
/// Unset fields take the console defaults (see [`TenantSettings::default`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTenant {
    pub name: String,
    pub slug: Option<String>,
    pub phone: String,
    pub address: String,
    pub is_active: bool,
    pub minimum_order: Option<u64>,
}

impl NewTenant {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_active: true,
            ..Default::default()
        }
    }

    pub fn into_tenant(self, id: TenantId, created_at: DateTime<Utc>) -> Tenant {
        let slug = match self.slug {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
            _ => slugify(&self.name),
        };
        let mut settings = TenantSettings::default();
        if let Some(minimum_order) = self.minimum_order {
            settings.minimum_order = minimum_order;
        }

        Tenant {
            id,
            slug,
            name: self.name.trim().to_string(),
            phone: self.phone,
            address: self.address,
            is_active: self.is_active,
            monthly_revenue: 0,
            settings,
            created_at,
        }
    }
}

/// Lowercase ASCII slug: accents folded, runs of other characters become `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        let folded = fold_accent(c).to_ascii_lowercase();
        if folded.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(folded);
        } else {
            pending_dash = true;
        }
    }

    slug
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_folds_accents_and_collapses_separators() {
        assert_eq!(slugify("Pizzaria Bella Vista"), "pizzaria-bella-vista");
        assert_eq!(slugify("  Forno & Cia São João!! "), "forno-cia-sao-joao");
    }

    #[test]
    fn new_tenant_uses_console_defaults() {
        let tenant = NewTenant::named("Pizza Napolitana")
            .into_tenant(TenantId::from_static("t-9"), Utc::now());

        assert_eq!(tenant.slug, "pizza-napolitana");
        assert!(tenant.is_active);
        assert_eq!(tenant.settings.minimum_order, 2_500);
        assert_eq!(tenant.settings.payment_methods, vec!["Dinheiro", "PIX"]);
        assert_eq!(tenant.settings.working_hours.friday.close, "24:00");
        assert_eq!(tenant.settings.working_hours.monday.close, "23:00");
        assert!(tenant.settings.is_open);
    }

    #[test]
    fn explicit_slug_wins() {
        let draft = NewTenant {
            slug: Some("express".to_string()),
            minimum_order: Some(3_000),
            ..NewTenant::named("Pizza Express")
        };
        let tenant = draft.into_tenant(TenantId::new(), Utc::now());
        assert_eq!(tenant.slug, "express");
        assert_eq!(tenant.settings.minimum_order, 3_000);
    }

    #[test]
    fn settings_serialize_camel_case() {
        let json = serde_json::to_value(TenantSettings::default()).unwrap();
        assert!(json.get("workingHours").is_some());
        assert_eq!(json["minimumOrder"], 2_500);
        assert_eq!(json["workingHours"]["sunday"]["isOpen"], true);
    }
}
