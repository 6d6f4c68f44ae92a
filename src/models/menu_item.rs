use serde::{Deserialize, Deserializer, Serialize};

use crate::pricing::format::CurrencyFormatter;

/// Accepts a JSON number or a numeric string for the same field.
///
/// The menu backend is loose about numeric types; `price` in particular
/// shows up as `"19.90"` in some records and `19.9` in others.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

fn coerce_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn coerce_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n as u64),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// A menu item as served by `GET /foods/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMenuItem {
    #[serde(deserialize_with = "coerce_u64")]
    pub id: u64,

    pub name: String,

    pub description: String,

    #[serde(deserialize_with = "coerce_f64")]
    pub price: f64,

    #[serde(deserialize_with = "coerce_u64")]
    pub category: u64,

    pub image_url: String,

    #[serde(default)]
    pub extras: Vec<ExtraDefinition>,
}

/// An add-on as listed on the wire. Any `quantity` field in the payload is
/// ignored; working quantities always start at zero.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtraDefinition {
    #[serde(deserialize_with = "coerce_u64")]
    pub id: u64,

    pub name: String,

    #[serde(deserialize_with = "coerce_f64")]
    pub value: f64,
}

/// A normalized menu item, immutable for the life of the screen session.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: u64,
    pub image_url: String,
    pub formatted_price: String,
}

impl MenuItem {
    /// Normalize a fetched record, pre-rendering the display price.
    pub fn from_raw(raw: &RawMenuItem, format: CurrencyFormatter) -> Self {
        Self {
            id: raw.id,
            name: raw.name.clone(),
            description: raw.description.clone(),
            price: raw.price,
            category: raw.category,
            image_url: raw.image_url.clone(),
            formatted_price: format(raw.price),
        }
    }
}

/// An add-on with its user-chosen quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extra {
    pub id: u64,
    pub name: String,
    pub value: f64,
    pub quantity: u32,
}

impl Extra {
    /// Price contribution of this extra at its current quantity.
    #[inline]
    pub fn subtotal(&self) -> f64 {
        self.value * self.quantity as f64
    }
}

/// Build the working extras collection from fetched definitions.
///
/// Quantities start at 0. Duplicate ids keep the first occurrence so the
/// on-screen order matches the first appearance in the payload.
pub fn init_extras(definitions: &[ExtraDefinition]) -> Vec<Extra> {
    let mut extras: Vec<Extra> = Vec::with_capacity(definitions.len());
    for def in definitions {
        if extras.iter().any(|e| e.id == def.id) {
            continue;
        }
        extras.push(Extra {
            id: def.id,
            name: def.name.clone(),
            value: def.value,
            quantity: 0,
        });
    }
    extras
}
