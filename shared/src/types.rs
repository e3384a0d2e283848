//! Common types used across the dashboard

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

entity_id!(
    /// Identifier of a lot (the parcel, not its contract)
    LotId
);
entity_id!(
    /// Identifier of an animal
    AnimalId
);
entity_id!(
    /// Identifier of a silo
    SiloId
);

/// A point on the map, in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a point from the optional `lat`/`lng` pair the backend sends.
    /// Both halves must be present.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self::new(latitude, longitude)),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Read an optional form field that a browser may send as `""`.
///
/// Blank strings and `null` become `None`; other strings are parsed with
/// `FromStr`, so `"12.5"` and `12.5` both work.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field<T> {
        Text(String),
        Value(T),
    }

    match Option::<Field<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Field::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Field::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(Field::Value(value)) => Ok(Some(value)),
    }
}

/// Perspective from which a share-cropping harvest is shown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    /// The farmer working the land
    #[default]
    #[serde(rename = "PRODUCTOR")]
    Producer,
    /// The landowner collecting a share
    #[serde(rename = "DUENO")]
    Landowner,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Producer => "Productor",
            Role::Landowner => "Dueño",
        }
    }
}
