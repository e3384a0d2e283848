//! Map click routing and marker data

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{GeoPoint, LotContract, LotId, Silo, SiloId};

/// Holds the last clicked map point until the user decides what it seeds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapClickRouter {
    pending: Option<GeoPoint>,
}

impl MapClickRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click; a newer click replaces an unconfirmed one
    pub fn click(&mut self, point: GeoPoint) {
        self.pending = Some(point);
    }

    pub fn pending(&self) -> Option<GeoPoint> {
        self.pending
    }

    /// Consume the pending point
    pub fn take(&mut self) -> Option<GeoPoint> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

/// Something the map renderer draws a marker for
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapMarker {
    Lot {
        id: LotId,
        name: String,
        hectares: Decimal,
        location: GeoPoint,
    },
    Silo {
        id: SiloId,
        name: String,
        stock_kg: Decimal,
        location: GeoPoint,
    },
}

impl MapMarker {
    pub fn location(&self) -> GeoPoint {
        match self {
            MapMarker::Lot { location, .. } | MapMarker::Silo { location, .. } => *location,
        }
    }
}

/// Markers for every lot and silo that has coordinates
pub fn markers(lots: &[LotContract], silos: &[Silo]) -> Vec<MapMarker> {
    let lots = lots.iter().filter_map(|lot| {
        lot.location().map(|location| MapMarker::Lot {
            id: lot.lot_id,
            name: lot.name.clone(),
            hectares: lot.hectares,
            location,
        })
    });
    let silos = silos.iter().filter_map(|silo| {
        silo.location().map(|location| MapMarker::Silo {
            id: silo.id,
            name: silo.name.clone(),
            stock_kg: silo.stock_kg,
            location,
        })
    });
    lots.chain(silos).collect()
}
