//! Display values derived from drafts and records
//!
//! Everything here is a pure projection, recomputed on every read.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{LotContract, Silo};
use crate::types::Role;

/// Quantity × unit price. An empty input counts as zero; `None` when the
/// product does not fit in a `Decimal`.
pub fn estimated_total(quantity: Option<Decimal>, unit_price: Option<Decimal>) -> Option<Decimal> {
    quantity
        .unwrap_or_default()
        .checked_mul(unit_price.unwrap_or_default())
}

/// A lot's harvest split between the viewer and the other party
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ShareSplit {
    pub mine_kg: Decimal,
    pub other_kg: Decimal,
}

/// Harvest split seen from `role`. `None` while nothing has been harvested.
pub fn share_split(lot: &LotContract, role: Role) -> Option<ShareSplit> {
    if lot.harvested_kg <= Decimal::ZERO {
        return None;
    }
    let split = match role {
        Role::Producer => ShareSplit {
            mine_kg: lot.producer_kg,
            other_kg: lot.owner_kg,
        },
        Role::Landowner => ShareSplit {
            mine_kg: lot.owner_kg,
            other_kg: lot.producer_kg,
        },
    };
    Some(split)
}

/// Stock as a percentage of capacity, rounded to one decimal
pub fn silo_fill_percent(silo: &Silo) -> Option<Decimal> {
    if silo.capacity_kg <= Decimal::ZERO {
        return None;
    }
    let ratio = silo.stock_kg.checked_div(silo.capacity_kg)?;
    Some((ratio * Decimal::ONE_HUNDRED).round_dp(1))
}
