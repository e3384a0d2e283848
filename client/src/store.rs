//! Client-side cache of the backend's collections
//!
//! Each collection is replaced wholesale when refetched. Nothing is patched
//! locally and a failed fetch keeps the previous contents.

use serde::{Deserialize, Serialize};
use shared::{Animal, AnimalId, DashboardSummary, LotContract, LotId, Silo, SiloId};

use crate::external::DataService;

/// A collection mirrored from the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Lots,
    Animals,
    Silos,
    Summary,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Lots,
        Collection::Animals,
        Collection::Silos,
        Collection::Summary,
    ];
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collection::Lots => write!(f, "lots"),
            Collection::Animals => write!(f, "animals"),
            Collection::Silos => write!(f, "silos"),
            Collection::Summary => write!(f, "summary"),
        }
    }
}

/// A state-changing call to the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    CreateLot,
    EditLot,
    DeleteLot,
    Harvest,
    Rainfall,
    CreateAnimal,
    Weighing,
    Expense,
    Sale,
    Removal,
    Relocation,
    ReproductiveEvent,
    CreateSilo,
    SiloSale,
    FactoryReset,
}

impl Mutation {
    /// Collections whose contents the backend may have changed
    pub fn touches(&self) -> &'static [Collection] {
        use Collection::*;
        match self {
            Mutation::CreateLot | Mutation::EditLot => &[Lots, Summary],
            Mutation::DeleteLot => &[Lots, Animals, Summary],
            Mutation::Harvest | Mutation::Rainfall => &[Lots],
            Mutation::CreateAnimal => &[Animals, Summary],
            Mutation::Weighing | Mutation::ReproductiveEvent => &[Animals],
            Mutation::Expense => &[Lots, Animals, Summary],
            Mutation::Sale | Mutation::Removal => &[Animals, Summary],
            Mutation::Relocation => &[Lots, Animals],
            Mutation::CreateSilo => &[Silos],
            Mutation::SiloSale => &[Silos, Summary],
            Mutation::FactoryReset => &Collection::ALL,
        }
    }
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mutation::CreateLot => "create-lot",
            Mutation::EditLot => "edit-lot",
            Mutation::DeleteLot => "delete-lot",
            Mutation::Harvest => "create-harvest",
            Mutation::Rainfall => "create-rainfall",
            Mutation::CreateAnimal => "create-animal",
            Mutation::Weighing => "create-weighing",
            Mutation::Expense => "create-expense",
            Mutation::Sale => "register-sale",
            Mutation::Removal => "register-removal",
            Mutation::Relocation => "bulk-relocate",
            Mutation::ReproductiveEvent => "bulk-reproductive-event",
            Mutation::CreateSilo => "create-silo",
            Mutation::SiloSale => "sell-from-silo",
            Mutation::FactoryReset => "factory-reset",
        };
        write!(f, "{}", name)
    }
}

/// Which collections to refetch after a successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshPolicy {
    /// Refetch every collection
    #[default]
    All,
    /// Refetch only what the mutation touches
    Targeted,
}

impl RefreshPolicy {
    pub fn collections_after(&self, mutation: Mutation) -> &'static [Collection] {
        match self {
            RefreshPolicy::All => &Collection::ALL,
            RefreshPolicy::Targeted => mutation.touches(),
        }
    }
}

/// Outcome of a refresh; failures were logged and left their collection stale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub refreshed: Vec<Collection>,
    pub failed: Vec<Collection>,
}

impl RefreshReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn refreshed(&self, collection: Collection) -> bool {
        self.refreshed.contains(&collection)
    }
}

/// Read-through cache of lots, animals, silos and the summary
#[derive(Debug, Clone, Default)]
pub struct CollectionStore {
    lots: Vec<LotContract>,
    animals: Vec<Animal>,
    silos: Vec<Silo>,
    summary: Option<DashboardSummary>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lots(&self) -> &[LotContract] {
        &self.lots
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn silos(&self) -> &[Silo] {
        &self.silos
    }

    pub fn summary(&self) -> Option<&DashboardSummary> {
        self.summary.as_ref()
    }

    pub fn lot(&self, id: LotId) -> Option<&LotContract> {
        self.lots.iter().find(|l| l.lot_id == id)
    }

    pub fn animal(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.iter().find(|a| a.id == id)
    }

    pub fn silo(&self, id: SiloId) -> Option<&Silo> {
        self.silos.iter().find(|s| s.id == id)
    }

    /// Refetch the given collections concurrently, replacing each one that
    /// loads and logging each one that does not
    pub async fn refresh(
        &mut self,
        service: &dyn DataService,
        collections: &[Collection],
    ) -> RefreshReport {
        let wants = |c: Collection| collections.contains(&c);

        let (lots, animals, silos, summary) = tokio::join!(
            async {
                if wants(Collection::Lots) {
                    Some(service.list_lots().await)
                } else {
                    None
                }
            },
            async {
                if wants(Collection::Animals) {
                    Some(service.list_animals().await)
                } else {
                    None
                }
            },
            async {
                if wants(Collection::Silos) {
                    Some(service.list_silos().await)
                } else {
                    None
                }
            },
            async {
                if wants(Collection::Summary) {
                    Some(service.summary().await)
                } else {
                    None
                }
            },
        );

        let mut report = RefreshReport::default();
        if let Some(result) = lots {
            apply(&mut self.lots, result, Collection::Lots, &mut report);
        }
        if let Some(result) = animals {
            apply(&mut self.animals, result, Collection::Animals, &mut report);
        }
        if let Some(result) = silos {
            apply(&mut self.silos, result, Collection::Silos, &mut report);
        }
        if let Some(result) = summary {
            match result {
                Ok(summary) => {
                    self.summary = Some(summary);
                    report.refreshed.push(Collection::Summary);
                }
                Err(e) => {
                    tracing::warn!(collection = %Collection::Summary, error = %e, "refresh failed");
                    report.failed.push(Collection::Summary);
                }
            }
        }

        tracing::debug!(
            refreshed = report.refreshed.len(),
            failed = report.failed.len(),
            "collections refreshed"
        );
        report
    }
}

fn apply<T>(
    slot: &mut Vec<T>,
    result: crate::error::ClientResult<Vec<T>>,
    collection: Collection,
    report: &mut RefreshReport,
) {
    match result {
        Ok(items) => {
            *slot = items;
            report.refreshed.push(collection);
        }
        Err(e) => {
            tracing::warn!(%collection, error = %e, "refresh failed");
            report.failed.push(collection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_policy_ignores_mutation() {
        for mutation in [Mutation::Weighing, Mutation::CreateSilo, Mutation::Harvest] {
            assert_eq!(RefreshPolicy::All.collections_after(mutation), &Collection::ALL);
        }
    }

    #[test]
    fn test_targeted_policy_uses_touched_collections() {
        assert_eq!(
            RefreshPolicy::Targeted.collections_after(Mutation::CreateSilo),
            &[Collection::Silos]
        );
        assert_eq!(
            RefreshPolicy::Targeted.collections_after(Mutation::FactoryReset),
            &Collection::ALL
        );
    }

    #[test]
    fn test_policy_from_config_string() {
        let policy: RefreshPolicy = serde_json::from_str("\"targeted\"").unwrap();
        assert_eq!(policy, RefreshPolicy::Targeted);
    }
}
