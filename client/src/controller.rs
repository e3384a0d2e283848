//! Dashboard controller
//!
//! Owns all dashboard state and turns user events into backend calls.
//! Mutations that fail raise a blocking alert and leave the open form as it
//! was; mutations that succeed close the form and refresh the collections.
//! Failed reads are only logged.

use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;
use shared::{
    share_split, AnimalDraft, AnimalId, BulkRelocation, BulkReproductiveEvent, ExpenseDraft,
    ExpenseTarget, GeoPoint, HarvestDraft, LotDraft, LotId, RainfallDraft, RelocationDraft,
    RemovalDraft, ReproductiveEventDraft, Role, SaleDraft, ShareSplit, SiloDraft, SiloId,
    SiloSaleDraft, WeatherSnapshot, WeighingDraft,
};
use tokio::task::{JoinError, JoinSet};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::external::{DataService, HttpDataService, WeatherClient, WeatherProvider};
use crate::map::{markers, MapClickRouter, MapMarker};
use crate::modal::{FormDraft, FormMode, Modal, ModalKind};
use crate::notify::Notifier;
use crate::panel::{WeatherPanel, WeatherTicket};
use crate::selection::Selection;
use crate::store::{Collection, CollectionStore, Mutation, RefreshPolicy, RefreshReport};

/// Top-level view of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Map,
    Agriculture,
    Livestock,
    Storage,
}

/// The dashboard's state and the services it talks to
pub struct Dashboard {
    service: Arc<dyn DataService>,
    weather: Arc<dyn WeatherProvider>,
    notifier: Arc<dyn Notifier>,
    policy: RefreshPolicy,
    default_location: GeoPoint,
    default_label: String,

    store: CollectionStore,
    modal: Option<Modal>,
    selection: Selection,
    map: MapClickRouter,
    panel: WeatherPanel,
    lookups: JoinSet<(WeatherTicket, ClientResult<WeatherSnapshot>)>,
    section: Section,
    role: Role,
}

impl Dashboard {
    pub fn new(
        service: Arc<dyn DataService>,
        weather: Arc<dyn WeatherProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let defaults = crate::config::WeatherConfig::default();
        Self {
            service,
            weather,
            notifier,
            policy: RefreshPolicy::default(),
            default_location: GeoPoint::new(defaults.default_latitude, defaults.default_longitude),
            default_label: defaults.default_label,
            store: CollectionStore::new(),
            modal: None,
            selection: Selection::new(),
            map: MapClickRouter::new(),
            panel: WeatherPanel::new(),
            lookups: JoinSet::new(),
            section: Section::default(),
            role: Role::default(),
        }
    }

    /// Build a dashboard talking HTTP to the configured backend and weather API
    pub fn from_config(config: &Config, notifier: Arc<dyn Notifier>) -> ClientResult<Self> {
        let service = Arc::new(HttpDataService::new(&config.api)?);
        let weather = Arc::new(WeatherClient::new(&config.weather)?);
        Ok(Self::new(service, weather, notifier)
            .with_refresh_policy(config.refresh.policy)
            .with_default_weather(
                GeoPoint::new(config.weather.default_latitude, config.weather.default_longitude),
                config.weather.default_label.clone(),
            ))
    }

    pub fn with_refresh_policy(mut self, policy: RefreshPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Where the weather panel points when no lot has coordinates
    pub fn with_default_weather(mut self, location: GeoPoint, label: impl Into<String>) -> Self {
        self.default_location = location;
        self.default_label = label.into();
        self
    }

    // ========================================================================
    // Collections
    // ========================================================================

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    /// Refetch every collection, then point the weather panel at the first
    /// lot with coordinates (or the default location). The weather lookup
    /// runs in the background; see [`Dashboard::poll_weather`].
    pub async fn refresh_all(&mut self) -> RefreshReport {
        self.refresh(&Collection::ALL).await
    }

    async fn refresh(&mut self, collections: &[Collection]) -> RefreshReport {
        let report = self.store.refresh(self.service.as_ref(), collections).await;
        if report.refreshed(Collection::Lots) {
            self.spawn_initial_weather();
        }
        report
    }

    async fn after_mutation(&mut self, mutation: Mutation) -> RefreshReport {
        tracing::info!(%mutation, "mutation accepted");
        let collections = self.policy.collections_after(mutation);
        self.refresh(collections).await
    }

    /// Alert the user about a failed action and hand the error back
    fn raise(&self, error: ClientError) -> ClientError {
        tracing::error!(error = %error, "action failed");
        self.notifier.alert(&error.alert_message());
        error
    }

    fn settle(&self, result: ClientResult<()>) -> ClientResult<()> {
        result.map_err(|e| self.raise(e))
    }

    // ========================================================================
    // View state
    // ========================================================================

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// A lot's harvest split for the pie chart, seen from the active role
    pub fn share_split(&self, lot_id: LotId) -> Option<ShareSplit> {
        self.store
            .lot(lot_id)
            .and_then(|lot| share_split(lot, self.role))
    }

    // ========================================================================
    // Modals
    // ========================================================================

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn modal_kind(&self) -> Option<ModalKind> {
        self.modal.as_ref().map(Modal::kind)
    }

    pub fn is_open<D: FormDraft>(&self) -> bool {
        self.modal_kind() == Some(D::KIND)
    }

    pub fn draft<D: FormDraft>(&self) -> Option<&D> {
        self.modal.as_ref().and_then(D::from_modal)
    }

    pub fn draft_mut<D: FormDraft>(&mut self) -> Option<&mut D> {
        self.modal.as_mut().and_then(D::from_modal_mut)
    }

    fn open(&mut self, modal: Modal) {
        if let Some(previous) = &self.modal {
            tracing::debug!(previous = ?previous.kind(), next = ?modal.kind(), "replacing open modal");
        }
        self.modal = Some(modal);
    }

    /// Close the open modal without sending anything
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// "New" button of the current section
    pub fn open_new_for_section(&mut self) -> Option<ModalKind> {
        match self.section {
            Section::Map => return None,
            Section::Agriculture => self.open_new_lot(),
            Section::Livestock => self.open_new_animal(),
            Section::Storage => self.open_new_silo(),
        }
        self.modal_kind()
    }

    pub fn open_new_lot(&mut self) {
        self.open(Modal::Lot {
            mode: FormMode::Create,
            draft: LotDraft::default(),
        });
    }

    pub fn open_edit_lot(&mut self, lot_id: LotId) -> ClientResult<()> {
        let lot = self.store.lot(lot_id).ok_or(ClientError::UnknownEntity {
            kind: "lote",
            id: lot_id.0,
        })?;
        let draft = LotDraft::from_lot(lot);
        self.open(Modal::Lot {
            mode: FormMode::Edit(lot_id),
            draft,
        });
        Ok(())
    }

    pub fn open_harvest(&mut self, lot_id: LotId) -> ClientResult<()> {
        let lot = self.store.lot(lot_id).ok_or(ClientError::UnknownEntity {
            kind: "lote",
            id: lot_id.0,
        })?;
        let draft = HarvestDraft::for_lot(lot);
        self.open(Modal::Harvest(draft));
        Ok(())
    }

    pub fn open_rainfall(&mut self, lot_id: Option<LotId>) {
        self.open(Modal::Rainfall(RainfallDraft {
            lot_id,
            ..RainfallDraft::default()
        }));
    }

    pub fn open_new_animal(&mut self) {
        self.open(Modal::Animal(AnimalDraft::default()));
    }

    pub fn open_weighing(&mut self, animal_id: AnimalId) -> ClientResult<()> {
        let draft = WeighingDraft::for_animal(self.animal(animal_id)?);
        self.open(Modal::Weighing(draft));
        Ok(())
    }

    pub fn open_sale(&mut self, animal_id: AnimalId) -> ClientResult<()> {
        let draft = SaleDraft::for_animal(self.animal(animal_id)?);
        self.open(Modal::Sale(draft));
        Ok(())
    }

    pub fn open_removal(&mut self, animal_id: AnimalId) -> ClientResult<()> {
        let draft = RemovalDraft::for_animal(self.animal(animal_id)?);
        self.open(Modal::Removal(draft));
        Ok(())
    }

    pub fn open_expense(&mut self, target: ExpenseTarget) {
        self.open(Modal::Expense(ExpenseDraft::for_target(&target)));
    }

    pub fn open_new_silo(&mut self) {
        self.open(Modal::Silo(SiloDraft::default()));
    }

    pub fn open_silo_sale(&mut self, silo_id: SiloId) -> ClientResult<()> {
        let silo = self.store.silo(silo_id).ok_or(ClientError::UnknownEntity {
            kind: "silo",
            id: silo_id.0,
        })?;
        let draft = SiloSaleDraft::for_silo(silo);
        self.open(Modal::SiloSale(draft));
        Ok(())
    }

    pub fn open_reproductive_event(&mut self) {
        self.open(Modal::ReproductiveEvent(ReproductiveEventDraft::default()));
    }

    pub fn open_relocation(&mut self) {
        self.open(Modal::Relocation(RelocationDraft::default()));
    }

    fn animal(&self, id: AnimalId) -> ClientResult<&shared::Animal> {
        self.store.animal(id).ok_or(ClientError::UnknownEntity {
            kind: "animal",
            id: id.0,
        })
    }

    /// Validate and send the open modal's draft. On success the modal
    /// closes and the collections refresh; on failure the user is alerted
    /// and the modal stays open.
    pub async fn submit(&mut self) -> ClientResult<()> {
        let modal = self.modal.clone().ok_or(ClientError::NoOpenModal)?;
        if let Err(e) = modal.validate() {
            return Err(self.raise(e.into()));
        }

        let result = match &modal {
            Modal::Lot {
                mode: FormMode::Create,
                draft,
            } => self.service.create_lot(draft).await,
            Modal::Lot {
                mode: FormMode::Edit(id),
                draft,
            } => self.service.edit_lot(*id, draft).await,
            Modal::Harvest(d) => self.service.create_harvest(d).await,
            Modal::Animal(d) => self.service.create_animal(d).await,
            Modal::Weighing(d) => self.service.create_weighing(d).await,
            Modal::Expense(d) => self.service.create_expense(d).await,
            Modal::Sale(d) => self.service.register_sale(d).await,
            Modal::Removal(d) => self.service.register_removal(d).await,
            Modal::Silo(d) => self.service.create_silo(d).await,
            Modal::SiloSale(d) => self.service.sell_from_silo(d).await,
            Modal::Rainfall(d) => self.service.create_rainfall(d).await,
            Modal::ReproductiveEvent(d) => self.send_reproductive_event(d.clone()).await,
            Modal::Relocation(d) => self.send_relocation(d.destination).await,
        };
        self.settle(result)?;

        self.modal = None;
        self.after_mutation(modal.mutation()).await;
        if let Some(notice) = modal.success_notice() {
            self.notifier.notice(notice);
        }
        Ok(())
    }

    // ========================================================================
    // Lots and silos outside modals
    // ========================================================================

    /// Delete a lot after the user confirms. Returns whether it was deleted.
    pub async fn delete_lot(&mut self, lot_id: LotId) -> ClientResult<bool> {
        if !self.notifier.confirm("¿Eliminar?") {
            return Ok(false);
        }
        let result = self.service.delete_lot(lot_id).await;
        self.settle(result)?;
        self.after_mutation(Mutation::DeleteLot).await;
        Ok(true)
    }

    /// Wipe the backend after the user confirms. Returns whether it ran.
    pub async fn factory_reset(&mut self) -> ClientResult<bool> {
        if !self
            .notifier
            .confirm("¿Borrar todos los datos y restaurar la base inicial?")
        {
            return Ok(false);
        }
        let result = self.service.factory_reset().await;
        self.settle(result)?;
        self.modal = None;
        self.selection.exit();
        self.map.clear();
        self.after_mutation(Mutation::FactoryReset).await;
        Ok(true)
    }

    /// Download the consolidated spreadsheet to `path`, returning its size
    pub async fn export_report(&self, path: &Path) -> ClientResult<usize> {
        let bytes = self
            .service
            .export_report()
            .await
            .map_err(|e| self.raise(e))?;
        tokio::fs::write(path, &bytes)
            .await
            .map_err(|e| self.raise(e.into()))?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "report exported");
        Ok(bytes.len())
    }

    // ========================================================================
    // Selection and batch operations
    // ========================================================================

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn toggle_selection_mode(&mut self) -> bool {
        self.selection.toggle_mode()
    }

    pub fn toggle_selected(&mut self, animal_id: AnimalId) -> bool {
        self.selection.toggle(animal_id)
    }

    fn selected_ids(&self) -> ClientResult<Vec<AnimalId>> {
        if self.selection.is_empty() {
            return Err(ClientError::EmptySelection);
        }
        Ok(self.selection.ids())
    }

    async fn send_relocation(&mut self, destination: Option<LotId>) -> ClientResult<()> {
        let body = BulkRelocation {
            animal_ids: self.selected_ids()?,
            destination,
        };
        self.service.relocate_animals(&body).await?;
        self.selection.exit();
        Ok(())
    }

    async fn send_reproductive_event(&mut self, event: ReproductiveEventDraft) -> ClientResult<()> {
        let body = BulkReproductiveEvent {
            animal_ids: self.selected_ids()?,
            event,
        };
        self.service.apply_reproductive_event(&body).await?;
        self.selection.exit();
        Ok(())
    }

    /// Move every selected animal to `destination` (`None` = unassigned)
    pub async fn relocate_selected(&mut self, destination: Option<LotId>) -> ClientResult<()> {
        let result = self.send_relocation(destination).await;
        self.settle(result)?;
        self.after_mutation(Mutation::Relocation).await;
        Ok(())
    }

    /// Record one reproductive event for every selected animal
    pub async fn apply_reproductive_event(
        &mut self,
        event: ReproductiveEventDraft,
    ) -> ClientResult<()> {
        let result = self.send_reproductive_event(event).await;
        self.settle(result)?;
        self.after_mutation(Mutation::ReproductiveEvent).await;
        Ok(())
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// Quantity × unit price of the open animal or grain sale. `None` when
    /// no sale form is open or the product overflows; shown as a dash.
    pub fn estimated_sale_total(&self) -> Option<Decimal> {
        match self.modal.as_ref()? {
            Modal::Sale(d) => d.estimated_total(),
            Modal::SiloSale(d) => d.estimated_total(),
            _ => None,
        }
    }

    /// Value of the open removal; zero unless it is a sale
    pub fn estimated_removal_total(&self) -> Option<Decimal> {
        self.draft::<RemovalDraft>()
            .and_then(RemovalDraft::estimated_total)
    }

    // ========================================================================
    // Map
    // ========================================================================

    pub fn map_click(&mut self, point: GeoPoint) {
        self.map.click(point);
    }

    pub fn pending_click(&self) -> Option<GeoPoint> {
        self.map.pending()
    }

    pub fn dismiss_click(&mut self) {
        self.map.clear();
    }

    /// Open a new-lot form at the pending click. `false` if nothing was clicked.
    pub fn confirm_lot_at_click(&mut self) -> bool {
        let Some(point) = self.map.take() else {
            return false;
        };
        self.open(Modal::Lot {
            mode: FormMode::Create,
            draft: LotDraft::at(point),
        });
        true
    }

    /// Open a new-silo form at the pending click. `false` if nothing was clicked.
    pub fn confirm_silo_at_click(&mut self) -> bool {
        let Some(point) = self.map.take() else {
            return false;
        };
        self.open(Modal::Silo(SiloDraft::at(point)));
        true
    }

    /// Put a device GPS fix into the open lot or silo form
    pub fn apply_device_location(&mut self, point: GeoPoint) -> bool {
        match self.modal.as_mut() {
            Some(Modal::Lot { draft, .. }) => draft.set_location(point),
            Some(Modal::Silo(draft)) => draft.set_location(point),
            _ => return false,
        }
        self.notifier.notice("📍 GPS Detectado");
        true
    }

    pub fn markers(&self) -> Vec<MapMarker> {
        markers(self.store.lots(), self.store.silos())
    }

    // ========================================================================
    // Weather
    // ========================================================================

    pub fn weather_panel(&self) -> &WeatherPanel {
        &self.panel
    }

    /// Start a lookup; pair with [`Dashboard::complete_weather`] when the
    /// caller runs the request itself
    pub fn begin_weather(&mut self, label: impl Into<String>) -> WeatherTicket {
        self.panel.begin(label)
    }

    pub fn complete_weather(
        &mut self,
        ticket: WeatherTicket,
        result: ClientResult<WeatherSnapshot>,
    ) -> bool {
        self.panel.complete(ticket, result)
    }

    pub fn weather_provider(&self) -> Arc<dyn WeatherProvider> {
        Arc::clone(&self.weather)
    }

    /// Look up and show the weather at `point`; no-op without a point
    pub async fn load_weather(&mut self, point: Option<GeoPoint>, label: impl Into<String>) {
        let Some(point) = point else {
            return;
        };
        let ticket = self.panel.begin(label);
        let result = self.weather.current(point).await;
        self.panel.complete(ticket, result);
    }

    /// Weather for a clicked lot card or marker
    pub async fn show_lot_weather(&mut self, lot_id: LotId) {
        let Some(lot) = self.store.lot(lot_id) else {
            return;
        };
        let (point, name) = (lot.location(), lot.name.clone());
        self.load_weather(point, name).await;
    }

    /// Number of background lookups not yet applied
    pub fn weather_in_flight(&self) -> usize {
        self.lookups.len()
    }

    /// Apply background lookups that already finished, without waiting.
    /// Returns how many were applied to the panel.
    pub fn poll_weather(&mut self) -> usize {
        let mut applied = 0;
        while let Some(joined) = self.lookups.try_join_next() {
            applied += usize::from(self.apply_lookup(joined));
        }
        applied
    }

    /// Wait for every background lookup and apply it
    pub async fn settle_weather(&mut self) -> usize {
        let mut applied = 0;
        while let Some(joined) = self.lookups.join_next().await {
            applied += usize::from(self.apply_lookup(joined));
        }
        applied
    }

    fn apply_lookup(
        &mut self,
        joined: Result<(WeatherTicket, ClientResult<WeatherSnapshot>), JoinError>,
    ) -> bool {
        match joined {
            Ok((ticket, result)) => self.panel.complete(ticket, result),
            Err(e) => {
                tracing::error!(error = %e, "weather lookup task failed");
                false
            }
        }
    }

    fn spawn_initial_weather(&mut self) {
        let first = self
            .store
            .lots()
            .iter()
            .find_map(|lot| lot.location().map(|p| (p, lot.name.clone())));
        let (point, label) =
            first.unwrap_or_else(|| (self.default_location, self.default_label.clone()));

        let ticket = self.panel.begin(label);
        let weather = Arc::clone(&self.weather);
        self.lookups
            .spawn(async move { (ticket, weather.current(point).await) });
    }
}
