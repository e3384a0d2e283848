//! Form modals and their drafts
//!
//! The dashboard has at most one open modal. Each kind carries its own
//! draft; a lot modal also knows whether it creates or edits.

use shared::{
    AnimalDraft, ExpenseDraft, FieldError, HarvestDraft, LotDraft, LotId, RainfallDraft,
    RelocationDraft, RemovalDraft, ReproductiveEventDraft, SaleDraft, SiloDraft, SiloSaleDraft,
    Validate, WeighingDraft,
};

use crate::store::Mutation;

/// Whether a form creates a record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

/// Kind of modal, without its draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Lot,
    Harvest,
    Animal,
    Weighing,
    Expense,
    Sale,
    Removal,
    Silo,
    SiloSale,
    Rainfall,
    ReproductiveEvent,
    Relocation,
}

impl ModalKind {
    /// Modals that act on the animal selection
    pub fn is_batch(&self) -> bool {
        matches!(self, ModalKind::ReproductiveEvent | ModalKind::Relocation)
    }
}

/// An open modal with its draft
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Lot {
        mode: FormMode<LotId>,
        draft: LotDraft,
    },
    Harvest(HarvestDraft),
    Animal(AnimalDraft),
    Weighing(WeighingDraft),
    Expense(ExpenseDraft),
    Sale(SaleDraft),
    Removal(RemovalDraft),
    Silo(SiloDraft),
    SiloSale(SiloSaleDraft),
    Rainfall(RainfallDraft),
    ReproductiveEvent(ReproductiveEventDraft),
    Relocation(RelocationDraft),
}

impl Modal {
    pub fn kind(&self) -> ModalKind {
        match self {
            Modal::Lot { .. } => ModalKind::Lot,
            Modal::Harvest(_) => ModalKind::Harvest,
            Modal::Animal(_) => ModalKind::Animal,
            Modal::Weighing(_) => ModalKind::Weighing,
            Modal::Expense(_) => ModalKind::Expense,
            Modal::Sale(_) => ModalKind::Sale,
            Modal::Removal(_) => ModalKind::Removal,
            Modal::Silo(_) => ModalKind::Silo,
            Modal::SiloSale(_) => ModalKind::SiloSale,
            Modal::Rainfall(_) => ModalKind::Rainfall,
            Modal::ReproductiveEvent(_) => ModalKind::ReproductiveEvent,
            Modal::Relocation(_) => ModalKind::Relocation,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Modal::Lot {
                mode: FormMode::Edit(_),
                ..
            }
        )
    }

    pub fn title(&self) -> String {
        match self {
            Modal::Lot {
                mode: FormMode::Create,
                ..
            } => "Nuevo Lote".to_string(),
            Modal::Lot {
                mode: FormMode::Edit(_),
                ..
            } => "Editar Lote".to_string(),
            Modal::Harvest(d) => format!("Cargar Camión · {}", d.lot_name),
            Modal::Animal(_) => "Alta Animal".to_string(),
            Modal::Weighing(d) => format!("Nuevo Pesaje · RP: {}", d.tag),
            Modal::Expense(d) => format!("Nuevo Gasto · {}", d.destination),
            Modal::Sale(d) => format!("Venta · RP: {}", d.tag),
            Modal::Removal(d) => format!("Baja · RP: {}", d.tag),
            Modal::Silo(_) => "Nuevo Silo".to_string(),
            Modal::SiloSale(d) => format!("Venta de Grano · {}", d.silo_name),
            Modal::Rainfall(_) => "Registrar Lluvia".to_string(),
            Modal::ReproductiveEvent(_) => "Evento Reproductivo".to_string(),
            Modal::Relocation(_) => "Mover Animales".to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        match self {
            Modal::Lot { draft, .. } => draft.validate(),
            Modal::Harvest(d) => d.validate(),
            Modal::Animal(d) => d.validate(),
            Modal::Weighing(d) => d.validate(),
            Modal::Expense(d) => d.validate(),
            Modal::Sale(d) => d.validate(),
            Modal::Removal(d) => d.validate(),
            Modal::Silo(d) => d.validate(),
            Modal::SiloSale(d) => d.validate(),
            Modal::Rainfall(d) => d.validate(),
            Modal::ReproductiveEvent(d) => d.validate(),
            Modal::Relocation(d) => d.validate(),
        }
    }

    /// The backend call submitting this modal performs
    pub fn mutation(&self) -> Mutation {
        match self {
            Modal::Lot {
                mode: FormMode::Create,
                ..
            } => Mutation::CreateLot,
            Modal::Lot {
                mode: FormMode::Edit(_),
                ..
            } => Mutation::EditLot,
            Modal::Harvest(_) => Mutation::Harvest,
            Modal::Animal(_) => Mutation::CreateAnimal,
            Modal::Weighing(_) => Mutation::Weighing,
            Modal::Expense(_) => Mutation::Expense,
            Modal::Sale(_) => Mutation::Sale,
            Modal::Removal(_) => Mutation::Removal,
            Modal::Silo(_) => Mutation::CreateSilo,
            Modal::SiloSale(_) => Mutation::SiloSale,
            Modal::Rainfall(_) => Mutation::Rainfall,
            Modal::ReproductiveEvent(_) => Mutation::ReproductiveEvent,
            Modal::Relocation(_) => Mutation::Relocation,
        }
    }

    /// Notice shown once the backend accepted the submission
    pub fn success_notice(&self) -> Option<&'static str> {
        match self {
            Modal::Animal(_) => Some("Registrado"),
            Modal::Expense(_) => Some("Gasto OK"),
            _ => None,
        }
    }
}

/// Drafts that can be borrowed out of an open [`Modal`]
pub trait FormDraft: Sized {
    const KIND: ModalKind;

    fn from_modal(modal: &Modal) -> Option<&Self>;
    fn from_modal_mut(modal: &mut Modal) -> Option<&mut Self>;
}

impl FormDraft for LotDraft {
    const KIND: ModalKind = ModalKind::Lot;

    fn from_modal(modal: &Modal) -> Option<&Self> {
        match modal {
            Modal::Lot { draft, .. } => Some(draft),
            _ => None,
        }
    }

    fn from_modal_mut(modal: &mut Modal) -> Option<&mut Self> {
        match modal {
            Modal::Lot { draft, .. } => Some(draft),
            _ => None,
        }
    }
}

macro_rules! form_draft {
    ($($draft:ty => $variant:ident),* $(,)?) => {
        $(
            impl FormDraft for $draft {
                const KIND: ModalKind = ModalKind::$variant;

                fn from_modal(modal: &Modal) -> Option<&Self> {
                    match modal {
                        Modal::$variant(draft) => Some(draft),
                        _ => None,
                    }
                }

                fn from_modal_mut(modal: &mut Modal) -> Option<&mut Self> {
                    match modal {
                        Modal::$variant(draft) => Some(draft),
                        _ => None,
                    }
                }
            }
        )*
    };
}

form_draft! {
    HarvestDraft => Harvest,
    AnimalDraft => Animal,
    WeighingDraft => Weighing,
    ExpenseDraft => Expense,
    SaleDraft => Sale,
    RemovalDraft => Removal,
    SiloDraft => Silo,
    SiloSaleDraft => SiloSale,
    RainfallDraft => Rainfall,
    ReproductiveEventDraft => ReproductiveEvent,
    RelocationDraft => Relocation,
}
