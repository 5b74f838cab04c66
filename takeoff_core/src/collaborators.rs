//! # Collaborator Interfaces
//!
//! The seams between the engine and the layers that surround it. Only the
//! traits and the boundary value types live here; implementations belong to
//! the hosting application (file or cloud storage, a price catalog, the
//! floor-plan analysis service).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TakeoffResult;
use crate::project::Project;
use crate::room::RoomInput;

/// Measurement unit of a quantity item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Square metres
    M2,
    /// Linear metres
    M,
    /// Cubic metres
    M3,
    /// Discrete units
    Each,
    /// Labor hours
    Hour,
}

/// One unpriced line of the bill of quantities, as handed to the pricing
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityItem {
    /// Trade category (e.g., "Demolition", "Masonry", "Plumbing")
    pub category: String,
    pub description: String,
    pub unit: Unit,
    pub quantity: f64,
}

impl QuantityItem {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        unit: Unit,
        quantity: f64,
    ) -> Self {
        QuantityItem {
            category: category.into(),
            description: description.into(),
            unit,
            quantity,
        }
    }
}

/// A quantity item after pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedItem {
    pub item: QuantityItem,
    /// Price per unit, currency handled downstream
    pub unit_price: f64,
    /// `quantity * unit_price`
    pub total: f64,
}

/// Persistence seam: loads and saves whole projects keyed by project id.
pub trait ProjectStore {
    fn load(&self, project_id: Uuid) -> TakeoffResult<Project>;
    fn save(&mut self, project: &Project) -> TakeoffResult<()>;
}

/// Pricing seam: maps each produced quantity to a priced line item.
pub trait PriceBook {
    fn price(&self, item: &QuantityItem) -> TakeoffResult<PricedItem>;
}

/// Room-detection seam: the external image-analysis service that proposes
/// candidate rooms from a floor plan. Candidates feed the normalizer like
/// any other raw room input.
pub trait RoomDetector {
    fn detect_rooms(&self, image: &[u8]) -> TakeoffResult<Vec<RoomInput>>;
}
