//! # Project Data Structures
//!
//! The `Project` struct is the root container the storage collaborator
//! persists: metadata, the per-phase room lists and configurations, the
//! demolition physics settings, and the electrical point counts.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, owner, reference, client, timestamps)
//! ├── demolition_rooms / demolition_config
//! ├── reform_rooms / reform_config
//! ├── settings: DemolitionSettings
//! └── electrical: ElectricalConfig
//! ```
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::project::Project;
//!
//! let project = Project::new("Jane Doe", "25-014", "Acme Reforms");
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{DemolitionSettings, ElectricalConfig, GlobalConfig};
use crate::room::RoomInput;

/// Current schema version for stored projects
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the aggregate the storage collaborator loads and saves, keyed by
/// `meta.id`. The engine itself never persists it; compute functions borrow
/// it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, owner, reference info)
    pub meta: ProjectMetadata,

    /// Rooms as they exist today, plus the demolition-phase config
    pub demolition_rooms: Vec<RoomInput>,
    pub demolition_config: GlobalConfig,

    /// Rooms as they should end up, plus the reform-phase config
    pub reform_rooms: Vec<RoomInput>,
    pub reform_config: GlobalConfig,

    /// Material-physics constants for the debris math
    pub settings: DemolitionSettings,

    /// Electrical point counts for the reform
    pub electrical: ElectricalConfig,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `owner` - Name of the person preparing the budget
    /// * `reference` - Job/budget reference (e.g., "25-014")
    /// * `client` - Client name
    ///
    /// # Example
    ///
    /// ```rust
    /// use takeoff_core::project::Project;
    ///
    /// let project = Project::new("Jane Doe", "25-014", "Acme Reforms");
    /// assert_eq!(project.meta.owner, "Jane Doe");
    /// ```
    pub fn new(
        owner: impl Into<String>,
        reference: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                id: Uuid::new_v4(),
                version: SCHEMA_VERSION.to_string(),
                owner: owner.into(),
                reference: reference.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            demolition_rooms: Vec::new(),
            demolition_config: GlobalConfig::demolition(),
            reform_rooms: Vec::new(),
            reform_config: GlobalConfig::reform(),
            settings: DemolitionSettings::default(),
            electrical: ElectricalConfig::default(),
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Rooms across both phases.
    pub fn room_count(&self) -> usize {
        self.demolition_rooms.len() + self.reform_rooms.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored alongside the room data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Stable identity the storage collaborator keys on
    pub id: Uuid,

    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the person preparing the budget
    pub owner: String,

    /// Job/budget reference
    pub reference: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}
