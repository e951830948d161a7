//! Inventory item - a spare part sitting outside any engine

use serde::{Deserialize, Serialize};

use crate::core::hours::HourPolicy;
use crate::core::identity::NodeId;
use crate::entities::component::Component;

/// A spare part as held by the inventory subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub description: String,

    #[serde(default, alias = "partNumber")]
    pub part_number: String,

    #[serde(default, alias = "serialNumber")]
    pub serial_number: String,

    /// Hours accumulated on previous installations
    #[serde(default, alias = "currentHours")]
    pub current_hours: f64,

    /// Certified maximum hours (0 = not tracked)
    #[serde(default, alias = "lifeLimit")]
    pub life_limit: f64,
}

impl From<&Component> for InventoryItem {
    /// Archive a removed part, carrying its last known hours and limit
    fn from(cmp: &Component) -> Self {
        Self {
            description: cmp.description.clone(),
            part_number: cmp.part_number.clone(),
            serial_number: cmp.serial_number.clone(),
            current_hours: cmp.current_hours,
            life_limit: cmp.life_limit,
        }
    }
}

impl Component {
    /// Convert an inventory item into a leaf ready to be installed
    ///
    /// The installed hours follow `policy`: either the engine's total hours or
    /// the hours the part carried out of inventory.
    pub fn from_inventory(
        item: &InventoryItem,
        id: NodeId,
        policy: HourPolicy,
        engine_total_hours: f64,
    ) -> Self {
        let hours = match policy {
            HourPolicy::SyncToEngine => engine_total_hours,
            HourPolicy::PreserveCarried => item.current_hours,
        };

        Component::new(
            id,
            item.description.clone(),
            item.part_number.clone(),
            item.serial_number.clone(),
        )
        .with_hours(hours)
        .with_life_limit(item.life_limit)
    }
}
