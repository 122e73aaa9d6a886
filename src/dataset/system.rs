use std::fmt;

use serde::{Deserialize, Serialize};

use crate::name::HasBlock;

/// Building subsystem category that consumes energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SystemType {
    #[serde(rename = "HVAC")]
    Hvac,
    #[serde(rename = "Lighting")]
    Lighting,
    #[serde(rename = "Computers & IT")]
    ComputersIt,
    #[serde(rename = "Lab Equipment")]
    LabEquipment,
    #[serde(rename = "Other Appliances")]
    OtherAppliances,
}

impl SystemType {
    /// All system types in breakdown order.
    pub const ALL: [SystemType; 5] = [
        SystemType::Hvac,
        SystemType::Lighting,
        SystemType::ComputersIt,
        SystemType::LabEquipment,
        SystemType::OtherAppliances,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SystemType::Hvac => "HVAC",
            SystemType::Lighting => "Lighting",
            SystemType::ComputersIt => "Computers & IT",
            SystemType::LabEquipment => "Lab Equipment",
            SystemType::OtherAppliances => "Other Appliances",
        }
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Energy consumed by one system type within one block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemBreakdownRecord {
    pub block: String,
    pub system_type: SystemType,
    /// Share of the block total in kWh.
    pub energy_kwh: f64,
    /// Share of the block total in %, rounded to 1 decimal.
    pub percentage: f64,
}

impl HasBlock for SystemBreakdownRecord {
    fn block(&self) -> &str {
        &self.block
    }
}
