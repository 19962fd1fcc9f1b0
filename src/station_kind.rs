use serde::{Deserialize, Serialize};

/// Substring of the feed's category text that marks an air pump ("Luftpumpe", "Pumpe").
pub const PUMP_TOKEN: &str = "pumpe";

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum StationKind {
    ToolStation,
    AirPump,
}

impl StationKind {
    pub fn from_category(category: &str) -> StationKind {
        if category.to_lowercase().contains(PUMP_TOKEN) {
            StationKind::AirPump
        } else {
            StationKind::ToolStation
        }
    }

    pub fn is_air_pump(self) -> bool {
        self == StationKind::AirPump
    }
}
