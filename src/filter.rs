use crate::{Station, StationKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Tools,
    Pumps,
}

impl Filter {
    /// In the order the buttons are shown.
    pub const BUTTONS: [Filter; 3] = [Filter::Tools, Filter::Pumps, Filter::All];

    // NOTE: Tools is every station that is not an air pump, not a separate category.
    pub fn matches(self, station: &Station) -> bool {
        match self {
            Filter::All => true,
            Filter::Tools => station.kind != StationKind::AirPump,
            Filter::Pumps => station.kind == StationKind::AirPump,
        }
    }

    pub fn apply(self, stations: &[Station]) -> Vec<&Station> {
        stations.iter().filter(|s| self.matches(s)).collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "Alle",
            Filter::Tools => "Werkzeug",
            Filter::Pumps => "Luftpumpe",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Tools => "tools",
            Filter::Pumps => "pumps",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "tools" => Ok(Filter::Tools),
            "pumps" => Ok(Filter::Pumps),
            other => Err(format!("Unknown filter \"{}\".", other)),
        }
    }
}
