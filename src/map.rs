use serde::{Deserialize, Serialize};

/// Initial view handed to the map widget.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    /// (latitude, longitude)
    pub center: (f64, f64),

    pub zoom: u8,

    pub tile_url: String,

    pub attribution: String,
}

impl Default for MapSettings {
    // Stephansplatz, Vienna.
    fn default() -> Self {
        MapSettings {
            center: (48.2082, 16.3719),
            zoom: 13,
            tile_url: String::from("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"),
            attribution: String::from(
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_vienna() {
        let settings = MapSettings::default();
        assert_eq!(settings.center, (48.2082, 16.3719));
        assert_eq!(settings.zoom, 13);

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            json["tileUrl"],
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
        );
        assert_eq!(json["center"][0], 48.2082);
    }
}
