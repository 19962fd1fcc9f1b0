use crate::{Error, Station, StationKind};
use geojson::{Feature, FeatureCollection, GeoJson};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
    pub icon_url: String,

    pub icon_size: [u32; 2],

    pub icon_anchor: [i32; 2],

    pub popup_anchor: [i32; 2],

    pub class_name: String,
}

impl MarkerIcon {
    pub fn for_kind(kind: StationKind, base_url: &Url) -> Result<MarkerIcon, Error> {
        let (file, size, anchor, popup_anchor, class) = match kind {
            StationKind::AirPump => (
                "bicycle-pump.png",
                [30, 30],
                [15, 15],
                [0, -15],
                "air-pump",
            ),
            StationKind::ToolStation => (
                "bicycle-pin(1).png",
                [40, 40],
                [20, 40],
                [0, -40],
                "tool-station",
            ),
        };

        let icon_url = match base_url.join(file) {
            Ok(url) => url,
            Err(err) => {
                return Err(Error::InvalidUrl {
                    url: format!("{}{}", base_url, file),
                    reason: err.to_string(),
                })
            }
        };

        Ok(MarkerIcon {
            icon_url: icon_url.to_string(),
            icon_size: size,
            icon_anchor: anchor,
            popup_anchor,
            class_name: format!("marker-icon {}", class),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub title: String,

    pub address: String,

    pub locality: String,

    pub operator: Option<String>,

    pub availability_text: Option<String>,

    pub website: Option<String>,
}

impl Popup {
    pub fn for_station(station: &Station) -> Popup {
        Popup {
            title: station.category.clone(),
            address: station.address.clone(),
            locality: format!("{} Wien", station.postal_code),
            operator: non_empty(&station.operator).map(|o| format!("Betreiber: {}", o)),
            availability_text: non_empty(&station.availability_text).map(String::from),
            website: non_empty(&station.website).map(String::from),
        }
    }
}

fn non_empty(text: &str) -> Option<&str> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Everything the map widget needs to draw one station.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub key: String,

    pub latitude: f64,

    pub longitude: f64,

    pub kind: StationKind,

    pub icon: MarkerIcon,

    pub popup: Popup,
}

impl Marker {
    pub fn for_station(station: &Station, base_url: &Url) -> Result<Marker, Error> {
        Ok(Marker {
            key: station.id.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            kind: station.kind,
            icon: MarkerIcon::for_kind(station.kind, base_url)?,
            popup: Popup::for_station(station),
        })
    }
}

pub fn markers_to_geojson(markers: &[Marker]) -> Result<GeoJson, Error> {
    let mut features = Vec::new();

    for marker in markers {
        let mut feature = Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::Point(vec![
                marker.longitude,
                marker.latitude,
            ]))),
            id: Some(geojson::feature::Id::String(marker.key.clone())),
            properties: None,
            foreign_members: None,
        };
        feature.set_property("kind", to_json(&marker.kind)?);
        feature.set_property("icon", to_json(&marker.icon)?);
        feature.set_property("popup", to_json(&marker.popup)?);
        features.push(feature);
    }

    Ok(GeoJson::FeatureCollection(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    }))
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, Error> {
    match serde_json::to_value(value) {
        Ok(v) => Ok(v),
        Err(err) => Err(Error::Unspecified(format!(
            "Could not serialize marker property ({}).",
            err
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.org/vienna-bike-stations/").unwrap()
    }

    fn station(category: &str) -> Station {
        Station::from_row(
            2,
            &format!(
                "s1,x,POINT (16.37 48.21),u1,{},Ring 1,1010,,,,i,ok,,always,",
                category
            ),
        )
        .unwrap()
    }

    #[test]
    fn air_pump_icon() {
        let icon = MarkerIcon::for_kind(StationKind::AirPump, &base()).unwrap();
        assert_eq!(
            icon.icon_url,
            "https://example.org/vienna-bike-stations/bicycle-pump.png"
        );
        assert_eq!(icon.icon_size, [30, 30]);
        assert_eq!(icon.icon_anchor, [15, 15]);
        assert_eq!(icon.popup_anchor, [0, -15]);
        assert_eq!(icon.class_name, "marker-icon air-pump");
    }

    #[test]
    fn tool_station_icon() {
        let icon = MarkerIcon::for_kind(StationKind::ToolStation, &base()).unwrap();
        assert_eq!(
            icon.icon_url,
            "https://example.org/vienna-bike-stations/bicycle-pin(1).png"
        );
        assert_eq!(icon.icon_size, [40, 40]);
        assert_eq!(icon.icon_anchor, [20, 40]);
        assert_eq!(icon.popup_anchor, [0, -40]);
        assert_eq!(icon.class_name, "marker-icon tool-station");
    }

    #[test]
    fn popup_omits_empty_lines() {
        let popup = Popup::for_station(&station("Luftpumpe"));
        assert_eq!(popup.title, "Luftpumpe");
        assert_eq!(popup.address, "Ring 1");
        assert_eq!(popup.locality, "1010 Wien");
        assert_eq!(popup.operator, None);
        assert_eq!(popup.availability_text, None);
        assert_eq!(popup.website, None);
    }

    #[test]
    fn marker_uses_station_identity_and_position() {
        let marker = Marker::for_station(&station("Luftpumpe"), &base()).unwrap();
        assert_eq!(marker.key, "s1");
        assert_eq!(marker.latitude, 48.21);
        assert_eq!(marker.longitude, 16.37);
        assert_eq!(marker.kind, StationKind::AirPump);
        assert_eq!(marker.icon.icon_size, [30, 30]);
    }

    #[test]
    fn geojson_points_are_lon_lat() {
        let markers = vec![Marker::for_station(&station("Werkzeug"), &base()).unwrap()];
        let gj = markers_to_geojson(&markers).unwrap();
        let json = serde_json::to_value(&gj).unwrap();

        assert_eq!(json["type"], "FeatureCollection");
        let feature = &json["features"][0];
        assert_eq!(feature["id"], "s1");
        assert_eq!(feature["geometry"]["type"], "Point");
        assert_eq!(feature["geometry"]["coordinates"][0], 16.37);
        assert_eq!(feature["geometry"]["coordinates"][1], 48.21);
        assert_eq!(feature["properties"]["kind"], "toolStation");
        assert_eq!(feature["properties"]["popup"]["locality"], "1010 Wien");
    }
}
