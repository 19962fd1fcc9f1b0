use crate::point::parse_point;
use crate::{Error, StationKind};
use serde::{Deserialize, Serialize};

/// A row is only turned into a station if it reaches the availability column.
/// The availability text after it is optional.
pub const MIN_COLUMNS: usize = 14;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: String,

    pub unique_id: String,

    pub category: String,

    pub address: String,

    pub postal_code: String,

    pub website: String,

    pub longitude: f64,

    pub latitude: f64,

    pub icon_ref: String,

    pub status: String,

    pub operator: String,

    pub availability: String,

    pub availability_text: String,

    pub kind: StationKind,
}

impl Station {
    /// Builds a station from one comma separated feed row.
    ///
    /// `line` is only used for error reporting. Quoted fields are not
    /// understood: a comma inside quotes shifts every following column.
    pub fn from_row(line: usize, row: &str) -> Result<Station, Error> {
        let columns = row.split(',').collect::<Vec<&str>>();
        if columns.len() < MIN_COLUMNS {
            return Err(Error::MalformedRow {
                line,
                columns: columns.len(),
                expected: MIN_COLUMNS,
            });
        }

        //OBJECTID,SHAPE,...
        //RADSERVICEOGD.1,,POINT (16.37 48.21),12345,Luftpumpe,...

        // NOTE: A geometry that does not match falls back to (0, 0) and the
        // station is drawn at the origin.
        let (longitude, latitude) = parse_point(columns[2]).unwrap_or((0.0, 0.0));

        let category = columns[4].to_string();
        let kind = StationKind::from_category(&category);

        Ok(Station {
            id: columns[0].to_string(),
            unique_id: columns[3].to_string(),
            category,
            address: columns[5].to_string(),
            postal_code: columns[6].to_string(),
            website: columns[7].to_string(),
            longitude,
            latitude,
            icon_ref: columns[10].to_string(),
            status: columns[11].to_string(),
            operator: columns[12].to_string(),
            availability: columns[13].to_string(),
            availability_text: columns
                .get(14)
                .map(|t| t.replace('"', ""))
                .unwrap_or_default(),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = "RADSERVICEOGD.7,x,POINT (16.3561 48.2064),701,Radservicestation,Museumsplatz 1,1070,https://www.wien.gv.at,,,icon.png,in Betrieb,Stadt Wien,ganzjährig,\"0-24 Uhr\"";

    #[test]
    fn maps_fixed_columns() {
        let station = Station::from_row(2, ROW).unwrap();
        assert_eq!(station.id, "RADSERVICEOGD.7");
        assert_eq!(station.unique_id, "701");
        assert_eq!(station.category, "Radservicestation");
        assert_eq!(station.address, "Museumsplatz 1");
        assert_eq!(station.postal_code, "1070");
        assert_eq!(station.website, "https://www.wien.gv.at");
        assert_eq!(station.longitude, 16.3561);
        assert_eq!(station.latitude, 48.2064);
        assert_eq!(station.icon_ref, "icon.png");
        assert_eq!(station.status, "in Betrieb");
        assert_eq!(station.operator, "Stadt Wien");
        assert_eq!(station.availability, "ganzjährig");
        assert_eq!(station.availability_text, "0-24 Uhr");
        assert_eq!(station.kind, StationKind::ToolStation);
    }

    #[test]
    fn unmatched_geometry_is_origin() {
        let row = ROW.replace("POINT (16.3561 48.2064)", "LINESTRING (1 2)");
        let station = Station::from_row(2, &row).unwrap();
        assert_eq!((station.longitude, station.latitude), (0.0, 0.0));
    }

    #[test]
    fn short_row_is_malformed() {
        let err = Station::from_row(5, "a,b,POINT (1 2),d").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedRow {
                line: 5,
                columns: 4,
                expected: MIN_COLUMNS,
            }
        );
    }

    #[test]
    fn missing_availability_text_is_empty() {
        let row = "id,x,POINT (16.37 48.21),u,Pumpe,Addr,1010,w,,,icon,ok,Op,yes";
        let station = Station::from_row(2, row).unwrap();
        assert_eq!(station.availability, "yes");
        assert_eq!(station.availability_text, "");
        assert_eq!((station.longitude, station.latitude), (16.37, 48.21));
        assert_eq!(station.kind, StationKind::AirPump);
    }

    #[test]
    fn quoted_comma_shifts_columns() {
        let row = "id,x,POINT (1 2),u,\"Pumpe, klein\",addr,1010,w,,,i,s,o,a,t";
        let station = Station::from_row(2, row).unwrap();
        assert_eq!(station.category, "\"Pumpe");
        assert_eq!(station.address, " klein\"");
        assert_eq!(station.kind, StationKind::AirPump);
    }

    #[test]
    fn serializes_camel_case() {
        let station = Station::from_row(2, ROW).unwrap();
        let json = serde_json::to_value(&station).unwrap();
        assert_eq!(json["uniqueId"], "701");
        assert_eq!(json["postalCode"], "1070");
        assert_eq!(json["availabilityText"], "0-24 Uhr");
        assert_eq!(json["kind"], "toolStation");
    }
}
