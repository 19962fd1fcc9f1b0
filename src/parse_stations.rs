use crate::Station;

/// Parses the whole feed body. The first line is always treated as the header.
///
/// Blank rows are skipped. Rows with too few columns are logged and skipped,
/// so a partly broken feed still yields every row that parses on its own.
pub fn parse_stations(text: &str) -> Vec<Station> {
    let mut stations = vec![];

    // NOTE: Line numbers are 1-based and count the header.
    for (index, row) in text.lines().enumerate().skip(1) {
        if row.trim().is_empty() {
            continue;
        }

        match Station::from_row(index + 1, row) {
            Ok(station) => stations.push(station),
            Err(err) => {
                tracing::warn!("Skipping row: {}", err);
                continue;
            }
        }
    }

    tracing::debug!(count = stations.len(), "parsed stations");
    stations
}
