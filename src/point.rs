const POINT_PREFIX: &str = "POINT (";

/// Finds a `POINT (<lon> <lat>)` well-known-text substring and returns `(lon, lat)`.
///
/// Each coordinate may only contain `-`, digits and `.`, and the two are
/// separated by exactly one space. Anything else is treated as no match.
pub(crate) fn parse_point(text: &str) -> Option<(f64, f64)> {
    let mut rest = text;
    while let Some(start) = rest.find(POINT_PREFIX) {
        let candidate = &rest[start + POINT_PREFIX.len()..];
        if let Some(point) = parse_coordinates(candidate) {
            return Some(point);
        }
        rest = candidate;
    }
    None
}

fn parse_coordinates(text: &str) -> Option<(f64, f64)> {
    let end = text.find(')')?;
    let (longitude, latitude) = text[..end].split_once(' ')?;

    Some((parse_number(longitude)?, parse_number(latitude)?))
}

fn parse_number(token: &str) -> Option<f64> {
    if token.is_empty() || !token.chars().all(|c| c == '-' || c == '.' || c.is_ascii_digit()) {
        return None;
    }
    token.parse::<f64>().ok()
}
