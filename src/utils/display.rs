/// Human-readable form of a timezone identifier.
///
/// Underscores become spaces, then every run of letters is title-cased:
/// `America/New_York` -> `America/New York`, `America/Port-au-Prince` ->
/// `America/Port-Au-Prince`. The result cannot be mapped back to the
/// identifier because the underscores are gone.
pub fn display_name(timezone_id: &str) -> String {
    title_case(&timezone_id.replace('_', " "))
}

/// Uppercases the first letter of each letter run and lowercases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && !previous_cased {
            out.extend(c.to_uppercase());
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        previous_cased = cased;
    }

    out
}
