/// Splits a provider location such as "New York, NY, United States" into
/// `(city, country)` using the first and last comma-separated segments.
pub fn split_location(loc: &str) -> (String, String) {
    let parts: Vec<&str> = loc.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [] | [""] => (String::new(), String::new()),
        [city] => (city.to_string(), String::new()),
        [city, .., country] => (city.to_string(), country.to_string()),
    }
}
