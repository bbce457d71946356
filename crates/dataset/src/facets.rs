use core_types::School;
use std::collections::BTreeSet;

/// Distinct school years, newest first.
pub fn year_options(schools: &[School]) -> Vec<String> {
    let years: BTreeSet<&str> = schools.iter().map(|s| s.year.as_str()).collect();
    years.into_iter().rev().map(str::to_string).collect()
}

/// Distinct counties in ascending order.
pub fn county_options(schools: &[School]) -> Vec<String> {
    distinct_sorted(schools.iter().map(|s| s.county.as_str()))
}

/// Distinct districts of `county`, ascending. Empty when no county is selected.
///
/// Scoped only by county: other active filters never narrow this list.
pub fn district_options(schools: &[School], county: &str) -> Vec<String> {
    if county.is_empty() {
        return Vec::new();
    }
    distinct_sorted(
        schools
            .iter()
            .filter(|s| s.county == county)
            .map(|s| s.district.as_str()),
    )
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
