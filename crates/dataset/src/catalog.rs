use crate::facets;
use core_types::School;

/// The read-only school collection shared by every request.
///
/// Built once at startup. The year and county facets are computed here over
/// the whole collection; district facets depend on the selected county and
/// are derived on demand.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    schools: Vec<School>,
    years: Vec<String>,
    counties: Vec<String>,
}

impl Dataset {
    pub fn new(schools: Vec<School>) -> Self {
        let years = facets::year_options(&schools);
        let counties = facets::county_options(&schools);
        Self {
            schools,
            years,
            counties,
        }
    }

    /// All records, in file order.
    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    /// Distinct years, newest first.
    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// Distinct counties, ascending.
    pub fn counties(&self) -> &[String] {
        &self.counties
    }

    /// Districts of the given county over the full collection.
    pub fn districts_for(&self, county: &str) -> Vec<String> {
        facets::district_options(&self.schools, county)
    }

    /// The first school whose code matches, if any.
    pub fn find_by_code(&self, code: &str) -> Option<&School> {
        self.schools.iter().find(|s| s.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(code: &str, name: &str, county: &str) -> School {
        School {
            code: code.to_string(),
            name: name.to_string(),
            county: county.to_string(),
            year: "112".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn facets_are_built_at_construction() {
        let dataset = Dataset::new(vec![school("1", "x", "B"), school("2", "y", "A")]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.counties(), ["A", "B"]);
        assert_eq!(dataset.years(), ["112"]);
    }

    #[test]
    fn lookup_returns_first_match() {
        let dataset = Dataset::new(vec![
            school("1", "first", "A"),
            school("2", "other", "A"),
            school("1", "duplicate", "B"),
        ]);
        let found = dataset.find_by_code("1").unwrap();
        assert_eq!(found.code, "1");
        assert_eq!(found.name, "first");
    }

    #[test]
    fn lookup_miss_is_none() {
        let dataset = Dataset::new(vec![school("1", "x", "A")]);
        assert!(dataset.find_by_code("999").is_none());
        assert!(dataset.find_by_code("").is_none());
    }

    #[test]
    fn empty_dataset_has_no_facets() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.years().is_empty());
        assert!(dataset.counties().is_empty());
        assert!(dataset.districts_for("A").is_empty());
    }
}
