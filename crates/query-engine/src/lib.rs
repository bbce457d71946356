use configuration::QuerySettings;
use core_types::School;
use dataset::Dataset;
use std::cmp::Ordering;

pub mod filter;
pub mod params;

pub use filter::Filter;
pub use params::{QueryParams, SortKey, SortOrder};

/// Everything the list page needs for one request.
#[derive(Debug, Clone)]
pub struct QueryOutcome<'a> {
    /// Matching schools in final order, capped to the display limit.
    pub schools: Vec<&'a School>,
    /// Number of matches before the cap.
    pub total_matches: usize,
    pub years: &'a [String],
    pub counties: &'a [String],
    /// Districts of the selected county, or empty when none is selected.
    pub districts: Vec<String>,
    /// `"{sort}_{order}"` of the active sort, for marking the sort menu.
    pub sort_selection: String,
}

/// The list-page query pipeline: filter, sort, cap, and derive facets.
pub struct QueryEngine {
    config: QuerySettings,
}

impl QueryEngine {
    pub fn new(config: QuerySettings) -> Self {
        Self { config }
    }

    /// Runs a list query against the dataset. Never fails: malformed input
    /// degrades instead of being rejected.
    pub fn run<'a>(&self, dataset: &'a Dataset, params: &QueryParams) -> QueryOutcome<'a> {
        // 1. Filter
        let mut matches = filter_schools(dataset.schools(), params);

        // 2. Sort (unknown keys keep filter order)
        if let Some(key) = params.sort_key() {
            sort_schools(&mut matches, key, params.sort_order());
        }

        // 3. Cap
        let total_matches = matches.len();
        matches.truncate(self.config.display_limit);

        tracing::debug!(
            total_matches,
            shown = matches.len(),
            sort = params.sort_token(),
            order = params.order_token(),
            "List query evaluated."
        );

        QueryOutcome {
            schools: matches,
            total_matches,
            years: dataset.years(),
            counties: dataset.counties(),
            districts: params
                .county()
                .map(|c| dataset.districts_for(c))
                .unwrap_or_default(),
            sort_selection: params.sort_selection(),
        }
    }
}

/// Applies every active predicate of `params`, keeping collection order.
pub fn filter_schools<'a>(schools: &'a [School], params: &QueryParams) -> Vec<&'a School> {
    let filter = Filter::from_params(params);
    schools.iter().filter(|s| filter.matches(s)).collect()
}

/// Stable single-key sort. Equal keys keep their relative order in both directions.
pub fn sort_schools(schools: &mut [&School], key: SortKey, order: SortOrder) {
    schools.sort_by(|a, b| {
        let ordering = compare_by(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_by(a: &School, b: &School, key: SortKey) -> Ordering {
    match key {
        SortKey::Year => a.year.cmp(&b.year),
        SortKey::County => a.county.cmp(&b.county),
        SortKey::Students => a.student_total().cmp(&b.student_total()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(code: &str, year: &str, county: &str, district: &str, male: &str, female: &str) -> School {
        School {
            code: code.to_string(),
            year: year.to_string(),
            county: county.to_string(),
            district: district.to_string(),
            name: format!("School {code}"),
            male_count: male.to_string(),
            female_count: female.to_string(),
            ..Default::default()
        }
    }

    fn engine() -> QueryEngine {
        QueryEngine::new(QuerySettings { display_limit: 100 })
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            school("s1", "111", "B", "b1", "10", "12"),
            school("s2", "112", "A", "a2", "3", "2"),
            school("s3", "110", "A", "a1", "40", "1"),
            school("s4", "112", "C", "c1", "x", "7"),
            school("s5", "111", "A", "a1", "0", "0"),
            school("s6", "112", "B", "b2", "15", ""),
        ])
    }

    fn codes(outcome: &QueryOutcome<'_>) -> Vec<String> {
        outcome.schools.iter().map(|s| s.code.clone()).collect()
    }

    fn with(f: impl FnOnce(&mut QueryParams)) -> QueryParams {
        let mut params = QueryParams::default();
        f(&mut params);
        params
    }

    #[test]
    fn min_students_example() {
        let dataset = Dataset::new(vec![
            school("first", "112", "A", "", "3", "2"),
            school("second", "111", "B", "", "1", "1"),
        ]);
        let params = with(|p| p.min_students = Some("3".to_string()));
        let outcome = engine().run(&dataset, &params);
        assert_eq!(codes(&outcome), vec!["first"]);
        assert_eq!(outcome.total_matches, 1);
    }

    #[test]
    fn unparsable_min_bound_lets_everything_through() {
        let dataset = sample();
        let params = with(|p| p.min_students = Some("abc".to_string()));
        let outcome = engine().run(&dataset, &params);
        assert_eq!(outcome.total_matches, dataset.len());
    }

    #[test]
    fn default_sort_is_year_descending_and_stable() {
        let dataset = sample();
        let outcome = engine().run(&dataset, &QueryParams::default());
        assert_eq!(codes(&outcome), vec!["s2", "s4", "s6", "s1", "s5", "s3"]);
        assert_eq!(outcome.sort_selection, "year_desc");
    }

    #[test]
    fn county_ascending() {
        let dataset = sample();
        let params = with(|p| {
            p.sort = Some("county".to_string());
            p.order = Some("asc".to_string());
        });
        let outcome = engine().run(&dataset, &params);
        assert_eq!(codes(&outcome), vec!["s2", "s3", "s5", "s1", "s6", "s4"]);
    }

    #[test]
    fn students_sort_parses_defensively() {
        let dataset = sample();
        let params = with(|p| {
            p.sort = Some("students".to_string());
            p.order = Some("asc".to_string());
        });
        let outcome = engine().run(&dataset, &params);
        // totals: s1=22 s2=5 s3=41 s4=7 s5=0 s6=15
        assert_eq!(codes(&outcome), vec!["s5", "s2", "s4", "s6", "s1", "s3"]);
    }

    #[test]
    fn students_ascending_reversed_is_descending() {
        let dataset = sample();
        let asc = with(|p| {
            p.sort = Some("students".to_string());
            p.order = Some("asc".to_string());
        });
        let desc = with(|p| p.sort = Some("students".to_string()));

        let mut ascending = codes(&engine().run(&dataset, &asc));
        ascending.reverse();
        assert_eq!(ascending, codes(&engine().run(&dataset, &desc)));
    }

    #[test]
    fn unknown_sort_keeps_filter_order() {
        let dataset = sample();
        let params = with(|p| {
            p.sort = Some("name".to_string());
            p.county = Some("A".to_string());
        });
        let outcome = engine().run(&dataset, &params);
        let expected: Vec<String> = filter_schools(dataset.schools(), &params)
            .iter()
            .map(|s| s.code.clone())
            .collect();
        assert_eq!(codes(&outcome), expected);
        assert_eq!(codes(&outcome), vec!["s2", "s3", "s5"]);
        assert_eq!(outcome.sort_selection, "name_desc");
    }

    #[test]
    fn filters_are_conjunctive_and_idempotent() {
        let dataset = sample();
        let params = with(|p| {
            p.county = Some("A".to_string());
            p.year = Some("111".to_string());
            p.max_students = Some("10".to_string());
        });
        let first = engine().run(&dataset, &params);
        for s in &first.schools {
            assert_eq!(s.county, "A");
            assert_eq!(s.year, "111");
            assert!(s.student_total() <= 10);
        }
        assert_eq!(codes(&first), vec!["s5"]);

        let second = engine().run(&dataset, &params);
        assert_eq!(codes(&first), codes(&second));
    }

    #[test]
    fn district_facet_ignores_other_filters() {
        let dataset = sample();
        let params = with(|p| {
            p.county = Some("A".to_string());
            p.year = Some("112".to_string());
            p.keyword = Some("nothing matches this".to_string());
        });
        let outcome = engine().run(&dataset, &params);
        assert!(outcome.schools.is_empty());
        assert_eq!(outcome.districts, vec!["a1", "a2"]);
    }

    #[test]
    fn district_facet_empty_without_county() {
        let dataset = sample();
        let outcome = engine().run(&dataset, &QueryParams::default());
        assert!(outcome.districts.is_empty());
        assert_eq!(outcome.years, ["112", "111", "110"]);
        assert_eq!(outcome.counties, ["A", "B", "C"]);
    }

    #[test]
    fn results_are_capped_but_count_is_not() {
        let schools = (0..130)
            .map(|i| school(&format!("c{i}"), "112", "A", "a1", "1", "1"))
            .collect();
        let dataset = Dataset::new(schools);
        let outcome = engine().run(&dataset, &QueryParams::default());
        assert_eq!(outcome.schools.len(), 100);
        assert_eq!(outcome.total_matches, 130);

        let small = QueryEngine::new(QuerySettings { display_limit: 3 });
        assert_eq!(small.run(&dataset, &QueryParams::default()).schools.len(), 3);
    }

    #[test]
    fn empty_dataset_yields_empty_outcome() {
        let dataset = Dataset::default();
        let outcome = engine().run(&dataset, &QueryParams::default());
        assert!(outcome.schools.is_empty());
        assert_eq!(outcome.total_matches, 0);
    }
}
