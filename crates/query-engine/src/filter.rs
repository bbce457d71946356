use crate::params::{QueryParams, non_empty};
use core_types::{School, parse_int_or_zero};

/// The conjunction of all active predicates of a query.
#[derive(Debug, Clone, Default)]
pub struct Filter<'p> {
    year: Option<&'p str>,
    county: Option<&'p str>,
    district: Option<&'p str>,
    keyword: Option<&'p str>,
    min_students: Option<i64>,
    max_students: Option<i64>,
}

impl<'p> Filter<'p> {
    /// A numeric bound is active whenever its text is non-empty. Text that
    /// does not parse becomes a bound of 0, which still applies.
    pub fn from_params(params: &'p QueryParams) -> Self {
        Self {
            year: params.year(),
            county: params.county(),
            district: params.district(),
            keyword: params.keyword(),
            min_students: non_empty(&params.min_students).map(parse_int_or_zero),
            max_students: non_empty(&params.max_students).map(parse_int_or_zero),
        }
    }

    pub fn matches(&self, school: &School) -> bool {
        if self.year.is_some_and(|y| school.year != y) {
            return false;
        }
        if self.county.is_some_and(|c| school.county != c) {
            return false;
        }
        if self.district.is_some_and(|d| school.district != d) {
            return false;
        }
        if self.keyword.is_some_and(|k| !school.name.contains(k)) {
            return false;
        }
        if self.min_students.is_none() && self.max_students.is_none() {
            return true;
        }

        let total = school.student_total();
        self.min_students.is_none_or(|min| total >= min)
            && self.max_students.is_none_or(|max| total <= max)
    }
}
