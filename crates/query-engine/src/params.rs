/// Sort key used when the request does not name one.
pub const DEFAULT_SORT: &str = "year";
/// Sort direction used when the request does not name one.
pub const DEFAULT_ORDER: &str = "desc";

/// The optional filter and sort inputs of a list query.
///
/// Absent and empty values both mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub year: Option<String>,
    pub county: Option<String>,
    pub district: Option<String>,
    pub keyword: Option<String>,
    pub min_students: Option<String>,
    pub max_students: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// The single key a result set is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Year,
    County,
    Students,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortKey {
    /// Returns `None` for tokens that are not a known key. Such requests are
    /// left in filter order rather than falling back to the default key.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "year" => Some(SortKey::Year),
            "county" => Some(SortKey::County),
            "students" => Some(SortKey::Students),
            _ => None,
        }
    }
}

impl SortOrder {
    /// Anything other than `asc` sorts descending.
    pub fn parse(token: &str) -> Self {
        if token == "asc" {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }
}

/// Treats `None` and `Some("")` alike.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl QueryParams {
    /// Builds parameters from decoded query-string pairs.
    ///
    /// Keys follow the list page's form (`minS`, `maxS` for the bounds).
    /// A repeated key keeps its last value; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = QueryParams::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "year" => &mut params.year,
                "county" => &mut params.county,
                "district" => &mut params.district,
                "keyword" => &mut params.keyword,
                "minS" => &mut params.min_students,
                "maxS" => &mut params.max_students,
                "sort" => &mut params.sort,
                "order" => &mut params.order,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        params
    }

    pub fn year(&self) -> Option<&str> {
        non_empty(&self.year)
    }

    pub fn county(&self) -> Option<&str> {
        non_empty(&self.county)
    }

    pub fn district(&self) -> Option<&str> {
        non_empty(&self.district)
    }

    pub fn keyword(&self) -> Option<&str> {
        non_empty(&self.keyword)
    }

    /// The raw sort token, defaulted. May be an unknown key.
    pub fn sort_token(&self) -> &str {
        non_empty(&self.sort).unwrap_or(DEFAULT_SORT)
    }

    /// The raw order token, defaulted.
    pub fn order_token(&self) -> &str {
        non_empty(&self.order).unwrap_or(DEFAULT_ORDER)
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        SortKey::parse(self.sort_token())
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::parse(self.order_token())
    }

    /// `"{sort}_{order}"`, the value of the matching sort-menu entry.
    pub fn sort_selection(&self) -> String {
        format!("{}_{}", self.sort_token(), self.order_token())
    }
}
