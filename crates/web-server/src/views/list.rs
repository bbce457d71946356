use super::escape::{details_href, html_escape};
use query_engine::{QueryOutcome, QueryParams};
use std::fmt::Write;

/// Sort-menu entries as `(value, label)`. The value is `"{sort}_{order}"`.
pub const SORT_OPTIONS: [(&str, &str); 6] = [
    ("year_desc", "學年度 (大→小)"),
    ("year_asc", "學年度 (小→大)"),
    ("county_asc", "縣市 (A→Z)"),
    ("county_desc", "縣市 (Z→A)"),
    ("students_desc", "總人數 (多→少)"),
    ("students_asc", "總人數 (少→多)"),
];

const STYLE: &str = r#"
    body { font-family: 'Microsoft JhengHei', sans-serif; padding: 20px; background: #f4f7f6; }
    .container { max-width: 1100px; margin: auto; background: white; padding: 30px; border-radius: 15px; box-shadow: 0 4px 15px rgba(0,0,0,0.1); }
    .filter-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 15px; background: #f8f9fa; padding: 20px; border-radius: 10px; margin-bottom: 20px; border: 1px solid #eee; }
    .field { display: flex; flex-direction: column; gap: 5px; }
    label { font-weight: bold; font-size: 0.85em; color: #555; }
    select, input { padding: 8px; border-radius: 5px; border: 1px solid #ccc; }
    .btn-group { grid-column: span 4; display: flex; gap: 10px; }
    .btn-search { flex: 3; padding: 10px; background: #007bff; color: white; border: none; border-radius: 5px; cursor: pointer; font-weight: bold; }
    .btn-reset { flex: 1; padding: 10px; background: #6c757d; color: white; text-decoration: none; border-radius: 5px; text-align: center; }
    table { width: 100%; border-collapse: collapse; margin-top: 20px; }
    th { background: #007bff; color: white; padding: 12px; text-align: left; }
    td { padding: 12px; border-bottom: 1px solid #eee; }
    tr:hover { background: #f9f9f9; }
"#;

// Selects resubmit the form on change; the sort menu writes its two halves
// into the hidden sort/order inputs first.
const SCRIPT: &str = r#"
    function autoSubmit() { document.getElementById('searchForm').submit(); }
    function handleSort(val) {
        const [s, o] = val.split('_');
        document.getElementsByName('sort')[0].value = s;
        document.getElementsByName('order')[0].value = o;
        autoSubmit();
    }
"#;

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        html_escape(value),
        if selected { " selected" } else { "" },
        html_escape(label)
    )
}

fn year_options(years: &[String], selected: Option<&str>) -> String {
    years
        .iter()
        .map(|y| option(y, &format!("{y}年度"), selected == Some(y.as_str())))
        .collect()
}

fn plain_options(values: &[String], selected: Option<&str>) -> String {
    values
        .iter()
        .map(|v| option(v, v, selected == Some(v.as_str())))
        .collect()
}

fn sort_options(selection: &str) -> String {
    SORT_OPTIONS
        .iter()
        .map(|(value, label)| option(value, label, *value == selection))
        .collect()
}

fn result_rows(outcome: &QueryOutcome<'_>) -> String {
    let mut rows = String::new();
    for s in &outcome.schools {
        let _ = write!(
            rows,
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}人</td><td><a href="{}">詳細</a></td></tr>"#,
            html_escape(&s.year),
            html_escape(&s.county),
            html_escape(&s.district),
            html_escape(&s.name),
            s.student_total(),
            html_escape(&details_href(&s.code)),
        );
    }
    rows
}

fn echo(value: &Option<String>) -> String {
    html_escape(value.as_deref().unwrap_or(""))
}

/// Renders the filter form and the result table.
pub fn render_list_page(outcome: &QueryOutcome<'_>, params: &QueryParams) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>進階查詢系統</title>
<style>{style}</style>
<script>{script}</script>
</head>
<body>
    <div class="container">
        <h1>🏫 偏遠地區學校資料庫</h1>
        <form id="searchForm" method="get">
            <input type="hidden" name="sort" value="{sort}">
            <input type="hidden" name="order" value="{order}">
            <div class="filter-grid">
                <div class="field"><label>學年度</label><select name="year" onchange="autoSubmit()"><option value="">-- 全部 --</option>{years}</select></div>
                <div class="field"><label>縣市</label><select name="county" onchange="autoSubmit()"><option value="">-- 全部 --</option>{counties}</select></div>
                <div class="field"><label>鄉鎮區</label><select name="district" onchange="autoSubmit()"><option value="">-- 全部鄉鎮 --</option>{districts}</select></div>
                <div class="field"><label>排序方式</label><select onchange="handleSort(this.value)">{sort_menu}</select></div>
                <div class="field"><label>校名關鍵字</label><input type="text" name="keyword" value="{keyword}"></div>
                <div class="field"><label>最小人數</label><input type="number" name="minS" value="{min_s}"></div>
                <div class="field"><label>最大人數</label><input type="number" name="maxS" value="{max_s}"></div>
                <div class="btn-group">
                    <button type="submit" class="btn-search">搜尋資料</button>
                    <a href="/" class="btn-reset">清除重置</a>
                </div>
            </div>
        </form>
        <p>找到 {count} 筆資料</p>
        <table>
            <thead><tr><th>年度</th><th>縣市</th><th>鄉鎮</th><th>校名</th><th>總人數</th><th></th></tr></thead>
            <tbody>{rows}</tbody>
        </table>
    </div>
</body>
</html>"#,
        style = STYLE,
        script = SCRIPT,
        sort = html_escape(params.sort_token()),
        order = html_escape(params.order_token()),
        years = year_options(outcome.years, params.year()),
        counties = plain_options(outcome.counties, params.county()),
        districts = plain_options(&outcome.districts, params.district()),
        sort_menu = sort_options(&outcome.sort_selection),
        keyword = echo(&params.keyword),
        min_s = echo(&params.min_students),
        max_s = echo(&params.max_students),
        count = outcome.total_matches,
        rows = result_rows(outcome),
    )
}
