use super::escape::html_escape;
use core_types::School;

/// Renders the full record of one school, with derived student and graduate totals.
pub fn render_detail_page(school: &School) -> String {
    let male = school.male_students();
    let female = school.female_students();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{name}</title></head>
<body style="font-family:sans-serif; padding:40px; background:#f4f7f6;">
    <div style="max-width:600px; margin:auto; background:white; padding:30px; border-radius:15px; box-shadow:0 5px 15px rgba(0,0,0,0.1);">
        <h2 style="color:#007bff; border-bottom:2px solid #007bff; padding-bottom:10px;">{name}</h2>
        <div style="line-height:2;">
            <p><b>學年度：</b>{year}</p>
            <p><b>縣市鄉鎮：</b>{county} {district}</p>
            <p><b>地址：</b>{address}</p>
            <p><b>電話：</b>{phone}</p>
            <hr>
            <p><b>在校總人數：</b>{total} 人 (男:{male} / 女:{female})</p>
            <p style="color: #d9534f; font-weight: bold;">🎓 上學年畢業人數：</p>
            <ul>
                <li>男畢業生：{grad_male} 人</li>
                <li>女畢業生：{grad_female} 人</li>
                <li>畢業生合計：{grad_total} 人</li>
            </ul>
            <hr>
            <p><b>地區屬性：</b>{region}</p>
            <p><b>原住民比率：</b>{ratio}%</p>
        </div>
        <br><a href="javascript:history.back()" style="color:#007bff; text-decoration:none; font-weight:bold;">← 返回搜尋</a>
    </div>
</body>
</html>"#,
        name = html_escape(&school.name),
        year = html_escape(&school.year),
        county = html_escape(&school.county),
        district = html_escape(&school.district),
        address = html_escape(&school.address),
        phone = html_escape(&school.phone),
        total = male.saturating_add(female),
        male = male,
        female = female,
        grad_male = html_escape(&school.grad_male),
        grad_female = html_escape(&school.grad_female),
        grad_total = school.graduate_total(),
        region = html_escape(&school.region_type),
        ratio = html_escape(&school.indig_ratio),
    )
}

/// Body of the 404 response for an unknown school code.
pub fn render_not_found_page(code: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>查無資料</title></head>
<body style="font-family:sans-serif; padding:40px; background:#f4f7f6;">
    <p>查無學校代碼 {code} 的資料。</p>
    <a href="/">← 返回搜尋</a>
</body>
</html>"#,
        code = html_escape(code),
    )
}
