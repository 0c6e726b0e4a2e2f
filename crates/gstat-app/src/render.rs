use gstat_types::{PlayerCard, QuotaStatus, SeasonId};

/// What the middle of the page shows for this interaction.
#[derive(Debug)]
pub enum PageContent {
    Empty,
    Card(PlayerCard),
    NotFound {
        query: String,
        seasons: Vec<SeasonId>,
    },
    QuotaBlocked {
        status: QuotaStatus,
    },
    Failure,
}

/// Form values echoed back into the rendered page.
pub struct FormState {
    pub query: String,
    pub seasons: Vec<SeasonId>,
    pub pinned: Option<SeasonId>,
}

const PLACEHOLDER: &str = "—";

const STYLE: &str = r#"
body {
    background: linear-gradient(to right, #f0f4f8, #d9e2ec);
    font-family: 'Segoe UI', 'Arial Hebrew', sans-serif;
    margin: 0;
    padding: 0 16px 40px;
}
.title {
    text-align: center;
    font-size: 2.6em;
    font-weight: bold;
    margin-top: 20px;
    color: #1a202c;
}
.search {
    display: flex;
    gap: 8px;
    justify-content: center;
    margin-top: 28px;
}
.search input[type=text] {
    width: 320px;
    padding: 10px 12px;
    border: 1px solid #cbd5e0;
    border-radius: 10px;
    font-size: 1em;
}
.search select, .search button {
    padding: 10px 14px;
    border-radius: 10px;
    border: 1px solid #cbd5e0;
    background: white;
    font-size: 1em;
}
.search button {
    background: #2f855a;
    color: white;
    border: none;
    cursor: pointer;
}
.box {
    background: white;
    padding: 25px;
    border-radius: 16px;
    box-shadow: 0 4px 14px rgba(0, 0, 0, 0.1);
    margin: 30px auto 0;
    max-width: 520px;
}
.box.warn {
    border-right: 6px solid #d69e2e;
}
.box.error {
    border-right: 6px solid #c53030;
}
.box .source {
    color: gray;
    font-size: 0.85em;
}
.chart {
    display: block;
    margin: 10px auto 0;
}
.footer {
    text-align: center;
    margin-top: 50px;
    color: #555;
    font-size: 0.9em;
}
"#;

/// Render the full page: title, search form, the interaction's content and
/// the remaining-budget footer. Always right-to-left.
pub fn page(content: &PageContent, form: &FormState, status: QuotaStatus) -> String {
    let middle = match content {
        PageContent::Empty => String::new(),
        PageContent::Card(card) => card_html(card),
        PageContent::NotFound { query, seasons } => not_found_html(query, seasons),
        PageContent::QuotaBlocked { status } => quota_blocked_html(*status),
        PageContent::Failure => failure_html(),
    };

    format!(
        r#"<!DOCTYPE html>
<html dir="rtl" lang="he">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>GSTAT</title>
<style>{STYLE}</style>
</head>
<body>
<div class="title">GSTAT ⭐ נתוני כדורגל חכמים</div>
{form}
{middle}
{footer}
</body>
</html>"#,
        form = form_html(form),
        footer = footer_html(status),
    )
}

fn form_html(form: &FormState) -> String {
    let mut options = String::from(r#"<option value="">כל העונות</option>"#);
    for &season in &form.seasons {
        let selected = if form.pinned == Some(season) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{season}"{selected}>{season}</option>"#
        ));
    }

    format!(
        r#"<form class="search" method="get" action="/">
<input type="text" name="q" value="{query}" placeholder="הכנס שם שחקן (בעברית או באנגלית)" autofocus>
<select name="season">{options}</select>
<button type="submit">חיפוש</button>
</form>"#,
        query = escape_html(&form.query),
    )
}

fn card_html(card: &PlayerCard) -> String {
    let chart = match card.goals {
        Some(goals) => goals_chart_svg(card.season, goals),
        None => String::new(),
    };

    format!(
        r#"<div class="box">
<h4>🌟 {name}</h4>
<p><b>קבוצה:</b> {team}</p>
<p><b>עמדה:</b> {position}</p>
<p><b>הופעות:</b> {appearances}</p>
<p><b>שערים:</b> {goals}</p>
<p><b>דירוג:</b> {rating}</p>
{chart}<p class="source">מקור: API-Football | עונה {season}</p>
</div>"#,
        name = escape_html(&card.name),
        team = opt_text(&card.team),
        position = opt_text(&card.position),
        appearances = opt_count(card.appearances),
        goals = opt_count(card.goals),
        rating = opt_text(&card.rating),
        season = card.season,
    )
}

fn not_found_html(query: &str, seasons: &[SeasonId]) -> String {
    let list = seasons
        .iter()
        .map(|season| season.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let message = if seasons.len() == 1 {
        format!("שחקן לא נמצא במאגר לעונת {list}.")
    } else {
        format!("שחקן לא נמצא במאגר לעונות {list}.")
    };
    format!(
        r#"<div class="box warn"><p>🔍 {message}</p><p class="source">חיפוש: {query}</p></div>"#,
        query = escape_html(query),
    )
}

fn quota_blocked_html(status: QuotaStatus) -> String {
    format!(
        r#"<div class="box error"><p>❌ הגבלת בקשות יומית הושגה ({used}/{limit}). החיפוש חסום זמנית.</p></div>"#,
        used = status.used,
        limit = status.limit,
    )
}

fn failure_html() -> String {
    r#"<div class="box error"><p>⚠️ השירות אינו זמין כרגע. נסו שוב מאוחר יותר.</p></div>"#
        .to_string()
}

fn footer_html(status: QuotaStatus) -> String {
    format!(
        r#"<div class="footer">בקשות שנותרו להיום: {remaining} / {limit}</div>"#,
        remaining = status.remaining(),
        limit = status.limit,
    )
}

/// Upper bound of the chart's y axis: at least 10, with two goals of
/// headroom so the bar never touches the top.
pub fn chart_y_max(goals: u32) -> u32 {
    goals.max(10) + 2
}

/// One-bar goals chart, drawn inline so the page needs no scripts.
fn goals_chart_svg(season: SeasonId, goals: u32) -> String {
    let y_max = chart_y_max(goals);

    // plot area inside a 320x240 canvas
    const LEFT: f64 = 46.0;
    const RIGHT: f64 = 306.0;
    const TOP: f64 = 36.0;
    const BOTTOM: f64 = 206.0;

    let scale = (BOTTOM - TOP) / y_max as f64;
    let bar_height = goals as f64 * scale;
    let bar_top = BOTTOM - bar_height;
    let bar_left = (LEFT + RIGHT) / 2.0 - 30.0;
    let center = (LEFT + RIGHT) / 2.0;

    let mut ticks = String::new();
    for value in [0, y_max / 2, y_max] {
        let y = BOTTOM - value as f64 * scale;
        ticks.push_str(&format!(
            r##"<line x1="{LEFT}" y1="{y:.0}" x2="{RIGHT}" y2="{y:.0}" stroke="#e2e8f0"/><text x="{x:.0}" y="{ty:.0}" text-anchor="end" font-size="11" fill="#555">{value}</text>"##,
            x = LEFT - 6.0,
            ty = y + 4.0,
        ));
    }

    format!(
        r##"<svg class="chart" width="320" height="240" viewBox="0 0 320 240" xmlns="http://www.w3.org/2000/svg">
<text x="{center:.0}" y="20" text-anchor="middle" font-size="14" font-weight="bold">⚽ שערים בעונה</text>
{ticks}
<line x1="{LEFT}" y1="{TOP}" x2="{LEFT}" y2="{BOTTOM}" stroke="#555"/>
<line x1="{LEFT}" y1="{BOTTOM}" x2="{RIGHT}" y2="{BOTTOM}" stroke="#555"/>
<rect x="{bar_left:.0}" y="{bar_top:.0}" width="60" height="{bar_height:.0}" fill="seagreen"/>
<text x="{center:.0}" y="{label_y:.0}" text-anchor="middle" font-size="12" fill="#1a202c">{goals}</text>
<text x="{center:.0}" y="226" text-anchor="middle" font-size="12" fill="#555">{season}</text>
</svg>
"##,
        label_y = bar_top - 6.0,
    )
}

fn opt_text(value: &Option<String>) -> String {
    match value {
        Some(text) => escape_html(text),
        None => PLACEHOLDER.to_string(),
    }
}

fn opt_count(value: Option<u32>) -> String {
    match value {
        Some(count) => count.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
