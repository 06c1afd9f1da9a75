use bodycheck_model::assessment::Recommendation;
use itertools::Itertools;

const NOTE: &str = "These are general suggestions. For medical conditions or allergies, consult a healthcare professional.";

/// Minimal escaping for text interpolated into HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Renders a recommendation as the HTML fragment shown under the form.
pub fn render_html(recommendation: &Recommendation) -> String {
    format!(
        r#"<h3>{greeting}</h3>
<p class="muted" style="margin-top:6px">{summary}</p>
<div class="reco">
  <div class="section">
    <strong>Diet suggestions</strong>
    {diet}
  </div>
  <div class="section">
    <strong>Daily health habits</strong>
    {habits}
  </div>
  <div style="margin-top:10px; font-size:13px; color:var(--muted)">
    <em>Note:</em> {note}
  </div>
</div>
"#,
        greeting = escape_html(&recommendation.greeting),
        summary = escape_html(&recommendation.bmi_summary),
        diet = render_list(&recommendation.diet_items, "No diet suggestions available."),
        habits = render_list(&recommendation.habit_items, "No habit suggestions available."),
        note = NOTE,
    )
}

fn render_list(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        format!(r#"<p class="muted">{}</p>"#, placeholder)
    } else {
        format!(
            "<ul>{}</ul>",
            items
                .iter()
                .map(|item| format!("<li>{}</li>", escape_html(item)))
                .join("")
        )
    }
}
