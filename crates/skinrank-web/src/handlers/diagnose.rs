//! Symptom form page — comma-separated symptoms in, ranked condition cards out.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use crate::state::SharedState;
use skinrank_ranker::{rank, ScoredResult, SymptomQuery};

pub const PROMPT_TEXT: &str = "Enter symptoms above and press Analyze.";

#[derive(Debug, Default, Deserialize)]
pub struct DiagnoseForm {
    #[serde(default)]
    pub symptoms: String,
}

/// GET / — Empty form with the prompt
pub async fn diagnose_page() -> Html<String> {
    Html(render_page("", None))
}

/// POST /diagnose — Rank the submitted symptoms, or prompt again when blank
pub async fn diagnose_submit(
    State(state): State<SharedState>,
    Form(form): Form<DiagnoseForm>,
) -> Html<String> {
    if SymptomQuery::is_blank(&form.symptoms) {
        return Html(render_page("", None));
    }

    let query = SymptomQuery::parse(&form.symptoms);
    let results = rank(&query, &state.table);
    tracing::info!(symptoms = query.len(), "diagnosis requested");

    Html(render_page(&form.symptoms, Some(results.as_slice())))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_card(result: &ScoredResult<'_>) -> String {
    format!(r#"
        <div class="result-card">
            <div class="condition-title">{}</div>
            <div class="score">Probability Score: {}%</div>
            <p><em>Matched Symptoms:</em> {}</p>
            <p><em>Disease Symptoms:</em> {}</p>
            <p><em>Recommended Next Steps:</em> {}</p>
        </div>"#,
        escape_html(result.name()),
        result.percent(),
        result.match_count,
        escape_html(&result.entry.symptoms.join(", ")),
        escape_html(&result.entry.next_steps))
}

fn render_page(input: &str, results: Option<&[ScoredResult<'_>]>) -> String {
    let results_html = match results {
        None => format!(r#"<div class="info">{}</div>"#, PROMPT_TEXT),
        Some(results) => {
            let cards: String = results.iter().map(render_card).collect();
            format!(r#"
        <h2>Most Likely Conditions</h2>
        <h3>(Based on symptom match + severity weighting)</h3>
        {}"#, cards)
        }
    };

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Skin Condition Assistant</title>
    <style>
        body {{ background-color: #f7f7f7; font-family: sans-serif; max-width: 720px; margin: 0 auto; }}
        .title {{ text-align: center; font-size: 40px; font-weight: 700; margin-bottom: 20px; }}
        .card, .result-card {{ background: white; padding: 20px; border-radius: 16px; margin-bottom: 16px; border: 1px solid #eee; }}
        .condition-title {{ font-size: 22px; font-weight: 700; color: #333; }}
        .score {{ font-size: 16px; color: #4CAF50; font-weight: 600; }}
        .info {{ background: #e8f0fe; padding: 12px; border-radius: 8px; }}
    </style>
</head>
<body>
    <div class="title">Skin Condition Assistant</div>
    <div class="card">
        <h3>Describe your symptoms</h3>
        <form method="post" action="/diagnose">
            <label for="symptoms">Enter symptoms separated by commas:</label>
            <textarea id="symptoms" name="symptoms" rows="3" style="width:100%"
                placeholder="redness, itching, flaking...">{}</textarea>
            <button type="submit">Analyze Condition</button>
        </form>
    </div>
    {}
</body>
</html>"#, escape_html(input), results_html)
}
