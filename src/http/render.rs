//! Page rendering.
//!
//! Handlers pass a page name and a JSON context; the renderer returns markup.
//! `HtmlPages` is the built-in renderer and escapes every value it interpolates.

use crate::app::TourDto;
use crate::error::AppError;
use serde_json::Value;

pub trait PageRenderer: Send + Sync {
    fn render(&self, page: &str, context: &Value) -> Result<String, AppError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPages;

impl PageRenderer for HtmlPages {
    fn render(&self, page: &str, context: &Value) -> Result<String, AppError> {
        let title = context
            .get("page_title")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let body = match page {
            "index" => index_body(context)?,
            "details" => details_body(context)?,
            "navigation" => navigation_body(),
            other => return Err(AppError::Internal(format!("unknown page {}", other))),
        };
        Ok(layout(title, &body))
    }
}

fn field<T: serde::de::DeserializeOwned>(context: &Value, key: &str) -> Result<T, AppError> {
    let value = context
        .get(key)
        .cloned()
        .ok_or_else(|| AppError::Internal(format!("page context is missing {}", key)))?;
    serde_json::from_value(value).map_err(|e| AppError::Internal(e.to_string()))
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"utf-8\">
  <title>{title}</title>
  <link rel=\"stylesheet\" href=\"/static/style.css\">
</head>
<body>
  <nav><a href=\"/\">Tours</a> | <a href=\"/navigation/\">How to find us</a></nav>
  <h1>{title}</h1>
{body}
</body>
</html>
",
        title = escape_html(title),
        body = body,
    )
}

fn index_body(context: &Value) -> Result<String, AppError> {
    let tours: Vec<TourDto> = field(context, "tours")?;
    let q = context.get("q").and_then(Value::as_str).unwrap_or_default();

    let mut out = String::new();
    out.push_str(&format!(
        "  <form method=\"post\" action=\"/\"><input type=\"text\" name=\"q\" value=\"{}\"><button type=\"submit\">Search</button></form>\n",
        escape_html(q)
    ));
    if tours.is_empty() {
        out.push_str("  <p>No tours found.</p>\n");
        return Ok(out);
    }
    out.push_str("  <ul class=\"tours\">\n");
    for tour in &tours {
        out.push_str(&format!(
            "    <li><a href=\"/{}\">{}</a> &mdash; {} &mdash; {:.2}</li>\n",
            tour.id,
            escape_html(&tour.title),
            escape_html(&tour.destination),
            tour.price
        ));
    }
    out.push_str("  </ul>\n");
    Ok(out)
}

fn details_body(context: &Value) -> Result<String, AppError> {
    let tour: TourDto = field(context, "tour")?;
    Ok(format!(
        "  <dl class=\"tour\">
    <dt>Destination</dt><dd>{}</dd>
    <dt>Price</dt><dd>{:.2}</dd>
    <dt>Description</dt><dd>{}</dd>
    <dt>Added</dt><dd>{}</dd>
  </dl>
",
        escape_html(&tour.destination),
        tour.price,
        escape_html(&tour.description),
        escape_html(&tour.created_at),
    ))
}

fn navigation_body() -> String {
    "  <p>Visit our office or write to us; we will help you pick a tour.</p>\n".to_string()
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
