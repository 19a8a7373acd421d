//! HTML rendering for the digest email.
//!
//! The digest is a self-contained HTML document: a heading, a
//! `{Title, Date, Link}` table, and a footer line with the extraction
//! timestamp. An empty article list still renders the table header row;
//! whether to deliver it is the caller's decision.

use chrono::{DateTime, Local};

use crate::models::{Article, DATE_FORMAT, DATETIME_FORMAT};

/// Display name of the scraped source, used in the heading and subject.
pub const SOURCE_NAME: &str = "Adrenaline";

/// Anchor text for every article link in the table.
pub const READ_MORE_LABEL: &str = "Read more";

/// Subject line for a digest generated at `now`.
pub fn subject(now: DateTime<Local>) -> String {
    format!(
        "Latest Game News - {} - {}",
        SOURCE_NAME,
        now.format(DATE_FORMAT)
    )
}

/// Render the digest body for `articles`.
///
/// Titles and dates are HTML-escaped; each link appears verbatim as the
/// `href` of an anchor labeled [`READ_MORE_LABEL`].
pub fn render(articles: &[Article], generated_at: DateTime<Local>) -> String {
    let mut rows = String::new();
    for article in articles {
        rows.push_str(&format!(
            r#"
            <tr>
                <td style="padding: 8px;">{title}</td>
                <td style="padding: 8px;">{date}</td>
                <td style="padding: 8px;"><a href="{link}">{label}</a></td>
            </tr>"#,
            title = escape_html(&article.title),
            date = escape_html(&article.date),
            link = escape_html(&article.link),
            label = READ_MORE_LABEL,
        ));
    }

    format!(
        r#"<html>
    <head>
        <style>
            table {{ border-collapse: collapse; width: 100%; }}
            th, td {{ border: 1px solid black; padding: 8px; text-align: left; }}
            th {{ background-color: #f2f2f2; }}
            a {{ color: #0066cc; text-decoration: none; }}
            a:hover {{ text-decoration: underline; }}
        </style>
    </head>
    <body>
        <h2>Latest Game News - {source}</h2>
        <table border="1" style="border-collapse: collapse; width: 100%;">
            <tr style="background-color: #f2f2f2;">
                <th style="padding: 8px; text-align: left;">Title</th>
                <th style="padding: 8px; text-align: left;">Date</th>
                <th style="padding: 8px; text-align: left;">Link</th>
            </tr>{rows}
        </table>
        <p>Extracted at: {timestamp}</p>
    </body>
</html>"#,
        source = SOURCE_NAME,
        rows = rows,
        timestamp = generated_at.format(DATETIME_FORMAT),
    )
}

/// Minimal HTML escaping for text and attribute values.
fn escape_html(raw: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(title: &str, link: &str, date: &str) -> Article {
        Article {
            title: title.to_string(),
            link: link.to_string(),
            date: date.to_string(),
        }
    }

    fn generated_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_subject_carries_source_and_date() {
        assert_eq!(
            subject(generated_at()),
            "Latest Game News - Adrenaline - 05/08/2026"
        );
    }

    #[test]
    fn test_empty_list_renders_header_row_only() {
        let html = render(&[], generated_at());
        assert_eq!(html.matches("<tr").count(), 1);
        assert!(html.contains("<th style=\"padding: 8px; text-align: left;\">Title</th>"));
        assert!(html.contains("Extracted at: 05/08/2026 12:00:00"));
    }

    #[test]
    fn test_each_field_appears_in_the_output() {
        let articles = vec![
            article("GPU prices drop", "/games/gpu-prices/", "04/08/2026"),
            article("Patch notes", "https://example.com/patch", "05/08/2026"),
        ];
        let html = render(&articles, generated_at());

        // one header row plus one row per article
        assert_eq!(html.matches("<tr").count(), 3);
        assert!(html.contains("GPU prices drop"));
        assert!(html.contains("04/08/2026"));
        assert!(html.contains("<a href=\"/games/gpu-prices/\">Read more</a>"));
        assert!(html.contains("<a href=\"https://example.com/patch\">Read more</a>"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let articles = vec![article(
            "Review: <em>SoulsLike</em> & friends",
            "/games/souls/",
            "05/08/2026",
        )];
        let html = render(&articles, generated_at());

        assert!(html.contains("Review: &lt;em&gt;SoulsLike&lt;/em&gt; &amp; friends"));
        assert!(!html.contains("<em>SoulsLike</em>"));
    }

    #[test]
    fn test_escape_html_covers_attribute_context() {
        assert_eq!(
            escape_html(r#"a"b'c<d>e&f"#),
            "a&quot;b&#39;c&lt;d&gt;e&amp;f"
        );
    }
}
