//! Server-rendered HTML pages.
//!
//! Every value that comes from SUAP or from the request goes through [`escape`] before it is
//! written into markup.

pub(crate) mod error;
pub(crate) mod home;
pub(crate) mod report_card;

const STYLES: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    margin: 0;
    background: #f4f6f5;
    color: #1f2d27;
}
header {
    background: #2f9e41;
    color: #fff;
    padding: 0.75rem 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
header a { color: #fff; }
main { max-width: 960px; margin: 1.5rem auto; padding: 0 1rem; }
.card { background: #fff; border-radius: 8px; padding: 1.25rem; margin-bottom: 1rem; }
.profile { display: flex; gap: 1rem; align-items: center; }
.profile img { border-radius: 6px; }
.btn { display: inline-block; background: #2f9e41; color: #fff; padding: 0.5rem 1rem;
       border-radius: 6px; border: 0; text-decoration: none; cursor: pointer; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 0.5rem; border-bottom: 1px solid #dfe5e2; text-align: left; }
td.num, th.num { text-align: right; }
.error { border-left: 4px solid #c0392b; }
"#;

/// Wraps `content` in the shared page layout.
pub(crate) fn page(title: &str, authenticated: bool, content: &str) -> String {
    let nav = if authenticated {
        r#"<nav><a href="/">Início</a> · <a href="/boletim/">Boletim</a> · <a href="/logout">Sair</a></nav>"#
    } else {
        r#"<nav><a href="/login">Entrar com o SUAP</a></nav>"#
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Portal SUAP</title>
    <style>{STYLES}</style>
</head>
<body>
<header><strong>Portal SUAP</strong>{nav}</header>
<main>
{content}
</main>
</body>
</html>"#,
        title = escape(title),
    )
}

/// Simple HTML escaping to prevent XSS.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escaped optional text, or a dash.
pub(crate) fn text(value: Option<&str>) -> String {
    value.map(escape).unwrap_or_else(|| "-".to_string())
}

/// Grade or workload as shown in tables: integers without decimals, a dash when missing.
pub(crate) fn number(value: Option<f64>) -> String {
    match value {
        Some(n) if n.fract() == 0.0 => format!("{n:.0}"),
        Some(n) => format!("{n:.1}"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_number() {
        assert_eq!(number(Some(85.0)), "85");
        assert_eq!(number(Some(72.5)), "72.5");
        assert_eq!(number(None), "-");
    }

    #[test]
    fn test_page_escapes_title_and_shows_nav() {
        let html = page("<b>", false, "");
        assert!(html.contains("&lt;b&gt; - Portal SUAP"));
        assert!(html.contains(r#"href="/login""#));
        assert!(!html.contains(r#"href="/logout""#));
    }
}
