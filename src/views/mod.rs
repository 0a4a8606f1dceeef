// src/views/mod.rs
pub mod product;

use std::fmt;

use axum::response::Html;

/// Every value that did not come from this module goes through here.
pub fn escape(input: &str) -> String {
    Escaped(input).to_string()
}

/// Display wrapper that writes its contents HTML-escaped.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            f.write_str(match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#x27;",
            })?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}

pub fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Inventory</title>
</head>
<body>
<header><a href="/">Inventory</a></header>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = Escaped(title),
    ))
}

pub fn not_found_page(message: &str) -> Html<String> {
    layout(
        "Not found",
        &format!(
            r#"<p>{}</p>
<p><a href="/">Back to the product list</a></p>"#,
            Escaped(message)
        ),
    )
}

pub fn server_error_page() -> Html<String> {
    layout(
        "Server error",
        "<p>Something went wrong while handling the request.</p>",
    )
}
