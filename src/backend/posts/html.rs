//! HTML rendering for the public post listing.
//!
//! Every user-supplied field is escaped; stored markup is shown as text.

use crate::shared::Post;

/// Content-Security-Policy sent with the listing page.
pub const POSTS_CSP: &str =
    "default-src 'self'; script-src 'none'; object-src 'none'; frame-ancestors 'none';";

/// Render the full listing page.
pub fn render_posts(posts: &[Post]) -> String {
    let body = if posts.is_empty() {
        "  <p>No posts</p>\n".to_string()
    } else {
        posts
            .iter()
            .map(|post| {
                format!(
                    "  <div><b>{title}</b> &mdash; {author}<br/>{content}</div>\n",
                    title = html_escape(&post.title),
                    author = html_escape(&post.author),
                    content = html_escape(&post.content),
                )
            })
            .collect()
    };

    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Posts</title></head>
<body>
<h1>Posts</h1>
{body}</body>
</html>
"#
    )
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
