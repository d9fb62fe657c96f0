//! Route handlers: list pages and their JSON counterpart.
//!
//! The sort direction flows one way: the URL carries `sortOrder`, the
//! handler resolves it, the rendered page links back to the opposite
//! direction. No session, no cookie, no state — the URL is the state.

use http::StatusCode;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{self, List};
use crate::request::Request;
use crate::response::Response;
use crate::sort::{SORT_ORDER_KEY, SortOrder};

/// `GET /` — index of every list in the catalog.
pub async fn index(_req: Request) -> Response {
    let mut html = String::from(
        "<!doctype html>\n<html>\n<head><title>lyst</title></head>\n<body>\n<h1>Lists</h1>\n<ul>\n",
    );
    for list in catalog::all() {
        html.push_str(&format!(
            "<li><a href=\"/lists/{}\">{}</a></li>\n",
            list.slug,
            escape(list.title)
        ));
    }
    html.push_str("</ul>\n</body>\n</html>\n");
    Response::html(html)
}

/// `GET /lists/{slug}` — the list page, items sorted per `?sortOrder`.
pub async fn list_page(req: Request) -> Response {
    let slug = req.param("slug").unwrap_or_default();
    let Some(list) = catalog::find(slug) else {
        return Response::status(StatusCode::NOT_FOUND);
    };

    let order = SortOrder::resolve(req.query());
    debug!(slug, order = order.token(), "rendering list page");
    Response::html(render_list(list, req.path(), order))
}

/// `GET /api/lists/{slug}` — the same lookup as JSON.
pub async fn list_json(req: Request) -> Response {
    let slug = req.param("slug").unwrap_or_default();
    let Some(list) = catalog::find(slug) else {
        return Response::builder()
            .status(StatusCode::NOT_FOUND)
            .json(br#"{"error":"unknown list"}"#.to_vec());
    };

    let order = SortOrder::resolve(req.query());
    let mut items: Vec<&str> = list.items.to_vec();
    order.sort(&mut items);

    #[derive(Serialize)]
    struct Body<'a> {
        slug: &'a str,
        title: &'a str,
        #[serde(rename = "sortOrder")]
        sort_order: &'a str,
        items: Vec<&'a str>,
    }

    let body = Body {
        slug: list.slug,
        title: list.title,
        sort_order: order.token(),
        items,
    };
    match serde_json::to_vec(&body) {
        Ok(bytes) => Response::json(bytes),
        Err(_) => Response::status(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

fn render_list(list: &List, path: &str, order: SortOrder) -> String {
    let mut items: Vec<&str> = list.items.to_vec();
    order.sort(&mut items);

    let toggle = order.toggled();
    let toggle_label = match toggle {
        SortOrder::Ascending => "Sort ascending",
        SortOrder::Descending => "Sort descending",
    };

    let mut html = format!(
        "<!doctype html>\n<html>\n<head><title>{title}</title></head>\n<body>\n\
         <h1>{title}</h1>\n\
         <p><a href=\"{href}\">{toggle_label}</a></p>\n<ul>\n",
        title = escape(list.title),
        href = sort_href(path, toggle),
    );
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", escape(item)));
    }
    html.push_str("</ul>\n</body>\n</html>\n");
    html
}

/// Reflects a chosen direction back into a navigable URL.
///
/// Always writes the parameter explicitly, including `asc`, so following the
/// link is unambiguous regardless of what the current URL carried.
fn sort_href(path: &str, order: SortOrder) -> String {
    format!("{path}?{SORT_ORDER_KEY}={}", order.token())
}

/// Minimal HTML escaping for text and attribute positions.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::test_request;

    #[tokio::test]
    async fn page_renders_ascending_by_default() {
        let res = list_page(test_request("/lists/fruits", "", &[("slug", "fruits")])).await;
        assert_eq!(res.status_code(), StatusCode::OK);

        let body = String::from_utf8(res.body_bytes().to_vec()).unwrap();
        let apple = body.find("<li>apple</li>").unwrap();
        let banana = body.find("<li>banana</li>").unwrap();
        assert!(apple < banana);
        // toggle link points at the other direction
        assert!(body.contains("href=\"/lists/fruits?sortOrder=desc\""));
    }

    #[tokio::test]
    async fn page_renders_descending_on_desc() {
        let res = list_page(test_request(
            "/lists/fruits",
            "sortOrder=desc",
            &[("slug", "fruits")],
        ))
        .await;

        let body = String::from_utf8(res.body_bytes().to_vec()).unwrap();
        let apple = body.find("<li>apple</li>").unwrap();
        let banana = body.find("<li>banana</li>").unwrap();
        assert!(banana < apple);
        assert!(body.contains("href=\"/lists/fruits?sortOrder=asc\""));
    }

    #[tokio::test]
    async fn page_ignores_bogus_sort_value() {
        let res = list_page(test_request(
            "/lists/fruits",
            "sortOrder=bogus",
            &[("slug", "fruits")],
        ))
        .await;

        let body = String::from_utf8(res.body_bytes().to_vec()).unwrap();
        assert!(body.find("<li>apple</li>").unwrap() < body.find("<li>banana</li>").unwrap());
    }

    #[tokio::test]
    async fn unknown_slug_is_404() {
        let res = list_page(test_request("/lists/nope", "", &[("slug", "nope")])).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn json_reports_order_and_sorted_items() {
        let res = list_json(test_request(
            "/api/lists/fruits",
            "sortOrder=desc",
            &[("slug", "fruits")],
        ))
        .await;
        assert_eq!(res.status_code(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_slice(res.body_bytes()).unwrap();
        assert_eq!(body["slug"], "fruits");
        assert_eq!(body["sortOrder"], "desc");
        assert_eq!(body["items"][0], "date");
        assert_eq!(body["items"][3], "apple");
    }

    #[tokio::test]
    async fn json_unknown_slug_is_404() {
        let res = list_json(test_request("/api/lists/nope", "", &[("slug", "nope")])).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn index_links_every_list() {
        let res = index(test_request("/", "", &[])).await;
        let body = String::from_utf8(res.body_bytes().to_vec()).unwrap();
        for list in catalog::all() {
            assert!(body.contains(&format!("/lists/{}", list.slug)));
        }
    }

    #[test]
    fn sort_href_writes_the_token() {
        assert_eq!(
            sort_href("/lists/fruits", SortOrder::Descending),
            "/lists/fruits?sortOrder=desc"
        );
        assert_eq!(
            sort_href("/lists/fruits", SortOrder::Ascending),
            "/lists/fruits?sortOrder=asc"
        );
    }

    #[test]
    fn escape_covers_html_specials() {
        assert_eq!(escape(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape("plain"), "plain");
    }
}
