use axum::http::Method;
use regex::{Captures, Regex};
use serde::Deserialize;
use std::sync::LazyLock;

/// A request resolved to the typed operation it asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListUsers,
    GetUser { id: String },
    CreateUser,
    /// `page` is the raw query value; the handler decides whether it is numeric.
    ListPostsByAuthor { user_id: String, page: Option<String> },
    GetPost { id: String },
    CreatePost,
    NotFound,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ListUsers => "list_users",
            Operation::GetUser { .. } => "get_user",
            Operation::CreateUser => "create_user",
            Operation::ListPostsByAuthor { .. } => "list_posts_by_author",
            Operation::GetPost { .. } => "get_post",
            Operation::CreatePost => "create_post",
            Operation::NotFound => "not_found",
        }
    }
}

struct Rule {
    method: Method,
    pattern: Regex,
    build: fn(&Captures<'_>, Option<&str>) -> Operation,
}

impl Rule {
    fn new(
        method: Method,
        pattern: &str,
        build: fn(&Captures<'_>, Option<&str>) -> Operation,
    ) -> Self {
        Self {
            method,
            pattern: Regex::new(pattern).expect("route patterns are constant and valid"),
            build,
        }
    }
}

fn capture(caps: &Captures<'_>) -> String {
    caps[1].to_string()
}

// Ids are decimal digits but stay strings all the way down.
// `/posts/users/{id}` must be tried before `/posts/{id}`; the generic rule would
// otherwise see "users" as a post id and never reach the author listing.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(Method::GET, r"^/users/?$", |_, _| Operation::ListUsers),
        Rule::new(Method::GET, r"^/users/(\d+)$", |caps, _| Operation::GetUser {
            id: capture(caps),
        }),
        Rule::new(Method::POST, r"^/users/?$", |_, _| Operation::CreateUser),
        Rule::new(Method::GET, r"^/posts/users/(\d+)$", |caps, query| {
            Operation::ListPostsByAuthor {
                user_id: capture(caps),
                page: query.and_then(page_param),
            }
        }),
        Rule::new(Method::GET, r"^/posts/(\d+)$", |caps, _| Operation::GetPost {
            id: capture(caps),
        }),
        Rule::new(Method::POST, r"^/posts/?$", |_, _| Operation::CreatePost),
    ]
});

/// Resolves a request against the rule table; the first satisfying rule wins.
pub fn match_route(method: &Method, path: &str, query: Option<&str>) -> Operation {
    RULES
        .iter()
        .filter(|rule| rule.method == *method)
        .find_map(|rule| {
            rule.pattern
                .captures(path)
                .map(|caps| (rule.build)(&caps, query))
        })
        .unwrap_or(Operation::NotFound)
}

/// Query parameters of the author listing, decoded the way axum's `Query` extractor does.
#[derive(Debug, Deserialize)]
struct ListParams {
    page: Option<String>,
}

// A query that does not decode (e.g. a repeated `page`) is passed on whole, so the
// handler rejects it as an invalid page instead of silently serving page 1.
fn page_param(query: &str) -> Option<String> {
    match serde_urlencoded::from_str::<ListParams>(query) {
        Ok(params) => params.page,
        Err(e) => {
            tracing::debug!("Undecodable query `{}`: {}", query, e);
            Some(query.to_string())
        }
    }
}
