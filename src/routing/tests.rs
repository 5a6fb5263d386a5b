#[cfg(test)]
mod tests {
    use crate::routing::{Operation, match_route};
    use axum::http::Method;

    #[test]
    fn test_users_collection_with_and_without_slash() {
        assert_eq!(match_route(&Method::GET, "/users", None), Operation::ListUsers);
        assert_eq!(match_route(&Method::GET, "/users/", None), Operation::ListUsers);
        assert_eq!(match_route(&Method::POST, "/users", None), Operation::CreateUser);
        assert_eq!(match_route(&Method::POST, "/users/", None), Operation::CreateUser);
    }

    #[test]
    fn test_get_user_captures_id() {
        assert_eq!(
            match_route(&Method::GET, "/users/42", None),
            Operation::GetUser {
                id: "42".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_ids_do_not_match() {
        assert_eq!(match_route(&Method::GET, "/users/abc", None), Operation::NotFound);
        assert_eq!(match_route(&Method::GET, "/posts/abc", None), Operation::NotFound);
        assert_eq!(match_route(&Method::GET, "/posts/users/x1", None), Operation::NotFound);
    }

    #[test]
    fn test_author_listing_wins_over_get_post() {
        // "users" must never be read as a post id
        assert_eq!(
            match_route(&Method::GET, "/posts/users/5", None),
            Operation::ListPostsByAuthor {
                user_id: "5".to_string(),
                page: None,
            }
        );
        assert_eq!(
            match_route(&Method::GET, "/posts/5", None),
            Operation::GetPost { id: "5".to_string() }
        );
    }

    #[test]
    fn test_author_listing_carries_raw_page() {
        assert_eq!(
            match_route(&Method::GET, "/posts/users/5", Some("page=3")),
            Operation::ListPostsByAuthor {
                user_id: "5".to_string(),
                page: Some("3".to_string()),
            }
        );
        assert_eq!(
            match_route(&Method::GET, "/posts/users/5", Some("sort=asc&page=abc")),
            Operation::ListPostsByAuthor {
                user_id: "5".to_string(),
                page: Some("abc".to_string()),
            }
        );
        assert_eq!(
            match_route(&Method::GET, "/posts/users/5", Some("sort=asc")),
            Operation::ListPostsByAuthor {
                user_id: "5".to_string(),
                page: None,
            }
        );
    }

    #[test]
    fn test_author_listing_page_is_url_decoded() {
        assert_eq!(
            match_route(&Method::GET, "/posts/users/1", Some("page=%32")),
            Operation::ListPostsByAuthor {
                user_id: "1".to_string(),
                page: Some("2".to_string()),
            }
        );
        assert_eq!(
            match_route(&Method::GET, "/posts/users/1", Some("page=")),
            Operation::ListPostsByAuthor {
                user_id: "1".to_string(),
                page: Some(String::new()),
            }
        );
    }

    #[test]
    fn test_repeated_page_is_passed_on_undecoded() {
        // never read as page 1 or 2, so the handler rejects it
        assert_eq!(
            match_route(&Method::GET, "/posts/users/1", Some("page=1&page=2")),
            Operation::ListPostsByAuthor {
                user_id: "1".to_string(),
                page: Some("page=1&page=2".to_string()),
            }
        );
    }

    #[test]
    fn test_unsupported_methods_are_not_found() {
        assert_eq!(match_route(&Method::PUT, "/users/1", None), Operation::NotFound);
        assert_eq!(match_route(&Method::DELETE, "/posts/1", None), Operation::NotFound);
        assert_eq!(match_route(&Method::POST, "/users/1", None), Operation::NotFound);
        assert_eq!(match_route(&Method::GET, "/posts", None), Operation::NotFound);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(match_route(&Method::GET, "/", None), Operation::NotFound);
        assert_eq!(match_route(&Method::GET, "/users/1/posts", None), Operation::NotFound);
        assert_eq!(match_route(&Method::GET, "/comments", None), Operation::NotFound);
    }

    #[test]
    fn test_operation_names_are_stable() {
        assert_eq!(Operation::ListUsers.name(), "list_users");
        assert_eq!(Operation::NotFound.name(), "not_found");
    }
}
