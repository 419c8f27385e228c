/// A navigation link and the URL path prefixes that activate it.
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub prefixes: &'static [&'static str],
}

/// Navigation map of the monitored application. Mirrors the site's navbar:
/// one entry per link, activated by any of its path prefixes.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        href: "/",
        prefixes: &["/"],
    },
    NavLink {
        label: "Books",
        href: "/books",
        prefixes: &["/books", "/books/add", "/books/edit"],
    },
    NavLink {
        label: "Authors",
        href: "/authors",
        prefixes: &["/authors", "/authors/add", "/authors/edit"],
    },
    NavLink {
        label: "Cart",
        href: "/cart",
        prefixes: &["/cart", "/checkout"],
    },
    NavLink {
        label: "Login",
        href: "/login",
        prefixes: &["/login"],
    },
    NavLink {
        label: "Register",
        href: "/register",
        prefixes: &["/register", "/register-success"],
    },
];

/// Normalize user-entered path text to a leading-slash path; empty input
/// means the root.
pub fn normalize_path(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Find the link that should be highlighted for the given path.
///
/// "/" activates only on an exact match; every other prefix matches the start
/// of the path. At most one link is active for any path (first match wins).
pub fn active_link(path: &str) -> Option<&'static NavLink> {
    NAV_LINKS.iter().find(|link| {
        link.prefixes.iter().any(|prefix| {
            if *prefix == "/" {
                path == "/"
            } else {
                path.starts_with(prefix)
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_href(path: &str) -> Option<&'static str> {
        active_link(path).map(|link| link.href)
    }

    #[test]
    fn test_edit_page_activates_section_link() {
        assert_eq!(active_href("/books/edit/3"), Some("/books"));
    }

    #[test]
    fn test_root_activates_only_home() {
        assert_eq!(active_href("/"), Some("/"));
    }

    #[test]
    fn test_login_activates_login() {
        assert_eq!(active_href("/login"), Some("/login"));
    }

    #[test]
    fn test_checkout_activates_cart() {
        assert_eq!(active_href("/checkout"), Some("/cart"));
    }

    #[test]
    fn test_register_success_activates_register() {
        assert_eq!(active_href("/register-success"), Some("/register"));
    }

    #[test]
    fn test_unknown_path_activates_nothing() {
        assert_eq!(active_href("/profile"), None);
    }

    #[test]
    fn test_home_prefix_does_not_swallow_other_paths() {
        // "/" is exact-match only, so deep paths fall through to their own link
        assert_eq!(active_href("/authors/add"), Some("/authors"));
    }

    #[test]
    fn test_at_most_one_active_link() {
        let paths = [
            "/", "/books", "/books/edit/3", "/authors", "/cart", "/checkout",
            "/login", "/register", "/register-success", "/profile",
        ];
        for path in paths {
            let matches = NAV_LINKS
                .iter()
                .filter(|link| {
                    link.prefixes.iter().any(|p| {
                        if *p == "/" {
                            path == "/"
                        } else {
                            path.starts_with(p)
                        }
                    })
                })
                .count();
            assert!(matches <= 1, "path {} matched {} links", path, matches);
        }
    }
}
