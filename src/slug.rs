/// Turn a table name into a URL-friendly slug: lowercase, runs of anything
/// non-alphanumeric collapse to a single hyphen, no hyphens at the ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases() {
        assert_eq!(slugify("Users"), "users");
        assert_eq!(slugify("BlogPosts"), "blogposts");
    }

    #[test]
    fn test_slugify_collapses_separator_runs() {
        assert_eq!(slugify("blog posts"), "blog-posts");
        assert_eq!(slugify("blog   posts"), "blog-posts");
        assert_eq!(slugify("user_account__log"), "user-account-log");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  orders  "), "orders");
        assert_eq!(slugify("__audit_log__"), "audit-log");
    }

    #[test]
    fn test_slugify_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("---"), "");
    }
}
