//! Endpoint paths and protected-endpoint classification

/// Well-known endpoint paths, relative to the API prefix
pub mod paths {
    pub const SIGN_IN: &str = "/authentication/sign-in";
    pub const SIGN_UP: &str = "/authentication/sign-up";
    pub const RESET_PASSWORD: &str = "/authentication/reset-password";
    pub const LOGOUT: &str = "/authentication/logout";
    pub const REFRESH_TOKENS: &str = "/authentication/refresh-tokens";

    pub const MY_PROFILE: &str = "/users/me";
    pub const COURSES: &str = "/courses";
    pub const PURCHASED_COURSES: &str = "/purchased-courses";
    pub const COURSE_REVIEWS: &str = "/reviews/course";
}

/// Paths that never require a bearer token
pub const UNPROTECTED_ENDPOINTS: [&str; 5] = [
    paths::SIGN_IN,
    paths::SIGN_UP,
    paths::RESET_PASSWORD,
    paths::LOGOUT,
    paths::REFRESH_TOKENS,
];

/// Whether a path requires authentication
///
/// Classification is a substring match against the fixed denylist above;
/// any unknown path defaults to protected.
pub fn is_protected(path: &str) -> bool {
    !UNPROTECTED_ENDPOINTS
        .iter()
        .any(|endpoint| path.contains(endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_endpoints_are_unprotected() {
        for endpoint in UNPROTECTED_ENDPOINTS {
            assert!(!is_protected(endpoint), "{endpoint} should be unprotected");
        }
    }

    #[test]
    fn test_unknown_paths_default_to_protected() {
        assert!(is_protected("/users/me"));
        assert!(is_protected("/courses/3"));
        assert!(is_protected("/anything/else"));
    }

    #[test]
    fn test_classification_matches_substrings() {
        assert!(!is_protected("/api/v1/authentication/sign-in"));
        assert!(!is_protected("/authentication/refresh-tokens?source=app"));
    }
}
