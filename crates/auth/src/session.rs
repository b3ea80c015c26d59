//! Credential check and session flag contract.

/// The only account the store front knows.
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "1234";

/// Session slot the UI writes after a successful login.
pub const SESSION_SLOT: &str = "isLoggedIn";
/// Value stored in [`SESSION_SLOT`] while a session is active.
pub const SESSION_ACTIVE: &str = "true";

/// Check a login attempt against the hard-coded pair.
pub fn verify_credentials(username: &str, password: &str) -> bool {
    username == ADMIN_USERNAME && password == ADMIN_PASSWORD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_admin_pair_is_accepted() {
        assert!(verify_credentials("admin", "1234"));
    }

    #[test]
    fn anything_else_is_rejected() {
        assert!(!verify_credentials("admin", "wrong"));
        assert!(!verify_credentials("root", "1234"));
        assert!(!verify_credentials("", ""));
        assert!(!verify_credentials("Admin", "1234"));
    }
}
