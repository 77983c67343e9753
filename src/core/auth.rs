//! Which auth dialog the page asks its parent to open.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthView {
    Login,
    Register,
}

impl AuthView {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthView::Login => "login",
            AuthView::Register => "register",
        }
    }

    /// The view reached by the "switch" link inside the dialog.
    pub fn other(self) -> Self {
        match self {
            AuthView::Login => AuthView::Register,
            AuthView::Register => AuthView::Login,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthView::Login => "Welcome back",
            AuthView::Register => "Create your Pixelforge account",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            AuthView::Login => "Log in to pick up where you left off.",
            AuthView::Register => "Free forever for personal projects. No credit card required.",
        }
    }

    /// Prompt and link label leading to [`AuthView::other`].
    pub fn switch_prompt(&self) -> (&'static str, &'static str) {
        match self {
            AuthView::Login => ("New to Pixelforge?", "Create an account"),
            AuthView::Register => ("Already have an account?", "Log in"),
        }
    }
}

impl fmt::Display for AuthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_view_strings() {
        assert_eq!(AuthView::Login.to_string(), "login");
        assert_eq!(AuthView::Register.as_str(), "register");
    }

    #[test]
    fn test_other_switches_views() {
        assert_eq!(AuthView::Login.other(), AuthView::Register);
        assert_eq!(AuthView::Register.other(), AuthView::Login);
    }

    #[test]
    fn test_switch_prompt_names_other_view() {
        let (_, link) = AuthView::Register.switch_prompt();
        assert_eq!(link, "Log in");
        let (_, link) = AuthView::Login.switch_prompt();
        assert!(link.contains("account"));
    }
}
