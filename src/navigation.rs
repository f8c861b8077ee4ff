//! Screens of the storefront app and the access rule for each.

/// A navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Public catalog.
    Main,
    Login,
    /// Admin catalog with create and delete.
    MainAdmin,
    /// Public product detail.
    ProductDetails(i64),
    /// Admin product editor.
    ProductAdmin(i64),
}

impl Screen {
    /// Screens that need a stored token.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::MainAdmin | Screen::ProductAdmin(_))
    }

    /// Screens only shown while signed out. A signed-in user is sent to the
    /// admin catalog instead.
    pub fn anonymous_only(&self) -> bool {
        matches!(self, Screen::Main | Screen::Login)
    }
}

/// Outcome of entering a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Proceed,
    Redirect(Screen),
}

/// Decide whether `screen` may be shown given the session state.
pub fn access_for(screen: Screen, authenticated: bool) -> Access {
    if screen.requires_auth() && !authenticated {
        Access::Redirect(Screen::Main)
    } else if screen.anonymous_only() && authenticated {
        Access::Redirect(Screen::MainAdmin)
    } else {
        Access::Proceed
    }
}
