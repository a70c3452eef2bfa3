/*
[INPUT]:  Session manager transitions
[OUTPUT]: Observable authentication state for the navigation layer
[POS]:    Session layer - state machine definition
[UPDATE]: When the session gains new states or observable flags
*/

/// Authentication state of the application.
///
/// `Initializing` exists exactly once per process, until the startup
/// validation settles; after that the state only moves between
/// `Authenticated` and `Unauthenticated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Initializing,
    Authenticated { token: String },
    Unauthenticated,
}

impl Session {
    /// The bearer token, present iff authenticated
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token } => Some(token),
            _ => None,
        }
    }

    /// True only during the initial startup validation
    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Initializing)
    }

    pub fn is_signed_out(&self) -> bool {
        matches!(self, Session::Unauthenticated)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}
