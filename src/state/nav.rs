//! Screen navigation: two destinations and a back-stack.
//!
//! ```text
//!     List ──navigate("detail/{i}")──► Detail(i)
//!      ▲                                  │
//!      └──────────────pop()───────────────┘
//! ```
//!
//! The navigator does not check detail indices against the catalog;
//! whoever resolves `Detail(i)` into a record decides what a bad index means.

use std::fmt;
use std::str::FromStr;
use tracing::warn;

use super::error::NavigationError;

/// Route name of the grid screen
pub const LIST_ROUTE: &str = "list";

/// Route prefix of the detail screen, followed by `/{index}`
pub const DETAIL_ROUTE: &str = "detail";

/// A screen the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    List,
    /// Catalog index as carried by the route, unvalidated
    Detail(i64),
}

impl Destination {
    /// Parse a destination identifier.
    ///
    /// A detail route whose index is missing or not a decimal integer
    /// resolves to `Detail(0)`.
    pub fn parse(route: &str) -> Result<Self, NavigationError> {
        if route == LIST_ROUTE {
            return Ok(Destination::List);
        }

        let mut parts = route.splitn(2, '/');
        match (parts.next(), parts.next()) {
            (Some(DETAIL_ROUTE), arg) => {
                let index = arg.and_then(|a| a.trim().parse::<i64>().ok());
                if index.is_none() {
                    warn!(%route, "detail route without a valid index, using 0");
                }
                Ok(Destination::Detail(index.unwrap_or(0)))
            }
            _ => Err(NavigationError::UnknownRoute(route.to_string())),
        }
    }

    pub fn detail(index: usize) -> Self {
        Destination::Detail(index as i64)
    }
}

impl FromStr for Destination {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Destination::parse(s)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::List => f.write_str(LIST_ROUTE),
            Destination::Detail(index) => write!(f, "{DETAIL_ROUTE}/{index}"),
        }
    }
}

/// Tracks the current screen and how to get back from it
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    /// Destinations pushed on top of the start screen
    back_stack: Vec<Destination>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The screen currently shown
    pub fn current(&self) -> Destination {
        self.back_stack.last().copied().unwrap_or(Destination::List)
    }

    /// Number of entries above the start screen
    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    /// Parse `route` and push it
    pub fn navigate(&mut self, route: &str) -> Result<Destination, NavigationError> {
        let destination = Destination::parse(route)?;
        self.push(destination);
        Ok(destination)
    }

    pub fn push(&mut self, destination: Destination) {
        self.back_stack.push(destination);
    }

    /// Return to the previous screen.
    /// Returns false when already on the start screen.
    pub fn pop(&mut self) -> bool {
        self.back_stack.pop().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_list() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Destination::List);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_navigate_then_back() {
        let mut nav = Navigator::new();

        let dest = nav.navigate("detail/3").unwrap();
        assert_eq!(dest, Destination::Detail(3));
        assert_eq!(nav.current(), Destination::Detail(3));
        assert_eq!(nav.depth(), 1);

        assert!(nav.pop());
        assert_eq!(nav.current(), Destination::List);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_pop_at_root() {
        let mut nav = Navigator::new();
        assert!(!nav.pop());
        assert_eq!(nav.depth(), 0);
        assert_eq!(nav.current(), Destination::List);
    }

    #[test]
    fn test_unparsable_index_defaults_to_zero() {
        assert_eq!(Destination::parse("detail/abc"), Ok(Destination::Detail(0)));
        assert_eq!(Destination::parse("detail/"), Ok(Destination::Detail(0)));
        assert_eq!(Destination::parse("detail"), Ok(Destination::Detail(0)));
    }

    #[test]
    fn test_no_bounds_validation() {
        assert_eq!(Destination::parse("detail/99"), Ok(Destination::Detail(99)));
        assert_eq!(Destination::parse("detail/-1"), Ok(Destination::Detail(-1)));
    }

    #[test]
    fn test_unknown_route() {
        let mut nav = Navigator::new();
        assert_eq!(
            nav.navigate("settings"),
            Err(NavigationError::UnknownRoute("settings".to_string()))
        );
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_route_display_matches_parse() {
        for dest in [Destination::List, Destination::detail(0), Destination::detail(14)] {
            let route = dest.to_string();
            assert_eq!(route.parse::<Destination>(), Ok(dest));
        }
        assert_eq!(Destination::detail(4).to_string(), "detail/4");
    }
}
