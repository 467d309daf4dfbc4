//! Path-prefix router.

/// The endpoint a request path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Exactly `/`
    Root,
    /// `/echo/<text>`
    Echo,
    /// `/user-agent`
    UserAgent,
    /// `/files/<name>`
    Files,
    NotFound,
}

/// A resolved route plus whatever followed its prefix.
///
/// For `/echo/abc` the remainder is `abc`; the slash after the prefix is
/// dropped. `Root` and `NotFound` carry an empty remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: Route,
    pub remainder: &'a str,
}

/// Immutable prefix table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    prefixes: Vec<(&'static str, Route)>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(vec![
            ("/echo", Route::Echo),
            ("/user-agent", Route::UserAgent),
            ("/files", Route::Files),
        ])
    }
}

impl RouteTable {
    pub fn new(prefixes: Vec<(&'static str, Route)>) -> Self {
        Self { prefixes }
    }

    /// Resolves `path` to a route.
    ///
    /// Matching is a plain `starts_with`, so `/echoes` still lands on
    /// [`Route::Echo`] with remainder `es`.
    pub fn resolve<'a>(&self, path: &'a str) -> RouteMatch<'a> {
        if path == "/" {
            return RouteMatch { route: Route::Root, remainder: "" };
        }

        self.prefixes
            .iter()
            .find_map(|(prefix, route)| {
                path.strip_prefix(*prefix).map(|rest| RouteMatch {
                    route: *route,
                    remainder: rest.strip_prefix('/').unwrap_or(rest),
                })
            })
            .unwrap_or(RouteMatch { route: Route::NotFound, remainder: "" })
    }
}
