//! Application route table.
//!
//! The table is the single source of truth for which paths exist. The UI
//! builds its `leptos_router` routes from the constants below and uses
//! [`resolve`] to work out which section the current location belongs to.

pub const ELECTIVES_SEGMENT: &str = "electives";
pub const LOGIN_SEGMENT: &str = "login";
/// Path parameter carried by the detail route, forwarded to the detail view.
pub const ELECTIVE_PARAM: &str = "elective";

// Full patterns; tests keep them in step with the segments above.
pub const ROOT_PATH: &str = "/";
pub const ELECTIVES_PATH: &str = "/electives";
pub const ELECTIVE_DETAIL_PATH: &str = "/electives/:elective";
pub const LOGIN_PATH: &str = "/login";

const MAX_REDIRECTS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Electives,
    ElectiveDetail,
    Login,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    Redirect(&'static str),
    View(View),
}

#[derive(Clone, Copy, Debug)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
    /// Path params are handed to the view as component inputs.
    pub props: bool,
}

pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: ROOT_PATH,
        name: None,
        target: RouteTarget::Redirect(ELECTIVES_PATH),
        props: false,
    },
    RouteEntry {
        path: ELECTIVES_PATH,
        name: Some("Electives"),
        target: RouteTarget::View(View::Electives),
        props: false,
    },
    RouteEntry {
        path: ELECTIVE_DETAIL_PATH,
        name: Some("ElectiveDetail"),
        target: RouteTarget::View(View::ElectiveDetail),
        props: true,
    },
    RouteEntry {
        path: LOGIN_PATH,
        name: Some("Login"),
        target: RouteTarget::View(View::Login),
        props: false,
    },
];

/// A path resolved to the view it renders, with forwarded inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Electives,
    ElectiveDetail { elective: String },
    Login,
}

impl AppRoute {
    pub fn href(&self) -> String {
        match self {
            Self::Electives => ELECTIVES_PATH.to_string(),
            Self::ElectiveDetail { elective } => format!("{ELECTIVES_PATH}/{elective}"),
            Self::Login => LOGIN_PATH.to_string(),
        }
    }

    pub fn view(&self) -> View {
        match self {
            Self::Electives => View::Electives,
            Self::ElectiveDetail { .. } => View::ElectiveDetail,
            Self::Login => View::Login,
        }
    }

    /// Name of the table entry rendering this route.
    pub fn name(&self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|entry| entry.target == RouteTarget::View(self.view()))
            .and_then(|entry| entry.name)
    }
}

#[derive(Clone, Debug)]
pub struct RouteMatch {
    pub entry: &'static RouteEntry,
    pub params: Vec<(&'static str, String)>,
}

/// Finds the first entry whose pattern matches `path`, without following redirects.
pub fn match_route(path: &str) -> Option<RouteMatch> {
    let pathSegments: Vec<&str> = segments(path).collect();

    ROUTES.iter().find_map(|entry| {
        let params = match_pattern(entry.path, &pathSegments)?;
        Some(RouteMatch { entry, params })
    })
}

/// Resolves a navigated path to the view it renders, following redirects.
pub fn resolve(path: &str) -> Option<AppRoute> {
    let mut current = path;

    for _ in 0..=MAX_REDIRECTS {
        let RouteMatch { entry, params } = match_route(current)?;
        match entry.target {
            RouteTarget::Redirect(to) => current = to,
            RouteTarget::View(view) => {
                let params = if entry.props { params } else { Vec::new() };
                return build_route(view, params);
            }
        }
    }

    None
}

fn build_route(view: View, params: Vec<(&'static str, String)>) -> Option<AppRoute> {
    match view {
        View::Electives => Some(AppRoute::Electives),
        View::Login => Some(AppRoute::Login),
        View::ElectiveDetail => {
            let elective = params
                .into_iter()
                .find(|(name, _)| *name == ELECTIVE_PARAM)
                .map(|(_, value)| value)?;
            Some(AppRoute::ElectiveDetail { elective })
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty())
}

fn match_pattern(
    pattern: &'static str,
    pathSegments: &[&str],
) -> Option<Vec<(&'static str, String)>> {
    let patternSegments: Vec<&'static str> = segments(pattern).collect();
    if patternSegments.len() != pathSegments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in patternSegments.into_iter().zip(pathSegments) {
        match expected.strip_prefix(':') {
            Some(name) => params.push((name, (*actual).to_string())),
            None if expected == *actual => {}
            None => return None,
        }
    }

    Some(params)
}
