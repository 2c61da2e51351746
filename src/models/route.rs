//! Hash-based routing.

/// Path segment for photo detail routes.
const PHOTOS_SEGMENT: &str = "fotos";

/// Application routes for hash-based navigation.
/// URL format: `#/` for the home page, `#/fotos/{id}` for a photo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Home page with the upload form: #/ or empty hash
    Home,
    /// Photo details: #/fotos/{id}
    PhotoDetails {
        /// Photo identifier, taken verbatim from the URL
        id: String,
    },
    /// Anything else
    NotFound {
        /// Path without the leading `#/`
        path: String,
    },
}

impl AppRoute {
    /// Parse URL hash into AppRoute
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        if path.is_empty() {
            return Self::Home;
        }

        match path.split_once('/') {
            Some((PHOTOS_SEGMENT, id)) if !id.is_empty() && !id.contains('/') => {
                Self::PhotoDetails { id: id.to_string() }
            }
            _ => Self::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Convert AppRoute to URL hash
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::PhotoDetails { id } => format!("#/{}/{}", PHOTOS_SEGMENT, id),
            Self::NotFound { path } => format!("#/{}", path),
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Navigate to this route.
    ///
    /// Sets `location.hash`, which fires `hashchange` for the router.
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }
}
