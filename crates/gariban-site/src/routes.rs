/// The site's routes, in navigation order.
///
/// The scene crate addresses routes by `index` when a navigation request
/// crosses the wasm boundary as a float; keep `ALL` and `index` in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Route {
    /// All routes in navigation order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::About,
        Route::Skills,
        Route::Experience,
        Route::Projects,
        Route::Contact,
    ];

    /// URL path for this route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/hakkimda",
            Route::Skills => "/yetenekler",
            Route::Experience => "/deneyim",
            Route::Projects => "/projelerim",
            Route::Contact => "/iletisim",
        }
    }

    /// Menu title shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Ana Sayfa",
            Route::About => "Hakkımda",
            Route::Skills => "Yetenekler",
            Route::Experience => "Deneyim",
            Route::Projects => "Projelerim",
            Route::Contact => "İletişim",
        }
    }

    /// Stable numeric identity, equal to the position in `ALL`.
    pub fn index(self) -> usize {
        match self {
            Route::Home => 0,
            Route::About => 1,
            Route::Skills => 2,
            Route::Experience => 3,
            Route::Projects => 4,
            Route::Contact => 5,
        }
    }

    /// Route for a URL path, or `None` for unknown paths.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|r| r.path() == path)
    }

    /// Route for a numeric identity, or `None` when out of range.
    pub fn from_index(index: usize) -> Option<Route> {
        Route::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (i, route) in Route::ALL.iter().enumerate() {
            assert_eq!(route.index(), i);
            assert_eq!(Route::from_index(i), Some(*route));
        }
    }

    #[test]
    fn from_index_out_of_range_is_none() {
        assert_eq!(Route::from_index(6), None);
    }

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/yok"), None);
    }

    #[test]
    fn turkish_titles() {
        assert_eq!(Route::Home.title(), "Ana Sayfa");
        assert_eq!(Route::About.title(), "Hakkımda");
        assert_eq!(Route::Contact.title(), "İletişim");
    }

    #[test]
    fn contact_path() {
        assert_eq!(Route::Contact.path(), "/iletisim");
    }
}
