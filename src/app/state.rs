use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// The two static routes mounted by the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display)]
pub enum Route {
    #[default]
    #[strum(to_string = "/")]
    Stocks,
    #[strum(to_string = "/heatmap")]
    Heatmap,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Stocks => "/",
            Self::Heatmap => "/heatmap",
        }
    }

    /// Unknown paths land on the stock page. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "/heatmap" | "heatmap" => Self::Heatmap,
            _ => Self::Stocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn paths_round_trip() {
        for route in Route::iter() {
            assert_eq!(Route::from_path(route.path()), route);
            assert_eq!(route.to_string(), route.path());
        }
    }

    #[test]
    fn unknown_path_falls_back_to_stocks() {
        assert_eq!(Route::from_path("/portfolio"), Route::Stocks);
        assert_eq!(Route::from_path(""), Route::Stocks);
    }

    #[test]
    fn tolerant_parsing() {
        assert_eq!(Route::from_path("/heatmap/"), Route::Heatmap);
        assert_eq!(Route::from_path(" heatmap "), Route::Heatmap);
    }

    #[test]
    fn exactly_two_routes() {
        assert_eq!(Route::iter().count(), 2);
    }
}
