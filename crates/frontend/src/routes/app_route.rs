/// Screens reachable from the navigation, addressed by the URL hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Home,
    Login,
    ItemCategories,
    Items,
    MarketPlaces,
    StockCard,
    StockSummary,
}

impl AppRoute {
    pub const ALL: [AppRoute; 7] = [
        Self::Home,
        Self::Login,
        Self::ItemCategories,
        Self::Items,
        Self::MarketPlaces,
        Self::StockCard,
        Self::StockSummary,
    ];

    /// Hash fragment including the leading `#`
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "#/",
            Self::Login => "#/login",
            Self::ItemCategories => "#/item-categories",
            Self::Items => "#/items",
            Self::MarketPlaces => "#/market-places",
            Self::StockCard => "#/stock-card",
            Self::StockSummary => "#/stock-summary",
        }
    }

    /// Route of a `location.hash` value; anything unknown is Home
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = path.split(['?', '&']).next().unwrap_or_default();
        let path = path.trim_matches('/');
        Self::ALL
            .into_iter()
            .find(|route| route.path().trim_start_matches("#/") == path)
            .unwrap_or_default()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::ItemCategories => "Item Categories",
            Self::Items => "Items",
            Self::MarketPlaces => "Market Places",
            Self::StockCard => "Stock Card",
            Self::StockSummary => "Stock Summary",
        }
    }

    /// Private screens show the login form until a session exists
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::StockCard | Self::StockSummary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_map_both_ways() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_hash(route.path()), route, "{route:?}");
        }
    }

    #[test]
    fn test_hash_variants() {
        assert_eq!(AppRoute::from_hash("#/items/"), AppRoute::Items);
        assert_eq!(AppRoute::from_hash("#items"), AppRoute::Items);
        assert_eq!(AppRoute::from_hash("#/stock-card?item=4"), AppRoute::StockCard);
        assert_eq!(AppRoute::from_hash(""), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Home);
    }

    #[test]
    fn test_unknown_is_home() {
        assert_eq!(AppRoute::from_hash("#/purchases"), AppRoute::Home);
        assert_eq!(AppRoute::from_hash("#/ITEMS"), AppRoute::Home);
    }

    #[test]
    fn test_only_stock_screens_are_private() {
        let private: Vec<_> = AppRoute::ALL
            .into_iter()
            .filter(|r| r.requires_auth())
            .collect();
        assert_eq!(private, vec![AppRoute::StockCard, AppRoute::StockSummary]);
    }
}
