//! Console tabs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four mutually exclusive content panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    /// Catalog statistics.
    Home,
    /// Product grid.
    #[default]
    Products,
    /// Add product form.
    AddProduct,
    /// Update product form.
    UpdateProduct,
}

impl Tab {
    /// Sidebar order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Products, Self::AddProduct, Self::UpdateProduct];

    /// Query-string name of the tab.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Products => "products",
            Self::AddProduct => "addProduct",
            Self::UpdateProduct => "updateProduct",
        }
    }

    /// Sidebar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Statistics",
            Self::Products => "Products",
            Self::AddProduct => "Add Products",
            Self::UpdateProduct => "Update Product",
        }
    }

    /// Font Awesome classes for the sidebar icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Home => "fa-solid fa-house",
            Self::Products => "fa-brands fa-product-hunt",
            Self::AddProduct => "fa-solid fa-plus",
            Self::UpdateProduct => "fa-solid fa-upload",
        }
    }

    /// Whether the tab is only shown to a signed-in admin.
    #[must_use]
    pub const fn requires_admin(self) -> bool {
        !matches!(self, Self::Products)
    }
}

impl FromStr for Tab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == s).ok_or(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_names() {
        assert_eq!("home".parse::<Tab>().unwrap(), Tab::Home);
        assert_eq!("addProduct".parse::<Tab>().unwrap(), Tab::AddProduct);
        assert!("add_product".parse::<Tab>().is_err());
    }

    #[test]
    fn test_serde_matches_query_names() {
        for tab in Tab::ALL {
            let json = serde_json::to_string(&tab).unwrap();
            assert_eq!(json, format!("\"{}\"", tab.as_str()));
        }
    }

    #[test]
    fn test_only_products_is_public() {
        let public: Vec<Tab> = Tab::ALL.into_iter().filter(|t| !t.requires_admin()).collect();
        assert_eq!(public, vec![Tab::Products]);
    }
}
