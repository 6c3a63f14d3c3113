//! # upstream::catalogue
//!
//! Official OSRS Grand Exchange catalogue API.

use crate::{
    error::AppError,
    models::{CategoryResponse, GraphData, ItemDetailResponse, ItemsResponse},
};

use super::UpstreamClient;

impl UpstreamClient {
    /// `GET /catalogue/category.json?category={id}`
    pub async fn category(&self, category: u32) -> Result<CategoryResponse, AppError> {
        let url = format!("{}/catalogue/category.json", self.urls.catalogue);
        self.get_json(&url, &[("category", category.to_string())], "category data")
            .await
    }

    /// `GET /catalogue/items.json?category=&alpha=&page=`
    ///
    /// `alpha` is query-encoded, so the `#` bucket (items starting with a
    /// digit) goes out as `%23`.
    pub async fn items(
        &self,
        category: u32,
        alpha: &str,
        page: u32,
    ) -> Result<ItemsResponse, AppError> {
        let url = format!("{}/catalogue/items.json", self.urls.catalogue);
        let query = [
            ("category", category.to_string()),
            ("alpha", alpha.to_string()),
            ("page", page.to_string()),
        ];
        self.get_json(&url, &query, "items data").await
    }

    /// `GET /catalogue/detail.json?item={id}`
    pub async fn item_detail(&self, item: u32) -> Result<ItemDetailResponse, AppError> {
        let url = format!("{}/catalogue/detail.json", self.urls.catalogue);
        self.get_json(&url, &[("item", item.to_string())], "item detail")
            .await
    }

    /// `GET /graph/{id}.json`
    pub async fn graph(&self, item: u32) -> Result<GraphData, AppError> {
        let url = format!("{}/graph/{item}.json", self.urls.catalogue);
        self.get_json(&url, &[], "graph data").await
    }
}
