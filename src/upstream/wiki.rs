//! # upstream::wiki
//!
//! OSRS Wiki real-time prices API (`/mapping`, `/latest`).

use futures_util::future::try_join;

use crate::{
    error::AppError,
    models::{LatestResponse, MappingEntry},
};

use super::UpstreamClient;

impl UpstreamClient {
    /// Every tradeable item with its name and GE buy limit.
    pub async fn mapping(&self) -> Result<Vec<MappingEntry>, AppError> {
        let url = format!("{}/mapping", self.urls.wiki_prices);
        self.get_json(&url, &[], "mapping data").await
    }

    /// Most recent instant-buy (`high`) and instant-sell (`low`) per item.
    pub async fn latest(&self) -> Result<LatestResponse, AppError> {
        let url = format!("{}/latest", self.urls.wiki_prices);
        self.get_json(&url, &[], "latest prices").await
    }

    /// Fetch `/mapping` and `/latest` concurrently.  Both must succeed; the
    /// first failure wins.
    pub async fn mapping_and_latest(
        &self,
    ) -> Result<(Vec<MappingEntry>, LatestResponse), AppError> {
        try_join(self.mapping(), self.latest()).await
    }
}
