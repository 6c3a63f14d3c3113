//! # upstream::gloop
//!
//! Weird Gloop exchange history API — `/latest?id=a,b,c` returns one entry
//! per requested id, keyed by id.

use std::collections::HashMap;

use crate::{error::AppError, models::GloopPrice};

use super::UpstreamClient;

impl UpstreamClient {
    /// Latest GE price for each of `ids`.  Ids the API does not know are
    /// simply absent from the map.
    ///
    /// This is the one upstream call that retries on `403`.
    pub async fn gloop_latest(&self, ids: &[u32]) -> Result<HashMap<u32, GloopPrice>, AppError> {
        let id_list = ids
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");

        // Built by hand so the commas stay literal.
        let url = format!("{}?id={id_list}", self.urls.gloop_latest);
        self.get_json_retrying_forbidden(&url, &[], "prices from Weird Gloop API")
            .await
    }
}
