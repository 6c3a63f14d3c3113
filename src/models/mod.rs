//! Domain models shared by the proxy and the terminal client.

pub mod catalogue;
pub mod envelope;
pub mod prices;
pub mod profit;

pub use catalogue::{
    Alpha, CategoryResponse, GraphData, Item, ItemDetail, ItemDetailResponse, ItemsResponse,
    Price, PriceInfo, Trend, TrendChange,
};
pub use envelope::ApiResponse;
pub use prices::{GloopPrice, LatestPrice, LatestResponse, MappingEntry};
pub use profit::{FlipOpportunity, HerbProfit, MaterialCost, SkillProfit};
