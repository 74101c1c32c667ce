//! Example endpoints

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::extract::{ApiPath, ApiQuery};

#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub item_id: i64,
    pub q: Option<String>,
}

/// GET /
pub async fn read_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "Hello": "World" }))
}

/// GET /items/{item_id}
/// Echo the item id and optional `q` query parameter
pub async fn read_item(
    ApiPath(item_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<ItemQuery>,
) -> Json<ItemResponse> {
    Json(ItemResponse {
        item_id,
        q: query.q,
    })
}
