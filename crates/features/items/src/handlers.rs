use crate::Items;
use crate::error::{ItemsError, Result};
use crate::model::{Item, ItemId, NewItem};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, Path, Request};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use ihub_kernel::domain::constants::ITEMS_TAG;
use ihub_kernel::server::{MessageResponse, Slice};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Full collection listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Item>,
}

/// A single item.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    pub success: bool,
    pub data: Item,
}

impl ItemResponse {
    const fn new(data: Item) -> Self {
        Self { success: true, data }
    }
}

/// Create payload extractor.
///
/// A request without a JSON content type or with an empty body is read as `{}`, and so is a
/// JSON array. Falsy field values (`null`, `false`, `0`, `""`) take the defaults; any other
/// value is kept in its textual form. Only malformed JSON and bare top-level scalars are
/// rejected.
#[derive(Debug)]
pub struct ItemPayload(pub NewItem);

impl<S> FromRequest<S> for ItemPayload
where
    S: Send + Sync,
{
    type Rejection = ItemsError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ItemsError::invalid_body(rejection.body_text()))?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(NewItem::default()));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ItemsError::invalid_body(format!("malformed JSON: {e}")))?;

        match value {
            Value::Object(fields) => Ok(Self(NewItem {
                name: field_text(fields.get("name")),
                kind: field_text(fields.get("type")),
            })),
            Value::Array(_) => Ok(Self(NewItem::default())),
            _ => Err(ItemsError::invalid_body("expected a JSON object or array")),
        }
    }
}

/// Textual form of a payload field, or `None` when the value is falsy.
fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_owned()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Reads the leading integer of a path segment: optional leading whitespace and sign, then
/// ASCII digits up to the first non-digit (`"2abc"` and `"2.0"` are both id 2). A segment
/// without leading digits, or a negative one, can never match and takes the not-found path.
fn parse_id(raw: &str) -> Result<ItemId> {
    let not_found = || ItemsError::not_found(raw.to_owned());

    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];

    if negative || digits.is_empty() {
        return Err(not_found());
    }
    digits.parse::<ItemId>().map_err(|_| not_found())
}

#[utoipa::path(
    get,
    path = "/api/items",
    responses((status = OK, description = "All items in insertion order", body = ItemListResponse)),
    tag = ITEMS_TAG,
)]
#[allow(clippy::unused_async)]
pub(crate) async fn list_items(Slice(items): Slice<Items>) -> Json<ItemListResponse> {
    let data = items.store.list();
    Json(ItemListResponse { success: true, count: data.len(), data })
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = OK, description = "The first item with this id", body = ItemResponse),
        (status = NOT_FOUND, description = "No such item", body = MessageResponse),
    ),
    tag = ITEMS_TAG,
)]
#[allow(clippy::unused_async)]
pub(crate) async fn get_item(
    Slice(items): Slice<Items>,
    Path(raw): Path<String>,
) -> Result<Json<ItemResponse>> {
    let id = parse_id(&raw)?;
    let item = items.store.get(id).ok_or_else(|| ItemsError::not_found(raw))?;
    Ok(Json(ItemResponse::new(item)))
}

#[utoipa::path(
    post,
    path = "/api/items",
    request_body(content = NewItem, description = "Optional name and type", content_type = "application/json"),
    responses(
        (status = CREATED, description = "Item appended", body = ItemResponse),
        (status = BAD_REQUEST, description = "Body is malformed JSON or a bare scalar", body = MessageResponse),
    ),
    tag = ITEMS_TAG,
)]
#[allow(clippy::unused_async)]
pub(crate) async fn create_item(
    Slice(items): Slice<Items>,
    ItemPayload(payload): ItemPayload,
) -> impl IntoResponse {
    let item = items.store.create(payload);
    (StatusCode::CREATED, Json(ItemResponse::new(item)))
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = OK, description = "Item removed", body = MessageResponse),
        (status = NOT_FOUND, description = "No such item", body = MessageResponse),
    ),
    tag = ITEMS_TAG,
)]
#[allow(clippy::unused_async)]
pub(crate) async fn delete_item(
    Slice(items): Slice<Items>,
    Path(raw): Path<String>,
) -> Result<MessageResponse> {
    let id = parse_id(&raw)?;
    items.store.delete(id).ok_or_else(|| ItemsError::not_found(raw))?;
    Ok(MessageResponse::ok("Item deleted"))
}
