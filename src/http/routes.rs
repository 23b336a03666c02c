//! Product endpoints.
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | `/products` | 200, array of products | - |
//! | POST | `/products` | 201, created product | 400 |
//! | GET | `/products/{productId}` | 200, product | 404 |
//! | DELETE | `/products/{productId}` | 204, empty body | 404 |

use super::error::ApiError;
#[allow(unused_imports)] // only referenced from `#[utoipa::path]` response bodies
use super::error::ErrorResponse;
use super::AppState;
use crate::clients::ActorClient;
use crate::model::{Product, ProductCreate, ProductId};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;

/// Create product routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/:productId", get(get_product).delete(delete_product))
}

/// Payload for creating a product.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Widget")]
    pub name: String,
}

/// Whether the request declares a JSON body (`application/json` or an `application/*+json`
/// type). Bodies of any other type are never parsed.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Turns a raw path segment into an ID. Anything that is not a plain unsigned integer can
/// never match a stored product, so it is reported as not found.
fn parse_product_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse().map_err(|_| {
        debug!(raw, "Unparseable product id");
        ApiError::NotFound
    })
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    operation_id = "getProducts",
    tag = "product",
    responses(
        (status = 200, description = "OK", body = [Product])
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.list().await?;
    Ok(Json(products))
}

/// Create a product
///
/// The body is parsed by hand so that a missing, malformed or non-JSON payload is reported the
/// same way as a missing name.
#[utoipa::path(
    post,
    path = "/products",
    operation_id = "createProduct",
    tag = "product",
    request_body(content = CreateProductRequest, content_type = "application/json"),
    responses(
        (status = 201, description = "Created", body = Product),
        (status = 400, description = "Invalid data", body = ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    if !has_json_content_type(&headers) {
        debug!("Rejecting create payload without a JSON content type");
        return Err(ApiError::MissingName);
    }
    let request: CreateProductRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejecting create payload");
        ApiError::MissingName
    })?;

    let product = state
        .products
        .create_product(ProductCreate::new(request.name))
        .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{productId}",
    operation_id = "getProduct",
    tag = "product",
    params(
        ("productId" = u64, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "OK", body = Product),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_product_id(&product_id)?;
    state
        .products
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Delete a product by ID
#[utoipa::path(
    delete,
    path = "/products/{productId}",
    operation_id = "deleteProduct",
    tag = "product",
    params(
        ("productId" = u64, Path, description = "Product identifier")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_product_id(&product_id)?;
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Answers every request that matches no route, so unknown paths get the JSON error shape too.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
