// src/handlers/product.rs
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use crate::dtos::product::{DeleteResponse, ListWindow, ProductRequest};
use crate::extractors::ProductId;
use crate::models::product::Product;
use crate::state::AppState;
use crate::error::AppError;
use tracing::{debug, instrument};

fn decode_payload(body: &[u8], message: &str) -> Result<ProductRequest, AppError> {
    ProductRequest::from_slice(body).map_err(|e| {
        debug!(error = %e, "Rejected product payload");
        AppError::validation(message)
    })
}

// GET /products?count=&start= - List a window of products
#[instrument(skip(state, query))]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let window = ListWindow::from_query(&query);
    debug!(offset = window.offset, limit = window.limit, "Listing products");

    let products = state.store.list(window.offset, window.limit).await?;
    Ok(Json(products))
}

// GET /product/:id - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    id: ProductId,
    State(state): State<AppState>,
) -> Result<Json<Product>, AppError> {
    let product = state.store.fetch_by_id(id.0).await?;
    Ok(Json(product))
}

// POST /product - Create new product
#[instrument(skip(state, body))]
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let payload = decode_payload(&body, "Invalid request payload")?;

    let product = state.store.create(&payload.name, payload.price).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

// PUT /product/:id - Overwrite name and price
#[instrument(skip(state, body))]
pub async fn update_product(
    id: ProductId,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Product>, AppError> {
    // Misspelling is part of the observable contract of this endpoint.
    let payload = decode_payload(&body, "Invalid resquest payload")?;

    state.store.update(id.0, &payload.name, payload.price).await?;

    // Echo the submission even when no row matched.
    Ok(Json(Product {
        id: id.0,
        name: payload.name,
        price: payload.price,
    }))
}

// DELETE /product/:id - Delete product
#[instrument(skip(state))]
pub async fn delete_product(
    id: Result<ProductId, AppError>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let ProductId(id) = id.map_err(|e| match e {
        AppError::ValidationError(_) => AppError::validation("Invalid Product ID"),
        other => other,
    })?;

    state.store.delete(id).await?;
    Ok(Json(DeleteResponse::success()))
}
