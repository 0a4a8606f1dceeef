// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use http::{header, StatusCode};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::forms::product::{FormErrors, ProductForm};
use crate::state::AppState;
use crate::views::product::{confirm_delete_page, detail_page, detail_url, form_page, list_page};

/// Path ids are decimal digits only; anything else names no product.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::not_found("Product not found"));
    }
    raw.parse::<i64>()
        .map_err(|_| AppError::not_found("Product not found"))
}

fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

// GET / - List all products
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let products = state.store.list().await?;
    Ok(list_page(&products))
}

// GET /product/{id}/ - Show one product
#[instrument(skip(state))]
pub async fn show_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let product = state.store.get(parse_id(&id)?).await?;
    Ok(detail_page(&product))
}

// GET /product/new/ - Empty form
#[instrument]
pub async fn new_product_form() -> Html<String> {
    form_page(None, &ProductForm::empty(), &FormErrors::default())
}

// POST /product/new/ - Validate and create
#[instrument(skip(state, pairs))]
pub async fn create_product(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = ProductForm::from_pairs(pairs);
    let new_product = match form.validate() {
        Ok(p) => p,
        Err(errors) => {
            info!(?errors, "Create form rejected");
            return Ok(form_page(None, &form, &errors).into_response());
        }
    };

    let product = state.store.insert(&new_product).await?;
    info!(id = product.id, name = %product.name, "Product created");

    Ok(found(&detail_url(product.id)))
}

// GET /product/{id}/edit/ - Pre-filled form
#[instrument(skip(state))]
pub async fn edit_product_form(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let product = state.store.get(parse_id(&id)?).await?;
    Ok(form_page(
        Some(&product),
        &ProductForm::from(&product),
        &FormErrors::default(),
    ))
}

// POST /product/{id}/edit/ - Validate and update
#[instrument(skip(state, pairs))]
pub async fn update_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = ProductForm::from_pairs(pairs);
    let product = state.store.get(parse_id(&id)?).await?;

    let changes = match form.validate() {
        Ok(p) => p,
        Err(errors) => {
            info!(id = product.id, ?errors, "Edit form rejected");
            return Ok(form_page(Some(&product), &form, &errors).into_response());
        }
    };

    // The row may have been deleted since the fetch above; that surfaces as 404.
    let product = state.store.update(product.id, &changes).await?;
    info!(id = product.id, "Product updated");

    Ok(found(&detail_url(product.id)))
}

// GET /product/{id}/delete/ - Confirmation prompt
#[instrument(skip(state))]
pub async fn confirm_delete_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let product = state.store.get(parse_id(&id)?).await?;
    Ok(confirm_delete_page(&product))
}

// POST /product/{id}/delete/ - Delete and go back to the list
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;
    info!(id, "Product deleted");

    Ok(found("/"))
}
