use axum::{routing::get, Router};

use crate::handlers::product::{
    confirm_delete_product, create_product, delete_product, edit_product_form, list_products,
    new_product_form, show_product, update_product,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/product/new/", get(new_product_form).post(create_product))
        .route("/product/{id}/", get(show_product))
        .route("/product/{id}/edit/", get(edit_product_form).post(update_product))
        .route("/product/{id}/delete/", get(confirm_delete_product).post(delete_product))
}
