use std::fmt::Write;

use axum::response::Html;

use super::{layout, Escaped};
use crate::forms::product::{FormErrors, ProductForm};
use crate::models::product::Product;

pub fn detail_url(id: i64) -> String {
    format!("/product/{id}/")
}

pub fn list_page(products: &[Product]) -> Html<String> {
    let mut body = String::from(r#"<p><a href="/product/new/">Add product</a></p>"#);
    body.push('\n');

    if products.is_empty() {
        body.push_str("<p>No products yet.</p>");
        return layout("Products", &body);
    }

    body.push_str(
        "<table>\n<thead><tr><th>Name</th><th>Quantity</th><th>Unit price</th></tr></thead>\n<tbody>\n",
    );
    for product in products {
        let _ = writeln!(
            body,
            r#"<tr><td><a href="{url}">{name}</a></td><td>{quantity}</td><td>{price}</td></tr>"#,
            url = detail_url(product.id),
            name = Escaped(&product.name),
            quantity = product.quantity,
            price = product.unit_price,
        );
    }
    body.push_str("</tbody>\n</table>");

    layout("Products", &body)
}

pub fn detail_page(product: &Product) -> Html<String> {
    let description = if product.description.is_empty() {
        "<em>No description</em>".to_string()
    } else {
        Escaped(&product.description).to_string()
    };

    let body = format!(
        r#"<dl>
<dt>Description</dt><dd>{description}</dd>
<dt>Quantity</dt><dd>{quantity}</dd>
<dt>Unit price</dt><dd>{price}</dd>
<dt>Created</dt><dd>{created}</dd>
<dt>Updated</dt><dd>{updated}</dd>
</dl>
<p><a href="/product/{id}/edit/">Edit</a> | <a href="/product/{id}/delete/">Delete</a> | <a href="/">Back to list</a></p>"#,
        quantity = product.quantity,
        price = product.unit_price,
        created = product.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        updated = product.updated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        id = product.id,
    );

    layout(&product.name, &body)
}

/// Shared create/edit form. `product` is the row being edited, if any; it
/// decides the title, submit label, action and cancel target.
pub fn form_page(product: Option<&Product>, form: &ProductForm, errors: &FormErrors) -> Html<String> {
    let (title, action, submit, cancel) = match product {
        Some(p) => (
            format!("Edit {}", p.name),
            format!("/product/{}/edit/", p.id),
            "Save",
            detail_url(p.id),
        ),
        None => (
            "New product".to_string(),
            "/product/new/".to_string(),
            "Create",
            "/".to_string(),
        ),
    };

    let body = format!(
        r#"<form method="post" action="{action}">
<p><label for="id_name">Name</label>
<input type="text" name="name" id="id_name" maxlength="200" required value="{name}">{name_errors}</p>
<p><label for="id_description">Description</label>
<textarea name="description" id="id_description">{description}</textarea>{description_errors}</p>
<p><label for="id_quantity">Quantity</label>
<input type="number" name="quantity" id="id_quantity" min="0" required value="{quantity}">{quantity_errors}</p>
<p><label for="id_unit_price">Unit price</label>
<input type="number" name="unit_price" id="id_unit_price" step="0.01" required value="{unit_price}">{unit_price_errors}</p>
<button type="submit">{submit}</button> <a href="{cancel}">Cancel</a>
</form>"#,
        name = Escaped(&form.name),
        description = Escaped(&form.description),
        quantity = Escaped(&form.quantity),
        unit_price = Escaped(&form.unit_price),
        name_errors = error_list(errors.get("name")),
        description_errors = error_list(errors.get("description")),
        quantity_errors = error_list(errors.get("quantity")),
        unit_price_errors = error_list(errors.get("unit_price")),
    );

    layout(&title, &body)
}

pub fn confirm_delete_page(product: &Product) -> Html<String> {
    let body = format!(
        r#"<p>Are you sure you want to delete "{name}"?</p>
<form method="post" action="/product/{id}/delete/">
<button type="submit">Yes, delete</button> <a href="{cancel}">Cancel</a>
</form>"#,
        name = Escaped(&product.name),
        id = product.id,
        cancel = detail_url(product.id),
    );

    layout("Delete product", &body)
}

fn error_list(messages: &[String]) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let items: String = messages
        .iter()
        .map(|m| format!("<li>{}</li>", Escaped(m)))
        .collect();
    format!(r#"<ul class="errorlist">{items}</ul>"#)
}
