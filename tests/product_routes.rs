// tests/product_routes.rs
mod common;

use common::*;
use http::StatusCode;
use product_inventory::store::ProductStore;

#[tokio::test]
async fn empty_list_shows_placeholder() {
    let app = TestApp::new();
    let res = app.get("/").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("No products yet."));
    assert!(res.body.contains(r#"href="/product/new/""#));
}

#[tokio::test]
async fn list_shows_products_in_creation_order() {
    let app = TestApp::new();
    app.seed("Zebra", 1, "1.00").await;
    app.seed("Apple", 2, "2.00").await;

    let res = app.get("/").await;
    assert_eq!(res.status, StatusCode::OK);
    let zebra = res.body.find("Zebra").unwrap();
    let apple = res.body.find("Apple").unwrap();
    assert!(zebra < apple);
    assert!(!res.body.contains("No products yet."));
}

#[tokio::test]
async fn create_redirects_to_detail_page() {
    let app = TestApp::new();
    let res = app.post_form("/product/new/", &widget_form("5", "9.99")).await;

    assert_eq!(res.status, StatusCode::FOUND);
    let location = res.location.expect("redirect location");
    let products = app.store.list().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(location, format!("/product/{}/", products[0].id));

    let detail = app.get(&location).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("<dd>5</dd>"));
    assert!(detail.body.contains("<dd>9.99</dd>"));
    assert!(detail.body.contains("Widget"));
}

#[tokio::test]
async fn created_records_keep_submitted_values_and_get_unique_ids() {
    let app = TestApp::new();
    app.post_form("/product/new/", &widget_form("0", "5")).await;
    app.post_form("/product/new/", &widget_form("12", "0.50")).await;

    let products = app.store.list().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_ne!(products[0].id, products[1].id);
    assert_eq!(products[0].quantity, 0);
    assert_eq!(products[0].unit_price.to_string(), "5.00");
    assert_eq!(products[1].quantity, 12);
    assert_eq!(products[1].unit_price.to_string(), "0.50");
    assert!(products[0].updated_at >= products[0].created_at);
}

#[tokio::test]
async fn negative_quantity_rerenders_form_without_creating() {
    let app = TestApp::new();
    let res = app.post_form("/product/new/", &widget_form("-3", "9.99")).await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.location.is_none());
    assert!(res.body.contains("Ensure this value is greater than or equal to 0."));
    // Submitted values are echoed back.
    assert!(res.body.contains(r#"value="-3""#));
    assert!(res.body.contains(r#"value="Widget""#));
    assert!(app.store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_fields_are_reported_not_rejected() {
    let app = TestApp::new();
    let res = app.post_form("/product/new/", "name=").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.matches("This field is required.").count(), 3);
    assert!(app.store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn new_form_is_empty_with_create_label() {
    let app = TestApp::new();
    let res = app.get("/product/new/").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("New product"));
    assert!(res.body.contains(r#"action="/product/new/""#));
    assert!(res.body.contains(">Create</button>"));
    assert!(res.body.contains(r#"name="quantity" id="id_quantity" min="0" required value="0""#));
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = TestApp::new();
    for uri in [
        "/product/999/",
        "/product/999/edit/",
        "/product/999/delete/",
        "/product/abc/",
    ] {
        let res = app.get(uri).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND, "GET {uri}");
    }

    let res = app.post_form("/product/999/edit/", &widget_form("1", "1")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    let res = app.post_form("/product/999/delete/", "").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_form_is_prefilled() {
    let app = TestApp::new();
    let product = app.seed("Widget", 5, "9.99").await;

    let res = app.get(&format!("/product/{}/edit/", product.id)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Edit Widget"));
    assert!(res.body.contains(">Save</button>"));
    assert!(res.body.contains(&format!(r#"action="/product/{}/edit/""#, product.id)));
    assert!(res.body.contains(r#"value="9.99""#));
}

#[tokio::test]
async fn edit_updates_and_redirects() {
    let app = TestApp::new();
    let product = app.seed("Widget", 5, "9.99").await;

    let res = app
        .post_form(
            &format!("/product/{}/edit/", product.id),
            "name=Gadget&description=Now+in+blue&quantity=8&unit_price=12.50",
        )
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(res.location.as_deref(), Some(format!("/product/{}/", product.id).as_str()));

    let updated = app.store.get(product.id).await.unwrap();
    assert_eq!(updated.name, "Gadget");
    assert_eq!(updated.description, "Now in blue");
    assert_eq!(updated.quantity, 8);
    assert_eq!(updated.created_at, product.created_at);
    assert!(updated.updated_at >= product.updated_at);
}

#[tokio::test]
async fn invalid_edit_keeps_row_unchanged() {
    let app = TestApp::new();
    let product = app.seed("Widget", 5, "9.99").await;

    let res = app
        .post_form(
            &format!("/product/{}/edit/", product.id),
            &widget_form("many", "9.99"),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Enter a whole number."));
    assert!(res.body.contains("Edit Widget"));
    assert_eq!(app.store.get(product.id).await.unwrap(), product);
}

#[tokio::test]
async fn delete_requires_confirmation_then_removes_row() {
    let app = TestApp::new();
    let product = app.seed("Widget", 5, "9.99").await;
    let uri = format!("/product/{}/delete/", product.id);

    let confirm = app.get(&uri).await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert!(confirm.body.contains("Are you sure you want to delete"));
    assert!(confirm.body.contains(r#"method="post""#));
    // Still there until the POST.
    assert!(app.store.get(product.id).await.is_ok());

    let res = app.post_form(&uri, "").await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(res.location.as_deref(), Some("/"));

    let list = app.get("/").await;
    assert!(!list.body.contains(&format!("/product/{}/", product.id)));

    let again = app.post_form(&uri, "").await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stored_markup_is_escaped() {
    let app = TestApp::new();
    let product = app.seed("<script>alert(1)</script>", 1, "1.00").await;

    for uri in ["/".to_string(), format!("/product/{}/", product.id)] {
        let res = app.get(&uri).await;
        assert!(!res.body.contains("<script>"), "{uri}");
        assert!(res.body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"), "{uri}");
    }
}

#[tokio::test]
async fn favicon_is_empty_no_content() {
    let app = TestApp::new();
    let res = app.get("/favicon.ico").await;

    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.body.is_empty());
}

#[tokio::test]
async fn health_check_responds_ok() {
    let app = TestApp::new();
    let res = app.get("/health").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, "OK");
}

#[tokio::test]
async fn undecodable_bytes_are_replaced_not_rejected() {
    let app = TestApp::new();
    let res = app
        .post_form("/product/new/", "name=%FF&quantity=1&unit_price=1")
        .await;

    assert_eq!(res.status, StatusCode::FOUND);
    let products = app.store.list().await.unwrap();
    assert_eq!(products[0].name, "\u{FFFD}");
}

#[tokio::test]
async fn repeated_fields_keep_the_last_value() {
    let app = TestApp::new();
    let res = app
        .post_form("/product/new/", "name=First&name=Second&quantity=1&unit_price=1")
        .await;

    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(app.store.list().await.unwrap()[0].name, "Second");
}

#[tokio::test]
async fn null_characters_rerender_form() {
    let app = TestApp::new();
    let res = app
        .post_form("/product/new/", "name=a%00b&quantity=1&unit_price=1")
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Null characters are not allowed."));
    assert!(app.store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn overly_precise_price_is_rejected() {
    let app = TestApp::new();
    let res = app
        .post_form(
            "/product/new/",
            &widget_form("1", "9.99000000000000000000000000001"),
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Ensure that there are no more than 10 digits in total."));
    assert!(app.store.list().await.unwrap().is_empty());
}
