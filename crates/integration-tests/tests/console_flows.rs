//! End-to-end console flows over HTTP.
//!
//! Each test starts a fake catalog and a console bound to it, then drives
//! the console the way a browser with htmx would.

use axum::http::Method;
use pkart_integration_tests::{FakeCatalog, browser, spawn_console};
use reqwest::StatusCode;

async fn seeded_catalog() -> FakeCatalog {
    let catalog = FakeCatalog::start().await;
    catalog.add_admin("ops@pkart.in", "K3ttle!", Some("Ops"));
    catalog.add_product("Tea Strainer", 149.0, "/img/strainer.png");
    catalog.add_product("Electric Kettle", 1299.99, "/img/kettle.png");
    catalog.add_product("Masala Chai Tin", 350.5, "/img/tin.png");
    catalog
}

#[tokio::test]
async fn test_form_login_reveals_admin_tabs() {
    let catalog = seeded_catalog().await;
    let console = spawn_console(&catalog).await;
    let client = browser();

    let page = client
        .get(format!("{console}/"))
        .send()
        .await
        .expect("Failed to load shell")
        .text()
        .await
        .expect("Failed to read shell");
    assert!(!page.contains("href=\"/?tab=addProduct\""));

    let response = client
        .post(format!("{console}/auth/login"))
        .form(&[("email", "ops@pkart.in"), ("password", "K3ttle!")])
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(response.status(), StatusCode::OK);

    let page = response.text().await.expect("Failed to read shell");
    assert!(page.contains("href=\"/?tab=home\""));
    assert!(page.contains("href=\"/?tab=addProduct\""));
    assert!(page.contains("href=\"/?tab=updateProduct\""));
    assert!(page.contains("Ops"));
}

#[tokio::test]
async fn test_wrong_password_keeps_tabs_hidden() {
    let catalog = seeded_catalog().await;
    let console = spawn_console(&catalog).await;
    let client = browser();

    let page = client
        .post(format!("{console}/auth/login"))
        .form(&[("email", "ops@pkart.in"), ("password", "k3ttle!")])
        .send()
        .await
        .expect("Failed to submit login")
        .text()
        .await
        .expect("Failed to read shell");

    assert!(page.contains("Admin Login"));
    assert!(!page.contains("href=\"/?tab=home\""));
    assert_eq!(catalog.requests_to(&Method::GET, "/admins").len(), 1);
}

#[tokio::test]
async fn test_list_fragment_follows_sort_selection() {
    let catalog = seeded_catalog().await;
    let console = spawn_console(&catalog).await;
    let client = browser();

    let fragment = client
        .get(format!("{console}/products/list?sort=3"))
        .header("HX-Request", "true")
        .send()
        .await
        .expect("Failed to load list")
        .text()
        .await
        .expect("Failed to read list");

    let strainer = fragment.find("Tea Strainer").expect("Strainer card");
    let tin = fragment.find("Masala Chai Tin").expect("Tin card");
    let kettle = fragment.find("Electric Kettle").expect("Kettle card");
    assert!(strainer < tin && tin < kettle);
    assert!(fragment.contains("Price: 1299.99 /RS"));

    let queries: Vec<_> = catalog
        .requests_to(&Method::GET, "/products")
        .into_iter()
        .filter_map(|r| r.query)
        .collect();
    assert_eq!(queries, ["sort=3"]);
}

#[tokio::test]
async fn test_catalog_failure_shown_in_list() {
    let catalog = seeded_catalog().await;
    catalog.fail_products(503);
    let console = spawn_console(&catalog).await;

    let fragment = browser()
        .get(format!("{console}/products/list"))
        .send()
        .await
        .expect("Failed to load list")
        .text()
        .await
        .expect("Failed to read list");

    assert!(fragment.contains("Request failed with status code 503"));
}

#[tokio::test]
async fn test_delete_removes_card_after_refetch() {
    let catalog = seeded_catalog().await;
    let console = spawn_console(&catalog).await;

    let response = browser()
        .post(format!("{console}/products/2/delete"))
        .header("HX-Request", "true")
        .form(&[("sort", "1"), ("view", "6f1c2a9e-3b4d-4e8f-9a10-2b3c4d5e6f70")])
        .send()
        .await
        .expect("Failed to delete");
    assert_eq!(response.status(), StatusCode::OK);

    let fragment = response.text().await.expect("Failed to read list");
    assert!(!fragment.contains("Electric Kettle"));
    assert!(fragment.contains("Tea Strainer"));
    assert_eq!(catalog.product_names(), ["Tea Strainer", "Masala Chai Tin"]);

    let paths: Vec<_> = catalog
        .requests()
        .into_iter()
        .map(|r| format!("{} {}", r.method, r.path))
        .collect();
    assert_eq!(paths, ["DELETE /api/products/2", "GET /api/products"]);
}

#[tokio::test]
async fn test_add_product_through_editor() {
    let catalog = seeded_catalog().await;
    let console = spawn_console(&catalog).await;
    let client = browser();

    client
        .post(format!("{console}/auth/login"))
        .form(&[("email", "ops@pkart.in"), ("password", "K3ttle!")])
        .send()
        .await
        .expect("Failed to log in");

    let page = client
        .post(format!("{console}/products"))
        .form(&[
            ("product_name", "Brass Lota"),
            ("price", "899"),
            ("image_url", "/img/lota.png"),
        ])
        .send()
        .await
        .expect("Failed to add product")
        .text()
        .await
        .expect("Failed to read page");

    assert!(page.contains("Product added."));
    assert!(catalog.product_names().contains(&"Brass Lota".to_string()));
}

#[tokio::test]
async fn test_editor_requires_login() {
    let catalog = seeded_catalog().await;
    let console = spawn_console(&catalog).await;

    let page = browser()
        .post(format!("{console}/products"))
        .form(&[
            ("product_name", "Brass Lota"),
            ("price", "899"),
            ("image_url", "/img/lota.png"),
        ])
        .send()
        .await
        .expect("Failed to submit")
        .text()
        .await
        .expect("Failed to read page");

    assert!(page.contains("Admin Login"));
    assert!(catalog.requests_to(&Method::POST, "/products").is_empty());
}
