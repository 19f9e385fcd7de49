use mockito::Server;
use recipe_browser::{FetchError, RecipeApi};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn test_list_is_sorted_by_name() {
    init_logging();
    let mut server = Server::new_async().await;

    let body = r#"
    {
        "meals": [
            {"idMeal": "52928", "strMeal": "Treacle Tart", "strMealThumb": "https://example.com/treacle.jpg"},
            {"idMeal": "52893", "strMeal": "Apple Frangipan Tart", "strMealThumb": "https://example.com/apple.jpg"},
            {"idMeal": "52767", "strMeal": "Bakewell Tart", "strMealThumb": "https://example.com/bakewell.jpg"}
        ]
    }
    "#;

    let mock = server
        .mock("GET", "/filter.php?c=Dessert")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();

    let api = RecipeApi::with_base_url(server.url());
    let desserts = api.list_desserts().await.unwrap();

    let names: Vec<&str> = desserts.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Apple Frangipan Tart", "Bakewell Tart", "Treacle Tart"]
    );
    assert_eq!(desserts[0].id, "52893");
    assert_eq!(desserts[0].thumbnail_url, "https://example.com/apple.jpg");
    mock.assert();
}

#[tokio::test]
async fn test_sort_is_stable_for_equal_names() {
    init_logging();
    let mut server = Server::new_async().await;

    // Two entries share a name; they must keep their response order.
    let body = r#"
    {
        "meals": [
            {"idMeal": "2", "strMeal": "Baklava", "strMealThumb": "https://example.com/b2.jpg"},
            {"idMeal": "9", "strMeal": "Apple Pie", "strMealThumb": "https://example.com/a.jpg"},
            {"idMeal": "1", "strMeal": "Baklava", "strMealThumb": "https://example.com/b1.jpg"}
        ]
    }
    "#;

    let _m = server
        .mock("GET", "/filter.php?c=Dessert")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();

    let api = RecipeApi::with_base_url(server.url());
    let desserts = api.list_desserts().await.unwrap();

    let ids: Vec<&str> = desserts.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["9", "2", "1"]);
}

#[tokio::test]
async fn test_sort_is_case_sensitive() {
    init_logging();
    let mut server = Server::new_async().await;

    // Byte-wise ordering puts uppercase before lowercase.
    let body = r#"
    {
        "meals": [
            {"idMeal": "1", "strMeal": "apple crumble", "strMealThumb": "https://example.com/1.jpg"},
            {"idMeal": "2", "strMeal": "Zebra Cake", "strMealThumb": "https://example.com/2.jpg"}
        ]
    }
    "#;

    let _m = server
        .mock("GET", "/filter.php?c=Dessert")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();

    let api = RecipeApi::with_base_url(server.url());
    let desserts = api.list_desserts().await.unwrap();

    let names: Vec<&str> = desserts.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Zebra Cake", "apple crumble"]);
}

#[tokio::test]
async fn test_error_status_is_reported_without_decoding() {
    init_logging();
    let mut server = Server::new_async().await;

    // The body is not JSON; a decode attempt would surface as Decode.
    let _m = server
        .mock("GET", "/filter.php?c=Dessert")
        .with_status(404)
        .with_body("<html>not here</html>")
        .create();

    let api = RecipeApi::with_base_url(server.url());
    let err = api.list_desserts().await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidResponse(404)));
}

#[tokio::test]
async fn test_server_error_status() {
    init_logging();
    let mut server = Server::new_async().await;

    let _m = server
        .mock("GET", "/filter.php?c=Dessert")
        .with_status(500)
        .with_body("internal error")
        .create();

    let api = RecipeApi::with_base_url(server.url());
    let err = api.list_desserts().await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidResponse(500)));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    init_logging();
    let mut server = Server::new_async().await;

    let _m = server
        .mock("GET", "/filter.php?c=Dessert")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create();

    let api = RecipeApi::with_base_url(server.url());
    let err = api.list_desserts().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_null_meals_is_a_decode_error() {
    init_logging();
    let mut server = Server::new_async().await;

    // The live API answers {"meals": null} for categories with no
    // entries; that does not match the expected envelope.
    let _m = server
        .mock("GET", "/filter.php?c=Dessert")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": null}"#)
        .create();

    let api = RecipeApi::with_base_url(server.url());
    let err = api.list_desserts().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    init_logging();
    let server = Server::new_async().await;
    let url = server.url();
    drop(server);

    let api = RecipeApi::with_base_url(url);
    let err = api.list_desserts().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}
