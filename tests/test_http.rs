use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::header::CONTENT_TYPE;
use axum_test::TestServer;
use recipe_generator::config::ProviderConfig;
use recipe_generator::providers::GoogleProvider;
use recipe_generator::{router, AppState, Catalog, GeneratorError, RecipeGenerator};

/// Records every prompt and replies with a canned result
struct FakeGenerator {
    prompts: Mutex<Vec<String>>,
    reply: Result<String, String>,
}

impl FakeGenerator {
    fn ok(recipe: &str) -> Arc<Self> {
        Arc::new(FakeGenerator {
            prompts: Mutex::new(Vec::new()),
            reply: Ok(recipe.to_string()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(FakeGenerator {
            prompts: Mutex::new(Vec::new()),
            reply: Err(message.to_string()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeGenerator for FakeGenerator {
    fn provider_name(&self) -> &str {
        "fake"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .map_err(GeneratorError::MalformedResponse)
    }
}

fn test_server(generator: Arc<dyn RecipeGenerator>) -> TestServer {
    TestServer::new(router(AppState::new(Catalog::default(), generator))).unwrap()
}

async fn post_form(server: &TestServer, body: &str) -> axum_test::TestResponse {
    server
        .post("/generate_recipe")
        .bytes(body.to_string().into())
        .content_type("application/x-www-form-urlencoded")
        .await
}

#[tokio::test]
async fn test_index_renders_form() {
    let server = test_server(FakeGenerator::ok("unused"));

    let response = server.get("/").await;
    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("<form action=\"/generate_recipe\" method=\"post\">"));
    assert!(page.contains("<option value=\"Mediterranean\">Mediterranean</option>"));
    assert!(page.contains("value=\"Dairy-Free\""));
    assert!(page.contains("<option value=\"ko\">Korean</option>"));
}

#[tokio::test]
async fn test_greek_chicken_scenario() {
    let generator = FakeGenerator::ok("<h1>Lemon Chicken Rice</h1>");
    let server = test_server(generator.clone());

    let response = post_form(
        &server,
        "ingredient=chicken&ingredient=rice&ingredient=lemon&cuisine=Greek&restrictions=Gluten-Free&language=en",
    )
    .await;

    response.assert_status_ok();
    assert!(response.text().contains("<h1>Lemon Chicken Rice</h1>"));

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    let prompt = &prompts[0];
    assert!(prompt.starts_with("Write the following recipe in English.\n"));
    assert!(prompt.contains("chicken, rice, lemon"));
    assert!(prompt.contains("The cuisine should be Greek."));
    assert!(prompt.contains("Please follow these dietary restrictions: Gluten-Free."));
}

#[tokio::test]
async fn test_wrong_ingredient_count_skips_generation() {
    let generator = FakeGenerator::ok("unused");
    let server = test_server(generator.clone());

    for body in [
        "language=en",
        "ingredient=egg&ingredient=flour&language=en",
        "ingredient=a&ingredient=b&ingredient=c&ingredient=d&language=en",
    ] {
        let response = post_form(&server, body).await;
        response.assert_status_ok();
        assert_eq!(response.text(), "Kindly provide exactly 3 ingredients.");
        let content_type = response.header(CONTENT_TYPE);
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    }

    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn test_optional_fields_omitted() {
    let generator = FakeGenerator::ok("<p>ok</p>");
    let server = test_server(generator.clone());

    let response = post_form(
        &server,
        "ingredient=egg&ingredient=flour&ingredient=milk&cuisine=&language=xx",
    )
    .await;
    response.assert_status_ok();

    let prompt = &generator.prompts()[0];
    assert!(prompt.starts_with("Write the following recipe in xx.\n"));
    assert!(!prompt.contains("The cuisine should be"));
    assert!(!prompt.contains("dietary restrictions"));
}

#[tokio::test]
async fn test_restrictions_keep_submission_order() {
    let generator = FakeGenerator::ok("<p>ok</p>");
    let server = test_server(generator.clone());

    post_form(
        &server,
        "ingredient=tofu&ingredient=rice&ingredient=kale&restrictions=Vegan&restrictions=Nut-Free&language=fr",
    )
    .await
    .assert_status_ok();

    let prompt = &generator.prompts()[0];
    assert!(prompt.starts_with("Write the following recipe in French.\n"));
    assert!(prompt.ends_with("Please follow these dietary restrictions: Vegan, Nut-Free."));
}

#[tokio::test]
async fn test_generation_failure_is_soft() {
    let server = test_server(FakeGenerator::failing("quota exceeded"));

    let response = post_form(
        &server,
        "ingredient=egg&ingredient=flour&ingredient=milk&language=en",
    )
    .await;

    response.assert_status_ok();
    assert!(response
        .text()
        .contains("Error generating recipe: Malformed response: quota exceeded"));
}

#[tokio::test]
async fn test_gemini_api_error_renders_in_page() {
    let mut gemini = mockito::Server::new_async().await;
    let mock = gemini
        .mock("POST", mockito::Matcher::Any)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"code": 400, "message": "API key not valid"}}"#)
        .create_async()
        .await;

    let provider = GoogleProvider::new(&ProviderConfig {
        api_key: Some("bad-key".to_string()),
        base_url: gemini.url(),
        ..ProviderConfig::default()
    });
    let server = test_server(Arc::new(provider));

    let response = post_form(
        &server,
        "ingredient=egg&ingredient=flour&ingredient=milk&language=en",
    )
    .await;

    response.assert_status_ok();
    assert!(response
        .text()
        .contains("Error generating recipe: API error (400): API key not valid"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_repeated_single_fields_keep_first_value() {
    let generator = FakeGenerator::ok("<p>ok</p>");
    let server = test_server(generator.clone());

    post_form(
        &server,
        "ingredient=egg&ingredient=flour&ingredient=milk&cuisine=Greek&cuisine=Thai&language=fr&language=de",
    )
    .await
    .assert_status_ok();

    let prompt = &generator.prompts()[0];
    assert!(prompt.starts_with("Write the following recipe in French.\n"));
    assert!(prompt.contains("The cuisine should be Greek."));
    assert!(!prompt.contains("Thai"));
}

#[tokio::test]
async fn test_connection_failure_does_not_leak_api_key() {
    let provider = GoogleProvider::new(&ProviderConfig {
        api_key: Some("SECRET-KEY-123".to_string()),
        base_url: "http://127.0.0.1:1".to_string(),
        ..ProviderConfig::default()
    });
    let server = test_server(Arc::new(provider));

    let response = post_form(
        &server,
        "ingredient=egg&ingredient=flour&ingredient=milk&language=en",
    )
    .await;

    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Error generating recipe: Request failed"));
    assert!(!page.contains("SECRET-KEY-123"));
}
