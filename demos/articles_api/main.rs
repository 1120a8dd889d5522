//! Articles API example serving JSON:API documents over HTTP
//!
//! ```bash
//! RUST_LOG=jsonapi=debug cargo run --example articles_api
//! curl 'http://127.0.0.1:3000/articles?include=author,tags&per-page=2'
//! curl 'http://127.0.0.1:3000/articles/1?include=author'
//! ```

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use jsonapi::prelude::*;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct Person {
    id: i64,
    name: String,
    email: Option<String>,
}

#[derive(Clone)]
struct Tag {
    slug: String,
    label: String,
}

#[derive(Clone)]
struct Article {
    id: i64,
    title: String,
    body: String,
    published: bool,
    author: Person,
    tags: Vec<Tag>,
    errors: ErrorBag,
}

impl_resource!(Person, kind: "Person", id: id, link: "http://127.0.0.1:3000/people", fields: [name, email]);

impl_resource!(Tag, kind: "Tag", id: slug, link: "http://127.0.0.1:3000/tags", fields: [label]);

impl_resource!(
    Article,
    kind: "Article",
    id: id,
    link: "http://127.0.0.1:3000/articles",
    fields: [title, body, published],
    extra_fields: [author, tags],
    errors: errors,
);

#[derive(Clone)]
struct AppState {
    serializer: Arc<Serializer>,
    articles: Arc<Vec<Article>>,
}

async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<JsonApiQuery>,
) -> Result<JsonApi, JsonApiError> {
    let provider = ArrayDataProvider::new(
        state.articles.as_ref().clone(),
        Some(params.pagination("/articles")),
    );
    state
        .serializer
        .serialize_collection(&provider, params.include())
        .map(JsonApi)
}

async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<JsonApiQuery>,
) -> Result<JsonApi, JsonApiError> {
    let article = match state.articles.iter().find(|article| article.id == id) {
        Some(article) => article.clone(),
        None => {
            let mut missing = state.articles[0].clone();
            missing.id = id;
            missing.errors.add("id", format!("Article {} does not exist", id));
            missing
        }
    };
    state
        .serializer
        .serialize_model(&article, params.include())
        .map(JsonApi)
}

fn seed() -> Vec<Article> {
    let ada = Person {
        id: 1,
        name: "Ada Lovelace".to_string(),
        email: Some("ada@example.com".to_string()),
    };
    let alan = Person {
        id: 2,
        name: "Alan Turing".to_string(),
        email: None,
    };
    let rust = Tag {
        slug: "rust".to_string(),
        label: "Rust".to_string(),
    };
    let api = Tag {
        slug: "api".to_string(),
        label: "API design".to_string(),
    };

    vec![
        Article {
            id: 1,
            title: "Notes on the Analytical Engine".to_string(),
            body: "...".to_string(),
            published: true,
            author: ada.clone(),
            tags: vec![rust.clone()],
            errors: ErrorBag::new(),
        },
        Article {
            id: 2,
            title: "Computing Machinery and Intelligence".to_string(),
            body: "...".to_string(),
            published: true,
            author: alan,
            tags: vec![rust, api.clone()],
            errors: ErrorBag::new(),
        },
        Article {
            id: 3,
            title: "Compound documents".to_string(),
            body: "...".to_string(),
            published: false,
            author: ada,
            tags: vec![api],
            errors: ErrorBag::new(),
        },
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::var("JSONAPI_CONFIG") {
        Ok(path) => SerializerConfig::from_yaml_file(path)?,
        Err(_) => SerializerConfig::default(),
    };

    let state = AppState {
        serializer: Arc::new(Serializer::with_config(config)),
        articles: Arc::new(seed()),
    };

    let app = Router::new()
        .route("/articles", get(list_articles))
        .route("/articles/{id}", get(get_article))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
