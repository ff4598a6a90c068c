//! In-process mock of the upstream API for integration tests.
//!
//! Serves the wire JSON shapes from a fixed dataset on an ephemeral port,
//! records every request under a canonical key, and can be told to fail
//! specific keys with HTTP 500. Collection keys look like
//! `"character?page=2&name=Smith"` (page first, extra filters sorted by
//! key); entity keys are the raw path, e.g. `"episode/1,5,9"`.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Handle to a running mock API server.
pub struct MockApi {
    base_url: String,
    state: Arc<MockState>,
}

struct MockState {
    characters: Vec<Value>,
    episodes: Vec<Value>,
    page_size: usize,
    requests: Mutex<Vec<String>>,
    failures: Mutex<HashSet<String>>,
}

impl MockApi {
    /// Serve the given wire-shaped records on an ephemeral local port.
    pub async fn start(characters: Vec<Value>, episodes: Vec<Value>, page_size: usize) -> Self {
        let state = Arc::new(MockState {
            characters,
            episodes,
            page_size,
            requests: Mutex::new(Vec::new()),
            failures: Mutex::new(HashSet::new()),
        });

        let app = Router::new()
            .route("/character", get(character_collection))
            .route("/character/{id}", get(character_by_id))
            .route("/episode", get(episode_collection))
            .route("/episode/{ids}", get(episode_by_ids))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Base URL to hand to `RickAndMortyApi::with_base_url`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make the given canonical request key respond with HTTP 500.
    pub fn fail(&self, key: &str) {
        self.state.failures.lock().unwrap().insert(key.to_string());
    }

    /// Number of requests recorded under the given canonical key.
    pub fn hits(&self, key: &str) -> usize {
        self.state
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|recorded| recorded.as_str() == key)
            .count()
    }

    /// All recorded request keys, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }
}

// ---------------------------------------------------------------------------
// Wire fixtures
// ---------------------------------------------------------------------------

/// A character record in the upstream wire shape.
pub fn character_json(id: u32, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": {
            "name": "Earth (C-137)",
            "url": "https://rickandmortyapi.com/api/location/1"
        },
        "location": {
            "name": "Citadel of Ricks",
            "url": "https://rickandmortyapi.com/api/location/3"
        },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": [
            format!("https://rickandmortyapi.com/api/episode/{id}")
        ],
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

/// An episode record in the upstream wire shape.
pub fn episode_json(id: u32, name: &str, code: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "air_date": "December 2, 2013",
        "episode": code,
        "characters": [
            "https://rickandmortyapi.com/api/character/1",
            "https://rickandmortyapi.com/api/character/2"
        ],
        "url": format!("https://rickandmortyapi.com/api/episode/{id}"),
        "created": "2017-11-10T12:56:33.798Z"
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

impl MockState {
    /// Record the request and return an injected failure if one is set.
    fn admit(&self, key: String) -> Result<(), Response> {
        self.requests.lock().unwrap().push(key.clone());
        if self.failures.lock().unwrap().contains(&key) {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "injected failure"})),
            )
                .into_response());
        }
        Ok(())
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "There is nothing here"})),
    )
        .into_response()
}

/// Canonical key for a collection request: `page` first, remaining
/// parameters sorted by key.
fn collection_key(resource: &str, page: usize, params: &HashMap<String, String>) -> String {
    let mut key = format!("{resource}?page={page}");
    let mut extras: Vec<_> = params.iter().filter(|(k, _)| k.as_str() != "page").collect();
    extras.sort_by(|a, b| a.0.cmp(b.0));
    for (k, v) in extras {
        key.push_str(&format!("&{k}={v}"));
    }
    key
}

/// Serve one page of a filtered item list in the upstream envelope shape.
fn paginate(resource: &str, items: Vec<&Value>, page: usize, page_size: usize) -> Response {
    let total = items.len();
    let pages = total.div_ceil(page_size);
    if page == 0 || page > pages {
        return not_found();
    }

    let start = (page - 1) * page_size;
    let slice: Vec<&Value> = items[start..total.min(start + page_size)].to_vec();
    let next = (page < pages).then(|| format!("/{resource}?page={}", page + 1));
    let prev = (page > 1).then(|| format!("/{resource}?page={}", page - 1));

    Json(json!({
        "info": {
            "count": total,
            "pages": pages,
            "next": next,
            "prev": prev
        },
        "results": slice
    }))
    .into_response()
}

async fn character_by_id(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
) -> Response {
    if let Err(failure) = state.admit(format!("character/{id}")) {
        return failure;
    }
    let Ok(id) = id.parse::<u32>() else {
        return not_found();
    };
    match state.characters.iter().find(|c| c["id"] == id) {
        Some(character) => Json(character.clone()).into_response(),
        None => not_found(),
    }
}

async fn character_collection(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let page = params
        .get("page")
        .and_then(|p| p.parse::<usize>().ok())
        .unwrap_or(1);
    if let Err(failure) = state.admit(collection_key("character", page, &params)) {
        return failure;
    }

    let matches: Vec<&Value> = state
        .characters
        .iter()
        .filter(|c| match params.get("name") {
            Some(name) => c["name"]
                .as_str()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&name.to_lowercase()),
            None => true,
        })
        .collect();
    paginate("character", matches, page, state.page_size)
}

async fn episode_by_ids(
    State(state): State<Arc<MockState>>,
    Path(ids): Path<String>,
) -> Response {
    if let Err(failure) = state.admit(format!("episode/{ids}")) {
        return failure;
    }

    if ids.contains(',') {
        let wanted: Vec<u32> = ids.split(',').filter_map(|id| id.parse().ok()).collect();
        let episodes: Vec<Value> = wanted
            .iter()
            .filter_map(|id| state.episodes.iter().find(|e| e["id"] == *id).cloned())
            .collect();
        return Json(Value::Array(episodes)).into_response();
    }

    let Ok(id) = ids.parse::<u32>() else {
        return not_found();
    };
    match state.episodes.iter().find(|e| e["id"] == id) {
        Some(episode) => Json(episode.clone()).into_response(),
        None => not_found(),
    }
}

async fn episode_collection(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let page = params
        .get("page")
        .and_then(|p| p.parse::<usize>().ok())
        .unwrap_or(1);
    if let Err(failure) = state.admit(collection_key("episode", page, &params)) {
        return failure;
    }
    let items: Vec<&Value> = state.episodes.iter().collect();
    paginate("episode", items, page, state.page_size)
}
