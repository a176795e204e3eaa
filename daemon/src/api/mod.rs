use crate::prelude::*;
use std::convert::Infallible;
use warp::{Filter, Rejection, reply::{Reply, Response}};

mod search;
mod like;
mod series;
mod version;
use {
    search::*,
    like::*,
    series::*,
    version::*,
};

/// Largest request body accepted by the JSON endpoints.
const BODY_LIMIT: u64 = 16 * 1024;

/// Everything request handlers need, cheap to clone into each route.
#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<Args>,
    pub index: Arc<SeriesIndex>,
    pub likes: Arc<LikeTable>,
}

fn json_reply<T: Serialize>(value: &T) -> Response {
    warp::reply::json(value).into_response()
}

pub fn api_routes(state: ApiState) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let state2 = state.clone();
    let search = warp::path("search")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(BODY_LIMIT))
        .and(warp::body::json::<SearchRequest>())
        .map(move |body: SearchRequest| (body, state2.clone()))
        .and_then(search);

    let state2 = state.clone();
    let like = warp::path("like")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(BODY_LIMIT))
        .and(warp::body::json::<LikeRequest>())
        .map(move |body: LikeRequest| (body, state2.clone()))
        .and_then(like);

    let state2 = state.clone();
    let all_series = warp::path("series")
        .and(warp::path::end())
        .and(warp::get())
        .map(move || state2.clone())
        .and_then(all_series);

    let recommendations = warp::path("recommendations")
        .and(warp::path::end())
        .and(warp::get())
        .map(move || state.clone())
        .and_then(recommendations);

    let version = warp::path("version")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(version);

    search
        .or(like).unify()
        .or(all_series).unify()
        .or(recommendations).unify()
        .or(version).unify()
}

fn cors(config: &Args) -> warp::cors::Builder {
    warp::cors()
        .allow_origins(config.allow_origins.iter().map(String::as_str))
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"])
}

pub async fn serve_api(config: Arc<Args>, index: Arc<SeriesIndex>, likes: Arc<LikeTable>) {
    let state = ApiState { config: Arc::clone(&config), index, likes };

    let mut routes = api_routes(state).boxed();
    if let Some(webui_dir) = &config.webui_dir {
        info!("Serving web UI from {webui_dir:?}");
        let webui = warp::get()
            .and(warp::fs::dir(webui_dir.clone()))
            .map(|file: warp::filters::fs::File| file.into_response());
        routes = routes.or(webui).unify().boxed();
    }

    info!("API listening on http://{}", config.api_addr);
    if config.allow_origins.is_empty() {
        warp::serve(routes).run(config.api_addr).await;
    } else {
        warp::serve(routes.with(cors(&config))).run(config.api_addr).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warp::http::StatusCode;

    fn state() -> ApiState {
        let catalog = vec![
            SeriesResult::new("Show A", "Funny", "/a.png"),
            SeriesResult::new("Show B", "A dark drama", "/b.png"),
            SeriesResult::new("Show C", "Another comedy, funny too", "/c.png"),
        ];
        ApiState {
            config: Arc::new(Args { result_limit: 2, recommendations: 2, ..Args::default() }),
            index: Arc::new(SeriesIndex::new(catalog)),
            likes: Arc::new(LikeTable::new()),
        }
    }

    async fn post<T: Serialize>(state: &ApiState, path: &str, body: &T) -> (StatusCode, serde_json::Value) {
        let rep = warp::test::request()
            .method("POST")
            .path(path)
            .json(body)
            .reply(&api_routes(state.clone()))
            .await;
        let value = serde_json::from_slice(rep.body()).unwrap_or(serde_json::Value::Null);
        (rep.status(), value)
    }

    async fn get(state: &ApiState, path: &str) -> (StatusCode, serde_json::Value) {
        let rep = warp::test::request()
            .method("GET")
            .path(path)
            .reply(&api_routes(state.clone()))
            .await;
        let value = serde_json::from_slice(rep.body()).unwrap_or(serde_json::Value::Null);
        (rep.status(), value)
    }

    #[tokio::test]
    async fn empty_query_is_an_error() {
        let state = state();
        for query in ["", "   "] {
            let (status, body) = post(&state, "/search", &SearchRequest { query: query.to_string() }).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(serde_json::from_value::<SearchResponse>(body).unwrap(), SearchResponse::error(EMPTY_QUERY_ERROR));
        }
    }

    #[tokio::test]
    async fn search_results() {
        let state = state();
        let (status, body) = post(&state, "/search", &SearchRequest { query: String::from("funny") }).await;
        assert_eq!(status, StatusCode::OK);
        let SearchResponse::Results { results } = serde_json::from_value::<SearchResponse>(body).unwrap() else { panic!("expected results") };
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], SeriesResult::new("Show A", "Funny", "/a.png"));

        let (_, body) = post(&state, "/search", &SearchRequest { query: String::from("western") }).await;
        assert_eq!(serde_json::from_value::<SearchResponse>(body).unwrap(), SearchResponse::results(Vec::new()));
    }

    #[tokio::test]
    async fn malformed_body() {
        let rep = warp::test::request()
            .method("POST")
            .path("/search")
            .header("content-type", "application/json")
            .body("{\"q\": 1}")
            .reply(&api_routes(state()))
            .await;
        assert_eq!(rep.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn like_known_and_unknown() {
        let state = state();
        let (_, body) = post(&state, "/like", &LikeRequest { title: String::from("Show B") }).await;
        assert_eq!(serde_json::from_value::<LikeResponse>(body).unwrap(), LikeResponse { success: true });
        assert_eq!(state.likes.count("Show B").await, 1);

        let (_, body) = post(&state, "/like", &LikeRequest { title: String::from("Show Z") }).await;
        assert_eq!(serde_json::from_value::<LikeResponse>(body).unwrap(), LikeResponse { success: false });
        assert_eq!(state.likes.count("Show Z").await, 0);
    }

    #[tokio::test]
    async fn recommendations_and_catalog() {
        let state = state();
        let (_, body) = get(&state, "/series").await;
        assert_eq!(serde_json::from_value::<Vec<SeriesResult>>(body).unwrap().len(), 3);

        post(&state, "/like", &LikeRequest { title: String::from("Show C") }).await;
        let (status, body) = get(&state, "/recommendations").await;
        assert_eq!(status, StatusCode::OK);
        let titles = serde_json::from_value::<Vec<SeriesResult>>(body).unwrap().into_iter().map(|s| s.title).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Show C", "Show A"]);
    }

    #[tokio::test]
    async fn version_and_unknown_paths() {
        let state = state();
        let (status, body) = get(&state, "/version").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_value::<VersionResponse>(body).unwrap(), VersionResponse { version: API_VERSION });

        let (status, _) = get(&state, "/search").await;
        assert_ne!(status, StatusCode::OK);
        let (status, _) = get(&state, "/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
