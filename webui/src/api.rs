use crate::prelude::*;
use web_sys::{Request, RequestInit, Response};

const SEARCH_ENDPOINT: &str = "/search";
const LIKE_ENDPOINT: &str = "/like";
const SERIES_ENDPOINT: &str = "/series";
const RECOMMENDATIONS_ENDPOINT: &str = "/recommendations";

#[derive(Debug)]
pub enum ApiError {
    NoWindow,
    InputJson(serde_json::Error),
    OutputJson(serde_json::Error),
    Fetch(JsValue),
    NotText(JsValue),
    BadRequest(String),
    Server(String),
    Unknown(u16, String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::OutputJson(e)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NoWindow => write!(f, "no browser window"),
            ApiError::InputJson(e) => write!(f, "could not serialize request: {e}"),
            ApiError::OutputJson(e) => write!(f, "unexpected response: {e}"),
            ApiError::Fetch(e) => write!(f, "request failed: {e:?}"),
            ApiError::NotText(e) => write!(f, "response isn't text: {e:?}"),
            ApiError::BadRequest(text) => write!(f, "bad request: {text}"),
            ApiError::Server(text) => write!(f, "server error: {text}"),
            ApiError::Unknown(status, text) => write!(f, "unexpected status {status}: {text}"),
        }
    }
}

async fn get<O: DeserializeOwned>(endpoint: &str) -> Result<O, ApiError> {
    api_custom_method::<(), O>(endpoint, "GET", None).await
}

async fn post<I: Serialize, O: DeserializeOwned>(endpoint: &str, body: &I) -> Result<O, ApiError> {
    api_custom_method(endpoint, "POST", Some(body)).await
}

async fn api_custom_method<I: Serialize, O: DeserializeOwned>(endpoint: &str, method: &'static str, body: Option<&I>) -> Result<O, ApiError> {
    use ApiError::*;

    let req_init = RequestInit::new();
    req_init.set_method(method);
    if let Some(body) = body {
        let body = serde_json::to_string(body).map_err(InputJson)?;
        req_init.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(endpoint, &req_init).map_err(Fetch)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json").map_err(Fetch)?;
    }

    let promise = wndw()?.fetch_with_request(&request);
    let response = JsFuture::from(promise).await.map_err(Fetch)?;
    let response: Response = response.dyn_into().map_err(Fetch)?;
    let text = JsFuture::from(response.text().map_err(NotText)?).await.map_err(NotText)?;
    let Some(text) = text.as_string() else {
        return Err(NotText(text));
    };

    match response.status() {
        200 => Ok(serde_json::from_str(&text)?),
        400 => Err(BadRequest(text)),
        500 => Err(Server(text)),
        status => Err(Unknown(status, text)),
    }
}

pub async fn search(query: &str) -> Result<SearchResponse, ApiError> {
    post(SEARCH_ENDPOINT, &SearchRequest { query: query.to_owned() }).await
}

pub async fn like(title: &str) -> Result<LikeResponse, ApiError> {
    post(LIKE_ENDPOINT, &LikeRequest { title: title.to_owned() }).await
}

pub async fn fetch_series() -> Result<Vec<SeriesResult>, ApiError> {
    get(SERIES_ENDPOINT).await
}

pub async fn fetch_recommendations() -> Result<Vec<SeriesResult>, ApiError> {
    get(RECOMMENDATIONS_ENDPOINT).await
}
