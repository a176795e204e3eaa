use super::*;

pub(super) async fn all_series(state: ApiState) -> Result<Response, Infallible> {
    Ok(json_reply(&state.index.series()))
}

pub(super) async fn recommendations(state: ApiState) -> Result<Response, Infallible> {
    let recommendations = state.likes.recommend(state.index.series(), state.config.recommendations).await;
    Ok(json_reply(&recommendations))
}
