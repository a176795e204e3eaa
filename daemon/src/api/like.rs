use super::*;

pub(super) async fn like((body, state): (LikeRequest, ApiState)) -> Result<Response, Infallible> {
    if !state.index.contains_title(&body.title) {
        warn!("Like for unknown series {:?}", body.title);
        return Ok(json_reply(&LikeResponse { success: false }));
    }

    let count = state.likes.like(&body.title).await;
    info!("{:?} now has {count} like(s)", body.title);
    Ok(json_reply(&LikeResponse { success: true }))
}
