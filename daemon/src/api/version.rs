use super::*;

pub const API_VERSION: u64 = 0;

pub(super) async fn version() -> Result<Response, Infallible> {
    Ok(json_reply(&VersionResponse { version: API_VERSION }))
}
