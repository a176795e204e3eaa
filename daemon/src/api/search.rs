use super::*;

pub(super) async fn search((body, state): (SearchRequest, ApiState)) -> Result<Response, Infallible> {
    let query = body.query.trim();
    if query.is_empty() {
        debug!("Rejected empty query");
        return Ok(json_reply(&SearchResponse::error(EMPTY_QUERY_ERROR)));
    }

    let results = state.index
        .search(query, state.config.result_limit)
        .into_iter()
        .map(|(serie, _)| serie.clone())
        .collect::<Vec<_>>();
    info!("Search {query:?} returned {} series", results.len());

    Ok(json_reply(&SearchResponse::results(results)))
}
