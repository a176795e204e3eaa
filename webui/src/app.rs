use crate::prelude::*;

pub enum AppMsg {
    CatalogLoaded(Vec<SeriesResult>),
    RecommendationsLoaded(Vec<SeriesResult>),
    LoadFailure(&'static str, ApiError),

    Search(String),
    SearchSuccess(SearchResponse),
    SearchFailure(ApiError),

    Like(CardId),
    LikeSuccess(CardId, LikeResponse),
    LikeFailure(CardId, ApiError),
}

pub struct App {
    state: UiState,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match fetch_series().await {
                Ok(series) => link.send_message(AppMsg::CatalogLoaded(series)),
                Err(e) => link.send_message(AppMsg::LoadFailure("catalog", e)),
            }
        });

        let link = ctx.link().clone();
        spawn_local(async move {
            match fetch_recommendations().await {
                Ok(series) => link.send_message(AppMsg::RecommendationsLoaded(series)),
                Err(e) => link.send_message(AppMsg::LoadFailure("recommendations", e)),
            }
        });

        Self {
            state: UiState::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::CatalogLoaded(series) => self.state.show_catalog(series),
            AppMsg::RecommendationsLoaded(series) => {
                self.state.set_recommendations(series);
                true
            }
            AppMsg::LoadFailure(what, e) => {
                log!("failed to load {what}: {e}");
                false
            }

            AppMsg::Search(query) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match search(&query).await {
                        Ok(response) => link.send_message(AppMsg::SearchSuccess(response)),
                        Err(e) => link.send_message(AppMsg::SearchFailure(e)),
                    }
                });
                false
            }
            AppMsg::SearchSuccess(response) => match self.state.apply_search_response(response) {
                SearchOutcome::Replaced => true,
                SearchOutcome::Rejected(error) => {
                    notify_user(&error);
                    false
                }
            },
            AppMsg::SearchFailure(e) => {
                log!("search failure: {e}");
                self.state.apply_search_failure();
                true
            }

            AppMsg::Like(id) => {
                let Some(title) = self.state.like_target(id) else {
                    return false;
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match like(&title).await {
                        Ok(response) => link.send_message(AppMsg::LikeSuccess(id, response)),
                        Err(e) => link.send_message(AppMsg::LikeFailure(id, e)),
                    }
                });
                false
            }
            AppMsg::LikeSuccess(id, response) => {
                let changed = self.state.apply_like_response(id, response);
                if !response.success {
                    log!("like of {id} was not recorded");
                }
                changed
            }
            AppMsg::LikeFailure(id, e) => {
                log!("like failure for {id}: {e}");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsearch = ctx.link().callback(AppMsg::Search);
        let onlike = ctx.link().callback(AppMsg::Like);

        html! {
            <Page state={self.state.clone()} {onsearch} {onlike} />
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub state: UiState,
    pub onsearch: Callback<String>,
    pub onlike: Callback<CardId>,
}

/// The whole page, drawn from a [UiState] only.
pub struct Page {}

impl Component for Page {
    type Message = ();
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Page {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let PageProps { state, onsearch, onlike } = ctx.props();
        let onsearch = onsearch.clone();

        html! {
            <>
                <header>
                    <h1>{"Séries"}</h1>
                    <SearchForm {onsearch} />
                    if let Some(status) = state.status() {
                        <p class="search-status">{status.to_owned()}</p>
                    }
                </header>
                if state.recommendations_visible() {
                    <section id="recommendations">
                        <h2>{"Recommandations"}</h2>
                        <div class="series-container">
                            {view_cards(state.recommendations(), onlike)}
                        </div>
                    </section>
                }
                <section id="all-series">
                    <div class="series-container">
                        {view_cards(state.cards(), onlike)}
                    </div>
                </section>
            </>
        }
    }
}
