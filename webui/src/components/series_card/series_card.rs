use crate::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SeriesCardProps {
    pub card: Card,
    pub onlike: Callback<CardId>,
}

pub struct SeriesCardComp {}

impl Component for SeriesCardComp {
    type Message = ();
    type Properties = SeriesCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SeriesCardComp {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let card = &ctx.props().card;
        let series = &card.series;
        let id = card.id;
        let onclick = ctx.props().onlike.reform(move |_: MouseEvent| id);

        let image = match series.image.is_empty() {
            true => html! { <div class="series-image series-image-missing" title={series.image_alt()}></div> },
            false => html! { <img src={series.image.clone()} alt={series.image_alt()} class="series-image" /> },
        };

        html! {
            <div class="series-card">
                {image}
                <div class="series-info">
                    <h2>{series.title.clone()}</h2>
                    <p>{series.description.clone()}</p>
                    <button
                        class={classes!("like-btn", card.liked.then_some("liked"))}
                        data-title={series.title.clone()}
                        {onclick}>
                        {card.label()}
                    </button>
                </div>
            </div>
        }
    }
}

/// Renders cards in order, keyed by id so a new result list never reuses old buttons.
pub fn view_cards(cards: &[Card], onlike: &Callback<CardId>) -> Html {
    cards.iter().map(|card| html! {
        <SeriesCardComp key={card.id.to_string()} card={card.clone()} onlike={onlike.clone()} />
    }).collect()
}
