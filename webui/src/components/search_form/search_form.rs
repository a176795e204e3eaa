use crate::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchFormProps {
    pub onsearch: Callback<String>,
}

pub enum SearchFormMsg {
    Submit,
}

pub struct SearchForm {
    input: NodeRef,
}

impl Component for SearchForm {
    type Message = SearchFormMsg;
    type Properties = SearchFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SearchForm {
            input: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SearchFormMsg::Submit => {
                let Some(input) = self.input.cast::<HtmlInputElement>() else {
                    log!("search input is not mounted");
                    return false;
                };
                ctx.props().onsearch.emit(input.value());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            SearchFormMsg::Submit
        });

        html! {
            <form id="search-form" {onsubmit}>
                <input ref={self.input.clone()} type="text" name="query" placeholder="Rechercher une série..." />
                <button type="submit">{"Rechercher"}</button>
            </form>
        }
    }
}
