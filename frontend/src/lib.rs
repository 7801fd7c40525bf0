pub mod base;
pub mod styles;
pub mod hooks;
pub mod session;
pub mod storage;
pub mod game;
pub mod components;
pub mod pages;
pub mod config;

use crate::pages::{claim::Claim, home::Home};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/claim")] Claim,
    #[at("/claim-big")] ClaimBig,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Claim => html! { <Claim /> },
        Route::ClaimBig => html! { <Claim big={true} /> },
        Route::NotFound => html! { <Home /> },
    }
}
