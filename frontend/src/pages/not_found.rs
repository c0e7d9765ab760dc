use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main style="max-width: 40rem; margin: 0 auto; padding: 6rem 1rem; text-align: center;">
            <h1>{"Page not found"}</h1>
            <p>{"The page you are looking for doesn't exist or has moved."}</p>
            <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
        </main>
    }
}
