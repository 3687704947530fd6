use crate::router::{Route, switch};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div style="min-height:100vh; background:#f8fafc; color:#0f172a;">
                <nav style="background:#fff; border-bottom:1px solid #e2e8f0;">
                    <div style="max-width:1024px; margin:0 auto; padding:12px; display:flex; gap:16px;">
                        <Link<Route> to={Route::Dashboard}><span style="font-weight:600;">{ "Dashboard" }</span></Link<Route>>
                        <Link<Route> to={Route::Transactions}>{ "Transactions" }</Link<Route>>
                        <span style="margin-left:auto;"><Link<Route> to={Route::Add}>{ "Add" }</Link<Route>></span>
                    </div>
                </nav>
                <main style="max-width:1024px; margin:0 auto; padding:16px; position:relative;">
                    <Switch<Route> render={switch} />
                </main>
                <Link<Route> to={Route::Add} classes={classes!("fab")}>{ "+" }</Link<Route>>
            </div>
        </BrowserRouter>
    }
}
