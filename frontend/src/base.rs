use yew::prelude::*;
use yew_router::prelude::*;

use crate::{styles, Route};
use shared::constants::BUSINESS_NAME;

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

/// Shared page shell: brand bar on top, footer below the content.
#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>
                        { format!("{} · Spin & Win", BUSINESS_NAME) }
                    </Link<Route>>
                    <div class="flex items-center space-x-2">
                        <Link<Route> to={Route::Home} classes={styles::NAV_LINK}>{"Play"}</Link<Route>>
                        <Link<Route> to={Route::Admin} classes={styles::NAV_LINK}>{"Admin"}</Link<Route>>
                    </div>
                </div>
            </nav>
            <main>
                { props.children.clone() }
            </main>
            <footer class={styles::FOOTER}>
                <p class={styles::FOOTER_TEXT}>{ format!("© {}", BUSINESS_NAME) }</p>
            </footer>
        </div>
    }
}
