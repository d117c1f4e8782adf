mod campaign;
mod customers;
mod login;
mod prizes;
mod records;

use yew::prelude::*;

use crate::api;
use crate::components::AlertStack;
use crate::hooks::use_alerts;
use crate::styles;

use campaign::CampaignPanel;
use customers::CustomersPanel;
use login::LoginForm;
use prizes::PrizesPanel;
use records::RecordsPanel;

#[function_component(Admin)]
pub fn admin() -> Html {
    let alerts = use_alerts();
    let logged_in = use_state(api::auth::is_logged_in);

    let on_login = {
        let logged_in = logged_in.clone();
        Callback::from(move |_: ()| logged_in.set(true))
    };

    let on_logout = {
        let alerts = alerts.clone();
        let logged_in = logged_in.clone();
        Callback::from(move |_| {
            api::auth::logout();
            logged_in.set(false);
            alerts.info("Logged out successfully!");
        })
    };

    html! {
        <>
            <AlertStack alerts={alerts.clone()} />

            <div class={styles::CONTAINER_LG}>
                if *logged_in {
                    <div class="flex items-center justify-between mb-6">
                        <h1 class={styles::TEXT_H1}>{"🔐 Admin Dashboard"}</h1>
                        <button onclick={on_logout} class={styles::BUTTON_SECONDARY}>
                            {"Logout"}
                        </button>
                    </div>

                    <div class={styles::ADMIN_GRID}>
                        <CampaignPanel alerts={alerts.clone()} />
                        <PrizesPanel alerts={alerts.clone()} />
                    </div>

                    <div class="mt-6 space-y-6">
                        <CustomersPanel alerts={alerts.clone()} />
                        <RecordsPanel alerts={alerts.clone()} />
                    </div>
                } else {
                    <LoginForm alerts={alerts.clone()} {on_login} />
                }
            </div>
        </>
    }
}
