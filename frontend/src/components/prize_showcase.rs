use shared::prizes::Prize;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PrizeShowcaseProps {
    pub prizes: Vec<Prize>,
}

#[function_component(PrizeShowcase)]
pub fn prize_showcase(props: &PrizeShowcaseProps) -> Html {
    if props.prizes.is_empty() {
        return html! {};
    }

    html! {
        <div class="grid grid-cols-2 gap-3">
            { for props.prizes.iter().map(|prize| html! {
                <div key={prize.id} class={styles::PRIZE_TILE}>
                    <div class="text-5xl mb-2">{&prize.emoji}</div>
                    <p class="font-bold text-gray-700">{&prize.name}</p>
                </div>
            })}
        </div>
    }
}
