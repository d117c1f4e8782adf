use gloo_timers::callback::Timeout;
use rand::Rng;
use yew::prelude::*;

const CONFETTI_PIECES: usize = 50;
const CONFETTI_LIFETIME_MS: u32 = 5_000;
const CONFETTI_COLORS: [&str; 6] = [
    "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff",
];

const CONFETTI_CSS: &str = r#"
.confetti-piece {
    position: fixed;
    top: -10px;
    width: 10px;
    height: 10px;
    z-index: 9999;
    pointer-events: none;
    animation-name: confetti-fall;
    animation-timing-function: linear;
    animation-fill-mode: forwards;
}

@keyframes confetti-fall {
    0% {
        transform: translateY(0) rotate(0deg);
        opacity: 1;
    }
    100% {
        transform: translateY(100vh) rotate(720deg);
        opacity: 0;
    }
}
"#;

#[derive(Clone, PartialEq)]
struct Piece {
    left: f64,
    color: &'static str,
    delay: f64,
    duration: f64,
}

/// Celebration burst shown over the prize result. Pieces rain once and
/// the whole layer removes itself after five seconds.
#[function_component(Confetti)]
pub fn confetti() -> Html {
    let visible = use_state(|| true);
    let pieces = use_state(|| {
        let mut rng = rand::thread_rng();
        (0..CONFETTI_PIECES)
            .map(|_| Piece {
                left: rng.gen_range(0.0..100.0),
                color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
                delay: rng.gen_range(0.0..2.0),
                duration: rng.gen_range(2.0..5.0),
            })
            .collect::<Vec<_>>()
    });

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window().unwrap().document().unwrap();
            let style_element = document.create_element("style").unwrap();
            style_element.set_text_content(Some(CONFETTI_CSS));
            document.head().unwrap().append_child(&style_element).unwrap();

            let hide = Timeout::new(CONFETTI_LIFETIME_MS, move || visible.set(false));

            move || {
                drop(hide);
                style_element.remove();
            }
        });
    }

    if !*visible {
        return html! {};
    }

    html! {
        <div aria-hidden="true">
            { for pieces.iter().map(|piece| {
                let style = format!(
                    "left: {:.2}%; background-color: {}; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                    piece.left, piece.color, piece.delay, piece.duration,
                );
                html! { <div class="confetti-piece" style={style}></div> }
            })}
        </div>
    }
}
