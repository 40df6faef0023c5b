use yew::prelude::*;
use gloo_timers::callback::Interval;

const ROTATE_EVERY_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
pub struct TelemetryCard {
    pub id: u32,
    pub label: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
    pub status: &'static str,
    pub accent: &'static str,
}

/// Mock telemetry deck, front card first.
pub fn telemetry_cards() -> Vec<TelemetryCard> {
    vec![
        TelemetryCard {
            id: 1,
            label: "Epigenetic Age",
            value: "32.4",
            unit: "yrs",
            status: "Optimal",
            accent: "accent-moss",
        },
        TelemetryCard {
            id: 2,
            label: "Microbiome Diversity",
            value: "94",
            unit: "score",
            status: "Analyzing",
            accent: "accent-clay",
        },
        TelemetryCard {
            id: 3,
            label: "Cortisol Optimization",
            value: "Aligned",
            unit: "",
            status: "Stable",
            accent: "accent-blue",
        },
    ]
}

/// Stacked presentation for the card at `index`, front card at 0: each layer
/// back sits lower, smaller, fainter and behind the one before it.
pub fn layer_style(index: usize) -> String {
    let translate_y = index as f64 * 20.0;
    let scale = 1.0 - index as f64 * 0.05;
    let opacity = 1.0 - index as f64 * 0.2;
    let z_index = 30 - index as i32;
    format!(
        "transform: translateY({translate_y}px) scale({scale}); z-index: {z_index}; opacity: {opacity};"
    )
}

/// Auto-rotating stack of telemetry cards: every three seconds the front
/// card slides to the back of the deck.
#[function_component(DiagnosticShuffler)]
pub fn diagnostic_shuffler() -> Html {
    let cards = use_state(telemetry_cards);

    {
        let cards = cards.clone();
        use_effect_with_deps(
            move |_| {
                let mut deck = (*cards).clone();
                let interval = Interval::new(ROTATE_EVERY_MS, move || {
                    deck.rotate_left(1);
                    cards.set(deck.clone());
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="shuffler">
            <style>
                {SHUFFLER_CSS}
            </style>
            { for cards.iter().enumerate().map(|(index, card)| {
                let is_front = index == 0;
                html! {
                    <div key={card.id} class="shuffler-card" style={layer_style(index)}>
                        <div class="shuffler-card-top">
                            <span class="shuffler-tag">{ format!("Telemetry // 0{}", card.id) }</span>
                            <span class={classes!("shuffler-pip", is_front.then(|| card.accent))}>{"◉"}</span>
                        </div>
                        <div>
                            <div class="shuffler-label">{ card.label }</div>
                            <div class="shuffler-value-row">
                                <span class={classes!("shuffler-value", card.accent)}>{ card.value }</span>
                                <span class="shuffler-unit">{ card.unit }</span>
                            </div>
                        </div>
                        <div class="shuffler-status-row">
                            <div class={classes!("shuffler-dot", is_front.then(|| "live"))}></div>
                            <span class="shuffler-status">{ card.status }</span>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

const SHUFFLER_CSS: &str = r#"
    .shuffler {
        position: relative;
        height: 16rem;
        width: 100%;
        display: flex;
        justify-content: center;
        align-items: center;
        perspective: 1000px;
    }
    .shuffler-card {
        position: absolute;
        width: 100%;
        max-width: 280px;
        height: 12rem;
        background: #fff;
        border-radius: 2rem;
        border: 1px solid rgba(0, 0, 0, 0.05);
        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
        padding: 1.5rem;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        transition: all 0.7s cubic-bezier(0.34, 1.56, 0.64, 1);
    }
    .shuffler-card-top {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
    }
    .shuffler-tag {
        font-family: 'JetBrains Mono', monospace;
        font-size: 10px;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        color: rgba(0, 0, 0, 0.4);
    }
    .shuffler-pip {
        font-size: 0.8rem;
        color: rgba(0, 0, 0, 0.2);
        transition: color 0.5s;
    }
    .shuffler-label {
        font-size: 0.875rem;
        font-weight: 600;
        color: #1A1A1A;
        margin-bottom: 0.25rem;
    }
    .shuffler-value-row {
        display: flex;
        align-items: baseline;
        gap: 0.25rem;
    }
    .shuffler-value {
        font-family: 'Outfit', sans-serif;
        font-size: 1.875rem;
        font-weight: 300;
        transition: color 0.5s;
    }
    .shuffler-unit {
        font-family: 'JetBrains Mono', monospace;
        font-size: 0.75rem;
        color: rgba(0, 0, 0, 0.5);
    }
    .shuffler-status-row {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .shuffler-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
        background: rgba(0, 0, 0, 0.1);
        transition: background 0.5s;
    }
    .shuffler-dot.live {
        background: #22c55e;
        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
    }
    .shuffler-status {
        font-family: 'JetBrains Mono', monospace;
        font-size: 10px;
        text-transform: uppercase;
        color: rgba(0, 0, 0, 0.5);
    }
    .accent-moss { color: #2E4036; }
    .accent-clay { color: #CC5833; }
    .accent-blue { color: #2563eb; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_moves_front_card_to_the_back() {
        let mut deck = vec!["A", "B", "C"];
        deck.rotate_left(1);
        assert_eq!(deck, vec!["B", "C", "A"]);
    }

    #[test]
    fn front_card_after_k_rotations_is_original_index_k_mod_n() {
        let original = telemetry_cards();
        let mut deck = original.clone();
        for k in 0..10 {
            assert_eq!(deck[0].id, original[k % original.len()].id);
            deck.rotate_left(1);
        }
    }

    #[test]
    fn full_cycle_restores_the_original_order() {
        let original = telemetry_cards();
        let mut deck = original.clone();
        let observed: Vec<u32> = (0..4)
            .map(|_| {
                let front = deck[0].id;
                deck.rotate_left(1);
                front
            })
            .collect();
        assert_eq!(observed, vec![1, 2, 3, 1]);
        for _ in 0..2 {
            deck.rotate_left(1);
        }
        assert_eq!(deck, original);
    }

    #[test]
    fn layer_style_is_a_function_of_position() {
        assert_eq!(
            layer_style(0),
            "transform: translateY(0px) scale(1); z-index: 30; opacity: 1;"
        );
        assert_eq!(
            layer_style(1),
            "transform: translateY(20px) scale(0.95); z-index: 29; opacity: 0.8;"
        );
        assert_eq!(
            layer_style(2),
            "transform: translateY(40px) scale(0.9); z-index: 28; opacity: 0.6;"
        );
    }
}
