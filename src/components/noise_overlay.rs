use yew::prelude::*;

/// Full-screen film-grain overlay. Pure decoration, never interactive.
#[function_component(NoiseOverlay)]
pub fn noise_overlay() -> Html {
    html! {
        <svg class="noise-overlay" aria-hidden="true">
            <filter id="noise">
                <feTurbulence type="fractalNoise" baseFrequency="0.75" numOctaves="3" stitchTiles="stitch" />
            </filter>
            <rect width="100%" height="100%" filter="url(#noise)" />
        </svg>
    }
}
