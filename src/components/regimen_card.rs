use yew::prelude::*;

const WEEKDAYS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
/// Day the mock cursor "selects"; keyframes in the shared stylesheet are
/// timed against this choice.
const ACTIVE_DAY: usize = 2;

/// Weekly regimen card animated entirely with CSS keyframes: a mock cursor
/// travels to Tuesday, pops its dot, then presses the compile chip, on a
/// shared five second loop.
#[function_component(RegimenCard)]
pub fn regimen_card() -> Html {
    html! {
        <div class="regimen-card">
            <style>
                {REGIMEN_CSS}
            </style>
            <div>
                <h3 class="regimen-title">
                    <span class="regimen-title-mark">{"▣"}</span>
                    {"Protocol injection"}
                </h3>
                <div class="regimen-days">
                    { for WEEKDAYS.iter().enumerate().map(|(index, day)| html! {
                        <div class="regimen-day">
                            <span class={classes!("regimen-day-label", (index == ACTIVE_DAY).then(|| "active"))}>
                                { *day }
                            </span>
                            <div class="regimen-day-dot"></div>
                            { if index == ACTIVE_DAY {
                                html! { <div class="regimen-day-dot-pop"></div> }
                            } else {
                                html! {}
                            } }
                        </div>
                    }) }
                </div>
            </div>
            <div class="regimen-compile-row">
                <div class="regimen-compile">{"Compile"}</div>
            </div>
            <svg
                class="regimen-cursor"
                viewBox="0 0 24 24"
                fill="none"
                stroke="#1A1A1A"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <path d="m3 3 7.07 16.97 2.51-7.39 7.39-2.51L3 3z" />
                <path d="m13 13 6 6" />
            </svg>
        </div>
    }
}

const REGIMEN_CSS: &str = r#"
    .regimen-card {
        background: #fff;
        border-radius: 2rem;
        border: 1px solid rgba(0, 0, 0, 0.05);
        padding: 1.5rem;
        height: 100%;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        position: relative;
        overflow: hidden;
    }
    .regimen-title {
        font-size: 0.875rem;
        font-weight: 600;
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin: 0 0 1.5rem 0;
    }
    .regimen-title-mark {
        color: #CC5833;
    }
    .regimen-days {
        display: flex;
        justify-content: space-between;
        margin-bottom: 2rem;
        padding: 0 0.5rem;
        position: relative;
        z-index: 1;
    }
    .regimen-day {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        position: relative;
    }
    .regimen-day-label {
        font-size: 0.75rem;
        font-weight: 500;
        color: rgba(0, 0, 0, 0.3);
        transition: color 0.3s;
    }
    .regimen-day-label.active {
        color: #1A1A1A;
    }
    .regimen-day-dot {
        width: 0.375rem;
        height: 0.375rem;
        border-radius: 50%;
        background: rgba(0, 0, 0, 0.1);
    }
    .regimen-day-dot-pop {
        position: absolute;
        bottom: 0;
        width: 0.375rem;
        height: 0.375rem;
        border-radius: 50%;
        background: #CC5833;
        animation: dotPop 5s infinite;
    }
    .regimen-compile-row {
        display: flex;
        justify-content: flex-end;
        position: relative;
        z-index: 1;
    }
    .regimen-compile {
        font-family: 'JetBrains Mono', monospace;
        font-size: 10px;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        animation: btnPress 5s infinite;
    }
    .regimen-cursor {
        position: absolute;
        top: 0;
        left: 0;
        width: 1.25rem;
        height: 1.25rem;
        z-index: 2;
        filter: drop-shadow(0 2px 3px rgba(0, 0, 0, 0.2));
        transform-origin: top left;
        animation: cursorPath 5s infinite;
    }
"#;
