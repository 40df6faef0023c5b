use yew::prelude::*;

use crate::config;

/// Page-wide stylesheet: web fonts, body defaults, shared keyframes and the
/// styling for multi-instance controls. Rendered exactly once by the app
/// shell; nothing mutates it afterwards.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    let head = format!(
        "@import url('{fonts}');\n\
         body {{ background-color: {cream}; color: {charcoal}; margin: 0; \
         font-family: 'Plus Jakarta Sans', sans-serif; overflow-x: hidden; \
         -webkit-font-smoothing: antialiased; }}\n\
         ::selection {{ background: {moss}; color: {cream}; }}\n",
        fonts = config::FONTS_URL,
        cream = config::CREAM,
        charcoal = config::CHARCOAL,
        moss = config::MOSS,
    );

    html! {
        <style>
            { format!("{}{}", head, SHARED_CSS) }
        </style>
    }
}

const SHARED_CSS: &str = r#"
    .font-serif { font-family: 'Cormorant Garamond', serif; }
    .font-mono { font-family: 'JetBrains Mono', monospace; }
    .font-display { font-family: 'Outfit', sans-serif; }

    .hide-scrollbar::-webkit-scrollbar { display: none; }
    .hide-scrollbar { -ms-overflow-style: none; scrollbar-width: none; }

    .app-shell {
        position: relative;
        min-height: 100vh;
        overflow: hidden;
    }

    .noise-overlay {
        pointer-events: none;
        position: fixed;
        inset: 0;
        width: 100%;
        height: 100%;
        z-index: 9999;
        opacity: 0.05;
        mix-blend-mode: overlay;
    }

    /* Magnetic CTA button. The transform itself is inline, driven by the
       pointer; only the return trip is animated here. */
    .magnetic-button {
        position: relative;
        overflow: hidden;
        border-radius: 9999px;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        cursor: pointer;
        font-family: inherit;
        font-size: 0.875rem;
        font-weight: 600;
        transition: transform 0.3s ease-out;
    }
    .magnetic-dark {
        background: #1A1A1A;
        color: #F2F0E9;
        border: 1px solid transparent;
    }
    .magnetic-light {
        background: #F2F0E9;
        color: #1A1A1A;
        border: 1px solid rgba(26, 26, 26, 0.1);
    }
    .magnetic-clay {
        background: #CC5833;
        color: #F2F0E9;
        border: 1px solid transparent;
    }
    .magnetic-fill {
        position: absolute;
        inset: 0;
        background: #CC5833;
        border-radius: 9999px;
        transform: translateY(100%);
        transition: transform 0.5s cubic-bezier(0.34, 1.56, 0.64, 1);
        z-index: 0;
    }
    .magnetic-button:hover .magnetic-fill {
        transform: translateY(0);
    }
    .magnetic-label {
        position: relative;
        z-index: 1;
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        transition: color 0.3s;
    }
    .magnetic-button:hover .magnetic-label {
        color: #F2F0E9;
    }

    .split-text {
        display: inline-block;
    }
    .split-word-clip {
        display: inline-block;
        overflow: hidden;
        margin-right: 0.3em;
        vertical-align: bottom;
        padding-bottom: 0.25rem;
    }
    .split-word {
        display: inline-block;
    }

    @keyframes fadeUp {
        from { opacity: 0; transform: translateY(40px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .animate-fade-up {
        animation: fadeUp 1.2s cubic-bezier(0.16, 1, 0.3, 1) forwards;
    }

    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.4; }
    }

    @keyframes spin {
        from { transform: rotate(0deg); }
        to { transform: rotate(360deg); }
    }

    @keyframes drawLine {
        from { stroke-dashoffset: 1000; }
        to { stroke-dashoffset: 0; }
    }
    .animate-draw-line {
        animation: drawLine 4s linear infinite;
    }

    @keyframes scan {
        from { top: 0; }
        to { top: 100%; }
    }

    @keyframes cursorPath {
        0%, 5% { transform: translate(20px, 150px); opacity: 0; }
        10% { transform: translate(20px, 150px); opacity: 1; }
        30% { transform: translate(140px, 80px); opacity: 1; }
        35% { transform: translate(140px, 80px) scale(0.8); opacity: 1; }
        40% { transform: translate(140px, 80px) scale(1); opacity: 1; }
        60% { transform: translate(220px, 180px); opacity: 1; }
        65% { transform: translate(220px, 180px) scale(0.8); opacity: 1; }
        70% { transform: translate(220px, 180px) scale(1); opacity: 1; }
        90%, 100% { transform: translate(220px, 200px); opacity: 0; }
    }

    @keyframes dotPop {
        0%, 35% { transform: scale(0); opacity: 0; }
        40%, 100% { transform: scale(1); opacity: 1; }
    }

    @keyframes btnPress {
        0%, 65% { transform: scale(1); background-color: #F2F0E9; color: rgba(0, 0, 0, 0.6); }
        70%, 100% { transform: scale(0.95); background-color: #2E4036; color: #F2F0E9; }
    }
"#;
