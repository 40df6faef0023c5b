use yew::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use gloo_timers::callback::Timeout;

use crate::components::card_shuffler::DiagnosticShuffler;
use crate::components::magnetic_button::{ButtonVariant, MagneticButton};
use crate::components::regimen_card::RegimenCard;
use crate::components::split_text::SplitTextReveal;
use crate::components::typewriter::TelemetryTypewriter;
use crate::config;

/// Scroll depth past which the navbar switches to its frosted styling.
const NAV_SCROLL_THRESHOLD_PX: i32 = 50;
/// The philosophy background drifts at this fraction of the scroll speed.
const PARALLAX_FACTOR: f64 = 0.15;

fn past_nav_threshold(scroll_top: i32) -> bool {
    scroll_top > NAV_SCROLL_THRESHOLD_PX
}

fn parallax_translate(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

/// Inline style for the staggered hero entrance. Until `mounted` flips, the
/// element sits displaced and transparent; afterwards the transition carries
/// it into place.
fn entrance_style(mounted: bool, hidden_transform: &str, transition: &str) -> String {
    if mounted {
        format!("opacity: 1; transform: none; transition: {transition};")
    } else {
        format!("opacity: 0; transform: {hidden_transform}; transition: {transition};")
    }
}

#[function_component(Navbar)]
fn navbar() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(past_nav_threshold(scroll_top));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let cta_variant = if *is_scrolled {
        ButtonVariant::Dark
    } else {
        ButtonVariant::Light
    };

    html! {
        <nav class="top-nav">
            <div class={classes!("nav-pill", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-logo">
                    <div class="nav-logo-dot"></div>
                    <span class="nav-logo-word">{"NURA"}</span>
                </div>
                <div class="nav-links">
                    { for ["Intelligence", "Protocol", "Manifesto"].iter().map(|item| html! {
                        <a href={format!("#{}", item.to_lowercase())} class="nav-link">{ *item }</a>
                    }) }
                </div>
                <MagneticButton variant={cta_variant} class="nav-cta">
                    {"Begin Audit"}
                </MagneticButton>
            </div>
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let mounted = use_state(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(100, move || mounted.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <div
                class="hero-background"
                style={format!("background-image: url({});", config::HERO_IMAGE_URL)}
            />
            <div class={classes!("hero-gradient-top", (*mounted).then(|| "visible"))}></div>
            <div class="hero-gradient-side"></div>
            <div class="hero-content">
                <div class="hero-copy">
                    <div class="hero-line-clip">
                        <h1
                            class="hero-title"
                            style={entrance_style(
                                *mounted,
                                "translateY(50px)",
                                "all 1s cubic-bezier(0.16, 1, 0.3, 1) 0.5s",
                            )}
                        >
                            {"Nature is the"}
                        </h1>
                    </div>
                    <div class="hero-line-clip serif-clip">
                        <h1
                            class="hero-title-serif font-serif"
                            style={entrance_style(
                                *mounted,
                                "translateY(80px) rotateX(-20deg)",
                                "all 1.2s cubic-bezier(0.16, 1, 0.3, 1) 0.7s",
                            )}
                        >
                            {"Algorithm."}
                        </h1>
                    </div>
                    <p
                        class="hero-standfirst"
                        style={entrance_style(*mounted, "translateY(20px)", "all 1s ease-out 0.9s")}
                    >
                        {"Precision biological telemetry meets bespoke intervention. We do not \
                          just measure longevity; we engineer it through high-end clinical \
                          protocols."}
                    </p>
                    <div
                        class="hero-cta"
                        style={entrance_style(
                            *mounted,
                            "scale(0.8)",
                            "all 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) 1.1s",
                        )}
                    >
                        <MagneticButton variant={ButtonVariant::Light} class="hero-cta-button">
                            {"Explore the Protocol"}
                            <span class="cta-arrow">{"→"}</span>
                        </MagneticButton>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section id="intelligence" class="features">
            <div class="features-header">
                <h2 class="features-kicker font-mono">{"The Architecture"}</h2>
                <p class="features-lede font-display">
                    {"Precision instrumentation for your biological hardware."}
                </p>
            </div>
            <div class="features-grid">
                <div class="feature-card moss-hover">
                    <div class="feature-card-head">
                        <h3>{"Audit Intelligence"}</h3>
                        <p>{"Continuous biometric normalization."}</p>
                    </div>
                    <div class="feature-card-body sunken">
                        <DiagnosticShuffler />
                    </div>
                </div>
                <div class="feature-card clay-hover">
                    <div class="feature-card-head">
                        <h3>{"Neural Stream"}</h3>
                        <p>{"Real-time physiological telemetry."}</p>
                    </div>
                    <div class="feature-card-body dark">
                        <TelemetryTypewriter />
                    </div>
                </div>
                <div class="feature-card moss-hover">
                    <div class="feature-card-head">
                        <h3>{"Adaptive Regimen"}</h3>
                        <p>{"Automated micro-adjustments."}</p>
                    </div>
                    <div class="feature-card-body sunken padded">
                        <RegimenCard />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Philosophy)]
fn philosophy() -> Html {
    let scroll_y = use_state(|| 0.0f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Ok(offset) = window_clone.scroll_y() {
                        scroll_y.set(offset);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <section id="manifesto" class="philosophy">
            <div
                class="philosophy-background"
                style={format!(
                    "background-image: url({}); transform: translateY({}px);",
                    config::PHILOSOPHY_IMAGE_URL,
                    parallax_translate(*scroll_y),
                )}
            />
            <div class="philosophy-tint"></div>
            <div class="philosophy-fade"></div>
            <div class="philosophy-content">
                <p class="philosophy-question">
                    <SplitTextReveal text="Modern medicine asks: What is wrong?" />
                </p>
                <h2 class="philosophy-answer font-serif">
                    <SplitTextReveal text="We ask: What is optimal?" />
                </h2>
                <div class="philosophy-rule-block">
                    <div class="philosophy-rule"></div>
                    <p class="philosophy-tagline font-mono">{"Shift the paradigm"}</p>
                </div>
            </div>
        </section>
    }
}

struct ProtocolPhase {
    title: &'static str,
    subtitle: &'static str,
    desc: &'static str,
    tone: &'static str,
}

const PROTOCOL_PHASES: [ProtocolPhase; 3] = [
    ProtocolPhase {
        title: "Cellular Baseline",
        subtitle: "Phase 01",
        desc: "Comprehensive multi-omic sequencing to map your biological terrain. We \
               establish the ground truth of your health architecture.",
        tone: "phase-one",
    },
    ProtocolPhase {
        title: "Algorithmic Mapping",
        subtitle: "Phase 02",
        desc: "Data is fed into our proprietary Nura core. We identify friction points in \
               your metabolic and neural pathways.",
        tone: "phase-two",
    },
    ProtocolPhase {
        title: "Precision Intervention",
        subtitle: "Phase 03",
        desc: "Deployment of targeted clinical protocols. Continuous telemetry ensures \
               adaptation. Your biology, fully optimized.",
        tone: "phase-three",
    },
];

#[function_component(DialArtifact)]
fn dial_artifact() -> Html {
    html! {
        <div class="artifact artifact-dial">
            <svg width="400" height="400" viewBox="0 0 100 100" class="artifact-dial-svg">
                <g stroke="#2E4036" stroke-width="0.5" fill="none">
                    <circle cx="50" cy="50" r="40" stroke-dasharray="2 4" />
                    <circle cx="50" cy="50" r="30" />
                    <circle cx="50" cy="50" r="20" stroke-dasharray="1 6" stroke-width="2" />
                    <path d="M50 10 L50 90 M10 50 L90 50" opacity="0.5" />
                </g>
            </svg>
        </div>
    }
}

#[function_component(ScanArtifact)]
fn scan_artifact() -> Html {
    html! {
        <div class="artifact artifact-scan">
            <div class="artifact-scan-grid"></div>
            <div class="artifact-scan-line"></div>
        </div>
    }
}

#[function_component(WaveArtifact)]
fn wave_artifact() -> Html {
    html! {
        <div class="artifact artifact-wave">
            <svg viewBox="0 0 500 100" class="artifact-wave-svg">
                <path
                    class="animate-draw-line"
                    d="M0,50 L100,50 L120,20 L140,80 L160,10 L180,90 L200,50 L500,50"
                    fill="none"
                    stroke="#CC5833"
                    stroke-width="3"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-dasharray="1000"
                />
            </svg>
        </div>
    }
}

#[function_component(ProtocolStack)]
fn protocol_stack() -> Html {
    html! {
        <section id="protocol" class="protocol">
            { for PROTOCOL_PHASES.iter().enumerate().map(|(index, phase)| html! {
                <div
                    class={classes!("protocol-phase", phase.tone)}
                    style={format!("z-index: {};", index + 1)}
                >
                    <div class="protocol-copy animate-fade-up">
                        <span class="protocol-subtitle font-mono">{ phase.subtitle }</span>
                        <h2 class="protocol-title font-display">{ phase.title }</h2>
                        <p class="protocol-desc">{ phase.desc }</p>
                    </div>
                    { match index {
                        0 => html! { <DialArtifact /> },
                        1 => html! { <ScanArtifact /> },
                        _ => html! { <WaveArtifact /> },
                    } }
                </div>
            }) }
        </section>
    }
}

#[function_component(Membership)]
fn membership() -> Html {
    html! {
        <section class="membership">
            <div class="membership-header">
                <h2 class="membership-title font-serif">{"Engage the System"}</h2>
                <p class="membership-subtitle font-mono">{"Select your protocol tier"}</p>
            </div>
            <div class="tier-grid">
                <div class="tier-card">
                    <h3 class="font-display">{"Essential"}</h3>
                    <p class="tier-blurb">{"Baseline telemetry and quarterly biological audits."}</p>
                    <div class="tier-price">{"$2,500"}<span>{"/yr"}</span></div>
                    <ul class="tier-list">
                        <li>{"✓ Full Epigenetic Panel"}</li>
                        <li>{"✓ Microbiome Sequencing"}</li>
                        <li>{"✓ Digital Dashboard Access"}</li>
                    </ul>
                    <MagneticButton variant={ButtonVariant::Light} class="tier-cta">
                        {"Initialize"}
                    </MagneticButton>
                </div>
                <div class="tier-card tier-highlight">
                    <div class="tier-glow"></div>
                    <div class="tier-highlight-body">
                        <span class="tier-tag font-mono">{"Recommended"}</span>
                        <h3 class="font-display">{"Performance"}</h3>
                        <p class="tier-blurb">
                            {"Continuous active telemetry and dynamic protocol adjustment."}
                        </p>
                        <div class="tier-price large">{"$8,000"}<span>{"/yr"}</span></div>
                        <ul class="tier-list">
                            <li>{"✓ Everything in Essential"}</li>
                            <li>{"✓ Wearable API Integration"}</li>
                            <li>{"✓ Monthly Clinical Consults"}</li>
                            <li>{"✓ Adaptive Nootropic Stack"}</li>
                        </ul>
                        <MagneticButton variant={ButtonVariant::Clay} class="tier-cta">
                            {"Begin Protocol"}
                        </MagneticButton>
                    </div>
                </div>
                <div class="tier-card">
                    <h3 class="font-display">{"Longevity"}</h3>
                    <p class="tier-blurb">{"The absolute pinnacle of biological engineering."}</p>
                    <div class="tier-price">{"Custom"}</div>
                    <ul class="tier-list muted">
                        <li>{"Requires Medical Review"}</li>
                        <li>{"Waitlist Applicable"}</li>
                    </ul>
                    <MagneticButton variant={ButtonVariant::Light} class="tier-cta waitlist">
                        {"Apply for Waitlist"}
                    </MagneticButton>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="footer-main">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <div class="footer-logo-dot"></div>
                        <span class="font-display">{"NURA"}</span>
                    </div>
                    <div class="footer-status font-mono">
                        <div class="footer-status-dot"></div>
                        {"System Operational"}
                    </div>
                    <p class="footer-disclaimer">
                        {"Nura Health operates at the intersection of computational biology \
                          and high-end clinical practice. Not intended to diagnose or treat \
                          specific diseases without consultation."}
                    </p>
                </div>
                <div class="footer-columns">
                    <div class="footer-column">
                        <span class="footer-column-title font-mono">{"Platform"}</span>
                        <a href="#">{"Audit Console"}</a>
                        <a href="#">{"The Science"}</a>
                        <a href="#">{"Research Pubs"}</a>
                    </div>
                    <div class="footer-column">
                        <span class="footer-column-title font-mono">{"Company"}</span>
                        <a href="#manifesto">{"Manifesto"}</a>
                        <a href="#">{"Careers"}</a>
                        <a href="#">{"Contact"}</a>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <span>{ format!("© {} Nura Systems Inc.", year) }</span>
                <div class="footer-legal">
                    <a href="#">{"Privacy"}</a>
                    <a href="#">{"Terms"}</a>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    info!("Rendering landing page");

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {LANDING_CSS}
            </style>
            <Navbar />
            <main>
                <Hero />
                <Features />
                <Philosophy />
                <ProtocolStack />
                <Membership />
            </main>
            <Footer />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        display: flex;
        justify-content: center;
        padding: 1.5rem 1rem 0;
        pointer-events: none;
    }
    .nav-pill {
        pointer-events: auto;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1.5rem;
        width: 100%;
        max-width: 64rem;
        padding: 1rem 1.5rem;
        border-radius: 2rem;
        border: 1px solid transparent;
        color: #fff;
        background: transparent;
        transform: translateY(0.5rem) scale(0.98);
        transition: all 0.7s cubic-bezier(0.25, 1, 0.5, 1);
    }
    .nav-pill.scrolled {
        background: rgba(255, 255, 255, 0.6);
        backdrop-filter: blur(24px);
        border-color: rgba(46, 64, 54, 0.1);
        color: #2E4036;
        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.05);
        transform: translateY(0) scale(1);
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        cursor: pointer;
    }
    .nav-logo-dot {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 50%;
        background: #fff;
        transition: background 0.5s;
    }
    .nav-pill.scrolled .nav-logo-dot {
        background: #CC5833;
    }
    .nav-logo-word {
        font-family: 'Outfit', sans-serif;
        font-weight: 600;
        letter-spacing: 0.05em;
        font-size: 1.125rem;
    }
    .nav-links {
        display: none;
        align-items: center;
        gap: 2rem;
        font-size: 0.875rem;
        font-weight: 500;
    }
    @media (min-width: 768px) {
        .nav-links { display: flex; }
    }
    .nav-link {
        color: inherit;
        text-decoration: none;
        transition: opacity 0.2s;
    }
    .nav-link:hover { opacity: 0.6; }
    .nav-cta { padding: 0.625rem 1.25rem; }

    .hero {
        position: relative;
        height: 100dvh;
        width: 100%;
        overflow: hidden;
        background: #1A1A1A;
        border-radius: 0 0 3rem 3rem;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background-size: cover;
        background-position: center;
        background-repeat: no-repeat;
        transform: scale(1.05);
    }
    .hero-gradient-top {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(46, 64, 54, 0.6), transparent, #1A1A1A);
        opacity: 0;
        transition: opacity 2s;
    }
    .hero-gradient-top.visible { opacity: 0.7; }
    .hero-gradient-side {
        position: absolute;
        inset: 0;
        background: linear-gradient(to right, rgba(26, 26, 26, 0.8), transparent);
    }
    .hero-content {
        position: absolute;
        inset: 0;
        z-index: 1;
        max-width: 80rem;
        margin: 0 auto;
        padding: 2rem;
        display: flex;
        flex-direction: column;
        justify-content: flex-end;
    }
    @media (min-width: 768px) {
        .hero-content { padding: 4rem; }
    }
    .hero-copy { max-width: 48rem; }
    .hero-line-clip {
        overflow: hidden;
        margin-bottom: -2vw;
    }
    .hero-line-clip.serif-clip {
        padding-bottom: 1rem;
        perspective: 1000px;
    }
    .hero-title {
        margin: 0;
        font-size: clamp(2.25rem, 6vw, 4.5rem);
        font-weight: 700;
        letter-spacing: -0.04em;
        text-transform: uppercase;
        color: #F2F0E9;
    }
    .hero-title-serif {
        margin: 0;
        padding-right: 1rem;
        font-size: clamp(3.75rem, 10vw, 8rem);
        font-style: italic;
        line-height: 1;
        color: #CC5833;
        transform-origin: top;
    }
    .hero-standfirst {
        max-width: 36rem;
        margin: 1.5rem 0 2.5rem;
        font-size: 1.125rem;
        font-weight: 300;
        letter-spacing: 0.02em;
        color: rgba(242, 240, 233, 0.8);
    }
    .hero-cta { display: inline-block; }
    .hero-cta-button { padding: 1rem 2rem; font-size: 1rem; }
    .cta-arrow { font-size: 1rem; }

    .features {
        max-width: 80rem;
        margin: 0 auto;
        padding: 6rem 1rem;
    }
    .features-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .features-kicker {
        font-size: 10px;
        text-transform: uppercase;
        letter-spacing: 0.3em;
        color: #CC5833;
        margin-bottom: 1rem;
    }
    .features-lede {
        max-width: 42rem;
        margin: 0 auto;
        font-size: clamp(1.875rem, 4vw, 3rem);
        font-weight: 300;
        line-height: 1.2;
        color: #1A1A1A;
    }
    .features-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1.5rem;
        grid-auto-rows: 22rem;
    }
    @media (min-width: 768px) {
        .features-grid { grid-template-columns: repeat(3, 1fr); }
    }
    .feature-card {
        background: #F2F0E9;
        border-radius: 3rem;
        border: 1px solid rgba(26, 26, 26, 0.05);
        padding: 0.5rem;
        display: flex;
        flex-direction: column;
        transition: border-color 0.3s;
    }
    .feature-card.moss-hover:hover { border-color: rgba(46, 64, 54, 0.2); }
    .feature-card.clay-hover:hover { border-color: rgba(204, 88, 51, 0.2); }
    .feature-card-head {
        padding: 1.5rem 1.5rem 0.5rem;
    }
    .feature-card-head h3 {
        margin: 0;
        font-size: 1.125rem;
        font-weight: 600;
    }
    .feature-card-head p {
        margin: 0.25rem 0 0;
        font-size: 0.875rem;
        color: rgba(0, 0, 0, 0.6);
    }
    .feature-card-body {
        flex-grow: 1;
        border-radius: 2.5rem;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
        position: relative;
    }
    .feature-card-body.sunken { background: #E8E6DF; }
    .feature-card-body.dark { background: #1A1A1A; padding: 0.5rem; }
    .feature-card-body.padded { padding: 0.5rem; }
    .feature-card-body.dark > *, .feature-card-body.padded > * { width: 100%; height: 100%; }

    .philosophy {
        position: relative;
        margin: 2rem 0.5rem;
        padding: 8rem 0;
        background: #1A1A1A;
        color: #F2F0E9;
        overflow: hidden;
        border-radius: 3rem;
    }
    @media (min-width: 768px) {
        .philosophy { margin: 2rem 1rem; padding: 12rem 0; }
    }
    .philosophy-background {
        position: absolute;
        inset: -20%;
        background-size: cover;
        background-position: center;
        opacity: 0.3;
        mix-blend-mode: luminosity;
        filter: grayscale(1);
        will-change: transform;
    }
    .philosophy-tint {
        position: absolute;
        inset: 0;
        background: rgba(46, 64, 54, 0.8);
        mix-blend-mode: multiply;
    }
    .philosophy-fade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, #1A1A1A, transparent, #1A1A1A);
    }
    .philosophy-content {
        position: relative;
        z-index: 1;
        max-width: 64rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        text-align: center;
    }
    .philosophy-question {
        margin: 0 0 2rem;
        font-size: clamp(1.25rem, 3vw, 1.875rem);
        font-weight: 300;
        letter-spacing: 0.02em;
        color: rgba(255, 255, 255, 0.5);
    }
    .philosophy-answer {
        margin: 0;
        font-size: clamp(2.25rem, 7vw, 6rem);
        font-style: italic;
        line-height: 1.2;
        color: #CC5833;
    }
    .philosophy-rule-block {
        margin-top: 4rem;
        display: inline-flex;
        flex-direction: column;
        align-items: center;
    }
    .philosophy-rule {
        width: 1px;
        height: 6rem;
        margin-bottom: 2rem;
        background: linear-gradient(to bottom, #CC5833, transparent);
        opacity: 0.5;
    }
    .philosophy-tagline {
        margin: 0;
        font-size: 0.875rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.4);
    }

    .protocol {
        position: relative;
        background: #F2F0E9;
    }
    .protocol-phase {
        position: sticky;
        top: 0;
        width: 100%;
        height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        padding: 2rem;
        transform-origin: top;
        box-shadow: 0 -10px 40px rgba(0, 0, 0, 0.05);
        border-radius: 3rem 3rem 0 0;
        overflow: hidden;
    }
    @media (min-width: 768px) {
        .protocol-phase { padding: 6rem; }
    }
    .protocol-phase.phase-one { background: #E8E6DF; }
    .protocol-phase.phase-two { background: #D6D3CA; }
    .protocol-phase.phase-three { background: #C4C0B5; }
    .protocol-copy {
        max-width: 48rem;
        position: relative;
        z-index: 1;
    }
    .protocol-subtitle {
        display: block;
        margin-bottom: 1rem;
        font-size: 0.875rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        color: #CC5833;
    }
    .protocol-title {
        margin: 0 0 2rem;
        font-size: clamp(3rem, 7vw, 4.5rem);
        letter-spacing: -0.02em;
        color: #2E4036;
    }
    .protocol-desc {
        max-width: 36rem;
        margin: 0;
        font-size: 1.25rem;
        font-weight: 300;
        line-height: 1.6;
        color: rgba(26, 26, 26, 0.7);
    }
    .artifact {
        position: absolute;
        pointer-events: none;
        mix-blend-mode: multiply;
    }
    .artifact-dial {
        top: 50%;
        left: 75%;
        transform: translate(-50%, -50%);
        opacity: 0.2;
    }
    .artifact-dial-svg {
        animation: spin 40s linear infinite;
    }
    .artifact-scan {
        top: 0;
        right: 0;
        width: 50%;
        height: 100%;
        opacity: 0.1;
        overflow: hidden;
    }
    .artifact-scan-grid {
        position: absolute;
        inset: 0;
        background-image:
            linear-gradient(rgba(46, 64, 54, 0.2) 1px, transparent 1px),
            linear-gradient(90deg, rgba(46, 64, 54, 0.2) 1px, transparent 1px);
        background-size: 20px 20px;
    }
    .artifact-scan-line {
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 2px;
        background: #CC5833;
        box-shadow: 0 0 15px #CC5833;
        animation: scan 3s ease-in-out infinite alternate;
    }
    .artifact-wave {
        bottom: 2.5rem;
        left: 2.5rem;
        width: 60vw;
        opacity: 0.3;
    }
    .artifact-wave-svg {
        width: 100%;
        height: auto;
        filter: drop-shadow(0 4px 6px rgba(0, 0, 0, 0.1));
    }

    .membership {
        position: relative;
        z-index: 1;
        max-width: 80rem;
        margin: 0 auto;
        padding: 8rem 1rem;
        background: #F2F0E9;
    }
    .membership-header {
        text-align: center;
        margin-bottom: 5rem;
    }
    .membership-title {
        margin: 0 0 1rem;
        font-size: clamp(2.25rem, 5vw, 3.75rem);
        font-style: italic;
        color: #1A1A1A;
    }
    .membership-subtitle {
        margin: 0;
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        color: rgba(0, 0, 0, 0.5);
    }
    .tier-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1.5rem;
        align-items: center;
    }
    @media (min-width: 768px) {
        .tier-grid { grid-template-columns: repeat(3, 1fr); }
    }
    .tier-card {
        background: #fff;
        padding: 2.5rem;
        border-radius: 2.5rem;
        border: 1px solid rgba(0, 0, 0, 0.05);
    }
    .tier-card h3 {
        margin: 0 0 0.5rem;
        font-size: 1.5rem;
        font-weight: 400;
    }
    .tier-blurb {
        margin: 0 0 2rem;
        font-size: 0.875rem;
        color: rgba(0, 0, 0, 0.5);
    }
    .tier-price {
        margin-bottom: 2rem;
        font-size: 2.25rem;
        font-weight: 300;
    }
    .tier-price span {
        font-size: 0.875rem;
        color: rgba(0, 0, 0, 0.4);
    }
    .tier-price.large { font-size: 3rem; }
    .tier-list {
        list-style: none;
        margin: 0 0 2.5rem;
        padding: 0;
        font-size: 0.875rem;
        display: flex;
        flex-direction: column;
        gap: 1rem;
        color: rgba(0, 0, 0, 0.7);
    }
    .tier-list.muted { opacity: 0.5; }
    .tier-cta { width: 100%; padding: 1rem 0; }
    .tier-cta.waitlist {
        color: rgba(0, 0, 0, 0.5);
        border-style: dashed;
        border-color: rgba(0, 0, 0, 0.2);
    }
    .tier-highlight {
        background: #2E4036;
        border: none;
        border-radius: 3rem;
        color: #F2F0E9;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        position: relative;
        overflow: hidden;
    }
    @media (min-width: 768px) {
        .tier-highlight { transform: scale(1.05); }
    }
    .tier-glow {
        position: absolute;
        top: 0;
        right: 0;
        width: 16rem;
        height: 16rem;
        background: rgba(204, 88, 51, 0.2);
        filter: blur(80px);
        border-radius: 50%;
        transform: translate(50%, -50%);
        transition: background 1s;
    }
    .tier-highlight:hover .tier-glow {
        background: rgba(204, 88, 51, 0.3);
    }
    .tier-highlight-body { position: relative; z-index: 1; }
    .tier-highlight h3 { color: #fff; font-size: 1.875rem; }
    .tier-highlight .tier-blurb { color: rgba(255, 255, 255, 0.6); }
    .tier-highlight .tier-price { color: #fff; }
    .tier-highlight .tier-price span { color: rgba(255, 255, 255, 0.4); }
    .tier-highlight .tier-list { color: rgba(255, 255, 255, 0.9); }
    .tier-tag {
        display: inline-block;
        margin-bottom: 1.5rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: #CC5833;
        color: #fff;
        font-size: 10px;
        text-transform: uppercase;
    }

    .footer {
        position: relative;
        z-index: 2;
        margin-top: 5rem;
        padding: 6rem 2rem 3rem;
        background: #1A1A1A;
        color: #F2F0E9;
        border-radius: 4rem 4rem 0 0;
    }
    .footer-main {
        max-width: 80rem;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        align-items: flex-start;
        gap: 3rem;
    }
    @media (min-width: 768px) {
        .footer-main { flex-direction: row; align-items: flex-end; }
    }
    .footer-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 2rem;
        font-weight: 600;
        letter-spacing: 0.2em;
        font-size: 1.5rem;
    }
    .footer-logo-dot {
        width: 1rem;
        height: 1rem;
        border-radius: 50%;
        background: #fff;
    }
    .footer-status {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1rem;
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        color: rgba(255, 255, 255, 0.4);
    }
    .footer-status-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
        background: #22c55e;
        box-shadow: 0 0 10px rgba(34, 197, 94, 0.5);
        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
    }
    .footer-disclaimer {
        max-width: 24rem;
        margin: 0;
        font-size: 0.75rem;
        line-height: 1.6;
        color: rgba(255, 255, 255, 0.3);
    }
    .footer-columns {
        display: flex;
        gap: 4rem;
        font-size: 0.875rem;
        font-weight: 500;
    }
    .footer-column {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .footer-column a {
        color: inherit;
        text-decoration: none;
        transition: color 0.2s;
    }
    .footer-column a:hover { color: #CC5833; }
    .footer-column-title {
        margin-bottom: 0.5rem;
        font-size: 10px;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        color: rgba(255, 255, 255, 0.3);
    }
    .footer-bottom {
        max-width: 80rem;
        margin: 6rem auto 0;
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        display: flex;
        justify-content: space-between;
        align-items: center;
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.3);
    }
    .footer-legal {
        display: flex;
        gap: 1rem;
    }
    .footer-legal a {
        color: inherit;
        text-decoration: none;
    }
    .footer-legal a:hover { color: #fff; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_threshold_is_exclusive_at_the_boundary() {
        assert!(!past_nav_threshold(0));
        assert!(!past_nav_threshold(50));
        assert!(past_nav_threshold(51));
    }

    #[test]
    fn parallax_drifts_slower_than_scroll() {
        assert_eq!(parallax_translate(0.0), 0.0);
        assert_eq!(parallax_translate(100.0), 15.0);
        assert!(parallax_translate(640.0) < 640.0);
    }

    #[test]
    fn entrance_style_settles_in_place_once_mounted() {
        let hidden = entrance_style(false, "translateY(50px)", "all 1s ease-out 0.5s");
        assert!(hidden.contains("opacity: 0"));
        assert!(hidden.contains("translateY(50px)"));

        let shown = entrance_style(true, "translateY(50px)", "all 1s ease-out 0.5s");
        assert!(shown.contains("opacity: 1"));
        assert!(shown.contains("transform: none"));
        // The transition survives the flip so the entrance animates.
        assert!(shown.contains("all 1s ease-out 0.5s"));
    }
}
