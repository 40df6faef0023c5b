use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Portion of the element that must be visible before the reveal fires.
const REVEAL_THRESHOLD: f64 = 0.1;
/// Stagger between consecutive words, in seconds.
const WORD_STAGGER_S: f64 = 0.05;

#[derive(Properties, PartialEq)]
pub struct SplitTextRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Inline style for the word at `index`. The transition delay grows with the
/// index so revealed words cascade left to right.
fn word_style(index: usize, in_view: bool) -> String {
    let (opacity, transform) = if in_view {
        ("1", "translateY(0)")
    } else {
        ("0", "translateY(100%)")
    };
    format!(
        "opacity: {}; transform: {}; transition: all 0.8s cubic-bezier(0.16, 1, 0.3, 1) {:.2}s;",
        opacity,
        transform,
        index as f64 * WORD_STAGGER_S,
    )
}

/// Reveals its text word by word the first time it scrolls into view.
/// The reveal is one-way: leaving the viewport never rewinds it.
#[function_component(SplitTextReveal)]
pub fn split_text_reveal(props: &SplitTextRevealProps) -> Html {
    let in_view = use_state(|| false);
    let node_ref = use_node_ref();

    {
        let in_view = in_view.clone();
        let node_ref = node_ref.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, _: IntersectionObserver| {
                        for entry in entries.iter() {
                            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                                if entry.is_intersecting() {
                                    in_view.set(true);
                                }
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                let mut init = IntersectionObserverInit::new();
                init.threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &init,
                )
                .expect("failed to create intersection observer");

                if let Some(element) = node_ref.cast::<Element>() {
                    observer.observe(&element);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    let words: Vec<&str> = props.text.split_whitespace().collect();
    html! {
        <span ref={node_ref} class={classes!("split-text", props.class.clone())}>
            { for words.iter().enumerate().map(|(index, word)| html! {
                <span class="split-word-clip">
                    <span class="split-word" style={word_style(index, *in_view)}>{ *word }</span>
                </span>
            }) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::word_style;

    #[test]
    fn hidden_words_are_transparent_and_dropped() {
        let style = word_style(0, false);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(100%)"));
    }

    #[test]
    fn revealed_words_are_opaque_and_in_place() {
        let style = word_style(0, true);
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("translateY(0)"));
        assert!(style.contains("0.00s"));
    }

    #[test]
    fn delay_grows_strictly_with_word_index() {
        let delay_of = |index: usize| {
            let style = word_style(index, true);
            let tail = style.rsplit(' ').next().unwrap();
            tail.trim_end_matches("s;").parse::<f64>().unwrap()
        };
        let mut last = -1.0;
        for index in 0..12 {
            let delay = delay_of(index);
            assert!(delay > last, "delay must rise with index");
            last = delay;
        }
    }
}
