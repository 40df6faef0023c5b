use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Fraction of the pointer-to-center distance the button drifts.
const PULL: f64 = 0.15;

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Dark,
    Light,
    Clay,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Dark => "magnetic-dark",
            ButtonVariant::Light => "magnetic-light",
            ButtonVariant::Clay => "magnetic-clay",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(ButtonVariant::Dark)]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Displacement toward the pointer for a control occupying the given box,
/// damped so the control trails the cursor instead of sticking to it.
/// A box with no area reports no displacement.
pub fn magnetic_offset(
    pointer_x: f64,
    pointer_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (pointer_x - (left + width / 2.0)) * PULL;
    let y = (pointer_y - (top + height / 2.0)) * PULL;
    (x, y)
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let offset = use_state(|| (0.0f64, 0.0f64));

    let onmousemove = {
        let offset = offset.clone();
        Callback::from(move |e: MouseEvent| {
            let element = e
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok());
            if let Some(element) = element {
                // Measure at event time so reflow is picked up.
                let rect = element.get_bounding_client_rect();
                offset.set(magnetic_offset(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                ));
            }
        })
    };

    let onmouseleave = {
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| offset.set((0.0, 0.0)))
    };

    let (x, y) = *offset;
    html! {
        <button
            class={classes!("magnetic-button", props.variant.class(), props.class.clone())}
            style={format!("transform: translate({x}px, {y}px);")}
            {onmousemove}
            {onmouseleave}
            onclick={props.onclick.clone()}
        >
            <div class="magnetic-fill"></div>
            <span class="magnetic-label">{ for props.children.iter() }</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::magnetic_offset;

    #[test]
    fn offset_is_damped_distance_from_center() {
        // 200x100 box at (100, 50), center (200, 100).
        let (x, y) = magnetic_offset(240.0, 80.0, 100.0, 50.0, 200.0, 100.0);
        assert!((x - 6.0).abs() < 1e-9);
        assert!((y + 3.0).abs() < 1e-9);
    }

    #[test]
    fn pointer_at_center_gives_zero_offset() {
        assert_eq!(
            magnetic_offset(200.0, 100.0, 100.0, 50.0, 200.0, 100.0),
            (0.0, 0.0)
        );
    }

    #[test]
    fn zero_size_box_is_a_no_op() {
        assert_eq!(
            magnetic_offset(240.0, 80.0, 100.0, 50.0, 0.0, 100.0),
            (0.0, 0.0)
        );
        assert_eq!(
            magnetic_offset(240.0, 80.0, 100.0, 50.0, 200.0, 0.0),
            (0.0, 0.0)
        );
    }
}
