use yew::prelude::*;

use crate::hooks::use_reveal_once;
use crate::motion::{reveal_delay, MotionStyle, REVEAL_AMOUNT, REVEAL_DURATION, REVEAL_OFFSET};

/// Inline style for the `index`th staggered item, before or after it has come into view.
pub fn reveal_style(index: usize, revealed: bool) -> String {
    let motion = if revealed {
        MotionStyle::default()
    } else {
        MotionStyle {
            y: REVEAL_OFFSET,
            opacity: 0.0,
            scale: 1.0,
        }
    };
    let delay = reveal_delay(index);
    format!(
        "{} transition: transform {REVEAL_DURATION}s ease-out {delay:.2}s, opacity {REVEAL_DURATION}s ease-out {delay:.2}s;",
        motion.to_css()
    )
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Position in the group, sets the stagger delay.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone(), REVEAL_AMOUNT);

    html! {
        <div ref={node} class="reveal" style={reveal_style(props.index, revealed)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_items_sit_below_and_transparent() {
        let style = reveal_style(0, false);
        assert!(style.starts_with("transform: translate3d(0, 20.00px, 0) scale(1.0000); opacity: 0.0000;"));
        assert!(style.ends_with("transform 0.5s ease-out 0.00s, opacity 0.5s ease-out 0.00s;"));
    }

    #[test]
    fn revealed_items_rest_in_place_with_stagger() {
        let style = reveal_style(2, true);
        assert!(style.starts_with("transform: translate3d(0, 0.00px, 0) scale(1.0000); opacity: 1.0000;"));
        assert!(style.contains("ease-out 0.16s"));
    }
}
