use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn--default",
            ButtonVariant::Secondary => "btn--secondary",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    /// Rendered as the `type` attribute.
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

pub fn button_classes(variant: ButtonVariant, extra: &Classes) -> Classes {
    classes!("btn", variant.class(), extra.clone())
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={props.kind.clone()}
            class={button_classes(props.variant, &props.class)}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

pub const STYLES: &str = r#"
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        border-radius: 0.5rem;
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
        font-weight: 500;
        border: 1px solid transparent;
        cursor: pointer;
        transition: background-color 0.15s ease, color 0.15s ease;
    }
    .btn:focus-visible {
        outline: none;
        box-shadow: 0 0 0 2px #fff, 0 0 0 4px #38bdf8;
    }
    .btn:disabled {
        pointer-events: none;
        opacity: 0.6;
    }
    .btn--default {
        background: #0284c7;
        color: #fff;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .btn--default:hover,
    .btn--default:focus-visible {
        background: #0ea5e9;
    }
    .btn--secondary {
        background: #fff;
        color: #0f172a;
        border-color: #e2e8f0;
    }
    .btn--secondary:hover,
    .btn--secondary:focus-visible {
        background: #f1f5f9;
    }
    .btn--large {
        border-radius: 1rem;
        padding: 1.5rem;
        font-size: 1rem;
    }
    .btn--rounded {
        border-radius: 0.75rem;
        padding-top: 1.25rem;
        padding-bottom: 1.25rem;
    }
    .btn--ghost {
        background: rgba(255, 255, 255, 0.1);
        color: #fff;
        border-color: transparent;
    }
    .btn--ghost:hover {
        background: rgba(255, 255, 255, 0.2);
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_classes() {
        let classes = button_classes(ButtonVariant::default(), &Classes::new());
        assert!(classes.contains("btn"));
        assert!(classes.contains("btn--default"));
        assert!(!classes.contains("btn--secondary"));
    }

    #[test]
    fn caller_classes_are_appended() {
        let classes = button_classes(ButtonVariant::Secondary, &classes!("btn--large", "btn--ghost"));
        assert!(classes.contains("btn--secondary"));
        assert!(classes.contains("btn--large"));
        assert!(classes.contains("btn--ghost"));
    }
}
