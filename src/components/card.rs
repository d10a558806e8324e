use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardContent)]
pub fn card_content(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card__content", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

pub const STYLES: &str = r#"
    .card {
        border-radius: 0.75rem;
        border: 1px solid #e2e8f0;
        background: #fff;
        color: #0f172a;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .card__content {
        padding: 1rem;
    }
"#;
