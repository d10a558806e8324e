use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section class={classes!("section", props.class.clone())}>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StickyProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Viewport-height stage that stays pinned while its parent scrolls past.
#[function_component(Sticky)]
pub fn sticky(props: &StickyProps) -> Html {
    html! {
        <div class={classes!("sticky-stage", props.class.clone())}>
            <div class="sticky-stage__inner">
                { for props.children.iter() }
            </div>
        </div>
    }
}

pub const STYLES: &str = r#"
    .section {
        position: relative;
        width: 100%;
    }
    .section--dark {
        background: #000;
        color: #fff;
    }
    .section--light {
        background: #fff;
    }
    .section--muted {
        background: #f8fafc;
    }
    .container {
        margin: 0 auto;
        max-width: 72rem;
        padding: 6rem 1.5rem;
    }
    @media (min-width: 768px) {
        .container {
            padding-top: 9rem;
            padding-bottom: 9rem;
        }
    }
    .sticky-stage {
        position: sticky;
        top: 0;
        height: 100vh;
        display: flex;
        align-items: center;
    }
    .sticky-stage__inner {
        width: 100%;
    }
    .gradient-text {
        background: linear-gradient(to right, #67e8f9, #38bdf8, #3b82f6);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
"#;
