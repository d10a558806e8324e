use yew::prelude::*;

/// Line icons drawn on a 24x24 grid with the stroke following `currentColor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Zap,
    Plug,
    Car,
    MapPin,
    Smartphone,
    ShieldCheck,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let shapes = match props.kind {
        IconKind::Zap => html! {
            <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />
        },
        IconKind::Plug => html! {
            <>
                <path d="M12 22v-5" />
                <path d="M9 8V2" />
                <path d="M15 8V2" />
                <path d="M18 8v5a4 4 0 0 1-4 4h-4a4 4 0 0 1-4-4V8Z" />
            </>
        },
        IconKind::Car => html! {
            <>
                <path d="M19 17h2c.6 0 1-.4 1-1v-3c0-.9-.7-1.7-1.5-1.9C18.7 10.6 16 10 16 10s-1.3-1.4-2.2-2.3c-.5-.4-1.1-.7-1.8-.7H5c-.6 0-1.1.4-1.4.9l-1.4 2.9A3.7 3.7 0 0 0 2 12v4c0 .6.4 1 1 1h2" />
                <circle cx="7" cy="17" r="2" />
                <path d="M9 17h6" />
                <circle cx="17" cy="17" r="2" />
            </>
        },
        IconKind::MapPin => html! {
            <>
                <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                <circle cx="12" cy="10" r="3" />
            </>
        },
        IconKind::Smartphone => html! {
            <>
                <rect width="14" height="20" x="5" y="2" rx="2" ry="2" />
                <path d="M12 18h.01" />
            </>
        },
        IconKind::ShieldCheck => html! {
            <>
                <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10" />
                <path d="m9 12 2 2 4-4" />
            </>
        },
    };

    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class={classes!("icon", props.class.clone())}
        >
            { shapes }
        </svg>
    }
}

pub const STYLES: &str = r#"
    .icon {
        width: 2rem;
        height: 2rem;
        flex-shrink: 0;
    }
    .icon--small {
        width: 1rem;
        height: 1rem;
    }
"#;
