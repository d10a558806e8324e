use yew::prelude::*;

use crate::components::card::{Card, CardContent};
use crate::components::icons::{Icon, IconKind};
use crate::components::layout::Section;
use crate::components::reveal::Reveal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub text: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: IconKind::MapPin,
        title: "DMV Coverage",
        text: "We come to you — DC, Maryland, Virginia.",
    },
    Feature {
        icon: IconKind::Smartphone,
        title: "Live ETA & Updates",
        text: "Track arrival, contact driver, update location.",
    },
    Feature {
        icon: IconKind::ShieldCheck,
        title: "Safe & Insured",
        text: "Vetted techs. Secure payments. Serious about safety.",
    },
    Feature {
        icon: IconKind::Plug,
        title: "Multiple Connectors",
        text: "Adapters for popular EVs and charging standards.",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <Section class={classes!("section--muted")}>
            <div class="container">
                <div class="features__intro">
                    <h3 class="features__heading">{"Built for reliability"}</h3>
                    <p class="features__lead">{"No drama. Just power when you need it most."}</p>
                </div>
                <div class="features__grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <Reveal key={feature.title} index={index}>
                                <Card class={classes!("features__card")}>
                                    <CardContent class={classes!("features__card-body")}>
                                        <Icon kind={feature.icon} class={classes!("features__icon")} />
                                        <h4 class="features__title">{feature.title}</h4>
                                        <p class="features__text">{feature.text}</p>
                                    </CardContent>
                                </Card>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </Section>
    }
}

pub const STYLES: &str = r#"
    .features__intro {
        margin: 0 auto;
        max-width: 42rem;
        text-align: center;
    }
    .features__heading {
        margin: 0;
        font-size: 1.5rem;
        font-weight: 600;
        letter-spacing: -0.025em;
        color: #0f172a;
    }
    .features__lead {
        margin-top: 0.75rem;
        color: #475569;
    }
    .features__grid {
        margin-top: 3rem;
        display: grid;
        gap: 1.5rem;
    }
    .features__card {
        border-radius: 1rem;
        transition: box-shadow 0.2s ease;
    }
    .features__card:hover {
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
    }
    .features__card-body {
        padding: 1.5rem;
    }
    .features__icon {
        color: #0284c7;
    }
    .features__title {
        margin: 1rem 0 0;
        font-weight: 600;
        color: #0f172a;
    }
    .features__text {
        margin-top: 0.5rem;
        font-size: 0.875rem;
        color: #475569;
    }
    @media (min-width: 640px) {
        .features__grid {
            grid-template-columns: repeat(2, minmax(0, 1fr));
        }
    }
    @media (min-width: 768px) {
        .features__heading {
            font-size: 1.875rem;
        }
    }
    @media (min-width: 1024px) {
        .features__grid {
            grid-template-columns: repeat(4, minmax(0, 1fr));
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn feature_titles_are_unique() {
        // Titles double as list keys
        let titles: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
    }
}
