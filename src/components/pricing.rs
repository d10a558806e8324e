use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::card::{Card, CardContent};
use crate::components::icons::{Icon, IconKind};
use crate::components::layout::Section;

const INCLUDED: [&str; 3] = [
    "Dispatch within standard hours",
    "Live ETA and updates",
    "Adapter included (popular EVs)",
];

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <Section class={classes!("section--light")}>
            <div class="container">
                <div class="pricing__intro">
                    <h3 class="pricing__heading">{"Simple, transparent pricing"}</h3>
                    <p class="pricing__lead">{"Pay once dispatch is confirmed — no hidden fees."}</p>
                </div>
                <div class="pricing__row">
                    <Card class={classes!("pricing__card")}>
                        <CardContent class={classes!("pricing__body")}>
                            <Icon kind={IconKind::Plug} class={classes!("pricing__icon")} />
                            <h4 class="pricing__plan">{"Emergency Charge — Flat"}</h4>
                            <div class="pricing__price">
                                <span class="pricing__amount">{"$149"}</span>
                                <span class="pricing__note">{"+ per-mile after 15mi"}</span>
                            </div>
                            <ul class="pricing__list">
                                { for INCLUDED.iter().map(|item| html! { <li>{format!("• {item}")}</li> }) }
                            </ul>
                            <div class="pricing__actions">
                                <Button class={classes!("btn--rounded")}>{"Request Now"}</Button>
                                <Button variant={ButtonVariant::Secondary} class={classes!("btn--rounded")}>
                                    {"Talk to us"}
                                </Button>
                            </div>
                        </CardContent>
                    </Card>
                </div>
            </div>
        </Section>
    }
}

pub const STYLES: &str = r#"
    .pricing__intro {
        margin-bottom: 2.5rem;
        text-align: center;
    }
    .pricing__heading {
        margin: 0;
        font-size: 1.875rem;
        font-weight: 600;
        letter-spacing: -0.025em;
        color: #0f172a;
    }
    .pricing__lead {
        margin-top: 0.75rem;
        color: #475569;
    }
    .pricing__row {
        display: flex;
        justify-content: center;
    }
    .pricing__card {
        max-width: 32rem;
        border-radius: 1.5rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
    }
    .pricing__body {
        padding: 2rem;
        text-align: center;
    }
    .pricing__icon {
        display: block;
        margin: 0 auto;
        color: #0284c7;
    }
    .pricing__plan {
        margin: 1rem 0 0;
        font-weight: 600;
        color: #0f172a;
    }
    .pricing__price {
        margin-top: 1rem;
        display: flex;
        align-items: baseline;
        justify-content: center;
        gap: 0.5rem;
    }
    .pricing__amount {
        font-size: 2.25rem;
        font-weight: 700;
        letter-spacing: -0.025em;
    }
    .pricing__note {
        color: #64748b;
    }
    .pricing__list {
        margin: 1.5rem 0 0;
        padding: 0;
        list-style: none;
        text-align: left;
        font-size: 0.875rem;
        color: #475569;
    }
    .pricing__list li + li {
        margin-top: 0.5rem;
    }
    .pricing__actions {
        margin-top: 1.5rem;
        display: flex;
        justify-content: center;
        gap: 0.75rem;
    }
    @media (min-width: 768px) {
        .pricing__heading {
            font-size: 2.25rem;
        }
    }
"#;
