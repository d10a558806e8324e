use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::layout::Section;
use crate::config::{CTA_IMAGE_URL, IMAGE_HEIGHT, IMAGE_SIZES, IMAGE_WIDTH};

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <Section class={classes!("section--dark")}>
            <div class="container cta__grid">
                <div>
                    <h3 class="cta__heading">{"Ready when you are."}</h3>
                    <p class="cta__copy">
                        {"Book a mobile charge in under a minute. We’ll meet you where you are — parking lot, roadside, or driveway."}
                    </p>
                    <div class="cta__actions">
                        <Button class={classes!("btn--large")}>{"Book a Charge"}</Button>
                        <Button variant={ButtonVariant::Secondary} class={classes!("btn--large", "btn--ghost")}>
                            {"See coverage"}
                        </Button>
                    </div>
                </div>
                <div class="cta__media">
                    <img
                        src={CTA_IMAGE_URL}
                        alt="EV charging at night"
                        width={IMAGE_WIDTH.to_string()}
                        height={IMAGE_HEIGHT.to_string()}
                        sizes={IMAGE_SIZES}
                        class="cta__image"
                        loading="lazy"
                    />
                </div>
            </div>
        </Section>
    }
}

pub const STYLES: &str = r#"
    .cta__grid {
        display: grid;
        align-items: center;
        gap: 2.5rem;
    }
    .cta__heading {
        margin: 0;
        font-size: 1.875rem;
        font-weight: 600;
        letter-spacing: -0.025em;
    }
    .cta__copy {
        margin-top: 0.75rem;
        max-width: 36rem;
        color: rgba(255, 255, 255, 0.8);
    }
    .cta__actions {
        margin-top: 1.5rem;
        display: flex;
        gap: 0.75rem;
    }
    .cta__media {
        position: relative;
        width: 100%;
        overflow: hidden;
        border-radius: 1.5rem;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25), 0 0 0 1px rgba(255, 255, 255, 0.1);
    }
    .cta__image {
        display: block;
        width: 100%;
        height: auto;
        object-fit: cover;
    }
    @media (min-width: 768px) {
        .cta__grid {
            grid-template-columns: repeat(2, minmax(0, 1fr));
        }
        .cta__heading {
            font-size: 2.25rem;
        }
    }
"#;
