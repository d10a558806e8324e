use yew::prelude::*;

use crate::components::{
    button, card, cta, features, hero, icons, layout, pricing, progress_bar, story_panel,
};
use crate::components::cta::Cta;
use crate::components::features::Features;
use crate::components::hero::Hero;
use crate::components::icons::IconKind;
use crate::components::pricing::Pricing;
use crate::components::progress_bar::ProgressBar;
use crate::components::story_panel::{EmbedFrame, StoryPanel};
use crate::config::{CONNECT_IMAGE_URL, COVERAGE_MAP_URL, POWER_UP_IMAGE_URL};

fn page_styles() -> String {
    [
        layout::STYLES,
        button::STYLES,
        card::STYLES,
        icons::STYLES,
        progress_bar::STYLES,
        hero::STYLES,
        story_panel::STYLES,
        features::STYLES,
        pricing::STYLES,
        cta::STYLES,
    ]
    .concat()
}

#[function_component(Home)]
pub fn home() -> Html {
    let coverage_map = EmbedFrame {
        src: AttrValue::Static(COVERAGE_MAP_URL),
        title: AttrValue::Static("Washington DC coverage map"),
    };

    html! {
        <div class="landing-page">
            <ProgressBar />
            <Hero />
            <StoryPanel
                step={1}
                title="We find you fast"
                subtitle="Pin your location and tell us about your EV. Our dispatcher locks your ETA and sends a tech."
                icon={IconKind::MapPin}
                frame={coverage_map}
            />
            <StoryPanel
                step={2}
                title="We connect the charge"
                subtitle="The tech arrives, verifies safety, and connects the right adapter — no fuss."
                icon={IconKind::Plug}
                image={AttrValue::Static(CONNECT_IMAGE_URL)}
                invert={true}
            />
            <StoryPanel
                step={3}
                title="Power up and go"
                subtitle="Top up enough to reach your next charger or get back on your route."
                icon={IconKind::Car}
                image={AttrValue::Static(POWER_UP_IMAGE_URL)}
            />
            <Features />
            <Pricing />
            <Cta />
            <style>
                { page_styles() }
                {r#"
                    .landing-page {
                        background: #fff;
                        color: #0f172a;
                        overflow-x: clip;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_styles_cover_every_section() {
        let styles = page_styles();
        for selector in [
            ".btn--default",
            ".card__content",
            ".progress-bar",
            ".hero__track",
            ".story-panel__grid--inverted",
            ".features__grid",
            ".pricing__card",
            ".cta__grid",
            ".sticky-stage",
        ] {
            assert!(styles.contains(selector), "missing {selector}");
        }
    }
}
