use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icons::{Icon, IconKind};
use crate::components::layout::{Section, Sticky};
use crate::hooks::{use_checked_keyframes, use_scroll_progress};
use crate::motion::{Keyframes, MotionStyle, ScrollOffset};

pub const HERO_Y: Keyframes = Keyframes::new(&[(0.0, 0.0), (1.0, -150.0)]);
pub const HERO_OPACITY: Keyframes = Keyframes::new(&[(0.0, 1.0), (0.6, 1.0), (1.0, 0.0)]);
pub const HERO_SCALE: Keyframes = Keyframes::new(&[(0.0, 1.0), (1.0, 0.95)]);

const TABLES: &[(&str, Keyframes)] = &[
    ("hero y", HERO_Y),
    ("hero opacity", HERO_OPACITY),
    ("hero scale", HERO_SCALE),
];

pub fn hero_motion(progress: f64) -> MotionStyle {
    MotionStyle {
        y: HERO_Y.sample(progress),
        opacity: HERO_OPACITY.sample(progress),
        scale: HERO_SCALE.sample(progress),
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let track = use_node_ref();
    let progress = use_scroll_progress(track.clone(), ScrollOffset::PINNED);
    use_checked_keyframes(TABLES);

    html! {
        <Section class={classes!("section--dark")}>
            <div ref={track} class="hero__track">
                <Sticky class={classes!("hero__stage")}>
                    <div class="hero__content" style={hero_motion(progress).to_css()}>
                        <div class="hero__badge">
                            <Icon kind={IconKind::Zap} class={classes!("icon--small", "hero__badge-icon")} />
                            <span>{"Charge • Connect • Care"}</span>
                        </div>
                        <h1 class="hero__title">
                            {"Mobile EV charging, on demand —"}
                            <span class="gradient-text">{" anywhere in the DMV"}</span>
                        </h1>
                        <p class="hero__subtitle">
                            {"Triple C Emergency Charging Services brings the charge to you. Smooth dispatch, secure payment, real-time ETA."}
                        </p>
                        <div class="hero__actions">
                            <Button class={classes!("btn--large")}>{"Request a Charge"}</Button>
                            <Button variant={ButtonVariant::Secondary} class={classes!("btn--large", "btn--ghost")}>
                                {"How it works"}
                            </Button>
                        </div>
                    </div>
                </Sticky>
            </div>
        </Section>
    }
}

pub const STYLES: &str = r#"
    .hero__track {
        position: relative;
        height: 160vh;
    }
    .hero__stage {
        background: radial-gradient(90% 60% at 50% 40%, rgba(56, 189, 248, 0.2), rgba(0, 0, 0, 0) 70%);
    }
    .hero__content {
        margin: 0 auto;
        max-width: 72rem;
        padding: 0 1.5rem;
        text-align: center;
        will-change: transform, opacity;
    }
    .hero__badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 1.5rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.1);
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.9);
    }
    .hero__badge-icon {
        color: #67e8f9;
    }
    .hero__title {
        margin: 0;
        font-size: 2.25rem;
        font-weight: 700;
        letter-spacing: -0.025em;
        line-height: 1.05;
    }
    .hero__subtitle {
        margin: 1rem auto 0;
        max-width: 42rem;
        font-size: 1.125rem;
        color: rgba(255, 255, 255, 0.8);
    }
    .hero__actions {
        margin-top: 2rem;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
    }
    @media (min-width: 768px) {
        .hero__title {
            font-size: 3.75rem;
        }
        .hero__subtitle {
            font-size: 1.25rem;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tables_are_well_formed() {
        for (name, table) in TABLES {
            assert_eq!(table.validate(), Ok(()), "{name}");
        }
    }

    #[test]
    fn resting_hero_is_untouched() {
        assert_eq!(hero_motion(0.0), MotionStyle::default());
    }

    #[test]
    fn hero_holds_opacity_then_fades() {
        let halfway = hero_motion(0.5);
        assert_relative_eq!(halfway.y, -75.0);
        assert_eq!(halfway.opacity, 1.0);
        assert_relative_eq!(halfway.scale, 0.975);

        let late = hero_motion(0.8);
        assert_relative_eq!(late.opacity, 0.5);

        let gone = hero_motion(1.0);
        assert_eq!(gone.opacity, 0.0);
        assert_eq!(gone.y, -150.0);
        assert_eq!(gone.scale, 0.95);
    }
}
