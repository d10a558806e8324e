use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::layout::Section;
use crate::config::{IMAGE_HEIGHT, IMAGE_SIZES, IMAGE_WIDTH};
use crate::hooks::{use_checked_keyframes, use_scroll_progress};
use crate::motion::{Keyframes, MotionStyle, ScrollOffset};

pub const MEDIA_Y: Keyframes = Keyframes::new(&[(0.0, 60.0), (1.0, -60.0)]);
pub const TEXT_Y: Keyframes = Keyframes::new(&[(0.0, -20.0), (1.0, 20.0)]);
pub const PANEL_OPACITY: Keyframes =
    Keyframes::new(&[(0.0, 0.0), (0.25, 1.0), (0.75, 1.0), (1.0, 0.0)]);

const TABLES: &[(&str, Keyframes)] = &[
    ("panel media y", MEDIA_Y),
    ("panel text y", TEXT_Y),
    ("panel opacity", PANEL_OPACITY),
];

/// Third-party page shown inside the media box.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbedFrame {
    pub src: AttrValue,
    pub title: AttrValue,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelMedia {
    Frame(EmbedFrame),
    Image(AttrValue),
}

impl PanelMedia {
    /// An embed frame wins over a plain image when both are supplied.
    pub fn resolve(frame: Option<&EmbedFrame>, image: Option<&AttrValue>) -> Option<PanelMedia> {
        frame
            .cloned()
            .map(PanelMedia::Frame)
            .or_else(|| image.cloned().map(PanelMedia::Image))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSlot {
    Text,
    Media,
}

pub fn panel_order(invert: bool) -> [PanelSlot; 2] {
    if invert {
        [PanelSlot::Media, PanelSlot::Text]
    } else {
        [PanelSlot::Text, PanelSlot::Media]
    }
}

/// Styles for the text column and the media column at `progress`.
pub fn panel_motion(progress: f64) -> (MotionStyle, MotionStyle) {
    let opacity = PANEL_OPACITY.sample(progress);
    let text = MotionStyle {
        y: TEXT_Y.sample(progress),
        opacity,
        scale: 1.0,
    };
    let media = MotionStyle {
        y: MEDIA_Y.sample(progress),
        opacity,
        scale: 1.0,
    };
    (text, media)
}

#[derive(Properties, PartialEq)]
pub struct StoryPanelProps {
    pub step: u8,
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub icon: Option<IconKind>,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub frame: Option<EmbedFrame>,
    /// Puts the media column first.
    #[prop_or_default]
    pub invert: bool,
}

#[function_component(StoryPanel)]
pub fn story_panel(props: &StoryPanelProps) -> Html {
    let track = use_node_ref();
    let progress = use_scroll_progress(track.clone(), ScrollOffset::PASS_THROUGH);
    use_checked_keyframes(TABLES);

    let (text_motion, media_motion) = panel_motion(progress);

    let text = html! {
        <div class="story-panel__text" style={text_motion.to_css()}>
            <div class="story-panel__step">
                <span class="story-panel__step-number">{props.step}</span>
                <span class="story-panel__step-label">{format!("Step {}", props.step)}</span>
            </div>
            <h2 class="story-panel__title">
                {
                    if let Some(kind) = props.icon {
                        html! { <Icon kind={kind} class={classes!("story-panel__icon")} /> }
                    } else {
                        html! {}
                    }
                }
                {" "}{props.title.clone()}
            </h2>
            <p class="story-panel__subtitle">{props.subtitle.clone()}</p>
        </div>
    };

    let media_content = match PanelMedia::resolve(props.frame.as_ref(), props.image.as_ref()) {
        Some(PanelMedia::Frame(frame)) => html! {
            <iframe
                src={frame.src}
                title={frame.title}
                class="story-panel__map"
                loading="lazy"
                allowfullscreen="true"
                referrerpolicy="no-referrer-when-downgrade"
            />
        },
        Some(PanelMedia::Image(src)) => html! {
            <img
                src={src}
                alt={props.title.clone()}
                width={IMAGE_WIDTH.to_string()}
                height={IMAGE_HEIGHT.to_string()}
                sizes={IMAGE_SIZES}
                class="story-panel__image"
                loading="lazy"
            />
        },
        None => html! {},
    };

    let media = html! {
        <div class="story-panel__media" style={media_motion.to_css()}>
            <div class="story-panel__glow"></div>
            <div class="story-panel__frame">
                { media_content }
            </div>
        </div>
    };

    let mut text = Some(text);
    let mut media = Some(media);
    let columns = panel_order(props.invert)
        .into_iter()
        .filter_map(|slot| match slot {
            PanelSlot::Text => text.take(),
            PanelSlot::Media => media.take(),
        })
        .collect::<Html>();

    html! {
        <Section class={classes!("section--light")}>
            <div ref={track} class="container">
                <div class={classes!("story-panel__grid", props.invert.then_some("story-panel__grid--inverted"))}>
                    { columns }
                </div>
            </div>
        </Section>
    }
}

pub const STYLES: &str = r#"
    .story-panel__grid {
        display: grid;
        align-items: center;
        gap: 2.5rem;
    }
    .story-panel__text,
    .story-panel__media {
        will-change: transform, opacity;
    }
    .story-panel__media {
        position: relative;
    }
    .story-panel__step {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 1rem;
        font-size: 0.875rem;
        color: #0369a1;
    }
    .story-panel__step-number {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 1.5rem;
        height: 1.5rem;
        border-radius: 9999px;
        background: #e0f2fe;
        font-weight: 600;
    }
    .story-panel__step-label {
        text-transform: uppercase;
        letter-spacing: 0.025em;
    }
    .story-panel__title {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin: 0;
        font-size: 1.875rem;
        font-weight: 600;
        letter-spacing: -0.025em;
        color: #0f172a;
    }
    .story-panel__icon {
        color: #0ea5e9;
    }
    .story-panel__subtitle {
        margin-top: 1rem;
        font-size: 1.125rem;
        color: #475569;
    }
    .story-panel__glow {
        position: absolute;
        inset: 0;
        z-index: -1;
        border-radius: 1.5rem;
        background: linear-gradient(to bottom right, #e0f2fe, transparent);
        opacity: 0.7;
        filter: blur(40px);
    }
    .story-panel__frame {
        position: relative;
        width: 100%;
        overflow: hidden;
        border-radius: 1.5rem;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25), 0 0 0 1px rgba(0, 0, 0, 0.05);
    }
    .story-panel__image {
        display: block;
        width: 100%;
        height: auto;
        object-fit: cover;
    }
    .story-panel__map {
        display: block;
        width: 100%;
        height: 320px;
        border: 0;
    }
    /* Small screens always read text first */
    @media (max-width: 767px) {
        .story-panel__grid--inverted .story-panel__text {
            order: -1;
        }
    }
    @media (min-width: 768px) {
        .story-panel__grid {
            grid-template-columns: repeat(2, minmax(0, 1fr));
        }
        .story-panel__title {
            font-size: 2.25rem;
        }
        .story-panel__map {
            height: 420px;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn coverage_frame() -> EmbedFrame {
        EmbedFrame {
            src: AttrValue::Static("https://example.com/embed"),
            title: AttrValue::Static("coverage"),
        }
    }

    #[test]
    fn tables_are_well_formed() {
        for (name, table) in TABLES {
            assert_eq!(table.validate(), Ok(()), "{name}");
        }
    }

    #[test]
    fn text_leads_unless_inverted() {
        assert_eq!(panel_order(false), [PanelSlot::Text, PanelSlot::Media]);
        assert_eq!(panel_order(true), [PanelSlot::Media, PanelSlot::Text]);
    }

    #[test]
    fn frame_wins_over_image() {
        let image = AttrValue::Static("https://example.com/photo.jpg");
        assert_eq!(
            PanelMedia::resolve(Some(&coverage_frame()), Some(&image)),
            Some(PanelMedia::Frame(coverage_frame()))
        );
    }

    #[test]
    fn image_used_without_frame() {
        let image = AttrValue::Static("https://example.com/photo.jpg");
        assert_eq!(
            PanelMedia::resolve(None, Some(&image)),
            Some(PanelMedia::Image(image.clone()))
        );
        assert_eq!(PanelMedia::resolve(None, None), None);
    }

    #[test]
    fn panel_fades_in_holds_and_fades_out() {
        let (text, media) = panel_motion(0.0);
        assert_eq!(text.opacity, 0.0);
        assert_eq!(text.y, -20.0);
        assert_eq!(media.y, 60.0);

        let (text, media) = panel_motion(0.5);
        assert_eq!(text.opacity, 1.0);
        assert_relative_eq!(text.y, 0.0);
        assert_relative_eq!(media.y, 0.0);

        let (text, _) = panel_motion(0.875);
        assert_relative_eq!(text.opacity, 0.5);

        let (text, media) = panel_motion(1.0);
        assert_eq!(text.opacity, 0.0);
        assert_eq!(media.y, -60.0);
    }
}
