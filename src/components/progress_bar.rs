use yew::prelude::*;

use crate::hooks::{use_page_progress, use_spring};
use crate::motion::PROGRESS_SPRING;

#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    let progress = use_page_progress();
    let scale = use_spring(progress, PROGRESS_SPRING);

    html! {
        <div class="progress-bar" style={format!("transform: scaleX({scale:.4});")}>
            <div class="progress-bar__fill"></div>
        </div>
    }
}

pub const STYLES: &str = r#"
    .progress-bar {
        position: fixed;
        top: 0;
        left: 0;
        z-index: 50;
        width: 100%;
        height: 4px;
        transform-origin: left;
        will-change: transform;
    }
    .progress-bar__fill {
        width: 100%;
        height: 100%;
        background: linear-gradient(to right, #22d3ee, #0ea5e9, #2563eb);
    }
"#;
