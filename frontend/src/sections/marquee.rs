use yew::prelude::*;

use crate::content::{MARQUEE_REPEAT, MARQUEE_TEXT};

#[function_component(Marquee)]
pub fn marquee() -> Html {
    html! {
        <div class="marquee">
            <style>
                {r#"
                    .marquee {
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                        padding: 16px 0;
                        overflow: hidden;
                        background: rgba(255, 255, 255, 0.02);
                    }
                    .marquee-track {
                        display: flex;
                        white-space: nowrap;
                        animation: marquee 30s linear infinite;
                    }
                    .marquee-track span {
                        font-family: var(--font-display);
                        font-weight: 700;
                        font-size: 14px;
                        letter-spacing: 0.3em;
                        color: rgba(255, 255, 255, 0.2);
                        margin-right: 32px;
                    }
                    @keyframes marquee {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                "#}
            </style>
            <div class="marquee-track">
                { for (0..MARQUEE_REPEAT).map(|i| html! {
                    <span key={i}>{MARQUEE_TEXT}</span>
                })}
            </div>
        </div>
    }
}
