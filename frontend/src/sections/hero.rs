use yew::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::content::{SectionId, HERO_ACCENT_LINE, HERO_HEADLINE, HERO_STATS};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub image: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section id={SectionId::Hero.id()} class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-backdrop img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.4;
                    }
                    .hero-backdrop .fade-right {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, #050a14, rgba(5, 10, 20, 0.7), transparent);
                    }
                    .hero-backdrop .fade-up {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, #050a14, transparent);
                    }
                    .hero-watermark {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        pointer-events: none;
                        font-family: var(--font-display);
                        font-weight: 700;
                        font-size: 18vw;
                        line-height: 1;
                        letter-spacing: 0.1em;
                        white-space: nowrap;
                        color: rgba(255, 255, 255, 0.03);
                        user-select: none;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 96px 24px 64px;
                        width: 100%;
                    }
                    .hero-copy {
                        max-width: 672px;
                    }
                    .hero h1 {
                        font-family: var(--font-display);
                        font-weight: 700;
                        line-height: 0.9;
                        margin: 0 0 24px;
                    }
                    .hero h1 span {
                        display: block;
                        font-size: clamp(3rem, 8vw, 7rem);
                        text-transform: uppercase;
                        letter-spacing: -0.02em;
                    }
                    .hero-subtitle {
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 18px;
                        line-height: 1.6;
                        max-width: 512px;
                        margin-bottom: 40px;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 16px;
                    }
                    .hero-stats {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 32px;
                        margin-top: 64px;
                    }
                    .hero-stat-value {
                        font-family: var(--font-display);
                        font-weight: 700;
                        font-size: 30px;
                    }
                    .hero-stat-label {
                        font-size: 12px;
                        color: rgba(255, 255, 255, 0.4);
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-top: 4px;
                    }
                    .scroll-cue {
                        position: absolute;
                        bottom: 32px;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 8px;
                        color: rgba(255, 255, 255, 0.3);
                        font-size: 12px;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        text-decoration: none;
                    }
                "#}
            </style>
            <div class="hero-backdrop">
                <img src={props.image.clone()} alt="VolleyHub Hero" />
                <div class="fade-right"></div>
                <div class="fade-up"></div>
            </div>

            <div class="hero-watermark">{"VOLLEYHUB"}</div>
            <div class="glow-orb glow-blue" style="top: 33%; left: 25%; width: 384px; height: 384px;"></div>
            <div class="glow-orb glow-purple" style="bottom: 25%; right: 33%; width: 320px; height: 320px;"></div>

            <div class="hero-content">
                <div class="hero-copy">
                    <div class="section-pill animate-fade-up">
                        <span class="pulse-dot"></span>
                        <span>{"Открытая бета"}</span>
                    </div>

                    <h1 class="animate-fade-up delay-200">
                        { for HERO_HEADLINE.iter().enumerate().map(|(i, line)| html! {
                            <span key={*line} class={classes!((i == HERO_ACCENT_LINE).then_some("text-gradient"))}>
                                {*line}
                            </span>
                        })}
                    </h1>

                    <p class="hero-subtitle animate-fade-up delay-400">
                        {"Каждый игрок — это история. Каждый матч — это шанс стать легендой. \
                          Присоединяйся к тысячам волейболистов по всему миру."}
                    </p>

                    <div class="hero-actions animate-fade-up delay-500">
                        <button class="btn-primary-vh cta-button">
                            <Icon name={IconName::Play} size={18} />
                            {"Отслеживать"}
                        </button>
                        <button class="btn-outline-vh cta-button">
                            <Icon name={IconName::MessageCircle} size={18} />
                            {"Связаться с нами"}
                        </button>
                    </div>

                    <div class="hero-stats animate-fade-up delay-600">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div key={stat.label}>
                                <div class="hero-stat-value">{stat.value}</div>
                                <div class="hero-stat-label">{stat.label}</div>
                            </div>
                        })}
                    </div>
                </div>
            </div>

            <a href={SectionId::Description.anchor()} class="scroll-cue animate-float">
                <span>{"Scroll"}</span>
                <Icon name={IconName::ChevronDown} size={20} />
            </a>
        </section>
    }
}
