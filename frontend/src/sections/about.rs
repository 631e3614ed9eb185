use yew::prelude::*;

use crate::components::anim_section::AnimSection;
use crate::components::icon::{Icon, IconName};
use crate::content::{SectionId, TEAM_TAGS};

const DIRECTOR: &str = "Никита Петров";
const ROLE: &str = "Game Director";
const STUDIO: &str = "Singular Games";

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub portrait: AttrValue,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <section id={SectionId::About.id()} class="about page-section">
            <style>
                {r#"
                    .portrait {
                        position: relative;
                        width: 288px;
                        margin: 0 auto;
                    }
                    @media (min-width: 1024px) {
                        .portrait {
                            margin: 0;
                        }
                    }
                    .portrait .halo {
                        position: absolute;
                        inset: 0;
                        border-radius: 16px;
                        filter: blur(24px);
                        background: linear-gradient(135deg, rgba(59, 130, 246, 0.3), rgba(147, 51, 234, 0.3));
                    }
                    .portrait img {
                        position: relative;
                        width: 100%;
                        aspect-ratio: 3 / 4;
                        object-fit: cover;
                        border-radius: 16px;
                        display: block;
                    }
                    .role-badge {
                        position: absolute;
                        bottom: -16px;
                        right: -16px;
                        border-radius: 12px;
                        padding: 12px 16px;
                    }
                    .role-badge .studio {
                        font-size: 12px;
                        color: #93c5fd;
                    }
                    .about-name {
                        font-family: var(--font-display);
                        font-size: 36px;
                        text-transform: uppercase;
                        margin: 0 0 8px;
                    }
                    .role-line {
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                        margin-bottom: 24px;
                        font-size: 14px;
                    }
                    .quote {
                        border-radius: 16px;
                        padding: 24px;
                        margin-bottom: 24px;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .quote p {
                        margin: 0;
                        font-size: 18px;
                        font-style: italic;
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .tag-list {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 12px;
                    }
                    .tag {
                        padding: 8px 16px;
                        border-radius: 999px;
                        font-size: 14px;
                        color: #93c5fd;
                    }
                "#}
            </style>
            <div class="glow-orb glow-purple" style="bottom: 0; right: 0; width: 500px; height: 500px;"></div>

            <div class="section-content">
                <AnimSection class="section-heading">
                    <div class="section-pill">
                        <Icon name={IconName::Users} size={14} />
                        <span>{"Команда"}</span>
                    </div>
                    <h2 class="section-title">{"О НАС"}</h2>
                </AnimSection>

                <div class="two-column">
                    <AnimSection>
                        <div class="portrait">
                            <div class="halo"></div>
                            <img src={props.portrait.clone()} alt={DIRECTOR} class="border-glow" />
                            <div class="role-badge glass-blue">
                                <div class="card-title">{ROLE}</div>
                                <div class="studio">{STUDIO}</div>
                            </div>
                        </div>
                    </AnimSection>

                    <AnimSection>
                        <h3 class="about-name">{DIRECTOR}</h3>
                        <div class="role-line">
                            <span class="accent-text">{ROLE}</span>
                            <span class="muted">{"·"}</span>
                            <span class="muted">{STUDIO}</span>
                        </div>

                        <div class="quote glass">
                            <p>
                                {"\"Мы создаём VolleyHub, потому что верим: спортивные игры должны объединять людей, \
                                  а не разделять. Каждое обновление — это ваш голос.\""}
                            </p>
                        </div>

                        <p class="body-copy">
                            <strong>{STUDIO}</strong>
                            {" — независимая команда разработчиков-студентов, влюблённых в волейбол и игровую \
                              индустрию. Мы строим VolleyHub с нуля, опираясь на фидбэк сообщества и реальный \
                              опыт игроков."}
                        </p>

                        <div class="tag-list">
                            { for TEAM_TAGS.iter().map(|tag| html! {
                                <span key={*tag} class="tag glass-blue">{*tag}</span>
                            })}
                        </div>
                    </AnimSection>
                </div>
            </div>
        </section>
    }
}
