use yew::prelude::*;

use crate::components::anim_section::AnimSection;
use crate::components::icon::{Icon, IconName};
use crate::content::{SectionId, FEATURES};

#[derive(Properties, PartialEq)]
pub struct DescriptionProps {
    pub arena_image: AttrValue,
}

#[function_component(Description)]
pub fn description(props: &DescriptionProps) -> Html {
    html! {
        <section id={SectionId::Description.id()} class="description page-section">
            <style>
                {r#"
                    .description-backdrop {
                        position: absolute;
                        inset: 0;
                    }
                    .description-backdrop img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.15;
                    }
                    .description-backdrop .fade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, #050a14, transparent, #050a14);
                    }
                    .lead {
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 18px;
                        line-height: 1.6;
                        margin-bottom: 16px;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 16px;
                        margin-bottom: 40px;
                    }
                    .feature-item {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        border-radius: 12px;
                        padding: 12px;
                        font-size: 14px;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .feature-icon {
                        width: 32px;
                        height: 32px;
                        flex-shrink: 0;
                        border-radius: 8px;
                        background: rgba(59, 130, 246, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .gameplay-card {
                        position: relative;
                        border-radius: 16px;
                        overflow: hidden;
                    }
                    .gameplay-card img {
                        width: 100%;
                        aspect-ratio: 4 / 3;
                        object-fit: cover;
                        display: block;
                    }
                    .match-toast {
                        position: absolute;
                        bottom: 24px;
                        left: 24px;
                        right: 24px;
                        border-radius: 12px;
                        padding: 16px;
                        display: flex;
                        align-items: center;
                        gap: 12px;
                    }
                    .match-toast .title {
                        font-family: var(--font-display);
                        font-weight: 700;
                        font-size: 14px;
                    }
                    .match-toast .meta {
                        font-size: 12px;
                        color: rgba(255, 255, 255, 0.5);
                    }
                    .live-dot {
                        margin-left: auto;
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: #4ade80;
                        animation: pulse 2s infinite;
                    }
                "#}
            </style>
            <div class="description-backdrop">
                <img src={props.arena_image.clone()} alt="Arena" />
                <div class="fade"></div>
            </div>
            <div class="glow-orb glow-purple" style="top: 50%; right: 0; width: 600px; height: 600px; transform: translateY(-50%);"></div>

            <div class="section-content">
                <div class="two-column">
                    <AnimSection>
                        <div class="section-pill">
                            <Icon name={IconName::Gamepad} size={14} />
                            <span>{"Игровой процесс"}</span>
                        </div>
                        <h2 class="section-title">
                            <span class="block">{"ЗАГЛЯНИ В МИР"}</span>
                            <span class="block text-gradient">{"СПОРТА"}</span>
                        </h2>
                        <p class="lead">
                            {"Играй, получай новый опыт, новых друзей. VolleyHub — многопользовательская \
                              волейбольная игра нового поколения."}
                        </p>
                        <p class="body-copy">
                            {"Создавай команды, участвуй в турнирах, прокачивай персонажа. \
                              Реалистичная механика, захватывающий геймплей и живое сообщество — \
                              всё это ждёт тебя в VolleyHub."}
                        </p>
                        <div class="feature-grid">
                            { for FEATURES.iter().map(|feature| html! {
                                <div key={feature.text} class="feature-item glass">
                                    <div class="feature-icon">
                                        <Icon name={feature.icon} size={16} class="accent-text" />
                                    </div>
                                    <span>{feature.text}</span>
                                </div>
                            })}
                        </div>
                        <button class="btn-primary-vh cta-button">
                            <Icon name={IconName::Download} size={18} />
                            {"Установить"}
                        </button>
                    </AnimSection>

                    <AnimSection>
                        <div class="gameplay-card border-glow">
                            <img src={props.arena_image.clone()} alt="Gameplay" />
                            <div class="match-toast glass">
                                <div class="logo-ball">{"🏐"}</div>
                                <div>
                                    <div class="title">{"Матч найден!"}</div>
                                    <div class="meta">{"12 игроков · Арена Москва"}</div>
                                </div>
                                <span class="live-dot"></span>
                            </div>
                        </div>
                    </AnimSection>
                </div>
            </div>
        </section>
    }
}
