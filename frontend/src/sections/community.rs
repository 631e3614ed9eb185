use yew::prelude::*;

use crate::components::anim_section::AnimSection;
use crate::components::icon::{Icon, IconName};
use crate::content::{SectionId, COMMUNITY_CARDS};

#[derive(Properties, PartialEq)]
pub struct CommunityProps {
    pub character_image: AttrValue,
}

#[function_component(Community)]
pub fn community(props: &CommunityProps) -> Html {
    html! {
        <section id={SectionId::Screenshots.id()} class="community page-section">
            <style>
                {r#"
                    .showcase-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 24px;
                        margin-bottom: 48px;
                    }
                    @media (min-width: 1024px) {
                        .showcase-grid {
                            grid-template-columns: 2fr 1fr;
                        }
                    }
                    .showcase-image {
                        position: relative;
                        height: 320px;
                        border-radius: 16px;
                        overflow: hidden;
                    }
                    .showcase-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .showcase-image:hover img {
                        transform: scale(1.05);
                    }
                    .showcase-image .fade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(5, 10, 20, 0.8), transparent);
                    }
                    .showcase-caption {
                        position: absolute;
                        bottom: 24px;
                        left: 24px;
                    }
                    .showcase-caption h3 {
                        font-family: var(--font-display);
                        font-size: 24px;
                        text-transform: uppercase;
                        margin: 0;
                    }
                    .showcase-caption p {
                        font-size: 14px;
                        color: rgba(255, 255, 255, 0.6);
                        margin: 4px 0 0;
                    }
                    .showcase-side {
                        display: flex;
                        flex-direction: column;
                        gap: 24px;
                        height: 320px;
                    }
                    .player-count {
                        flex: 1;
                        border-radius: 16px;
                        padding: 24px;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                    }
                    .player-count .value {
                        font-family: var(--font-display);
                        font-weight: 700;
                        font-size: 48px;
                    }
                    .join-card {
                        border-radius: 16px;
                        padding: 24px;
                        display: flex;
                        align-items: center;
                        gap: 16px;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 16px;
                    }
                    @media (min-width: 768px) {
                        .card-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                    .community-card {
                        height: 100%;
                        border-radius: 16px;
                        padding: 24px;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        transition: all 0.3s;
                    }
                    .community-card:hover {
                        transform: translateY(-4px);
                        border-color: rgba(59, 130, 246, 0.3);
                    }
                    .community-card .card-top {
                        display: flex;
                        align-items: flex-start;
                        justify-content: space-between;
                        margin-bottom: 16px;
                    }
                    .badge {
                        font-size: 12px;
                        color: #60a5fa;
                        background: rgba(59, 130, 246, 0.1);
                        padding: 4px 12px;
                        border-radius: 999px;
                    }
                "#}
            </style>
            <div class="glow-orb glow-blue" style="top: 0; left: 50%; width: 800px; height: 400px; transform: translateX(-50%);"></div>

            <div class="section-content">
                <AnimSection class="section-heading">
                    <div class="section-pill">
                        <Icon name={IconName::MessageSquare} size={14} />
                        <span>{"Сообщество"}</span>
                    </div>
                    <h2 class="section-title">
                        <span>{"ВАШЕ СЛОВО — НАШ"}</span>
                        <br />
                        <span class="text-gradient">{"СЛЕДУЮЩИЙ АПДЕЙТ"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"Давайте обсудим игру! Каждый фидбэк помогает нам сделать VolleyHub лучше."}
                    </p>
                </AnimSection>

                <div class="showcase-grid">
                    <AnimSection>
                        <div class="showcase-image border-glow">
                            <img src={props.character_image.clone()} alt="Community Character" />
                            <div class="fade"></div>
                            <div class="showcase-caption">
                                <h3>{"Играй и общайся"}</h3>
                                <p>{"Живое сообщество игроков"}</p>
                            </div>
                        </div>
                    </AnimSection>

                    <AnimSection>
                        <div class="showcase-side">
                            <div class="player-count glass border-glow">
                                <div class="value text-gradient">{"10K+"}</div>
                                <div>
                                    <div class="card-title">{"Активных игроков"}</div>
                                    <div class="muted">{"в нашем сообществе"}</div>
                                </div>
                            </div>
                            <div class="join-card glass-blue">
                                <div class="icon-circle">
                                    <Icon name={IconName::Send} size={20} class="accent-text" />
                                </div>
                                <div>
                                    <div class="card-title">{"Telegram"}</div>
                                    <div class="muted">{"Присоединиться"}</div>
                                </div>
                            </div>
                        </div>
                    </AnimSection>
                </div>

                <div class="card-grid">
                    { for COMMUNITY_CARDS.iter().map(|card| html! {
                        <AnimSection key={card.title}>
                            <div class="community-card glass">
                                <div class="card-top">
                                    <div class="icon-square">
                                        <Icon name={card.icon} size={18} class="accent-text" />
                                    </div>
                                    <span class="badge">{card.badge}</span>
                                </div>
                                <h3 class="card-title">{card.title}</h3>
                                <p class="muted">{card.desc}</p>
                            </div>
                        </AnimSection>
                    })}
                </div>
            </div>
        </section>
    }
}
