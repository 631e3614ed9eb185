use yew::prelude::*;

use crate::components::anim_section::AnimSection;
use crate::components::icon::{Icon, IconName};
use crate::content::{SectionId, SupportTier, SUPPORT_TIERS};

const POPULAR_LABEL: &str = "Популярный";

fn button_class(tier: &SupportTier) -> &'static str {
    if tier.popular {
        "btn-primary-vh"
    } else {
        "btn-outline-vh"
    }
}

#[derive(Properties, PartialEq)]
struct TierCardProps {
    tier: &'static SupportTier,
}

#[function_component(TierCard)]
fn tier_card(props: &TierCardProps) -> Html {
    let tier = props.tier;

    html! {
        <div class={classes!("tier-card", tier.accent.class())}>
            {
                if tier.popular {
                    html! { <div class="tier-ribbon"><span>{POPULAR_LABEL}</span></div> }
                } else {
                    html! {}
                }
            }
            <div class="tier-emoji">{tier.emoji}</div>
            <h3 class="tier-name">{tier.name}</h3>
            <div class="tier-price">
                <span class="amount">{tier.price}</span>
                <span class="period">{tier.period}</span>
            </div>
            <ul class="tier-perks">
                { for tier.perks.iter().map(|perk| html! {
                    <li key={*perk}>
                        <Icon name={IconName::Check} size={14} class="tier-accent" />
                        {*perk}
                    </li>
                })}
            </ul>
            <button class={classes!("tier-button", button_class(tier))}>{"Поддержать"}</button>
        </div>
    }
}

#[function_component(Support)]
pub fn support() -> Html {
    html! {
        <section id={SectionId::Support.id()} class="support page-section">
            <style>
                {r#"
                    .tier-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 24px;
                    }
                    @media (min-width: 768px) {
                        .tier-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                    .tier-card {
                        position: relative;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        border-radius: 16px;
                        padding: 24px;
                        border: 1px solid;
                        transition: transform 0.3s;
                        box-sizing: border-box;
                    }
                    .tier-card:hover {
                        transform: translateY(-8px);
                    }
                    .tier-card.accent-blue {
                        border-color: rgba(59, 130, 246, 0.2);
                        background: linear-gradient(to bottom, rgba(37, 99, 235, 0.2), rgba(30, 64, 175, 0.1));
                    }
                    .tier-card.accent-purple {
                        border-color: rgba(168, 85, 247, 0.4);
                        background: linear-gradient(to bottom, rgba(147, 51, 234, 0.2), rgba(37, 99, 235, 0.2));
                    }
                    .tier-card.accent-neutral {
                        border-color: rgba(255, 255, 255, 0.1);
                        background: linear-gradient(to bottom, rgba(255, 255, 255, 0.05), rgba(255, 255, 255, 0.02));
                    }
                    .accent-blue .tier-accent,
                    .accent-blue .amount {
                        color: #60a5fa;
                    }
                    .accent-purple .tier-accent,
                    .accent-purple .amount {
                        color: #c084fc;
                    }
                    .accent-neutral .tier-accent,
                    .accent-neutral .amount {
                        color: #fff;
                    }
                    .tier-ribbon {
                        position: absolute;
                        top: -12px;
                        left: 50%;
                        transform: translateX(-50%);
                    }
                    .tier-ribbon span {
                        font-size: 12px;
                        font-weight: 600;
                        padding: 6px 16px;
                        border-radius: 999px;
                        background: linear-gradient(to right, #3b82f6, #9333ea);
                    }
                    .tier-emoji {
                        font-size: 36px;
                        margin-bottom: 16px;
                    }
                    .tier-name {
                        font-family: var(--font-display);
                        font-size: 20px;
                        text-transform: uppercase;
                        margin: 0 0 8px;
                    }
                    .tier-price {
                        display: flex;
                        align-items: baseline;
                        gap: 4px;
                        margin-bottom: 24px;
                    }
                    .tier-price .amount {
                        font-family: var(--font-display);
                        font-weight: 700;
                        font-size: 36px;
                    }
                    .tier-price .period {
                        font-size: 14px;
                        color: rgba(255, 255, 255, 0.4);
                    }
                    .tier-perks {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 32px;
                        flex: 1;
                    }
                    .tier-perks li {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        font-size: 14px;
                        color: rgba(255, 255, 255, 0.7);
                        margin-bottom: 12px;
                    }
                    .tier-button {
                        width: 100%;
                        padding: 12px 0;
                        border-radius: 12px;
                    }
                "#}
            </style>
            <div class="glow-orb glow-blue" style="top: 50%; left: 50%; width: 700px; height: 400px; transform: translate(-50%, -50%);"></div>

            <div class="section-content">
                <AnimSection class="section-heading">
                    <div class="section-pill">
                        <Icon name={IconName::Heart} size={14} />
                        <span>{"Патронаж"}</span>
                    </div>
                    <h2 class="section-title">
                        <span>{"ПОДДЕРЖКА НАС —"}</span>
                        <br />
                        <span class="text-gradient">{"ДВИЖЕНИЕ"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"Помоги нам создать лучшую волейбольную игру. Каждый рубль идёт на развитие VolleyHub."}
                    </p>
                </AnimSection>

                <div class="tier-grid">
                    { for SUPPORT_TIERS.iter().map(|tier| html! {
                        <AnimSection key={tier.name}>
                            <TierCard {tier} />
                        </AnimSection>
                    })}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::button_class;
    use crate::content::SUPPORT_TIERS;

    #[test]
    fn only_the_popular_tier_gets_the_primary_button() {
        let classes: Vec<&str> = SUPPORT_TIERS.iter().map(button_class).collect();
        assert_eq!(classes, vec!["btn-outline-vh", "btn-primary-vh", "btn-outline-vh"]);
    }
}
