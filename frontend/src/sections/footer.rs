use std::rc::Rc;

use yew::prelude::*;

use crate::components::social_row::SocialRow;
use crate::config::SocialLink;
use crate::content::{COPYRIGHT, FOOTER_COLUMNS, LEGAL_LINKS};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub socials: Rc<Vec<SocialLink>>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        padding: 64px 0;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 48px;
                        margin-bottom: 48px;
                    }
                    @media (min-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 2fr 1fr 1fr 1fr;
                        }
                    }
                    .footer-blurb {
                        font-size: 14px;
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.4);
                        max-width: 320px;
                        margin: 16px 0 24px;
                    }
                    .footer-socials {
                        gap: 16px;
                    }
                    .footer-socials a {
                        width: 36px;
                        height: 36px;
                        border-radius: 8px;
                    }
                    .footer-column h4 {
                        font-family: var(--font-display);
                        font-size: 12px;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin: 0 0 16px;
                    }
                    .footer-column ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .footer-column li {
                        margin-bottom: 12px;
                    }
                    .footer-column a,
                    .footer-legal a {
                        font-size: 14px;
                        color: rgba(255, 255, 255, 0.4);
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-column a:hover {
                        color: #fff;
                    }
                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        padding-top: 32px;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 16px;
                        font-size: 14px;
                        color: rgba(255, 255, 255, 0.25);
                    }
                    .footer-legal {
                        display: flex;
                        align-items: center;
                        gap: 16px;
                    }
                    .footer-legal a {
                        font-size: 12px;
                        color: rgba(255, 255, 255, 0.25);
                    }
                "#}
            </style>
            <div class="section-content">
                <div class="footer-grid">
                    <div>
                        <div class="logo">
                            <div class="logo-ball">{"🏐"}</div>
                            <span class="logo-text">
                                {"VOLLEY"}<span class="text-gradient">{"HUB"}</span><span class="muted">{".FUN"}</span>
                            </span>
                        </div>
                        <p class="footer-blurb">
                            {"Многопользовательская волейбольная игра от независимой студии Singular Games."}
                        </p>
                        <SocialRow
                            socials={props.socials.clone()}
                            size={15}
                            class="footer-socials"
                            link_class="glass"
                        />
                    </div>

                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div key={column.title} class="footer-column">
                            <h4>{column.title}</h4>
                            <ul>
                                { for column.links.iter().map(|link| html! {
                                    <li key={*link}><a href="#">{*link}</a></li>
                                })}
                            </ul>
                        </div>
                    })}
                </div>

                <div class="footer-bottom">
                    <p>{COPYRIGHT}</p>
                    <div class="footer-legal">
                        { for LEGAL_LINKS.iter().enumerate().map(|(i, link)| html! {
                            <span key={*link} class="legal-item">
                                if i > 0 {
                                    <span>{"·"}</span>
                                }
                                <a href="#">{*link}</a>
                            </span>
                        })}
                    </div>
                </div>
            </div>
        </footer>
    }
}
