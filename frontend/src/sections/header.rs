use std::rc::Rc;

use yew::prelude::*;

use crate::components::icon::{Icon, IconName};
use crate::components::social_row::SocialRow;
use crate::config::{self, SocialLink};
use crate::content::{SectionId, LOGIN_LABEL, NAV_ITEMS};
use crate::observers::scroll::use_scrolled;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    Transparent,
    Opaque,
}

impl HeaderStyle {
    pub fn from_scrolled(scrolled: bool) -> Self {
        if scrolled {
            HeaderStyle::Opaque
        } else {
            HeaderStyle::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            HeaderStyle::Transparent => "header-transparent",
            HeaderStyle::Opaque => "header-opaque",
        }
    }
}

/// Mobile navigation panel. Pure state, nothing is registered with the
/// browser when it changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MobileMenu {
    #[default]
    Closed,
    Open,
}

impl MobileMenu {
    pub fn toggled(self) -> Self {
        match self {
            MobileMenu::Closed => MobileMenu::Open,
            MobileMenu::Open => MobileMenu::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MobileMenu::Open
    }

    pub fn button_icon(self) -> IconName {
        match self {
            MobileMenu::Closed => IconName::Menu,
            MobileMenu::Open => IconName::Close,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub socials: Rc<Vec<SocialLink>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scrolled = use_scrolled(config::HEADER_SCROLL_THRESHOLD);
    let menu = use_state_eq(MobileMenu::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    // Following a link closes the panel but keeps the default jump.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(MobileMenu::Closed);
        })
    };

    let style = HeaderStyle::from_scrolled(scrolled);

    html! {
        <header class={classes!("site-header", style.class())}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: all 0.3s ease;
                    }
                    .site-header.header-transparent {
                        padding: 20px 0;
                        background: transparent;
                    }
                    .site-header.header-opaque {
                        padding: 12px 0;
                        background: rgba(5, 10, 20, 0.75);
                        backdrop-filter: blur(16px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .header-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 24px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .header-nav {
                        display: flex;
                        align-items: center;
                        gap: 32px;
                    }
                    .header-nav a {
                        font-size: 14px;
                        color: rgba(255, 255, 255, 0.7);
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .header-nav a:hover {
                        color: #fff;
                    }
                    .header-actions {
                        display: flex;
                        align-items: center;
                        gap: 16px;
                    }
                    .burger-button {
                        display: none;
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.7);
                        cursor: pointer;
                    }
                    .mobile-menu {
                        margin-top: 8px;
                        padding: 16px 24px;
                        display: flex;
                        flex-direction: column;
                        gap: 16px;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .mobile-menu a {
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                        padding: 4px 0;
                    }
                    .mobile-menu .btn-primary-vh {
                        width: 100%;
                    }
                    @media (max-width: 1023px) {
                        .header-nav,
                        .header-actions {
                            display: none;
                        }
                        .burger-button {
                            display: block;
                        }
                    }
                    @media (min-width: 1024px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="header-content">
                <a href={SectionId::Hero.anchor()} class="logo">
                    <div class="logo-ball animate-glow">{"🏐"}</div>
                    <span class="logo-text">
                        {"VOLLEY"}<span class="text-gradient">{"HUB"}</span>
                    </span>
                </a>

                <nav class="header-nav">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a key={item.target.id()} href={item.target.anchor()}>{item.label}</a>
                    })}
                </nav>

                <div class="header-actions">
                    <SocialRow socials={props.socials.clone()} size={16} />
                    <button class="btn-primary-vh pill-button">{LOGIN_LABEL}</button>
                </div>

                <button class="burger-button" onclick={toggle_menu}>
                    <Icon name={menu.button_icon()} size={24} />
                </button>
            </div>

            {
                if menu.is_open() {
                    html! {
                        <div class="mobile-menu glass">
                            { for NAV_ITEMS.iter().map(|item| html! {
                                <a key={item.target.id()} href={item.target.anchor()} onclick={close_menu.clone()}>
                                    {item.label}
                                </a>
                            })}
                            <SocialRow socials={props.socials.clone()} size={18} />
                            <button class="btn-primary-vh pill-button">{LOGIN_LABEL}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::{HeaderStyle, MobileMenu};
    use crate::components::icon::IconName;
    use crate::config::HEADER_SCROLL_THRESHOLD;

    fn header_at(scroll_y: f64) -> HeaderStyle {
        HeaderStyle::from_scrolled(HEADER_SCROLL_THRESHOLD.is_past(scroll_y))
    }

    #[test]
    fn header_follows_scroll_position() {
        assert_eq!(header_at(0.0), HeaderStyle::Transparent);
        assert_eq!(header_at(100.0), HeaderStyle::Opaque);
        assert_eq!(header_at(10.0), HeaderStyle::Transparent);
    }

    #[test]
    fn header_flips_right_at_the_threshold() {
        assert_eq!(header_at(41.0), HeaderStyle::Opaque);
        assert_eq!(header_at(40.0), HeaderStyle::Transparent);
    }

    #[test]
    fn menu_starts_closed() {
        let menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert_eq!(menu.button_icon(), IconName::Menu);
    }

    #[test]
    fn menu_round_trips_to_closed() {
        let mut menu = MobileMenu::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            menu = menu.toggled();
            seen.push(menu);
        }
        assert_eq!(
            seen,
            vec![MobileMenu::Open, MobileMenu::Closed, MobileMenu::Open, MobileMenu::Closed]
        );
        assert_eq!(menu, MobileMenu::default());
    }

    #[test]
    fn open_menu_shows_close_icon() {
        assert_eq!(MobileMenu::Open.button_icon(), IconName::Close);
    }
}
