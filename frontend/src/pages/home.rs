use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;
use crate::sections::{
    about::About, community::Community, description::Description, footer::Footer, header::Header,
    hero::Hero, marquee::Marquee, support::Support,
};

/// Styles shared by every section: palette, glass panels, buttons, the reveal
/// transition and the keyframes the hero uses.
const BASE_STYLES: &str = r#"
    :root {
        --font-display: "Oswald", "Arial Narrow", sans-serif;
        --font-body: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    }
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: #050a14;
    }
    .volleyhub {
        min-height: 100vh;
        color: #fff;
        overflow-x: hidden;
        font-family: var(--font-body);
        background: linear-gradient(180deg, #050a14 0%, #0a1228 50%, #050a14 100%);
    }
    .page-section {
        position: relative;
        padding: 128px 0;
        overflow: hidden;
    }
    .section-content {
        position: relative;
        z-index: 10;
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 24px;
    }
    .two-column {
        display: grid;
        grid-template-columns: 1fr;
        gap: 64px;
        align-items: center;
    }
    @media (min-width: 1024px) {
        .two-column {
            grid-template-columns: 1fr 1fr;
        }
    }
    .section-heading {
        text-align: center;
        margin-bottom: 64px;
    }
    .section-title {
        font-family: var(--font-display);
        font-weight: 700;
        font-size: clamp(2.5rem, 5vw, 4.5rem);
        line-height: 0.95;
        text-transform: uppercase;
        margin: 0 0 24px;
    }
    .section-title .block {
        display: block;
    }
    .section-subtitle {
        color: rgba(255, 255, 255, 0.5);
        font-size: 18px;
        max-width: 576px;
        margin: 16px auto 0;
    }
    .section-pill {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        padding: 8px 16px;
        border-radius: 999px;
        margin-bottom: 24px;
        font-size: 12px;
        letter-spacing: 0.1em;
        text-transform: uppercase;
        color: #93c5fd;
        background: rgba(59, 130, 246, 0.1);
        border: 1px solid rgba(59, 130, 246, 0.2);
    }
    .pulse-dot {
        width: 8px;
        height: 8px;
        border-radius: 50%;
        background: #60a5fa;
        animation: pulse 2s infinite;
    }
    .glass {
        background: rgba(255, 255, 255, 0.04);
        backdrop-filter: blur(16px);
        border: 1px solid rgba(255, 255, 255, 0.06);
    }
    .glass-blue {
        background: rgba(59, 130, 246, 0.1);
        backdrop-filter: blur(16px);
        border: 1px solid rgba(59, 130, 246, 0.2);
    }
    .border-glow {
        box-shadow: 0 0 40px rgba(59, 130, 246, 0.15);
        border: 1px solid rgba(59, 130, 246, 0.2);
    }
    .text-gradient {
        background: linear-gradient(90deg, #60a5fa, #a855f7);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .accent-text {
        color: #60a5fa;
    }
    .muted {
        color: rgba(255, 255, 255, 0.4);
        font-size: 14px;
    }
    .card-title {
        font-family: var(--font-display);
        font-weight: 600;
        font-size: 18px;
        margin: 0 0 8px;
    }
    .body-copy {
        color: rgba(255, 255, 255, 0.5);
        line-height: 1.6;
        margin-bottom: 24px;
    }
    .icon {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        line-height: 1;
    }
    .icon-circle,
    .icon-square {
        width: 48px;
        height: 48px;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(59, 130, 246, 0.15);
        border-radius: 50%;
    }
    .icon-square {
        width: 40px;
        height: 40px;
        border-radius: 12px;
    }
    .glow-orb {
        position: absolute;
        border-radius: 50%;
        filter: blur(120px);
        pointer-events: none;
    }
    .glow-blue {
        background: rgba(37, 99, 235, 0.1);
    }
    .glow-purple {
        background: rgba(147, 51, 234, 0.1);
    }
    .logo {
        display: flex;
        align-items: center;
        gap: 8px;
        color: #fff;
        text-decoration: none;
    }
    .logo-ball {
        width: 36px;
        height: 36px;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 18px;
        flex-shrink: 0;
        background: linear-gradient(135deg, #3b82f6, #9333ea);
    }
    .logo-text {
        font-family: var(--font-display);
        font-size: 20px;
        font-weight: 700;
        letter-spacing: 0.05em;
    }
    .btn-primary-vh,
    .btn-outline-vh {
        font-family: var(--font-display);
        font-weight: 600;
        letter-spacing: 0.02em;
        color: #fff;
        cursor: pointer;
        transition: all 0.3s;
    }
    .btn-primary-vh {
        border: none;
        background: linear-gradient(90deg, #3b82f6, #9333ea);
        box-shadow: 0 0 24px rgba(59, 130, 246, 0.35);
    }
    .btn-primary-vh:hover {
        box-shadow: 0 0 36px rgba(147, 51, 234, 0.5);
    }
    .btn-outline-vh {
        background: transparent;
        border: 1px solid rgba(255, 255, 255, 0.2);
    }
    .btn-outline-vh:hover {
        border-color: rgba(96, 165, 250, 0.6);
    }
    .pill-button {
        padding: 8px 20px;
        border-radius: 999px;
        font-size: 14px;
    }
    .cta-button {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        padding: 14px 32px;
        border-radius: 999px;
        font-size: 16px;
    }
    .anim-section {
        transition: opacity 0.7s ease, transform 0.7s ease;
    }
    .anim-section.reveal-hidden {
        opacity: 0;
        transform: translateY(40px);
    }
    .anim-section.reveal-visible {
        opacity: 1;
        transform: translateY(0);
    }
    .animate-fade-up {
        animation: fade-up 0.8s ease-out both;
    }
    .delay-200 { animation-delay: 0.2s; }
    .delay-400 { animation-delay: 0.4s; }
    .delay-500 { animation-delay: 0.5s; }
    .delay-600 { animation-delay: 0.6s; }
    .animate-float {
        animation: float 3s ease-in-out infinite;
    }
    .animate-glow {
        animation: glow 3s ease-in-out infinite;
    }
    @keyframes fade-up {
        from { opacity: 0; transform: translateY(24px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes float {
        0%, 100% { transform: translate(-50%, 0); }
        50% { transform: translate(-50%, -8px); }
    }
    @keyframes glow {
        0%, 100% { box-shadow: 0 0 12px rgba(59, 130, 246, 0.4); }
        50% { box-shadow: 0 0 24px rgba(147, 51, 234, 0.6); }
    }
    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.4; }
    }
    @media (prefers-reduced-motion: reduce) {
        .anim-section,
        .anim-section.reveal-hidden {
            transition: none;
            opacity: 1;
            transform: none;
        }
    }
"#;

#[function_component(Home)]
pub fn home() -> Html {
    let site = use_memo(|_| SiteConfig::load(), ());
    let socials = Rc::new(site.socials.clone());
    let images = &site.images;

    html! {
        <div class="volleyhub">
            <style>{BASE_STYLES}</style>
            <Header socials={socials.clone()} />
            <Hero image={images.hero.clone()} />
            <Marquee />
            <Description arena_image={images.arena.clone()} />
            <Community character_image={images.character.clone()} />
            <About portrait={images.character.clone()} />
            <Support />
            <Footer {socials} />
        </div>
    }
}
