use yew::prelude::*;

use crate::config;
use crate::observers::reveal::use_reveal;

/// The two visual states of an animated block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStage {
    Hidden,
    Visible,
}

impl RevealStage {
    pub fn from_revealed(revealed: bool) -> Self {
        if revealed {
            RevealStage::Visible
        } else {
            RevealStage::Hidden
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RevealStage::Hidden => "reveal-hidden",
            RevealStage::Visible => "reveal-visible",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(config::REVEAL_THRESHOLD)]
    pub threshold: f64,
}

/// Wrapper that slides its children in the first time it scrolls into view.
#[function_component(AnimSection)]
pub fn anim_section(props: &AnimSectionProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_reveal(node_ref.clone(), props.threshold);
    let stage = RevealStage::from_revealed(revealed);

    html! {
        <div ref={node_ref} class={classes!("anim-section", stage.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::RevealStage;
    use crate::config::REVEAL_THRESHOLD;
    use crate::observers::reveal::RevealLatch;

    #[test]
    fn stage_follows_flag() {
        assert_eq!(RevealStage::from_revealed(false), RevealStage::Hidden);
        assert_eq!(RevealStage::from_revealed(true), RevealStage::Visible);
        assert_ne!(RevealStage::Hidden.class(), RevealStage::Visible.class());
    }

    #[test]
    fn section_below_the_fold_reveals_for_good() {
        let mut latch = RevealLatch::new(REVEAL_THRESHOLD);
        let stage = |latch: &RevealLatch| RevealStage::from_revealed(latch.is_revealed());

        // Page loads with the section off screen.
        latch.observe(0.0);
        assert_eq!(stage(&latch), RevealStage::Hidden);

        // Scrolled into view bit by bit, then fully.
        latch.observe(0.05);
        assert_eq!(stage(&latch), RevealStage::Hidden);
        latch.observe(0.4);
        latch.observe(1.0);
        assert_eq!(stage(&latch), RevealStage::Visible);

        // Scrolled back out.
        latch.observe(0.0);
        assert_eq!(stage(&latch), RevealStage::Visible);
    }

    #[test]
    fn sections_latch_independently() {
        let mut upper = RevealLatch::new(REVEAL_THRESHOLD);
        let lower = RevealLatch::new(REVEAL_THRESHOLD);
        upper.observe(1.0);
        assert!(upper.is_revealed());
        assert!(!lower.is_revealed());
    }
}
