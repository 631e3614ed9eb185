use std::rc::Rc;

use yew::prelude::*;

use crate::components::icon::Icon;
use crate::config::SocialLink;

#[derive(Properties, PartialEq)]
pub struct SocialRowProps {
    pub socials: Rc<Vec<SocialLink>>,
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub link_class: Classes,
}

#[function_component(SocialRow)]
pub fn social_row(props: &SocialRowProps) -> Html {
    html! {
        <div class={classes!("social-row", props.class.clone())}>
            <style>
                {r#"
                    .social-row {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                    }
                    .social-link {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: rgba(255, 255, 255, 0.4);
                        transition: color 0.2s;
                    }
                    .social-link:hover {
                        color: #60a5fa;
                    }
                "#}
            </style>
            { for props.socials.iter().map(|social| html! {
                <a
                    key={social.label.clone()}
                    href={social.href().to_string()}
                    title={social.label.clone()}
                    class={classes!("social-link", props.link_class.clone())}
                >
                    <Icon name={social.icon()} size={props.size} />
                </a>
            })}
        </div>
    }
}
