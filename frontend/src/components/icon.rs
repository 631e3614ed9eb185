use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconName {
    Award,
    Bell,
    Check,
    ChevronDown,
    Download,
    Gamepad,
    Globe,
    Heart,
    Menu,
    MessageCircle,
    MessageSquare,
    Mic,
    Music,
    Play,
    Send,
    Star,
    Trophy,
    Users,
    Close,
    Youtube,
    Zap,
}

impl IconName {
    /// Parses a configured icon name. Case, dashes and underscores are
    /// ignored, so `message-circle`, `MessageCircle` and `message_circle`
    /// all resolve to the same icon.
    pub fn parse(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let icon = match key.as_str() {
            "award" => Self::Award,
            "bell" => Self::Bell,
            "check" => Self::Check,
            "chevrondown" => Self::ChevronDown,
            "download" => Self::Download,
            "gamepad" | "gamepad2" => Self::Gamepad,
            "globe" => Self::Globe,
            "heart" => Self::Heart,
            "menu" => Self::Menu,
            "messagecircle" => Self::MessageCircle,
            "messagesquare" => Self::MessageSquare,
            "mic" => Self::Mic,
            "music" => Self::Music,
            "play" => Self::Play,
            "send" => Self::Send,
            "star" => Self::Star,
            "trophy" => Self::Trophy,
            "users" => Self::Users,
            "x" | "close" => Self::Close,
            "youtube" => Self::Youtube,
            "zap" => Self::Zap,
            _ => return None,
        };
        Some(icon)
    }

    pub fn parse_or(name: &str, fallback: IconName) -> Self {
        Self::parse(name).unwrap_or(fallback)
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Award => "🏅",
            Self::Bell => "🔔",
            Self::Check => "✓",
            Self::ChevronDown => "⌄",
            Self::Download => "⤓",
            Self::Gamepad => "🎮",
            Self::Globe => "🌐",
            Self::Heart => "♥",
            Self::Menu => "☰",
            Self::MessageCircle => "💬",
            Self::MessageSquare => "🗨",
            Self::Mic => "🎙",
            Self::Music => "♪",
            Self::Play => "▶",
            Self::Send => "➤",
            Self::Star => "★",
            Self::Trophy => "🏆",
            Self::Users => "👥",
            Self::Close => "✕",
            Self::Youtube => "▶",
            Self::Zap => "⚡",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Award => "award",
            Self::Bell => "bell",
            Self::Check => "check",
            Self::ChevronDown => "chevron-down",
            Self::Download => "download",
            Self::Gamepad => "gamepad",
            Self::Globe => "globe",
            Self::Heart => "heart",
            Self::Menu => "menu",
            Self::MessageCircle => "message-circle",
            Self::MessageSquare => "message-square",
            Self::Mic => "mic",
            Self::Music => "music",
            Self::Play => "play",
            Self::Send => "send",
            Self::Star => "star",
            Self::Trophy => "trophy",
            Self::Users => "users",
            Self::Close => "x",
            Self::Youtube => "youtube",
            Self::Zap => "zap",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,
    #[prop_or(16)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let style = format!(
        "font-size: {size}px; width: {size}px; height: {size}px;",
        size = props.size
    );

    html! {
        <span
            class={classes!("icon", format!("icon-{}", props.name.slug()), props.class.clone())}
            style={style}
            aria-hidden="true"
        >
            {props.name.glyph()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::IconName;

    #[test]
    fn parses_configured_spellings() {
        assert_eq!(IconName::parse("Send"), Some(IconName::Send));
        assert_eq!(IconName::parse("MessageCircle"), Some(IconName::MessageCircle));
        assert_eq!(IconName::parse("message-circle"), Some(IconName::MessageCircle));
        assert_eq!(IconName::parse("Gamepad2"), Some(IconName::Gamepad));
        assert_eq!(IconName::parse("X"), Some(IconName::Close));
    }

    #[test]
    fn unknown_names_use_the_fallback() {
        assert_eq!(IconName::parse("Snapchat"), None);
        assert_eq!(IconName::parse_or("Snapchat", IconName::Globe), IconName::Globe);
        assert_eq!(IconName::parse_or("", IconName::Star), IconName::Star);
    }
}
