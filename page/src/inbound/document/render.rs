//! Plain-text rendering of container state for terminal output.

use crate::domain::ports::ContainerContent;

use super::memory::ContainerState;

/// Render container content as text.
///
/// List entries are bulleted one per line; an empty list renders as an
/// empty string, like an empty `<ul>`. Lines are separated by newlines.
///
/// # Examples
///
/// ```
/// use user_page::domain::ports::ContainerContent;
/// use user_page::inbound::document::render_content;
///
/// let list = ContainerContent::List(vec!["Leanne Graham".to_owned(), "Ervin Howell".to_owned()]);
/// assert_eq!(render_content(&list), "- Leanne Graham\n- Ervin Howell");
/// ```
pub fn render_content(content: &ContainerContent) -> String {
    match content {
        ContainerContent::Empty => String::new(),
        ContainerContent::Text(text) => text.clone(),
        ContainerContent::List(items) => items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n"),
        ContainerContent::Lines(lines) => lines.join("\n"),
    }
}

/// Render a container, prefixing each line with its colour when one is set.
/// Hidden containers render as `None`.
pub fn render_container(state: &ContainerState) -> Option<String> {
    if !state.visible {
        return None;
    }
    let body = render_content(&state.content);
    Some(match state.color {
        Some(color) => body
            .lines()
            .map(|line| format!("[{color}] {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
        None => body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FeedbackColor;
    use rstest::rstest;

    #[rstest]
    #[case(ContainerContent::Empty, "")]
    #[case(ContainerContent::Text("Failed to load user data.".to_owned()), "Failed to load user data.")]
    #[case(ContainerContent::List(Vec::new()), "")]
    #[case(ContainerContent::Lines(vec!["one".to_owned(), "two".to_owned()]), "one\ntwo")]
    fn renders_each_content_kind(#[case] content: ContainerContent, #[case] expected: &str) {
        assert_eq!(render_content(&content), expected);
    }

    #[test]
    fn coloured_containers_prefix_every_line() {
        let state = ContainerState {
            content: ContainerContent::Lines(vec!["first".to_owned(), "second".to_owned()]),
            color: Some(FeedbackColor::Failure),
            visible: true,
        };
        assert_eq!(
            render_container(&state).as_deref(),
            Some("[#dc3545] first\n[#dc3545] second")
        );
    }

    #[test]
    fn hidden_containers_render_nothing() {
        let state = ContainerState {
            visible: false,
            ..ContainerState::default()
        };
        assert_eq!(render_container(&state), None);
    }
}
