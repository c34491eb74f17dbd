//! Issue card component for the board
//!
//! A compact card view showing issue id, title, a body preview, and the
//! deadline with overdue highlighting.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Issue;
use crate::utils::text::wrap_text_lines;

/// Props for the IssueCard component
#[derive(Default, Props)]
pub struct IssueCardProps {
    /// The issue to display
    pub issue: Issue,
    /// Whether this card is selected
    pub is_selected: bool,
    /// Formatted deadline string
    pub deadline_label: String,
    /// Whether the deadline renders in the overdue color
    pub is_overdue: bool,
    /// Available width for the card content (in characters)
    pub width: Option<u32>,
}

/// Compact issue card for board columns
///
/// Layout:
/// ```text
/// +-------------------+
/// | a1b2c3d4          |
/// | Fix the login bug |
/// | body preview up   |
/// | to three lines... |
/// | 2026-07-01        |
/// +-------------------+
/// ```
#[component]
pub fn IssueCard(props: &IssueCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let issue = &props.issue;

    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let bg_color = if props.is_selected {
        Some(theme.highlight)
    } else {
        None
    };
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };
    let deadline_color = if props.is_selected {
        theme.highlight_text
    } else if props.is_overdue {
        theme.overdue
    } else {
        theme.text_dimmed
    };

    // Card has padding_left: 1, padding_right: 1 and 2 border chars, so the
    // text width is card_width - 4.
    let card_width = props.width.unwrap_or(24);
    let text_width = (card_width.saturating_sub(4) as usize).max(8);

    let title = if issue.title.is_empty() {
        "(no title)".to_string()
    } else {
        issue.title.clone()
    };
    let title_lines = wrap_text_lines(&title, text_width, 2);
    let body_lines = wrap_text_lines(&issue.body, text_width, 3);

    let indicator = if props.is_selected { ">" } else { " " };

    element! {
        View(
            width: 100pct,
            min_height: 3,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            background_color: bg_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            // ID row with selection indicator
            View(flex_direction: FlexDirection::Row) {
                Text(
                    content: indicator,
                    color: text_color,
                    weight: Weight::Bold,
                )
                Text(
                    content: issue.id.short(),
                    color: if props.is_selected { theme.highlight_text } else { theme.id_color },
                    weight: Weight::Bold,
                )
            }
            // Title rows (up to 2 lines)
            #(title_lines.iter().map(|line| {
                element! {
                    Text(
                        content: line.clone(),
                        color: text_color,
                        weight: Weight::Bold,
                    )
                }
            }))
            // Body preview (up to 3 lines)
            #(body_lines.iter().map(|line| {
                element! {
                    Text(
                        content: line.clone(),
                        color: if props.is_selected { theme.highlight_text } else { theme.text_dimmed },
                    )
                }
            }))
            // Deadline row
            Text(
                content: props.deadline_label.clone(),
                color: deadline_color,
                weight: if props.is_overdue && !props.is_selected { Weight::Bold } else { Weight::Normal },
            )
        }
    }
}
