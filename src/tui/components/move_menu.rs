//! Move-destination menu component
//!
//! Centered modal listing the two columns an issue can move to.

use iocraft::prelude::*;

use crate::tui::board::model::MoveMenuState;
use crate::tui::theme::theme;
use crate::types::Status;
use crate::utils::text::truncate_string;

/// Props for the MoveMenu component
#[derive(Default, Props)]
pub struct MoveMenuProps {
    /// Menu state; `None` renders nothing (required because props need Default)
    pub menu: Option<MoveMenuState>,
}

fn destination_label(status: Status) -> &'static str {
    match status {
        Status::Todo => "Move to TO-DO",
        Status::Doing => "Move to DOING",
        Status::Done => "Move to DONE",
    }
}

/// Modal menu for picking a move destination
#[component]
pub fn MoveMenu(props: &MoveMenuProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(menu) = props.menu.clone() else {
        return element! { View() }.into_any();
    };

    let title = truncate_string(&menu.issue.title, 40);

    element! {
        // Modal backdrop
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            View(
                min_width: 30,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                background_color: theme.background,
                padding: 1,
            ) {
                Text(
                    content: title,
                    color: theme.text,
                    weight: Weight::Bold,
                )
                View(height: 1)
                #(menu.options.iter().enumerate().map(|(idx, &status)| {
                    let is_selected = idx == menu.selected;
                    let label = destination_label(status);
                    element! {
                        View(
                            width: 100pct,
                            padding_left: 1,
                            background_color: if is_selected { Some(theme.highlight) } else { None },
                        ) {
                            Text(
                                content: format!("{} {}", if is_selected { ">" } else { " " }, label),
                                color: if is_selected { theme.highlight_text } else { theme.status_color(status) },
                                weight: if is_selected { Weight::Bold } else { Weight::Normal },
                            )
                        }
                    }
                }))
            }
        }
    }
    .into_any()
}
