//! Empty state component
//!
//! Displayed when the board has no issues at all.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {}

/// Full-screen message for an empty board
#[component]
pub fn EmptyState(_props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            // Icon in a box
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(
                    content: "i",
                    color: theme.text_dimmed,
                    weight: Weight::Bold,
                )
            }

            Text(
                content: "No Issues",
                color: theme.text,
                weight: Weight::Bold,
            )

            View(margin_top: 1, max_width: 60) {
                Text(
                    content: "Your board is empty.",
                    color: theme.text_dimmed,
                )
            }

            View(margin_top: 2) {
                Text(
                    content: "Press 'n' to create your first issue.",
                    color: theme.text_dimmed,
                )
            }
        }
    }
}
