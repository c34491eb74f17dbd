//! CLI command implementations

use iocraft::prelude::*;

use crate::error::{Result, TriptychError};
use crate::tui::BoardApp;

/// Launch the board TUI
pub async fn cmd_board() -> Result<()> {
    element!(BoardApp)
        .fullscreen()
        .await
        .map_err(|e| TriptychError::Other(format!("TUI error: {e}")))
}
