//! Turning a session into terminal output.

use tictac_core::{GameSession, Outcome};

/// Output format for positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    /// A 3x3 grid followed by the status line.
    Grid,
    /// One JSON object per position.
    Json,
}

impl Renderer {
    /// Picks the renderer for the `json` flag.
    pub fn new(json: bool) -> Self {
        if json { Renderer::Json } else { Renderer::Grid }
    }

    /// Renders the current position.
    pub fn render(&self, session: &GameSession) -> Result<String, serde_json::Error> {
        match self {
            Renderer::Json => serde_json::to_string(&session.snapshot()),
            Renderer::Grid => {
                let mut out = format!("{}\n{}", session.board(), session.status_message());
                if let Outcome::Won { line, .. } = session.outcome() {
                    let cells: Vec<String> =
                        line.indices().iter().map(|i| (i + 1).to_string()).collect();
                    out.push_str(&format!(" (line {})", cells.join("-")));
                }
                Ok(out)
            }
        }
    }
}
