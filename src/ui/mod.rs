//! Terminal UI layer.
//!
//! - [`event_loop`]: polls the terminal, maps keys to actions, applies them to
//!   the [`App`](crate::core::app::App), and runs the resulting commands.
//! - [`renderer`] and [`bars`]: frame composition and score bars.
//! - [`theme`]: color and style policy.
//! - [`lifecycle`]: raw mode and alternate screen setup/teardown.
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns domain logic and the request lifecycle.

pub mod bars;
pub mod event_loop;
pub mod lifecycle;
pub mod renderer;
pub mod theme;
