//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the catalog tabs, the
//! cursor and the view state the transport pushes through `UiBinder`.

mod model;

pub use model::*;
