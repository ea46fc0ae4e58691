//! Tabbed panel control
//!
//! - `value` - `TabValue`, the identifier every trigger and panel is bound to
//! - `context` - shared selection state, controlled or uncontrolled
//! - `components` - `Tabs`, `TabsList`, `TabsTrigger` and `TabsContent`

pub mod components;
pub mod context;
pub mod value;

pub use components::{Tabs, TabsContent, TabsList, TabsTrigger};
pub use context::{use_tabs_context, SelectionMode, TabsContext};
pub use value::TabValue;
