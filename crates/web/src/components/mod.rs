// =============================================================================
// Dexter Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Layout Components
// 2. Common Components
// 3. Form Components
// =============================================================================

pub mod layout;
pub mod common;
pub mod forms;
pub mod footer;
pub mod nav;

pub use layout::Layout;
pub use common::{CheckItem, ErrorDisplay, IconGlyph, PageHeader};
pub use forms::{TextArea, TextInput};
pub use footer::Footer;
pub use nav::SiteNav;
