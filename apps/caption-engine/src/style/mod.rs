// Caption styling: safe-area margins and the resolver façade that turns a
// render request into a `RenderedCaptionStyle`.

pub mod resolver;
pub mod safe_area;

pub use resolver::{
    CaptionRenderRequest, ContainerStyle, GlowSpec, PanelStyle, PreparedCaption,
    RenderedCaptionStyle, SizePreference, StyleResolver, TextStyle, VerticalAnchor,
};
pub use safe_area::{resolve_safe_area, SafeArea, SafeAreaInsets};
