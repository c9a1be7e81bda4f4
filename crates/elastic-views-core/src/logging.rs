//! Logging and debugging facilities for Elastic Views.
//!
//! Elastic Views uses the `tracing` crate for instrumentation. Install a
//! subscriber in your application to see the events:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("elastic_views=debug")
//!     .init();
//! ```
//!
//! [`ElementTreeDebug`] renders an element hierarchy, including each element's
//! current scale, which is handy when inspecting an animation mid-flight.

use std::fmt::Write as FmtWrite;

use crate::element::{ElementId, ElementRegistry, ElementResult};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Element model target.
    pub const ELEMENT: &str = "elastic_views_core::element";
    /// Frame clock target.
    pub const FRAME_CLOCK: &str = "elastic_views_core::frame_clock";
    /// Animation engine target.
    pub const ANIMATION: &str = "elastic_views::animation";
    /// Click dispatch target.
    pub const DISPATCH: &str = "elastic_views::dispatch";
    /// Widget target.
    pub const WIDGET: &str = "elastic_views::widget";
    /// Configuration target.
    pub const CONFIG: &str = "elastic_views::config";
}

/// Style options for element tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

/// Configuration for element tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show element IDs.
    pub show_ids: bool,
    /// Whether to show the scale and alpha of each element.
    pub show_transform: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: false,
            show_transform: true,
            max_depth: None,
        }
    }
}

/// Renders element trees for debugging.
#[derive(Debug, Clone, Default)]
pub struct ElementTreeDebug {
    options: TreeFormatOptions,
}

impl ElementTreeDebug {
    /// Create a visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format every root element and its subtree.
    pub fn format_all(&self, registry: &ElementRegistry) -> ElementResult<String> {
        let mut output = String::new();
        writeln!(output, "Element Tree ({} elements):", registry.len()).expect("write to String");
        let roots = registry.roots();
        if roots.is_empty() {
            writeln!(output, "  (empty)").expect("write to String");
        }
        for root in roots {
            self.format_into(registry, root, 0, &mut output)?;
        }
        Ok(output)
    }

    /// Format the subtree rooted at `root`.
    pub fn format_subtree(&self, registry: &ElementRegistry, root: ElementId) -> ElementResult<String> {
        let mut output = String::new();
        self.format_into(registry, root, 0, &mut output)?;
        Ok(output)
    }

    fn format_into(
        &self,
        registry: &ElementRegistry,
        id: ElementId,
        depth: usize,
        output: &mut String,
    ) -> ElementResult<()> {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(());
        }

        let name = registry.name(id)?;
        output.push_str(&self.prefix(depth));
        output.push_str(if name.is_empty() { "(unnamed)" } else { name });
        write!(output, " <{:?}>", registry.kind(id)?).expect("write to String");

        if self.options.show_ids {
            write!(output, " [{:?}]", id).expect("write to String");
        }
        if self.options.show_transform {
            let scale = registry.scale(id)?;
            let alpha = registry.alpha(id)?;
            write!(output, " scale={scale} alpha={alpha}").expect("write to String");
        }
        output.push('\n');

        for &child in registry.children(id)? {
            self.format_into(registry, child, depth + 1, output)?;
        }
        Ok(())
    }

    fn prefix(&self, depth: usize) -> String {
        if depth == 0 {
            return String::new();
        }
        let (indent, connector) = match self.options.style {
            TreeStyle::Ascii => ("|  ", "+-- "),
            TreeStyle::Unicode => ("\u{2502}  ", "\u{251c}\u{2500}\u{2500} "),
        };
        let mut prefix = indent.repeat(depth - 1);
        prefix.push_str(connector);
        prefix
    }
}
