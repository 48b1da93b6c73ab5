//! Graph-description serializers
//!
//! Turns a [`Graph`](crate::core::graph::Graph) into text: Graphviz DOT for the
//! online viewer, a Mermaid flowchart for embedding in Markdown, or a plain
//! drawing for the terminal.

pub mod dot;
pub mod mermaid;
pub mod text;

pub use dot::DotGenerator;
pub use mermaid::MermaidGenerator;
pub use text::TextGenerator;

use crate::core::error::VizError;
use crate::core::graph::Graph;
use std::fmt;
use std::str::FromStr;

/// Supported graph-description formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Graphviz DOT (what the online viewer understands)
    #[default]
    Dot,
    /// Mermaid flowchart
    Mermaid,
    /// Boxes-and-connectors drawing for the console
    Text,
}

impl RenderFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Mermaid => "mmd",
            Self::Text => "txt",
        }
    }

    /// Serialize `graph` in this format
    #[must_use]
    pub fn render(&self, graph: &Graph) -> String {
        match self {
            Self::Dot => DotGenerator::generate(graph),
            Self::Mermaid => MermaidGenerator::generate(graph),
            Self::Text => TextGenerator::generate(graph),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "gv" | "graphviz" => Ok(Self::Dot),
            "mermaid" | "mmd" => Ok(Self::Mermaid),
            "text" | "txt" | "ascii" => Ok(Self::Text),
            _ => Err(VizError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dot => write!(f, "dot"),
            Self::Mermaid => write!(f, "mermaid"),
            Self::Text => write!(f, "text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("DOT".parse::<RenderFormat>().unwrap(), RenderFormat::Dot);
        assert_eq!("gv".parse::<RenderFormat>().unwrap(), RenderFormat::Dot);
        assert_eq!("mmd".parse::<RenderFormat>().unwrap(), RenderFormat::Mermaid);
        assert_eq!("ascii".parse::<RenderFormat>().unwrap(), RenderFormat::Text);
        assert!(matches!(
            "svg".parse::<RenderFormat>(),
            Err(VizError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in [RenderFormat::Dot, RenderFormat::Mermaid, RenderFormat::Text] {
            assert_eq!(format.to_string().parse::<RenderFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_extensions_are_distinct() {
        assert_eq!(RenderFormat::Dot.extension(), "dot");
        assert_eq!(RenderFormat::Mermaid.extension(), "mmd");
        assert_eq!(RenderFormat::Text.extension(), "txt");
    }
}
