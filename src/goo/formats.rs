//! Output formats for built trees
//!
//! Every format serializes a list of top-level [GenericNode](crate::goo::building::GenericNode)s
//! to text:
//! - `xml`: one XML element per node, layout attributes as a `<grid/>` child
//! - `json` and `yaml`: the serde data model of the tree
//! - `treeviz`: one indented line per node, for quick inspection

pub mod data;
pub mod registry;
pub mod treeviz;
pub mod xml;

pub use data::{JsonFormatter, YamlFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use xml::{to_xml_str, XmlFormatter};
