//! Application bootstrap: mounting a root component into a host document.
//!
//! ```rust
//! use signalwind::mount::{App, Document, SignalShell};
//!
//! let mut document = Document::parse(r#"<body><div id="app"></div></body>"#).unwrap();
//! let handle = App::new(SignalShell).mount(&mut document, "#app").unwrap();
//! assert_eq!(handle.mount_id, "app");
//! assert_eq!(document.find_by_id("app").unwrap().children.len(), 1);
//! ```

mod app;
mod document;
mod shell;

pub use app::{App, Component, MountError, RootHandle, MOUNTED_ATTR};
pub use document::{Document, DocumentError, Element, Node};
pub use shell::SignalShell;
