//! Mounting a root component into a host document.

use thiserror::Error;

use super::{Document, Element, Node};

/// Attribute set on a mount element once a root is attached.
pub const MOUNTED_ATTR: &str = "data-v-app";

/// Error raised when an application cannot be mounted.
///
/// The document is never modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("mount target `#{id}` not found")]
    TargetNotFound { id: String },
    #[error("mount target `#{id}` matches {count} elements")]
    AmbiguousTarget { id: String, count: usize },
    #[error("an application is already mounted at `#{id}`")]
    AlreadyMounted { id: String },
    #[error("unsupported mount selector `{selector}` (expected `#id`)")]
    UnsupportedSelector { selector: String },
}

/// A renderable root view. Root components take no props.
pub trait Component {
    /// Name reported in the [`RootHandle`].
    fn name(&self) -> &str;

    /// Renders the component's element tree.
    fn render(&self) -> Element;
}

/// The mounted application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootHandle {
    pub mount_id: String,
    pub component: String,
}

/// An application awaiting a mount point.
pub struct App<C: Component> {
    root: C,
}

impl<C: Component> App<C> {
    pub fn new(root: C) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &C {
        &self.root
    }

    /// Mounts the root component at `selector`, which must be `#id`.
    ///
    /// The target element's children are replaced by the rendered root, so
    /// it has exactly one child afterwards. Consumes the app: a root is
    /// mounted at most once.
    pub fn mount(self, document: &mut Document, selector: &str) -> Result<RootHandle, MountError> {
        let id = parse_selector(selector)?;
        match document.count_id(id) {
            0 => {
                return Err(MountError::TargetNotFound { id: id.to_string() });
            }
            1 => {}
            count => {
                return Err(MountError::AmbiguousTarget {
                    id: id.to_string(),
                    count,
                });
            }
        }
        let target = document
            .find_by_id_mut(id)
            .ok_or_else(|| MountError::TargetNotFound { id: id.to_string() })?;
        if target.attr(MOUNTED_ATTR).is_some() {
            return Err(MountError::AlreadyMounted { id: id.to_string() });
        }

        let rendered = self.root.render();
        target.children = vec![Node::Element(rendered)];
        target.set_attr(MOUNTED_ATTR, "");

        tracing::info!(selector = %selector, component = self.root.name(), "mounted application");
        Ok(RootHandle {
            mount_id: id.to_string(),
            component: self.root.name().to_string(),
        })
    }
}

fn parse_selector(selector: &str) -> Result<&str, MountError> {
    let unsupported = || MountError::UnsupportedSelector {
        selector: selector.to_string(),
    };
    let id = selector.strip_prefix('#').ok_or_else(unsupported)?;
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(id)
    } else {
        Err(unsupported())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Hello;

    impl Component for Hello {
        fn name(&self) -> &str {
            "Hello"
        }

        fn render(&self) -> Element {
            Element::new("main").with_class("p-4").with_text("hello")
        }
    }

    fn host(body: &str) -> Document {
        Document::parse(&format!("<html><body>{}</body></html>", body)).unwrap()
    }

    #[test]
    fn test_mount_replaces_children() {
        let mut document = host(r#"<div id="app"><p>Loading</p><p>...</p></div>"#);
        let handle = App::new(Hello).mount(&mut document, "#app").unwrap();
        assert_eq!(
            handle,
            RootHandle {
                mount_id: "app".to_string(),
                component: "Hello".to_string(),
            }
        );
        let app = document.find_by_id("app").unwrap();
        assert_eq!(app.children.len(), 1);
        assert_eq!(app.elements().next().unwrap().name, "main");
        assert_eq!(app.attr(MOUNTED_ATTR), Some(""));
    }

    #[test]
    fn test_missing_target_leaves_document_untouched() {
        let mut document = host(r#"<div id="root"></div>"#);
        let before = document.clone();
        let err = App::new(Hello).mount(&mut document, "#app").unwrap_err();
        assert_eq!(err, MountError::TargetNotFound { id: "app".to_string() });
        assert_eq!(document, before);
    }

    #[test]
    fn test_ambiguous_target() {
        let mut document = host(r#"<div id="app"></div><section><div id="app"></div></section>"#);
        let before = document.clone();
        let err = App::new(Hello).mount(&mut document, "#app").unwrap_err();
        assert_eq!(
            err,
            MountError::AmbiguousTarget {
                id: "app".to_string(),
                count: 2
            }
        );
        assert_eq!(document, before);
    }

    #[test]
    fn test_second_mount_is_rejected() {
        let mut document = host(r#"<div id="app"></div>"#);
        App::new(Hello).mount(&mut document, "#app").unwrap();
        let mounted = document.clone();
        let err = App::new(Hello).mount(&mut document, "#app").unwrap_err();
        assert_eq!(err, MountError::AlreadyMounted { id: "app".to_string() });
        assert_eq!(document, mounted);
    }

    #[test]
    fn test_only_id_selectors() {
        let mut document = host(r#"<div id="app" class="app"></div>"#);
        for selector in [".app", "div", "#", "#app .x", "app"] {
            assert!(matches!(
                App::new(Hello).mount(&mut document, selector),
                Err(MountError::UnsupportedSelector { .. })
            ));
        }
    }
}
