//! Design-tool plugin adapter.
//!
//! The plugin UI posts messages; [`handle_message`] turns them into calls on a
//! [`ShapeHost`], which wraps whatever canvas API the tool exposes. Every
//! failure is contained here: it is logged and reported to the user with one
//! generic notification.

use crate::defaults;
use crate::errors::HostError;
use crate::superellipse::squircle_path;
use crate::svg::{SquircleProperties, host_svg};
use crate::types::Curvature;

pub const SUCCESS_MESSAGE: &str = "Squircle created successfully!";
pub const FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

/// A message posted by the plugin UI.
#[derive(Clone, Debug, PartialEq)]
pub enum PluginMessage {
    /// `create-squircle`, carrying the slider value when one was sent
    CreateSquircle { curvature: Option<f64> },
    /// `cancel`
    Cancel,
    /// Any other message type
    Unknown(String),
}

impl PluginMessage {
    /// Build a message from its `type` tag and optional curvature field.
    pub fn from_parts(kind: &str, curvature: Option<f64>) -> Self {
        match kind {
            "create-squircle" => PluginMessage::CreateSquircle { curvature },
            "cancel" => PluginMessage::Cancel,
            other => PluginMessage::Unknown(other.to_string()),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            PluginMessage::CreateSquircle { .. } => "create-squircle",
            PluginMessage::Cancel => "cancel",
            PluginMessage::Unknown(kind) => kind,
        }
    }
}

/// Canvas operations the plugin needs from the design tool.
pub trait ShapeHost {
    type Node: Clone;

    /// Import an SVG document as a native node.
    fn create_node_from_svg(&mut self, svg: &str) -> Result<Self::Node, HostError>;
    /// The first selected frame, if any.
    fn selected_frame(&self) -> Option<Self::Node>;
    fn append_to_frame(&mut self, frame: &Self::Node, node: &Self::Node) -> Result<(), HostError>;
    fn append_to_page(&mut self, node: &Self::Node) -> Result<(), HostError>;
    /// Whether the import produced a frame (it does for multi-element SVGs).
    fn is_frame(&self, node: &Self::Node) -> bool;
    fn set_name(&mut self, node: &Self::Node, name: &str);
    fn center_in_viewport(&mut self, node: &Self::Node);
    /// Select the node and scroll the viewport to it.
    fn select_and_focus(&mut self, node: &Self::Node);
    /// Show a transient message to the user.
    fn notify(&mut self, message: &str);
    fn close(&mut self);
}

/// What handling a message led to.
#[derive(Debug)]
pub enum MessageOutcome<N> {
    /// A shape was inserted; carries the node that was selected
    Created(N),
    Closed,
    Ignored,
    /// The request failed and the user was notified
    Failed(HostError),
}

/// Insert a squircle built from `curvature` with the given properties.
///
/// Inside a selected frame the new node is appended to that frame and the
/// frame becomes the selection. Otherwise the node goes onto the page, centred
/// in the viewport, and is itself selected.
pub fn create_squircle<H: ShapeHost>(
    host: &mut H,
    curvature: Curvature,
    props: &SquircleProperties,
) -> Result<H::Node, HostError> {
    let svg = host_svg(&squircle_path(curvature, 0.0), props);
    let node = host.create_node_from_svg(&svg)?;

    let target = match host.selected_frame() {
        Some(frame) => {
            host.append_to_frame(&frame, &node)?;
            frame
        }
        None => {
            if host.is_frame(&node) {
                host.set_name(&node, defaults::NODE_NAME);
            }
            host.append_to_page(&node)?;
            host.center_in_viewport(&node);
            node
        }
    };

    host.select_and_focus(&target);
    Ok(target)
}

/// Dispatch one UI message against `host`.
pub fn handle_message<H: ShapeHost>(host: &mut H, message: &PluginMessage) -> MessageOutcome<H::Node> {
    match message {
        PluginMessage::CreateSquircle { curvature } => {
            match curvature_from_message(*curvature)
                .and_then(|c| create_squircle(host, c, &SquircleProperties::default()))
            {
                Ok(node) => {
                    crate::log::info!("squircle created");
                    host.notify(SUCCESS_MESSAGE);
                    MessageOutcome::Created(node)
                }
                Err(err) => {
                    crate::log::warn!(error = %err, "create-squircle failed");
                    host.notify(FAILURE_MESSAGE);
                    MessageOutcome::Failed(err)
                }
            }
        }
        PluginMessage::Cancel => {
            host.close();
            MessageOutcome::Closed
        }
        PluginMessage::Unknown(_) => {
            crate::log::warn!(kind = message.kind(), "unknown message type");
            MessageOutcome::Ignored
        }
    }
}

fn curvature_from_message(curvature: Option<f64>) -> Result<Curvature, HostError> {
    let value = curvature.ok_or(HostError::MissingCurvature)?;
    Curvature::from_f64(value).map_err(|source| HostError::InvalidCurvature { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Node {
        id: usize,
        frame: bool,
    }

    #[derive(Default)]
    struct MockHost {
        svgs: Vec<String>,
        selected: Option<Node>,
        frame_children: Vec<(usize, usize)>,
        page: Vec<usize>,
        names: Vec<(usize, String)>,
        centred: Vec<usize>,
        focused: Vec<usize>,
        notifications: Vec<String>,
        closed: bool,
        import_as_frame: bool,
        fail_import: bool,
    }

    impl ShapeHost for MockHost {
        type Node = Node;

        fn create_node_from_svg(&mut self, svg: &str) -> Result<Node, HostError> {
            if self.fail_import {
                return Err(HostError::rejected("import failed"));
            }
            self.svgs.push(svg.to_string());
            Ok(Node {
                id: 100 + self.svgs.len(),
                frame: self.import_as_frame,
            })
        }

        fn selected_frame(&self) -> Option<Node> {
            self.selected.clone()
        }

        fn append_to_frame(&mut self, frame: &Node, node: &Node) -> Result<(), HostError> {
            self.frame_children.push((frame.id, node.id));
            Ok(())
        }

        fn append_to_page(&mut self, node: &Node) -> Result<(), HostError> {
            self.page.push(node.id);
            Ok(())
        }

        fn is_frame(&self, node: &Node) -> bool {
            node.frame
        }

        fn set_name(&mut self, node: &Node, name: &str) {
            self.names.push((node.id, name.to_string()));
        }

        fn center_in_viewport(&mut self, node: &Node) {
            self.centred.push(node.id);
        }

        fn select_and_focus(&mut self, node: &Node) {
            self.focused.push(node.id);
        }

        fn notify(&mut self, message: &str) {
            self.notifications.push(message.to_string());
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    #[test]
    fn parses_message_kinds() {
        assert_eq!(
            PluginMessage::from_parts("create-squircle", Some(50.0)),
            PluginMessage::CreateSquircle { curvature: Some(50.0) }
        );
        assert_eq!(PluginMessage::from_parts("cancel", None), PluginMessage::Cancel);
        let unknown = PluginMessage::from_parts("resize", None);
        assert_eq!(unknown, PluginMessage::Unknown("resize".to_string()));
        assert_eq!(unknown.kind(), "resize");
    }

    #[test]
    fn creates_on_page_when_nothing_selected() {
        let mut host = MockHost::default();
        let outcome = handle_message(&mut host, &PluginMessage::CreateSquircle { curvature: Some(50.0) });

        let MessageOutcome::Created(node) = outcome else {
            panic!("expected a created node");
        };
        assert_eq!(node.id, 101);
        assert_eq!(host.page, [101]);
        assert_eq!(host.centred, [101]);
        assert_eq!(host.focused, [101]);
        assert!(host.names.is_empty());
        assert_eq!(host.notifications, [SUCCESS_MESSAGE]);

        let expected = host_svg(&squircle_path(Curvature::saturating(50), 0.0), &SquircleProperties::default());
        assert_eq!(host.svgs, [expected]);
    }

    #[test]
    fn imported_frames_are_named() {
        let mut host = MockHost {
            import_as_frame: true,
            ..MockHost::default()
        };
        handle_message(&mut host, &PluginMessage::CreateSquircle { curvature: Some(10.0) });
        assert_eq!(host.names, [(101, "Squircle".to_string())]);
    }

    #[test]
    fn appends_into_selected_frame() {
        let mut host = MockHost {
            selected: Some(Node { id: 7, frame: true }),
            ..MockHost::default()
        };
        let outcome = handle_message(&mut host, &PluginMessage::CreateSquircle { curvature: Some(75.0) });

        assert!(matches!(outcome, MessageOutcome::Created(Node { id: 7, .. })));
        assert_eq!(host.frame_children, [(7, 101)]);
        assert!(host.page.is_empty());
        assert!(host.centred.is_empty());
        assert_eq!(host.focused, [7]);
    }

    #[test]
    fn missing_curvature_notifies_failure() {
        let mut host = MockHost::default();
        let outcome = handle_message(&mut host, &PluginMessage::CreateSquircle { curvature: None });
        assert!(matches!(outcome, MessageOutcome::Failed(HostError::MissingCurvature)));
        assert!(host.svgs.is_empty());
        assert_eq!(host.notifications, [FAILURE_MESSAGE]);
    }

    #[test]
    fn non_numeric_curvature_notifies_failure() {
        let mut host = MockHost::default();
        let outcome = handle_message(&mut host, &PluginMessage::CreateSquircle { curvature: Some(f64::NAN) });
        assert!(matches!(outcome, MessageOutcome::Failed(HostError::InvalidCurvature { .. })));
        assert_eq!(host.notifications, [FAILURE_MESSAGE]);
    }

    #[test]
    fn host_failure_is_contained() {
        let mut host = MockHost {
            fail_import: true,
            ..MockHost::default()
        };
        let outcome = handle_message(&mut host, &PluginMessage::CreateSquircle { curvature: Some(50.0) });
        assert!(matches!(outcome, MessageOutcome::Failed(HostError::Rejected { .. })));
        assert!(host.focused.is_empty());
        assert_eq!(host.notifications, [FAILURE_MESSAGE]);
    }

    #[test]
    fn cancel_closes_plugin() {
        let mut host = MockHost::default();
        assert!(matches!(handle_message(&mut host, &PluginMessage::Cancel), MessageOutcome::Closed));
        assert!(host.closed);
        assert!(host.notifications.is_empty());
    }

    #[test]
    fn unknown_messages_are_ignored() {
        let mut host = MockHost::default();
        let outcome = handle_message(&mut host, &PluginMessage::Unknown("ping".to_string()));
        assert!(matches!(outcome, MessageOutcome::Ignored));
        assert!(host.notifications.is_empty());
        assert!(!host.closed);
    }
}
