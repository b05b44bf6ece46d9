//! Domain logic for connection state and group projection.
//!
//! This module contains pure functions that implement business logic
//! without side effects, making them easy to test.

use serde::Serialize;

use crate::client::{Chat, ClientEvent};

/// Placeholder shown when a group has no name of its own.
pub const UNNAMED_GROUP_PLACEHOLDER: &str = "Group Without Name";

/// A group chat projected down to what the table view needs.
///
/// Derived, never persisted: recomputed from the client's live chat set on
/// every load, and the previous list is discarded rather than merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    /// Stable external identifier.
    pub id: String,
    /// Group name, or [`UNNAMED_GROUP_PLACEHOLDER`] when the source name is empty.
    pub name: String,
    /// Number of participants in the group.
    pub member_count: usize,
}

/// Connection state shared between the client event pump and the HTTP layer.
///
/// Invariant: `qr_payload` is `Some` only while `connected` is false; it is
/// cleared the instant the session becomes ready.
#[derive(Debug, Clone, Default)]
pub struct ConnectionState {
    /// Whether the messaging session is paired and ready.
    pub connected: bool,
    /// Latest pairing code issued but not yet consumed.
    pub qr_payload: Option<String>,
    /// Cached group list from the most recent load.
    pub groups: Vec<GroupSummary>,
}

impl ConnectionState {
    /// Apply a client lifecycle event.
    ///
    /// A new pairing code replaces any previous one. Becoming ready consumes
    /// the pairing code. A disconnect clears both the cached groups and the
    /// pairing code, returning to the awaiting-pairing state.
    pub fn apply(&mut self, event: &ClientEvent) {
        match event {
            ClientEvent::QrIssued(payload) => {
                self.connected = false;
                self.qr_payload = Some(payload.clone());
            }
            ClientEvent::Ready => {
                self.connected = true;
                self.qr_payload = None;
            }
            ClientEvent::Disconnected(_) => {
                self.connected = false;
                self.qr_payload = None;
                self.groups.clear();
            }
        }
    }
}

/// Project the client's chat set down to group summaries.
///
/// Filters to group-type chats only, preserving the client's relative order.
/// Empty names fall back to [`UNNAMED_GROUP_PLACEHOLDER`].
pub fn summarize_groups(chats: &[Chat]) -> Vec<GroupSummary> {
    chats
        .iter()
        .filter(|chat| chat.is_group)
        .map(|chat| GroupSummary {
            id: chat.id.clone(),
            name: if chat.name.is_empty() {
                UNNAMED_GROUP_PLACEHOLDER.to_string()
            } else {
                chat.name.clone()
            },
            member_count: chat.participants.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(id: &str, name: &str, is_group: bool, participants: usize) -> Chat {
        Chat {
            id: id.to_string(),
            name: name.to_string(),
            is_group,
            participants: (0..participants).map(|i| format!("p{i}")).collect(),
        }
    }

    #[test]
    fn test_qr_issued_stores_payload_and_stays_disconnected() {
        // given:
        let mut state = ConnectionState::default();

        // when:
        state.apply(&ClientEvent::QrIssued("code-1".to_string()));

        // then:
        assert!(!state.connected);
        assert_eq!(state.qr_payload.as_deref(), Some("code-1"));
    }

    #[test]
    fn test_repeated_qr_events_replace_payload() {
        // given:
        let mut state = ConnectionState::default();
        state.apply(&ClientEvent::QrIssued("code-1".to_string()));

        // when:
        state.apply(&ClientEvent::QrIssued("code-2".to_string()));

        // then:
        assert_eq!(state.qr_payload.as_deref(), Some("code-2"));
        assert!(!state.connected);
    }

    #[test]
    fn test_ready_sets_connected_and_clears_qr() {
        // given:
        let mut state = ConnectionState::default();
        state.apply(&ClientEvent::QrIssued("code-1".to_string()));

        // when:
        state.apply(&ClientEvent::Ready);

        // then:
        assert!(state.connected);
        assert!(state.qr_payload.is_none());
    }

    #[test]
    fn test_disconnected_clears_groups_and_qr() {
        // given:
        let mut state = ConnectionState {
            connected: true,
            qr_payload: None,
            groups: vec![GroupSummary {
                id: "g1".to_string(),
                name: "Team".to_string(),
                member_count: 3,
            }],
        };

        // when:
        state.apply(&ClientEvent::Disconnected("logout".to_string()));

        // then:
        assert!(!state.connected);
        assert!(state.qr_payload.is_none());
        assert!(state.groups.is_empty());
    }

    #[test]
    fn test_qr_payload_implies_disconnected_for_all_event_sequences() {
        // given: every event sequence of length <= 3
        let events = [
            ClientEvent::QrIssued("code".to_string()),
            ClientEvent::Ready,
            ClientEvent::Disconnected("gone".to_string()),
        ];

        for a in &events {
            for b in &events {
                for c in &events {
                    let mut state = ConnectionState::default();

                    // when:
                    for event in [a, b, c] {
                        state.apply(event);

                        // then:
                        if state.qr_payload.is_some() {
                            assert!(
                                !state.connected,
                                "qr payload held while connected after {event:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_summarize_groups_filters_out_direct_chats() {
        // given:
        let chats = vec![
            chat("g1", "Team", true, 3),
            chat("d1", "Bob", false, 2),
        ];

        // when:
        let groups = summarize_groups(&chats);

        // then:
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id, "g1");
        assert_eq!(groups[0].name, "Team");
        assert_eq!(groups[0].member_count, 3);
    }

    #[test]
    fn test_summarize_groups_preserves_relative_order() {
        // given:
        let chats = vec![
            chat("g2", "Second", true, 1),
            chat("d1", "Alice", false, 2),
            chat("g1", "First", true, 4),
        ];

        // when:
        let groups = summarize_groups(&chats);

        // then:
        let ids: Vec<&str> = groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["g2", "g1"]);
    }

    #[test]
    fn test_empty_group_name_falls_back_to_placeholder() {
        // given:
        let chats = vec![chat("g1", "", true, 5)];

        // when:
        let groups = summarize_groups(&chats);

        // then:
        assert_eq!(groups[0].name, UNNAMED_GROUP_PLACEHOLDER);
    }

    #[test]
    fn test_summarize_groups_with_no_chats_returns_empty() {
        // given:
        let chats: Vec<Chat> = Vec::new();

        // when:
        let groups = summarize_groups(&chats);

        // then:
        assert!(groups.is_empty());
    }
}
