//! Change notifications for the presentation layer
//!
//! Boards publish a [`CrmEvent`] after every accepted submission so a
//! renderer knows to recompute its views. The bus is a
//! `tokio::sync::broadcast` channel: publishing never blocks and never fails.
//!
//! ```text
//! LeadBoard::submit ──┐
//!                     ├──▶ EventBus::publish() ──▶ broadcast channel ──▶ renderers
//! OrderBoard::submit ─┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let bus = EventBus::new(256);
//! let mut rx = bus.subscribe();
//!
//! bus.publish(CrmEvent::LeadAdded { lead_id: 5, stage: "New".into() });
//!
//! if let Ok(envelope) = rx.recv().await {
//!     println!("{} {}", envelope.event.entity_type(), envelope.event.entity_id());
//! }
//! ```

use crate::core::entity::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// A mutation the presentation layer should react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CrmEvent {
    /// A lead was appended to the lead store
    LeadAdded { lead_id: EntityId, stage: String },

    /// An order was appended to the order store
    OrderAdded {
        order_id: EntityId,
        status: String,
        order_value: String,
    },
}

impl CrmEvent {
    /// Get the entity type this event relates to
    pub fn entity_type(&self) -> &str {
        match self {
            CrmEvent::LeadAdded { .. } => "lead",
            CrmEvent::OrderAdded { .. } => "order",
        }
    }

    /// Get the identifier of the record this event relates to
    pub fn entity_id(&self) -> EntityId {
        match self {
            CrmEvent::LeadAdded { lead_id, .. } => *lead_id,
            CrmEvent::OrderAdded { order_id, .. } => *order_id,
        }
    }
}

/// Envelope wrapping an event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: CrmEvent,
}

impl EventEnvelope {
    pub fn new(event: CrmEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus
///
/// Cheap to clone; every clone publishes into the same channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// The capacity determines how many events can be buffered before
    /// slow receivers start losing events (lagged). Zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of receivers that will see the event; with no
    /// subscribers the event is dropped and 0 is returned.
    pub fn publish(&self, event: CrmEvent) -> usize {
        let envelope = EventEnvelope::new(event);
        self.sender.send(envelope).unwrap_or(0)
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Get the current number of active subscribers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_added_serialization() {
        let event = CrmEvent::LeadAdded {
            lead_id: 5,
            stage: "Qualified".to_string(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "lead_added");
        assert_eq!(json["lead_id"], 5);
        assert_eq!(json["stage"], "Qualified");
    }

    #[test]
    fn test_event_accessors() {
        let event = CrmEvent::OrderAdded {
            order_id: 12,
            status: "Order Received".to_string(),
            order_value: "$1,000".to_string(),
        };
        assert_eq!(event.entity_type(), "order");
        assert_eq!(event.entity_id(), 12);
    }

    #[test]
    fn test_envelope_has_metadata() {
        let envelope = EventEnvelope::new(CrmEvent::LeadAdded {
            lead_id: 1,
            stage: "New".to_string(),
        });
        assert!(!envelope.id.is_nil());
        assert!(envelope.timestamp <= Utc::now());
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::default();
        assert_eq!(bus.receiver_count(), 0);
        let delivered = bus.publish(CrmEvent::LeadAdded {
            lead_id: 1,
            stage: "New".to_string(),
        });
        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn test_subscriber_receives_event() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();

        let delivered = bus.publish(CrmEvent::LeadAdded {
            lead_id: 9,
            stage: "Won".to_string(),
        });
        assert_eq!(delivered, 1);

        let envelope = rx.recv().await.unwrap();
        assert_eq!(envelope.event.entity_id(), 9);
    }

    #[test]
    fn test_clones_share_channel() {
        let bus = EventBus::new(4);
        let clone = bus.clone();
        let mut rx = bus.subscribe();

        clone.publish(CrmEvent::OrderAdded {
            order_id: 3,
            status: "Dispatched".to_string(),
            order_value: "$10".to_string(),
        });

        let envelope = tokio_test::block_on(rx.recv()).unwrap();
        assert_eq!(envelope.event.entity_type(), "order");
    }
}
