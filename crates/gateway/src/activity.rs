//! Bot Framework activity types for `POST /api/messages`.
//!
//! Only the fields the assistant reads or echoes back are modelled;
//! everything else in an inbound activity is ignored.

use serde::{Deserialize, Serialize};

/// A Bot Framework channel account (user or bot).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelAccount {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Conversation reference carried on every activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationAccount {
    #[serde(default)]
    pub id: String,
}

/// An inbound or outbound activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub from: ChannelAccount,
    #[serde(default)]
    pub recipient: ChannelAccount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation: Option<ConversationAccount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members_added: Vec<ChannelAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
}

pub const MESSAGE: &str = "message";
pub const CONVERSATION_UPDATE: &str = "conversationUpdate";

impl Activity {
    /// A text reply addressed back to the sender of `self`.
    pub fn reply(&self, text: impl Into<String>) -> Self {
        Self {
            kind: MESSAGE.into(),
            id: None,
            text: Some(text.into()),
            from: self.recipient.clone(),
            recipient: self.from.clone(),
            conversation: self.conversation.clone(),
            members_added: Vec::new(),
            channel_id: self.channel_id.clone(),
            reply_to_id: self.id.clone(),
        }
    }

    /// Added members other than the bot itself.
    pub fn new_members(&self) -> impl Iterator<Item = &ChannelAccount> {
        self.members_added
            .iter()
            .filter(|m| m.id != self.recipient.id)
    }
}

/// The adapter's answer: the activities to send back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub activities: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_message_activity() {
        let activity: Activity = serde_json::from_value(serde_json::json!({
            "type": "message",
            "id": "act-1",
            "text": "Apa itu OSA?",
            "from": {"id": "user-1", "name": "Budi"},
            "recipient": {"id": "bot"},
            "conversation": {"id": "conv-1"},
            "channelId": "webchat",
            "serviceUrl": "https://example.invalid"
        }))
        .unwrap();

        assert_eq!(activity.kind, MESSAGE);
        assert_eq!(activity.text.as_deref(), Some("Apa itu OSA?"));
        assert_eq!(activity.from.id, "user-1");
    }

    #[test]
    fn reply_swaps_parties() {
        let inbound = Activity {
            kind: MESSAGE.into(),
            id: Some("act-1".into()),
            from: ChannelAccount {
                id: "user-1".into(),
                name: None,
            },
            recipient: ChannelAccount {
                id: "bot".into(),
                name: None,
            },
            ..Default::default()
        };

        let reply = inbound.reply("Halo!");
        assert_eq!(reply.from.id, "bot");
        assert_eq!(reply.recipient.id, "user-1");
        assert_eq!(reply.reply_to_id.as_deref(), Some("act-1"));

        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["type"], "message");
        assert_eq!(json["replyToId"], "act-1");
    }

    #[test]
    fn new_members_skip_the_bot() {
        let activity: Activity = serde_json::from_value(serde_json::json!({
            "type": "conversationUpdate",
            "recipient": {"id": "bot"},
            "membersAdded": [{"id": "bot"}, {"id": "user-1"}, {"id": "user-2"}]
        }))
        .unwrap();

        let ids: Vec<&str> = activity.new_members().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["user-1", "user-2"]);
    }
}
