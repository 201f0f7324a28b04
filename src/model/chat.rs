//! Health chat user, room and message types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct LogoutRequest {
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub sender: String,
    pub content: String,
    /// RFC 3339; filled in server-side when absent
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRoom {
    pub room_id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Room plus server-side bookkeeping, as returned by listing endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatRoomDetails {
    pub room_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
}
