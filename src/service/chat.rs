//! In-memory chat state: users, sessions, rooms, messages and live
//! WebSocket connections
//!
//! All state is held by explicitly owned stores handed to the HTTP layer as
//! shared data; nothing lives in process-wide globals. Locks are plain
//! `std::sync` primitives and are never held across an await point.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LockResult, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::model::chat::{ChatMessage, ChatRoom, ChatRoomDetails, RegisterRequest};

/// Error type for chat store operations. Messages double as the HTTP
/// `detail` strings.
#[derive(Debug, thiserror::Error)]
pub enum ChatStoreError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Room ID already exists")]
    RoomAlreadyExists,

    #[error("Room not found")]
    RoomNotFound,
}

#[derive(Debug, Clone)]
struct StoredUser {
    username: String,
    // Demonstration only; a real deployment would store a hash
    password: String,
    #[allow(dead_code)]
    created_at: String,
}

#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub email: String,
    pub username: String,
    pub logged_in_at: String,
}

#[derive(Debug, Clone)]
struct StoredRoom {
    name: String,
    description: Option<String>,
    created_at: String,
}

/// Owned in-memory store backing the health chat endpoints
#[derive(Default)]
pub struct ChatStore {
    users: RwLock<HashMap<String, StoredUser>>,
    sessions: RwLock<HashMap<String, ActiveSession>>,
    rooms: RwLock<HashMap<String, StoredRoom>>,
    messages: RwLock<HashMap<String, Vec<ChatMessage>>>,
    session_counter: AtomicU64,
}

// A poisoned lock only means a panic happened mid-write elsewhere; the data
// is still usable for this demonstration store.
fn read_lock<T>(result: LockResult<RwLockReadGuard<'_, T>>) -> RwLockReadGuard<'_, T> {
    result.unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_lock<T>(result: LockResult<RwLockWriteGuard<'_, T>>) -> RwLockWriteGuard<'_, T> {
    result.unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user keyed by email
    pub fn register(&self, request: &RegisterRequest) -> Result<(), ChatStoreError> {
        let mut users = write_lock(self.users.write());
        if users.contains_key(&request.email) {
            return Err(ChatStoreError::EmailAlreadyRegistered);
        }

        users.insert(
            request.email.clone(),
            StoredUser {
                username: request.username.clone(),
                password: request.password.clone(),
                created_at: Utc::now().to_rfc3339(),
            },
        );
        Ok(())
    }

    /// Log in and create a session; returns (session_id, username)
    pub fn login(&self, email: &str, password: &str) -> Result<(String, String), ChatStoreError> {
        let users = read_lock(self.users.read());
        let user = users.get(email).ok_or(ChatStoreError::UserNotFound)?;
        if user.password != password {
            return Err(ChatStoreError::InvalidCredentials);
        }
        let username = user.username.clone();
        drop(users);

        let session_id = format!(
            "session_{}",
            self.session_counter.fetch_add(1, Ordering::Relaxed) + 1
        );
        write_lock(self.sessions.write()).insert(
            session_id.clone(),
            ActiveSession {
                email: email.to_string(),
                username: username.clone(),
                logged_in_at: Utc::now().to_rfc3339(),
            },
        );

        Ok((session_id, username))
    }

    /// Remove a session; returns the username that was logged out
    pub fn logout(&self, session_id: &str) -> Result<String, ChatStoreError> {
        let mut sessions = write_lock(self.sessions.write());
        let session = sessions
            .remove(session_id)
            .ok_or(ChatStoreError::SessionNotFound)?;
        Ok(session.username)
    }

    /// Create a chat room with an empty message list
    pub fn create_room(&self, room: &ChatRoom) -> Result<(), ChatStoreError> {
        let mut rooms = write_lock(self.rooms.write());
        if rooms.contains_key(&room.room_id) {
            return Err(ChatStoreError::RoomAlreadyExists);
        }

        rooms.insert(
            room.room_id.clone(),
            StoredRoom {
                name: room.name.clone(),
                description: room.description.clone(),
                created_at: Utc::now().to_rfc3339(),
            },
        );
        write_lock(self.messages.write()).insert(room.room_id.clone(), Vec::new());
        Ok(())
    }

    pub fn list_rooms(&self) -> Vec<ChatRoomDetails> {
        let rooms = read_lock(self.rooms.read());
        let mut details: Vec<ChatRoomDetails> = rooms
            .iter()
            .map(|(room_id, room)| ChatRoomDetails {
                room_id: room_id.clone(),
                name: room.name.clone(),
                description: room.description.clone(),
                created_at: room.created_at.clone(),
            })
            .collect();
        details.sort_by(|a, b| a.room_id.cmp(&b.room_id));
        details
    }

    pub fn get_room(&self, room_id: &str) -> Result<ChatRoomDetails, ChatStoreError> {
        let rooms = read_lock(self.rooms.read());
        let room = rooms.get(room_id).ok_or(ChatStoreError::RoomNotFound)?;
        Ok(ChatRoomDetails {
            room_id: room_id.to_string(),
            name: room.name.clone(),
            description: room.description.clone(),
            created_at: room.created_at.clone(),
        })
    }

    pub fn room_exists(&self, room_id: &str) -> bool {
        read_lock(self.rooms.read()).contains_key(room_id)
    }

    /// Most recent messages for a room, up to `limit`
    pub fn recent_messages(
        &self,
        room_id: &str,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, ChatStoreError> {
        if !self.room_exists(room_id) {
            return Err(ChatStoreError::RoomNotFound);
        }

        let messages = read_lock(self.messages.read());
        let room_messages = messages.get(room_id).map(Vec::as_slice).unwrap_or(&[]);
        let start = room_messages.len().saturating_sub(limit);
        Ok(room_messages[start..].to_vec())
    }

    /// Append a message to a room via the REST endpoint; the room must exist
    pub fn send_message(
        &self,
        room_id: &str,
        mut message: ChatMessage,
    ) -> Result<(), ChatStoreError> {
        if !self.room_exists(room_id) {
            return Err(ChatStoreError::RoomNotFound);
        }
        if message.timestamp.is_none() {
            message.timestamp = Some(Utc::now().to_rfc3339());
        }
        self.record_message(room_id, message);
        Ok(())
    }

    /// Append a message unconditionally (WebSocket path does not require the
    /// room to have been created over REST first)
    pub fn record_message(&self, room_id: &str, message: ChatMessage) {
        write_lock(self.messages.write())
            .entry(room_id.to_string())
            .or_default()
            .push(message);
    }
}
