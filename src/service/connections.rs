//! Per-room WebSocket connection registry and broadcast fan-out

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use actix_ws::Session;

/// Tracks live WebSocket sessions per chat room.
///
/// Sessions are cloned out of the lock before any send so the lock is never
/// held across an await point. Sessions whose send fails are dropped from
/// the room on the next sweep.
#[derive(Default)]
pub struct ConnectionRegistry {
    rooms: RwLock<HashMap<String, Vec<(u64, Session)>>>,
    next_id: AtomicU64,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a session to a room; returns its connection id
    pub fn join(&self, room_id: &str, session: Session) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut rooms = self
            .rooms
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rooms
            .entry(room_id.to_string())
            .or_default()
            .push((id, session));

        tracing::info!(room_id = %room_id, connection_id = id, "Client joined room");
        id
    }

    /// Remove a session from a room
    pub fn leave(&self, room_id: &str, connection_id: u64) {
        let mut rooms = self
            .rooms
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(sessions) = rooms.get_mut(room_id) {
            sessions.retain(|(id, _)| *id != connection_id);
            if sessions.is_empty() {
                rooms.remove(room_id);
            }
        }

        tracing::info!(room_id = %room_id, connection_id = connection_id, "Client left room");
    }

    /// Send a text frame to every live session in a room, pruning any
    /// session whose connection has closed
    pub async fn broadcast(&self, room_id: &str, message: &str) {
        let sessions: Vec<(u64, Session)> = {
            let rooms = self
                .rooms
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            match rooms.get(room_id) {
                Some(sessions) => sessions.clone(),
                None => return,
            }
        };

        let mut closed = Vec::new();
        for (id, mut session) in sessions {
            if session.text(message).await.is_err() {
                closed.push(id);
            }
        }

        if !closed.is_empty() {
            tracing::debug!(
                room_id = %room_id,
                pruned = closed.len(),
                "Pruned closed WebSocket sessions"
            );
            let mut rooms = self
                .rooms
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(sessions) = rooms.get_mut(room_id) {
                sessions.retain(|(id, _)| !closed.contains(id));
            }
        }
    }
}
