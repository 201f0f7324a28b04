//! Health chat endpoints: registration, sessions, rooms, message history
//! and the per-room WebSocket relay

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use futures_util::StreamExt;
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::api::error::ApiError;
use crate::model::chat::{
    ChatMessage, ChatRoom, ChatRoomDetails, LoginRequest, LogoutRequest, RegisterRequest,
};
use crate::service::{ChatStore, ConnectionRegistry};

/// Register a new chat user
#[utoipa::path(
    post,
    path = "/api/health-chat/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered"),
        (status = 400, description = "Email already registered")
    ),
    tag = "health-chat"
)]
#[post("/api/health-chat/register")]
pub async fn register(
    store: web::Data<ChatStore>,
    data: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    store.register(&data)?;
    tracing::info!(email = %data.email, "User registered");
    Ok(HttpResponse::Ok().json(json!({
        "message": "User registered successfully",
        "username": data.username
    })))
}

/// Log in and obtain a session id
#[utoipa::path(
    post,
    path = "/api/health-chat/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful"),
        (status = 401, description = "Invalid credentials"),
        (status = 404, description = "User not found")
    ),
    tag = "health-chat"
)]
#[post("/api/health-chat/login")]
pub async fn login(
    store: web::Data<ChatStore>,
    data: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let (session_id, username) = store.login(&data.email, &data.password)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Login successful",
        "session_id": session_id,
        "username": username
    })))
}

/// End a session
#[utoipa::path(
    post,
    path = "/api/health-chat/logout",
    params(LogoutRequest),
    responses(
        (status = 200, description = "Logout successful"),
        (status = 404, description = "Session not found")
    ),
    tag = "health-chat"
)]
#[post("/api/health-chat/logout")]
pub async fn logout(
    store: web::Data<ChatStore>,
    query: web::Query<LogoutRequest>,
) -> Result<HttpResponse, ApiError> {
    let username = store.logout(&query.session_id)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("User {} logged out successfully", username)
    })))
}

/// Create a chat room
#[utoipa::path(
    post,
    path = "/api/health-chat/rooms",
    request_body = ChatRoom,
    responses(
        (status = 200, description = "Room created"),
        (status = 400, description = "Room ID already exists")
    ),
    tag = "health-chat"
)]
#[post("/api/health-chat/rooms")]
pub async fn create_room(
    store: web::Data<ChatStore>,
    data: web::Json<ChatRoom>,
) -> Result<HttpResponse, ApiError> {
    store.create_room(&data)?;
    tracing::info!(room_id = %data.room_id, "Chat room created");
    Ok(HttpResponse::Ok().json(json!({
        "message": "Chat room created",
        "room": {
            "room_id": data.room_id,
            "name": data.name,
            "description": data.description
        }
    })))
}

/// List all chat rooms
#[utoipa::path(
    get,
    path = "/api/health-chat/rooms",
    responses(
        (status = 200, description = "All rooms", body = [ChatRoomDetails])
    ),
    tag = "health-chat"
)]
#[get("/api/health-chat/rooms")]
pub async fn list_rooms(store: web::Data<ChatStore>) -> HttpResponse {
    HttpResponse::Ok().json(json!({"rooms": store.list_rooms()}))
}

/// Fetch a single room
#[utoipa::path(
    get,
    path = "/api/health-chat/rooms/{room_id}",
    params(
        ("room_id" = String, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Room details", body = ChatRoomDetails),
        (status = 404, description = "Room not found")
    ),
    tag = "health-chat"
)]
#[get("/api/health-chat/rooms/{room_id}")]
pub async fn get_room(
    store: web::Data<ChatStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let room = store.get_room(&path)?;
    Ok(HttpResponse::Ok().json(room))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MessageHistoryQuery {
    /// Maximum number of recent messages to return
    pub limit: Option<usize>,
}

/// Recent message history for a room
#[utoipa::path(
    get,
    path = "/api/health-chat/rooms/{room_id}/messages",
    params(
        ("room_id" = String, Path, description = "Room id"),
        MessageHistoryQuery
    ),
    responses(
        (status = 200, description = "Recent messages", body = [ChatMessage]),
        (status = 404, description = "Room not found")
    ),
    tag = "health-chat"
)]
#[get("/api/health-chat/rooms/{room_id}/messages")]
pub async fn room_messages(
    store: web::Data<ChatStore>,
    path: web::Path<String>,
    query: web::Query<MessageHistoryQuery>,
) -> Result<HttpResponse, ApiError> {
    let room_id = path.into_inner();
    let limit = query.limit.unwrap_or(50);
    let messages = store.recent_messages(&room_id, limit)?;
    Ok(HttpResponse::Ok().json(json!({"room_id": room_id, "messages": messages})))
}

/// Post a message to a room over REST
#[utoipa::path(
    post,
    path = "/api/health-chat/rooms/{room_id}/messages",
    request_body = ChatMessage,
    params(
        ("room_id" = String, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Message stored"),
        (status = 404, description = "Room not found")
    ),
    tag = "health-chat"
)]
#[post("/api/health-chat/rooms/{room_id}/messages")]
pub async fn send_message(
    store: web::Data<ChatStore>,
    path: web::Path<String>,
    data: web::Json<ChatMessage>,
) -> Result<HttpResponse, ApiError> {
    let room_id = path.into_inner();
    store.send_message(&room_id, data.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({"message": "Message sent", "room_id": room_id})))
}

/// Inbound WebSocket frame; both fields default when the client omits
/// them, only non-JSON frames are rejected
#[derive(Debug, Deserialize)]
struct IncomingMessage {
    #[serde(default = "default_sender")]
    sender: String,
    #[serde(default)]
    content: String,
}

fn default_sender() -> String {
    "Anonymous".to_string()
}

/// WebSocket relay for a chat room.
///
/// Each text frame is parsed as `{"sender": ..., "content": ...}`, stored
/// and broadcast to every client in the room. Malformed frames get an
/// error frame back on the offending connection only.
#[get("/api/health-chat/ws/{room_id}")]
pub async fn chat_ws(
    req: HttpRequest,
    body: web::Payload,
    path: web::Path<String>,
    store: web::Data<ChatStore>,
    registry: web::Data<ConnectionRegistry>,
) -> Result<HttpResponse, actix_web::Error> {
    let room_id = path.into_inner();
    let (response, session, mut msg_stream) = actix_ws::handle(&req, body)?;

    let connection_id = registry.join(&room_id, session.clone());

    actix_web::rt::spawn(async move {
        let mut session = session;

        while let Some(Ok(msg)) = msg_stream.next().await {
            match msg {
                actix_ws::Message::Text(text) => {
                    match serde_json::from_str::<IncomingMessage>(&text) {
                        Ok(incoming) => {
                            let message = ChatMessage {
                                sender: incoming.sender,
                                content: incoming.content,
                                timestamp: Some(chrono::Utc::now().to_rfc3339()),
                            };
                            store.record_message(&room_id, message.clone());
                            if let Ok(frame) = serde_json::to_string(&message) {
                                registry.broadcast(&room_id, &frame).await;
                            }
                        }
                        Err(e) => {
                            tracing::debug!(
                                room_id = %room_id,
                                error = %e,
                                "Discarding malformed WebSocket frame"
                            );
                            let error_frame =
                                json!({"error": "Invalid message format"}).to_string();
                            if session.text(error_frame).await.is_err() {
                                break;
                            }
                        }
                    }
                }
                actix_ws::Message::Ping(bytes) => {
                    if session.pong(&bytes).await.is_err() {
                        break;
                    }
                }
                actix_ws::Message::Close(_) => break,
                _ => {}
            }
        }

        registry.leave(&room_id, connection_id);

        // Departure notice goes to the remaining clients but is not stored
        let farewell = ChatMessage {
            sender: "system".to_string(),
            content: "A user has left the chat".to_string(),
            timestamp: Some(chrono::Utc::now().to_rfc3339()),
        };
        if let Ok(frame) = serde_json::to_string(&farewell) {
            registry.broadcast(&room_id, &frame).await;
        }

        let _ = session.close(None).await;
    });

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_fields_default_when_omitted() {
        let msg: IncomingMessage = serde_json::from_str(r#"{"content":"hi"}"#).unwrap();
        assert_eq!(msg.sender, "Anonymous");
        assert_eq!(msg.content, "hi");

        // A frame with only a sender is still accepted, with empty content
        let msg: IncomingMessage = serde_json::from_str(r#"{"sender":"parisa"}"#).unwrap();
        assert_eq!(msg.sender, "parisa");
        assert_eq!(msg.content, "");

        assert!(serde_json::from_str::<IncomingMessage>("not json").is_err());
    }
}

/// Configure chat routes. The WebSocket route registers alongside the REST
/// endpoints under the same prefix.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(register)
        .service(login)
        .service(logout)
        .service(create_room)
        .service(list_rooms)
        .service(get_room)
        .service(room_messages)
        .service(send_message)
        .service(chat_ws);
}
