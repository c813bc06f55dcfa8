// listable-server/tests/echo_ws.rs
// WebSocket 回声通道集成测试: 真实监听端口 + tungstenite 客户端

use futures::{SinkExt, StreamExt};
use listable_server::{Config, DbService, ServerState, api};
use tokio::net::TcpListener;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

type Client =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

async fn connect() -> Client {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = api::app(ServerState::new(Config::from_env(), DbService::new()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let (client, _) = connect_async(format!("ws://{addr}/ws")).await.unwrap();
    client
}

async fn next_text(client: &mut Client) -> String {
    match client.next().await {
        Some(Ok(Message::Text(text))) => text.as_str().to_owned(),
        other => panic!("expected a text frame, got {other:?}"),
    }
}

#[tokio::test]
async fn test_welcome_then_echo() {
    let mut client = connect().await;
    assert_eq!(next_text(&mut client).await, "Welcome to the WebSocket server!");

    client.send(Message::text("hello")).await.unwrap();
    assert_eq!(next_text(&mut client).await, "Server received: hello");

    client.send(Message::text("second")).await.unwrap();
    assert_eq!(next_text(&mut client).await, "Server received: second");
}

#[tokio::test]
async fn test_binary_frame_is_decoded_lossy() {
    let mut client = connect().await;
    next_text(&mut client).await;

    client
        .send(Message::binary(b"caf\xff".to_vec()))
        .await
        .unwrap();
    assert_eq!(next_text(&mut client).await, "Server received: caf\u{FFFD}");
}

#[tokio::test]
async fn test_close_ends_the_session() {
    let mut client = connect().await;
    next_text(&mut client).await;

    client.close(None).await.unwrap();

    // nothing but the closing handshake may follow
    while let Some(frame) = client.next().await {
        match frame {
            Ok(Message::Close(_)) => {}
            Ok(other) => panic!("unexpected frame after close: {other:?}"),
            Err(_) => break,
        }
    }
}
