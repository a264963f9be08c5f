//! Server Events - 이벤트 시스템
//!
//! 리스너 구독은 동기 (확장의 `on_load` 안에서 호출됨), 발행은 비동기입니다.

use async_trait::async_trait;
use mcengine_foundation::{Error, Result};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

// ============================================================================
// ServerEvent - 서버 이벤트 타입
// ============================================================================

/// 서버 이벤트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerEvent {
    /// 이벤트 타입
    pub event_type: EventType,

    /// 이벤트 데이터
    pub data: Value,

    /// 타임스탬프
    pub timestamp: chrono::DateTime<chrono::Utc>,

    /// 소스 (이벤트 발생 위치)
    pub source: String,
}

impl ServerEvent {
    /// 새 이벤트 생성
    pub fn new(event_type: EventType, data: Value, source: impl Into<String>) -> Self {
        Self {
            event_type,
            data,
            timestamp: chrono::Utc::now(),
            source: source.into(),
        }
    }

    /// 간단한 이벤트 생성
    pub fn simple(event_type: EventType) -> Self {
        Self::new(event_type, Value::Null, "server")
    }
}

/// 이벤트 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    // 서버 이벤트
    ServerLoad,

    // 플레이어 이벤트
    PlayerJoin,
    PlayerQuit,
    PlayerChat,
    CommandPreprocess,

    // 경제 이벤트
    EconomyTransaction,

    // 확장 이벤트
    ExtensionLoaded,
    ExtensionUnloaded,

    // 사용자 정의 이벤트
    Custom,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ServerLoad => write!(f, "server_load"),
            Self::PlayerJoin => write!(f, "player_join"),
            Self::PlayerQuit => write!(f, "player_quit"),
            Self::PlayerChat => write!(f, "player_chat"),
            Self::CommandPreprocess => write!(f, "command_preprocess"),
            Self::EconomyTransaction => write!(f, "economy_transaction"),
            Self::ExtensionLoaded => write!(f, "extension_loaded"),
            Self::ExtensionUnloaded => write!(f, "extension_unloaded"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

// ============================================================================
// EventListener - 이벤트 리스너 트레이트
// ============================================================================

/// 이벤트 리스너 트레이트
#[async_trait]
pub trait EventListener: Send + Sync {
    /// 리스너 이름 (버스 안에서 고유)
    fn name(&self) -> &str;

    /// 관심 있는 이벤트 타입들
    fn interested_events(&self) -> Vec<EventType>;

    /// 이벤트 처리
    async fn handle(&self, event: &ServerEvent);
}

// ============================================================================
// EventBus - 이벤트 버스 (발행/구독)
// ============================================================================

/// 이벤트 버스 - 이벤트 발행 및 리스너 관리
pub struct EventBus {
    /// 브로드캐스트 채널 발신자
    sender: broadcast::Sender<ServerEvent>,

    /// 등록된 리스너
    listeners: RwLock<HashMap<String, Arc<dyn EventListener>>>,

    /// 이벤트 히스토리 (최근 N개)
    history: Mutex<VecDeque<ServerEvent>>,

    /// 히스토리 최대 크기
    history_size: usize,
}

impl EventBus {
    /// 새 이벤트 버스 생성
    pub fn new() -> Self {
        Self::with_capacity(1024, 100)
    }

    /// 용량 지정하여 생성
    pub fn with_capacity(channel_capacity: usize, history_size: usize) -> Self {
        let (sender, _) = broadcast::channel(channel_capacity);
        Self {
            sender,
            listeners: RwLock::new(HashMap::new()),
            history: Mutex::new(VecDeque::with_capacity(history_size)),
            history_size,
        }
    }

    /// 리스너 등록
    ///
    /// 같은 이름의 리스너가 있으면 교체됩니다.
    pub fn register_listener(&self, listener: Arc<dyn EventListener>) -> Result<()> {
        let name = listener.name().to_string();
        if name.trim().is_empty() {
            return Err(Error::Listener("listener name must not be empty".to_string()));
        }

        let mut listeners = self.listeners.write();
        if listeners.insert(name.clone(), listener).is_some() {
            debug!("Replaced event listener: {}", name);
        } else {
            debug!("Registered event listener: {}", name);
        }
        Ok(())
    }

    /// 리스너 제거
    pub fn unregister_listener(&self, name: &str) -> bool {
        self.listeners.write().remove(name).is_some()
    }

    /// 이벤트 발행
    pub async fn publish(&self, event: ServerEvent) {
        debug!("Publishing event: {}", event.event_type);

        // 히스토리에 추가
        {
            let mut history = self.history.lock();
            if history.len() >= self.history_size {
                history.pop_front();
            }
            history.push_back(event.clone());
        }

        // 브로드캐스트 (구독자가 없어도 OK)
        let _ = self.sender.send(event.clone());

        // lock을 잡은 채로 await 하지 않도록 먼저 복사
        let interested: Vec<Arc<dyn EventListener>> = self
            .listeners
            .read()
            .values()
            .filter(|l| l.interested_events().contains(&event.event_type))
            .cloned()
            .collect();

        for listener in interested {
            listener.handle(&event).await;
        }
    }

    /// 이벤트 구독 (스트림 반환)
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    /// 이벤트 히스토리 조회
    pub fn history(&self) -> Vec<ServerEvent> {
        self.history.lock().iter().cloned().collect()
    }

    /// 특정 타입의 이벤트 히스토리 조회
    pub fn history_by_type(&self, event_type: EventType) -> Vec<ServerEvent> {
        self.history
            .lock()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// 등록된 리스너 수
    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// 리스너 등록 여부
    pub fn has_listener(&self, name: &str) -> bool {
        self.listeners.read().contains_key(name)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingListener {
        name: String,
        seen: AtomicUsize,
    }

    #[async_trait]
    impl EventListener for CountingListener {
        fn name(&self) -> &str {
            &self.name
        }

        fn interested_events(&self) -> Vec<EventType> {
            vec![EventType::PlayerJoin]
        }

        async fn handle(&self, _event: &ServerEvent) {
            self.seen.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn listener(name: &str) -> Arc<CountingListener> {
        Arc::new(CountingListener {
            name: name.into(),
            seen: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_event_bus() {
        let bus = EventBus::new();
        let counter = listener("test");
        bus.register_listener(counter.clone()).unwrap();

        assert_eq!(bus.listener_count(), 1);

        bus.publish(ServerEvent::simple(EventType::PlayerJoin)).await;
        bus.publish(ServerEvent::simple(EventType::PlayerQuit)).await;

        assert_eq!(counter.seen.load(Ordering::SeqCst), 1);
        assert_eq!(bus.history().len(), 2);
        assert_eq!(bus.history_by_type(EventType::PlayerQuit).len(), 1);
    }

    #[tokio::test]
    async fn test_history_is_bounded() {
        let bus = EventBus::with_capacity(16, 2);
        for _ in 0..3 {
            bus.publish(ServerEvent::simple(EventType::PlayerChat)).await;
        }
        assert_eq!(bus.history().len(), 2);
    }

    #[test]
    fn test_register_replaces_same_name() {
        let bus = EventBus::new();
        bus.register_listener(listener("same")).unwrap();
        bus.register_listener(listener("same")).unwrap();
        assert_eq!(bus.listener_count(), 1);

        assert!(bus.unregister_listener("same"));
        assert!(!bus.has_listener("same"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let bus = EventBus::new();
        assert!(matches!(
            bus.register_listener(listener(" ")),
            Err(Error::Listener(_))
        ));
    }

    #[tokio::test]
    async fn test_event_subscribe() {
        let bus = Arc::new(EventBus::new());
        let mut receiver = bus.subscribe();

        let publisher = Arc::clone(&bus);
        tokio::spawn(async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
            publisher
                .publish(ServerEvent::simple(EventType::ServerLoad))
                .await;
        });

        let event = receiver.recv().await.unwrap();
        assert_eq!(event.event_type, EventType::ServerLoad);
    }
}
