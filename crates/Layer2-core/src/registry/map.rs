//! Command Registry - 호스트 소유 명령어 맵
//!
//! 항목은 `"<namespace>:<name>"` 키로 저장되고, bare label(`"<name>"`)은
//! 처음 등록한 항목을 가리키는 별칭 인덱스로 관리됩니다.

use super::entry::{namespaced_key, CommandEntry};
use super::traits::{Command, RegistryEvent};
use crate::host::CommandSender;
use chrono::Utc;
use mcengine_foundation::{Error, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

struct RegisteredCommand {
    command: Arc<dyn Command>,
    entry: CommandEntry,
}

#[derive(Default)]
struct RegistryInner {
    /// 네임스페이스 키 -> 명령어
    entries: HashMap<String, RegisteredCommand>,

    /// bare label -> 네임스페이스 키
    labels: HashMap<String, String>,
}

/// 명령어 레지스트리
///
/// 중복 검사와 삽입은 하나의 write lock 안에서 수행됩니다.
pub struct CommandRegistry {
    inner: RwLock<RegistryInner>,
    event_tx: broadcast::Sender<RegistryEvent>,
}

impl CommandRegistry {
    /// 새 레지스트리 생성
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(64);
        Self {
            inner: RwLock::new(RegistryInner::default()),
            event_tx,
        }
    }

    // ========================================================================
    // 등록 / 해제
    // ========================================================================

    /// 명령어 등록
    ///
    /// 같은 네임스페이스 키가 이미 있으면 `Error::DuplicateCommand`로 거부하고
    /// 레지스트리는 변경하지 않습니다. bare label이 다른 네임스페이스에 이미
    /// 점유되어 있으면 네임스페이스 키로만 등록됩니다.
    pub fn register(&self, namespace: &str, command: Arc<dyn Command>) -> Result<CommandEntry> {
        let name = command.name().to_lowercase();
        let namespace = namespace.to_lowercase();
        validate_part("command name", &name)?;
        validate_part("namespace", &namespace)?;

        let key = namespaced_key(&namespace, &name);
        let entry = {
            let mut inner = self.inner.write();
            if inner.entries.contains_key(&key) {
                warn!("Command '{}' is already registered", key);
                return Err(Error::DuplicateCommand(key));
            }

            let claimed_label = !inner.labels.contains_key(&name);
            if claimed_label {
                inner.labels.insert(name.clone(), key.clone());
            } else {
                debug!("Label '{}' is taken; '{}' reachable only by namespace", name, key);
            }

            let entry = CommandEntry {
                namespace: namespace.clone(),
                name,
                description: command.description().to_string(),
                usage: command.usage().to_string(),
                registered_at: Utc::now(),
                claimed_label,
            };
            inner.entries.insert(
                key.clone(),
                RegisteredCommand {
                    command,
                    entry: entry.clone(),
                },
            );
            entry
        };

        info!("Registered command: {}", key);

        // 구독자가 없어도 OK
        let _ = self.event_tx.send(RegistryEvent::Registered {
            key,
            namespace,
            label_claimed: entry.claimed_label,
        });

        Ok(entry)
    }

    /// 명령어 등록 해제 (네임스페이스 키 또는 bare label)
    pub fn unregister(&self, label: &str) -> Option<Arc<dyn Command>> {
        let removed = {
            let mut inner = self.inner.write();
            let key = resolve_key(&inner, label)?;
            let removed = inner.entries.remove(&key)?;
            if inner.labels.get(&removed.entry.name) == Some(&key) {
                inner.labels.remove(&removed.entry.name);
            }
            removed
        };

        let key = removed.entry.key();
        info!("Unregistered command: {}", key);
        let _ = self.event_tx.send(RegistryEvent::Unregistered { key });

        Some(removed.command)
    }

    // ========================================================================
    // 조회
    // ========================================================================

    /// 명령어 조회 (네임스페이스 키 또는 bare label)
    pub fn get(&self, label: &str) -> Option<Arc<dyn Command>> {
        let inner = self.inner.read();
        let key = resolve_key(&inner, label)?;
        inner.entries.get(&key).map(|r| Arc::clone(&r.command))
    }

    /// 항목 메타데이터 조회
    pub fn entry(&self, label: &str) -> Option<CommandEntry> {
        let inner = self.inner.read();
        let key = resolve_key(&inner, label)?;
        inner.entries.get(&key).map(|r| r.entry.clone())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// 모든 항목 (키 순서)
    pub fn entries(&self) -> Vec<CommandEntry> {
        let inner = self.inner.read();
        let mut entries: Vec<_> = inner.entries.values().map(|r| r.entry.clone()).collect();
        entries.sort_by_key(|e| e.key());
        entries
    }

    /// 모든 네임스페이스 키 (정렬됨)
    pub fn keys(&self) -> Vec<String> {
        let inner = self.inner.read();
        let mut keys: Vec<_> = inner.entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// 변경 구독
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.event_tx.subscribe()
    }

    // ========================================================================
    // 디스패치 / 탭 완성
    // ========================================================================

    /// 한 줄 입력 실행 (`"/label arg1 arg2"`)
    pub fn dispatch(&self, sender: &dyn CommandSender, line: &str) -> Result<bool> {
        let line = line.trim().trim_start_matches('/');
        let mut parts = line.split_whitespace();
        let label = parts
            .next()
            .ok_or_else(|| Error::InvalidInput("empty command line".to_string()))?;
        let args: Vec<String> = parts.map(String::from).collect();

        let command = self
            .get(label)
            .ok_or_else(|| Error::CommandNotFound(label.to_string()))?;

        debug!("{} issued command: /{}", sender.name(), line);
        Ok(command.execute(sender, label, &args))
    }

    /// 부분 입력에 대한 탭 완성
    ///
    /// label만 입력된 경우 label 후보를, 그 외에는 명령어의 완성기 결과를 반환합니다.
    /// 마지막 인자는 비어있을 수 있습니다 (`"pay "` -> `["pay", ""]`).
    pub fn complete(&self, sender: &dyn CommandSender, line: &str) -> Vec<String> {
        let line = line.trim_start().trim_start_matches('/');

        let Some((label, rest)) = line.split_once(' ') else {
            let prefix = line.to_lowercase();
            let inner = self.inner.read();
            let mut labels: Vec<String> = inner
                .labels
                .keys()
                .filter(|l| l.starts_with(&prefix))
                .map(|l| format!("/{}", l))
                .collect();
            labels.sort();
            return labels;
        };

        match self.get(label) {
            Some(command) => {
                let args: Vec<String> = rest.split(' ').map(String::from).collect();
                command.tab_complete(sender, label, &args)
            }
            None => Vec::new(),
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

fn resolve_key(inner: &RegistryInner, label: &str) -> Option<String> {
    let label = label.to_lowercase();
    if inner.entries.contains_key(&label) {
        return Some(label);
    }
    inner.labels.get(&label).cloned()
}

fn validate_part(what: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.contains(':') || value.chars().any(char::is_whitespace) {
        return Err(Error::InvalidInput(format!("invalid {}: '{}'", what, value)));
    }
    Ok(())
}
