//! Socket connection status shared with the status indicator.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

/// Socket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionState {
    pub status: ConnectionStatus,
    pub last_error: Option<String>,
    pub attempts: u32,
}

impl ConnectionState {
    pub fn mark_connecting(&mut self) {
        self.status = ConnectionStatus::Connecting;
        self.attempts = self.attempts.saturating_add(1);
    }

    pub fn mark_connected(&mut self) {
        self.status = ConnectionStatus::Connected;
        self.last_error = None;
        self.attempts = 0;
    }

    pub fn mark_error(&mut self, error: String) {
        self.last_error = Some(error);
    }

    pub fn mark_disconnected(&mut self) {
        self.status = ConnectionStatus::Disconnected;
    }

    pub fn label(&self) -> &'static str {
        match self.status {
            ConnectionStatus::Disconnected => "Offline",
            ConnectionStatus::Connecting => "Connecting",
            ConnectionStatus::Connected => "Live",
        }
    }
}
