//! Timeout configuration for frames client operations.

use std::time::Duration;

/// Timeout configuration for frames client operations.
///
/// The client itself enforces only `complete_timeout` (the bound on
/// [`FrameAppender::finish`](crate::FrameAppender::finish) when the caller
/// passes it through); the remaining values are advisory for transport
/// implementations, which own the actual sockets.
///
/// # Examples
///
/// ```rust
/// use frames_link::FramesLinkTimeouts;
/// use std::time::Duration;
///
/// // Defaults (recommended for most cases)
/// let timeouts = FramesLinkTimeouts::default();
///
/// // Custom values for high-latency environments
/// let timeouts = FramesLinkTimeouts::builder()
///     .connection_timeout(Duration::from_secs(60))
///     .complete_timeout(Duration::from_secs(120))
///     .build();
///
/// // Aggressive values for local development
/// let timeouts = FramesLinkTimeouts::fast();
/// ```
#[derive(Debug, Clone)]
pub struct FramesLinkTimeouts {
    /// Timeout for establishing connections and opening streams.
    /// Default: 10 seconds
    pub connection_timeout: Duration,

    /// Timeout for sending a single message.
    /// Default: 10 seconds
    pub send_timeout: Duration,

    /// Timeout for receiving a single message.
    /// Default: 30 seconds
    pub receive_timeout: Duration,

    /// Timeout for the backend's final write acknowledgment.
    /// Set to 0 to wait indefinitely.
    /// Default: 30 seconds
    pub complete_timeout: Duration,
}

impl Default for FramesLinkTimeouts {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_secs(10),
            send_timeout: Duration::from_secs(10),
            receive_timeout: Duration::from_secs(30),
            complete_timeout: Duration::from_secs(30),
        }
    }
}

impl FramesLinkTimeouts {
    /// Create a new builder for custom timeout configuration.
    pub fn builder() -> FramesLinkTimeoutsBuilder {
        FramesLinkTimeoutsBuilder::new()
    }

    /// Timeouts optimized for fast local development.
    pub fn fast() -> Self {
        Self {
            connection_timeout: Duration::from_secs(2),
            send_timeout: Duration::from_secs(2),
            receive_timeout: Duration::from_secs(5),
            complete_timeout: Duration::from_secs(5),
        }
    }

    /// Timeouts optimized for high-latency or unreliable networks.
    pub fn relaxed() -> Self {
        Self {
            connection_timeout: Duration::from_secs(30),
            send_timeout: Duration::from_secs(30),
            receive_timeout: Duration::from_secs(120),
            complete_timeout: Duration::from_secs(120),
        }
    }

    /// Check if a duration represents "no timeout" (zero or very large).
    pub fn is_no_timeout(duration: Duration) -> bool {
        duration.is_zero() || duration > Duration::from_secs(86400 * 365) // > 1 year
    }
}

/// Builder for creating custom [`FramesLinkTimeouts`] configurations.
#[derive(Debug, Clone)]
pub struct FramesLinkTimeoutsBuilder {
    timeouts: FramesLinkTimeouts,
}

impl FramesLinkTimeoutsBuilder {
    fn new() -> Self {
        Self {
            timeouts: FramesLinkTimeouts::default(),
        }
    }

    /// Set the connection/stream-open timeout.
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connection_timeout = timeout;
        self
    }

    /// Set the per-message send timeout.
    pub fn send_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.send_timeout = timeout;
        self
    }

    /// Set the per-message receive timeout.
    pub fn receive_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.receive_timeout = timeout;
        self
    }

    /// Set the write-completion timeout.
    /// Set to 0 to wait indefinitely.
    pub fn complete_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.complete_timeout = timeout;
        self
    }

    /// Build the timeout configuration.
    pub fn build(self) -> FramesLinkTimeouts {
        self.timeouts
    }
}
