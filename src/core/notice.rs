#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NoticeKind::Success => "linear-gradient(135deg, #10b981, #059669)",
            NoticeKind::Error => "linear-gradient(135deg, #ef4444, #dc2626)",
            NoticeKind::Info => "linear-gradient(135deg, #00d4ff, #0284c7)",
        }
    }
}

/// A transient toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.kind.as_str())
    }
}

pub const NOTICE_BASE_STYLE: &str = "position: fixed; top: 2rem; right: 2rem; \
padding: 1rem 2rem; border-radius: 10px; color: white; font-weight: 500; \
z-index: 10000; transform: translateX(100%); transition: transform 0.3s ease; \
max-width: 300px; word-wrap: break-word;";

pub const NOTICE_HIDDEN_TRANSFORM: &str = "translateX(100%)";
pub const NOTICE_SHOWN_TRANSFORM: &str = "translateX(0)";
