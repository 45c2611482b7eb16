// Defines the core data structures for the application.

use serde::Deserialize;

use super::status::FetchError;

/// Reported liveness of a backend subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ServiceState {
    Running,
    Stopped,
    Other(String),
}

impl From<String> for ServiceState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "running" => Self::Running,
            "stopped" => Self::Stopped,
            _ => Self::Other(value),
        }
    }
}

impl ServiceState {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServicesStatus {
    pub data_service: ServiceState,
    pub model_service: ServiceState,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusData {
    pub services: ServicesStatus,
}

/// Body of `GET /api/status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusPayload {
    pub data: Option<StatusData>,
    pub status: Option<String>, // e.g., "running"
    pub message: Option<String>,
}

/// What the status section is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Ready(StatusPayload),
    Failed(FetchError),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 4] = [
    FeatureCard {
        title: "Data Analysis",
        description: "View historical data and real-time market data analysis",
    },
    FeatureCard {
        title: "Strategy Management",
        description: "Create, test and deploy trading strategies",
    },
    FeatureCard {
        title: "Backtesting System",
        description: "Test trading strategy performance using historical data",
    },
    FeatureCard {
        title: "Trade Monitoring",
        description: "Monitor trading activity and account status in real time",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_state_accepts_unknown_literals() {
        let state: ServiceState = serde_json::from_str("\"degraded\"").unwrap();
        assert_eq!(state, ServiceState::Other("degraded".to_string()));
        assert!(!state.is_running());
    }

    #[test]
    fn payload_without_data_decodes() {
        let payload: StatusPayload =
            serde_json::from_str(r#"{"status":"running","message":"Backend is operational"}"#)
                .unwrap();
        assert!(payload.data.is_none());
        assert_eq!(payload.status.as_deref(), Some("running"));
    }

    #[test]
    fn payload_with_services_decodes() {
        let payload: StatusPayload = serde_json::from_str(
            r#"{"data":{"services":{"data_service":"running","model_service":"stopped"}}}"#,
        )
        .unwrap();
        let services = payload.data.unwrap().services;
        assert!(services.data_service.is_running());
        assert_eq!(services.model_service, ServiceState::Stopped);
    }

    #[test]
    fn feature_cards_keep_their_text() {
        let cards: Vec<_> = FEATURE_CARDS.iter().map(|c| (c.title, c.description)).collect();
        assert_eq!(
            cards,
            [
                ("Data Analysis", "View historical data and real-time market data analysis"),
                ("Strategy Management", "Create, test and deploy trading strategies"),
                ("Backtesting System", "Test trading strategy performance using historical data"),
                ("Trade Monitoring", "Monitor trading activity and account status in real time"),
            ]
        );
    }

    #[test]
    fn feature_titles_are_distinct() {
        for (i, a) in FEATURE_CARDS.iter().enumerate() {
            for b in &FEATURE_CARDS[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }
}
