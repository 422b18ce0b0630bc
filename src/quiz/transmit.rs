use gloo_net::http::Request;
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;

use super::flow::QuizAnswers;
use crate::config::{get_bot_api_url, LeadConfig};

#[derive(Debug, Error, PartialEq)]
pub enum TransmitError {
    #[error("could not build lead request: {0}")]
    Build(String),
    #[error("lead request failed: {0}")]
    Network(String),
    #[error("lead endpoint answered {0}")]
    Status(u16),
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
    answers: &'a QuizAnswers,
}

#[derive(Serialize)]
struct BotPayload<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Where a finished quiz goes. Only one path is ever taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    Webhook { url: String },
    Bot { endpoint: String, chat_id: String },
    None,
}

impl Delivery {
    pub fn from_config(config: &LeadConfig) -> Self {
        if let Some(url) = &config.webhook_url {
            return Delivery::Webhook { url: url.clone() };
        }
        match (&config.bot_token, &config.chat_id) {
            (Some(token), Some(chat_id)) => Delivery::Bot {
                endpoint: format!("{}/bot{}/sendMessage", get_bot_api_url(), token),
                chat_id: chat_id.clone(),
            },
            _ => Delivery::None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Delivery::Webhook { url } => Some(url.as_str()),
            Delivery::Bot { endpoint, .. } => Some(endpoint.as_str()),
            Delivery::None => None,
        }
    }

    /// JSON body for this path, or nothing when no path is configured.
    pub fn payload(&self, answers: &QuizAnswers, text: &str) -> Option<Value> {
        let body = match self {
            Delivery::Webhook { .. } => serde_json::to_value(WebhookPayload { text, answers }),
            Delivery::Bot { chat_id, .. } => serde_json::to_value(BotPayload {
                chat_id: chat_id.as_str(),
                text,
            }),
            Delivery::None => return None,
        };
        match body {
            Ok(body) => Some(body),
            Err(err) => {
                warn!("lead payload not serializable: {}", err);
                None
            }
        }
    }
}

pub async fn send_lead(url: &str, body: &Value) -> Result<(), TransmitError> {
    let request = Request::post(url)
        .json(body)
        .map_err(|e| TransmitError::Build(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| TransmitError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(TransmitError::Status(response.status()))
    }
}

/// Fire-and-forget. The caller never learns how it went; failures only reach the console.
pub fn dispatch_lead(delivery: &Delivery, answers: &QuizAnswers, text: &str) {
    let (Some(url), Some(body)) = (delivery.url(), delivery.payload(answers, text)) else {
        info!("Lead delivery not configured, skipping");
        return;
    };
    let url = url.to_string();
    spawn_local(async move {
        match send_lead(&url, &body).await {
            Ok(()) => info!("Lead delivered"),
            Err(err) => warn!("{}", err),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::flow::{Question, QuizFlow};
    use serde_json::json;

    static QUESTIONS: &[Question] = &[
        Question {
            key: "budget",
            prompt: "Бюджет",
            options: &["до $1k", "$1k-$5k"],
        },
        Question {
            key: "niche",
            prompt: "Ниша",
            options: &["E-com", "SaaS"],
        },
    ];

    fn finished() -> QuizFlow {
        let mut flow = QuizFlow::new(QUESTIONS);
        flow.select("$1k-$5k").unwrap();
        flow.select("SaaS").unwrap();
        flow
    }

    fn config(webhook: Option<&str>, token: Option<&str>, chat: Option<&str>) -> LeadConfig {
        LeadConfig {
            webhook_url: webhook.map(String::from),
            bot_token: token.map(String::from),
            chat_id: chat.map(String::from),
        }
    }

    #[test]
    fn test_webhook_wins_over_bot() {
        let delivery = Delivery::from_config(&config(Some("https://hook.example/lead"), Some("t"), Some("1")));
        assert_eq!(
            delivery,
            Delivery::Webhook {
                url: "https://hook.example/lead".to_string()
            }
        );
    }

    #[test]
    fn test_bot_needs_token_and_chat() {
        let delivery = Delivery::from_config(&config(None, Some("123:abc"), Some("-100500")));
        assert_eq!(
            delivery,
            Delivery::Bot {
                endpoint: "https://api.telegram.org/bot123:abc/sendMessage".to_string(),
                chat_id: "-100500".to_string(),
            }
        );

        assert_eq!(Delivery::from_config(&config(None, Some("123:abc"), None)), Delivery::None);
        assert_eq!(Delivery::from_config(&config(None, None, Some("-100500"))), Delivery::None);
    }

    #[test]
    fn test_unconfigured_makes_no_request() {
        let flow = finished();
        let delivery = Delivery::from_config(&LeadConfig::default());
        assert_eq!(delivery, Delivery::None);
        assert_eq!(delivery.url(), None);
        assert_eq!(delivery.payload(flow.answers(), &flow.summary_text()), None);
    }

    #[test]
    fn test_webhook_body_has_text_and_answers() {
        let flow = finished();
        let delivery = Delivery::Webhook {
            url: "https://hook.example".to_string(),
        };
        let body = delivery.payload(flow.answers(), &flow.summary_text()).unwrap();
        assert_eq!(
            body,
            json!({
                "text": "budget: $1k-$5k; niche: SaaS",
                "answers": { "budget": "$1k-$5k", "niche": "SaaS" }
            })
        );
    }

    #[test]
    fn test_bot_body_has_chat_and_text() {
        let flow = finished();
        let delivery = Delivery::from_config(&config(None, Some("t"), Some("42")));
        let body = delivery.payload(flow.answers(), &flow.summary_text()).unwrap();
        assert_eq!(
            body,
            json!({ "chat_id": "42", "text": "budget: $1k-$5k; niche: SaaS" })
        );
    }
}
