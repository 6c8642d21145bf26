//! Best-effort Discord notification side-channel.
//!
//! Notifications are dispatched on a detached task so delivery can never slow
//! down or fail the request that triggered them. Every failure path ends in a
//! log line and nothing else.

use serde_json::json;

use crate::server::model::db::TeamModel;

#[derive(Clone)]
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl Notifier {
    /// Creates a notifier; a `None` webhook URL disables delivery entirely
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
        }
    }

    /// Announces a newly created team.
    ///
    /// Returns immediately; the webhook call runs on its own task and delivery
    /// failures are logged, never propagated to the caller.
    pub fn team_created(&self, team: &TeamModel) {
        let Some(url) = self.webhook_url.clone() else {
            tracing::debug!("No webhook URL configured, skipping team creation notification");
            return;
        };

        let payload = team_created_payload(team);
        let client = self.client.clone();
        let team_name = team.name.clone();

        tokio::spawn(async move {
            if let Err(e) = deliver(&client, &url, &payload).await {
                tracing::warn!(
                    team = %team_name,
                    "Error sending team creation notification: {}",
                    e
                );
            }
        });
    }
}

pub(crate) fn team_created_payload(team: &TeamModel) -> serde_json::Value {
    json!({
        "content": "New team created!",
        "embeds": [{
            "title": format!("New Team: {}", team.name),
            "description": team.description.as_deref().unwrap_or("No description provided"),
            "color": 0x5a8095,
            "fields": [
                {
                    "name": "Location",
                    "value": team.city.as_deref().unwrap_or("Unknown"),
                    "inline": true
                },
                {
                    "name": "Status",
                    "value": if team.is_active { "Active" } else { "Inactive" },
                    "inline": true
                }
            ],
            "thumbnail": {
                "url": team.logo_url.as_deref().unwrap_or("")
            }
        }]
    })
}

pub(crate) async fn deliver(
    client: &reqwest::Client,
    url: &str,
    payload: &serde_json::Value,
) -> Result<(), reqwest::Error> {
    client
        .post(url)
        .json(payload)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}
