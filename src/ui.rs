use crate::domain::model::{PanelStatus, PriceQuote, RepoEntry, WeatherReading};

/// Display collaborator for one panel's Ready payload. Kept out of the core
/// so panels and the controller stay independent of any display surface.
pub trait PanelView {
    fn render_ready(&self) -> Vec<String>;
}

impl PanelView for WeatherReading {
    fn render_ready(&self) -> Vec<String> {
        vec![
            format!(
                "{:.1}°C (feels like {:.1}°C)",
                self.temperature_c, self.feels_like_c
            ),
            format!("humidity {:.0}%", self.humidity_percent),
            format!("wind {:.1} km/h", self.wind_speed_kmh),
            format!(
                "at {:.4}, {:.4}",
                self.coordinates.latitude, self.coordinates.longitude
            ),
        ]
    }
}

impl PanelView for PriceQuote {
    fn render_ready(&self) -> Vec<String> {
        let change = match self.change_24h_percent {
            Some(change) => format!("{:+.2}% (24h)", change),
            None => "24h change unknown".to_string(),
        };
        vec![format!("{}: ${:.2}", self.coin_id, self.price_usd), change]
    }
}

impl PanelView for Vec<RepoEntry> {
    fn render_ready(&self) -> Vec<String> {
        if self.is_empty() {
            // Successful-but-empty is its own indication, not an error.
            return vec!["no repositories found".to_string()];
        }
        self.iter()
            .map(|repo| {
                format!(
                    "{} ★{} (updated {})",
                    repo.name,
                    repo.stars,
                    repo.updated_at.format("%Y-%m-%d")
                )
            })
            .collect()
    }
}

pub fn render_panel<T: PanelView>(
    title: &str,
    status: &PanelStatus<T>,
    idle_hint: &str,
) -> String {
    let body = match status {
        PanelStatus::Idle => vec![idle_hint.to_string()],
        PanelStatus::Loading => vec!["loading...".to_string()],
        PanelStatus::Ready(data) => data.render_ready(),
        PanelStatus::Failed(kind) => vec![format!("error: {}", kind)],
    };

    let mut out = format!("== {} ==\n", title);
    for line in body {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
