use std::collections::HashMap;
use std::fmt;

use super::{Entry, Indicator, Input, Region, Slot, Toggle, Ui};

/// Headless page state. Also records every loading indicator transition and
/// every notification so callers can inspect what a user would have seen.
#[derive(Debug, Clone)]
pub struct MemoryPanel {
    texts: HashMap<Slot, String>,
    regions: HashMap<Region, Vec<Entry>>,
    values: HashMap<Input, String>,
    toggles: HashMap<Toggle, bool>,
    loading: bool,
    loading_transitions: Vec<bool>,
    notifications: Vec<String>,
}

impl Default for MemoryPanel {
    fn default() -> Self {
        let texts = HashMap::from([
            (Slot::TotalDistance, "0 km".to_string()),
            (Slot::TotalTime, "0 min".to_string()),
            (Slot::TotalStops, "0".to_string()),
        ]);
        let values = HashMap::from([(Input::OptimizeFor, "distance".to_string())]);

        Self {
            texts,
            regions: HashMap::new(),
            values,
            toggles: HashMap::new(),
            loading: false,
            loading_transitions: Vec::new(),
            notifications: Vec::new(),
        }
    }
}

impl MemoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, slot: Slot) -> &str {
        self.texts.get(&slot).map(|s| s.as_str()).unwrap_or("")
    }

    pub fn entries(&self, region: Region) -> &[Entry] {
        self.regions.get(&region).map(|e| e.as_slice()).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn loading_transitions(&self) -> &[bool] {
        &self.loading_transitions
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn last_notification(&self) -> Option<&str> {
        self.notifications.last().map(|s| s.as_str())
    }
}

impl Ui for MemoryPanel {
    fn set_text(&mut self, slot: Slot, text: &str) {
        self.texts.insert(slot, text.into());
    }

    fn clear_region(&mut self, region: Region) {
        self.regions.remove(&region);
    }

    fn append_entry(&mut self, region: Region, entry: Entry) {
        self.regions.entry(region).or_default().push(entry);
    }

    fn value(&self, input: Input) -> String {
        self.values.get(&input).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, input: Input, value: &str) {
        self.values.insert(input, value.into());
    }

    fn checked(&self, toggle: Toggle) -> bool {
        self.toggles.get(&toggle).copied().unwrap_or(false)
    }

    fn set_checked(&mut self, toggle: Toggle, checked: bool) {
        self.toggles.insert(toggle, checked);
    }

    fn set_visible(&mut self, indicator: Indicator, visible: bool) {
        match indicator {
            Indicator::Loading => {
                self.loading = visible;
                self.loading_transitions.push(visible);
            }
        }
    }

    fn notify(&mut self, message: &str) {
        tracing::warn!("{}", message);
        self.notifications.push(message.into());
    }
}

impl fmt::Display for MemoryPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "distance: {}  time: {}  stops: {}",
            self.text(Slot::TotalDistance),
            self.text(Slot::TotalTime),
            self.text(Slot::TotalStops)
        )?;

        for (index, step) in self.entries(Region::Steps).iter().enumerate() {
            writeln!(f, "{:>3}. {}", index + 1, step)?;
        }

        Ok(())
    }
}
