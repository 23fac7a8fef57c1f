pub mod memory;

use std::fmt;

/// Text slots of the route summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    TotalDistance,
    TotalTime,
    TotalStops,
}

/// List regions that are rebuilt as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Steps,
    Amenities,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    Start,
    End,
    OptimizeFor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Toggle {
    AvoidHighways,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indicator {
    Loading,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub icon: &'static str,
    pub title: String,
    pub detail: Option<String>,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.icon, self.title)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({})", detail)?;
        }
        Ok(())
    }
}

/// The page around the map: summary slots, list regions, form controls, the
/// loading indicator and a surface for user-visible notifications.
pub trait Ui {
    fn set_text(&mut self, slot: Slot, text: &str);
    fn clear_region(&mut self, region: Region);
    fn append_entry(&mut self, region: Region, entry: Entry);
    fn value(&self, input: Input) -> String;
    fn set_value(&mut self, input: Input, value: &str);
    fn checked(&self, toggle: Toggle) -> bool;
    fn set_checked(&mut self, toggle: Toggle, checked: bool);
    fn set_visible(&mut self, indicator: Indicator, visible: bool);
    fn notify(&mut self, message: &str);
}
