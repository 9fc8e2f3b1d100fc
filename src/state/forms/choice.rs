//! Single-choice option sets and the selection value type

/// A closed set of options shown as one mutually exclusive group
pub trait Choice: Copy + PartialEq + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];

    /// Label shown on screen and written to the store
    fn label(&self) -> &'static str;

    /// Position of this option within `ALL`
    fn index(&self) -> usize {
        Self::ALL.iter().position(|o| o == self).unwrap_or(0)
    }
}

/// Trip direction relative to the city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Choice for Direction {
    const ALL: &'static [Self] = &[Self::Inbound, Self::Outbound];

    fn label(&self) -> &'static str {
        match self {
            Self::Inbound => "Inbound to City",
            Self::Outbound => "Outbound from City",
        }
    }
}

/// Kind of place at either end of the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceType {
    Home,
    Work,
    School,
    Other,
}

impl Choice for PlaceType {
    const ALL: &'static [Self] = &[Self::Home, Self::Work, Self::School, Self::Other];

    fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Work => "Work",
            Self::School => "School",
            Self::Other => "Other",
        }
    }
}

/// Mode used before or after the surveyed leg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Bus,
    Minibus,
    Trolleybus,
    Taxi,
}

impl Choice for TransferMode {
    const ALL: &'static [Self] = &[Self::Bus, Self::Minibus, Self::Trolleybus, Self::Taxi];

    fn label(&self) -> &'static str {
        match self {
            Self::Bus => "Bus",
            Self::Minibus => "Minibus",
            Self::Trolleybus => "Trolleybus",
            Self::Taxi => "Taxi",
        }
    }
}

/// How often the respondent makes this trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    NotRegular,
    Weekly,
    TwoToThree,
    FiveWeekly,
    Everyday,
}

impl Choice for Frequency {
    const ALL: &'static [Self] = &[
        Self::NotRegular,
        Self::Weekly,
        Self::TwoToThree,
        Self::FiveWeekly,
        Self::Everyday,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::NotRegular => "Not a regular trip",
            Self::Weekly => "Once a week",
            Self::TwoToThree => "2-3 times a week",
            Self::FiveWeekly => "5 times a week",
            Self::Everyday => "Everyday",
        }
    }
}

/// Calendar month, the only part of the date besides the day the form collects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Choice for Month {
    const ALL: &'static [Self] = &[
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }
}

/// At most one selected option of a group.
///
/// Selecting an option replaces the previous one, so exclusivity needs no
/// separate "uncheck the others" step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<T: Choice>(Option<T>);

impl<T: Choice> Default for Selection<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T: Choice> Selection<T> {
    pub fn get(&self) -> Option<T> {
        self.0
    }

    pub fn set(&mut self, value: T) {
        self.0 = Some(value);
    }

    /// Select the option at `index`; out-of-range indices are ignored
    pub fn set_index(&mut self, index: usize) -> bool {
        match T::ALL.get(index) {
            Some(value) => {
                self.set(*value);
                true
            }
            None => false,
        }
    }

    /// Move to the next option, wrapping around. Unset selects the first one.
    pub fn cycle_next(&mut self) {
        let next = match self.0 {
            Some(current) => (current.index() + 1) % T::ALL.len(),
            None => 0,
        };
        self.set_index(next);
    }

    /// Move to the previous option, wrapping around. Unset selects the last one.
    pub fn cycle_prev(&mut self) {
        let prev = match self.0 {
            Some(current) if current.index() > 0 => current.index() - 1,
            _ => T::ALL.len() - 1,
        };
        self.set_index(prev);
    }

    /// Label of the selected option, empty when unset
    pub fn label(&self) -> &'static str {
        self.0.map(|v| v.label()).unwrap_or("")
    }
}

/// Labels of every option in a group, for rendering
pub fn labels<T: Choice>() -> Vec<&'static str> {
    T::ALL.iter().map(|o| o.label()).collect()
}
