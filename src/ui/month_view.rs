use chrono::{Datelike, NaiveDate, Weekday};

use crate::ui::grid::GridRequest;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: Option<NaiveDate>,
    pub is_selected: bool,
    pub is_today: bool,
    pub event_count: usize,
    /// Colour of the first event that starts on this day.
    pub lead_color: Option<String>,
    pub is_current_month: bool,
}

impl DayCell {
    pub fn new(date: Option<NaiveDate>) -> Self {
        Self {
            date,
            is_selected: false,
            is_today: false,
            event_count: 0,
            lead_color: None,
            is_current_month: true,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_events(mut self, count: usize, lead_color: Option<String>) -> Self {
        self.event_count = count;
        self.lead_color = lead_color;
        self
    }

    pub fn with_current_month(mut self, current_month: bool) -> Self {
        self.is_current_month = current_month;
        self
    }

    pub fn has_events(&self) -> bool {
        self.event_count > 0
    }
}

pub fn calculate_layout(request: &GridRequest) -> MonthLayout {
    let year = request.focus.year();
    let month = request.focus.month();

    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthLayout { year, month, weeks: Vec::new() };
    };

    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    let Some(last_day) = next_month_first.and_then(|d| d.pred_opt()) else {
        return MonthLayout { year, month, weeks: Vec::new() };
    };

    let mut weeks = Vec::new();
    let mut current_week = Week { days: Vec::new() };

    let days_before = first_day.weekday().num_days_from_monday() as u64;

    for i in 0..days_before {
        let prev_date = first_day.checked_sub_days(chrono::Days::new(days_before - i));
        current_week.days.push(DayCell::new(prev_date).with_current_month(false));
    }

    let mut current_date = first_day;
    while current_date <= last_day {
        let mut on_day = request
            .events
            .iter()
            .filter(|event| event.start_date() == Some(current_date));
        let lead_color = on_day.next().map(|event| event.color.clone());
        let count = on_day.count() + usize::from(lead_color.is_some());

        let cell = DayCell::new(Some(current_date))
            .with_selected(current_date == request.focus)
            .with_today(current_date == request.today)
            .with_events(count, lead_color)
            .with_current_month(true);

        current_week.days.push(cell);

        if current_date.weekday() == Weekday::Sun {
            weeks.push(current_week);
            current_week = Week { days: Vec::new() };
        }

        let Some(next) = current_date.succ_opt() else { break };
        current_date = next;
    }

    if !current_week.days.is_empty() {
        while current_week.days.len() < 7 {
            current_week.days.push(DayCell::new(Some(current_date)).with_current_month(false));
            let Some(next) = current_date.succ_opt() else { break };
            current_date = next;
        }
        weeks.push(current_week);
    }

    MonthLayout { year, month, weeks }
}
