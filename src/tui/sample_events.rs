use chrono::{Local, NaiveDate};
use calboard::{
    app::AppState,
    calendar::{Event as CalendarEvent, EventImage},
};

pub fn add_sample_events(app: &mut AppState) {
    let today = Local::now().date_naive();

    let Some(tomorrow) = today.succ_opt() else { return };
    let Some(yesterday) = today.pred_opt() else { return };

    let events: Vec<(&str, NaiveDate, &str, &str, &str, Option<&str>)> = vec![
        ("Morning Standup", today, "09:00", "09:30", "#3788d8", None),
        ("Team Sync", today, "14:00", "15:00", "#33b679", None),
        ("Code Review", tomorrow, "10:00", "11:00", "#e67c73", None),
        ("Product Launch", tomorrow, "15:00", "16:30", "#f6bf26", Some("https://picsum.photos/seed/launch/200")),
        ("Lunch with Team", yesterday, "12:30", "13:30", "#8e24aa", None),
    ];

    for (i, (title, date, start, end, color, image)) in events.into_iter().enumerate() {
        let day = date.format("%Y-%m-%d");
        app.add_event(CalendarEvent {
            id: format!("sample_{}", i),
            title: title.to_string(),
            start: format!("{}T{}", day, start),
            end: format!("{}T{}", day, end),
            color: color.to_string(),
            image: image.map(|url| EventImage::Saved(url.to_string())),
        });
    }

    tracing::info!("Loaded {} sample events", app.store.len());
}
