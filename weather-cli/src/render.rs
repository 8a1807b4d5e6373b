use chrono::{Local, Timelike};
use tokio::sync::watch;
use weather_widget_core::{Presentation, Status, WeatherWidget};

/// Submit the widget's input, showing "Loading..." while the lookup is pending.
pub async fn submit_and_print(widget: &mut WeatherWidget) {
    let rx = widget.subscribe();
    let (status, ()) = tokio::join!(widget.submit(), show_loading(rx));
    print_status(&status);
}

async fn show_loading(mut rx: watch::Receiver<Status>) {
    while rx.changed().await.is_ok() {
        if !rx.borrow_and_update().is_loading() {
            return;
        }
        eprintln!("Loading...");
    }
}

fn print_status(status: &Status) {
    match status {
        Status::Idle | Status::Loading => {}
        Status::Error(message) => println!("{message}"),
        Status::Ready(reading) => {
            let now = Local::now();
            for line in lines(&Presentation::render(reading, now.hour())) {
                println!("{line}");
            }
        }
    }
}

fn lines(view: &Presentation) -> [String; 3] {
    [
        format!("Temperature: {}", view.temperature),
        format!("Condition:   {}", view.condition),
        format!("Location:    {}", view.location),
    ]
}
