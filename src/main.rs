use chrono::NaiveDate;
use serde::Serialize;

use fitbit_tabular::{
    util::{DateTimeUtils, FITBIT_DATE_FORMAT},
    Config, FitbitApi, HeartRate, Nutrition, Sleep, SleepListQuery, SleepLogs,
};

fn print_table<T: Serialize>(label: &str, result: fitbit_tabular::Result<T>) {
    match result.map(|rows| serde_json::to_string_pretty(&rows)) {
        Ok(Ok(table)) => println!("{}:\n{}", label, table),
        Ok(Err(e)) => println!("{}: unable to serialize: {}", label, e),
        Err(e) => println!("{}: {}", label, e),
    }
}

fn exit_with(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("usage: fitbit-tabular [END_DATE (YYYY-MM-DD)] [DAYS]");
    std::process::exit(2);
}

fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    config.apply_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let end = match args.first().map(String::as_str) {
        None | Some("today") => DateTimeUtils::today(),
        Some(date) => NaiveDate::parse_from_str(date, FITBIT_DATE_FORMAT)
            .unwrap_or_else(|_| exit_with(&format!("Invalid end date '{}'", date))),
    };
    let days: i64 = match args.get(1) {
        None => 4,
        Some(days) => days
            .parse()
            .unwrap_or_else(|_| exit_with(&format!("Invalid day count '{}'", days))),
    };

    let end_date = DateTimeUtils::date_to_str(end);
    let start_date = DateTimeUtils::days_before(end, days)
        .unwrap_or_else(|| exit_with(&format!("Day count '{}' is out of range", days)));
    let next_day = DateTimeUtils::days_before(end, -1)
        .unwrap_or_else(|| exit_with(&format!("End date '{}' is out of range", end_date)));

    let api = FitbitApi::new(&config);

    let nutrition = Nutrition::new(&api);
    print_table("Water log", nutrition.water_log(&end_date));
    print_table("Water by date", nutrition.by_date("water", &end_date, "1d"));
    print_table(
        "Calories in by range",
        nutrition.date_range("caloriesIn", &start_date, &end_date),
    );

    let heart_rate = HeartRate::new(&api);
    print_table("Heart rate", heart_rate.heart_rate(&end_date, "1d"));
    print_table(
        "Heart rate range",
        heart_rate.heart_rate_range(&start_date, &end_date),
    );

    let sleep = Sleep::new(&api);
    print_table("Sleep stats", sleep.by_date(&end_date));
    print_table(
        "Sleep stats range",
        sleep.by_date_range(&start_date, &end_date),
    );
    print_table(
        "Sleep stats list",
        sleep.list(&SleepListQuery::before(&next_day).with_limit(10)),
    );

    let sleep_logs = SleepLogs::new(&api);
    print_table(
        "Sleep logs",
        sleep_logs
            .by_date_range(&start_date, &end_date)
            .and_then(|raw| SleepLogs::parse(&raw, Default::default())),
    );
}
