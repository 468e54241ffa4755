use fitbit_tabular::{Config, SheetsApi};

const WORKSHEETS: [(usize, &str); 2] = [(0, "Sleep logs"), (1, "Stage stats")];

fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    config.apply_logging();

    let Some(secrets) = config.sheets.as_ref() else {
        eprintln!("secrets file has no [sheets] table");
        std::process::exit(1);
    };

    let sheets = SheetsApi::new(secrets);

    for (index, label) in WORKSHEETS {
        match sheets.get_all_records(index) {
            Ok(records) => match serde_json::to_string_pretty(&records) {
                Ok(table) => println!("{}:\n{}", label, table),
                Err(e) => eprintln!("{}: unable to serialize: {}", label, e),
            },
            Err(e) => eprintln!("{}: {}", label, e),
        }
    }
}
