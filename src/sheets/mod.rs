use serde_json::{Map, Value};

use crate::{
    config::SheetsSecrets,
    error::{ApiError, Result},
    fitbit::transport::{bearer_header, CurlTransport, Transport},
    logvbln,
};

pub const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// One worksheet row keyed by the worksheet's header row.
pub type Record = Map<String, Value>;

/// Read-only access to the worksheets of one spreadsheet.
pub struct SheetsApi {
    spreadsheet_id: String,
    header: String,
    transport: Box<dyn Transport>,
}

impl SheetsApi {
    const CC: &'static str = "SheetsApi";

    pub fn new(secrets: &SheetsSecrets) -> Self {
        SheetsApi::with_transport(secrets, Box::new(CurlTransport))
    }

    pub fn with_transport(secrets: &SheetsSecrets, transport: Box<dyn Transport>) -> Self {
        Self {
            spreadsheet_id: secrets.spreadsheet_id.clone(),
            header: bearer_header(&secrets.access_token),
            transport,
        }
    }

    fn get_json(&self, url: &str) -> Result<Value> {
        logvbln!("GET {}", url);

        let body = self.transport.get(url, std::slice::from_ref(&self.header))?;
        let json: Value = serde_json::from_slice(&body)
            .map_err(|e| ApiError::MalformedResponse(format!("{}: {}", url, e)))?;

        if let Some(error) = json.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            return Err(ApiError::Service(message.to_string()));
        }

        Ok(json)
    }

    /// Worksheet titles in tab order.
    pub fn worksheet_titles(&self) -> Result<Vec<String>> {
        let url = format!(
            "{}/{}?fields=sheets.properties.title",
            SHEETS_BASE_URL, self.spreadsheet_id
        );
        let json = self.get_json(&url)?;

        json.get("sheets")
            .and_then(Value::as_array)
            .ok_or_else(|| ApiError::MalformedResponse("missing 'sheets' array".to_string()))?
            .iter()
            .map(|sheet| {
                sheet
                    .pointer("/properties/title")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| ApiError::MalformedResponse("worksheet without title".to_string()))
            })
            .collect()
    }

    pub fn worksheet_rows(&self, title: &str) -> Result<Vec<Vec<Value>>> {
        let url = format!(
            "{}/{}/values/{}",
            SHEETS_BASE_URL,
            self.spreadsheet_id,
            urlencoding::encode(title)
        );
        let json = self.get_json(&url)?;

        // An empty worksheet comes back without `values`.
        match json.get("values") {
            None => Ok(Vec::new()),
            Some(values) => serde_json::from_value(values.clone())
                .map_err(|e| ApiError::MalformedResponse(format!("values of '{}': {}", title, e))),
        }
    }

    /// Rows of the worksheet at `index` (tab order) as header-keyed records.
    pub fn get_all_records(&self, index: usize) -> Result<Vec<Record>> {
        let titles = self.worksheet_titles()?;
        let title = titles
            .get(index)
            .ok_or_else(|| ApiError::NoData(format!("worksheet {}", index)))?;

        Ok(rows_to_records(&self.worksheet_rows(title)?))
    }
}

/// First row is the header; short rows are padded with empty cells.
pub fn rows_to_records(rows: &[Vec<Value>]) -> Vec<Record> {
    let Some((header, rows)) = rows.split_first() else {
        return Vec::new();
    };

    let keys: Vec<String> = header.iter().map(cell_to_key).collect();

    rows.iter()
        .map(|row| {
            keys.iter()
                .enumerate()
                .map(|(i, key)| {
                    let cell = row.get(i).map(numericise).unwrap_or_else(|| Value::from(""));
                    (key.clone(), cell)
                })
                .collect()
        })
        .collect()
}

fn cell_to_key(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Integer-looking cells become integers, decimal-looking cells floats.
pub fn numericise(cell: &Value) -> Value {
    let Value::String(s) = cell else {
        return cell.clone();
    };

    let trimmed = s.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::from(i);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => Value::from(f),
        _ => cell.clone(),
    }
}
