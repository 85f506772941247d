//! Pure Google Sheets REST client.
//!
//! Covers the handful of Sheets v4 / Drive v3 calls needed to treat the first
//! worksheet of a spreadsheet as a simple table: read the header row, read a
//! column, append to a column and overwrite single cells.
//!
//! # Example
//!
//! ```rust,ignore
//! use sheets_client::{Credentials, SheetsClient};
//!
//! let credentials = Credentials::from_key_file("credentials.json").await?;
//! let client = SheetsClient::new(credentials);
//!
//! let sheet = client.open("News Media Links").await?;
//! let col = sheet.find_header("Media Links").await?.expect("column exists");
//! let links = sheet.col_values(col).await?;
//! ```

pub mod a1;
pub mod auth;
pub mod error;
pub mod types;

pub use auth::{Credentials, ServiceAccountKey};
pub use error::{Result, SheetsError};
pub use types::{UpdateValuesResponse, ValueRange};

use std::sync::Arc;

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use types::{AppendValuesResponse, DriveFileList, SpreadsheetMetadata};

const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";
const DRIVE_BASE_URL: &str = "https://www.googleapis.com";

#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    credentials: Arc<Credentials>,
    sheets_base_url: String,
    drive_base_url: String,
}

impl SheetsClient {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials: Arc::new(credentials),
            sheets_base_url: SHEETS_BASE_URL.to_string(),
            drive_base_url: DRIVE_BASE_URL.to_string(),
        }
    }

    /// Point both the Sheets and Drive calls at another host (tests, proxies).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into().trim_end_matches('/').to_string();
        self.sheets_base_url = url.clone();
        self.drive_base_url = url;
        self
    }

    /// Open the first worksheet of the spreadsheet with this exact title.
    pub async fn open(&self, spreadsheet_name: &str) -> Result<Worksheet> {
        let id = self.find_spreadsheet_id(spreadsheet_name).await?;
        self.open_by_key(&id).await
    }

    /// Open the first worksheet of a spreadsheet by id.
    pub async fn open_by_key(&self, spreadsheet_id: &str) -> Result<Worksheet> {
        let url = self.sheets_url(&["v4", "spreadsheets", spreadsheet_id])?;
        let metadata: SpreadsheetMetadata = self
            .request(
                Method::GET,
                url,
                &[("fields", "sheets.properties(title,index)")],
                None::<&()>,
            )
            .await?;

        let first = metadata
            .sheets
            .into_iter()
            .min_by_key(|s| s.properties.index)
            .ok_or_else(|| {
                SheetsError::Parse(format!("spreadsheet {} has no sheets", spreadsheet_id))
            })?;

        Ok(Worksheet {
            client: self.clone(),
            spreadsheet_id: spreadsheet_id.to_string(),
            title: first.properties.title,
        })
    }

    /// Resolve a spreadsheet title to its id through a Drive file search.
    pub async fn find_spreadsheet_id(&self, name: &str) -> Result<String> {
        let query = format!(
            "name = '{}' and mimeType = 'application/vnd.google-apps.spreadsheet' and trashed = false",
            name.replace('\\', "\\\\").replace('\'', "\\'")
        );
        let url = parse_url(&format!("{}/drive/v3/files", self.drive_base_url))?;
        let list: DriveFileList = self
            .request(
                Method::GET,
                url,
                &[("q", query.as_str()), ("fields", "files(id,name)")],
                None::<&()>,
            )
            .await?;

        list.files
            .into_iter()
            .next()
            .map(|f| f.id)
            .ok_or_else(|| SheetsError::SpreadsheetNotFound(name.to_string()))
    }

    pub async fn get_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        major_dimension: &str,
    ) -> Result<ValueRange> {
        let url = self.sheets_url(&["v4", "spreadsheets", spreadsheet_id, "values", range])?;
        self.request(
            Method::GET,
            url,
            &[("majorDimension", major_dimension)],
            None::<&()>,
        )
        .await
    }

    /// Append rows after the table found in `range`. Returns the updated range.
    pub async fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<UpdateValuesResponse> {
        let segment = format!("{}:append", range);
        let url = self.sheets_url(&["v4", "spreadsheets", spreadsheet_id, "values", &segment])?;
        let body = ValueRange {
            range: None,
            major_dimension: Some("ROWS".into()),
            values: rows,
        };
        let resp: AppendValuesResponse = self
            .request(
                Method::POST,
                url,
                &[("valueInputOption", "RAW"), ("insertDataOption", "INSERT_ROWS")],
                Some(&body),
            )
            .await?;
        Ok(resp.updates)
    }

    pub async fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<UpdateValuesResponse> {
        let url = self.sheets_url(&["v4", "spreadsheets", spreadsheet_id, "values", range])?;
        let body = ValueRange {
            range: Some(range.to_string()),
            major_dimension: Some("ROWS".into()),
            values: rows,
        };
        self.request(Method::PUT, url, &[("valueInputOption", "RAW")], Some(&body))
            .await
    }

    fn sheets_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = parse_url(&self.sheets_base_url)?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::Config(format!("invalid base URL {}", self.sheets_base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T> {
        let token = self.credentials.access_token().await?;

        let mut builder = self
            .http
            .request(method.clone(), url.clone())
            .bearer_auth(token)
            .query(query);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(%method, url = %url, status = %status, "Google API error");
            return Err(SheetsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json()
            .await
            .map_err(|e| SheetsError::Parse(e.to_string()))
    }
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| SheetsError::Config(format!("invalid URL {}: {}", raw, e)))
}

/// One worksheet of a spreadsheet, addressed by title.
#[derive(Clone)]
pub struct Worksheet {
    client: SheetsClient,
    spreadsheet_id: String,
    title: String,
}

impl std::fmt::Debug for Worksheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worksheet")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl Worksheet {
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Values of one row (1-based), trailing empty cells trimmed by the API.
    pub async fn row_values(&self, row: u32) -> Result<Vec<String>> {
        let range = a1::row_range(&self.title, row);
        let values = self
            .client
            .get_values(&self.spreadsheet_id, &range, "ROWS")
            .await?;
        Ok(values.values.into_iter().next().unwrap_or_default())
    }

    /// Values of one column (1-based), header included.
    pub async fn col_values(&self, col: u32) -> Result<Vec<String>> {
        let range = a1::column_range(&self.title, col);
        let values = self
            .client
            .get_values(&self.spreadsheet_id, &range, "COLUMNS")
            .await?;
        Ok(values.values.into_iter().next().unwrap_or_default())
    }

    /// 1-based column of the header cell equal to `name` in row 1.
    pub async fn find_header(&self, name: &str) -> Result<Option<u32>> {
        let headers = self.row_values(1).await?;
        Ok(header_position(&headers, name))
    }

    /// Append `value` below the last filled cell of column `col`.
    /// Returns the 1-based row that was written.
    pub async fn append_to_column(&self, col: u32, value: &str) -> Result<u32> {
        let range = a1::column_range(&self.title, col);
        let updates = self
            .client
            .append_values(&self.spreadsheet_id, &range, vec![vec![value.to_string()]])
            .await?;

        updates
            .updated_range
            .as_deref()
            .and_then(a1::last_row)
            .ok_or_else(|| SheetsError::Parse(format!("append reply has no row: {:?}", updates)))
    }

    pub async fn update_cell(&self, row: u32, col: u32, value: &str) -> Result<()> {
        let range = a1::cell_range(&self.title, row, col);
        self.client
            .update_values(&self.spreadsheet_id, &range, vec![vec![value.to_string()]])
            .await?;
        Ok(())
    }
}

/// 1-based position of `name` among `headers`.
pub fn header_position(headers: &[String], name: &str) -> Option<u32> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .map(|i| i as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_position() {
        let headers: Vec<String> = ["Media Links", "LinkedIn Content", " LinkedIn Status "]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(header_position(&headers, "Media Links"), Some(1));
        assert_eq!(header_position(&headers, "LinkedIn Status"), Some(3));
        assert_eq!(header_position(&headers, "Twitter Status"), None);
    }

    #[test]
    fn test_sheets_url_encodes_range() {
        let client = SheetsClient::new(Credentials::AccessToken("t".into()))
            .with_base_url("http://localhost:9999/");
        let url = client
            .sheets_url(&["v4", "spreadsheets", "abc", "values", "'News Media Links'!A:A"])
            .unwrap();

        assert_eq!(url.host_str(), Some("localhost"));
        assert!(url.path().starts_with("/v4/spreadsheets/abc/values/"));
        assert!(url.path().contains("News%20Media%20Links"));
    }
}
